//! In-process loan application store.
//!
//! Backs the service when no `database_url` is configured and gives tests a
//! real store to round-trip through. Identifiers are generated here the same
//! way PostgreSQL generates them (random v4 UUIDs). Contents are lost when
//! the process exits.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::ports::{LoanApplicationRepository, LoanApplicationRepositoryError};
use crate::domain::{Age, LoanApplication, LoanApplicationId, NewLoanApplication};

/// Mutex-guarded map implementing the `LoanApplicationRepository` port.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLoanApplicationRepository {
    records: Arc<Mutex<HashMap<LoanApplicationId, LoanApplication>>>,
}

impl InMemoryLoanApplicationRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored applications.
    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    /// True when nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }
}

#[async_trait]
impl LoanApplicationRepository for InMemoryLoanApplicationRepository {
    async fn insert(
        &self,
        application: &NewLoanApplication,
    ) -> Result<LoanApplication, LoanApplicationRepositoryError> {
        let mut records = self.records.lock().await;
        let mut id = LoanApplicationId::random();
        while records.contains_key(&id) {
            id = LoanApplicationId::random();
        }
        let stored = LoanApplication::from_new(id, *application);
        records.insert(id, stored);
        Ok(stored)
    }

    async fn find_by_id(
        &self,
        id: &LoanApplicationId,
    ) -> Result<Option<LoanApplication>, LoanApplicationRepositoryError> {
        Ok(self.records.lock().await.get(id).copied())
    }

    async fn update_age(
        &self,
        id: &LoanApplicationId,
        age: Age,
    ) -> Result<u64, LoanApplicationRepositoryError> {
        let mut records = self.records.lock().await;
        match records.get_mut(id) {
            Some(record) if record.age != age => {
                record.age = age;
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn delete(&self, id: &LoanApplicationId) -> Result<u64, LoanApplicationRepositoryError> {
        let removed = self.records.lock().await.remove(id);
        Ok(u64::from(removed.is_some()))
    }
}
