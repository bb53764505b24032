//! Driving port for loan application lookups.

use async_trait::async_trait;

use crate::domain::{Error, LoanApplication, LoanApplicationId};

/// Domain use-case port for reading applications.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoanApplicationQuery: Send + Sync {
    /// Fetch an application, failing with a not-found error when absent.
    async fn get(&self, id: &LoanApplicationId) -> Result<LoanApplication, Error>;
}
