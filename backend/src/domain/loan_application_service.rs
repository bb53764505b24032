//! Loan application domain service.
//!
//! Implements the command and query driving ports on top of a
//! [`LoanApplicationRepository`]. Logical misses (unknown identifiers,
//! writes that change nothing) become typed outcomes; repository failures
//! become domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    LoanApplicationCommand, LoanApplicationQuery, LoanApplicationRepository,
    LoanApplicationRepositoryError, MutationOutcome,
};
use crate::domain::{Age, Error, LoanApplication, LoanApplicationId, NewLoanApplication};

/// Record service implementing the loan application driving ports.
#[derive(Clone)]
pub struct LoanApplicationService<R> {
    repository: Arc<R>,
}

impl<R> LoanApplicationService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> LoanApplicationService<R>
where
    R: LoanApplicationRepository,
{
    fn map_repository_error(error: LoanApplicationRepositoryError) -> Error {
        match error {
            LoanApplicationRepositoryError::Connection { message } => Error::service_unavailable(
                format!("loan application repository unavailable: {message}"),
            ),
            LoanApplicationRepositoryError::Query { message } => {
                Error::internal(format!("loan application repository error: {message}"))
            }
        }
    }

    async fn find(&self, id: &LoanApplicationId) -> Result<Option<LoanApplication>, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)
    }
}

#[async_trait]
impl<R> LoanApplicationCommand for LoanApplicationService<R>
where
    R: LoanApplicationRepository,
{
    async fn create(&self, application: NewLoanApplication) -> Result<LoanApplication, Error> {
        let stored = self
            .repository
            .insert(&application)
            .await
            .map_err(Self::map_repository_error)?;
        info!(loan_application_id = %stored.id, "loan application created");
        Ok(stored)
    }

    async fn update_age(&self, id: &LoanApplicationId, age: Age) -> Result<MutationOutcome, Error> {
        let modified = self
            .repository
            .update_age(id, age)
            .await
            .map_err(Self::map_repository_error)?;
        if modified == 0 {
            debug!(loan_application_id = %id, "age update modified nothing");
            return Ok(MutationOutcome::NOT_APPLIED);
        }
        Ok(MutationOutcome::APPLIED)
    }

    async fn delete(&self, id: &LoanApplicationId) -> Result<MutationOutcome, Error> {
        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(Self::map_repository_error)?;
        // The follow-up read is a post-condition check, not a transaction.
        let remaining = self.find(id).await?;
        if removed == 0 || remaining.is_some() {
            debug!(
                loan_application_id = %id,
                removed,
                still_present = remaining.is_some(),
                "delete did not take effect"
            );
            return Ok(MutationOutcome::NOT_APPLIED);
        }
        info!(loan_application_id = %id, "loan application deleted");
        Ok(MutationOutcome::APPLIED)
    }
}

#[async_trait]
impl<R> LoanApplicationQuery for LoanApplicationService<R>
where
    R: LoanApplicationRepository,
{
    async fn get(&self, id: &LoanApplicationId) -> Result<LoanApplication, Error> {
        self.find(id).await?.ok_or_else(|| {
            Error::not_found(format!("loan application {id} not found"))
        })
    }
}

#[cfg(test)]
#[path = "loan_application_service_tests.rs"]
mod tests;
