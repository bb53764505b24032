//! Driven port for loan application persistence.
//!
//! Adapters store and fetch loan applications by identifier. They report
//! affected row counts for mutations and leave the interpretation of a zero
//! count to the domain service.

use async_trait::async_trait;

use crate::domain::{Age, LoanApplication, LoanApplicationId, NewLoanApplication};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by loan application repository adapters.
    pub enum LoanApplicationRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "loan application repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "loan application repository query failed: {message}",
    }
}

/// Storage for loan applications keyed by store-assigned identifiers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoanApplicationRepository: Send + Sync {
    /// Persist a validated submission and return it with its new identifier.
    async fn insert(
        &self,
        application: &NewLoanApplication,
    ) -> Result<LoanApplication, LoanApplicationRepositoryError>;

    /// Fetch a loan application by identifier.
    async fn find_by_id(
        &self,
        id: &LoanApplicationId,
    ) -> Result<Option<LoanApplication>, LoanApplicationRepositoryError>;

    /// Set the age of an application whose stored age differs from `age`.
    ///
    /// Returns the number of records modified; writing the value already
    /// stored modifies nothing.
    async fn update_age(
        &self,
        id: &LoanApplicationId,
        age: Age,
    ) -> Result<u64, LoanApplicationRepositoryError>;

    /// Remove an application, returning the number of records removed.
    async fn delete(&self, id: &LoanApplicationId) -> Result<u64, LoanApplicationRepositoryError>;
}
