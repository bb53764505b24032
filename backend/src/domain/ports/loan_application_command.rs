//! Driving port for loan application mutations.
//!
//! Inbound adapters call this port after validation; implementations never
//! see unvalidated input.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{Age, Error, LoanApplication, LoanApplicationId, NewLoanApplication};

/// Result of an update or delete that may legitimately touch nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MutationOutcome {
    /// Whether the mutation took effect.
    pub success: bool,
}

impl MutationOutcome {
    /// The mutation took effect.
    pub const APPLIED: Self = Self { success: true };
    /// Nothing matched, or the write changed nothing.
    pub const NOT_APPLIED: Self = Self { success: false };
}

/// Domain use-case port for creating, updating, and deleting applications.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoanApplicationCommand: Send + Sync {
    /// Store a validated submission and return it with its identifier.
    async fn create(&self, application: NewLoanApplication) -> Result<LoanApplication, Error>;

    /// Replace the stored age of an existing application.
    async fn update_age(&self, id: &LoanApplicationId, age: Age) -> Result<MutationOutcome, Error>;

    /// Remove an application.
    async fn delete(&self, id: &LoanApplicationId) -> Result<MutationOutcome, Error>;
}
