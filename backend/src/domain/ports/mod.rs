//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod loan_application_command;
mod loan_application_query;
mod loan_application_repository;

#[cfg(test)]
pub use loan_application_command::MockLoanApplicationCommand;
pub use loan_application_command::{LoanApplicationCommand, MutationOutcome};
#[cfg(test)]
pub use loan_application_query::MockLoanApplicationQuery;
pub use loan_application_query::LoanApplicationQuery;
#[cfg(test)]
pub use loan_application_repository::MockLoanApplicationRepository;
pub use loan_application_repository::{LoanApplicationRepository, LoanApplicationRepositoryError};
