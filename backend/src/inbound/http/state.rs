//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::LoanApplicationService;
use crate::domain::ports::{LoanApplicationCommand, LoanApplicationQuery, LoanApplicationRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub loan_applications: Arc<dyn LoanApplicationCommand>,
    pub loan_applications_query: Arc<dyn LoanApplicationQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        loan_applications: Arc<dyn LoanApplicationCommand>,
        loan_applications_query: Arc<dyn LoanApplicationQuery>,
    ) -> Self {
        Self {
            loan_applications,
            loan_applications_query,
        }
    }

    /// Wire both ports to one [`LoanApplicationService`] over `repository`.
    pub fn with_repository<R>(repository: Arc<R>) -> Self
    where
        R: LoanApplicationRepository + 'static,
    {
        let service = Arc::new(LoanApplicationService::new(repository));
        Self::new(service.clone(), service)
    }
}
