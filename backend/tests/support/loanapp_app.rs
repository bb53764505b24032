//! Shared Actix application wiring for loan application integration suites.
//!
//! Suites drive the real handlers, middleware, and domain service against the
//! in-memory repository, so no database is required.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use loanapp::Trace;
use loanapp::inbound::http::health::{HealthState, live, ready};
use loanapp::inbound::http::loan_applications::{
    create_loan_application, delete_loan_application, get_loan_application, home,
    update_loan_application_age,
};
use loanapp::inbound::http::state::HttpState;
use loanapp::outbound::memory::InMemoryLoanApplicationRepository;

/// Store and state shared across every request in one test.
#[derive(Clone)]
pub(crate) struct TestBackend {
    pub(crate) store: InMemoryLoanApplicationRepository,
    pub(crate) state: web::Data<HttpState>,
    pub(crate) health: web::Data<HealthState>,
}

impl TestBackend {
    pub(crate) fn new() -> Self {
        let store = InMemoryLoanApplicationRepository::new();
        let state = web::Data::new(HttpState::with_repository(Arc::new(store.clone())));
        let health = web::Data::new(HealthState::new());
        health.mark_ready();
        Self {
            store,
            state,
            health,
        }
    }

    /// Build an app exposing the full public route table.
    pub(crate) fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(self.state.clone())
            .app_data(self.health.clone())
            .wrap(Trace)
            .service(home)
            .service(create_loan_application)
            .service(get_loan_application)
            .service(update_loan_application_age)
            .service(delete_loan_application)
            .service(ready)
            .service(live)
    }
}
