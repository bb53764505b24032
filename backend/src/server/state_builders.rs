//! Builders for HTTP state backed by the configured store.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use loanapp::inbound::http::state::HttpState;
use loanapp::outbound::memory::InMemoryLoanApplicationRepository;
use loanapp::outbound::persistence::DieselLoanApplicationRepository;

use super::ServerConfig;

/// Wire the HTTP ports to PostgreSQL when a pool is configured, otherwise to
/// a process-local store.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => HttpState::with_repository(Arc::new(DieselLoanApplicationRepository::new(
            pool.clone(),
        ))),
        None => {
            warn!("no database configured; loan applications are kept in memory");
            HttpState::with_repository(Arc::new(InMemoryLoanApplicationRepository::new()))
        }
    };
    web::Data::new(state)
}
