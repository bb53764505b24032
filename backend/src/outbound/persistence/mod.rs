//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and the table definition (`schema.rs`)
//! stay private to this module.
//!
//! # Example
//!
//! ```ignore
//! use loanapp::outbound::persistence::{DbPool, DieselLoanApplicationRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/loanapp")).await?;
//! let repo = DieselLoanApplicationRepository::new(pool);
//! ```

mod diesel_loan_application_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_loan_application_repository::DieselLoanApplicationRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DEFAULT_MAX_SIZE, DbPool, PoolConfig, PoolError};
