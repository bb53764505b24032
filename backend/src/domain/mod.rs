//! Domain primitives, ports, and services.
//!
//! Purpose: define the strongly typed loan application model, the validator
//! that produces it from loose input, and the record service that stores it.
//! Nothing here depends on HTTP or on a particular database.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `LoanApplication`, `NewLoanApplication`, `Age`, `Income`,
//!   `LoanApplicationId`: the entity and its field types.
//! - `validation`: decode-then-validate entry points.
//! - `LoanApplicationService`: record service implementing the ports.

pub mod error;
pub mod loan_application;
pub mod loan_application_service;
pub mod ports;
pub mod trace_id;
pub mod validation;

pub use self::error::{Error, ErrorCode};
pub use self::loan_application::{
    Age, Income, LoanApplication, LoanApplicationId, LoanApplicationValidationError,
    NewLoanApplication,
};
pub use self::loan_application_service::LoanApplicationService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::{FieldErrors, RawFields};
