//! Failures reported by the loan application service.
//!
//! `Error` is what handlers return and what clients receive as JSON. It has
//! no knowledge of HTTP; `inbound::http::error` decides the status line.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::TraceId;

/// Failure category, serialised in snake_case as the `code` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Malformed identifier or body.
    InvalidRequest,
    /// No loan application with the requested id.
    NotFound,
    /// The store could not be reached.
    ServiceUnavailable,
    /// Anything else; never shown to clients verbatim.
    InternalError,
}

/// Error value shared by the service and its adapters.
///
/// The trace identifier active when the value is built is recorded, so the
/// JSON body can be matched against the request's log lines.
///
/// # Examples
/// ```
/// use loanapp::domain::{Error, ErrorCode};
/// use serde_json::json;
///
/// let err = Error::invalid_request("id must be a valid UUID")
///     .with_details(json!({ "field": "id" }));
/// assert_eq!(err.code(), ErrorCode::InvalidRequest);
/// assert_eq!(err.to_string(), "id must be a valid UUID");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(default, alias = "trace_id", skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

macro_rules! shorthand {
    ($($(#[$doc:meta])* $name:ident => $code:ident;)+) => {
        $(
            $(#[$doc])*
            pub fn $name(message: impl Into<String>) -> Self {
                Self::new(ErrorCode::$code, message)
            }
        )+
    };
}

impl Error {
    /// Build an error, stamping it with the active [`TraceId`] if there is one.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    shorthand! {
        /// 400-class failure caused by the request itself.
        invalid_request => InvalidRequest;
        /// The addressed loan application does not exist.
        not_found => NotFound;
        /// The backing store is unreachable.
        service_unavailable => ServiceUnavailable;
        /// Unexpected failure.
        internal => InternalError;
    }

    /// Failure category.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Client-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Recorded trace identifier.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Structured context, if any.
    #[must_use]
    pub const fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Replace the recorded trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach machine-readable context, such as the offending field.
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}
