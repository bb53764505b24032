//! Shared validation helpers for inbound HTTP adapters.
//!
//! Body validation lives in the domain (`domain::validation`) because its
//! messages are part of the API contract. This module only covers request
//! plumbing such as path identifiers.

use serde_json::json;

use crate::domain::{Error, LoanApplicationId};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidUuid,
    MalformedBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::MalformedBody => "malformed_body",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Path segment carrying the loan application identifier.
pub(crate) const ID_FIELD: FieldName = FieldName::new("id");

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidUuid.as_str(),
    }))
}

/// Body that is neither a JSON object nor a URL-encoded form.
pub(crate) fn malformed_body_error() -> Error {
    Error::invalid_request("request body must be a JSON object or a URL-encoded form")
        .with_details(json!({ "code": ErrorCode::MalformedBody.as_str() }))
}

/// Parse a loan application identifier from a path segment.
pub(crate) fn parse_loan_application_id(
    value: &str,
    field: FieldName,
) -> Result<LoanApplicationId, Error> {
    value
        .parse::<LoanApplicationId>()
        .map_err(|_| invalid_uuid_error(field, value))
}
