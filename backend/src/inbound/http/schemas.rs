//! Documentation-only mirrors of request bodies and domain types.
//!
//! `utoipa` never sees the domain structs directly; these shapes are what the
//! generated OpenAPI document describes.

use utoipa::ToSchema;

/// Documented form of [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// Bad identifier or body.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Unknown loan application.
    #[schema(rename = "not_found")]
    NotFound,
    /// Store unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// Redacted internal failure.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Documented form of [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "fields are only read by the utoipa derive"
)]
pub struct ErrorSchema {
    /// Failure category.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Explanation; `Internal server error` for redacted failures.
    #[schema(example = "loan application 3fa85f64-5717-4562-b3fc-2c963f66afa6 not found")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "9b2f4c1e-7d3a-4b8e-a5f6-0c1d2e3f4a5b")]
    trace_id: Option<String>,
    /// Context such as the rejected field and value.
    details: Option<serde_json::Value>,
}

/// Loan application submission accepted by `POST /loanapp`.
///
/// May also be sent as a URL-encoded form. Numeric strings and `"yes"`/`"no"`
/// style booleans are coerced.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "fields are only read by the utoipa derive"
)]
pub struct LoanApplicationSubmissionSchema {
    /// Applicant age in whole years; must be greater than 0.
    #[schema(example = 22)]
    age: i32,
    /// Applicant income; must be greater than or equal to 0.
    #[schema(example = 28000.0)]
    income: f64,
    /// Whether the applicant is employed.
    #[schema(example = true)]
    employed: bool,
}

/// Age update accepted by `PATCH /loanapp/{id}`.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "fields are only read by the utoipa derive"
)]
pub struct AgeUpdateSchema {
    /// Replacement age; must be greater than 0.
    #[schema(example = 30)]
    age: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn rendered<S: PartialSchema>() -> String {
        serde_json::to_string(&S::schema()).expect("schema renders")
    }

    #[test]
    fn error_code_schema_lists_every_code() {
        let json = rendered::<ErrorCodeSchema>();
        for code in [
            "invalid_request",
            "not_found",
            "service_unavailable",
            "internal_error",
        ] {
            assert!(json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn error_schema_uses_camel_case_trace_id() {
        let json = rendered::<ErrorSchema>();
        assert!(json.contains("traceId"));
        assert!(!json.contains("trace_id"));
    }

    #[test]
    fn submission_schema_lists_all_fields() {
        let json = rendered::<LoanApplicationSubmissionSchema>();
        for field in ["age", "income", "employed"] {
            assert!(json.contains(field), "missing {field}");
        }
    }
}
