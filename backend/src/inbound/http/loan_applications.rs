//! Loan application HTTP handlers.
//!
//! ```text
//! GET    /
//! POST   /loanapp
//! GET    /loanapp/{id}
//! PATCH  /loanapp/{id}
//! DELETE /loanapp/{id}
//! ```
//!
//! Bodies are decoded into a loose field map and handed to the domain
//! validator, so numeric strings and form-encoded booleans are accepted the
//! same way as their JSON counterparts.

use actix_web::http::header::ContentType;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::ports::MutationOutcome;
use crate::domain::validation::{validate_age_update, validate_application};
use crate::domain::{Error, FieldErrors, LoanApplication, RawFields};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{AgeUpdateSchema, ErrorSchema, LoanApplicationSubmissionSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{ID_FIELD, malformed_body_error, parse_loan_application_id};

/// Plain-text usage notice served at `/`.
pub const USAGE_BANNER: &str = "POST to /loanapp your loan application.\n\
GET, PATCH or DELETE to /loanapp/{id} if you have an application id.\n";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Stored loan application as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoanApplicationResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = 22)]
    pub age: i32,
    #[schema(example = 28000.0)]
    pub income: f64,
    #[schema(example = true)]
    pub employed: bool,
}

impl From<LoanApplication> for LoanApplicationResponse {
    fn from(value: LoanApplication) -> Self {
        Self {
            id: value.id.to_string(),
            age: value.age.get(),
            income: value.income.get(),
            employed: value.employed,
        }
    }
}

/// Field-level validation failures, keyed by field name.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationFailureResponse {
    #[schema(value_type = Object)]
    pub messages: FieldErrors,
}

/// Outcome of an update or delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MutationResponse {
    pub success: bool,
}

impl From<MutationOutcome> for MutationResponse {
    fn from(value: MutationOutcome) -> Self {
        Self {
            success: value.success,
        }
    }
}

/// Decode a request body into raw fields.
///
/// An empty body decodes to no fields, so the validator reports every
/// required field as missing.
fn decode_fields(request: &HttpRequest, body: &[u8]) -> Result<RawFields, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(RawFields::new());
    }

    if request.content_type().eq_ignore_ascii_case(FORM_CONTENT_TYPE) {
        let text = std::str::from_utf8(body).map_err(|_| malformed_body_error())?;
        let pairs = web::Query::<Vec<(String, String)>>::from_query(text)
            .map_err(|_| malformed_body_error())?;
        return Ok(pairs
            .into_inner()
            .into_iter()
            .map(|(name, value)| (name, Value::String(value)))
            .collect());
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => Ok(fields),
        _ => Err(malformed_body_error()),
    }
}

fn validation_failure(messages: FieldErrors) -> HttpResponse {
    debug!(
        fields = ?messages.fields().collect::<Vec<_>>(),
        "loan application input rejected"
    );
    HttpResponse::UnprocessableEntity().json(ValidationFailureResponse { messages })
}

/// Usage banner.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Usage notice", body = String, content_type = "text/plain")
    ),
    tags = ["loan applications"],
    operation_id = "home"
)]
#[get("/")]
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(USAGE_BANNER)
}

/// Submit a loan application.
#[utoipa::path(
    post,
    path = "/loanapp",
    description = "Validate and store a loan application. Accepts JSON or URL-encoded form bodies.",
    request_body = LoanApplicationSubmissionSchema,
    responses(
        (status = 200, description = "Stored application", body = LoanApplicationResponse),
        (status = 400, description = "Body is not a JSON object or form", body = ErrorSchema),
        (status = 422, description = "Validation failed", body = ValidationFailureResponse),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["loan applications"],
    operation_id = "createLoanApplication"
)]
#[post("/loanapp")]
pub async fn create_loan_application(
    state: web::Data<HttpState>,
    request: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let fields = decode_fields(&request, &body)?;
    let application = match validate_application(&fields) {
        Ok(application) => application,
        Err(messages) => return Ok(validation_failure(messages)),
    };

    let stored = state.loan_applications.create(application).await?;
    Ok(HttpResponse::Ok().json(LoanApplicationResponse::from(stored)))
}

/// Fetch a loan application by identifier.
#[utoipa::path(
    get,
    path = "/loanapp/{id}",
    params(("id" = String, Path, description = "Loan application identifier (UUID)")),
    responses(
        (status = 200, description = "Stored application", body = LoanApplicationResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No such application", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["loan applications"],
    operation_id = "getLoanApplication"
)]
#[get("/loanapp/{id}")]
pub async fn get_loan_application(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<LoanApplicationResponse>> {
    let id = parse_loan_application_id(&path.into_inner(), ID_FIELD)?;
    let application = state.loan_applications_query.get(&id).await?;
    Ok(web::Json(LoanApplicationResponse::from(application)))
}

/// Replace the age on a stored loan application.
#[utoipa::path(
    patch,
    path = "/loanapp/{id}",
    params(("id" = String, Path, description = "Loan application identifier (UUID)")),
    request_body = AgeUpdateSchema,
    responses(
        (status = 200, description = "Whether a stored age changed", body = MutationResponse),
        (status = 400, description = "Malformed identifier or body", body = ErrorSchema),
        (status = 422, description = "Validation failed", body = ValidationFailureResponse),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["loan applications"],
    operation_id = "updateLoanApplicationAge"
)]
#[patch("/loanapp/{id}")]
pub async fn update_loan_application_age(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    request: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let id = parse_loan_application_id(&path.into_inner(), ID_FIELD)?;
    let fields = decode_fields(&request, &body)?;
    let age = match validate_age_update(&fields) {
        Ok(age) => age,
        Err(messages) => return Ok(validation_failure(messages)),
    };

    let outcome = state.loan_applications.update_age(&id, age).await?;
    Ok(HttpResponse::Ok().json(MutationResponse::from(outcome)))
}

/// Delete a loan application.
#[utoipa::path(
    delete,
    path = "/loanapp/{id}",
    params(("id" = String, Path, description = "Loan application identifier (UUID)")),
    responses(
        (status = 200, description = "Whether the application is gone", body = MutationResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["loan applications"],
    operation_id = "deleteLoanApplication"
)]
#[delete("/loanapp/{id}")]
pub async fn delete_loan_application(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MutationResponse>> {
    let id = parse_loan_application_id(&path.into_inner(), ID_FIELD)?;
    let outcome = state.loan_applications.delete(&id).await?;
    Ok(web::Json(MutationResponse::from(outcome)))
}

#[cfg(test)]
#[path = "loan_applications_tests.rs"]
mod tests;
