//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint and the schema wrappers that
//! document domain types without coupling them to utoipa. The document backs
//! Swagger UI in debug builds and is exported by `openapi-dump`.

use crate::inbound::http::loan_applications::{
    LoanApplicationResponse, MutationResponse, ValidationFailureResponse,
};
use crate::inbound::http::schemas::{
    AgeUpdateSchema, ErrorCodeSchema, ErrorSchema, LoanApplicationSubmissionSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Loan application API",
        description = "Submit, fetch, amend, and withdraw loan applications."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::loan_applications::home,
        crate::inbound::http::loan_applications::create_loan_application,
        crate::inbound::http::loan_applications::get_loan_application,
        crate::inbound::http::loan_applications::update_loan_application_age,
        crate::inbound::http::loan_applications::delete_loan_application,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        LoanApplicationSubmissionSchema,
        AgeUpdateSchema,
        LoanApplicationResponse,
        ValidationFailureResponse,
        MutationResponse,
    )),
    tags(
        (name = "loan applications", description = "Loan application records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
