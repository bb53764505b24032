//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::loan_applications;

/// Row struct for reading from the loan_applications table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = loan_applications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct LoanApplicationRow {
    pub id: Uuid,
    pub age: i32,
    pub income: f64,
    pub employed: bool,
}

/// Insertable struct for creating loan applications; `id` and `created_at`
/// come from column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = loan_applications)]
pub(crate) struct NewLoanApplicationRow {
    pub age: i32,
    pub income: f64,
    pub employed: bool,
}
