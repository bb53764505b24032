//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Loan applications submitted through the API.
    ///
    /// `id` defaults to `gen_random_uuid()` so identifiers are always
    /// assigned by the database.
    loan_applications (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Applicant age in whole years.
        age -> Int4,
        /// Applicant income.
        income -> Float8,
        /// Whether the applicant is employed.
        employed -> Bool,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}
