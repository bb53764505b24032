//! PostgreSQL-backed `LoanApplicationRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{LoanApplicationRepository, LoanApplicationRepositoryError};
use crate::domain::{Age, Income, LoanApplication, LoanApplicationId, NewLoanApplication};

use super::models::{LoanApplicationRow, NewLoanApplicationRow};
use super::pool::{DbPool, PoolError};
use super::schema::loan_applications;

/// Diesel-backed implementation of the `LoanApplicationRepository` port.
#[derive(Clone)]
pub struct DieselLoanApplicationRepository {
    pool: DbPool,
}

impl DieselLoanApplicationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> LoanApplicationRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            LoanApplicationRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> LoanApplicationRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => LoanApplicationRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => {
            LoanApplicationRepositoryError::query("database query error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            LoanApplicationRepositoryError::connection("database connection error")
        }
        _ => LoanApplicationRepositoryError::query("database error"),
    }
}

fn row_count(count: usize) -> Result<u64, LoanApplicationRepositoryError> {
    u64::try_from(count).map_err(|_| LoanApplicationRepositoryError::query("row count overflow"))
}

/// Convert a database row to a domain `LoanApplication`.
///
/// Rows written outside the API may violate the field bounds; those surface
/// as query errors rather than as invalid domain values.
fn row_to_application(
    row: LoanApplicationRow,
) -> Result<LoanApplication, LoanApplicationRepositoryError> {
    let invalid =
        |err| LoanApplicationRepositoryError::query(format!("stored row {}: {err}", row.id));
    Ok(LoanApplication {
        id: LoanApplicationId::from_uuid(row.id),
        age: Age::new(row.age).map_err(invalid)?,
        income: Income::new(row.income).map_err(invalid)?,
        employed: row.employed,
    })
}

#[async_trait]
impl LoanApplicationRepository for DieselLoanApplicationRepository {
    async fn insert(
        &self,
        application: &NewLoanApplication,
    ) -> Result<LoanApplication, LoanApplicationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewLoanApplicationRow {
            age: application.age.get(),
            income: application.income.get(),
            employed: application.employed,
        };

        let row: LoanApplicationRow = diesel::insert_into(loan_applications::table)
            .values(&new_row)
            .returning(LoanApplicationRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_application(row)
    }

    async fn find_by_id(
        &self,
        id: &LoanApplicationId,
    ) -> Result<Option<LoanApplication>, LoanApplicationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<LoanApplicationRow> = loan_applications::table
            .filter(loan_applications::id.eq(id.as_uuid()))
            .select(LoanApplicationRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_application).transpose()
    }

    async fn update_age(
        &self,
        id: &LoanApplicationId,
        age: Age,
    ) -> Result<u64, LoanApplicationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(
            loan_applications::table
                .filter(loan_applications::id.eq(id.as_uuid()))
                .filter(loan_applications::age.ne(age.get())),
        )
        .set(loan_applications::age.eq(age.get()))
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        row_count(updated)
    }

    async fn delete(&self, id: &LoanApplicationId) -> Result<u64, LoanApplicationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(
            loan_applications::table.filter(loan_applications::id.eq(id.as_uuid())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        row_count(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use uuid::Uuid;

    fn row(age: i32, income: f64) -> LoanApplicationRow {
        LoanApplicationRow {
            id: Uuid::new_v4(),
            age,
            income,
            employed: true,
        }
    }

    #[rstest]
    fn row_to_application_maps_fields() {
        let source = row(22, 28000.0);
        let application = row_to_application(source.clone()).expect("valid row");
        assert_eq!(application.id.as_uuid(), &source.id);
        assert_eq!(application.age.get(), 22);
        assert_eq!(application.income.get(), 28000.0);
        assert!(application.employed);
    }

    #[rstest]
    #[case(row(0, 1.0))]
    #[case(row(30, -1.0))]
    fn row_to_application_rejects_out_of_range_rows(#[case] source: LoanApplicationRow) {
        let error = row_to_application(source).expect_err("invalid row");
        assert!(matches!(error, LoanApplicationRepositoryError::Query { .. }));
    }

    #[rstest]
    fn pool_errors_map_to_connection_errors() {
        let error = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(error, LoanApplicationRepositoryError::connection("timed out"));
    }

    #[rstest]
    fn not_found_maps_to_query_error() {
        let error = map_diesel_error(diesel::result::Error::NotFound);
        assert_eq!(error, LoanApplicationRepositoryError::query("record not found"));
    }
}
