//! Tests for the loan application service.

use std::sync::Arc;

use super::*;
use crate::domain::ports::MockLoanApplicationRepository;
use crate::domain::{ErrorCode, Income};
use rstest::{fixture, rstest};

fn make_service(
    repo: MockLoanApplicationRepository,
) -> LoanApplicationService<MockLoanApplicationRepository> {
    LoanApplicationService::new(Arc::new(repo))
}

fn age(value: i32) -> Age {
    Age::new(value).expect("valid age")
}

#[fixture]
fn submission() -> NewLoanApplication {
    NewLoanApplication {
        age: age(22),
        income: Income::new(28000.0).expect("valid income"),
        employed: true,
    }
}

#[rstest]
#[tokio::test]
async fn create_returns_stored_application(submission: NewLoanApplication) {
    let id = LoanApplicationId::random();
    let mut repo = MockLoanApplicationRepository::new();
    repo.expect_insert()
        .times(1)
        .withf(move |candidate| *candidate == submission)
        .return_once(move |candidate| Ok(LoanApplication::from_new(id, *candidate)));

    let created = make_service(repo)
        .create(submission)
        .await
        .expect("create succeeds");
    assert_eq!(created.id, id);
    assert_eq!(created.age, submission.age);
    assert_eq!(created.income, submission.income);
    assert!(created.employed);
}

#[rstest]
#[case(LoanApplicationRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(LoanApplicationRepositoryError::query("syntax"), ErrorCode::InternalError)]
#[tokio::test]
async fn create_maps_repository_errors(
    submission: NewLoanApplication,
    #[case] failure: LoanApplicationRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockLoanApplicationRepository::new();
    repo.expect_insert().return_once(move |_| Err(failure));

    let error = make_service(repo)
        .create(submission)
        .await
        .expect_err("repository failure propagates");
    assert_eq!(error.code(), expected);
}

#[rstest]
#[tokio::test]
async fn get_returns_found_application(submission: NewLoanApplication) {
    let stored = LoanApplication::from_new(LoanApplicationId::random(), submission);
    let mut repo = MockLoanApplicationRepository::new();
    repo.expect_find_by_id()
        .withf(move |id| *id == stored.id)
        .return_once(move |_| Ok(Some(stored)));

    let found = make_service(repo).get(&stored.id).await.expect("found");
    assert_eq!(found, stored);
}

#[tokio::test]
async fn get_reports_not_found_for_absent_id() {
    let mut repo = MockLoanApplicationRepository::new();
    repo.expect_find_by_id().return_once(|_| Ok(None));

    let error = make_service(repo)
        .get(&LoanApplicationId::random())
        .await
        .expect_err("absent id");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[case(1, true)]
#[case(0, false)]
#[tokio::test]
async fn update_age_reports_success_from_modified_count(
    #[case] modified: u64,
    #[case] expected: bool,
) {
    let mut repo = MockLoanApplicationRepository::new();
    repo.expect_update_age()
        .withf(|_, new_age| new_age.get() == 23)
        .return_once(move |_, _| Ok(modified));

    let outcome = make_service(repo)
        .update_age(&LoanApplicationId::random(), age(23))
        .await
        .expect("update completes");
    assert_eq!(outcome.success, expected);
}

#[tokio::test]
async fn update_age_propagates_connection_failures() {
    let mut repo = MockLoanApplicationRepository::new();
    repo.expect_update_age()
        .return_once(|_, _| Err(LoanApplicationRepositoryError::connection("refused")));

    let error = make_service(repo)
        .update_age(&LoanApplicationId::random(), age(23))
        .await
        .expect_err("connection failure");
    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
#[tokio::test]
async fn delete_succeeds_when_record_is_gone() {
    let mut repo = MockLoanApplicationRepository::new();
    repo.expect_delete().times(1).return_once(|_| Ok(1));
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

    let outcome = make_service(repo)
        .delete(&LoanApplicationId::random())
        .await
        .expect("delete completes");
    assert_eq!(outcome, MutationOutcome::APPLIED);
}

#[tokio::test]
async fn delete_fails_when_nothing_was_removed() {
    let mut repo = MockLoanApplicationRepository::new();
    repo.expect_delete().return_once(|_| Ok(0));
    repo.expect_find_by_id().return_once(|_| Ok(None));

    let outcome = make_service(repo)
        .delete(&LoanApplicationId::random())
        .await
        .expect("delete completes");
    assert_eq!(outcome, MutationOutcome::NOT_APPLIED);
}

#[rstest]
#[tokio::test]
async fn delete_fails_when_record_is_still_present(submission: NewLoanApplication) {
    let stored = LoanApplication::from_new(LoanApplicationId::random(), submission);
    let mut repo = MockLoanApplicationRepository::new();
    repo.expect_delete().return_once(|_| Ok(1));
    repo.expect_find_by_id()
        .return_once(move |_| Ok(Some(stored)));

    let outcome = make_service(repo)
        .delete(&stored.id)
        .await
        .expect("delete completes");
    assert_eq!(outcome, MutationOutcome::NOT_APPLIED);
}
