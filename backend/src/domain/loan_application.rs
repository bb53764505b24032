//! Loan application data model.
//!
//! Field newtypes carry their own bounds so a [`NewLoanApplication`] can only
//! exist once every field has been checked.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Bound violations raised by the field constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoanApplicationValidationError {
    AgeNotPositive,
    IncomeNegative,
    IncomeNotFinite,
    InvalidId,
}

impl fmt::Display for LoanApplicationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AgeNotPositive => write!(f, "age must be greater than 0"),
            Self::IncomeNegative => write!(f, "income must be greater than or equal to 0"),
            Self::IncomeNotFinite => write!(f, "income must be a finite number"),
            Self::InvalidId => write!(f, "loan application id must be a valid UUID"),
        }
    }
}

impl std::error::Error for LoanApplicationValidationError {}

/// Store-assigned identifier of a loan application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoanApplicationId(Uuid);

impl LoanApplicationId {
    /// Wrap a UUID produced by the store.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a fresh identifier for stores without native id generation.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for LoanApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LoanApplicationId {
    type Err = LoanApplicationValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| LoanApplicationValidationError::InvalidId)
    }
}

/// Applicant age in whole years; always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Age(i32);

impl Age {
    /// Validate and construct an [`Age`].
    ///
    /// # Examples
    /// ```
    /// use loanapp::domain::Age;
    ///
    /// assert!(Age::new(22).is_ok());
    /// assert!(Age::new(0).is_err());
    /// ```
    pub fn new(value: i32) -> Result<Self, LoanApplicationValidationError> {
        if value <= 0 {
            return Err(LoanApplicationValidationError::AgeNotPositive);
        }
        Ok(Self(value))
    }

    /// Raw age value.
    #[must_use]
    pub fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Age {
    type Error = LoanApplicationValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Age> for i32 {
    fn from(value: Age) -> Self {
        value.0
    }
}

/// Applicant income; finite and never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Income(f64);

impl Income {
    /// Validate and construct an [`Income`].
    pub fn new(value: f64) -> Result<Self, LoanApplicationValidationError> {
        if !value.is_finite() {
            return Err(LoanApplicationValidationError::IncomeNotFinite);
        }
        if value < 0.0 {
            return Err(LoanApplicationValidationError::IncomeNegative);
        }
        Ok(Self(value))
    }

    /// Raw income value.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Income {
    type Error = LoanApplicationValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Income> for f64 {
    fn from(value: Income) -> Self {
        value.0
    }
}

/// Validated submission that has not been stored yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewLoanApplication {
    pub age: Age,
    pub income: Income,
    pub employed: bool,
}

/// Stored loan application.
///
/// ## Invariants
/// - `id` is assigned by the store and never supplied by clients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanApplication {
    pub id: LoanApplicationId,
    pub age: Age,
    pub income: Income,
    pub employed: bool,
}

impl LoanApplication {
    /// Attach a store-assigned identifier to a validated submission.
    #[must_use]
    pub fn from_new(id: LoanApplicationId, application: NewLoanApplication) -> Self {
        let NewLoanApplication {
            age,
            income,
            employed,
        } = application;
        Self {
            id,
            age,
            income,
            employed,
        }
    }
}
