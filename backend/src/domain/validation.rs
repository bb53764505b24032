//! Loan application validator.
//!
//! Turns a loosely typed field mapping (decoded from JSON or a URL-encoded
//! form) into a [`NewLoanApplication`], or into [`FieldErrors`] listing every
//! rule each field broke. Each recognised field is checked for presence, then
//! coerced to its type, then checked against its range; later checks are
//! skipped once an earlier one fails. Unrecognised fields are ignored.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt::Display;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::{Age, Income, NewLoanApplication};

/// Raw inbound fields keyed by name.
pub type RawFields = Map<String, Value>;

/// Field name for the applicant age.
pub const AGE_FIELD: &str = "age";
/// Field name for the applicant income.
pub const INCOME_FIELD: &str = "income";
/// Field name for the employment flag.
pub const EMPLOYED_FIELD: &str = "employed";

const TRUTHY: [&str; 6] = ["true", "t", "yes", "y", "on", "1"];
const FALSY: [&str; 6] = ["false", "f", "no", "n", "off", "0"];

/// Ordered error messages per failing field.
///
/// # Examples
/// ```
/// use loanapp::domain::validation::validate_application;
/// use serde_json::json;
///
/// let fields = json!({ "income": 28000, "employed": true });
/// let errors = validate_application(fields.as_object().expect("object"))
///     .expect_err("age is required");
/// assert_eq!(errors.get("age"), Some(&["age is missing".to_owned()][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    fn push(&mut self, field: &str, message: String) {
        self.0.entry(field.to_owned()).or_default().push(message);
    }

    /// True when no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`, in rule order.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Names of the fields that failed.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Validate a complete submission.
///
/// # Errors
/// Returns [`FieldErrors`] naming every field that failed and why.
pub fn validate_application(fields: &RawFields) -> Result<NewLoanApplication, FieldErrors> {
    let mut errors = FieldErrors::default();
    let age = check_field(fields, AGE_FIELD, coerce_integer, Age::new, &mut errors);
    let income = check_field(fields, INCOME_FIELD, coerce_number, Income::new, &mut errors);
    let employed = check_field(
        fields,
        EMPLOYED_FIELD,
        coerce_boolean,
        Ok::<bool, Infallible>,
        &mut errors,
    );

    match (age, income, employed) {
        (Some(age), Some(income), Some(employed)) => Ok(NewLoanApplication {
            age,
            income,
            employed,
        }),
        _ => Err(errors),
    }
}

/// Validate the body of an age update with the same rules used on creation.
///
/// # Errors
/// Returns [`FieldErrors`] for `age` when it is missing, not an integer, or
/// not positive.
pub fn validate_age_update(fields: &RawFields) -> Result<Age, FieldErrors> {
    let mut errors = FieldErrors::default();
    check_field(fields, AGE_FIELD, coerce_integer, Age::new, &mut errors).ok_or(errors)
}

fn check_field<T, U, E>(
    fields: &RawFields,
    field: &'static str,
    coerce: fn(&Value) -> Option<T>,
    bound: impl FnOnce(T) -> Result<U, E>,
    errors: &mut FieldErrors,
) -> Option<U>
where
    E: Display,
{
    let Some(raw) = present(fields, field) else {
        errors.push(field, format!("{field} is missing"));
        return None;
    };
    let Some(value) = coerce(raw) else {
        errors.push(field, format!("{field} has wrong type"));
        return None;
    };
    match bound(value) {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(field, err.to_string());
            None
        }
    }
}

fn present<'a>(fields: &'a RawFields, field: &str) -> Option<&'a Value> {
    match fields.get(field)? {
        Value::Null => None,
        Value::String(text) if text.trim().is_empty() => None,
        value => Some(value),
    }
}

fn coerce_integer(value: &Value) -> Option<i32> {
    match value {
        Value::Number(number) => match number.as_i64() {
            Some(integer) => i32::try_from(integer).ok(),
            None => number.as_f64().and_then(integral_to_i32),
        },
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn integral_to_i32(value: f64) -> Option<i32> {
    let in_range = value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX);
    if value.fract() == 0.0 && in_range {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "value is integral and checked against the i32 range"
        )]
        let integer = value as i32;
        Some(integer)
    } else {
        None
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

fn coerce_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => match number.as_f64() {
            Some(n) if n == 1.0 => Some(true),
            Some(n) if n == 0.0 => Some(false),
            _ => None,
        },
        Value::String(text) => {
            let normalised = text.trim().to_ascii_lowercase();
            if TRUTHY.contains(&normalised.as_str()) {
                Some(true)
            } else if FALSY.contains(&normalised.as_str()) {
                Some(false)
            } else {
                None
            }
        }
        _ => None,
    }
}
