//! Edit buffers behind the transaction and budget forms.
//!
//! A form holds raw text exactly as typed. `validate` turns it into a typed
//! payload for the API client, or into per-field errors; nothing is sent
//! unless every field checks out.

pub mod budget;
pub mod transaction;

pub use budget::BudgetForm;
pub use transaction::TransactionForm;

use thiserror::Error;

use crate::models::{check_amount, AmountError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Validation failures keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Message for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// `Ok(value)` when nothing was recorded.
    pub(crate) fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// Parse user input as an amount the API will accept.
pub fn parse_positive_amount(input: &str) -> Result<f64, AmountError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| AmountError::NotPositive)
        .and_then(check_amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_amount() {
        assert_eq!(parse_positive_amount("12.50"), Ok(12.5));
        assert_eq!(parse_positive_amount(" 7 "), Ok(7.0));
        for input in ["0", "-5", "abc", "", "inf", "NaN"] {
            assert_eq!(
                parse_positive_amount(input),
                Err(AmountError::NotPositive),
                "input {:?}",
                input
            );
        }
        assert_eq!(parse_positive_amount("1e13"), Err(AmountError::TooLarge));
    }

    #[test]
    fn test_field_errors_lookup() {
        let mut errors = FieldErrors::default();
        assert!(errors.is_empty());

        errors.add("amount", "Amount must be a positive number");
        assert_eq!(errors.len(), 1);
        assert!(errors.has("amount"));
        assert!(!errors.has("date"));
        assert_eq!(errors.get("amount"), Some("Amount must be a positive number"));
        assert_eq!(errors.to_string(), "1 field(s) failed validation");
    }
}
