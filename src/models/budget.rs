use serde::{Deserialize, Serialize};

use crate::date_utils;
use crate::error::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::transaction::{check_amount, format_amount, AmountError};

/// Spending ceiling for one category in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub category: Category,
    pub limit: f64,
    /// `YYYY-MM`
    pub month: String,
}

impl Budget {
    pub fn limit_formatted(&self) -> String {
        format_amount(self.limit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBudget {
    pub category: Category,
    pub limit: f64,
    pub month: String,
}

impl NewBudget {
    pub fn validate(&self) -> AppResult<()> {
        match check_amount(self.limit) {
            Ok(_) => {}
            Err(AmountError::NotPositive) => {
                return Err(AppError::Validation(
                    "Budget limit must be a positive number".into(),
                ))
            }
            Err(AmountError::TooLarge) => {
                return Err(AppError::Validation(
                    "Budget limit must not exceed 1000000000000".into(),
                ))
            }
        }
        if date_utils::parse_month(&self.month).is_none() {
            return Err(AppError::Validation(format!(
                "Month must be in YYYY-MM form, got {:?}",
                self.month
            )));
        }
        Ok(())
    }
}
