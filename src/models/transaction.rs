use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::date_utils;
use crate::error::{AppError, AppResult};
use crate::models::category::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Expense,
    Income,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "expense" => Some(TransactionType::Expense),
            "income" => Some(TransactionType::Income),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "date_utils::timestamp")]
    pub date: DateTime<Utc>,
    pub category: Category,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Amount with its sign applied: income counts positive, expenses negative.
    pub fn signed_amount(&self) -> f64 {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    pub fn amount_formatted(&self) -> String {
        format_amount(self.amount)
    }

    pub fn date_display(&self) -> String {
        date_utils::long_date(self.date.date_naive())
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Transaction fields as submitted by a client, for both create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "date_utils::timestamp")]
    pub date: DateTime<Utc>,
    pub category: Category,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl NewTransaction {
    pub fn validate(&self) -> AppResult<()> {
        match check_amount(self.amount) {
            Ok(_) => Ok(()),
            Err(AmountError::NotPositive) => Err(AppError::Validation(
                "Amount must be a positive number".into(),
            )),
            Err(AmountError::TooLarge) => Err(AppError::Validation(
                "Amount must not exceed 1000000000000".into(),
            )),
        }
    }

    /// Blank descriptions are stored as absent.
    pub fn normalized_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

/// Largest amount or budget limit accepted. Sums over any realistic number of
/// records stay finite.
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    NotPositive,
    TooLarge,
}

/// Amounts must be finite, greater than zero and at most [`MAX_AMOUNT`].
pub fn check_amount(value: f64) -> Result<f64, AmountError> {
    if !value.is_finite() || value <= 0.0 {
        Err(AmountError::NotPositive)
    } else if value > MAX_AMOUNT {
        Err(AmountError::TooLarge)
    } else {
        Ok(value)
    }
}

/// Currency display used across lists and the dashboard.
pub fn format_amount(amount: f64) -> String {
    format!("₹ {:.2}", amount)
}
