use chrono::NaiveDate;

use crate::forms::{parse_positive_amount, FieldErrors};
use crate::models::{AmountError, Category, NewTransaction, Transaction, TransactionType};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Edit buffer for creating or editing a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionForm {
    /// Set when the form edits an existing transaction.
    pub editing_id: Option<i64>,
    pub amount: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub description: String,
    pub category: String,
    pub transaction_type: String,
}

impl TransactionForm {
    /// Blank form dated `today`, defaulting to an expense.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            editing_id: None,
            amount: String::new(),
            date: today.format(DATE_FORMAT).to_string(),
            description: String::new(),
            category: String::new(),
            transaction_type: TransactionType::Expense.as_str().to_string(),
        }
    }

    /// Form pre-filled from an existing transaction.
    pub fn edit(transaction: &Transaction) -> Self {
        Self {
            editing_id: Some(transaction.id),
            amount: transaction.amount.to_string(),
            date: transaction.date.date_naive().format(DATE_FORMAT).to_string(),
            description: transaction.description_text().to_string(),
            category: transaction.category.as_str().to_string(),
            transaction_type: transaction.transaction_type.as_str().to_string(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Transaction"
        } else {
            "Add New Transaction"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update"
        } else {
            "Add"
        }
    }

    pub fn category_options() -> &'static [Category] {
        Category::ALL
    }

    /// Set a field by its input name. Returns `false` for unknown names.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        let slot = match field {
            "amount" => &mut self.amount,
            "date" => &mut self.date,
            "description" => &mut self.description,
            "category" => &mut self.category,
            "type" => &mut self.transaction_type,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    pub fn validate(&self) -> Result<NewTransaction, FieldErrors> {
        let mut errors = FieldErrors::default();

        let amount = match parse_positive_amount(&self.amount) {
            Ok(amount) => Some(amount),
            Err(AmountError::NotPositive) => {
                errors.add("amount", "Amount must be a positive number");
                None
            }
            Err(AmountError::TooLarge) => {
                errors.add("amount", "Amount must not exceed 1000000000000");
                None
            }
        };

        let date = self.date.trim();
        let parsed_date = if date.is_empty() {
            errors.add("date", "Date is required");
            None
        } else {
            let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc());
            if parsed.is_none() {
                errors.add("date", "Date must be in YYYY-MM-DD form");
            }
            parsed
        };

        let category = Category::parse(self.category.trim());
        if category.is_none() {
            errors.add("category", "Category is required");
        }

        let transaction_type = TransactionType::parse(self.transaction_type.trim());
        if transaction_type.is_none() {
            errors.add("type", "Type is required");
        }

        match (amount, parsed_date, category, transaction_type) {
            (Some(amount), Some(date), Some(category), Some(transaction_type)) => {
                errors.into_result(|| NewTransaction {
                    amount,
                    description: Some(self.description.trim().to_string())
                        .filter(|d| !d.is_empty()),
                    date,
                    category,
                    transaction_type,
                })
            }
            _ => Err(errors),
        }
    }
}
