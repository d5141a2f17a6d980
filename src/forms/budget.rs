use chrono::NaiveDate;

use crate::date_utils::{month_key, parse_month};
use crate::forms::{parse_positive_amount, FieldErrors};
use crate::models::{AmountError, Budget, Category, NewBudget};

/// Edit buffer for creating or editing a budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetForm {
    pub editing_id: Option<i64>,
    pub category: String,
    pub limit: String,
    /// `YYYY-MM`
    pub month: String,
}

impl BudgetForm {
    /// Blank form for the month containing `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            editing_id: None,
            category: String::new(),
            limit: String::new(),
            month: month_key(today),
        }
    }

    pub fn edit(budget: &Budget) -> Self {
        Self {
            editing_id: Some(budget.id),
            category: budget.category.as_str().to_string(),
            limit: budget.limit.to_string(),
            month: budget.month.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Budget"
        } else {
            "Set New Budget"
        }
    }

    /// Budgets only apply to spending.
    pub fn category_options() -> &'static [Category] {
        Category::EXPENSE
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        let slot = match field {
            "category" => &mut self.category,
            "limit" => &mut self.limit,
            "month" => &mut self.month,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    pub fn validate(&self) -> Result<NewBudget, FieldErrors> {
        let mut errors = FieldErrors::default();

        let category = match Category::parse(self.category.trim()) {
            Some(c) if c.is_expense_category() => Some(c),
            Some(_) => {
                errors.add("category", "Budgets can only be set for expense categories");
                None
            }
            None => {
                errors.add("category", "Category is required");
                None
            }
        };

        let limit = match parse_positive_amount(&self.limit) {
            Ok(limit) => Some(limit),
            Err(AmountError::NotPositive) => {
                errors.add("limit", "Budget limit must be a positive number");
                None
            }
            Err(AmountError::TooLarge) => {
                errors.add("limit", "Budget limit must not exceed 1000000000000");
                None
            }
        };

        let month = self.month.trim();
        if month.is_empty() {
            errors.add("month", "Month is required");
        } else if parse_month(month).is_none() {
            errors.add("month", "Month must be in YYYY-MM form");
        }

        match (category, limit) {
            (Some(category), Some(limit)) => errors.into_result(|| NewBudget {
                category,
                limit,
                month: month.to_string(),
            }),
            _ => Err(errors),
        }
    }
}
