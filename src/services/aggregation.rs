//! Dashboard summaries derived from the raw transaction and budget lists.
//!
//! Everything here is a pure function of its inputs. "Today" is passed in
//! rather than read from the clock so results are reproducible.

use crate::date_utils::{month_key, month_label, months_of_year};
use crate::models::{Budget, Category, Transaction};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyExpense {
    /// `YYYY-MM`
    pub month: String,
    /// Short axis label, e.g. `Jan 24`.
    pub label: String,
    pub expenses: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub amount: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetComparison {
    pub budget_id: i64,
    pub category: Category,
    pub budgeted: f64,
    pub actual: f64,
    pub remaining: f64,
    pub over_budget: bool,
}

impl BudgetComparison {
    /// How far spending went past the limit; zero when within budget.
    pub fn overage(&self) -> f64 {
        (self.actual - self.budgeted).max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_balance: f64,
    pub monthly_expenses: Vec<MonthlyExpense>,
    pub category_breakdown: Vec<CategoryTotal>,
    pub budget_comparison: Vec<BudgetComparison>,
}

impl DashboardSummary {
    pub fn compute(transactions: &[Transaction], budgets: &[Budget], today: NaiveDate) -> Self {
        Self {
            total_balance: total_balance(transactions),
            monthly_expenses: monthly_expenses(transactions, today.year()),
            category_breakdown: spending_by_category(transactions),
            budget_comparison: budget_vs_actual(transactions, budgets, today),
        }
    }
}

/// Income minus expenses over every transaction.
pub fn total_balance(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(Transaction::signed_amount).sum()
}

/// Twelve buckets, January to December of `year`, each holding the expense
/// total for that month.
pub fn monthly_expenses(transactions: &[Transaction], year: i32) -> Vec<MonthlyExpense> {
    let mut totals: HashMap<u32, f64> = HashMap::new();
    for tx in transactions.iter().filter(|t| t.is_expense()) {
        let date = tx.date.date_naive();
        if date.year() == year {
            *totals.entry(date.month()).or_insert(0.0) += tx.amount;
        }
    }

    months_of_year(year)
        .into_iter()
        .map(|first| MonthlyExpense {
            month: month_key(first),
            label: month_label(first),
            expenses: totals.get(&first.month()).copied().unwrap_or(0.0),
        })
        .collect()
}

/// Expense totals per category over all time. Categories without expenses
/// are left out.
pub fn spending_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<Category, f64> = BTreeMap::new();
    for tx in transactions.iter().filter(|t| t.is_expense()) {
        *totals.entry(tx.category).or_insert(0.0) += tx.amount;
    }

    let grand_total: f64 = totals.values().sum();

    totals
        .into_iter()
        .map(|(category, amount)| CategoryTotal {
            category,
            amount,
            percentage: if grand_total > 0.0 {
                amount / grand_total * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Compare each budget for the month containing `today` against that
/// month's expenses in the same category.
pub fn budget_vs_actual(
    transactions: &[Transaction],
    budgets: &[Budget],
    today: NaiveDate,
) -> Vec<BudgetComparison> {
    let current_month = month_key(today);

    let mut spent: HashMap<Category, f64> = HashMap::new();
    for tx in transactions.iter().filter(|t| t.is_expense()) {
        if month_key(tx.date.date_naive()) == current_month {
            *spent.entry(tx.category).or_insert(0.0) += tx.amount;
        }
    }

    budgets
        .iter()
        .filter(|b| b.month == current_month)
        .map(|budget| {
            let actual = spent.get(&budget.category).copied().unwrap_or(0.0);
            BudgetComparison {
                budget_id: budget.id,
                category: budget.category,
                budgeted: budget.limit,
                actual,
                remaining: budget.limit - actual,
                over_budget: actual > budget.limit,
            }
        })
        .collect()
}
