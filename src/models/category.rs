use serde::{Deserialize, Serialize};

/// Label attached to every transaction and budget.
///
/// The declaration order is the display order used by forms and by the
/// dashboard category breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Utilities,
    Shopping,
    Entertainment,
    Healthcare,
    Education,
    Salary,
    Investment,
    #[serde(rename = "Other Income")]
    OtherIncome,
    #[serde(rename = "Misc Expense")]
    MiscExpense,
    #[serde(rename = "Misc Income")]
    MiscIncome,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::Food,
        Category::Transport,
        Category::Utilities,
        Category::Shopping,
        Category::Entertainment,
        Category::Healthcare,
        Category::Education,
        Category::Salary,
        Category::Investment,
        Category::OtherIncome,
        Category::MiscExpense,
        Category::MiscIncome,
    ];

    /// Categories that only make sense for spending. Budgets are limited to these.
    pub const EXPENSE: &'static [Category] = &[
        Category::Food,
        Category::Transport,
        Category::Utilities,
        Category::Shopping,
        Category::Entertainment,
        Category::Healthcare,
        Category::Education,
        Category::MiscExpense,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Utilities => "Utilities",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Salary => "Salary",
            Category::Investment => "Investment",
            Category::OtherIncome => "Other Income",
            Category::MiscExpense => "Misc Expense",
            Category::MiscIncome => "Misc Income",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }

    pub fn is_expense_category(&self) -> bool {
        Self::EXPENSE.contains(self)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
