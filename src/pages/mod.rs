//! Page controllers for the frontend tier.
//!
//! Each page owns an explicit view-model: the fetched lists, a loading flag,
//! the error banner and the open form. Lists are fetched on load and fetched
//! again after every successful mutation; they are never patched in place.

pub mod budgets;
pub mod dashboard;
pub mod transactions;

pub use budgets::BudgetsPage;
pub use dashboard::DashboardPage;
pub use transactions::TransactionsPage;
