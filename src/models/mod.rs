pub mod budget;
pub mod category;
pub mod transaction;

pub use budget::{Budget, NewBudget};
pub use category::Category;
pub use transaction::{
    check_amount, format_amount, AmountError, NewTransaction, Transaction, TransactionType,
    MAX_AMOUNT,
};
