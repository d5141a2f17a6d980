pub mod budgets;
pub mod transactions;

use rusqlite::types::Type;

/// Error for a column whose stored text is not a value the model accepts.
pub(crate) fn invalid_column(idx: usize, value: &str, what: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        idx,
        Type::Text,
        format!("invalid {} {:?}", what, value).into(),
    )
}
