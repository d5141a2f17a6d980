use crate::date_utils::{format_timestamp, parse_timestamp};
use crate::db::queries::invalid_column;
use crate::models::{Category, NewTransaction, Transaction, TransactionType};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

const SELECT_COLUMNS: &str =
    "SELECT id, amount, description, date, category, transaction_type FROM transactions";

fn row_to_transaction(row: &Row) -> rusqlite::Result<Transaction> {
    let date: String = row.get(3)?;
    let category: String = row.get(4)?;
    let transaction_type: String = row.get(5)?;

    Ok(Transaction {
        id: row.get(0)?,
        amount: row.get(1)?,
        description: row.get(2)?,
        date: parse_timestamp(&date).ok_or_else(|| invalid_column(3, &date, "date"))?,
        category: Category::parse(&category)
            .ok_or_else(|| invalid_column(4, &category, "category"))?,
        transaction_type: TransactionType::parse(&transaction_type)
            .ok_or_else(|| invalid_column(5, &transaction_type, "transaction type"))?,
    })
}

/// All transactions, newest first.
pub fn list_transactions(conn: &Connection) -> rusqlite::Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(&format!("{} ORDER BY date DESC, id DESC", SELECT_COLUMNS))?;

    let transactions = stmt
        .query_map([], row_to_transaction)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(transactions)
}

pub fn get_transaction(conn: &Connection, id: i64) -> rusqlite::Result<Option<Transaction>> {
    conn.query_row(
        &format!("{} WHERE id = ?", SELECT_COLUMNS),
        [id],
        row_to_transaction,
    )
    .optional()
}

pub fn count_transactions(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))
}

pub fn create_transaction(
    conn: &Connection,
    transaction: &NewTransaction,
) -> rusqlite::Result<Transaction> {
    conn.execute(
        "INSERT INTO transactions (amount, description, date, category, transaction_type)
         VALUES (?, ?, ?, ?, ?)",
        params![
            transaction.amount,
            transaction.normalized_description(),
            format_timestamp(&transaction.date),
            transaction.category.as_str(),
            transaction.transaction_type.as_str(),
        ],
    )?;

    let id = conn.last_insert_rowid();
    debug!(
        transaction_id = id,
        amount = transaction.amount,
        category = %transaction.category,
        "Created transaction"
    );

    Ok(Transaction {
        id,
        amount: transaction.amount,
        description: transaction.normalized_description().map(str::to_string),
        date: transaction.date,
        category: transaction.category,
        transaction_type: transaction.transaction_type,
    })
}

/// Replace every field of transaction `id`. Returns `None` when no such
/// transaction exists.
pub fn update_transaction(
    conn: &Connection,
    id: i64,
    transaction: &NewTransaction,
) -> rusqlite::Result<Option<Transaction>> {
    let rows = conn.execute(
        "UPDATE transactions SET amount = ?, description = ?, date = ?, category = ?,
         transaction_type = ?, updated_at = datetime('now')
         WHERE id = ?",
        params![
            transaction.amount,
            transaction.normalized_description(),
            format_timestamp(&transaction.date),
            transaction.category.as_str(),
            transaction.transaction_type.as_str(),
            id,
        ],
    )?;

    if rows == 0 {
        return Ok(None);
    }

    debug!(transaction_id = id, "Updated transaction");
    get_transaction(conn, id)
}

pub fn delete_transaction(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    let rows = conn.execute("DELETE FROM transactions WHERE id = ?", [id])?;
    if rows > 0 {
        debug!(transaction_id = id, "Deleted transaction");
    }
    Ok(rows > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;
    use std::path::Path;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn, Path::new("migrations")).unwrap();
        conn
    }

    fn new_tx(amount: f64, date: &str, kind: TransactionType) -> NewTransaction {
        NewTransaction {
            amount,
            description: Some("test".into()),
            date: parse_timestamp(date).unwrap(),
            category: Category::Food,
            transaction_type: kind,
        }
    }

    #[test]
    fn test_create_and_get() {
        let conn = setup();
        let created =
            create_transaction(&conn, &new_tx(12.5, "2024-03-01", TransactionType::Expense))
                .unwrap();

        let fetched = get_transaction(&conn, created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.amount, 12.5);
        assert_eq!(fetched.description.as_deref(), Some("test"));
    }

    #[test]
    fn test_list_is_newest_first() {
        let conn = setup();
        create_transaction(&conn, &new_tx(1.0, "2024-01-10", TransactionType::Expense)).unwrap();
        create_transaction(&conn, &new_tx(2.0, "2024-03-10", TransactionType::Income)).unwrap();
        create_transaction(&conn, &new_tx(3.0, "2024-02-10", TransactionType::Expense)).unwrap();

        let amounts: Vec<f64> = list_transactions(&conn)
            .unwrap()
            .iter()
            .map(|t| t.amount)
            .collect();
        assert_eq!(amounts, vec![2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_blank_description_stored_as_null() {
        let conn = setup();
        let mut tx = new_tx(5.0, "2024-01-01", TransactionType::Expense);
        tx.description = Some("  ".into());
        let created = create_transaction(&conn, &tx).unwrap();

        let fetched = get_transaction(&conn, created.id).unwrap().unwrap();
        assert_eq!(fetched.description, None);
    }

    #[test]
    fn test_update_missing_returns_none() {
        let conn = setup();
        let result =
            update_transaction(&conn, 99, &new_tx(1.0, "2024-01-01", TransactionType::Expense))
                .unwrap();
        assert!(result.is_none());
        assert_eq!(count_transactions(&conn).unwrap(), 0);
    }

    #[test]
    fn test_update_replaces_fields() {
        let conn = setup();
        let created =
            create_transaction(&conn, &new_tx(1.0, "2024-01-01", TransactionType::Expense))
                .unwrap();

        let mut changed = new_tx(99.0, "2024-05-05", TransactionType::Income);
        changed.category = Category::Salary;
        changed.description = None;
        let updated = update_transaction(&conn, created.id, &changed)
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.amount, 99.0);
        assert_eq!(updated.category, Category::Salary);
        assert_eq!(updated.transaction_type, TransactionType::Income);
        assert_eq!(updated.description, None);
    }

    #[test]
    fn test_delete_twice() {
        let conn = setup();
        let created =
            create_transaction(&conn, &new_tx(1.0, "2024-01-01", TransactionType::Expense))
                .unwrap();

        assert!(delete_transaction(&conn, created.id).unwrap());
        assert!(!delete_transaction(&conn, created.id).unwrap());
        assert_eq!(count_transactions(&conn).unwrap(), 0);
    }
}
