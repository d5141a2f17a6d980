use crate::db::queries::invalid_column;
use crate::models::{Budget, Category, NewBudget};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

const SELECT_COLUMNS: &str = "SELECT id, category, amount_limit, month FROM budgets";

fn row_to_budget(row: &Row) -> rusqlite::Result<Budget> {
    let category: String = row.get(1)?;
    Ok(Budget {
        id: row.get(0)?,
        category: Category::parse(&category)
            .ok_or_else(|| invalid_column(1, &category, "category"))?,
        limit: row.get(2)?,
        month: row.get(3)?,
    })
}

/// All budgets, most recent month first, then by category name.
pub fn list_budgets(conn: &Connection) -> rusqlite::Result<Vec<Budget>> {
    let mut stmt = conn.prepare(&format!(
        "{} ORDER BY month DESC, category ASC",
        SELECT_COLUMNS
    ))?;

    let budgets = stmt
        .query_map([], row_to_budget)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(budgets)
}

pub fn get_budget(conn: &Connection, id: i64) -> rusqlite::Result<Option<Budget>> {
    conn.query_row(
        &format!("{} WHERE id = ?", SELECT_COLUMNS),
        [id],
        row_to_budget,
    )
    .optional()
}

pub fn count_budgets_for_month(conn: &Connection, month: &str) -> rusqlite::Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM budgets WHERE month = ?",
        [month],
        |row| row.get(0),
    )
}

/// Insert a budget. Fails with a unique constraint violation when the
/// `(category, month)` pair already has a budget.
pub fn create_budget(conn: &Connection, budget: &NewBudget) -> rusqlite::Result<Budget> {
    conn.execute(
        "INSERT INTO budgets (category, amount_limit, month) VALUES (?, ?, ?)",
        params![budget.category.as_str(), budget.limit, budget.month],
    )?;

    let id = conn.last_insert_rowid();
    debug!(
        budget_id = id,
        category = %budget.category,
        month = %budget.month,
        "Created budget"
    );

    Ok(Budget {
        id,
        category: budget.category,
        limit: budget.limit,
        month: budget.month.clone(),
    })
}

/// Replace every field of budget `id`. Returns `None` when no such budget
/// exists; moving onto another budget's `(category, month)` pair fails with
/// a unique constraint violation.
pub fn update_budget(
    conn: &Connection,
    id: i64,
    budget: &NewBudget,
) -> rusqlite::Result<Option<Budget>> {
    let rows = conn.execute(
        "UPDATE budgets SET category = ?, amount_limit = ?, month = ?,
         updated_at = datetime('now') WHERE id = ?",
        params![budget.category.as_str(), budget.limit, budget.month, id],
    )?;

    if rows == 0 {
        return Ok(None);
    }

    debug!(budget_id = id, "Updated budget");
    get_budget(conn, id)
}

pub fn delete_budget(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    let rows = conn.execute("DELETE FROM budgets WHERE id = ?", [id])?;
    if rows > 0 {
        debug!(budget_id = id, "Deleted budget");
    }
    Ok(rows > 0)
}
