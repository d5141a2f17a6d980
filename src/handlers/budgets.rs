use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use crate::db::queries::budgets;
use crate::error::{AppError, AppResult};
use crate::handlers::{ApiJson, ApiPath};
use crate::models::{Budget, NewBudget};
use crate::state::AppState;

const DUPLICATE_MESSAGE: &str = "Budget for this category and month already exists";

fn not_found() -> AppError {
    AppError::NotFound("Budget not found".into())
}

pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Budget>>> {
    let conn = state.db.get()?;
    let list = budgets::list_budgets(&conn)?;
    Ok(Json(list))
}

pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Budget>> {
    let conn = state.db.get()?;
    let budget = budgets::get_budget(&conn, id)?.ok_or_else(not_found)?;
    Ok(Json(budget))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewBudget>,
) -> AppResult<(StatusCode, Json<Budget>)> {
    payload.validate()?;

    let conn = state.db.get()?;
    let created = budgets::create_budget(&conn, &payload)
        .map_err(|e| AppError::conflict_on_unique(e, DUPLICATE_MESSAGE))?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<NewBudget>,
) -> AppResult<Json<Budget>> {
    payload.validate()?;

    let conn = state.db.get()?;
    let updated = budgets::update_budget(&conn, id, &payload)
        .map_err(|e| AppError::conflict_on_unique(e, DUPLICATE_MESSAGE))?
        .ok_or_else(not_found)?;

    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<StatusCode> {
    let conn = state.db.get()?;

    if !budgets::delete_budget(&conn, id)? {
        return Err(not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}
