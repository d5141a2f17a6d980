use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use crate::db::queries::transactions;
use crate::error::{AppError, AppResult};
use crate::handlers::{ApiJson, ApiPath};
use crate::models::{NewTransaction, Transaction};
use crate::state::AppState;

fn not_found() -> AppError {
    AppError::NotFound("Transaction not found".into())
}

pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Transaction>>> {
    let conn = state.db.get()?;
    let list = transactions::list_transactions(&conn)?;
    Ok(Json(list))
}

pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Transaction>> {
    let conn = state.db.get()?;
    let transaction = transactions::get_transaction(&conn, id)?.ok_or_else(not_found)?;
    Ok(Json(transaction))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewTransaction>,
) -> AppResult<(StatusCode, Json<Transaction>)> {
    payload.validate()?;

    let conn = state.db.get()?;
    let created = transactions::create_transaction(&conn, &payload)?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<NewTransaction>,
) -> AppResult<Json<Transaction>> {
    payload.validate()?;

    let conn = state.db.get()?;
    let updated = transactions::update_transaction(&conn, id, &payload)?.ok_or_else(not_found)?;

    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<StatusCode> {
    let conn = state.db.get()?;

    if !transactions::delete_transaction(&conn, id)? {
        return Err(not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}
