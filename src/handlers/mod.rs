pub mod budgets;
pub mod transactions;

use axum::extract::{FromRequest, FromRequestParts};
use axum::routing::get;
use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// JSON body extractor whose rejections come back as 400s with the usual
/// `{"message": ...}` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path extractor with the same error body, so a malformed id is a JSON 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes().fallback(api_not_found))
        // Health check
        .route("/health", get(health))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Transactions
        .route(
            "/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route(
            "/transactions/:id",
            get(transactions::show)
                .put(transactions::update)
                .delete(transactions::delete),
        )
        // Budgets
        .route("/budgets", get(budgets::list).post(budgets::create))
        .route(
            "/budgets/:id",
            get(budgets::show)
                .put(budgets::update)
                .delete(budgets::delete),
        )
}

async fn health() -> &'static str {
    "OK"
}

async fn api_not_found() -> AppError {
    AppError::NotFound("Resource not found".into())
}
