//! Typed HTTP client for the `/api` endpoints, used by the page controllers.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ErrorBody;
use crate::models::{Budget, NewBudget, NewTransaction, Transaction};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

impl ClientError {
    /// HTTP status returned by the server, if the request got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    pub fn is_conflict(&self) -> bool {
        self.status() == Some(StatusCode::CONFLICT)
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    api_url: String,
}

impl ApiClient {
    /// `base_url` is the server root; `/api` is appended here.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            api_url: format!("{}/api", base_url.trim_end_matches('/')),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    // Transactions

    pub async fn list_transactions(&self) -> ClientResult<Vec<Transaction>> {
        let response = self.http.get(self.url("/transactions")).send().await?;
        json(response).await
    }

    pub async fn get_transaction(&self, id: i64) -> ClientResult<Transaction> {
        let response = self
            .http
            .get(self.url(&format!("/transactions/{}", id)))
            .send()
            .await?;
        json(response).await
    }

    pub async fn create_transaction(
        &self,
        transaction: &NewTransaction,
    ) -> ClientResult<Transaction> {
        let response = self
            .http
            .post(self.url("/transactions"))
            .json(transaction)
            .send()
            .await?;
        json(response).await
    }

    pub async fn update_transaction(
        &self,
        id: i64,
        transaction: &NewTransaction,
    ) -> ClientResult<Transaction> {
        let response = self
            .http
            .put(self.url(&format!("/transactions/{}", id)))
            .json(transaction)
            .send()
            .await?;
        json(response).await
    }

    pub async fn delete_transaction(&self, id: i64) -> ClientResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/transactions/{}", id)))
            .send()
            .await?;
        check(response).await.map(|_| ())
    }

    // Budgets

    pub async fn list_budgets(&self) -> ClientResult<Vec<Budget>> {
        let response = self.http.get(self.url("/budgets")).send().await?;
        json(response).await
    }

    pub async fn get_budget(&self, id: i64) -> ClientResult<Budget> {
        let response = self
            .http
            .get(self.url(&format!("/budgets/{}", id)))
            .send()
            .await?;
        json(response).await
    }

    pub async fn create_budget(&self, budget: &NewBudget) -> ClientResult<Budget> {
        let response = self
            .http
            .post(self.url("/budgets"))
            .json(budget)
            .send()
            .await?;
        json(response).await
    }

    pub async fn update_budget(&self, id: i64, budget: &NewBudget) -> ClientResult<Budget> {
        let response = self
            .http
            .put(self.url(&format!("/budgets/{}", id)))
            .json(budget)
            .send()
            .await?;
        json(response).await
    }

    pub async fn delete_budget(&self, id: i64) -> ClientResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/budgets/{}", id)))
            .send()
            .await?;
        check(response).await.map(|_| ())
    }
}

/// Pass successful responses through; turn everything else into
/// [`ClientError::Api`] with the server's message when it sent one.
async fn check(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });

    debug!(%status, %message, "API request failed");
    Err(ClientError::Api { status, message })
}

async fn json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    Ok(check(response).await?.json::<T>().await?)
}
