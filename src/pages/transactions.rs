use chrono::NaiveDate;
use tracing::warn;

use crate::client::ApiClient;
use crate::forms::{FieldErrors, TransactionForm};
use crate::models::Transaction;

pub const LOAD_ERROR: &str = "Failed to load transactions. Please try again later.";
pub const SAVE_ERROR: &str = "Failed to save transaction. Please check your input and try again.";
pub const DELETE_ERROR: &str = "Failed to delete transaction. Please try again.";

pub struct TransactionsPage {
    client: ApiClient,
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    pub error: Option<String>,
    pub form: Option<TransactionForm>,
    pub field_errors: FieldErrors,
}

impl TransactionsPage {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            transactions: Vec::new(),
            loading: true,
            error: None,
            form: None,
            field_errors: FieldErrors::default(),
        }
    }

    pub async fn load(&mut self) {
        self.loading = true;
        match self.client.list_transactions().await {
            Ok(list) => {
                self.transactions = list;
                self.error = None;
            }
            Err(e) => {
                warn!("Loading transactions failed: {}", e);
                self.error = Some(LOAD_ERROR.to_string());
            }
        }
        self.loading = false;
    }

    pub fn open_new(&mut self, today: NaiveDate) {
        self.form = Some(TransactionForm::new(today));
        self.field_errors = FieldErrors::default();
    }

    /// Open the form on a listed transaction. Returns `false` if `id` is not
    /// in the current list.
    pub fn open_edit(&mut self, id: i64) -> bool {
        match self.transactions.iter().find(|t| t.id == id) {
            Some(tx) => {
                self.form = Some(TransactionForm::edit(tx));
                self.field_errors = FieldErrors::default();
                true
            }
            None => false,
        }
    }

    pub fn cancel(&mut self) {
        self.form = None;
        self.field_errors = FieldErrors::default();
    }

    /// Validate and submit the open form, then reload. Returns `true` when the
    /// transaction was saved.
    pub async fn save(&mut self) -> bool {
        let Some(form) = &self.form else {
            return false;
        };

        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(errors) => {
                self.field_errors = errors;
                return false;
            }
        };

        let result = match form.editing_id {
            Some(id) => self.client.update_transaction(id, &payload).await,
            None => self.client.create_transaction(&payload).await,
        };

        match result {
            Ok(_) => {
                self.cancel();
                self.load().await;
                true
            }
            Err(e) => {
                warn!("Saving transaction failed: {}", e);
                self.error = Some(SAVE_ERROR.to_string());
                false
            }
        }
    }

    pub async fn delete(&mut self, id: i64) -> bool {
        match self.client.delete_transaction(id).await {
            Ok(()) => {
                self.load().await;
                true
            }
            Err(e) => {
                warn!(transaction_id = id, "Deleting transaction failed: {}", e);
                self.error = Some(DELETE_ERROR.to_string());
                false
            }
        }
    }
}
