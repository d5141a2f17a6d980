use chrono::NaiveDate;
use tracing::warn;

use crate::client::ApiClient;
use crate::forms::{BudgetForm, FieldErrors};
use crate::models::Budget;

pub const LOAD_ERROR: &str = "Failed to load budgets. Please try again later.";
pub const SAVE_ERROR: &str = "Failed to save budget. Please check your input and try again.";
pub const DELETE_ERROR: &str = "Failed to delete budget. Please try again.";

pub struct BudgetsPage {
    client: ApiClient,
    pub budgets: Vec<Budget>,
    pub loading: bool,
    pub error: Option<String>,
    pub form: Option<BudgetForm>,
    pub field_errors: FieldErrors,
}

impl BudgetsPage {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            budgets: Vec::new(),
            loading: true,
            error: None,
            form: None,
            field_errors: FieldErrors::default(),
        }
    }

    pub async fn load(&mut self) {
        self.loading = true;
        match self.client.list_budgets().await {
            Ok(list) => {
                self.budgets = list;
                self.error = None;
            }
            Err(e) => {
                warn!("Loading budgets failed: {}", e);
                self.error = Some(LOAD_ERROR.to_string());
            }
        }
        self.loading = false;
    }

    pub fn open_new(&mut self, today: NaiveDate) {
        self.form = Some(BudgetForm::new(today));
        self.field_errors = FieldErrors::default();
    }

    pub fn open_edit(&mut self, id: i64) -> bool {
        match self.budgets.iter().find(|b| b.id == id) {
            Some(budget) => {
                self.form = Some(BudgetForm::edit(budget));
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
            Some(id) => self.client.update_budget(id, &payload).await,
            None => self.client.create_budget(&payload).await,
        };

        match result {
            Ok(_) => {
                self.cancel();
                self.load().await;
                true
            }
            Err(e) => {
                warn!("Saving budget failed: {}", e);
                self.error = Some(SAVE_ERROR.to_string());
                false
            }
        }
    }

    pub async fn delete(&mut self, id: i64) -> bool {
        match self.client.delete_budget(id).await {
            Ok(()) => {
                self.load().await;
                true
            }
            Err(e) => {
                warn!(budget_id = id, "Deleting budget failed: {}", e);
                self.error = Some(DELETE_ERROR.to_string());
                false
            }
        }
    }
}
