use chrono::NaiveDate;
use tracing::warn;

use crate::client::{ApiClient, ClientResult};
use crate::models::{Budget, Transaction};
use crate::services::aggregation::DashboardSummary;

pub const LOAD_ERROR: &str = "Failed to load dashboard data. Please try again later.";

pub struct DashboardPage {
    client: ApiClient,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub loading: bool,
    pub error: Option<String>,
    pub summary: Option<DashboardSummary>,
}

impl DashboardPage {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            transactions: Vec::new(),
            budgets: Vec::new(),
            loading: true,
            error: None,
            summary: None,
        }
    }

    /// Fetch both lists and recompute the summary for `today`. Either fetch
    /// failing leaves the page with only the error banner.
    pub async fn load(&mut self, today: NaiveDate) {
        self.loading = true;
        match self.fetch().await {
            Ok((transactions, budgets)) => {
                self.summary = Some(DashboardSummary::compute(&transactions, &budgets, today));
                self.transactions = transactions;
                self.budgets = budgets;
                self.error = None;
            }
            Err(e) => {
                warn!("Loading dashboard failed: {}", e);
                self.summary = None;
                self.error = Some(LOAD_ERROR.to_string());
            }
        }
        self.loading = false;
    }

    async fn fetch(&self) -> ClientResult<(Vec<Transaction>, Vec<Budget>)> {
        let transactions = self.client.list_transactions().await?;
        let budgets = self.client.list_budgets().await?;
        Ok((transactions, budgets))
    }

    /// Nothing recorded yet; the page shows onboarding links instead of charts.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.budgets.is_empty()
    }
}
