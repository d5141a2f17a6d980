//! End-to-end tests for the API client and the page controllers against a
//! real server bound to an OS-assigned port.

use chrono::NaiveDate;
use fintrack::client::ApiClient;
use fintrack::config::Config;
use fintrack::date_utils::parse_timestamp;
use fintrack::models::{Category, NewBudget, NewTransaction, TransactionType};
use fintrack::pages::{budgets, dashboard, transactions};
use fintrack::pages::{BudgetsPage, DashboardPage, TransactionsPage};
use fintrack::server::{build_app, serve};
use std::path::PathBuf;
use tempfile::TempDir;

/// Start a server on a fresh database. Keep the returned directory alive for
/// the duration of the test.
async fn spawn_server() -> (ApiClient, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = Config {
        host: "127.0.0.1".into(),
        port: 0,
        database_path: dir.path().join("fintrack.db"),
        migrations_path: PathBuf::from("migrations"),
        allowed_origins: vec![],
    };

    let (_state, app) = build_app(config).expect("Failed to build app");
    let (port, _handle) = serve(app, "127.0.0.1", 0)
        .await
        .expect("Failed to start server");

    (ApiClient::new(&format!("http://127.0.0.1:{}", port)), dir)
}

/// A client pointed at a port nothing listens on.
fn unreachable_client() -> ApiClient {
    ApiClient::new("http://127.0.0.1:1")
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn expense(amount: f64, date: &str, category: Category) -> NewTransaction {
    NewTransaction {
        amount,
        description: None,
        date: parse_timestamp(date).unwrap(),
        category,
        transaction_type: TransactionType::Expense,
    }
}

mod api_client {
    use super::*;

    #[tokio::test]
    async fn test_transaction_crud() {
        let (client, _dir) = spawn_server().await;

        let created = client
            .create_transaction(&expense(30.0, "2024-06-01", Category::Food))
            .await
            .unwrap();
        assert_eq!(client.get_transaction(created.id).await.unwrap(), created);

        let mut changed = expense(45.0, "2024-06-02", Category::Transport);
        changed.description = Some("Taxi".into());
        let updated = client.update_transaction(created.id, &changed).await.unwrap();
        assert_eq!(updated.amount, 45.0);
        assert_eq!(updated.description.as_deref(), Some("Taxi"));

        assert_eq!(client.list_transactions().await.unwrap(), vec![updated]);

        client.delete_transaction(created.id).await.unwrap();
        let err = client.delete_transaction(created.id).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Transaction not found"));
    }

    #[tokio::test]
    async fn test_budget_conflict_reported() {
        let (client, _dir) = spawn_server().await;
        let budget = NewBudget {
            category: Category::Food,
            limit: 100.0,
            month: "2024-06".into(),
        };

        let created = client.create_budget(&budget).await.unwrap();
        assert_eq!(client.get_budget(created.id).await.unwrap(), created);

        let err = client.create_budget(&budget).await.unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(client.list_budgets().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_budget_is_not_found() {
        let (client, _dir) = spawn_server().await;
        let err = client
            .update_budget(
                5,
                &NewBudget {
                    category: Category::Food,
                    limit: 1.0,
                    month: "2024-06".into(),
                },
            )
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_transport_failure_has_no_status() {
        let err = unreachable_client().list_transactions().await.unwrap_err();
        assert!(err.status().is_none());
    }
}

mod transactions_page {
    use super::*;

    #[tokio::test]
    async fn test_full_lifecycle() {
        let (client, _dir) = spawn_server().await;
        let mut page = TransactionsPage::new(client);
        assert!(page.loading);

        page.load().await;
        assert!(!page.loading);
        assert!(page.error.is_none());
        assert!(page.transactions.is_empty());

        // Invalid input never reaches the server.
        page.open_new(today());
        page.form.as_mut().unwrap().set("amount", "-5");
        page.form.as_mut().unwrap().set("category", "Food");
        assert!(!page.save().await);
        assert!(page.field_errors.has("amount"));
        assert!(page.form.is_some());
        page.load().await;
        assert!(page.transactions.is_empty());

        page.form.as_mut().unwrap().set("amount", "25");
        assert!(page.save().await);
        assert!(page.form.is_none());
        assert!(page.field_errors.is_empty());
        assert_eq!(page.transactions.len(), 1);
        let id = page.transactions[0].id;

        assert!(page.open_edit(id));
        assert!(!page.open_edit(id + 100));
        page.form.as_mut().unwrap().set("amount", "40");
        assert!(page.save().await);
        assert_eq!(page.transactions[0].amount, 40.0);
        assert_eq!(page.transactions[0].id, id);

        assert!(page.delete(id).await);
        assert!(page.transactions.is_empty());

        assert!(!page.delete(id).await);
        assert_eq!(page.error.as_deref(), Some(transactions::DELETE_ERROR));
    }

    #[tokio::test]
    async fn test_cancel_discards_form() {
        let (client, _dir) = spawn_server().await;
        let mut page = TransactionsPage::new(client);
        page.open_new(today());
        page.cancel();
        assert!(page.form.is_none());
        assert!(!page.save().await);
    }

    #[tokio::test]
    async fn test_load_failure_sets_banner() {
        let mut page = TransactionsPage::new(unreachable_client());
        page.load().await;

        assert!(!page.loading);
        assert_eq!(page.error.as_deref(), Some(transactions::LOAD_ERROR));
    }
}

mod budgets_page {
    use super::*;

    #[tokio::test]
    async fn test_duplicate_save_sets_banner() {
        let (client, _dir) = spawn_server().await;
        let mut page = BudgetsPage::new(client);
        page.load().await;

        page.open_new(today());
        page.form.as_mut().unwrap().set("category", "Food");
        page.form.as_mut().unwrap().set("limit", "100");
        assert!(page.save().await);
        assert_eq!(page.budgets.len(), 1);
        assert_eq!(page.budgets[0].month, "2024-06");

        page.open_new(today());
        page.form.as_mut().unwrap().set("category", "Food");
        page.form.as_mut().unwrap().set("limit", "300");
        assert!(!page.save().await);
        assert_eq!(page.error.as_deref(), Some(budgets::SAVE_ERROR));

        page.load().await;
        assert!(page.error.is_none());
        assert_eq!(page.budgets.len(), 1);
        assert_eq!(page.budgets[0].limit, 100.0);
    }

    #[tokio::test]
    async fn test_edit_and_delete() {
        let (client, _dir) = spawn_server().await;
        let mut page = BudgetsPage::new(client);

        page.open_new(today());
        page.form.as_mut().unwrap().set("category", "Transport");
        page.form.as_mut().unwrap().set("limit", "60");
        assert!(page.save().await);
        let id = page.budgets[0].id;

        assert!(page.open_edit(id));
        page.form.as_mut().unwrap().set("limit", "75");
        assert!(page.save().await);
        assert_eq!(page.budgets[0].limit, 75.0);

        assert!(page.delete(id).await);
        assert!(page.budgets.is_empty());
    }
}

mod dashboard_page {
    use super::*;

    #[tokio::test]
    async fn test_summary_from_fetched_data() {
        let (client, _dir) = spawn_server().await;

        client
            .create_transaction(&expense(70.0, "2024-06-02", Category::Food))
            .await
            .unwrap();
        client
            .create_transaction(&expense(50.0, "2024-06-10", Category::Food))
            .await
            .unwrap();
        client
            .create_transaction(&NewTransaction {
                amount: 1000.0,
                description: Some("June salary".into()),
                date: parse_timestamp("2024-06-01").unwrap(),
                category: Category::Salary,
                transaction_type: TransactionType::Income,
            })
            .await
            .unwrap();
        client
            .create_budget(&NewBudget {
                category: Category::Food,
                limit: 100.0,
                month: "2024-06".into(),
            })
            .await
            .unwrap();

        let mut page = DashboardPage::new(client);
        page.load(today()).await;

        assert!(page.error.is_none());
        assert!(!page.is_empty());
        let summary = page.summary.as_ref().unwrap();
        assert_eq!(summary.total_balance, 880.0);
        assert_eq!(summary.monthly_expenses[5].expenses, 120.0);
        assert_eq!(summary.category_breakdown.len(), 1);

        let food = &summary.budget_comparison[0];
        assert_eq!(food.actual, 120.0);
        assert_eq!(food.remaining, -20.0);
        assert!(food.over_budget);
    }

    #[tokio::test]
    async fn test_empty_dashboard() {
        let (client, _dir) = spawn_server().await;
        let mut page = DashboardPage::new(client);
        page.load(today()).await;

        assert!(page.is_empty());
        let summary = page.summary.as_ref().unwrap();
        assert_eq!(summary.total_balance, 0.0);
        assert_eq!(summary.monthly_expenses.len(), 12);
        assert!(summary.category_breakdown.is_empty());
        assert!(summary.budget_comparison.is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_shows_only_banner() {
        let mut page = DashboardPage::new(unreachable_client());
        page.load(today()).await;

        assert!(!page.loading);
        assert!(page.summary.is_none());
        assert_eq!(page.error.as_deref(), Some(dashboard::LOAD_ERROR));
    }
}
