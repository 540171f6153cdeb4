//! End-to-end tests for the HTTP surface against mock ports

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{NaiveDate, Utc};
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use core_kernel::{CustomerId, Money};
use domain_finance::mock::{MockExpenseStore, MockProvider};
use domain_finance::{ExpenseStore, PaymentStatus, ProviderPort};
use infra_store::MemoryExpenseStore;
use interface_api::{config::ApiConfig, create_router};
use test_utils::{CustomerBuilder, ExpenseBuilder, PaymentBuilder};

fn test_config() -> ApiConfig {
    ApiConfig {
        provider_base_url: "https://billing.example.com/v3".to_string(),
        provider_api_key: "tok_test".to_string(),
        fetch_concurrency: 3,
        page_limit: 50,
        ..ApiConfig::default()
    }
}

fn server_with(provider: Arc<MockProvider>, expenses: Arc<dyn ExpenseStore>) -> TestServer {
    let app = create_router(provider as Arc<dyn ProviderPort>, expenses, test_config());
    TestServer::new(app).expect("router should build")
}

fn server(provider: MockProvider) -> TestServer {
    server_with(Arc::new(provider), Arc::new(MemoryExpenseStore::new()))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod students_status {
    use super::*;

    #[tokio::test]
    async fn derives_one_status_per_customer_in_input_order() {
        let provider = MockProvider::new()
            .with_customer(CustomerBuilder::new().with_id("cus_1").with_name("Ana").build())
            .with_customer(CustomerBuilder::new().with_id("cus_2").with_name("Bia").build())
            .with_customer(CustomerBuilder::new().with_id("cus_3").with_name("Caio").build())
            // cus_1 answers slowest; output order must not change
            .with_listing_latency(CustomerId::new("cus_1"), Duration::from_millis(80))
            .with_listing_latency(CustomerId::new("cus_2"), Duration::from_millis(20))
            .with_payment(
                PaymentBuilder::new()
                    .with_id("pay_1")
                    .for_customer("cus_1")
                    .with_status(PaymentStatus::Overdue)
                    .due_on(date(2024, 1, 10))
                    .with_value(Money::new(dec!(500)))
                    .build(),
            )
            .with_payment(
                PaymentBuilder::new()
                    .with_id("pay_2")
                    .for_customer("cus_1")
                    .with_status(PaymentStatus::Pending)
                    .due_on(date(2024, 2, 10))
                    .with_value(Money::new(dec!(500)))
                    .build(),
            )
            .with_payment(
                PaymentBuilder::new()
                    .with_id("pay_3")
                    .for_customer("cus_2")
                    .received_on(date(2024, 2, 8))
                    .due_on(date(2024, 2, 10))
                    .with_value(Money::new(dec!(480)))
                    .build(),
            );

        let response = server(provider).get("/students-status").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let students = body["students"].as_array().unwrap();
        assert_eq!(students.len(), 3);

        // Delinquent student: overdue charge wins, earliest due date surfaces
        assert_eq!(students[0]["customerId"], "cus_1");
        assert_eq!(students[0]["status"], "INADIMPLENTE");
        assert_eq!(students[0]["nextDueDate"], "2024-01-10");
        assert_eq!(students[0]["monthlyFee"], "500.00");

        // Settled student: sentinel date, fee carried from last payment
        assert_eq!(students[1]["customerId"], "cus_2");
        assert_eq!(students[1]["status"], "ADIMPLENTE");
        assert_eq!(students[1]["nextDueDate"], "Em dia");
        assert_eq!(students[1]["monthlyFee"], "480.00");

        // Student with no charges at all is a valid terminal state
        assert_eq!(students[2]["customerId"], "cus_3");
        assert_eq!(students[2]["status"], "ADIMPLENTE");
        assert_eq!(students[2]["nextDueDate"], "Nenhuma cobrança emitida");
        assert_eq!(students[2]["monthlyFee"], "0.00");
    }

    #[tokio::test]
    async fn one_failed_fetch_fails_the_whole_request() {
        let provider = MockProvider::new()
            .with_customer(CustomerBuilder::new().with_id("cus_1").build())
            .with_customer(CustomerBuilder::new().with_id("cus_2").build())
            .failing_payments_for(CustomerId::new("cus_2"));

        let response = server(provider).get("/students-status").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = response.json();
        assert_eq!(body["error"], "upstream_error");
    }
}

mod enrollment {
    use super::*;

    #[tokio::test]
    async fn creates_customer_then_payment() {
        let provider = Arc::new(MockProvider::new());
        let response = server_with(provider.clone(), Arc::new(MemoryExpenseStore::new()))
            .post("/customers-and-payment")
            .json(&json!({
                "name": "Ana Souza",
                "taxId": "12345678901",
                "value": 500.00,
                "dueDate": "2024-03-10"
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["customer"]["name"], "Ana Souza");
        assert_eq!(body["payment"]["description"], "Mensalidade - Ana Souza");
        assert_eq!(body["payment"]["billingMethod"], "BOLETO");
        assert_eq!(body["payment"]["value"], "500.00");
        // one customer write plus one payment write
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn missing_value_returns_400_without_touching_the_provider() {
        let provider = Arc::new(MockProvider::new());
        let response = server_with(provider.clone(), Arc::new(MemoryExpenseStore::new()))
            .post("/customers-and-payment")
            .json(&json!({
                "name": "Ana Souza",
                "taxId": "12345678901",
                "dueDate": "2024-03-10"
            }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["error"], "validation_error");
        let details = body["details"].as_array().unwrap();
        assert!(details.iter().any(|d| d.as_str().unwrap().starts_with("value")));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn failed_customer_write_leaves_no_partial_state() {
        let provider = Arc::new(MockProvider::new().failing_create_customer());
        let response = server_with(provider.clone(), Arc::new(MemoryExpenseStore::new()))
            .post("/customers-and-payment")
            .json(&json!({
                "name": "Ana Souza",
                "taxId": "12345678901",
                "value": 500.00,
                "dueDate": "2024-03-10"
            }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["error"], "upstream_error");
        // the payment write is never attempted
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn failed_payment_write_reports_partial_state() {
        let provider = Arc::new(MockProvider::new().failing_create_payment());
        let response = server_with(provider.clone(), Arc::new(MemoryExpenseStore::new()))
            .post("/customers-and-payment")
            .json(&json!({
                "name": "Ana Souza",
                "taxId": "12345678901",
                "value": 500.00,
                "dueDate": "2024-03-10"
            }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["error"], "partial_write");
        // the message must name the orphaned customer
        assert!(body["message"].as_str().unwrap().contains("cus_mock_0"));
        assert_eq!(provider.call_count(), 2);
    }
}

mod revenue {
    use super::*;

    #[tokio::test]
    async fn report_resolves_names_and_categories() {
        let provider = MockProvider::new()
            .with_customer(CustomerBuilder::new().with_id("cus_1").with_name("Ana Souza").build())
            .with_payment(
                PaymentBuilder::new()
                    .for_customer("cus_1")
                    .received_on(date(2024, 2, 8))
                    .with_description("[Matrícula] Taxa")
                    .with_value(Money::new(dec!(200)))
                    .build(),
            )
            .with_payment(
                PaymentBuilder::new()
                    .for_customer("cus_ghost")
                    .received_on(date(2024, 2, 20))
                    .with_description("Mensalidade padrão")
                    .with_value(Money::new(dec!(500)))
                    .build(),
            )
            .with_payment(
                PaymentBuilder::new()
                    .for_customer("cus_1")
                    .with_status(PaymentStatus::Pending)
                    .build(),
            );

        let response = server(provider).get("/revenue-report").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let report = body["report"].as_array().unwrap();
        // pending payments never appear; most recent first
        assert_eq!(report.len(), 2);
        assert_eq!(report[0]["customerName"], "Cliente não encontrado");
        assert_eq!(report[0]["category"], "Mensalidade");
        assert_eq!(report[1]["customerName"], "Ana Souza");
        assert_eq!(report[1]["category"], "Matrícula");
        assert_eq!(report[1]["type"], "revenue");
    }

    #[tokio::test]
    async fn create_revenue_encodes_the_category() {
        let provider = Arc::new(MockProvider::new());
        let response = server_with(provider.clone(), Arc::new(MemoryExpenseStore::new()))
            .post("/revenue")
            .json(&json!({
                "customerId": "cus_1",
                "description": "Taxa de uniforme",
                "value": 120.00,
                "dueDate": "2024-04-10",
                "category": "Uniforme"
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["description"], "[Uniforme] Taxa de uniforme");
        assert_eq!(body["customerId"], "cus_1");
    }

    #[tokio::test]
    async fn create_revenue_without_customer_is_rejected() {
        let provider = Arc::new(MockProvider::new());
        let response = server_with(provider.clone(), Arc::new(MemoryExpenseStore::new()))
            .post("/revenue")
            .json(&json!({
                "description": "Taxa",
                "value": 120.00,
                "dueDate": "2024-04-10"
            }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(provider.call_count(), 0);
    }
}

mod expenses {
    use super::*;

    #[tokio::test]
    async fn posted_expenses_show_up_in_the_listing() {
        let server = server(MockProvider::new());

        let created = server
            .post("/expenses")
            .json(&json!({
                "description": "Feira da semana",
                "value": 150.75,
                "category": "Alimentação",
                "date": "2024-03-05"
            }))
            .await;
        created.assert_status_ok();
        let created: Value = created.json();
        assert!(created["id"].as_str().is_some());
        assert_eq!(created["value"], "150.75");

        let listed = server.get("/expenses").await;
        listed.assert_status_ok();
        let body: Value = listed.json();
        let expenses = body["expenses"].as_array().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0]["description"], "Feira da semana");
        assert_eq!(expenses[0]["id"], created["id"]);
    }

    #[tokio::test]
    async fn missing_fields_are_rejected_with_field_messages() {
        let response = server(MockProvider::new())
            .post("/expenses")
            .json(&json!({ "description": "Feira" }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        let details: Vec<&str> = body["details"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d.as_str().unwrap())
            .collect();
        assert!(details.iter().any(|d| d.starts_with("value")));
        assert!(details.iter().any(|d| d.starts_with("category")));
        assert!(details.iter().any(|d| d.starts_with("date")));
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_500() {
        let response = server_with(
            Arc::new(MockProvider::new()),
            Arc::new(MockExpenseStore::failing()),
        )
        .get("/expenses")
        .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["error"], "store_error");
    }
}

mod dashboard {
    use super::*;

    #[tokio::test]
    async fn summary_aggregates_revenue_expenses_and_customers() {
        let today = Utc::now().date_naive();
        let provider = MockProvider::new()
            .with_payment(
                PaymentBuilder::new()
                    .with_id("pay_1")
                    .for_customer("cus_1")
                    .received_on(today)
                    .with_value(Money::new(dec!(500)))
                    .build(),
            )
            .with_payment(
                PaymentBuilder::new()
                    .with_id("pay_2")
                    .for_customer("cus_2")
                    .with_status(PaymentStatus::Pending)
                    .with_value(Money::new(dec!(999)))
                    .build(),
            );

        let expenses: Arc<dyn ExpenseStore> = Arc::new(MemoryExpenseStore::new());
        expenses
            .append(ExpenseBuilder::new().with_category("Aluguel").with_value(Money::new(dec!(800))).build_new())
            .await
            .unwrap();
        expenses
            .append(ExpenseBuilder::new().with_category("Alimentação").with_value(Money::new(dec!(100))).build_new())
            .await
            .unwrap();
        expenses
            .append(ExpenseBuilder::new().with_category("Alimentação").with_value(Money::new(dec!(50))).build_new())
            .await
            .unwrap();

        let response = server_with(Arc::new(provider), expenses)
            .get("/dashboard-summary")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["totalRevenue"], "500.00");
        assert_eq!(body["totalExpenses"], "950.00");
        assert_eq!(body["netProfit"], "-450.00");
        assert_eq!(body["totalCustomers"], 2);

        let series = body["monthlyRevenue"].as_array().unwrap();
        assert_eq!(series.len(), 6);
        assert_eq!(series[5]["revenue"], "500.00");

        assert_eq!(body["expenseByCategory"]["labels"], json!(["Aluguel", "Alimentação"]));
        assert_eq!(body["expenseByCategory"]["values"], json!(["800.00", "150.00"]));
    }

    #[tokio::test]
    async fn statement_unifies_revenue_and_expenses_most_recent_first() {
        let provider = MockProvider::new()
            .with_customer(CustomerBuilder::new().with_id("cus_1").with_name("Ana Souza").build())
            .with_payment(
                PaymentBuilder::new()
                    .for_customer("cus_1")
                    .received_on(date(2024, 2, 5))
                    .with_value(Money::new(dec!(500)))
                    .build(),
            );

        let store: Arc<dyn ExpenseStore> = Arc::new(MemoryExpenseStore::new());
        store
            .append(
                ExpenseBuilder::new()
                    .with_description("Aluguel de fevereiro")
                    .with_category("Aluguel")
                    .on(date(2024, 2, 20))
                    .build_new(),
            )
            .await
            .unwrap();

        let response = server_with(Arc::new(provider), store)
            .get("/financial-statement")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        let statement = body["statement"].as_array().unwrap();
        assert_eq!(statement.len(), 2);

        assert_eq!(statement[0]["type"], "expense");
        assert_eq!(statement[0]["customerName"], "N/A");
        assert_eq!(statement[0]["category"], "Aluguel");

        assert_eq!(statement[1]["type"], "revenue");
        assert_eq!(statement[1]["customerName"], "Ana Souza");
        assert_eq!(statement[1]["date"], "2024-02-05");
    }
}

#[tokio::test]
async fn health_check_reports_version() {
    let response = server(MockProvider::new()).get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].as_str().is_some());
}
