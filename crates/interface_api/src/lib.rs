//! HTTP API Layer
//!
//! This crate provides the REST API for the daycare finance service using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: one thin handler per surface, all delegating to the
//!   aggregation engine
//! - **DTOs**: camelCase request/response shapes with field validation
//! - **Error Handling**: consistent structured JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(provider, expenses, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_finance::{ExpenseStore, ProviderPort};

use crate::config::ApiConfig;
use crate::handlers::{dashboard, enrollment, expenses, health, revenue, students};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ProviderPort>,
    pub expenses: Arc<dyn ExpenseStore>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `provider` - Gateway to the external billing provider
/// * `expenses` - Local expense store
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(
    provider: Arc<dyn ProviderPort>,
    expenses: Arc<dyn ExpenseStore>,
    config: ApiConfig,
) -> Router {
    let state = AppState {
        provider,
        expenses,
        config,
    };

    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/customers-and-payment",
            post(enrollment::create_customer_and_payment),
        )
        .route("/students-status", get(students::students_status))
        .route("/revenue-report", get(revenue::revenue_report))
        .route("/revenue", post(revenue::create_revenue))
        .route("/expenses", get(expenses::list_expenses))
        .route("/expenses", post(expenses::create_expense))
        .route("/dashboard-summary", get(dashboard::dashboard_summary))
        .route("/financial-statement", get(dashboard::financial_statement))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
