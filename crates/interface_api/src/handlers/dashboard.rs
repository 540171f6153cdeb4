//! Dashboard and financial statement handlers

use axum::{extract::State, Json};
use chrono::Utc;

use domain_finance::{build_statement, summarize, PaymentQuery, PaymentStatus};

use crate::dto::dashboard::DashboardSummaryDto;
use crate::dto::statement::StatementResponse;
use crate::error::ApiError;
use crate::AppState;

/// Handles `GET /dashboard-summary`
pub async fn dashboard_summary(
    State(state): State<AppState>,
) -> Result<Json<DashboardSummaryDto>, ApiError> {
    let (payments, expenses) = tokio::try_join!(
        state
            .provider
            .list_payments(PaymentQuery::page(state.config.page_limit)),
        state.expenses.list(),
    )?;

    let summary = summarize(&payments, &expenses, Utc::now().date_naive());

    Ok(Json(summary.into()))
}

/// Handles `GET /financial-statement`
pub async fn financial_statement(
    State(state): State<AppState>,
) -> Result<Json<StatementResponse>, ApiError> {
    let limit = state.config.page_limit;
    let (customers, payments, expenses) = tokio::try_join!(
        state.provider.list_customers(limit),
        state
            .provider
            .list_payments(PaymentQuery::with_status(PaymentStatus::Received, limit)),
        state.expenses.list(),
    )?;

    let statement = build_statement(&customers, &payments, &expenses)
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(StatementResponse { statement }))
}
