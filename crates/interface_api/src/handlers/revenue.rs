//! Revenue handlers: the received-payments report and manual revenue entry

use axum::{extract::State, Json};
use tracing::info;

use domain_finance::{build_statement, PaymentQuery, PaymentStatus};

use crate::dto::common::PaymentDto;
use crate::dto::revenue::{CreateRevenueRequest, RevenueReportResponse};
use crate::error::ApiError;
use crate::AppState;

/// Handles `GET /revenue-report`
pub async fn revenue_report(
    State(state): State<AppState>,
) -> Result<Json<RevenueReportResponse>, ApiError> {
    let limit = state.config.page_limit;
    let (customers, payments) = tokio::try_join!(
        state.provider.list_customers(limit),
        state
            .provider
            .list_payments(PaymentQuery::with_status(PaymentStatus::Received, limit)),
    )?;

    // The report is the statement's revenue side: same name lookup, same
    // category rules, same most-recent-first ordering.
    let report = build_statement(&customers, &payments, &[])
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(RevenueReportResponse { report }))
}

/// Handles `POST /revenue`
pub async fn create_revenue(
    State(state): State<AppState>,
    Json(request): Json<CreateRevenueRequest>,
) -> Result<Json<PaymentDto>, ApiError> {
    let new_payment = request.validated()?;
    let payment = state.provider.create_payment(new_payment).await?;

    info!(payment_id = %payment.id, customer_id = %payment.customer_id, "revenue entry created");

    Ok(Json(payment.into()))
}
