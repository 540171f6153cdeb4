//! Enrollment handler: creates a customer and their first tuition payment
//!
//! Two sequential provider writes. There is no compensating action when the
//! second write fails after the first succeeded; the error response names
//! the orphaned customer so the operator can follow up.

use axum::{extract::State, Json};
use tracing::{info, warn};

use domain_finance::{BillingMethod, NewPayment};

use crate::dto::enrollment::{CreateEnrollmentRequest, EnrollmentResponse};
use crate::error::ApiError;
use crate::AppState;

/// Handles `POST /customers-and-payment`
pub async fn create_customer_and_payment(
    State(state): State<AppState>,
    Json(request): Json<CreateEnrollmentRequest>,
) -> Result<Json<EnrollmentResponse>, ApiError> {
    let enrollment = request.validated()?;

    let customer = state.provider.create_customer(enrollment.customer).await?;

    let payment = state
        .provider
        .create_payment(NewPayment {
            customer_id: customer.id.clone(),
            billing_method: BillingMethod::Boleto,
            value: enrollment.value,
            due_date: enrollment.due_date,
            description: format!("Mensalidade - {}", customer.name),
        })
        .await
        .map_err(|e| {
            warn!(customer_id = %customer.id, "payment creation failed after customer creation");
            ApiError::partial_write(customer.id.clone(), e)
        })?;

    info!(customer_id = %customer.id, payment_id = %payment.id, "enrollment created");

    Ok(Json(EnrollmentResponse {
        customer: customer.into(),
        payment: payment.into(),
    }))
}
