//! Students status handler
//!
//! Fetches every customer, then each customer's full payment list through a
//! bounded-concurrency ordered fan-out, and derives one status per student.
//! Output order matches the customer-list order regardless of completion
//! order; the first failed sub-request fails the whole response.

use axum::{extract::State, Json};
use futures_util::{stream, StreamExt, TryStreamExt};

use domain_finance::{derive_student_status, PaymentQuery, StudentStatus};

use crate::dto::students::StudentsStatusResponse;
use crate::error::ApiError;
use crate::AppState;

/// Handles `GET /students-status`
pub async fn students_status(
    State(state): State<AppState>,
) -> Result<Json<StudentsStatusResponse>, ApiError> {
    let customers = state
        .provider
        .list_customers(state.config.page_limit)
        .await?;

    let statuses: Vec<StudentStatus> = stream::iter(customers)
        .map(|customer| {
            let provider = state.provider.clone();
            async move {
                let payments = provider
                    .list_payments(PaymentQuery::for_customer(customer.id.clone()))
                    .await?;
                Ok::<_, ApiError>(derive_student_status(&customer, &payments))
            }
        })
        .buffered(state.config.fetch_concurrency)
        .try_collect()
        .await?;

    Ok(Json(StudentsStatusResponse {
        students: statuses.into_iter().map(Into::into).collect(),
    }))
}
