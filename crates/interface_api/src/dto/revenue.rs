//! Revenue DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{CustomerId, Money};
use domain_finance::{encode_category, BillingMethod, NewPayment};

use crate::dto::common::validate_non_negative;
use crate::dto::statement::StatementEntryDto;
use crate::error::ApiError;

/// Body of `POST /revenue`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRevenueRequest {
    #[validate(required, length(min = 1, message = "must not be empty"))]
    pub customer_id: Option<String>,
    #[validate(required, length(min = 1, message = "must not be empty"))]
    pub description: Option<String>,
    #[validate(required, custom(function = "validate_non_negative"))]
    pub value: Option<Decimal>,
    #[validate(required)]
    pub due_date: Option<NaiveDate>,
    /// Optional; rides in the description as a bracketed prefix so the
    /// statement recovers it
    pub category: Option<String>,
}

impl CreateRevenueRequest {
    /// Validates the body and converts it into the provider write input
    pub fn validated(self) -> Result<NewPayment, ApiError> {
        self.validate().map_err(ApiError::from_validation)?;
        let (Some(customer_id), Some(description), Some(value), Some(due_date)) =
            (self.customer_id, self.description, self.value, self.due_date)
        else {
            return Err(ApiError::Validation(vec!["body: incomplete".to_string()]));
        };
        Ok(NewPayment {
            customer_id: CustomerId::new(customer_id),
            billing_method: BillingMethod::Boleto,
            value: Money::new(value),
            due_date,
            description: encode_category(self.category.as_deref(), &description),
        })
    }
}

/// Response of `GET /revenue-report`
#[derive(Debug, Serialize)]
pub struct RevenueReportResponse {
    pub report: Vec<StatementEntryDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_finance::tuition_category;

    #[test]
    fn category_is_encoded_into_the_description() {
        let request: CreateRevenueRequest = serde_json::from_str(
            r#"{
                "customerId": "cus_1",
                "description": "Taxa de matrícula",
                "value": 200,
                "dueDate": "2024-03-10",
                "category": "Matrícula"
            }"#,
        )
        .unwrap();

        let payment = request.validated().unwrap();
        assert_eq!(payment.description, "[Matrícula] Taxa de matrícula");
        assert_eq!(tuition_category(&payment.description), "Matrícula");
        assert_eq!(payment.billing_method, BillingMethod::Boleto);
    }

    #[test]
    fn category_is_optional() {
        let request: CreateRevenueRequest = serde_json::from_str(
            r#"{
                "customerId": "cus_1",
                "description": "Mensalidade",
                "value": 500,
                "dueDate": "2024-03-10"
            }"#,
        )
        .unwrap();

        let payment = request.validated().unwrap();
        assert_eq!(payment.description, "Mensalidade");
    }

    #[test]
    fn missing_customer_id_fails_validation() {
        let request: CreateRevenueRequest = serde_json::from_str(
            r#"{"description": "Mensalidade", "value": 500, "dueDate": "2024-03-10"}"#,
        )
        .unwrap();
        assert!(request.validated().is_err());
    }
}
