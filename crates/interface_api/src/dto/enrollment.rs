//! Enrollment DTOs (customer + first payment)

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::Money;
use domain_finance::NewCustomer;

use crate::dto::common::{validate_non_negative, CustomerDto, PaymentDto};
use crate::error::ApiError;

/// Body of `POST /customers-and-payment`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnrollmentRequest {
    #[validate(required, length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,
    #[validate(required, length(min = 1, message = "must not be empty"))]
    pub tax_id: Option<String>,
    #[validate(required, custom(function = "validate_non_negative"))]
    pub value: Option<Decimal>,
    #[validate(required)]
    pub due_date: Option<NaiveDate>,
}

/// Validated enrollment input
#[derive(Debug)]
pub struct Enrollment {
    pub customer: NewCustomer,
    pub value: Money,
    pub due_date: NaiveDate,
}

impl CreateEnrollmentRequest {
    /// Validates the body and unwraps it into domain input. Returns a 400
    /// validation error before any provider call is attempted.
    pub fn validated(self) -> Result<Enrollment, ApiError> {
        self.validate().map_err(ApiError::from_validation)?;
        let (Some(name), Some(tax_id), Some(value), Some(due_date)) =
            (self.name, self.tax_id, self.value, self.due_date)
        else {
            return Err(ApiError::Validation(vec!["body: incomplete".to_string()]));
        };
        Ok(Enrollment {
            customer: NewCustomer { name, tax_id },
            value: Money::new(value),
            due_date,
        })
    }
}

/// Response of `POST /customers-and-payment`
#[derive(Debug, Serialize)]
pub struct EnrollmentResponse {
    pub customer: CustomerDto,
    pub payment: PaymentDto,
}
