//! DTOs shared across surfaces

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use validator::ValidationError;

use core_kernel::{CustomerId, Money, PaymentId};
use domain_finance::{BillingMethod, Customer, Payment, PaymentStatus};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: CustomerId,
    pub name: String,
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub id: PaymentId,
    pub customer_id: CustomerId,
    pub status: PaymentStatus,
    pub value: Money,
    pub due_date: NaiveDate,
    pub payment_date: Option<NaiveDate>,
    pub description: String,
    pub billing_method: BillingMethod,
}

impl From<Payment> for PaymentDto {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id,
            customer_id: payment.customer_id,
            status: payment.status,
            value: payment.value,
            due_date: payment.due_date,
            payment_date: payment.payment_date,
            description: payment.description,
            billing_method: payment.billing_method,
        }
    }
}

/// Currency amounts on request bodies must not be negative
pub fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(ValidationError::new("non_negative")
            .with_message("must not be negative".into()));
    }
    Ok(())
}
