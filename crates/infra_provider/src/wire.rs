//! Provider wire shapes
//!
//! The provider speaks camelCase JSON and wraps every listing in a
//! `{"data": [...]}` envelope. These types decode exactly what this system
//! consumes and convert into the domain records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{CustomerId, Money, PaymentId};
use domain_finance::{BillingMethod, Customer, NewCustomer, NewPayment, Payment, PaymentStatus};

/// Listing envelope wrapping every collection response
#[derive(Debug, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct WireCustomer {
    pub id: String,
    pub name: String,
}

impl From<WireCustomer> for Customer {
    fn from(wire: WireCustomer) -> Self {
        Customer {
            id: CustomerId::new(wire.id),
            name: wire.name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireNewCustomer {
    pub name: String,
    pub tax_id: String,
}

impl From<NewCustomer> for WireNewCustomer {
    fn from(new: NewCustomer) -> Self {
        WireNewCustomer {
            name: new.name,
            tax_id: new.tax_id,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePayment {
    pub id: String,
    pub customer_id: String,
    pub status: PaymentStatus,
    pub value: Decimal,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_billing_method")]
    pub billing_method: BillingMethod,
}

fn default_billing_method() -> BillingMethod {
    BillingMethod::Other
}

impl From<WirePayment> for Payment {
    fn from(wire: WirePayment) -> Self {
        Payment {
            id: PaymentId::new(wire.id),
            customer_id: CustomerId::new(wire.customer_id),
            status: wire.status,
            value: Money::new(wire.value),
            due_date: wire.due_date,
            payment_date: wire.payment_date,
            description: wire.description.unwrap_or_default(),
            billing_method: wire.billing_method,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireNewPayment {
    pub customer_id: String,
    pub billing_method: BillingMethod,
    pub value: Decimal,
    pub due_date: NaiveDate,
    pub description: String,
}

impl From<NewPayment> for WireNewPayment {
    fn from(new: NewPayment) -> Self {
        WireNewPayment {
            customer_id: new.customer_id.into(),
            billing_method: new.billing_method,
            value: new.value.amount(),
            due_date: new.due_date,
            description: new.description,
        }
    }
}
