//! Collaborator ports
//!
//! The aggregation engine is pure; everything it consumes arrives through
//! these two ports. `infra_provider` implements [`ProviderPort`] against
//! the real billing API, `infra_store` implements [`ExpenseStore`] over a
//! file or memory; the `mock` feature ships canned implementations for
//! tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{CustomerId, Money};

use crate::error::PortError;
use crate::records::{BillingMethod, Customer, Expense, NewExpense, Payment, PaymentStatus};

/// Input shape for creating a provider customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    /// CPF/CNPJ the provider requires on every customer record
    pub tax_id: String,
}

/// Input shape for creating a provider payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPayment {
    pub customer_id: CustomerId,
    pub billing_method: BillingMethod,
    pub value: Money,
    pub due_date: NaiveDate,
    pub description: String,
}

/// Server-side filter for payment listings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentQuery {
    pub customer_id: Option<CustomerId>,
    pub status: Option<PaymentStatus>,
    pub limit: Option<u32>,
}

impl PaymentQuery {
    /// All payments of one customer, unbounded
    pub fn for_customer(customer_id: CustomerId) -> Self {
        Self {
            customer_id: Some(customer_id),
            ..Self::default()
        }
    }

    /// One page of payments in a given status
    pub fn with_status(status: PaymentStatus, limit: u32) -> Self {
        Self {
            status: Some(status),
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// One page of payments in any status
    pub fn page(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }
}

/// Read/write access to the external billing provider
#[async_trait]
pub trait ProviderPort: Send + Sync {
    async fn list_customers(&self, limit: u32) -> Result<Vec<Customer>, PortError>;

    async fn create_customer(&self, new: NewCustomer) -> Result<Customer, PortError>;

    async fn list_payments(&self, query: PaymentQuery) -> Result<Vec<Payment>, PortError>;

    async fn create_payment(&self, new: NewPayment) -> Result<Payment, PortError>;
}

/// Access to the locally-persisted expense list
///
/// The store's lifecycle is explicit: empty at process start (a file-backed
/// store loads whatever its file holds), mutated only via `append`.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Expense>, PortError>;

    /// Persists the expense and assigns its id
    async fn append(&self, new: NewExpense) -> Result<Expense, PortError>;
}
