//! Provider and local record types
//!
//! Customers and payments are owned by the external billing provider and are
//! read-only to this system; expenses are owned locally and created through
//! user input. These are the raw inputs to the aggregation engine.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{CustomerId, ExpenseId, Money, PaymentId};

/// A customer (student guardian) record owned by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Provider-assigned identifier
    pub id: CustomerId,
    /// Display name
    pub name: String,
}

/// Status of a provider payment record
///
/// Unrecognized upstream values deserialize to `Other` rather than failing
/// the whole page; `Other` matches no aggregation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Charge issued, not yet paid
    Pending,
    /// Paid and settled
    Received,
    /// Paid, awaiting settlement
    Confirmed,
    /// Past due date and unpaid
    Overdue,
    /// Paid and later refunded
    Refunded,
    /// Any status this system does not recognize
    #[serde(other)]
    Other,
}

impl PaymentStatus {
    /// True for charges still awaiting payment (pending or overdue)
    pub fn is_open(&self) -> bool {
        matches!(self, PaymentStatus::Pending | PaymentStatus::Overdue)
    }

    /// The provider's wire spelling of this status
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Received => "RECEIVED",
            PaymentStatus::Confirmed => "CONFIRMED",
            PaymentStatus::Overdue => "OVERDUE",
            PaymentStatus::Refunded => "REFUNDED",
            PaymentStatus::Other => "OTHER",
        }
    }
}

/// How a charge is collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingMethod {
    Boleto,
    CreditCard,
    Pix,
    #[serde(other)]
    Other,
}

/// A payment (charge) record owned by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Provider-assigned identifier
    pub id: PaymentId,
    /// Customer this charge is attributed to
    pub customer_id: CustomerId,
    /// Current status
    pub status: PaymentStatus,
    /// Charge amount
    pub value: Money,
    /// Date the charge falls due
    pub due_date: NaiveDate,
    /// Date the charge was paid, absent while unpaid
    pub payment_date: Option<NaiveDate>,
    /// Free-form description; may carry a `[categoria]` prefix
    pub description: String,
    /// Collection method
    pub billing_method: BillingMethod,
}

impl Payment {
    /// The date used when ordering settled payments by recency:
    /// the payment date when recorded, otherwise the due date.
    pub fn effective_date(&self) -> NaiveDate {
        self.payment_date.unwrap_or(self.due_date)
    }
}

/// A locally-recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub value: Money,
    /// Free-form grouping key, case-sensitive, no normalization
    pub category: String,
    pub date: NaiveDate,
    /// When the record was appended to the store
    pub created_at: DateTime<Utc>,
}

/// Input shape for a new expense; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpense {
    pub description: String,
    pub value: Money,
    pub category: String,
    pub date: NaiveDate,
}

impl NewExpense {
    /// Materializes the stored record, assigning a fresh id
    pub fn into_expense(self) -> Expense {
        Expense {
            id: ExpenseId::new(),
            description: self.description,
            value: self.value,
            category: self.category,
            date: self.date,
            created_at: Utc::now(),
        }
    }
}
