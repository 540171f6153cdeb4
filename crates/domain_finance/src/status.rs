//! Student payment status derivation
//!
//! For each customer and their full payment list, derives whether the
//! student is current or delinquent, the next due date, and the monthly fee.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use core_kernel::{CustomerId, Money};

use crate::records::{Customer, Payment, PaymentStatus};

/// Whether a student is current on payments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DelinquencyStatus {
    /// Current on payments
    Adimplente,
    /// Has at least one overdue charge
    Inadimplente,
}

/// Label rendered when every charge is settled and nothing further is pending
pub const SETTLED_LABEL: &str = "Em dia";

/// Label rendered when the provider has never issued a charge
pub const NO_CHARGES_LABEL: &str = "Nenhuma cobrança emitida";

/// The next date a charge falls due, or a sentinel when none is pending
///
/// Serializes as an ISO date string or one of the sentinel labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextDueDate {
    /// An open charge falls due on this date
    Due(NaiveDate),
    /// All issued charges are settled
    Settled,
    /// No charges have ever been issued
    NoCharges,
}

impl fmt::Display for NextDueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextDueDate::Due(date) => write!(f, "{date}"),
            NextDueDate::Settled => write!(f, "{SETTLED_LABEL}"),
            NextDueDate::NoCharges => write!(f, "{NO_CHARGES_LABEL}"),
        }
    }
}

impl Serialize for NextDueDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NextDueDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            SETTLED_LABEL => Ok(NextDueDate::Settled),
            NO_CHARGES_LABEL => Ok(NextDueDate::NoCharges),
            date => date
                .parse()
                .map(NextDueDate::Due)
                .map_err(|_| serde::de::Error::custom(format!("invalid next due date: {s}"))),
        }
    }
}

/// Per-student payment standing, recomputed on every request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentStatus {
    pub customer_id: CustomerId,
    pub name: String,
    pub status: DelinquencyStatus,
    pub next_due_date: NextDueDate,
    pub monthly_fee: Money,
}

/// Derives the payment standing for one customer from their full payment list.
///
/// A customer with zero payments is a valid terminal state (current, fee
/// zero, no charges issued), not a failure.
pub fn derive_student_status(customer: &Customer, payments: &[Payment]) -> StudentStatus {
    let status = if payments.iter().any(|p| p.status == PaymentStatus::Overdue) {
        DelinquencyStatus::Inadimplente
    } else {
        DelinquencyStatus::Adimplente
    };

    // Open charges, earliest due date first. The sort is stable so input
    // order breaks ties.
    let mut open: Vec<&Payment> = payments.iter().filter(|p| p.status.is_open()).collect();
    open.sort_by_key(|p| p.due_date);

    let (next_due_date, monthly_fee) = if let Some(next) = open.first() {
        (NextDueDate::Due(next.due_date), next.value)
    } else if !payments.is_empty() {
        // Everything settled: the fee is carried forward from the most
        // recently paid charge (payment date, falling back to due date).
        let mut settled: Vec<&Payment> = payments.iter().collect();
        settled.sort_by(|a, b| b.effective_date().cmp(&a.effective_date()));
        (NextDueDate::Settled, settled[0].value)
    } else {
        (NextDueDate::NoCharges, Money::zero())
    };

    StudentStatus {
        customer_id: customer.id.clone(),
        name: customer.name.clone(),
        status,
        next_due_date,
        monthly_fee,
    }
}
