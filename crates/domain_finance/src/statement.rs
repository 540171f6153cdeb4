//! Statement unification
//!
//! Joins received provider payments (revenue) with locally-recorded
//! expenses into one chronological financial statement, and provides the
//! revenue-only report view over the same rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use core_kernel::{CustomerId, Money};

use crate::category::tuition_category;
use crate::records::{Customer, Expense, Payment, PaymentStatus};

/// Name rendered when a payment references a customer missing from the page
pub const UNKNOWN_CUSTOMER: &str = "Cliente não encontrado";

/// Name rendered on expense entries, which have no customer
pub const NO_CUSTOMER: &str = "N/A";

/// Whether a statement entry is money in or money out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Revenue,
    Expense,
}

/// One row of the unified financial statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementEntry {
    pub kind: EntryKind,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub value: Money,
    pub customer_name: String,
}

/// Derives revenue entries from received payments, resolving customer names
/// against the given customer list. Entries keep the payment page order.
pub fn revenue_entries(customers: &[Customer], payments: &[Payment]) -> Vec<StatementEntry> {
    let names: HashMap<&CustomerId, &str> = customers
        .iter()
        .map(|c| (&c.id, c.name.as_str()))
        .collect();

    payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Received)
        .map(|p| StatementEntry {
            kind: EntryKind::Revenue,
            date: p.effective_date(),
            description: p.description.clone(),
            category: tuition_category(&p.description).to_string(),
            value: p.value,
            customer_name: names
                .get(&p.customer_id)
                .copied()
                .unwrap_or(UNKNOWN_CUSTOMER)
                .to_string(),
        })
        .collect()
}

fn expense_entries(expenses: &[Expense]) -> Vec<StatementEntry> {
    expenses
        .iter()
        .map(|e| StatementEntry {
            kind: EntryKind::Expense,
            date: e.date,
            description: e.description.clone(),
            category: e.category.clone(),
            value: e.value,
            customer_name: NO_CUSTOMER.to_string(),
        })
        .collect()
}

/// Builds the unified statement: revenue entries followed by expense
/// entries, stably sorted most recent first. Ties keep the concatenation
/// order (revenue before expense).
pub fn build_statement(
    customers: &[Customer],
    payments: &[Payment],
    expenses: &[Expense],
) -> Vec<StatementEntry> {
    let mut entries = revenue_entries(customers, payments);
    entries.extend(expense_entries(expenses));
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries
}
