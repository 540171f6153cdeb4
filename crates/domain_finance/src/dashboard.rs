//! Dashboard summary computation
//!
//! Aggregates a page of provider payments and the local expense list into
//! the figures the dashboard renders: revenue and expense totals, net
//! profit, a 6-month trailing revenue series, and expenses by category.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use core_kernel::temporal::{trailing_months, MonthKey};
use core_kernel::Money;

use crate::records::{Expense, Payment, PaymentStatus};

/// Months shown in the trailing revenue series
pub const REVENUE_WINDOW_MONTHS: usize = 6;

/// One point of the trailing monthly revenue series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRevenuePoint {
    /// Localized short month label (pt-BR)
    pub month: String,
    pub revenue: Money,
}

/// Aggregated dashboard figures, recomputed per request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_revenue: Money,
    pub total_expenses: Money,
    pub net_profit: Money,
    /// Distinct customers referenced by the payment page. Bounded by the
    /// page size, so an approximation rather than a true customer count.
    pub total_customers: usize,
    pub monthly_revenue: Vec<MonthlyRevenuePoint>,
    /// Expense categories in first-seen order, parallel to `expense_values`
    pub expense_labels: Vec<String>,
    pub expense_values: Vec<Money>,
}

/// Computes the dashboard summary from a payment page and the expense list.
///
/// `today` anchors the trailing revenue window; callers pass the current
/// calendar date. Only payments marked `RECEIVED` with a recorded payment
/// date count as revenue — a `RECEIVED` record without one is a malformed
/// upstream row and is excluded.
pub fn summarize(payments: &[Payment], expenses: &[Expense], today: NaiveDate) -> DashboardSummary {
    let received: Vec<(&Payment, NaiveDate)> = payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Received)
        .filter_map(|p| p.payment_date.map(|paid| (p, paid)))
        .collect();

    let total_revenue: Money = received.iter().map(|(p, _)| p.value).sum();

    let total_customers = payments
        .iter()
        .map(|p| &p.customer_id)
        .collect::<HashSet<_>>()
        .len();

    let mut buckets: HashMap<MonthKey, Money> = HashMap::new();
    for (payment, paid) in &received {
        *buckets.entry(MonthKey::from_date(*paid)).or_default() += payment.value;
    }

    let monthly_revenue = trailing_months(today, REVENUE_WINDOW_MONTHS)
        .into_iter()
        .map(|month| MonthlyRevenuePoint {
            month: month.label().to_string(),
            revenue: buckets.get(&month).copied().unwrap_or_default(),
        })
        .collect();

    let total_expenses: Money = expenses.iter().map(|e| e.value).sum();

    let mut expense_labels: Vec<String> = Vec::new();
    let mut expense_values: Vec<Money> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for expense in expenses {
        match positions.get(expense.category.as_str()) {
            Some(&i) => expense_values[i] += expense.value,
            None => {
                positions.insert(expense.category.as_str(), expense_labels.len());
                expense_labels.push(expense.category.clone());
                expense_values.push(expense.value);
            }
        }
    }

    DashboardSummary {
        total_revenue,
        total_expenses,
        net_profit: total_revenue - total_expenses,
        total_customers,
        monthly_revenue,
        expense_labels,
        expense_values,
    }
}
