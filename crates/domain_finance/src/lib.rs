//! Finance Domain - Aggregation and Reconciliation Engine
//!
//! This crate turns raw provider records (customers, payments) plus local
//! expense entries into the derived views the service exposes:
//!
//! - per-student payment standing ([`status`])
//! - revenue/expense dashboard figures ([`dashboard`])
//! - the unified chronological financial statement ([`statement`])
//!
//! The engine is a pure transformation: derived entities have no lifecycle
//! of their own and are recomputed on every request from current provider
//! and store state. I/O happens behind the [`ports`] traits.

pub mod category;
pub mod dashboard;
pub mod error;
pub mod ports;
pub mod records;
pub mod statement;
pub mod status;

#[cfg(feature = "mock")]
pub mod mock;

pub use category::{encode_category, tuition_category, DEFAULT_CATEGORY};
pub use dashboard::{summarize, DashboardSummary, MonthlyRevenuePoint};
pub use error::PortError;
pub use ports::{ExpenseStore, NewCustomer, NewPayment, PaymentQuery, ProviderPort};
pub use records::{
    BillingMethod, Customer, Expense, NewExpense, Payment, PaymentStatus,
};
pub use statement::{build_statement, revenue_entries, EntryKind, StatementEntry};
pub use status::{derive_student_status, DelinquencyStatus, NextDueDate, StudentStatus};
