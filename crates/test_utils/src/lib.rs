//! Test Utilities
//!
//! Shared builders and fixtures for constructing domain records in tests.
//! Builders carry sensible defaults so a test only spells out the fields it
//! actually cares about.

pub mod builders;
pub mod fixtures;

pub use builders::{CustomerBuilder, ExpenseBuilder, PaymentBuilder};
