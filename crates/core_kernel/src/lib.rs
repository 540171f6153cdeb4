//! Core Kernel - Foundational types and utilities for the daycare finance system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money with precise decimal arithmetic
//! - Month arithmetic for revenue bucketing and trailing windows
//! - Common identifiers and value objects

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use money::Money;
pub use temporal::{MonthKey, TemporalError};
pub use identifiers::{CustomerId, PaymentId, ExpenseId};
pub use error::CoreError;
