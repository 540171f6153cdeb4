//! Strongly-typed identifiers for domain entities
//!
//! Provider-owned identifiers (customers, payments) arrive as opaque strings
//! and must round-trip untouched, so they are newtypes over `String`.
//! Locally-assigned identifiers (expenses) are UUIDs.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! define_provider_id {
    ($name:ident) => {
        /// An opaque identifier assigned by the billing provider
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }
    };
}

define_provider_id!(CustomerId);
define_provider_id!(PaymentId);

/// Identifier for a locally-recorded expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Creates a new random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ExpenseId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_ids_round_trip_untouched() {
        let id = CustomerId::new("cus_000005219613");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"cus_000005219613\"");
        let back: CustomerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn customer_and_payment_ids_are_distinct_types() {
        let c = CustomerId::new("abc");
        let p = PaymentId::new("abc");
        assert_eq!(c.as_str(), p.as_str());
    }

    #[test]
    fn expense_ids_are_unique() {
        assert_ne!(ExpenseId::new(), ExpenseId::new());
    }
}
