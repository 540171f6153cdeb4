//! Financial statement DTOs

use chrono::NaiveDate;
use serde::Serialize;

use core_kernel::Money;
use domain_finance::{EntryKind, StatementEntry};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementEntryDto {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub value: Money,
    pub customer_name: String,
}

impl From<StatementEntry> for StatementEntryDto {
    fn from(entry: StatementEntry) -> Self {
        Self {
            kind: entry.kind,
            date: entry.date,
            description: entry.description,
            category: entry.category,
            value: entry.value,
            customer_name: entry.customer_name,
        }
    }
}

/// Response of `GET /financial-statement`
#[derive(Debug, Serialize)]
pub struct StatementResponse {
    pub statement: Vec<StatementEntryDto>,
}
