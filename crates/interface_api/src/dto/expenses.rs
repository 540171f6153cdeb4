//! Expense DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{ExpenseId, Money};
use domain_finance::{Expense, NewExpense};

use crate::dto::common::validate_non_negative;
use crate::error::ApiError;

/// Body of `POST /expenses`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    #[validate(required, length(min = 1, message = "must not be empty"))]
    pub description: Option<String>,
    #[validate(required, custom(function = "validate_non_negative"))]
    pub value: Option<Decimal>,
    #[validate(required, length(min = 1, message = "must not be empty"))]
    pub category: Option<String>,
    #[validate(required)]
    pub date: Option<NaiveDate>,
}

impl CreateExpenseRequest {
    /// Validates the body and converts it into the store input
    pub fn validated(self) -> Result<NewExpense, ApiError> {
        self.validate().map_err(ApiError::from_validation)?;
        let (Some(description), Some(value), Some(category), Some(date)) =
            (self.description, self.value, self.category, self.date)
        else {
            return Err(ApiError::Validation(vec!["body: incomplete".to_string()]));
        };
        Ok(NewExpense {
            description,
            value: Money::new(value),
            category,
            date,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDto {
    pub id: ExpenseId,
    pub description: String,
    pub value: Money,
    pub category: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<Expense> for ExpenseDto {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            description: expense.description,
            value: expense.value,
            category: expense.category,
            date: expense.date,
            created_at: expense.created_at,
        }
    }
}

/// Response of `GET /expenses`
#[derive(Debug, Serialize)]
pub struct ExpensesResponse {
    pub expenses: Vec<ExpenseDto>,
}
