//! Expense handlers

use axum::{extract::State, Json};
use tracing::info;

use crate::dto::expenses::{CreateExpenseRequest, ExpenseDto, ExpensesResponse};
use crate::error::ApiError;
use crate::AppState;

/// Handles `GET /expenses`
pub async fn list_expenses(
    State(state): State<AppState>,
) -> Result<Json<ExpensesResponse>, ApiError> {
    let expenses = state.expenses.list().await?;
    Ok(Json(ExpensesResponse {
        expenses: expenses.into_iter().map(Into::into).collect(),
    }))
}

/// Handles `POST /expenses`
pub async fn create_expense(
    State(state): State<AppState>,
    Json(request): Json<CreateExpenseRequest>,
) -> Result<Json<ExpenseDto>, ApiError> {
    let new_expense = request.validated()?;
    let expense = state.expenses.append(new_expense).await?;

    info!(expense_id = %expense.id, category = %expense.category, "expense recorded");

    Ok(Json(expense.into()))
}
