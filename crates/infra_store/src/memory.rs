//! In-memory expense store
//!
//! Backs the service when no expense file is configured. State is explicit
//! and injected: empty at construction, mutated only via `append`.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use domain_finance::{Expense, ExpenseStore, NewExpense, PortError};

/// Expense store holding records in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryExpenseStore {
    expenses: Arc<Mutex<Vec<Expense>>>,
}

impl MemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExpenseStore for MemoryExpenseStore {
    async fn list(&self) -> Result<Vec<Expense>, PortError> {
        Ok(self.expenses.lock().await.clone())
    }

    async fn append(&self, new: NewExpense) -> Result<Expense, PortError> {
        let expense = new.into_expense();
        self.expenses.lock().await.push(expense.clone());
        Ok(expense)
    }
}
