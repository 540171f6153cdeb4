//! JSON-file-backed expense store
//!
//! Persists the expense list as a flat JSON array. Every operation takes
//! the store mutex for its whole duration, which gives the single-writer
//! discipline the file needs within one process; no cross-process
//! consistency is attempted.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use domain_finance::{Expense, ExpenseStore, NewExpense, PortError};

/// Expense store persisting to a flat JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Opens a store over `path`. The file is created on first append; a
    /// missing file reads as an empty list.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<Expense>, PortError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(PortError::storage(format!(
                    "read {}: {e}",
                    self.path.display()
                )))
            }
        };
        serde_json::from_slice(&bytes)
            .map_err(|e| PortError::storage(format!("parse {}: {e}", self.path.display())))
    }

    async fn write_all(&self, expenses: &[Expense]) -> Result<(), PortError> {
        let bytes = serde_json::to_vec_pretty(expenses)
            .map_err(|e| PortError::storage(format!("encode expenses: {e}")))?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| PortError::storage(format!("write {}: {e}", self.path.display())))
    }
}

#[async_trait]
impl ExpenseStore for JsonFileStore {
    async fn list(&self) -> Result<Vec<Expense>, PortError> {
        let _guard = self.lock.lock().await;
        self.read_all().await
    }

    async fn append(&self, new: NewExpense) -> Result<Expense, PortError> {
        let _guard = self.lock.lock().await;
        let mut expenses = self.read_all().await?;
        let expense = new.into_expense();
        expenses.push(expense.clone());
        self.write_all(&expenses).await?;
        tracing::debug!(path = %self.path.display(), count = expenses.len(), "expense appended");
        Ok(expense)
    }
}
