//! Canned port implementations for tests
//!
//! Enabled with the `mock` feature. `MockProvider` answers from fixed
//! record sets and can be told to fail specific calls; `MockExpenseStore`
//! is a plain in-memory list. Both count calls so tests can assert that
//! validation failures never reach the provider.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use core_kernel::{CustomerId, PaymentId};

use crate::error::PortError;
use crate::ports::{ExpenseStore, NewCustomer, NewPayment, PaymentQuery, ProviderPort};
use crate::records::{Customer, Expense, NewExpense, Payment, PaymentStatus};

/// Provider double answering from canned records
#[derive(Default)]
pub struct MockProvider {
    customers: Vec<Customer>,
    payments: Vec<Payment>,
    latency: HashMap<CustomerId, Duration>,
    fail_payments_for: Option<CustomerId>,
    fail_create_customer: bool,
    fail_create_payment: bool,
    calls: AtomicUsize,
    seq: AtomicUsize,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customers.push(customer);
        self
    }

    pub fn with_payment(mut self, payment: Payment) -> Self {
        self.payments.push(payment);
        self
    }

    /// Delays payment listings for one customer, for exercising completion
    /// order vs output order in fan-out code
    pub fn with_listing_latency(mut self, customer_id: CustomerId, latency: Duration) -> Self {
        self.latency.insert(customer_id, latency);
        self
    }

    /// Makes payment listings fail for one customer
    pub fn failing_payments_for(mut self, customer_id: CustomerId) -> Self {
        self.fail_payments_for = Some(customer_id);
        self
    }

    pub fn failing_create_customer(mut self) -> Self {
        self.fail_create_customer = true;
        self
    }

    /// Makes payment creation fail, for exercising the partial-write path
    pub fn failing_create_payment(mut self) -> Self {
        self.fail_create_payment = true;
        self
    }

    /// Number of provider calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn upstream_rejection(&self) -> PortError {
        PortError::Upstream {
            status: 400,
            body: "{\"errors\":[{\"code\":\"invalid_object\"}]}".to_string(),
        }
    }
}

#[async_trait]
impl ProviderPort for MockProvider {
    async fn list_customers(&self, limit: u32) -> Result<Vec<Customer>, PortError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.customers.iter().take(limit as usize).cloned().collect())
    }

    async fn create_customer(&self, new: NewCustomer) -> Result<Customer, PortError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create_customer {
            return Err(self.upstream_rejection());
        }
        let n = self.seq.fetch_add(1, Ordering::SeqCst);
        Ok(Customer {
            id: CustomerId::new(format!("cus_mock_{n}")),
            name: new.name,
        })
    }

    async fn list_payments(&self, query: PaymentQuery) -> Result<Vec<Payment>, PortError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(customer_id) = &query.customer_id {
            if let Some(latency) = self.latency.get(customer_id) {
                tokio::time::sleep(*latency).await;
            }
            if self.fail_payments_for.as_ref() == Some(customer_id) {
                return Err(PortError::connection("connection reset by peer"));
            }
        }
        let page: Vec<Payment> = self
            .payments
            .iter()
            .filter(|p| query.customer_id.as_ref().is_none_or(|c| &p.customer_id == c))
            .filter(|p| query.status.is_none_or(|s| p.status == s))
            .take(query.limit.unwrap_or(u32::MAX) as usize)
            .cloned()
            .collect();
        Ok(page)
    }

    async fn create_payment(&self, new: NewPayment) -> Result<Payment, PortError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create_payment {
            return Err(self.upstream_rejection());
        }
        let n = self.seq.fetch_add(1, Ordering::SeqCst);
        Ok(Payment {
            id: PaymentId::new(format!("pay_mock_{n}")),
            customer_id: new.customer_id,
            status: PaymentStatus::Pending,
            value: new.value,
            due_date: new.due_date,
            payment_date: None,
            description: new.description,
            billing_method: new.billing_method,
        })
    }
}

/// In-memory expense store double
#[derive(Default)]
pub struct MockExpenseStore {
    expenses: Mutex<Vec<Expense>>,
    fail: bool,
}

impl MockExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            expenses: Mutex::new(Vec::new()),
            fail: true,
        }
    }
}

#[async_trait]
impl ExpenseStore for MockExpenseStore {
    async fn list(&self) -> Result<Vec<Expense>, PortError> {
        if self.fail {
            return Err(PortError::storage("expense file unreadable"));
        }
        Ok(self.expenses.lock().unwrap().clone())
    }

    async fn append(&self, new: NewExpense) -> Result<Expense, PortError> {
        if self.fail {
            return Err(PortError::storage("expense file unwritable"));
        }
        let expense = new.into_expense();
        self.expenses.lock().unwrap().push(expense.clone());
        Ok(expense)
    }
}
