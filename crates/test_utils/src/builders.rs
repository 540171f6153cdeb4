//! Test Data Builders
//!
//! Builder patterns for constructing test records with sensible defaults.

use chrono::NaiveDate;

use core_kernel::{CustomerId, Money, PaymentId};
use domain_finance::{
    BillingMethod, Customer, Expense, NewExpense, Payment, PaymentStatus,
};

use crate::fixtures::{DateFixtures, MoneyFixtures, StringFixtures};

/// Builder for customer records
pub struct CustomerBuilder {
    id: CustomerId,
    name: String,
}

impl Default for CustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerBuilder {
    pub fn new() -> Self {
        Self {
            id: CustomerId::new("cus_000001"),
            name: StringFixtures::guardian_name(),
        }
    }

    pub fn with_id(mut self, id: impl Into<CustomerId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn build(self) -> Customer {
        Customer {
            id: self.id,
            name: self.name,
        }
    }
}

/// Builder for payment records
pub struct PaymentBuilder {
    id: PaymentId,
    customer_id: CustomerId,
    status: PaymentStatus,
    value: Money,
    due_date: NaiveDate,
    payment_date: Option<NaiveDate>,
    description: String,
    billing_method: BillingMethod,
}

impl Default for PaymentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentBuilder {
    pub fn new() -> Self {
        Self {
            id: PaymentId::new("pay_000001"),
            customer_id: CustomerId::new("cus_000001"),
            status: PaymentStatus::Pending,
            value: MoneyFixtures::monthly_fee(),
            due_date: DateFixtures::due_date(),
            payment_date: None,
            description: StringFixtures::tuition_description(),
            billing_method: BillingMethod::Boleto,
        }
    }

    pub fn with_id(mut self, id: impl Into<PaymentId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn for_customer(mut self, customer_id: impl Into<CustomerId>) -> Self {
        self.customer_id = customer_id.into();
        self
    }

    pub fn with_status(mut self, status: PaymentStatus) -> Self {
        self.status = status;
        self
    }

    /// Marks the payment received on the given date
    pub fn received_on(mut self, paid: NaiveDate) -> Self {
        self.status = PaymentStatus::Received;
        self.payment_date = Some(paid);
        self
    }

    pub fn with_value(mut self, value: Money) -> Self {
        self.value = value;
        self
    }

    pub fn due_on(mut self, due: NaiveDate) -> Self {
        self.due_date = due;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn build(self) -> Payment {
        Payment {
            id: self.id,
            customer_id: self.customer_id,
            status: self.status,
            value: self.value,
            due_date: self.due_date,
            payment_date: self.payment_date,
            description: self.description,
            billing_method: self.billing_method,
        }
    }
}

/// Builder for expense records
pub struct ExpenseBuilder {
    description: String,
    value: Money,
    category: String,
    date: NaiveDate,
}

impl Default for ExpenseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseBuilder {
    pub fn new() -> Self {
        Self {
            description: "Compra de mantimentos".to_string(),
            value: MoneyFixtures::expense(),
            category: "Alimentação".to_string(),
            date: DateFixtures::expense_date(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_value(mut self, value: Money) -> Self {
        self.value = value;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// The id-less input shape, as handed to an expense store
    pub fn build_new(self) -> NewExpense {
        NewExpense {
            description: self.description,
            value: self.value,
            category: self.category,
            date: self.date,
        }
    }

    /// A stored record with a fresh id
    pub fn build(self) -> Expense {
        self.build_new().into_expense()
    }
}
