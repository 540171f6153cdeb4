//! Student status DTOs

use serde::Serialize;

use core_kernel::{CustomerId, Money};
use domain_finance::{DelinquencyStatus, NextDueDate, StudentStatus};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStatusDto {
    pub customer_id: CustomerId,
    pub name: String,
    pub status: DelinquencyStatus,
    pub next_due_date: NextDueDate,
    pub monthly_fee: Money,
}

impl From<StudentStatus> for StudentStatusDto {
    fn from(status: StudentStatus) -> Self {
        Self {
            customer_id: status.customer_id,
            name: status.name,
            status: status.status,
            next_due_date: status.next_due_date,
            monthly_fee: status.monthly_fee,
        }
    }
}

/// Response of `GET /students-status`
#[derive(Debug, Serialize)]
pub struct StudentsStatusResponse {
    pub students: Vec<StudentStatusDto>,
}
