//! Dashboard DTOs

use serde::Serialize;

use core_kernel::Money;
use domain_finance::{DashboardSummary, MonthlyRevenuePoint};

#[derive(Debug, Serialize)]
pub struct MonthlyRevenuePointDto {
    pub month: String,
    pub revenue: Money,
}

impl From<MonthlyRevenuePoint> for MonthlyRevenuePointDto {
    fn from(point: MonthlyRevenuePoint) -> Self {
        Self {
            month: point.month,
            revenue: point.revenue,
        }
    }
}

/// Parallel label/value series, in first-seen-category order
#[derive(Debug, Serialize)]
pub struct CategorySeriesDto {
    pub labels: Vec<String>,
    pub values: Vec<Money>,
}

/// Response of `GET /dashboard-summary`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryDto {
    pub total_revenue: Money,
    pub total_expenses: Money,
    pub net_profit: Money,
    pub total_customers: usize,
    pub monthly_revenue: Vec<MonthlyRevenuePointDto>,
    pub expense_by_category: CategorySeriesDto,
}

impl From<DashboardSummary> for DashboardSummaryDto {
    fn from(summary: DashboardSummary) -> Self {
        Self {
            total_revenue: summary.total_revenue,
            total_expenses: summary.total_expenses,
            net_profit: summary.net_profit,
            total_customers: summary.total_customers,
            monthly_revenue: summary.monthly_revenue.into_iter().map(Into::into).collect(),
            expense_by_category: CategorySeriesDto {
                labels: summary.expense_labels,
                values: summary.expense_values,
            },
        }
    }
}
