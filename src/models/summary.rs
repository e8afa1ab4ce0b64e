//! Aggregate metrics for the dashboard view.

use serde::{Deserialize, Serialize};

use super::{Customer, CustomerStatus, Sale, Task, TaskStatus};

/// Headline numbers shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Customers whose status is Active.
    pub active_customers: usize,
    /// Tasks whose status is Completed.
    pub completed_tasks: usize,
    /// Sum over all sale amounts, regardless of status.
    pub total_revenue: f64,
}

impl DashboardSummary {
    /// Compute the summary from already-loaded collections.
    pub fn compute(customers: &[Customer], tasks: &[Task], sales: &[Sale]) -> Self {
        Self {
            active_customers: customers
                .iter()
                .filter(|c| c.status == CustomerStatus::Active)
                .count(),
            completed_tasks: tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Completed)
                .count(),
            total_revenue: sales.iter().map(|s| s.amount).sum(),
        }
    }
}

/// One month of the dashboard's sales-performance series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyMetric {
    /// Short month label ("Jan" .. "Dec").
    pub month: String,
    pub sales: u32,
    pub customers: u32,
    pub revenue: u32,
}
