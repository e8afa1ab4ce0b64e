//! Sale records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::schema::{self, ValidationError};
use crate::view_state::{CellValue, Column, MatchPolicy, TableRecord};

use super::CrmRecord;

/// Settlement status of a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaleStatus {
    Completed,
    Pending,
    Cancelled,
}

impl SaleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Completed => "Completed",
            SaleStatus::Pending => "Pending",
            SaleStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sales record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: u64,
    pub customer: String,
    pub product: String,
    pub amount: f64,
    pub status: SaleStatus,
    pub category: String,
    /// Transaction date; unlike `createdAt`, updates may move it.
    pub date: String,
    /// Set once at creation, never changed by updates.
    pub created_at: String,
}

/// Creation payload for a sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDraft {
    pub customer: String,
    pub product: String,
    pub amount: f64,
    pub status: SaleStatus,
    pub category: String,
    pub date: String,
}

/// Partial update for a sale; absent fields keep their values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SaleStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl CrmRecord for Sale {
    const COLLECTION: &'static str = "sales";
    type Draft = SaleDraft;
    type Patch = SalePatch;

    fn id(&self) -> u64 {
        self.id
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn validate_draft(draft: &Self::Draft) -> Result<(), ValidationError> {
        schema::validate_sale(draft)
    }

    fn from_draft(id: u64, draft: Self::Draft, created_at: String) -> Self {
        Self {
            id,
            customer: draft.customer,
            product: draft.product,
            amount: draft.amount,
            status: draft.status,
            category: draft.category,
            date: draft.date,
            created_at,
        }
    }

    fn merged(&self, patch: Self::Patch) -> Self {
        Self {
            id: self.id,
            customer: patch.customer.unwrap_or_else(|| self.customer.clone()),
            product: patch.product.unwrap_or_else(|| self.product.clone()),
            amount: patch.amount.unwrap_or(self.amount),
            status: patch.status.unwrap_or(self.status),
            category: patch.category.unwrap_or_else(|| self.category.clone()),
            date: patch.date.unwrap_or_else(|| self.date.clone()),
            created_at: self.created_at.clone(),
        }
    }

    fn as_draft(&self) -> Self::Draft {
        SaleDraft {
            customer: self.customer.clone(),
            product: self.product.clone(),
            amount: self.amount,
            status: self.status,
            category: self.category.clone(),
            date: self.date.clone(),
        }
    }
}

/// Columns of the sales table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaleColumn {
    Customer,
    Product,
    Category,
    Amount,
    Status,
    Date,
    CreatedAt,
}

impl Column for SaleColumn {
    fn match_policy(self) -> MatchPolicy {
        match self {
            SaleColumn::Amount => MatchPolicy::AmountBand,
            SaleColumn::Date | SaleColumn::CreatedAt => MatchPolicy::DateRange,
            _ => MatchPolicy::Exact,
        }
    }
}

impl TableRecord for Sale {
    type Column = SaleColumn;

    fn record_id(&self) -> u64 {
        self.id
    }

    fn cell(&self, column: SaleColumn) -> CellValue {
        match column {
            SaleColumn::Customer => CellValue::Text(self.customer.clone()),
            SaleColumn::Product => CellValue::Text(self.product.clone()),
            SaleColumn::Category => CellValue::Text(self.category.clone()),
            SaleColumn::Amount => CellValue::from_number(self.amount),
            SaleColumn::Status => CellValue::Text(self.status.to_string()),
            SaleColumn::Date => CellValue::from_date_str(&self.date),
            SaleColumn::CreatedAt => CellValue::from_date_str(&self.created_at),
        }
    }
}
