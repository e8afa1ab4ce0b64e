//! Customer records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::schema::{self, ValidationError};
use crate::view_state::{CellValue, Column, MatchPolicy, TableRecord};

use super::CrmRecord;

/// Relationship status of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerStatus {
    Active,
    Inactive,
    Pending,
}

impl CustomerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "Active",
            CustomerStatus::Inactive => "Inactive",
            CustomerStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One customer in the CRM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub status: CustomerStatus,
    /// Generated avatar URL; absent on hand-entered records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Set once at creation, never changed by updates.
    pub created_at: String,
}

/// Creation payload for a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub status: CustomerStatus,
}

/// Partial update for a customer; absent fields keep their values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CustomerStatus>,
}

impl CrmRecord for Customer {
    const COLLECTION: &'static str = "customers";
    type Draft = CustomerDraft;
    type Patch = CustomerPatch;

    fn id(&self) -> u64 {
        self.id
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn validate_draft(draft: &Self::Draft) -> Result<(), ValidationError> {
        schema::validate_customer(draft)
    }

    fn from_draft(id: u64, draft: Self::Draft, created_at: String) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            company: draft.company,
            status: draft.status,
            avatar: None,
            created_at,
        }
    }

    fn merged(&self, patch: Self::Patch) -> Self {
        Self {
            id: self.id,
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            email: patch.email.unwrap_or_else(|| self.email.clone()),
            phone: patch.phone.unwrap_or_else(|| self.phone.clone()),
            company: patch.company.unwrap_or_else(|| self.company.clone()),
            status: patch.status.unwrap_or(self.status),
            avatar: self.avatar.clone(),
            created_at: self.created_at.clone(),
        }
    }

    fn as_draft(&self) -> Self::Draft {
        CustomerDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            company: self.company.clone(),
            status: self.status,
        }
    }
}

/// Columns of the customers table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerColumn {
    Name,
    Email,
    Phone,
    Company,
    Status,
    CreatedAt,
}

impl Column for CustomerColumn {
    fn match_policy(self) -> MatchPolicy {
        match self {
            CustomerColumn::CreatedAt => MatchPolicy::DateRange,
            _ => MatchPolicy::Exact,
        }
    }
}

impl TableRecord for Customer {
    type Column = CustomerColumn;

    fn record_id(&self) -> u64 {
        self.id
    }

    fn cell(&self, column: CustomerColumn) -> CellValue {
        match column {
            CustomerColumn::Name => CellValue::Text(self.name.clone()),
            CustomerColumn::Email => CellValue::Text(self.email.clone()),
            CustomerColumn::Phone => CellValue::Text(self.phone.clone()),
            CustomerColumn::Company => CellValue::Text(self.company.clone()),
            CustomerColumn::Status => CellValue::Text(self.status.to_string()),
            CustomerColumn::CreatedAt => CellValue::from_date_str(&self.created_at),
        }
    }
}
