//! Record models for the three CRM collections.
//!
//! Each record kind is a flat struct with a unique integer id and an
//! immutable creation date, plus:
//!
//! - a *draft* type: the creation payload (no id, no creation date),
//! - a *patch* type: all-optional fields for partial updates,
//! - a [`CrmRecord`] implementation binding the collection name,
//!   validation, materialization, and patch merging,
//! - a column enum implementing the view-state table contract.
//!
//! Dates are carried as `YYYY-MM-DD` strings exactly as persisted; the view
//! state engine parses them at its own boundary and tolerates malformed
//! input.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::schema::ValidationError;

mod customer;
mod sale;
pub mod summary;
mod task;

pub use customer::{Customer, CustomerColumn, CustomerDraft, CustomerPatch, CustomerStatus};
pub use sale::{Sale, SaleColumn, SaleDraft, SalePatch, SaleStatus};
pub use summary::{DashboardSummary, MonthlyMetric};
pub use task::{Task, TaskColumn, TaskDraft, TaskPatch, TaskPriority, TaskStatus};

/// A record kind stored in one of the CRM collections.
///
/// Binds everything the store, the HTTP surface, and the remote provider
/// need to handle a collection generically: its wire name, its draft and
/// patch payloads, and the merge rules that keep `id` and `createdAt`
/// immutable.
pub trait CrmRecord:
    Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Collection name as it appears in file names and URL paths.
    const COLLECTION: &'static str;

    /// Creation payload; excludes `id` and `createdAt`.
    type Draft: Clone + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Partial-update payload; every field optional.
    type Patch: Clone + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// The record's unique identifier.
    fn id(&self) -> u64;

    /// The immutable creation date (`YYYY-MM-DD`).
    fn created_at(&self) -> &str;

    /// Check a draft against the collection's schema constraints.
    fn validate_draft(draft: &Self::Draft) -> Result<(), ValidationError>;

    /// Build a full record from a draft plus the generated fields.
    fn from_draft(id: u64, draft: Self::Draft, created_at: String) -> Self;

    /// Merge a patch onto this record.
    ///
    /// `id` and `createdAt` always come from `self`; absent patch fields
    /// keep their current values.
    fn merged(&self, patch: Self::Patch) -> Self;

    /// Project the record back to a draft for re-validation after a merge.
    fn as_draft(&self) -> Self::Draft;
}
