//! Data source trait abstraction.
//!
//! A [`DataSource`] supplies each record collection and accepts mutations,
//! hiding whether the data comes from the seeded demo generator or the live
//! HTTP backend. Reads never fail outright: every provider folds its
//! failures into the [`Listing`] shape so consumers render an error state
//! instead of handling exceptions. Mutations return a typed
//! [`SourceError`] so callers can distinguish rejected input from a missing
//! record or an unreachable backend.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    Customer, CustomerDraft, CustomerPatch, Sale, SaleDraft, SalePatch, Task,
    TaskDraft, TaskPatch,
};

/// Uniform read result: records plus an optional failure message.
///
/// A failed load carries an empty record list and the message to show next
/// to the retry affordance.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub records: Vec<T>,
    pub error: Option<String>,
}

impl<T> Listing<T> {
    /// A successful load.
    pub fn ok(records: Vec<T>) -> Self {
        Self {
            records,
            error: None,
        }
    }

    /// A failed load: empty collection for this cycle, message attached.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            error: Some(message.into()),
        }
    }

    /// Whether this load failed.
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Failure of a mutation against a data source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The submitted record failed validation on the backend.
    #[error("{0}")]
    Invalid(String),
    /// The targeted record does not exist.
    #[error("record not found")]
    NotFound,
    /// The backend could not be reached.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The backend answered with something unparseable.
    #[error("malformed response: {0}")]
    Format(String),
}

/// Result of a mutation against a data source.
pub type MutationResult<T> = Result<T, SourceError>;

/// A provider of the three CRM record collections.
///
/// Two implementations exist: the ephemeral demo generator
/// (`GeneratorSource`) and the durable HTTP-backed provider
/// (`RemoteSource`). Consumers hold the selected provider as
/// `Arc<dyn DataSource>` and must not assume ephemeral mutations survive a
/// reload.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn list_customers(&self) -> Listing<Customer>;
    async fn list_tasks(&self) -> Listing<Task>;
    async fn list_sales(&self) -> Listing<Sale>;

    async fn create_customer(&self, draft: CustomerDraft) -> MutationResult<Customer>;
    async fn create_task(&self, draft: TaskDraft) -> MutationResult<Task>;
    async fn create_sale(&self, draft: SaleDraft) -> MutationResult<Sale>;

    async fn update_customer(
        &self,
        id: u64,
        patch: CustomerPatch,
    ) -> MutationResult<Customer>;
    async fn update_task(&self, id: u64, patch: TaskPatch) -> MutationResult<Task>;
    async fn update_sale(&self, id: u64, patch: SalePatch) -> MutationResult<Sale>;

    async fn delete_customer(&self, id: u64) -> MutationResult<()>;
    async fn delete_task(&self, id: u64) -> MutationResult<()>;
    async fn delete_sale(&self, id: u64) -> MutationResult<()>;
}
