//! Durable data source backed by the HTTP API.
//!
//! The live-mode provider. Reads and writes go to the persistence backend;
//! transport and parse failures never escape as errors from `list`. They
//! fold into the listing's error message, and the collection is treated as
//! empty for that load cycle. Mutations map the backend's answer onto
//! [`SourceError`]: 400 is rejected input, 404 a missing record, anything
//! else a transport-level failure.

use async_trait::async_trait;

use crate::models::{
    Customer, CustomerDraft, CustomerPatch, CrmRecord, Sale, SaleDraft, SalePatch,
    Task, TaskDraft, TaskPatch,
};
use crate::traits::{
    DataSource, Headers, HttpClient, Listing, MutationResult, Response, SourceError,
};

/// The durable, HTTP-backed provider, generic over its HTTP client so
/// tests can drive it with a mock.
#[derive(Debug, Clone)]
pub struct RemoteSource<C: HttpClient> {
    client: C,
    base_url: String,
}

impl<C: HttpClient> RemoteSource<C> {
    /// Create a source against `base_url` (for example
    /// `http://127.0.0.1:7878`).
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// The backend this source talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url<R: CrmRecord>(&self) -> String {
        format!("{}/{}", self.base_url, R::COLLECTION)
    }

    fn record_url<R: CrmRecord>(&self, id: u64) -> String {
        format!("{}/{}/{}", self.base_url, R::COLLECTION, id)
    }

    fn json_headers() -> Headers {
        Headers::from([(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )])
    }

    /// Pull the backend's `{"error": ...}` message out of a failure body,
    /// falling back to the bare status.
    fn error_message(response: &Response) -> String {
        response
            .json::<serde_json::Value>()
            .ok()
            .and_then(|value| {
                value
                    .get("error")
                    .and_then(|message| message.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| format!("HTTP error! status: {}", response.status))
    }

    fn mutation_error(response: &Response) -> SourceError {
        match response.status {
            404 => SourceError::NotFound,
            400 => SourceError::Invalid(Self::error_message(response)),
            _ => SourceError::Transport(Self::error_message(response)),
        }
    }

    async fn fetch_list<R: CrmRecord>(&self) -> Listing<R> {
        let response = match self
            .client
            .get(&self.collection_url::<R>(), &Headers::new())
            .await
        {
            Ok(response) => response,
            Err(error) => return Listing::failed(error.to_string()),
        };
        if !response.is_success() {
            return Listing::failed(format!("HTTP error! status: {}", response.status));
        }
        match response.json::<Vec<R>>() {
            Ok(records) => Listing::ok(records),
            Err(error) => Listing::failed(format!("malformed response: {}", error)),
        }
    }

    async fn send_create<R: CrmRecord>(&self, draft: R::Draft) -> MutationResult<R> {
        let body = serde_json::to_string(&draft)
            .map_err(|error| SourceError::Format(error.to_string()))?;
        let response = self
            .client
            .post(&self.collection_url::<R>(), &body, &Self::json_headers())
            .await
            .map_err(|error| SourceError::Transport(error.to_string()))?;
        if !response.is_success() {
            return Err(Self::mutation_error(&response));
        }
        response
            .json::<R>()
            .map_err(|error| SourceError::Format(error.to_string()))
    }

    async fn send_update<R: CrmRecord>(
        &self,
        id: u64,
        patch: R::Patch,
    ) -> MutationResult<R> {
        let body = serde_json::to_string(&patch)
            .map_err(|error| SourceError::Format(error.to_string()))?;
        let response = self
            .client
            .put(&self.record_url::<R>(id), &body, &Self::json_headers())
            .await
            .map_err(|error| SourceError::Transport(error.to_string()))?;
        if !response.is_success() {
            return Err(Self::mutation_error(&response));
        }
        response
            .json::<R>()
            .map_err(|error| SourceError::Format(error.to_string()))
    }

    async fn send_delete<R: CrmRecord>(&self, id: u64) -> MutationResult<()> {
        let response = self
            .client
            .delete(&self.record_url::<R>(id), &Headers::new())
            .await
            .map_err(|error| SourceError::Transport(error.to_string()))?;
        if !response.is_success() {
            return Err(Self::mutation_error(&response));
        }
        Ok(())
    }
}

#[async_trait]
impl<C: HttpClient> DataSource for RemoteSource<C> {
    async fn list_customers(&self) -> Listing<Customer> {
        self.fetch_list::<Customer>().await
    }

    async fn list_tasks(&self) -> Listing<Task> {
        self.fetch_list::<Task>().await
    }

    async fn list_sales(&self) -> Listing<Sale> {
        self.fetch_list::<Sale>().await
    }

    async fn create_customer(&self, draft: CustomerDraft) -> MutationResult<Customer> {
        self.send_create::<Customer>(draft).await
    }

    async fn create_task(&self, draft: TaskDraft) -> MutationResult<Task> {
        self.send_create::<Task>(draft).await
    }

    async fn create_sale(&self, draft: SaleDraft) -> MutationResult<Sale> {
        self.send_create::<Sale>(draft).await
    }

    async fn update_customer(
        &self,
        id: u64,
        patch: CustomerPatch,
    ) -> MutationResult<Customer> {
        self.send_update::<Customer>(id, patch).await
    }

    async fn update_task(&self, id: u64, patch: TaskPatch) -> MutationResult<Task> {
        self.send_update::<Task>(id, patch).await
    }

    async fn update_sale(&self, id: u64, patch: SalePatch) -> MutationResult<Sale> {
        self.send_update::<Sale>(id, patch).await
    }

    async fn delete_customer(&self, id: u64) -> MutationResult<()> {
        self.send_delete::<Customer>(id).await
    }

    async fn delete_task(&self, id: u64) -> MutationResult<()> {
        self.send_delete::<Task>(id).await
    }

    async fn delete_sale(&self, id: u64) -> MutationResult<()> {
        self.send_delete::<Sale>(id).await
    }
}
