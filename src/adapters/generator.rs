//! Ephemeral data source backed by seeded generation.
//!
//! The demo-mode provider. Reads synthesize a fresh collection from a fixed
//! seed on every call, so the same records come back for every load in a
//! process. Mutations fabricate a plausible response without persisting
//! anything; nothing done against this source survives a reload, and
//! callers must not assume otherwise.

use async_trait::async_trait;
use chrono::Utc;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::panic::catch_unwind;
use std::sync::{Mutex, PoisonError};

use crate::generator::{
    self, fallback, generate_customers, generate_sales, generate_tasks,
};
use crate::models::{
    Customer, CustomerDraft, CustomerPatch, CrmRecord, Sale, SaleDraft, SalePatch,
    Task, TaskDraft, TaskPatch,
};
use crate::traits::{DataSource, Listing, MutationResult};

/// Default collection sizes, matching the demo dashboard's appetite.
const DEFAULT_CUSTOMER_COUNT: usize = 30;
const DEFAULT_TASK_COUNT: usize = 20;
const DEFAULT_SALE_COUNT: usize = 30;

/// Fabricated ids start above any generated collection so they never
/// collide with a listed record.
const FABRICATED_ID_RANGE: std::ops::Range<u64> = 1_000..10_000;

/// The ephemeral, generator-backed provider.
#[derive(Debug)]
pub struct GeneratorSource {
    seed: u64,
    customer_count: usize,
    task_count: usize,
    sale_count: usize,
    /// Draws fabricated ids for mutations; separate from the per-list rngs
    /// so listing stays reproducible.
    rng: Mutex<ChaCha8Rng>,
}

impl GeneratorSource {
    /// Create a source with the default collection sizes.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            customer_count: DEFAULT_CUSTOMER_COUNT,
            task_count: DEFAULT_TASK_COUNT,
            sale_count: DEFAULT_SALE_COUNT,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Override the per-kind collection sizes.
    pub fn with_counts(mut self, customers: usize, tasks: usize, sales: usize) -> Self {
        self.customer_count = customers;
        self.task_count = tasks;
        self.sale_count = sales;
        self
    }

    /// The seed this source generates from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn fabricated_id(&self) -> u64 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(FABRICATED_ID_RANGE)
    }

    fn today() -> String {
        Utc::now().date_naive().to_string()
    }

    /// Run a generation function, substituting fallback data on a fault.
    ///
    /// Generator faults are recovered locally and logged, never surfaced to
    /// the caller.
    fn generate_or_fallback<T>(
        kind: &'static str,
        generate: impl FnOnce() -> Vec<T> + std::panic::UnwindSafe,
        fallback: impl FnOnce() -> Vec<T>,
    ) -> Listing<T> {
        match catch_unwind(generate) {
            Ok(records) => Listing::ok(records),
            Err(_) => {
                tracing::warn!(kind, "data generation faulted, using fallback records");
                Listing::ok(fallback())
            }
        }
    }
}

impl Default for GeneratorSource {
    fn default() -> Self {
        Self::new(generator::DEFAULT_SEED)
    }
}

#[async_trait]
impl DataSource for GeneratorSource {
    async fn list_customers(&self) -> Listing<Customer> {
        let (seed, count) = (self.seed, self.customer_count);
        Self::generate_or_fallback(
            "customers",
            move || generate_customers(seed, count),
            fallback::customers,
        )
    }

    async fn list_tasks(&self) -> Listing<Task> {
        let (seed, count) = (self.seed, self.task_count);
        Self::generate_or_fallback(
            "tasks",
            move || generate_tasks(seed, count),
            fallback::tasks,
        )
    }

    async fn list_sales(&self) -> Listing<Sale> {
        let (seed, count) = (self.seed, self.sale_count);
        Self::generate_or_fallback(
            "sales",
            move || generate_sales(seed, count),
            fallback::sales,
        )
    }

    async fn create_customer(&self, draft: CustomerDraft) -> MutationResult<Customer> {
        Ok(Customer::from_draft(self.fabricated_id(), draft, Self::today()))
    }

    async fn create_task(&self, draft: TaskDraft) -> MutationResult<Task> {
        Ok(Task::from_draft(self.fabricated_id(), draft, Self::today()))
    }

    async fn create_sale(&self, draft: SaleDraft) -> MutationResult<Sale> {
        Ok(Sale::from_draft(self.fabricated_id(), draft, Self::today()))
    }

    async fn update_customer(
        &self,
        id: u64,
        patch: CustomerPatch,
    ) -> MutationResult<Customer> {
        // Nothing is stored, so the echo is built on a fixed base record.
        let base = fallback::customers().swap_remove(0);
        let mut record = base.merged(patch);
        record.id = id;
        record.created_at = Self::today();
        Ok(record)
    }

    async fn update_task(&self, id: u64, patch: TaskPatch) -> MutationResult<Task> {
        let base = fallback::tasks().swap_remove(0);
        let mut record = base.merged(patch);
        record.id = id;
        record.created_at = Self::today();
        Ok(record)
    }

    async fn update_sale(&self, id: u64, patch: SalePatch) -> MutationResult<Sale> {
        let base = fallback::sales().swap_remove(0);
        let mut record = base.merged(patch);
        record.id = id;
        record.created_at = Self::today();
        Ok(record)
    }

    async fn delete_customer(&self, _id: u64) -> MutationResult<()> {
        Ok(())
    }

    async fn delete_task(&self, _id: u64) -> MutationResult<()> {
        Ok(())
    }

    async fn delete_sale(&self, _id: u64) -> MutationResult<()> {
        Ok(())
    }
}
