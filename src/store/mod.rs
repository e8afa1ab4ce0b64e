//! JSON-file record store.
//!
//! Each collection persists as one pretty-printed document at
//! `<dir>/<collection>.json` holding `{ "<collection>": [ ...records ] }`.
//! A missing file reads as an empty collection. Ids are assigned as
//! `max(existing ids) + 1`, or 1 when the collection is empty; deletion is
//! immediate and permanent.
//!
//! The store is synchronous file IO behind a small write lock; a
//! single-user demo needs nothing more.

use chrono::Utc;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

use crate::models::CrmRecord;
use crate::schema::ValidationError;

/// Failure of a store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The targeted id does not exist in the collection.
    #[error("{collection} record {id} not found")]
    NotFound { collection: &'static str, id: u64 },
    /// The submitted data failed its schema constraints.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The collection file could not be read or written.
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The collection file does not hold the expected document shape.
    #[error("malformed collection document {path}: {message}")]
    Format { path: PathBuf, message: String },
}

/// Flat-file store for the CRM collections.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
    /// Serializes read-modify-write cycles across concurrent handlers.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The directory collection files live in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn collection_path<R: CrmRecord>(&self) -> PathBuf {
        self.dir.join(format!("{}.json", R::COLLECTION))
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read the full collection. A missing file is an empty collection.
    pub fn list<R: CrmRecord>(&self) -> Result<Vec<R>, StoreError> {
        let path = self.collection_path::<R>();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let document: Value =
            serde_json::from_str(&raw).map_err(|error| StoreError::Format {
                path: path.clone(),
                message: error.to_string(),
            })?;
        let records = document
            .get(R::COLLECTION)
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));
        serde_json::from_value(records).map_err(|error| StoreError::Format {
            path,
            message: error.to_string(),
        })
    }

    /// Fetch one record by id.
    pub fn get<R: CrmRecord>(&self, id: u64) -> Result<R, StoreError> {
        self.list::<R>()?
            .into_iter()
            .find(|record| record.id() == id)
            .ok_or(StoreError::NotFound {
                collection: R::COLLECTION,
                id,
            })
    }

    /// Validate and append a new record; returns it with its generated id
    /// and creation date.
    pub fn create<R: CrmRecord>(&self, draft: R::Draft) -> Result<R, StoreError> {
        R::validate_draft(&draft)?;
        let _guard = self.guard();
        let mut records = self.list::<R>()?;
        let id = records.iter().map(R::id).max().map_or(1, |max| max + 1);
        let record = R::from_draft(id, draft, today());
        records.push(record.clone());
        self.write_document::<R>(&records)?;
        Ok(record)
    }

    /// Merge a patch onto an existing record and re-validate the result.
    ///
    /// `id` and `createdAt` always come from the stored record.
    pub fn update<R: CrmRecord>(&self, id: u64, patch: R::Patch) -> Result<R, StoreError> {
        let _guard = self.guard();
        let mut records = self.list::<R>()?;
        let position = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(StoreError::NotFound {
                collection: R::COLLECTION,
                id,
            })?;
        let merged = records[position].merged(patch);
        R::validate_draft(&merged.as_draft())?;
        records[position] = merged.clone();
        self.write_document::<R>(&records)?;
        Ok(merged)
    }

    /// Remove a record. No tombstones; the record is gone.
    pub fn delete<R: CrmRecord>(&self, id: u64) -> Result<(), StoreError> {
        let _guard = self.guard();
        let mut records = self.list::<R>()?;
        let position = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(StoreError::NotFound {
                collection: R::COLLECTION,
                id,
            })?;
        records.remove(position);
        self.write_document::<R>(&records)
    }

    /// Overwrite the whole collection; used by the seed command.
    pub fn replace_all<R: CrmRecord>(&self, records: &[R]) -> Result<(), StoreError> {
        let _guard = self.guard();
        self.write_document::<R>(records)
    }

    fn write_document<R: CrmRecord>(&self, records: &[R]) -> Result<(), StoreError> {
        let path = self.collection_path::<R>();
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let mut document = serde_json::Map::new();
        document.insert(
            R::COLLECTION.to_string(),
            serde_json::to_value(records).map_err(|error| StoreError::Format {
                path: path.clone(),
                message: error.to_string(),
            })?,
        );
        let rendered = serde_json::to_string_pretty(&Value::Object(document))
            .map_err(|error| StoreError::Format {
                path: path.clone(),
                message: error.to_string(),
            })?;
        fs::write(&path, rendered).map_err(|source| StoreError::Io { path, source })
    }
}

fn today() -> String {
    Utc::now().date_naive().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Customer, CustomerDraft, CustomerPatch, CustomerStatus, Task,
    };
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn draft(name: &str) -> CustomerDraft {
        CustomerDraft {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: "+1 (555) 123-4567".to_string(),
            company: "Example Co".to_string(),
            status: CustomerStatus::Active,
        }
    }

    fn customer(id: u64) -> Customer {
        Customer::from_draft(id, draft(&format!("Customer {}", id)), "2026-01-01".to_string())
    }

    #[test]
    fn test_missing_file_reads_as_empty_collection() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.list::<Customer>().unwrap().is_empty());
    }

    #[test]
    fn test_create_assigns_id_one_when_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let created = store.create::<Customer>(draft("First Customer")).unwrap();
        assert_eq!(created.id, 1);
        assert!(NaiveDate::parse_from_str(&created.created_at, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_create_assigns_max_plus_one() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store
            .replace_all::<Customer>(&[customer(1), customer(2), customer(5)])
            .unwrap();

        let created = store.create::<Customer>(draft("Next Customer")).unwrap();
        assert_eq!(created.id, 6);
        assert_eq!(store.list::<Customer>().unwrap().len(), 4);
    }

    #[test]
    fn test_create_rejects_invalid_draft_and_writes_nothing() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let mut bad = draft("Ok Name");
        bad.email = "not-an-email".to_string();

        let error = store.create::<Customer>(bad).unwrap_err();
        assert!(matches!(error, StoreError::Validation(_)));
        assert!(store.list::<Customer>().unwrap().is_empty());
    }

    #[test]
    fn test_get_found_and_not_found() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.replace_all::<Customer>(&[customer(3)]).unwrap();

        assert_eq!(store.get::<Customer>(3).unwrap().id, 3);
        let error = store.get::<Customer>(4).unwrap_err();
        assert!(matches!(
            error,
            StoreError::NotFound {
                collection: "customers",
                id: 4
            }
        ));
    }

    #[test]
    fn test_update_merges_and_preserves_created_at() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.replace_all::<Customer>(&[customer(1)]).unwrap();

        let updated = store
            .update::<Customer>(
                1,
                CustomerPatch {
                    name: Some("Renamed Person".to_string()),
                    ..CustomerPatch::default()
                },
            )
            .unwrap();
        assert_eq!(updated.name, "Renamed Person");
        assert_eq!(updated.created_at, "2026-01-01");
        assert_eq!(updated.id, 1);

        // The merge is persisted.
        assert_eq!(store.get::<Customer>(1).unwrap().name, "Renamed Person");
    }

    #[test]
    fn test_update_revalidates_merged_record() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.replace_all::<Customer>(&[customer(1)]).unwrap();

        let error = store
            .update::<Customer>(
                1,
                CustomerPatch {
                    email: Some("broken".to_string()),
                    ..CustomerPatch::default()
                },
            )
            .unwrap_err();
        assert!(matches!(error, StoreError::Validation(_)));
        // The stored record is untouched.
        assert_eq!(
            store.get::<Customer>(1).unwrap().email,
            "customer.1@example.com"
        );
    }

    #[test]
    fn test_update_missing_record() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let error = store
            .update::<Customer>(9, CustomerPatch::default())
            .unwrap_err();
        assert!(matches!(error, StoreError::NotFound { id: 9, .. }));
    }

    #[test]
    fn test_delete_removes_permanently() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store
            .replace_all::<Customer>(&[customer(1), customer(2)])
            .unwrap();

        store.delete::<Customer>(1).unwrap();
        let remaining = store.list::<Customer>().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);

        let error = store.delete::<Customer>(1).unwrap_err();
        assert!(matches!(error, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_collections_are_separate_documents() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.replace_all::<Customer>(&[customer(1)]).unwrap();

        assert!(store.list::<Task>().unwrap().is_empty());
        assert!(dir.path().join("customers.json").exists());
        assert!(!dir.path().join("tasks.json").exists());
    }

    #[test]
    fn test_document_shape_keys_records_by_collection_name() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.replace_all::<Customer>(&[customer(1)]).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("customers.json")).unwrap();
        let document: Value = serde_json::from_str(&raw).unwrap();
        assert!(document["customers"].is_array());
        assert_eq!(document["customers"][0]["id"], 1);
    }

    #[test]
    fn test_malformed_document_is_a_format_error() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        std::fs::write(dir.path().join("customers.json"), "{ not json").unwrap();

        let error = store.list::<Customer>().unwrap_err();
        assert!(matches!(error, StoreError::Format { .. }));
    }
}
