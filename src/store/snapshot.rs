//! Snapshot persistence for the record store
//!
//! Saves the whole collection as one JSON document, with the records
//! under the `"contacts"` key, through a storage backend. Restoring an
//! absent snapshot yields an empty store.

use super::RecordStore;
use crate::models::ContactRecord;
use crate::storage::{StorageBackend, StorageError};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Well-known snapshot file name under the backend's base path
const SNAPSHOT_FILE: &str = "contacts.json";

#[derive(Serialize, Deserialize)]
struct Snapshot {
    contacts: Vec<ContactRecord>,
}

/// Snapshot reader/writer over a storage backend
pub struct SnapshotStore<B: StorageBackend> {
    storage: B,
}

impl<B: StorageBackend> SnapshotStore<B> {
    /// Create a new snapshot store with the given storage backend
    pub fn new(storage: B) -> Self {
        Self { storage }
    }

    /// Persist the current collection
    pub async fn save(&self, store: &RecordStore) -> Result<(), StorageError> {
        let snapshot = Snapshot {
            contacts: store.list().to_vec(),
        };

        let content = serde_json::to_vec_pretty(&snapshot).map_err(|e| {
            StorageError::SerializationError(format!("Failed to serialize snapshot: {}", e))
        })?;

        self.storage.write_file(SNAPSHOT_FILE, &content).await?;
        info!("Saved {} contacts to snapshot", store.len());

        Ok(())
    }

    /// Restore the collection from the last snapshot
    ///
    /// Returns an empty store when no snapshot has been written yet.
    pub async fn load(&self) -> Result<RecordStore, StorageError> {
        if !self.storage.file_exists(SNAPSHOT_FILE).await? {
            info!("No contact snapshot found, starting empty");
            return Ok(RecordStore::new());
        }

        let content = self.storage.read_file(SNAPSHOT_FILE).await?;
        let snapshot: Snapshot = serde_json::from_slice(&content).map_err(|e| {
            StorageError::SerializationError(format!("Failed to parse snapshot: {}", e))
        })?;

        info!("Loaded {} contacts from snapshot", snapshot.contacts.len());
        Ok(RecordStore::from_records(snapshot.contacts))
    }
}
