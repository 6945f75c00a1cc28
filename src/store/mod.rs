//! Contact record store
//!
//! The authoritative in-memory collection of contact records. Insertion
//! order is preserved; reordering is an explicit operation. A single
//! editor session is open at a time, so mutations need no locking.

pub mod snapshot;

pub use snapshot::SnapshotStore;

use crate::models::{ContactDraft, ContactPatch, ContactRecord};
use chrono::Utc;
use uuid::Uuid;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("No record with id {0}")]
    NotFound(Uuid),
    #[error("Index {index} out of range for {len} records")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered collection of contact records keyed by id
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<ContactRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from snapshot records, keeping their order and ids
    pub(crate) fn from_records(records: Vec<ContactRecord>) -> Self {
        Self { records }
    }

    /// Store a new record
    ///
    /// Assigns a fresh id and timestamps, appends the record and returns
    /// it as stored.
    pub fn create(&mut self, draft: ContactDraft) -> ContactRecord {
        let now = Utc::now();
        let record = ContactRecord {
            id: Uuid::new_v4(),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            calling_code: draft.calling_code,
            country: draft.country,
            state: draft.state,
            city: draft.city,
            date_of_birth: draft.date_of_birth,
            gender: draft.gender,
            address_lines: draft.address_lines,
            created_at: now,
            updated_at: now,
        };
        self.records.push(record.clone());
        record
    }

    /// Merge a patch over the record with the given id
    ///
    /// Every `Some` field of the patch fully replaces the stored field.
    /// An unknown id leaves the collection untouched.
    pub fn update(&mut self, id: Uuid, patch: ContactPatch) -> Result<ContactRecord, StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;

        if let Some(name) = patch.name {
            record.name = name;
        }
        if let Some(email) = patch.email {
            record.email = email;
        }
        if let Some(phone) = patch.phone {
            record.phone = phone;
        }
        if let Some(calling_code) = patch.calling_code {
            record.calling_code = calling_code;
        }
        if let Some(country) = patch.country {
            record.country = country;
        }
        if let Some(state) = patch.state {
            record.state = state;
        }
        if let Some(city) = patch.city {
            record.city = city;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            record.date_of_birth = date_of_birth;
        }
        if let Some(gender) = patch.gender {
            record.gender = gender;
        }
        if let Some(address_lines) = patch.address_lines {
            record.address_lines = address_lines;
        }
        record.updated_at = Utc::now();

        Ok(record.clone())
    }

    /// Remove the record with the given id; unknown ids are a no-op
    pub fn delete(&mut self, id: Uuid) {
        self.records.retain(|record| record.id != id);
    }

    /// All records in current store order
    pub fn list(&self) -> &[ContactRecord] {
        &self.records
    }

    pub fn get(&self, id: Uuid) -> Option<&ContactRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Move the record at `from` so it ends up at index `to`
    ///
    /// The indices come from UI gestures, so out-of-range is an error
    /// rather than a panic.
    pub fn move_record(&mut self, from: usize, to: usize) -> Result<(), StoreError> {
        let len = self.records.len();
        if from >= len {
            return Err(StoreError::IndexOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(StoreError::IndexOutOfRange { index: to, len });
        }
        let record = self.records.remove(from);
        self.records.insert(to, record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
