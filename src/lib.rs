//! Contact Registry SDK - Shared library for contact record management
//!
//! Provides unified interfaces for:
//! - The contact record store (create/update/delete/list, snapshot persistence)
//! - The dependent location selection chain (calling code -> country -> state -> city)
//! - Geo directory lookups (via the GeoDirectory trait)
//! - The contact editing session (draft fields, address lines, submission)
//! - Submission validation

pub mod editor;
pub mod geo;
pub mod models;
pub mod selection;
pub mod storage;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use storage::{StorageBackend, StorageError};
pub use storage::memory::MemoryStorageBackend;
#[cfg(feature = "native-fs")]
pub use storage::filesystem::FileSystemStorageBackend;

pub use geo::{GeoDirectory, GeoDirectoryError};
#[cfg(feature = "geo-rest")]
pub use geo::rest::{GeoDirectoryConfig, RestGeoDirectory};

pub use selection::{
    CitiesLookup, SelectionSession, SelectionStage, SelectionState, StatesLookup,
};

pub use store::{RecordStore, SnapshotStore, StoreError};

pub use editor::{AddressLineEditor, EditorSession, SubmitError};

pub use validation::{ValidationError, validate_draft};

// Re-export models
pub use models::{CallingCodeOption, ContactDraft, ContactPatch, ContactRecord, Gender};
