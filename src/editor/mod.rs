//! Contact editing session
//!
//! Composes everything one add/edit interaction needs: the draft form
//! fields, the location selection chain and the multi-line address
//! editor. Only one session is open at a time, which is what serializes
//! record-store mutations.

use crate::geo::GeoDirectory;
use crate::models::{ContactDraft, ContactPatch, ContactRecord, Gender};
use crate::selection::SelectionSession;
use crate::store::{RecordStore, StoreError};
use crate::validation::{ValidationError, trimmed_address_lines, validate_draft};
use chrono::NaiveDate;
use uuid::Uuid;

/// Ordered, appendable list of free-text address lines
///
/// Starts with a single empty line, the way the form renders. Lines are
/// stored verbatim while editing; trimming happens at submission.
#[derive(Debug, Clone)]
pub struct AddressLineEditor {
    lines: Vec<String>,
}

impl AddressLineEditor {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Seed the editor from an existing record's lines
    pub fn from_lines(lines: Vec<String>) -> Self {
        if lines.is_empty() {
            Self::new()
        } else {
            Self { lines }
        }
    }

    /// Append an empty line
    pub fn add_line(&mut self) {
        self.lines.push(String::new());
    }

    /// Replace the text at `index`
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of bounds. The index comes from the
    /// rendered line list, so out-of-range is a programming error rather
    /// than user input.
    pub fn set_line(&mut self, index: usize, text: impl Into<String>) {
        self.lines[index] = text.into();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Default for AddressLineEditor {
    fn default() -> Self {
        Self::new()
    }
}

/// Error when submitting an editing session
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<ValidationError>),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One in-progress add or edit of a contact record
pub struct EditorSession<D> {
    selection: SelectionSession<D>,
    address: AddressLineEditor,
    name: String,
    email: String,
    phone: String,
    date_of_birth: Option<NaiveDate>,
    gender: Option<Gender>,
    editing: Option<Uuid>,
}

impl<D: GeoDirectory> EditorSession<D> {
    pub fn new(directory: D) -> Self {
        Self {
            selection: SelectionSession::new(directory),
            address: AddressLineEditor::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            date_of_birth: None,
            gender: None,
            editing: None,
        }
    }

    /// Open the session for a new record
    ///
    /// Clears all draft state and fetches a fresh calling-code directory;
    /// option lists are never carried over from an earlier session.
    pub async fn begin_add(&mut self) {
        self.clear();
        self.selection.load_calling_codes().await;
    }

    /// Open the session for an existing record
    ///
    /// Seeds the draft fields from the record and re-drives the selection
    /// chain from its calling code so the state and city option lists
    /// match the stored selection.
    pub async fn begin_edit(&mut self, record: &ContactRecord) {
        self.clear();
        self.name = record.name.clone();
        self.email = record.email.clone();
        self.phone = record.phone.clone();
        self.date_of_birth = Some(record.date_of_birth);
        self.gender = Some(record.gender);
        self.address = AddressLineEditor::from_lines(record.address_lines.clone());
        self.editing = Some(record.id);

        self.selection.load_calling_codes().await;
        self.selection.choose_calling_code(&record.calling_code).await;
        self.selection.choose_state(&record.state).await;
        self.selection.choose_city(&record.city);
    }

    /// Discard the in-progress draft
    pub fn cancel(&mut self) {
        self.clear();
    }

    /// Validate the draft and hand it to the store
    ///
    /// Creates a new record, or patches the record being edited. On
    /// success the session is cleared for the next interaction; on
    /// failure the draft (and the store) are left untouched.
    pub fn submit(&mut self, store: &mut RecordStore) -> Result<ContactRecord, SubmitError> {
        let mut errors = Vec::new();
        if self.date_of_birth.is_none() {
            errors.push(ValidationError::MissingField("date_of_birth"));
        }
        if self.gender.is_none() {
            errors.push(ValidationError::MissingField("gender"));
        }
        let (Some(date_of_birth), Some(gender)) = (self.date_of_birth, self.gender) else {
            return Err(SubmitError::Validation(errors));
        };

        let draft = ContactDraft {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            calling_code: self.selection.chosen_code().unwrap_or("").to_string(),
            country: self.selection.country().unwrap_or("").to_string(),
            state: self.selection.chosen_state().unwrap_or("").to_string(),
            city: self.selection.chosen_city().unwrap_or("").to_string(),
            date_of_birth,
            gender,
            address_lines: trimmed_address_lines(self.address.lines()),
        };

        validate_draft(&draft).map_err(SubmitError::Validation)?;

        let record = match self.editing {
            Some(id) => {
                let patch = ContactPatch {
                    name: Some(draft.name),
                    email: Some(draft.email),
                    phone: Some(draft.phone),
                    calling_code: Some(draft.calling_code),
                    country: Some(draft.country),
                    state: Some(draft.state),
                    city: Some(draft.city),
                    date_of_birth: Some(draft.date_of_birth),
                    gender: Some(draft.gender),
                    address_lines: Some(draft.address_lines),
                };
                store.update(id, patch)?
            }
            None => store.create(draft),
        };

        self.clear();
        Ok(record)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn set_date_of_birth(&mut self, date: NaiveDate) {
        self.date_of_birth = Some(date);
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = Some(gender);
    }

    /// True when the session edits an existing record
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn selection(&self) -> &SelectionSession<D> {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionSession<D> {
        &mut self.selection
    }

    pub fn address(&self) -> &AddressLineEditor {
        &self.address
    }

    pub fn address_mut(&mut self) -> &mut AddressLineEditor {
        &mut self.address
    }

    fn clear(&mut self) {
        self.selection.reset();
        self.address = AddressLineEditor::new();
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.date_of_birth = None;
        self.gender = None;
        self.editing = None;
    }
}
