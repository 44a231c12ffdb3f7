//src/state.rs
use crate::record::{Record, RecordFields};
use crate::store::{Error as StoreError, RecordStore, SortMode};
use crate::validation::{Error as ValidationError, RecordForm};
use tracing::debug;

/// Which record, if any, the form is currently editing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(Record),
}

impl EditSession {
    #[must_use]
    pub const fn record(&self) -> Option<&Record> {
        match self {
            Self::Idle => None,
            Self::Editing(record) => Some(record),
        }
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }
}

/// A user action requesting a state change.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Create(RecordFields),
    Update(u64, RecordFields),
    Delete(u64),
    SetSortMode(SortMode),
    BeginEdit(u64),
    CancelEdit,
}

/// What an intent did to the state.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Created(Record),
    Updated(Record),
    Deleted(u64),
    SortChanged(SortMode),
    EditStarted(Record),
    EditCancelled,
    /// The targeted id was absent; nothing changed.
    NotFound(u64),
}

impl Outcome {
    /// Confirmation text for the user, if this outcome warrants one.
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::Created(_) => Some("Record saved!"),
            Self::Updated(_) => Some("Record updated!"),
            Self::Deleted(_) => Some("The record was deleted."),
            Self::SortChanged(_)
            | Self::EditStarted(_)
            | Self::EditCancelled
            | Self::NotFound(_) => None,
        }
    }
}

/// Everything the diary screen holds: records, sort mode, edit session, form.
#[derive(Debug, Clone, Default)]
pub struct DiaryState {
    pub store: RecordStore,
    pub sort_mode: SortMode,
    pub edit: EditSession,
    pub form: RecordForm,
}

impl DiaryState {
    #[must_use]
    pub fn new(records: Vec<Record>, sort_mode: SortMode) -> Self {
        Self {
            store: RecordStore::with_records(records),
            sort_mode,
            edit: EditSession::Idle,
            form: RecordForm::default(),
        }
    }

    /// The records in the active display order.
    #[must_use]
    pub fn displayed(&self) -> Vec<Record> {
        self.store.ordered_view(self.sort_mode)
    }

    /// Applies one intent. Absent ids are reported as `Outcome::NotFound`.
    pub fn dispatch(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::Create(fields) => Outcome::Created(self.store.create(fields)),
            Intent::Update(id, fields) => match self.store.update(id, fields) {
                Ok(record) => Outcome::Updated(record),
                Err(StoreError::NotFound(id)) => Self::not_found(id, "update"),
            },
            Intent::Delete(id) => {
                if !self.store.delete(id) {
                    return Self::not_found(id, "delete");
                }
                // Saving later must not target a record that no longer exists
                if self.edit.record().is_some_and(|r| r.id == id) {
                    self.edit = EditSession::Idle;
                    self.form.clear();
                }
                Outcome::Deleted(id)
            }
            Intent::SetSortMode(mode) => {
                self.sort_mode = mode;
                Outcome::SortChanged(mode)
            }
            Intent::BeginEdit(id) => match self.store.get(id).cloned() {
                Some(record) => {
                    self.form = RecordForm::from_record(&record);
                    self.edit = EditSession::Editing(record.clone());
                    Outcome::EditStarted(record)
                }
                None => Self::not_found(id, "edit"),
            },
            Intent::CancelEdit => {
                self.edit = EditSession::Idle;
                self.form.clear();
                Outcome::EditCancelled
            }
        }
    }

    /// Validates the form and saves it as a new record, or as an update of
    /// the record being edited. Form and edit session are cleared on success.
    /// # Errors
    /// - `ValidationError` if an input is not a positive number. Nothing changes.
    pub fn submit_form(&mut self) -> Result<Outcome, ValidationError> {
        let fields = self.form.validate()?;
        let intent = match &self.edit {
            EditSession::Editing(record) => Intent::Update(record.id, fields),
            EditSession::Idle => Intent::Create(fields),
        };
        let outcome = self.dispatch(intent);
        self.form.clear();
        self.edit = EditSession::Idle;
        Ok(outcome)
    }

    fn not_found(id: u64, action: &str) -> Outcome {
        debug!(id, action, "intent ignored, no such record");
        Outcome::NotFound(id)
    }
}
