//src/store.rs
use crate::record::{Record, RecordFields};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Record with ID {0} not found.")]
    NotFound(u64),
}

/// Display ordering of the record list. Both orders are descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    Recent,
    MostWater,
}

impl SortMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Recent => Self::MostWater,
            Self::MostWater => Self::Recent,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recent => write!(f, "Most recent"),
            Self::MostWater => write!(f, "Most water"),
        }
    }
}

// Hands out ids derived from the wall clock, bumped past the last one so two
// creates within the same millisecond never collide.
#[derive(Debug, Default, Clone)]
struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    fn observe(&mut self, id: u64) {
        self.last = self.last.max(id);
    }

    fn next_id(&mut self, now_millis: i64) -> u64 {
        let from_clock = u64::try_from(now_millis).unwrap_or(0);
        let id = from_clock.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}

/// The authoritative, insertion-ordered collection of records.
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    records: Vec<Record>,
    ids: IdGenerator,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store around existing records, keeping their ids.
    #[must_use]
    pub fn with_records(records: Vec<Record>) -> Self {
        let mut ids = IdGenerator::default();
        for record in &records {
            ids.observe(record.id);
        }
        Self { records, ids }
    }

    /// Appends a new record with a freshly minted id, dated today.
    pub fn create(&mut self, fields: RecordFields) -> Record {
        self.create_at(fields, Local::now())
    }

    /// Same as [`RecordStore::create`] with an explicit creation instant.
    pub fn create_at(&mut self, fields: RecordFields, now: DateTime<Local>) -> Record {
        let record = Record {
            id: self.ids.next_id(now.timestamp_millis()),
            fields,
            date: Some(now.date_naive()),
        };
        info!(id = record.id, "record created");
        self.records.push(record.clone());
        record
    }

    /// Replaces the measurements of the record with `id`. Id and date stay.
    /// # Errors
    /// - `Error::NotFound` if no record has this id; nothing changes.
    pub fn update(&mut self, id: u64, fields: RecordFields) -> Result<Record, Error> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(Error::NotFound(id))?;
        record.fields = fields;
        info!(id, "record updated");
        Ok(record.clone())
    }

    /// Removes the record with `id`. Returns false when there was none.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() < before;
        if removed {
            info!(id, "record deleted");
        } else {
            debug!(id, "delete ignored, no such record");
        }
        removed
    }

    /// A freshly sorted copy of the collection. The store itself is untouched.
    #[must_use]
    pub fn ordered_view(&self, sort_mode: SortMode) -> Vec<Record> {
        let mut view = self.records.clone();
        // sort_by is stable, so equal keys keep insertion order
        match sort_mode {
            SortMode::Recent => view.sort_by(|a, b| b.id.cmp(&a.id)),
            SortMode::MostWater => {
                view.sort_by(|a, b| b.water_liters().total_cmp(&a.water_liters()));
            }
        }
        view
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
