//! JSON document store for dental records.
//!
//! Each collection lives in its own document inside the data directory:
//!
//! ```text
//! data/
//!   patients.json       { "P0001": Patient, ... }
//!   appointments.json   { "APT0001": Appointment, ... }
//!   treatments.json     { "T0001": Treatment, ... }
//! ```
//!
//! Every create loads the whole collection, inserts one record and writes the
//! whole document back.
//!
//! Loading happens in two steps. The document must parse as a JSON object;
//! anything else reads as an empty collection. Each entry is then decoded on
//! its own, and an entry that fails to decode is kept as raw JSON in the
//! [`Document`] and written back unchanged, so one bad record never costs the
//! rest of the collection.

mod appointments;
mod ids;
mod patients;
mod resolve;
mod treatments;
mod views;

pub use ids::*;
pub use resolve::*;
pub use views::*;

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::models::{Appointment, Collection, Patient, Treatment};

/// Why a create was refused. Nothing is written when this is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("patient not found: {patient_id}")]
    PatientNotFound { patient_id: String },
}

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("no free {0} ID left")]
    IdsExhausted(CollectionKind),
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The rejection, if this error is one.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            StoreError::Rejected(r) => Some(r),
            _ => None,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The three record collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Patients,
    Appointments,
    Treatments,
}

impl CollectionKind {
    /// Document file name inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            CollectionKind::Patients => "patients.json",
            CollectionKind::Appointments => "appointments.json",
            CollectionKind::Treatments => "treatments.json",
        }
    }

    /// Prefix of every ID in the collection.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            CollectionKind::Patients => "P",
            CollectionKind::Appointments => "APT",
            CollectionKind::Treatments => "T",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CollectionKind::Patients => "patients",
            CollectionKind::Appointments => "appointments",
            CollectionKind::Treatments => "treatments",
        };
        f.write_str(name)
    }
}

/// A record type stored as one collection document.
pub trait Record: Serialize + DeserializeOwned {
    const KIND: CollectionKind;
}

impl Record for Patient {
    const KIND: CollectionKind = CollectionKind::Patients;
}

impl Record for Appointment {
    const KIND: CollectionKind = CollectionKind::Appointments;
}

impl Record for Treatment {
    const KIND: CollectionKind = CollectionKind::Treatments;
}

/// A loaded collection document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document<T> {
    /// Entries that decoded as `T`.
    pub records: Collection<T>,
    unreadable: BTreeMap<String, Value>,
}

impl<T> Default for Document<T> {
    fn default() -> Self {
        Self {
            records: Collection::new(),
            unreadable: BTreeMap::new(),
        }
    }
}

impl<T: Record> Document<T> {
    /// Entries kept as raw JSON because they did not decode.
    pub fn unreadable(&self) -> &BTreeMap<String, Value> {
        &self.unreadable
    }

    /// Next free ID, counting unreadable entries as taken.
    pub fn next_id(&self) -> StoreResult<String> {
        next_id(T::KIND, self.records.keys().chain(self.unreadable.keys()))
    }

    fn decode(entries: BTreeMap<String, Value>) -> Self {
        let kind = T::KIND;
        let mut doc = Self::default();
        for (id, value) in entries {
            match T::deserialize(&value) {
                Ok(record) => {
                    doc.records.insert(id, record);
                }
                Err(e) => {
                    warn!(collection = %kind, %id, error = %e, "undecodable record, keeping it as is");
                    doc.unreadable.insert(id, value);
                }
            }
        }
        doc
    }
}

/// One entry of a document being written.
#[derive(Serialize)]
#[serde(untagged)]
enum Entry<'a, T> {
    Record(&'a T),
    Raw(&'a Value),
}

/// Pretty JSON for a document. A record wins over a raw entry with the same ID.
fn document_json<T: Serialize>(
    records: &Collection<T>,
    unreadable: &BTreeMap<String, Value>,
) -> StoreResult<String> {
    let mut entries: BTreeMap<&str, Entry<'_, T>> = unreadable
        .iter()
        .map(|(id, value)| (id.as_str(), Entry::Raw(value)))
        .collect();
    for (id, record) in records {
        entries.insert(id.as_str(), Entry::Record(record));
    }
    Ok(serde_json::to_string_pretty(&entries)?)
}

/// Fail with [`Rejection::MissingField`] when `value` is empty.
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), Rejection> {
    if value.is_empty() {
        Err(Rejection::MissingField { field })
    } else {
        Ok(())
    }
}

/// Handle on a data directory.
#[derive(Debug, Clone)]
pub struct DataStore {
    data_dir: PathBuf,
}

impl DataStore {
    /// Open the store described by `config`, creating the data directory if needed.
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        Self::open_dir(&config.data_dir)
    }

    /// Open a store rooted at `path`, creating it if needed.
    pub fn open_dir<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let data_dir = path.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir).map_err(|e| StoreError::io(&data_dir, e))?;
        debug!(data_dir = %data_dir.display(), "data store opened");
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of a collection's document.
    pub fn path_for(&self, kind: CollectionKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }

    /// Load a whole collection.
    ///
    /// A missing, unreadable or malformed document yields an empty collection.
    /// Entries that don't decode are left out; see [`DataStore::load_document`].
    pub fn load<T: Record>(&self) -> Collection<T> {
        self.load_document().records
    }

    /// Load a collection together with its undecodable entries.
    pub fn load_document<T: Record>(&self) -> Document<T> {
        Document::decode(self.read_entries(T::KIND))
    }

    /// Parse a document as a JSON object of raw entries.
    fn read_entries(&self, kind: CollectionKind) -> BTreeMap<String, Value> {
        let path = self.path_for(kind);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(collection = %kind, "no document yet, starting empty");
                return BTreeMap::new();
            }
            Err(e) => {
                warn!(collection = %kind, path = %path.display(), error = %e, "unreadable document, treating as empty");
                return BTreeMap::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(collection = %kind, path = %path.display(), error = %e, "malformed document, treating as empty");
                BTreeMap::new()
            }
        }
    }

    /// Overwrite a collection's document with `records`.
    ///
    /// Undecodable entries already in the document are carried over unless
    /// `records` has an entry with the same ID.
    pub fn save<T: Record>(&self, records: &Collection<T>) -> StoreResult<()> {
        let unreadable = self.load_document::<T>().unreadable;
        self.write_document(records, &unreadable)
    }

    /// Overwrite a collection's document, undecodable entries included.
    pub fn save_document<T: Record>(&self, doc: &Document<T>) -> StoreResult<()> {
        self.write_document(&doc.records, &doc.unreadable)
    }

    fn write_document<T: Record>(
        &self,
        records: &Collection<T>,
        unreadable: &BTreeMap<String, Value>,
    ) -> StoreResult<()> {
        let kind = T::KIND;
        let json = document_json(records, unreadable)?;
        self.atomic_write(&self.path_for(kind), json.as_bytes())?;
        debug!(
            collection = %kind,
            count = records.len(),
            unreadable = unreadable.len(),
            "document saved"
        );
        Ok(())
    }

    /// Write `data` to `path` via a `.tmp` sibling.
    fn atomic_write(&self, path: &Path, data: &[u8]) -> StoreResult<()> {
        fs::create_dir_all(&self.data_dir).map_err(|e| StoreError::io(&self.data_dir, e))?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, data).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, path).map_err(|e| StoreError::io(path, e))?;
        Ok(())
    }
}
