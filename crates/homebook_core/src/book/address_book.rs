//! Unique-key contact store.

use crate::book::Persistent;
use crate::model::record::Record;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Mapping from caller-chosen contact name to exactly one record.
///
/// Keys are unique; adding under an existing key overwrites. Iteration is
/// sorted by key, which keeps listings deterministic.
#[derive(Debug)]
pub struct AddressBook {
    path: PathBuf,
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Creates an empty book backed by `path`. No I/O happens here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: BTreeMap::new(),
        }
    }

    /// Inserts a record under `key`, overwriting any existing entry.
    pub fn add_record(&mut self, key: impl Into<String>, record: Record) {
        self.records.insert(key.into(), record);
    }

    /// Removes the record under `key`. A missing key is a silent no-op.
    pub fn remove_record(&mut self, key: &str) {
        self.records.remove(key);
    }

    pub fn get(&self, key: &str) -> Option<&Record> {
        self.records.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Record> {
        self.records.get_mut(key)
    }

    /// Iterates entries sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.records.iter().map(|(key, record)| (key.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Persistent for AddressBook {
    type Snapshot = BTreeMap<String, Record>;

    fn path(&self) -> &Path {
        &self.path
    }

    fn snapshot(&self) -> &Self::Snapshot {
        &self.records
    }

    fn restore(&mut self, snapshot: Self::Snapshot) {
        self.records = snapshot;
    }
}
