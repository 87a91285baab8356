//! Book containers and their persistence contract.
//!
//! # Responsibility
//! - Define the in-memory containers: `AddressBook` (unique-key records)
//!   and `NoteBook` (ordered notes).
//! - Tie both to snapshot storage through one shared `Persistent` contract.
//!
//! # Invariants
//! - `load` on a missing file keeps the empty initial state.
//! - `save` captures the whole container; there is no incremental format.
//! - Removal-miss policy differs on purpose: address book removal is a
//!   silent no-op, note removal fails.

use crate::storage::{self, StorageError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub mod address_book;
pub mod note_book;

pub use address_book::AddressBook;
pub use note_book::NoteBook;

pub type BookResult<T> = Result<T, BookError>;

#[derive(Debug)]
pub enum BookError {
    /// Note removal target was never added.
    NoteNotFound,
    /// Snapshot load/save failure.
    Storage(StorageError),
}

impl Display for BookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound => write!(f, "note not found"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BookError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoteNotFound => None,
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<StorageError> for BookError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Snapshot persistence contract shared by both books.
///
/// A book exposes its backing path and a serializable view of its container;
/// the provided `load`/`save` drive the storage layer with them.
pub trait Persistent {
    type Snapshot: Serialize + DeserializeOwned;

    /// Backing file for this book, fixed at construction.
    fn path(&self) -> &Path;

    /// Borrows the container in its persisted shape.
    fn snapshot(&self) -> &Self::Snapshot;

    /// Replaces the container from a decoded snapshot.
    fn restore(&mut self, snapshot: Self::Snapshot);

    /// Reads the backing file, replacing in-memory state when it exists.
    ///
    /// A missing file keeps the current (empty) state.
    ///
    /// # Errors
    /// Propagates read failures and corrupt-content failures unchanged.
    fn load(&mut self) -> BookResult<()> {
        if let Some(snapshot) = storage::load_snapshot(self.path())? {
            self.restore(snapshot);
        }
        Ok(())
    }

    /// Writes the current container, fully replacing any prior file.
    ///
    /// # Errors
    /// Propagates encode and write failures unchanged.
    fn save(&self) -> BookResult<()> {
        storage::save_snapshot(self.path(), self.snapshot())?;
        Ok(())
    }
}
