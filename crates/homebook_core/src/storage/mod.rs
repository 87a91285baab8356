//! Whole-file snapshot persistence.
//!
//! # Responsibility
//! - Load and save serialized container snapshots to named files.
//! - Surface missing files as the documented empty-state path and corrupt
//!   files as hard failures.
//!
//! # Invariants
//! - A save fully replaces the target file via write-to-temp-then-rename.
//! - Corrupt persisted content is never silently treated as empty.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod snapshot;

pub use snapshot::{load_snapshot, save_snapshot};

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Encode(serde_json::Error),
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
            Self::Corrupt { path, source } => {
                write!(f, "corrupt snapshot file `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Corrupt { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
