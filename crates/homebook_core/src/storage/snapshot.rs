//! Snapshot file read/write.
//!
//! # Responsibility
//! - Read one serialized snapshot per file, tolerating absence.
//! - Replace the file atomically on save.
//!
//! # Invariants
//! - `load_snapshot` returns `Ok(None)` only for a file that does not exist.
//! - `save_snapshot` renames a fully written temp file over the target, so a
//!   crash mid-write leaves the prior version intact.

use super::{StorageError, StorageResult};
use log::{error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Reads and decodes the snapshot at `path`.
///
/// # Errors
/// - `StorageError::Io` when the file exists but cannot be read.
/// - `StorageError::Corrupt` when the content does not decode.
pub fn load_snapshot<T: DeserializeOwned>(path: &Path) -> StorageResult<Option<T>> {
    let started_at = Instant::now();
    info!(
        "event=snapshot_load module=storage status=start path={}",
        path.display()
    );

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!(
                "event=snapshot_load module=storage status=ok path={} outcome=missing",
                path.display()
            );
            return Ok(None);
        }
        Err(err) => {
            error!(
                "event=snapshot_load module=storage status=error path={} duration_ms={} error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => {
            info!(
                "event=snapshot_load module=storage status=ok path={} duration_ms={} bytes={}",
                path.display(),
                started_at.elapsed().as_millis(),
                bytes.len()
            );
            Ok(Some(value))
        }
        Err(err) => {
            error!(
                "event=snapshot_load module=storage status=error path={} duration_ms={} error_code=snapshot_corrupt error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                err
            );
            Err(StorageError::Corrupt {
                path: path.to_path_buf(),
                source: err,
            })
        }
    }
}

/// Encodes `data` and replaces the file at `path` with it.
///
/// # Errors
/// - `StorageError::Encode` when serialization fails.
/// - `StorageError::Io` when the temp write or rename fails.
pub fn save_snapshot<T: Serialize + ?Sized>(path: &Path, data: &T) -> StorageResult<()> {
    let started_at = Instant::now();
    info!(
        "event=snapshot_save module=storage status=start path={}",
        path.display()
    );

    let bytes = serde_json::to_vec_pretty(data).map_err(StorageError::Encode)?;
    let temp_path = temp_path_for(path);

    let outcome = fs::write(&temp_path, &bytes).and_then(|()| fs::rename(&temp_path, path));
    match outcome {
        Ok(()) => {
            info!(
                "event=snapshot_save module=storage status=ok path={} duration_ms={} bytes={}",
                path.display(),
                started_at.elapsed().as_millis(),
                bytes.len()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=snapshot_save module=storage status=error path={} duration_ms={} error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}

// The temp file must live next to the target so the rename never crosses a
// filesystem boundary.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map_or_else(
        || std::ffi::OsString::from("snapshot"),
        std::ffi::OsStr::to_os_string,
    );
    name.push(".tmp");
    path.with_file_name(name)
}
