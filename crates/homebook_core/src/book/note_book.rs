//! Ordered note store.

use crate::book::{BookError, BookResult, Persistent};
use crate::model::note::Note;
use std::path::{Path, PathBuf};

/// Insertion-ordered collection of notes.
///
/// Duplicates by structural equality are allowed on add; removal takes out
/// the first structurally-equal match and fails when none exists, unlike
/// `AddressBook::remove_record`, whose miss stays silent.
#[derive(Debug)]
pub struct NoteBook {
    path: PathBuf,
    notes: Vec<Note>,
}

impl NoteBook {
    /// Creates an empty book backed by `path`. No I/O happens here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            notes: Vec::new(),
        }
    }

    /// Appends a note. Structural duplicates are allowed.
    pub fn add_note(&mut self, note: Note) {
        self.notes.push(note);
    }

    /// Removes the first note structurally equal to `target`.
    ///
    /// # Errors
    /// Returns `BookError::NoteNotFound` when no note matches.
    pub fn remove_note(&mut self, target: &Note) -> BookResult<()> {
        let position = self
            .notes
            .iter()
            .position(|note| note == target)
            .ok_or(BookError::NoteNotFound)?;
        self.notes.remove(position);
        Ok(())
    }

    /// Iterates notes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl Persistent for NoteBook {
    type Snapshot = Vec<Note>;

    fn path(&self) -> &Path {
        &self.path
    }

    fn snapshot(&self) -> &Self::Snapshot {
        &self.notes
    }

    fn restore(&mut self, snapshot: Self::Snapshot) {
        self.notes = snapshot;
    }
}
