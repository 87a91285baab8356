//! Note use-case service.
//!
//! # Responsibility
//! - Build notes from shell-collected input, normalizing tag values.
//! - Provide the read surface behind note search/tag/view verbs.
//!
//! # Invariants
//! - Tags are normalized to lowercase and deduplicated before storage.
//! - Removal keys on structural equality and fails on a miss.

use crate::book::{BookError, BookResult, NoteBook, Persistent};
use crate::model::field::FieldError;
use crate::model::note::{normalize_tags, Note};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type NoteResult<T> = Result<T, NoteServiceError>;

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Removal target was never added.
    NoteNotFound,
    /// Shell input could not be turned into a note.
    Field(FieldError),
    /// Snapshot load/save failure.
    Book(BookError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound => write!(f, "note not found"),
            Self::Field(err) => write!(f, "{err}"),
            Self::Book(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoteNotFound => None,
            Self::Field(err) => Some(err),
            Self::Book(err) => Some(err),
        }
    }
}

impl From<FieldError> for NoteServiceError {
    fn from(value: FieldError) -> Self {
        Self::Field(value)
    }
}

impl From<BookError> for NoteServiceError {
    fn from(value: BookError) -> Self {
        match value {
            BookError::NoteNotFound => Self::NoteNotFound,
            other => Self::Book(other),
        }
    }
}

/// Note service facade over an owned note book.
pub struct NoteService {
    book: NoteBook,
}

impl NoteService {
    pub fn new(book: NoteBook) -> Self {
        Self { book }
    }

    pub fn book(&self) -> &NoteBook {
        &self.book
    }

    /// Reads persisted notes into the book.
    ///
    /// # Errors
    /// Propagates storage failures; a corrupt file is fatal for the call.
    pub fn load(&mut self) -> BookResult<()> {
        self.book.load()?;
        info!(
            "event=notes_load module=service status=ok count={}",
            self.book.len()
        );
        Ok(())
    }

    /// Writes the book to its backing file.
    ///
    /// # Errors
    /// Propagates storage failures.
    pub fn save(&self) -> BookResult<()> {
        self.book.save()?;
        info!(
            "event=notes_save module=service status=ok count={}",
            self.book.len()
        );
        Ok(())
    }

    /// Builds a note from shell input and appends it.
    ///
    /// Tags are normalized (trimmed, lowercased, deduplicated); text and
    /// title are stored as given. Returns the stored note so the caller can
    /// echo it back.
    ///
    /// # Errors
    /// Returns `FieldError::NoteInputInvalidFormat` for blank text.
    pub fn add_note(
        &mut self,
        text: &str,
        tags: &[String],
        title: Option<String>,
    ) -> NoteResult<Note> {
        if text.trim().is_empty() {
            return Err(FieldError::NoteInputInvalidFormat(
                "note text cannot be empty".to_string(),
            )
            .into());
        }

        let note = Note::with_details(text, normalize_tags(tags), title);
        self.book.add_note(note.clone());
        info!(
            "event=note_add module=service status=ok tags={}",
            note.tags.len()
        );
        Ok(note)
    }

    /// Removes the first note structurally equal to `target`.
    ///
    /// # Errors
    /// Returns `NoteServiceError::NoteNotFound` when nothing matches.
    pub fn remove_note(&mut self, target: &Note) -> NoteResult<()> {
        self.book.remove_note(target)?;
        info!("event=note_remove module=service status=ok");
        Ok(())
    }

    /// Case-insensitive substring search over text and title.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        let needle = query.to_lowercase();
        self.book
            .iter()
            .filter(|note| {
                note.text.to_lowercase().contains(&needle)
                    || note
                        .title
                        .as_ref()
                        .is_some_and(|title| title.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Notes carrying `tag` (case-insensitive exact match).
    pub fn find_by_tag(&self, tag: &str) -> Vec<&Note> {
        self.book.iter().filter(|note| note.has_tag(tag)).collect()
    }

    /// All notes in insertion order.
    pub fn all(&self) -> Vec<&Note> {
        self.book.iter().collect()
    }
}
