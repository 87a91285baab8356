//! Core domain logic for homebook: validated contact records, free-text
//! notes and their on-disk snapshots.
//! This crate is the single source of truth for business invariants.

pub mod book;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;

pub use book::{AddressBook, BookError, BookResult, NoteBook, Persistent};
pub use logging::{default_log_level, init_logging};
pub use model::field::{Address, Birthday, Email, FieldError, FieldResult, Name, Phone};
pub use model::note::Note;
pub use model::record::Record;
pub use service::contact_service::{
    BirthdayReminder, ContactResult, ContactService, ContactServiceError,
};
pub use service::note_service::{NoteResult, NoteService, NoteServiceError};
pub use storage::{StorageError, StorageResult};
