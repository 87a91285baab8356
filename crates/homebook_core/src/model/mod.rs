//! Domain model for contacts and notes.
//!
//! # Responsibility
//! - Define the validated field types contact records are assembled from.
//! - Define the `Record` and `Note` value shapes shared by books and services.
//!
//! # Invariants
//! - A constructed field always satisfies its format predicate.
//! - Model types carry no storage concerns; the book layer owns persistence.

pub mod field;
pub mod note;
pub mod record;
