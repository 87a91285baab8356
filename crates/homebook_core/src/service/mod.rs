//! Use-case services.
//!
//! # Responsibility
//! - Orchestrate book and field operations into the verb-level APIs the
//!   shell dispatches to.
//! - Keep input parsing and printing out of the core.

pub mod contact_service;
pub mod note_service;
