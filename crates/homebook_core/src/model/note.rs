//! Free-text note value object.
//!
//! # Responsibility
//! - Define the immutable `Note` shape: text, tags, optional title.
//! - Provide tag normalization helpers shared by services and callers.
//!
//! # Invariants
//! - Equality is structural: same text, tags and title.
//! - The note itself performs no validation; input collection happens at
//!   the shell boundary before construction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One free-text entry with optional tags and title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub title: Option<String>,
}

impl Note {
    /// Creates an untagged, untitled note.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tags: Vec::new(),
            title: None,
        }
    }

    /// Creates a note with all attributes supplied by the caller, as given.
    pub fn with_details(
        text: impl Into<String>,
        tags: Vec<String>,
        title: Option<String>,
    ) -> Self {
        Self {
            text: text.into(),
            tags,
            title,
        }
    }

    /// Case-insensitive exact tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|known| known.eq_ignore_ascii_case(tag))
    }
}

/// Normalizes one tag value: trimmed, lowercased, empty dropped.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Normalizes and deduplicates tag values, sorted by name.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut unique = BTreeSet::new();
    for tag in tags {
        if let Some(value) = normalize_tag(tag) {
            unique.insert(value);
        }
    }
    unique.into_iter().collect()
}
