//! Author domain model.
//!
//! # Responsibility
//! - Define the author entity and its one-time name slot.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another author.
//! - `name`, once successfully set, never changes again.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an author.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type AuthorId = Uuid;

/// An author of articles.
///
/// The name slot is one-time-settable: the first accepted value is terminal.
/// Construction with an invalid name still yields an author, just a nameless
/// one; this mirrors the silent-rejection policy used across the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Stable global ID used for reference identity in derived queries.
    pub uuid: AuthorId,
    name: Option<String>,
}

impl Author {
    /// Creates an author with a generated stable ID.
    ///
    /// The name is routed through [`Author::set_name`]; if it is rejected the
    /// author starts out nameless and a later assignment may still succeed.
    pub fn new(name: &str) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an author with a caller-provided stable ID.
    ///
    /// Used by import-style paths where identity already exists externally.
    pub fn with_id(uuid: AuthorId, name: &str) -> Self {
        let mut author = Self { uuid, name: None };
        author.set_name(name);
        author
    }

    /// Returns the author's name, or `None` if no valid name was ever set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Assigns the name slot.
    ///
    /// # Contract
    /// - No-op returning `false` once a name is held (one-time slot).
    /// - Rejects the empty string.
    /// - Never raises; a rejected value leaves prior state unchanged.
    pub fn set_name(&mut self, value: &str) -> bool {
        if self.name.is_some() {
            return false;
        }
        if value.is_empty() {
            return false;
        }
        self.name = Some(value.to_string());
        true
    }
}
