//! Magazine domain model.
//!
//! # Responsibility
//! - Define the magazine entity and its mutable, validated slots.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another magazine.
//! - `name` is either unset or between [`NAME_MIN_CHARS`] and
//!   [`NAME_MAX_CHARS`] characters.
//! - `category` is either unset or non-empty.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a magazine.
pub type MagazineId = Uuid;

/// Minimum accepted magazine name length, in characters.
pub const NAME_MIN_CHARS: usize = 2;
/// Maximum accepted magazine name length, in characters.
pub const NAME_MAX_CHARS: usize = 16;

/// A magazine that publishes articles.
///
/// Unlike [`crate::model::author::Author`], both slots stay mutable for the
/// whole lifetime of the entity; only invalid values are turned away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazine {
    /// Stable global ID used for reference identity in derived queries.
    pub uuid: MagazineId,
    name: Option<String>,
    category: Option<String>,
}

impl Magazine {
    /// Creates a magazine with a generated stable ID.
    ///
    /// Both fields go through their validated setters; rejected values leave
    /// the corresponding slot unset.
    pub fn new(name: &str, category: &str) -> Self {
        Self::with_id(Uuid::new_v4(), name, category)
    }

    /// Creates a magazine with a caller-provided stable ID.
    pub fn with_id(uuid: MagazineId, name: &str, category: &str) -> Self {
        let mut magazine = Self {
            uuid,
            name: None,
            category: None,
        };
        magazine.set_name(name);
        magazine.set_category(category);
        magazine
    }

    /// Returns the magazine's name, or `None` if no valid name is held.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Assigns the name slot.
    ///
    /// # Contract
    /// - Accepts names whose character count is within
    ///   `[NAME_MIN_CHARS, NAME_MAX_CHARS]`.
    /// - Re-assignable any number of times.
    /// - Never raises; a rejected value leaves prior state unchanged.
    pub fn set_name(&mut self, value: &str) -> bool {
        let chars = value.chars().count();
        if chars < NAME_MIN_CHARS || chars > NAME_MAX_CHARS {
            return false;
        }
        self.name = Some(value.to_string());
        true
    }

    /// Returns the magazine's category, or `None` if no valid category is held.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Assigns the category slot.
    ///
    /// # Contract
    /// - Rejects the empty string.
    /// - Re-assignable any number of times.
    /// - Never raises; a rejected value leaves prior state unchanged.
    pub fn set_category(&mut self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        self.category = Some(value.to_string());
        true
    }
}
