//! Article domain model.
//!
//! # Responsibility
//! - Define the join entity linking one author to one magazine.
//! - Own the one-time title slot and its length bounds.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another article.
//! - `title`, once successfully set, never changes again.
//! - Reference slots hold ids only; whether an id names a registered entity
//!   is enforced at the repository boundary, not here.

use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an article.
pub type ArticleId = Uuid;

/// Minimum accepted title length, in characters.
pub const TITLE_MIN_CHARS: usize = 5;
/// Maximum accepted title length, in characters.
pub const TITLE_MAX_CHARS: usize = 50;

/// An article written by one author and published in one magazine.
///
/// All three slots can legitimately be unset: construction with invalid
/// input keeps the entity but drops the offending value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Stable global ID used for reference identity in derived queries.
    pub uuid: ArticleId,
    title: Option<String>,
    author: Option<AuthorId>,
    magazine: Option<MagazineId>,
}

impl Article {
    /// Creates an article with a generated stable ID and no references.
    ///
    /// The title is routed through [`Article::set_title`]; reference slots
    /// are filled by the repository once the target ids are verified.
    pub fn new(title: &str) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates an article with a caller-provided stable ID.
    pub fn with_id(uuid: ArticleId, title: &str) -> Self {
        let mut article = Self {
            uuid,
            title: None,
            author: None,
            magazine: None,
        };
        article.set_title(title);
        article
    }

    /// Returns the article's title, or `None` if no valid title was ever set.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Assigns the title slot.
    ///
    /// # Contract
    /// - No-op returning `false` once a title is held (one-time slot).
    /// - Accepts titles whose character count is within
    ///   `[TITLE_MIN_CHARS, TITLE_MAX_CHARS]`.
    /// - Never raises; a rejected value leaves prior state unchanged.
    pub fn set_title(&mut self, value: &str) -> bool {
        if self.title.is_some() {
            return false;
        }
        let chars = value.chars().count();
        if chars < TITLE_MIN_CHARS || chars > TITLE_MAX_CHARS {
            return false;
        }
        self.title = Some(value.to_string());
        true
    }

    /// Returns the id of the author reference, if set.
    pub fn author(&self) -> Option<AuthorId> {
        self.author
    }

    /// Points the author reference at the given id.
    ///
    /// Registration of the id is the repository's concern; this setter only
    /// records it.
    pub fn set_author(&mut self, author: AuthorId) {
        self.author = Some(author);
    }

    /// Returns the id of the magazine reference, if set.
    pub fn magazine(&self) -> Option<MagazineId> {
        self.magazine
    }

    /// Points the magazine reference at the given id.
    pub fn set_magazine(&mut self, magazine: MagazineId) {
        self.magazine = Some(magazine);
    }
}
