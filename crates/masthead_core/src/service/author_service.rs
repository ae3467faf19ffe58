//! Author use-case service.
//!
//! # Responsibility
//! - Provide author-centric creation and relationship queries.
//! - Delegate registration and scanning to the catalog repository.
//!
//! # Invariants
//! - Derived lists are computed from registry scans on every call; nothing
//!   is cached or indexed.
//! - De-duplicated results carry no ordering guarantee.

use crate::model::article::{Article, ArticleId};
use crate::model::author::AuthorId;
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::catalog_repo::{CatalogRepository, RepoResult};
use std::collections::HashSet;

/// Use-case service for author creation and author-side queries.
pub struct AuthorService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> AuthorService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new author.
    ///
    /// An invalid name is silently dropped; the author is registered
    /// nameless and can be named later via [`AuthorService::rename`].
    pub fn create_author(&self, name: &str) -> AuthorId {
        self.repo.create_author(name)
    }

    /// Attempts to set the author's one-time name slot.
    pub fn rename(&self, id: AuthorId, name: &str) -> RepoResult<bool> {
        self.repo.rename_author(id, name)
    }

    /// Returns the author's articles in registry insertion order.
    pub fn articles(&self, id: AuthorId) -> Vec<Article> {
        self.repo.articles_by_author(id)
    }

    /// Returns the magazines this author has written for, de-duplicated by
    /// id. Order is not guaranteed.
    pub fn magazines(&self, id: AuthorId) -> Vec<Magazine> {
        let magazine_ids: HashSet<MagazineId> = self
            .repo
            .articles_by_author(id)
            .iter()
            .filter_map(Article::magazine)
            .collect();
        magazine_ids
            .into_iter()
            .filter_map(|magazine_id| self.repo.get_magazine(magazine_id).ok())
            .collect()
    }

    /// Registers a new article written by this author.
    ///
    /// Invalid title or an unregistered magazine id leave the corresponding
    /// slot unset on the registered article; nothing is rejected or raised.
    pub fn add_article(&self, author: AuthorId, magazine: MagazineId, title: &str) -> ArticleId {
        self.repo.create_article(author, magazine, title)
    }

    /// Returns the de-duplicated categories across this author's articles,
    /// or `None` if none of them resolve to a categorized magazine.
    ///
    /// Callers must branch on the `None` sentinel rather than expect an
    /// empty list.
    pub fn topic_areas(&self, id: AuthorId) -> Option<Vec<String>> {
        let categories: HashSet<String> = self
            .repo
            .articles_by_author(id)
            .iter()
            .filter_map(Article::magazine)
            .filter_map(|magazine_id| self.repo.get_magazine(magazine_id).ok())
            .filter_map(|magazine| magazine.category().map(str::to_string))
            .collect();
        if categories.is_empty() {
            return None;
        }
        Some(categories.into_iter().collect())
    }
}
