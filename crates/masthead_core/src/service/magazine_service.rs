//! Magazine use-case service.
//!
//! # Responsibility
//! - Provide magazine-centric creation, mutation and contributor queries.
//! - Delegate registration and scanning to the catalog repository.
//!
//! # Invariants
//! - `contributing_authors` counts strictly more than
//!   [`CONTRIBUTING_MIN_ARTICLES`] articles scoped to one magazine.
//! - Empty derived results are reported as `None`, never as an empty list.

use crate::model::article::Article;
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::MagazineId;
use crate::repo::catalog_repo::{CatalogRepository, RepoResult};
use std::collections::HashSet;

/// An author qualifies as contributing once they have strictly more than
/// this many articles in a single magazine.
pub const CONTRIBUTING_MIN_ARTICLES: usize = 2;

/// Use-case service for magazine creation and magazine-side queries.
pub struct MagazineService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> MagazineService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new magazine.
    ///
    /// Registration is unconditional; slots that fail validation are left
    /// unset and can be assigned later.
    pub fn create_magazine(&self, name: &str, category: &str) -> MagazineId {
        self.repo.create_magazine(name, category)
    }

    /// Attempts to re-assign the magazine's name.
    pub fn rename(&self, id: MagazineId, name: &str) -> RepoResult<bool> {
        self.repo.rename_magazine(id, name)
    }

    /// Attempts to re-assign the magazine's category.
    pub fn recategorize(&self, id: MagazineId, category: &str) -> RepoResult<bool> {
        self.repo.recategorize_magazine(id, category)
    }

    /// Returns the magazine's articles in registry insertion order.
    pub fn articles(&self, id: MagazineId) -> Vec<Article> {
        self.repo.articles_in_magazine(id)
    }

    /// Returns the authors who wrote for this magazine, de-duplicated by id.
    /// Order is not guaranteed.
    pub fn contributors(&self, id: MagazineId) -> Vec<Author> {
        self.contributor_ids(id)
            .into_iter()
            .filter_map(|author_id| self.repo.get_author(author_id).ok())
            .collect()
    }

    /// Returns the titles of this magazine's articles in registry order, or
    /// `None` if the magazine has no articles at all.
    ///
    /// Articles whose title slot is unset contribute nothing, so a magazine
    /// holding only untitled articles yields `Some` of an empty list.
    pub fn article_titles(&self, id: MagazineId) -> Option<Vec<String>> {
        let articles = self.repo.articles_in_magazine(id);
        if articles.is_empty() {
            return None;
        }
        Some(
            articles
                .iter()
                .filter_map(|article| article.title().map(str::to_string))
                .collect(),
        )
    }

    /// Returns the authors with strictly more than
    /// [`CONTRIBUTING_MIN_ARTICLES`] articles in this magazine, or `None`
    /// when nobody qualifies.
    ///
    /// Counts are taken by a second scan per contributor; quadratic, which
    /// is fine at catalog scale.
    pub fn contributing_authors(&self, id: MagazineId) -> Option<Vec<Author>> {
        let articles = self.repo.articles_in_magazine(id);
        let qualifying: Vec<Author> = self
            .contributor_ids(id)
            .into_iter()
            .filter(|author_id| {
                let count = articles
                    .iter()
                    .filter(|article| article.author() == Some(*author_id))
                    .count();
                count > CONTRIBUTING_MIN_ARTICLES
            })
            .filter_map(|author_id| self.repo.get_author(author_id).ok())
            .collect();
        if qualifying.is_empty() {
            return None;
        }
        Some(qualifying)
    }

    fn contributor_ids(&self, id: MagazineId) -> HashSet<AuthorId> {
        self.repo
            .articles_in_magazine(id)
            .iter()
            .filter_map(Article::author)
            .collect()
    }
}
