//! Core domain logic for Masthead, an in-memory publishing catalog.
//! This crate is the single source of truth for field validation and
//! relationship-query invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::magazine::{Magazine, MagazineId};
pub use repo::catalog_repo::{
    CatalogRepository, CatalogStore, MemoryCatalogRepository, RepoError, RepoResult,
};
pub use service::author_service::AuthorService;
pub use service::magazine_service::{MagazineService, CONTRIBUTING_MIN_ARTICLES};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
