//! Catalog repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Register every constructed magazine and article into catalog registries.
//! - Answer the raw relationship scans that derived queries are built from.
//!
//! # Invariants
//! - Registration is unconditional: an entity that failed slot validation is
//!   still appended, with the rejected slots left unset.
//! - Registries preserve insertion order; scans report matches in that order.
//! - An article's author/magazine reference is only assigned when the target
//!   id is registered; unknown ids are silently ignored.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use log::debug;
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Lookup error for catalog queries addressed by id.
///
/// Validation failures never surface here; they are silent no-ops by policy.
/// Only a genuinely unknown id is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    AuthorNotFound(AuthorId),
    MagazineNotFound(MagazineId),
    ArticleNotFound(ArticleId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthorNotFound(id) => write!(f, "author not found: {id}"),
            Self::MagazineNotFound(id) => write!(f, "magazine not found: {id}"),
            Self::ArticleNotFound(id) => write!(f, "article not found: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Shared in-memory backing store for one catalog.
///
/// Plays the role a database connection plays for a persistent repository:
/// repositories borrow it, and several repositories may share one store.
/// Interior mutability is `RefCell` because the design is single-threaded;
/// concurrent mutation is out of scope.
#[derive(Debug, Default)]
pub struct CatalogStore {
    authors: RefCell<Vec<Author>>,
    magazines: RefCell<Vec<Magazine>>,
    articles: RefCell<Vec<Article>>,
}

impl CatalogStore {
    /// Creates an empty catalog store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Repository interface for catalog registration and relationship scans.
pub trait CatalogRepository {
    /// Registers a new author and returns its stable id.
    ///
    /// An invalid name leaves the author nameless but still registered.
    fn create_author(&self, name: &str) -> AuthorId;

    /// Attempts to set an author's one-time name slot.
    ///
    /// Returns `Ok(false)` when the slot already holds a name or the value
    /// is invalid; the stored state is unchanged in both cases.
    fn rename_author(&self, id: AuthorId, name: &str) -> RepoResult<bool>;

    /// Registers a new magazine and returns its stable id.
    ///
    /// Registration happens regardless of whether name/category validation
    /// succeeded.
    fn create_magazine(&self, name: &str, category: &str) -> MagazineId;

    /// Attempts to re-assign a magazine's name; invalid values are ignored.
    fn rename_magazine(&self, id: MagazineId, name: &str) -> RepoResult<bool>;

    /// Attempts to re-assign a magazine's category; invalid values are ignored.
    fn recategorize_magazine(&self, id: MagazineId, category: &str) -> RepoResult<bool>;

    /// Registers a new article and returns its stable id.
    ///
    /// The title goes through the article's validated slot. Each reference is
    /// assigned only if the target id is registered in this catalog; an
    /// unknown id leaves that reference unset. The article is appended to the
    /// registry in every case.
    fn create_article(&self, author: AuthorId, magazine: MagazineId, title: &str) -> ArticleId;

    /// Attempts to set an article's one-time title slot.
    fn retitle_article(&self, id: ArticleId, title: &str) -> RepoResult<bool>;

    /// Re-points an article's author reference.
    ///
    /// Returns `Ok(false)` when `author` is not registered; the prior
    /// reference (possibly unset) is retained.
    fn reassign_article_author(&self, id: ArticleId, author: AuthorId) -> RepoResult<bool>;

    /// Re-points an article's magazine reference, same contract as
    /// [`CatalogRepository::reassign_article_author`].
    fn reassign_article_magazine(&self, id: ArticleId, magazine: MagazineId) -> RepoResult<bool>;

    /// Gets one author by id.
    fn get_author(&self, id: AuthorId) -> RepoResult<Author>;

    /// Gets one magazine by id.
    fn get_magazine(&self, id: MagazineId) -> RepoResult<Magazine>;

    /// Gets one article by id.
    fn get_article(&self, id: ArticleId) -> RepoResult<Article>;

    /// Returns every registered magazine in registration order.
    fn magazines(&self) -> Vec<Magazine>;

    /// Returns every registered article in registration order.
    fn articles(&self) -> Vec<Article>;

    /// Scans the article registry for articles referencing the given author.
    fn articles_by_author(&self, author: AuthorId) -> Vec<Article>;

    /// Scans the article registry for articles published in the given magazine.
    fn articles_in_magazine(&self, magazine: MagazineId) -> Vec<Article>;
}

/// Catalog repository backed by a borrowed in-memory store.
#[derive(Debug, Clone, Copy)]
pub struct MemoryCatalogRepository<'store> {
    store: &'store CatalogStore,
}

impl<'store> MemoryCatalogRepository<'store> {
    /// Creates a repository over the given store.
    pub fn new(store: &'store CatalogStore) -> Self {
        Self { store }
    }

    fn author_registered(&self, id: AuthorId) -> bool {
        self.store
            .authors
            .borrow()
            .iter()
            .any(|author| author.uuid == id)
    }

    fn magazine_registered(&self, id: MagazineId) -> bool {
        self.store
            .magazines
            .borrow()
            .iter()
            .any(|magazine| magazine.uuid == id)
    }
}

impl CatalogRepository for MemoryCatalogRepository<'_> {
    fn create_author(&self, name: &str) -> AuthorId {
        let author = Author::new(name);
        let id = author.uuid;
        self.store.authors.borrow_mut().push(author);
        debug!("event=author_registered module=repo status=ok author_id={id}");
        id
    }

    fn rename_author(&self, id: AuthorId, name: &str) -> RepoResult<bool> {
        let mut authors = self.store.authors.borrow_mut();
        let author = authors
            .iter_mut()
            .find(|author| author.uuid == id)
            .ok_or(RepoError::AuthorNotFound(id))?;
        Ok(author.set_name(name))
    }

    fn create_magazine(&self, name: &str, category: &str) -> MagazineId {
        let magazine = Magazine::new(name, category);
        let id = magazine.uuid;
        self.store.magazines.borrow_mut().push(magazine);
        debug!("event=magazine_registered module=repo status=ok magazine_id={id}");
        id
    }

    fn rename_magazine(&self, id: MagazineId, name: &str) -> RepoResult<bool> {
        let mut magazines = self.store.magazines.borrow_mut();
        let magazine = magazines
            .iter_mut()
            .find(|magazine| magazine.uuid == id)
            .ok_or(RepoError::MagazineNotFound(id))?;
        Ok(magazine.set_name(name))
    }

    fn recategorize_magazine(&self, id: MagazineId, category: &str) -> RepoResult<bool> {
        let mut magazines = self.store.magazines.borrow_mut();
        let magazine = magazines
            .iter_mut()
            .find(|magazine| magazine.uuid == id)
            .ok_or(RepoError::MagazineNotFound(id))?;
        Ok(magazine.set_category(category))
    }

    fn create_article(&self, author: AuthorId, magazine: MagazineId, title: &str) -> ArticleId {
        let mut article = Article::new(title);
        if self.author_registered(author) {
            article.set_author(author);
        }
        if self.magazine_registered(magazine) {
            article.set_magazine(magazine);
        }
        let id = article.uuid;
        self.store.articles.borrow_mut().push(article);
        debug!("event=article_registered module=repo status=ok article_id={id}");
        id
    }

    fn retitle_article(&self, id: ArticleId, title: &str) -> RepoResult<bool> {
        let mut articles = self.store.articles.borrow_mut();
        let article = articles
            .iter_mut()
            .find(|article| article.uuid == id)
            .ok_or(RepoError::ArticleNotFound(id))?;
        Ok(article.set_title(title))
    }

    fn reassign_article_author(&self, id: ArticleId, author: AuthorId) -> RepoResult<bool> {
        if !self.author_registered(author) {
            // Silent-ignore: the prior reference stays as it was.
            self.get_article(id)?;
            return Ok(false);
        }
        let mut articles = self.store.articles.borrow_mut();
        let article = articles
            .iter_mut()
            .find(|article| article.uuid == id)
            .ok_or(RepoError::ArticleNotFound(id))?;
        article.set_author(author);
        Ok(true)
    }

    fn reassign_article_magazine(&self, id: ArticleId, magazine: MagazineId) -> RepoResult<bool> {
        if !self.magazine_registered(magazine) {
            self.get_article(id)?;
            return Ok(false);
        }
        let mut articles = self.store.articles.borrow_mut();
        let article = articles
            .iter_mut()
            .find(|article| article.uuid == id)
            .ok_or(RepoError::ArticleNotFound(id))?;
        article.set_magazine(magazine);
        Ok(true)
    }

    fn get_author(&self, id: AuthorId) -> RepoResult<Author> {
        self.store
            .authors
            .borrow()
            .iter()
            .find(|author| author.uuid == id)
            .cloned()
            .ok_or(RepoError::AuthorNotFound(id))
    }

    fn get_magazine(&self, id: MagazineId) -> RepoResult<Magazine> {
        self.store
            .magazines
            .borrow()
            .iter()
            .find(|magazine| magazine.uuid == id)
            .cloned()
            .ok_or(RepoError::MagazineNotFound(id))
    }

    fn get_article(&self, id: ArticleId) -> RepoResult<Article> {
        self.store
            .articles
            .borrow()
            .iter()
            .find(|article| article.uuid == id)
            .cloned()
            .ok_or(RepoError::ArticleNotFound(id))
    }

    fn magazines(&self) -> Vec<Magazine> {
        self.store.magazines.borrow().clone()
    }

    fn articles(&self) -> Vec<Article> {
        self.store.articles.borrow().clone()
    }

    fn articles_by_author(&self, author: AuthorId) -> Vec<Article> {
        self.store
            .articles
            .borrow()
            .iter()
            .filter(|article| article.author() == Some(author))
            .cloned()
            .collect()
    }

    fn articles_in_magazine(&self, magazine: MagazineId) -> Vec<Article> {
        self.store
            .articles
            .borrow()
            .iter()
            .filter(|article| article.magazine() == Some(magazine))
            .cloned()
            .collect()
    }
}
