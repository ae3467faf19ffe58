//! Domain model for the publishing graph.
//!
//! # Responsibility
//! - Define the Author, Magazine and Article entities and their field rules.
//! - Keep slot validation (one-time fields, length bounds) inside the model.
//!
//! # Invariants
//! - Every entity is identified by a stable uuid-based id.
//! - Invalid slot assignments never raise; prior state is retained and the
//!   setter reports `false`.

pub mod article;
pub mod author;
pub mod magazine;
