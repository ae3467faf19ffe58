//! Repository layer abstractions and the in-memory catalog implementation.
//!
//! # Responsibility
//! - Define registration and scan contracts for the publishing graph.
//! - Own the catalog registries (magazines, articles) and the author table.
//!
//! # Invariants
//! - Registries are append-only and insertion-ordered; there is no removal.
//! - Reference assignment only succeeds for ids registered in the catalog.
//! - Repository APIs return semantic errors (`NotFound`) for lookups of
//!   unknown ids; registration itself never fails.

pub mod catalog_repo;
