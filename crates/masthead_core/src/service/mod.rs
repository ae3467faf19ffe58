//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository scans into the derived relationship queries.
//! - Keep callers decoupled from registry layout and scan details.

pub mod author_service;
pub mod magazine_service;
