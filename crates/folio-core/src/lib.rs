//! Folio Core Library
//!
//! This crate provides the core functionality for Folio, including:
//! - Project records and the validated, read-only project store
//! - Filtering by category and status
//! - Named sort strategies (featured, recent, alpha)
//! - Related-project ranking by technology overlap
//! - Detail-page metadata and display tables
//! - Configuration with TOML persistence

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::domain::project::{
        CategoryFilter, ProjectDirectory, ProjectFilter, ProjectQuery, ProjectRecord,
        ProjectStatus, ProjectStore, RankingWeights, SortStrategy, StatusFilter,
    };
    pub use crate::error::{Error, Result};
}
