//! Project domain module
//!
//! Read-only directory over the portfolio's project records.
//!
//! # Architecture
//!
//! - **Entity**: `ProjectRecord` with its closed enums (`ProjectStatus`, `ColorAccent`, `Year`)
//! - **Store**: `ProjectStore`, validated once at load
//! - **Engines**: `filter_projects`, `sort_projects`, `rank_related`
//! - **Service**: `ProjectDirectory` tying the engines to configuration
//!
//! # Example
//!
//! ```
//! use folio_core::domain::project::{
//!     CategoryFilter, ProjectDirectory, ProjectQuery, ProjectStore, SortStrategy,
//! };
//!
//! let directory = ProjectDirectory::new(ProjectStore::builtin()?);
//!
//! let query = ProjectQuery::new()
//!     .with_category(CategoryFilter::Named("web".to_string()))
//!     .with_sort(SortStrategy::Alpha);
//! let listing = directory.list(&query);
//! assert_eq!(listing.total(), 2);
//!
//! let related = directory.related("campusconnect");
//! assert!(related.len() <= 3);
//! # Ok::<(), folio_core::Error>(())
//! ```

pub mod entity;
pub mod filter;
pub mod metadata;
pub mod palette;
pub mod related;
pub mod service;
pub mod sort;
pub mod specification;
pub mod store;

// Re-export main types
pub use entity::{
    Architecture, ColorAccent, ProjectLinks, ProjectRecord, ProjectStat, ProjectStatus,
    Screenshot, TechStack, TechStackEntry, Year,
};
pub use filter::{CategoryFilter, ProjectFilter, StatusFilter, filter_projects};
pub use metadata::{PageMetadata, SiteInfo};
pub use palette::{AccentPalette, KnownCategory};
pub use related::{RankingWeights, RelatedProject, ScoreBreakdown, rank_related, score_candidate};
pub use service::{CategoryOption, ProjectDirectory, ProjectListing, ProjectQuery, StatusOption};
pub use sort::{SortStrategy, sort_projects};
pub use specification::{CategorySpec, FeaturedSpec, StatusSpec};
pub use store::{CategoryCount, ProjectStore};
