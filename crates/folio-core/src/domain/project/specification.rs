//! Project specifications
//!
//! Predicates used by the filter engine.

use crate::domain::specification::Specification;

use super::entity::{ProjectRecord, ProjectStatus};

/// Records whose category equals the given id exactly
pub struct CategorySpec {
    category: String,
}

impl CategorySpec {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }
}

impl Specification<ProjectRecord> for CategorySpec {
    fn is_satisfied_by(&self, record: &ProjectRecord) -> bool {
        record.category == self.category
    }
}

/// Records flagged as featured
pub struct FeaturedSpec;

impl Specification<ProjectRecord> for FeaturedSpec {
    fn is_satisfied_by(&self, record: &ProjectRecord) -> bool {
        record.featured
    }
}

/// Records in a given status
pub struct StatusSpec {
    status: ProjectStatus,
}

impl StatusSpec {
    pub fn new(status: ProjectStatus) -> Self {
        Self { status }
    }
}

impl Specification<ProjectRecord> for StatusSpec {
    fn is_satisfied_by(&self, record: &ProjectRecord) -> bool {
        record.status == self.status
    }
}
