//! Filter engine
//!
//! Selects records by category and status. Both selectors apply together
//! (AND) in a single pass, and the result keeps catalog order.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::domain::specification::{Specification, TrueSpec};
use crate::error::{Error, Result};

use super::entity::{ProjectRecord, ProjectStatus};
use super::palette;
use super::specification::{CategorySpec, FeaturedSpec, StatusSpec};

/// Category selector
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CategoryFilter {
    /// No category constraint (`"all"`)
    #[default]
    All,
    /// Featured records regardless of category (`"featured"`)
    Featured,
    /// Exact category match
    Named(String),
}

impl CategoryFilter {
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Featured => "featured",
            Self::Named(category) => category,
        }
    }

    /// Label shown on the filter button
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All Projects",
            Self::Featured => "Featured",
            Self::Named(category) => palette::category_label(category),
        }
    }

    pub fn icon(&self) -> Option<&'static str> {
        match self {
            Self::All => Some("🚀"),
            Self::Featured => Some("⭐"),
            Self::Named(category) => palette::category_icon(category),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Infallible> {
        Ok(match s {
            "all" => Self::All,
            "featured" => Self::Featured,
            other => Self::Named(other.to_string()),
        })
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        match value.as_str() {
            "all" => Self::All,
            "featured" => Self::Featured,
            _ => Self::Named(value),
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_string()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    /// No status constraint (`"all"`)
    #[default]
    All,
    Only(ProjectStatus),
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Status",
            Self::Only(status) => status.label(),
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::All => "#ffffff",
            Self::Only(status) => status.color(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Every selectable option, `All` first
    pub fn options() -> [Self; 4] {
        let [a, b, c] = ProjectStatus::all();
        [Self::All, Self::Only(a), Self::Only(b), Self::Only(c)]
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        ProjectStatus::parse(s).map(Self::Only).ok_or_else(|| {
            Error::InvalidInput(format!(
                "unknown status '{}'. Valid options: all, completed, in-development, planned",
                s
            ))
        })
    }
}

impl From<ProjectStatus> for StatusFilter {
    fn from(status: ProjectStatus) -> Self {
        Self::Only(status)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combined category and status selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectFilter {
    pub category: CategoryFilter,
    pub status: StatusFilter,
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// True when neither selector constrains anything
    pub fn is_unfiltered(&self) -> bool {
        self.category.is_all() && self.status.is_all()
    }

    /// Build the conjunctive predicate for this selection
    pub fn specification(&self) -> Box<dyn Specification<ProjectRecord>> {
        let mut spec: Box<dyn Specification<ProjectRecord>> =
            Box::new(TrueSpec::<ProjectRecord>::new());

        match &self.category {
            CategoryFilter::All => {}
            CategoryFilter::Featured => spec = Box::new(spec.and(FeaturedSpec)),
            CategoryFilter::Named(category) => {
                spec = Box::new(spec.and(CategorySpec::new(category.clone())))
            }
        }

        if let StatusFilter::Only(status) = self.status {
            spec = Box::new(spec.and(StatusSpec::new(status)));
        }

        spec
    }
}

/// Records matching `filter`, in input order
pub fn filter_projects<'a, I>(records: I, filter: &ProjectFilter) -> Vec<&'a ProjectRecord>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let spec = filter.specification();
    let matched: Vec<_> = records
        .into_iter()
        .filter(|record| spec.is_satisfied_by(record))
        .collect();

    debug!(
        category = %filter.category,
        status = %filter.status,
        matched = matched.len(),
        "Filtered projects"
    );
    matched
}
