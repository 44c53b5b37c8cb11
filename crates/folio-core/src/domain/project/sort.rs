//! Sort engine

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};
use tracing::{debug, warn};

use super::entity::ProjectRecord;
use crate::error::{Error, Result};

/// Named ordering for a project listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortStrategy {
    /// Newest year first
    Recent,
    /// Title, A to Z
    Alpha,
    /// Featured, then spotlight, then newest
    #[default]
    Featured,
}

impl SortStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Alpha => "alpha",
            Self::Featured => "featured",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Recent => "Most Recent",
            Self::Alpha => "Alphabetical",
            Self::Featured => "Featured First",
        }
    }

    pub fn all() -> [Self; 3] {
        [Self::Featured, Self::Recent, Self::Alpha]
    }

    /// Ordering between two records under this strategy
    pub fn compare(&self, a: &ProjectRecord, b: &ProjectRecord) -> Ordering {
        match self {
            Self::Recent => b.year.cmp(&a.year),
            Self::Alpha => collate(&a.title, &b.title),
            Self::Featured => b
                .featured
                .cmp(&a.featured)
                .then_with(|| b.spotlight.cmp(&a.spotlight))
                .then_with(|| b.year.cmp(&a.year)),
        }
    }
}

impl FromStr for SortStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "recent" => Ok(Self::Recent),
            "alpha" => Ok(Self::Alpha),
            "featured" => Ok(Self::Featured),
            other => Err(Error::InvalidInput(format!(
                "unknown sort '{}'. Valid options: featured, recent, alpha",
                other
            ))),
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

thread_local! {
    static COLLATOR: Option<CollatorBorrowed<'static>> = root_collator();
}

fn root_collator() -> Option<CollatorBorrowed<'static>> {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(err) => {
            warn!(error = %err, "Root collation unavailable; falling back to case folding");
            None
        }
    }
}

/// Root-locale collation at tertiary strength; byte order breaks exact ties
fn collate(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => {
                let folded_a = a.chars().flat_map(char::to_lowercase);
                let folded_b = b.chars().flat_map(char::to_lowercase);
                folded_a.cmp(folded_b).then_with(|| b.cmp(a))
            }
        })
        .then_with(|| a.cmp(b))
}

/// Stable sort into a new sequence; the input is left untouched
pub fn sort_projects<'a, I>(records: I, strategy: SortStrategy) -> Vec<&'a ProjectRecord>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let mut sorted: Vec<&ProjectRecord> = records.into_iter().collect();
    sorted.sort_by(|a, b| strategy.compare(a, b));
    debug!(strategy = %strategy, count = sorted.len(), "Sorted projects");
    sorted
}
