//! Project directory service
//!
//! Combines the store with the filter, sort and ranking engines and the
//! site configuration. Selection state is passed in per call through
//! `ProjectQuery`; the directory itself holds nothing but read-only data.

use serde::Serialize;
use std::path::Path;

use tracing::{debug, info};

use super::entity::ProjectRecord;
use super::filter::{CategoryFilter, ProjectFilter, StatusFilter, filter_projects};
use super::metadata::{PageMetadata, SiteInfo};
use super::related::{RankingWeights, RelatedProject, rank_related};
use super::sort::{SortStrategy, sort_projects};
use super::store::ProjectStore;
use crate::config::Config;
use crate::error::{Error, Result};

/// Filter plus ordering for one listing request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectQuery {
    pub filter: ProjectFilter,
    pub sort: SortStrategy,
}

impl ProjectQuery {
    /// Unfiltered query with the default ordering
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.filter.category = category;
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.filter.status = status;
        self
    }

    pub fn with_sort(mut self, sort: SortStrategy) -> Self {
        self.sort = sort;
        self
    }

    /// True when anything differs from the default listing
    pub fn has_active_filters(&self) -> bool {
        !self.filter.is_unfiltered() || self.sort != SortStrategy::default()
    }

    /// Chips describing the non-default selections
    pub fn active_filter_labels(&self) -> Vec<String> {
        let mut labels = Vec::new();
        if !self.filter.category.is_all() {
            labels.push(format!("Category: {}", self.filter.category.label()));
        }
        if !self.filter.status.is_all() {
            labels.push(format!("Status: {}", self.filter.status.label()));
        }
        if self.sort != SortStrategy::default() {
            labels.push(format!("Sort: {}", self.sort));
        }
        labels
    }
}

/// Result of a listing query
#[derive(Debug, Clone, Serialize)]
pub struct ProjectListing<'a> {
    pub projects: Vec<&'a ProjectRecord>,
}

impl ProjectListing<'_> {
    pub fn total(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// "Showing N project(s)"
    pub fn summary(&self) -> String {
        let n = self.total();
        format!("Showing {} project{}", n, if n == 1 { "" } else { "s" })
    }
}

/// One selectable category with the number of projects it matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    pub count: usize,
}

/// One selectable status with the number of projects it matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusOption {
    pub id: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub count: usize,
}

/// Read-only directory over a validated project store
#[derive(Debug, Clone)]
pub struct ProjectDirectory {
    store: ProjectStore,
    site: SiteInfo,
    weights: RankingWeights,
    default_sort: SortStrategy,
}

impl ProjectDirectory {
    /// Directory with default site info and ranking weights
    pub fn new(store: ProjectStore) -> Self {
        Self {
            store,
            site: SiteInfo::default(),
            weights: RankingWeights::default(),
            default_sort: SortStrategy::default(),
        }
    }

    /// Build from configuration; `catalog_override` wins over `catalog.path`
    pub fn from_config(config: &Config, catalog_override: Option<&Path>) -> Result<Self> {
        config
            .validate()
            .map_err(|e| Error::ConfigError(e.to_string()))?;

        let store = match catalog_override.or(config.catalog.path.as_deref()) {
            Some(path) => ProjectStore::load(path)?,
            None => ProjectStore::builtin()?,
        };
        info!(projects = store.len(), "Project directory ready");

        Ok(Self::new(store)
            .with_site(config.site.to_site_info())
            .with_weights(config.ranking)
            .with_default_sort(config.listing.default_sort))
    }

    pub fn with_site(mut self, site: SiteInfo) -> Self {
        self.site = site;
        self
    }

    pub fn with_weights(mut self, weights: RankingWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_default_sort(mut self, sort: SortStrategy) -> Self {
        self.default_sort = sort;
        self
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn weights(&self) -> &RankingWeights {
        &self.weights
    }

    /// Unfiltered query using the configured ordering
    pub fn default_query(&self) -> ProjectQuery {
        ProjectQuery::new().with_sort(self.default_sort)
    }

    /// Filter, then sort
    pub fn list(&self, query: &ProjectQuery) -> ProjectListing<'_> {
        let filtered = filter_projects(self.store.records(), &query.filter);
        let projects = sort_projects(filtered, query.sort);
        debug!(total = projects.len(), "Listed projects");
        ProjectListing { projects }
    }

    pub fn find(&self, id: &str) -> Option<&ProjectRecord> {
        self.store.get(id)
    }

    /// Lookup that requires the project to exist
    pub fn get(&self, id: &str) -> Result<&ProjectRecord> {
        self.find(id)
            .ok_or_else(|| Error::ProjectNotFound(id.to_string()))
    }

    /// Related projects using the configured weights
    pub fn related(&self, id: &str) -> Vec<RelatedProject<'_>> {
        rank_related(&self.store, id, &self.weights)
    }

    /// Related projects with an explicit result limit
    pub fn related_with_limit(&self, id: &str, limit: usize) -> Vec<RelatedProject<'_>> {
        rank_related(&self.store, id, &self.weights.with_limit(limit))
    }

    /// Detail-page metadata; unknown ids get the not-found page
    pub fn metadata(&self, id: &str) -> PageMetadata {
        PageMetadata::resolve(self.find(id), &self.site)
    }

    /// Category selector options: all, each catalog category, featured
    pub fn category_options(&self) -> Vec<CategoryOption> {
        let option = |filter: CategoryFilter, count: usize| CategoryOption {
            id: filter.as_str().to_string(),
            label: filter.label().to_string(),
            icon: filter.icon(),
            count,
        };

        let records = self.store.records();
        let mut options = vec![option(CategoryFilter::All, records.len())];
        options.extend(
            self.store
                .categories()
                .into_iter()
                .map(|c| option(CategoryFilter::Named(c.id), c.count)),
        );
        options.push(option(
            CategoryFilter::Featured,
            records.iter().filter(|r| r.featured).count(),
        ));
        options
    }

    /// Status selector options with counts
    pub fn status_options(&self) -> Vec<StatusOption> {
        StatusFilter::options()
            .into_iter()
            .map(|status| StatusOption {
                id: status.as_str(),
                label: status.label(),
                color: status.color(),
                count: filter_projects(
                    self.store.records(),
                    &ProjectFilter::new().with_status(status),
                )
                .len(),
            })
            .collect()
    }
}
