//! Read-only project store
//!
//! The store is built once from a catalog, validated, and then only read.
//! Every engine borrows records from it.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::{info, warn};

use super::entity::ProjectRecord;
use crate::catalog;
use crate::error::{Error, Result};

/// Validated, immutable collection of project records
#[derive(Debug, Clone)]
pub struct ProjectStore {
    records: Vec<ProjectRecord>,
    index: HashMap<String, usize>,
}

/// A category present in the store with the number of records using it
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CategoryCount {
    pub id: String,
    pub count: usize,
}

impl ProjectStore {
    /// Validate records and build the id index
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            record.validate()?;

            if index.insert(record.id.clone(), position).is_some() {
                return Err(Error::DuplicateProjectId(record.id.clone()));
            }

            let mut seen = HashSet::new();
            for tech in &record.technologies {
                if !seen.insert(tech.as_str()) {
                    warn!(
                        project = %record.id,
                        technology = %tech,
                        "Duplicate technology entry; counted once for ranking"
                    );
                }
            }
        }

        Ok(Self { records, index })
    }

    /// Store backed by the catalog compiled into the binary
    pub fn builtin() -> Result<Self> {
        let store = Self::from_json_str(catalog::BUILTIN_CATALOG)?;
        info!(projects = store.len(), "Loaded built-in catalog");
        Ok(store)
    }

    /// Parse a JSON array of records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records = catalog::parse(json)?;
        Self::new(records)
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            projects = store.len(),
            "Loaded catalog"
        );
        Ok(store)
    }

    /// All records in catalog order
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct categories in first-seen order with record counts
    pub fn categories(&self) -> Vec<CategoryCount> {
        let mut counts: Vec<CategoryCount> = Vec::new();
        for record in &self.records {
            match counts.iter_mut().find(|c| c.id == record.category) {
                Some(existing) => existing.count += 1,
                None => counts.push(CategoryCount {
                    id: record.category.clone(),
                    count: 1,
                }),
            }
        }
        counts
    }
}
