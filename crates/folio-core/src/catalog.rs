//! Catalog payloads
//!
//! A catalog is a JSON array of camelCase project records. Records are
//! decoded one at a time so a bad entry is reported with its id.

use serde_json::Value;

use crate::domain::project::entity::{ProjectRecord, Year};
use crate::error::{Error, Result};

/// Catalog compiled into the binary
pub const BUILTIN_CATALOG: &str = include_str!("../data/projects.json");

/// Decode a catalog into records, in file order
pub fn parse(json: &str) -> Result<Vec<ProjectRecord>> {
    let raw: Vec<Value> = serde_json::from_str(json)?;
    raw.into_iter()
        .enumerate()
        .map(|(position, value)| parse_record(position, value))
        .collect()
}

fn parse_record(position: usize, value: Value) -> Result<ProjectRecord> {
    let id = value
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", position));

    // Checked ahead of the full decode so the error names the year
    if let Some(Value::String(year)) = value.get("year") {
        if year.parse::<Year>().is_err() {
            return Err(Error::InvalidYear {
                id,
                year: year.clone(),
            });
        }
    }

    serde_json::from_value(value).map_err(|e| Error::InvalidRecord {
        id,
        reason: e.to_string(),
    })
}
