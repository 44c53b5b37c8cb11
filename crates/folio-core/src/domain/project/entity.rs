//! Project record and related types
//!
//! A `ProjectRecord` is one entry of the portfolio catalog. Records are
//! deserialized from camelCase JSON, validated once by the store and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InDevelopment,
    Planned,
}

impl ProjectStatus {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InDevelopment => "in-development",
            Self::Planned => "planned",
        }
    }

    /// Create from string representation
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "completed" => Some(Self::Completed),
            "in-development" | "in_development" => Some(Self::InDevelopment),
            "planned" => Some(Self::Planned),
            _ => None,
        }
    }

    /// Get all statuses in display order
    pub fn all() -> [Self; 3] {
        [Self::Completed, Self::InDevelopment, Self::Planned]
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Accent colour key into the static palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorAccent {
    Cyan,
    Purple,
    Blue,
    Magenta,
}

impl ColorAccent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cyan => "cyan",
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
        }
    }
}

impl fmt::Display for ColorAccent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Four-digit project year, stored as text in catalogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Year(u16);

impl Year {
    /// Create a year, rejecting values outside 0..=9999
    pub fn new(value: u16) -> Result<Self> {
        if value > 9999 {
            return Err(Error::InvalidInput(format!(
                "year {} has more than four digits",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl std::str::FromStr for Year {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.len() != 4 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidInput(format!(
                "'{}' is not a four-digit year",
                s
            )));
        }
        // Four ASCII digits always fit in u16
        let value = trimmed
            .parse::<u16>()
            .map_err(|e| Error::InvalidInput(format!("'{}': {}", s, e)))?;
        Ok(Self(value))
    }
}

impl TryFrom<String> for Year {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Year> for String {
    fn from(year: Year) -> Self {
        year.to_string()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// External links for a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

/// One technology in the detail-page stack breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechStackEntry {
    pub name: String,
    pub description: String,
    /// Self-assessed proficiency, 0-100
    pub proficiency: u8,
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechStack {
    #[serde(default)]
    pub frontend: Vec<TechStackEntry>,
    #[serde(default)]
    pub backend: Vec<TechStackEntry>,
    #[serde(default)]
    pub database: Vec<TechStackEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devops: Option<Vec<TechStackEntry>>,
}

impl TechStack {
    /// Iterate every entry across all layers
    pub fn entries(&self) -> impl Iterator<Item = &TechStackEntry> {
        self.frontend
            .iter()
            .chain(self.backend.iter())
            .chain(self.database.iter())
            .chain(self.devops.iter().flatten())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Architecture {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub diagram: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screenshot {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectStat {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub description: String,
}

/// A portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Unique identifier, also the URL slug
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub short_description: String,
    /// Tools and frameworks in display order
    #[serde(default)]
    pub technologies: Vec<String>,
    pub role: String,
    pub status: ProjectStatus,
    pub featured: bool,
    pub spotlight: bool,
    pub year: Year,
    pub color_accent: ColorAccent,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
    #[serde(default)]
    pub problem_statement: String,
    #[serde(default)]
    pub solution_approach: String,
    #[serde(default)]
    pub impact_results: String,
    #[serde(default)]
    pub tech_stack: TechStack,
    #[serde(default)]
    pub architecture: Architecture,
    #[serde(default)]
    pub screenshots: Vec<Screenshot>,
    #[serde(default)]
    pub key_contributions: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub learnings: Vec<String>,
    #[serde(default)]
    pub future_improvements: Vec<String>,
    #[serde(default)]
    pub stats: Vec<ProjectStat>,
}

impl ProjectRecord {
    /// Create a minimal record; display payloads start empty
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        year: Year,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: String::new(),
            description: String::new(),
            short_description: String::new(),
            technologies: Vec::new(),
            role: String::new(),
            status: ProjectStatus::Completed,
            featured: false,
            spotlight: false,
            year,
            color_accent: ColorAccent::Cyan,
            category: category.into(),
            tags: Vec::new(),
            image: None,
            features: Vec::new(),
            links: ProjectLinks::default(),
            problem_statement: String::new(),
            solution_approach: String::new(),
            impact_results: String::new(),
            tech_stack: TechStack::default(),
            architecture: Architecture::default(),
            screenshots: Vec::new(),
            key_contributions: Vec::new(),
            challenges: Vec::new(),
            learnings: Vec::new(),
            future_improvements: Vec::new(),
            stats: Vec::new(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = technologies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn with_spotlight(mut self, spotlight: bool) -> Self {
        self.spotlight = spotlight;
        self
    }

    pub fn with_color_accent(mut self, accent: ColorAccent) -> Self {
        self.color_accent = accent;
        self
    }

    /// Check structural invariants that serde cannot express
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| Error::InvalidRecord {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.id.trim().is_empty() {
            return Err(invalid("id must not be empty"));
        }
        if self.title.trim().is_empty() {
            return Err(invalid("title must not be empty"));
        }
        if self.category.trim().is_empty() {
            return Err(invalid("category must not be empty"));
        }
        if let Some(entry) = self.tech_stack.entries().find(|e| e.proficiency > 100) {
            return Err(invalid(&format!(
                "proficiency {} for '{}' exceeds 100",
                entry.proficiency, entry.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(s: &str) -> Year {
        s.parse().unwrap()
    }

    #[test]
    fn test_status_round_trip_strings() {
        for status in ProjectStatus::all() {
            assert_eq!(ProjectStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ProjectStatus::parse("In-Development"), Some(ProjectStatus::InDevelopment));
        assert_eq!(ProjectStatus::parse("shipped"), None);
    }

    #[test]
    fn test_status_serde_uses_kebab_case() {
        let json = serde_json::to_string(&ProjectStatus::InDevelopment).unwrap();
        assert_eq!(json, "\"in-development\"");
    }

    #[test]
    fn test_year_parsing() {
        assert_eq!(year("2024").value(), 2024);
        assert_eq!(year(" 2023 ").value(), 2023);
        assert!("24".parse::<Year>().is_err());
        assert!("20x4".parse::<Year>().is_err());
        assert!("-202".parse::<Year>().is_err());
        assert!(Year::new(10_000).is_err());
        assert_eq!(Year::new(7).unwrap().to_string(), "0007");
    }

    #[test]
    fn test_year_serializes_as_string() {
        let json = serde_json::to_string(&year("2024")).unwrap();
        assert_eq!(json, "\"2024\"");
        assert!(serde_json::from_str::<Year>("\"next year\"").is_err());
    }

    #[test]
    fn test_record_deserializes_minimal_camel_case() {
        let json = r#"{
            "id": "uptime-monitor",
            "title": "Uptime Monitor",
            "subtitle": "Service Availability",
            "description": "Tracks uptime",
            "shortDescription": "Monitoring",
            "technologies": ["Node.js", "PostgreSQL"],
            "role": "Full-Stack Developer",
            "status": "completed",
            "featured": false,
            "spotlight": false,
            "year": "2024",
            "colorAccent": "magenta",
            "category": "monitoring"
        }"#;

        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.short_description, "Monitoring");
        assert_eq!(record.color_accent, ColorAccent::Magenta);
        assert!(record.tags.is_empty());
        assert!(record.screenshots.is_empty());
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_unknown_color_accent_is_rejected() {
        let json = r#"{
            "id": "x", "title": "X", "subtitle": "", "description": "",
            "shortDescription": "", "role": "", "status": "completed",
            "featured": false, "spotlight": false, "year": "2024",
            "colorAccent": "orange", "category": "web"
        }"#;
        let err = serde_json::from_str::<ProjectRecord>(json).unwrap_err();
        assert!(err.to_string().contains("orange"));
    }

    #[test]
    fn test_validate_rejects_empty_title_and_bad_proficiency() {
        let record = ProjectRecord::new("x", " ", "web", year("2024"));
        assert!(matches!(record.validate(), Err(Error::InvalidRecord { .. })));

        let mut record = ProjectRecord::new("x", "X", "web", year("2024"));
        record.tech_stack.backend.push(TechStackEntry {
            name: "Rust".to_string(),
            description: String::new(),
            proficiency: 101,
            role: String::new(),
        });
        let err = record.validate().unwrap_err();
        assert!(err.to_string().contains("Rust"));
    }

    #[test]
    fn test_tech_stack_entries_include_devops() {
        let entry = |name: &str| TechStackEntry {
            name: name.to_string(),
            description: String::new(),
            proficiency: 80,
            role: String::new(),
        };
        let stack = TechStack {
            frontend: vec![entry("React")],
            backend: vec![entry("Node.js")],
            database: vec![],
            devops: Some(vec![entry("Docker")]),
        };
        let names: Vec<_> = stack.entries().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["React", "Node.js", "Docker"]);
    }
}
