//! Detail-page metadata

use serde::Serialize;

use super::entity::ProjectRecord;

/// Site-wide values used when building page metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteInfo {
    pub name: String,
    /// Base URL without a trailing slash
    pub base_url: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Portfolio".to_string(),
            base_url: "https://yourportfolio.com".to_string(),
        }
    }
}

/// Title, description and link data for a project detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_image: Option<String>,
}

impl PageMetadata {
    pub fn for_project(project: &ProjectRecord, site: &SiteInfo) -> Self {
        let keywords = project
            .technologies
            .iter()
            .chain(project.tags.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            title: format!("{} - {} | {}", project.title, project.subtitle, site.name),
            description: project.description.clone(),
            keywords: Some(keywords),
            canonical_url: Some(format!(
                "{}/projects/{}",
                site.base_url.trim_end_matches('/'),
                project.id
            )),
            preview_image: Some(format!("/screenshots/{}-preview.jpg", project.id)),
        }
    }

    pub fn not_found(site: &SiteInfo) -> Self {
        Self {
            title: format!("Project Not Found - {}", site.name),
            description: "The requested project could not be found.".to_string(),
            keywords: None,
            canonical_url: None,
            preview_image: None,
        }
    }

    /// Metadata for an optional lookup result
    pub fn resolve(project: Option<&ProjectRecord>, site: &SiteInfo) -> Self {
        match project {
            Some(project) => Self::for_project(project, site),
            None => Self::not_found(site),
        }
    }
}
