//! Error types for Folio

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using Folio's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Folio error types with helpful messages and suggestions
#[derive(Error, Debug)]
pub enum Error {
    // Lookup errors (E001-E099)
    #[error("Project '{0}' not found. Run `folio projects list` to see all projects.")]
    ProjectNotFound(String),

    // Catalog errors (E100-E199)
    #[error("Duplicate project id '{0}' in catalog. Project ids must be unique.")]
    DuplicateProjectId(String),

    #[error("Invalid project record '{id}': {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("Invalid year '{year}' for project '{id}'. Years must be four-digit numbers.")]
    InvalidYear { id: String, year: String },

    #[error("Failed to parse catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("Failed to read catalog file {}: {source}", .path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Config errors (E600-E699)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // Input errors (E800-E899)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::ProjectNotFound(_) => "E001",
            Self::DuplicateProjectId(_) => "E100",
            Self::InvalidRecord { .. } => "E101",
            Self::InvalidYear { .. } => "E102",
            Self::CatalogParse(_) => "E103",
            Self::CatalogRead { .. } => "E104",
            Self::ConfigError(_) => "E600",
            Self::InvalidInput(_) => "E800",
        }
    }

    /// Get suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::ProjectNotFound(_) => Some("folio projects list".to_string()),
            Self::DuplicateProjectId(_)
            | Self::InvalidRecord { .. }
            | Self::InvalidYear { .. }
            | Self::CatalogParse(_) => Some("folio validate <catalog.json>".to_string()),
            Self::ConfigError(_) => Some("folio config list".to_string()),
            Self::CatalogRead { .. } => {
                Some("folio config set catalog.path builtin".to_string())
            }
            Self::InvalidInput(_) => Some("folio filters".to_string()),
        }
    }
}
