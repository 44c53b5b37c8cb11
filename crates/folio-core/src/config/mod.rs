//! Configuration management with file persistence

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::project::metadata::SiteInfo;
use crate::domain::project::related::RankingWeights;
use crate::domain::project::sort::SortStrategy;

/// Folio configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub ranking: RankingWeights,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog to load instead of the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub default_sort: SortStrategy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let site = SiteInfo::default();
        Self {
            name: site.name,
            base_url: site.base_url,
        }
    }
}

impl SiteConfig {
    pub fn to_site_info(&self) -> SiteInfo {
        SiteInfo {
            name: self.name.clone(),
            base_url: self.base_url.trim_end_matches('/').to_string(),
        }
    }
}

const KEYS: [&str; 8] = [
    "catalog.path",
    "site.name",
    "site.base_url",
    "listing.default_sort",
    "ranking.limit",
    "ranking.min_score",
    "ranking.category_bonus",
    "ranking.spotlight_bonus",
];

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let dir = if let Ok(custom_dir) = env::var("FOLIO_CONFIG_DIR") {
            PathBuf::from(custom_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| anyhow!("Could not determine config directory"))?
                .join("folio")
        };
        Ok(dir)
    }

    /// Get the config file path
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default location, or defaults if absent
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, or defaults if absent
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).with_context(|| {
                format!("Failed to create config directory: {}", dir.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        let url = &self.site.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(anyhow!(
                "site.base_url must start with http:// or https:// (got '{}')",
                url
            ));
        }
        if self.site.name.trim().is_empty() {
            return Err(anyhow!("site.name must not be empty"));
        }

        let ranking = &self.ranking;
        if ranking.limit == 0 {
            return Err(anyhow!("ranking.limit must be at least 1"));
        }
        for (key, value) in [
            ("ranking.min_score", ranking.min_score),
            ("ranking.category_bonus", ranking.category_bonus),
            ("ranking.spotlight_bonus", ranking.spotlight_bonus),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(anyhow!("{} must be a non-negative number", key));
            }
        }
        Ok(())
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> anyhow::Result<String> {
        match key {
            "catalog.path" => Ok(self
                .catalog
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())),
            "site.name" => Ok(self.site.name.clone()),
            "site.base_url" => Ok(self.site.base_url.clone()),
            "listing.default_sort" => Ok(self.listing.default_sort.to_string()),
            "ranking.limit" => Ok(self.ranking.limit.to_string()),
            "ranking.min_score" => Ok(self.ranking.min_score.to_string()),
            "ranking.category_bonus" => Ok(self.ranking.category_bonus.to_string()),
            "ranking.spotlight_bonus" => Ok(self.ranking.spotlight_bonus.to_string()),
            _ => Err(anyhow!(
                "Unknown configuration key: {}. Use `folio config list` to see available keys.",
                key
            )),
        }
    }

    /// Set a configuration value by key
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let parse_weight = |value: &str| -> anyhow::Result<f64> {
            let weight: f64 = value
                .parse()
                .with_context(|| format!("Invalid {} value: {}", key, value))?;
            if !weight.is_finite() || weight < 0.0 {
                return Err(anyhow!("{} must be a non-negative number", key));
            }
            Ok(weight)
        };

        match key {
            "catalog.path" => {
                self.catalog.path = match value.trim() {
                    "" | "builtin" | "built-in" => None,
                    path => Some(PathBuf::from(path)),
                };
            }
            "site.name" => {
                if value.trim().is_empty() {
                    return Err(anyhow!("site.name must not be empty"));
                }
                self.site.name = value.to_string();
            }
            "site.base_url" => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(anyhow!("site.base_url must start with http:// or https://"));
                }
                self.site.base_url = value.trim_end_matches('/').to_string();
            }
            "listing.default_sort" => {
                self.listing.default_sort = value.parse().map_err(|e| anyhow!("{}", e))?;
            }
            "ranking.limit" => {
                let limit: usize = value
                    .parse()
                    .with_context(|| format!("Invalid ranking.limit value: {}", value))?;
                if limit == 0 {
                    return Err(anyhow!("ranking.limit must be at least 1"));
                }
                self.ranking.limit = limit;
            }
            "ranking.min_score" => self.ranking.min_score = parse_weight(value)?,
            "ranking.category_bonus" => self.ranking.category_bonus = parse_weight(value)?,
            "ranking.spotlight_bonus" => self.ranking.spotlight_bonus = parse_weight(value)?,
            _ => {
                return Err(anyhow!(
                    "Unknown configuration key: {}. Use `folio config list` to see available keys.",
                    key
                ));
            }
        }
        Ok(())
    }

    /// List all configuration keys and their values
    pub fn list(&self) -> anyhow::Result<Vec<(String, String)>> {
        KEYS.into_iter()
            .map(|key| {
                let value = self.get(key)?;
                Ok((key.to_string(), value))
            })
            .collect()
    }

    /// Reset configuration to defaults
    pub fn reset() -> anyhow::Result<()> {
        let path = Self::config_path()?;
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove config file: {}", path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.catalog.path.is_none());
        assert_eq!(config.site.name, "Portfolio");
        assert_eq!(config.site.base_url, "https://yourportfolio.com");
        assert_eq!(config.listing.default_sort, SortStrategy::Featured);
        assert_eq!(config.ranking, RankingWeights::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut config = Config::default();
        config.set("ranking.limit", "5").unwrap();
        config.set("listing.default_sort", "alpha").unwrap();
        config.set("site.base_url", "https://me.dev/").unwrap();
        config.set("catalog.path", "/tmp/projects.json").unwrap();

        assert_eq!(config.get("ranking.limit").unwrap(), "5");
        assert_eq!(config.get("listing.default_sort").unwrap(), "alpha");
        assert_eq!(config.get("site.base_url").unwrap(), "https://me.dev");
        assert_eq!(config.get("catalog.path").unwrap(), "/tmp/projects.json");

        config.set("catalog.path", "builtin").unwrap();
        assert_eq!(config.get("catalog.path").unwrap(), "(built-in)");
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let mut config = Config::default();
        assert!(config.set("ranking.limit", "0").is_err());
        assert!(config.set("ranking.limit", "many").is_err());
        assert!(config.set("ranking.min_score", "-0.5").is_err());
        assert!(config.set("ranking.spotlight_bonus", "NaN").is_err());
        assert!(config.set("listing.default_sort", "random").is_err());
        assert!(config.set("site.base_url", "ftp://nope").is_err());
        assert!(config.set("site.name", "  ").is_err());
        assert!(config.set("unknown.key", "x").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_list_covers_every_key() {
        let listed = Config::default().list().unwrap();
        assert_eq!(listed.len(), KEYS.len());
        assert!(listed.iter().any(|(k, v)| k == "ranking.category_bonus" && v == "0.2"));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("site.name", "Dev Folio").unwrap();
        config.set("ranking.spotlight_bonus", "0.5").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ranking]\nlimit = 2\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.ranking.limit, 2);
        assert_eq!(loaded.ranking.spotlight_bonus, 0.3);
        assert_eq!(loaded.site, SiteConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[site]\nname = \"X\"\nbase_url = \"localhost\"\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
