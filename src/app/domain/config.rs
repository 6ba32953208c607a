use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::warn;

use super::testimonial::{Stat, Testimonial, default_stats, default_testimonials};
use crate::app::infrastructure::error::Result;

/// Static page content and tunables, read from `site.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_testimonials")]
    pub testimonials: Vec<Testimonial>,

    #[serde(default = "default_stats")]
    pub stats: Vec<Stat>,

    /// Delay before a submitted contact form clears itself
    #[serde(default = "default_contact_reset_ms")]
    pub contact_reset_ms: u64,

    /// Persisted store file; falls back to the per-user config directory
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
}

fn default_contact_reset_ms() -> u64 {
    3000
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            testimonials: default_testimonials(),
            stats: default_stats(),
            contact_reset_ms: default_contact_reset_ms(),
            storage_path: None,
        }
    }
}

impl SiteConfig {
    pub fn contact_reset_delay(&self) -> Duration {
        Duration::from_millis(self.contact_reset_ms)
    }

    /// Load config from disk, or use defaults if missing or unreadable
    pub fn load() -> Self {
        let config_path = Self::get_config_path();
        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %config_path.display(), "Failed to load site config: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("reelfolio");
        path.push("site.toml");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::error::AppError;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.testimonials.len(), 4);
        assert_eq!(config.contact_reset_ms, 3000);
        assert_eq!(config.contact_reset_delay(), Duration::from_secs(3));
        assert!(config.storage_path.is_none());
    }

    #[test]
    fn test_partial_config() {
        let config: SiteConfig = toml::from_str("contact_reset_ms = 500").unwrap();
        assert_eq!(config.contact_reset_ms, 500);
        assert_eq!(config.testimonials, default_testimonials());
    }

    #[test]
    fn test_custom_testimonials() {
        let toml_src = r#"
            storage_path = "/tmp/reelfolio.json"

            [[testimonials]]
            name = "Ana"
            role = "Producer"
            company = "North Films"
            text = "Sharp edits."
            rating = 4
        "#;
        let config: SiteConfig = toml::from_str(toml_src).unwrap();
        assert_eq!(config.testimonials.len(), 1);
        assert_eq!(config.testimonials[0].rating.stars(), 4);
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/reelfolio.json")));
    }

    #[test]
    fn test_invalid_rating_rejected() {
        let toml_src = r#"
            [[testimonials]]
            name = "Ana"
            role = "Producer"
            company = "North Films"
            text = "Sharp edits."
            rating = 7
        "#;
        assert!(toml::from_str::<SiteConfig>(toml_src).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "testimonials = []\n").unwrap();

        let config = SiteConfig::load_from(&path).unwrap();
        assert!(config.testimonials.is_empty());
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SiteConfig::load_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_load_from_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "contact_reset_ms = \"soon\"").unwrap();
        assert!(matches!(SiteConfig::load_from(&path), Err(AppError::Toml(_))));
    }
}
