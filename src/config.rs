//! Runtime configuration
//!
//! Loaded from `garden.yaml`. Every field has a default so a missing file
//! (the common case for local serving) just means defaults everywhere.
//! CLI arguments and environment variables override whatever is loaded;
//! that precedence is applied by the binary, not here.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
pub struct GardenConfig {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub paths: PathsSection,

    /// Plaintext workshop password. A static portfolio has no real secret
    /// to protect; do not copy this pattern anywhere one exists.
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
}

impl Default for GardenConfig {
    fn default() -> Self {
        GardenConfig {
            server: ServerSection::default(),
            paths: PathsSection::default(),
            admin_password: default_admin_password(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_bind")]
    pub bind: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        ServerSection {
            bind: default_bind(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PathsSection {
    /// Static site directory served at /
    pub site_root: Option<PathBuf>,

    /// Item document the store is seeded from
    pub data_file: Option<PathBuf>,
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_admin_password() -> String {
    "admin123".to_string()
}

impl GardenConfig {
    /// Load configuration from a YAML file, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            info!("Config file not found: {}, using defaults", path.display());
            return Ok(GardenConfig::default());
        }

        info!("Loading config from: {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        let config: GardenConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GardenConfig::default();
        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert_eq!(config.server.log_level, "info");
        assert!(config.paths.site_root.is_none());
        assert!(!config.admin_password.is_empty());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "server:\n  bind: \"0.0.0.0:9000\"\n";
        let config: GardenConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.server.log_level, "info");
        assert_eq!(config.admin_password, "admin123");
    }
}
