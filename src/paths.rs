//! System paths for garden.rs
//!
//! Platform-appropriate locations for the config file, the item document
//! and the static site directory. Follows XDG Base Directory conventions
//! on Linux and the platform equivalents on macOS and Windows.
//!
//! Resolution precedence, applied by the binary:
//! CLI arguments > environment variables > config file > these defaults.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const APP_QUALIFIER: &str = "dev";
const APP_ORGANIZATION: &str = "szymonk";
const APP_NAME: &str = "garden";

#[derive(Debug, Clone)]
pub struct GardenPaths {
    /// Configuration directory
    pub config_dir: PathBuf,

    /// Item document the store is seeded from
    pub data_file: PathBuf,

    /// Static site directory served at /
    pub site_root: PathBuf,
}

impl GardenPaths {
    /// Paths using system defaults
    pub fn new() -> Result<Self> {
        let project_dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .context("Failed to determine system directories")?;

        let config_dir = project_dirs.config_dir().to_path_buf();
        let data_dir = project_dirs.data_dir().to_path_buf();

        Ok(GardenPaths {
            config_dir,
            data_file: data_dir.join("data.json"),
            site_root: data_dir.join("site"),
        })
    }

    /// Everything rooted under one directory (tests, --current-dir style
    /// workflows)
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        GardenPaths {
            config_dir: root.join("config"),
            data_file: root.join("data.json"),
            site_root: root.join("site"),
        }
    }

    /// Default config file location
    pub fn default_config_file(&self) -> PathBuf {
        self.config_dir.join("garden.yaml")
    }

    /// Create the directories the paths point into
    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)
            .with_context(|| format!("Failed to create {}", self.config_dir.display()))?;
        if let Some(parent) = self.data_file.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::create_dir_all(&self.site_root)
            .with_context(|| format!("Failed to create {}", self.site_root.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_system_paths() {
        let paths = GardenPaths::new().expect("Should create system paths");

        assert!(!paths.config_dir.as_os_str().is_empty());
        assert!(!paths.data_file.as_os_str().is_empty());
        assert!(!paths.site_root.as_os_str().is_empty());
    }

    #[test]
    fn test_custom_root() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GardenPaths::with_root(temp_dir.path());

        assert_eq!(paths.config_dir, temp_dir.path().join("config"));
        assert_eq!(paths.data_file, temp_dir.path().join("data.json"));
        assert_eq!(paths.site_root, temp_dir.path().join("site"));
        assert_eq!(
            paths.default_config_file(),
            temp_dir.path().join("config").join("garden.yaml")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GardenPaths::with_root(temp_dir.path());

        paths
            .ensure_directories()
            .expect("Should create directories");

        assert!(paths.config_dir.exists());
        assert!(paths.site_root.exists());
        assert!(paths.data_file.parent().unwrap().exists());
    }
}
