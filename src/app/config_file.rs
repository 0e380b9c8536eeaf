//! Configuration file loading and parsing
//!
//! Loads configuration from `~/.config/savepoint/config.toml`

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Main configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// General settings
    pub general: GeneralConfig,
    /// Default library locations
    pub paths: PathsConfig,
}

/// General application settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Grid rows per page
    pub rows: usize,
    /// Grid columns per page
    pub cols: usize,
    /// Draw decoded title icons
    pub icons: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 6,
            icons: true,
        }
    }
}

/// Default save and backup locations
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Save library root; CLI positional argument overrides this
    pub saves_root: Option<PathBuf>,
    /// Backup root; defaults to `<saves_root>/.backups` when unset
    pub backup_root: Option<PathBuf>,
}

impl ConfigFile {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("savepoint").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is missing or
    /// unparseable
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| {
                if path.exists() {
                    fs::read_to_string(&path).ok()
                } else {
                    None
                }
            })
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Load configuration from a specific path (for testing)
    pub fn load_from(path: &PathBuf) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ConfigFile = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert_eq!(config.general.rows, 5);
        assert_eq!(config.general.cols, 6);
        assert!(config.general.icons);
        assert!(config.paths.saves_root.is_none());
        assert!(config.paths.backup_root.is_none());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
[general]
rows = 4
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();
        let config = ConfigFile::load_from(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.general.rows, 4);
        // Unspecified fields keep their defaults
        assert_eq!(config.general.cols, 6);
        assert!(config.general.icons);
    }

    #[test]
    fn test_parse_paths_section() {
        let toml_content = r#"
[paths]
saves_root = "/srv/saves"
backup_root = "/srv/backups"
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();
        let config = ConfigFile::load_from(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.paths.saves_root, Some(PathBuf::from("/srv/saves")));
        assert_eq!(config.paths.backup_root, Some(PathBuf::from("/srv/backups")));
    }

    #[test]
    fn test_invalid_toml_fails_load_from() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not [ valid toml").unwrap();
        assert!(ConfigFile::load_from(&file.path().to_path_buf()).is_err());
    }
}
