//! Configuration module for geoipdat
//!
//! Handles loading and managing configuration from YAML files and environment variables.

use crate::database::{CacheMode, Charset, DatabaseType, OpenOptions};
use crate::error::{GeoIpError, Result};
use crate::utils::path;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub global: GlobalConfig,
}

/// Database configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Explicit database file, bypasses the edition search
    #[serde(default)]
    pub path: Option<String>,

    /// Directory holding GeoIP.dat, GeoIPRegion.dat and GeoIPCity.dat
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Editions to try in order (city, region, country)
    #[serde(default = "default_editions")]
    pub editions: Vec<String>,

    #[serde(default)]
    pub cache_mode: CacheMode,

    /// Encoding of strings stored in city records
    #[serde(default)]
    pub charset: Charset,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub enable_colors: bool,

    /// Output in JSON format
    #[serde(default)]
    pub json: bool,
}

/// Global configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Verbose logging
    #[serde(default)]
    pub verbose: bool,

    /// File the configuration was loaded from
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

// Default value functions
fn default_editions() -> Vec<String> {
    vec!["city".to_string(), "region".to_string(), "country".to_string()]
}

fn default_true() -> bool {
    true
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: None,
            data_dir: None,
            editions: default_editions(),
            cache_mode: CacheMode::default(),
            charset: Charset::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            enable_colors: true,
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        let config_file = path::config_file()?;
        let mut config = Self::load_from(&config_file)?;

        // Override with environment variables
        config.apply_env();

        Ok(config)
    }

    /// Load a config file, writing the defaults there first if it does not exist
    pub fn load_from(config_file: &Path) -> Result<Self> {
        let mut config: Self = if config_file.exists() {
            let content = fs::read_to_string(config_file)
                .map_err(|e| GeoIpError::config(format!("Failed to read config file: {}", e)))?;

            serde_yaml::from_str(&content)
                .map_err(|e| GeoIpError::YamlError(format!("Failed to parse config file: {}", e)))?
        } else {
            // Create default config
            let config = Self::default();
            if let Some(dir) = config_file.parent() {
                path::ensure_dir(dir)?;
            }
            config.save(config_file)?;
            config
        };

        config.global.config_path = Some(config_file.to_path_buf());
        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| env::var(key).ok());
    }

    fn apply_env_from<F: Fn(&str) -> Option<String>>(&mut self, var: F) {
        if let Some(val) = var("GEOIPDAT_DB") {
            self.database.path = Some(val);
        }
        if let Some(val) = var("GEOIPDAT_DATA_DIR") {
            self.database.data_dir = Some(val);
        }
        if let Some(val) = var("GEOIPDAT_EDITIONS") {
            self.database.editions = val
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(val) = var("GEOIPDAT_CHARSET") {
            match val.parse() {
                Ok(charset) => self.database.charset = charset,
                Err(e) => log::warn!("Ignoring GEOIPDAT_CHARSET: {}", e),
            }
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| GeoIpError::YamlError(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, yaml).map_err(|e| GeoIpError::config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Explicit database file, if one is configured
    pub fn database_path(&self) -> Option<PathBuf> {
        self.database.path.as_deref().map(path::expand_tilde)
    }

    /// Preferred editions in search order
    pub fn preferred_editions(&self) -> Result<Vec<DatabaseType>> {
        self.database
            .editions
            .iter()
            .map(|name| {
                DatabaseType::from_name(name).ok_or_else(|| {
                    GeoIpError::config(format!("invalid edition '{}' (city, country or region)", name))
                })
            })
            .collect()
    }

    /// Options for opening a database
    pub fn open_options(&self) -> OpenOptions {
        OpenOptions {
            cache_mode: self.database.cache_mode,
            charset: self.database.charset,
            data_dir: self.database.data_dir.as_deref().map(path::expand_tilde),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.database.editions, vec!["city", "region", "country"]);
        assert_eq!(config.database.charset, Charset::Iso8859_1);
        assert!(config.output.enable_colors);
        assert!(!config.output.json);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("database"));
        assert!(yaml.contains("output"));
        assert!(yaml.contains("memory_map"));
        assert!(yaml.contains("iso-8859-1"));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "database:\n  charset: utf8\n  cache_mode: memory\n";
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.database.charset, Charset::Utf8);
        assert_eq!(config.database.cache_mode, CacheMode::Memory);
        assert_eq!(config.database.editions, default_editions());
        assert!(config.output.enable_colors);
        assert!(!config.global.verbose);

        let config: AppConfig = serde_yaml::from_str("global:\n  verbose: true\n").unwrap();
        assert!(config.global.verbose);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested").join("config.yaml");

        let created = AppConfig::load_from(&file).unwrap();
        assert!(file.exists());
        assert_eq!(created.global.config_path.as_deref(), Some(file.as_path()));

        let mut changed = created.clone();
        changed.output.json = true;
        changed.database.path = Some("/srv/GeoIPCity.dat".to_string());
        changed.save(&file).unwrap();

        let reloaded = AppConfig::load_from(&file).unwrap();
        assert_eq!(reloaded, changed);
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.yaml");
        fs::write(&file, "database: [unterminated").unwrap();
        assert!(matches!(AppConfig::load_from(&file), Err(GeoIpError::YamlError(_))));
    }

    #[test]
    fn test_env_overrides() {
        let vars = HashMap::from([
            ("GEOIPDAT_DB", "/tmp/GeoIP.dat"),
            ("GEOIPDAT_EDITIONS", "country, region"),
            ("GEOIPDAT_CHARSET", "utf-8"),
        ]);
        let mut config = AppConfig::default();
        config.apply_env_from(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.database_path(), Some(PathBuf::from("/tmp/GeoIP.dat")));
        assert_eq!(
            config.preferred_editions().unwrap(),
            vec![DatabaseType::Country, DatabaseType::RegionRev1]
        );
        assert_eq!(config.database.charset, Charset::Utf8);
        assert_eq!(config.database.data_dir, None);
    }

    #[test]
    fn test_invalid_edition_name() {
        let mut config = AppConfig::default();
        config.database.editions = vec!["city".to_string(), "isp".to_string()];
        assert!(matches!(config.preferred_editions(), Err(GeoIpError::ConfigError(_))));
    }

    #[test]
    fn test_open_options() {
        let mut config = AppConfig::default();
        config.database.data_dir = Some("/var/lib/GeoIP".to_string());
        config.database.cache_mode = CacheMode::Memory;
        let options = config.open_options();
        assert_eq!(options.data_dir, Some(PathBuf::from("/var/lib/GeoIP")));
        assert_eq!(options.cache_mode, CacheMode::Memory);
    }
}
