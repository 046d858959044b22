//! Path utilities for configuration and database files
//!
//! Handles XDG directory specifications and path resolution.

use crate::error::{GeoIpError, Result};
use std::env;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "geoipdat";

/// Get the geoipdat configuration directory
///
/// Priority:
/// 1. GEOIPDAT_CONFIG_HOME environment variable
/// 2. XDG_CONFIG_HOME/geoipdat
/// 3. ~/.config/geoipdat (fallback)
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(path) = env::var("GEOIPDAT_CONFIG_HOME") {
        return Ok(PathBuf::from(path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join(APP_DIR));
    }

    Err(GeoIpError::config("cannot determine configuration directory"))
}

/// Default directory searched for `GeoIP.dat`, `GeoIPRegion.dat` and `GeoIPCity.dat`
///
/// Priority:
/// 1. GEOIPDAT_DATA_DIR environment variable
/// 2. XDG_DATA_HOME/geoipdat
/// 3. /usr/share/GeoIP (fallback)
pub fn data_dir() -> PathBuf {
    if let Ok(path) = env::var("GEOIPDAT_DATA_DIR") {
        return expand_tilde(&path);
    }

    if let Some(data_dir) = dirs::data_dir() {
        return data_dir.join(APP_DIR);
    }

    PathBuf::from("/usr/share/GeoIP")
}

/// Get the path to the config file
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.yaml"))
}

/// Ensure directory exists, create if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .map_err(|e| GeoIpError::config(format!("failed to create {}: {}", path.display(), e)))?;
    }
    Ok(())
}

/// Expand tilde (~) in path
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_name() {
        let file = config_file().unwrap();
        assert_eq!(file.file_name().unwrap(), "config.yaml");
    }

    #[test]
    fn test_data_dir_is_absolute_or_overridden() {
        let dir = data_dir();
        assert!(!dir.as_os_str().is_empty());
    }

    #[test]
    fn test_expand_tilde() {
        let path = expand_tilde("~/test");
        assert!(!path.to_string_lossy().starts_with("~"));
        assert_eq!(expand_tilde("/var/lib/GeoIP"), PathBuf::from("/var/lib/GeoIP"));
    }

    #[test]
    fn test_ensure_dir_creates_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Second call is a no-op
        ensure_dir(&nested).unwrap();
    }
}
