//! Error types for geoipdat
//!
//! Opening a database and looking up an address fail in different ways, so each
//! has its own enum. `GeoIpError` wraps both for the command-line front end.

use crate::database::DatabaseType;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while opening a database file
#[derive(Error, Debug)]
pub enum OpenError {
    /// Database file does not exist
    #[error("Database not found: {}", .0.display())]
    NotFound(PathBuf),

    /// File exists but could not be read or mapped
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structure marker missing or edition byte unrecognized
    #[error("Invalid database format: {0}")]
    InvalidFormat(String),

    /// Edition is known but its records cannot be decoded
    #[error("Unsupported database edition: {0}")]
    UnsupportedEdition(DatabaseType),

    /// None of the preferred editions could be opened
    #[error("No database available, tried: {}", format_tried(.0))]
    NoDatabase(Vec<PathBuf>),
}

/// Errors raised while resolving an address, both mean the file is damaged
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The trie walk left the node area or never reached a terminal
    #[error("Corrupt search tree at node {node} while resolving {ip}")]
    CorruptTree { ip: std::net::Ipv4Addr, node: u32 },

    /// A record read fell outside the file
    #[error("Index out of bounds: offset={offset}, len={len}, size={size}")]
    OutOfBounds { offset: usize, len: usize, size: usize },
}

/// Main error type for the geoipdat binary
#[derive(Error, Debug)]
pub enum GeoIpError {
    #[error(transparent)]
    Open(#[from] OpenError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parse error: {0}")]
    YamlError(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for the geoipdat front end
pub type Result<T> = std::result::Result<T, GeoIpError>;

impl GeoIpError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        GeoIpError::ConfigError(msg.into())
    }
}

impl OpenError {
    pub(crate) fn invalid<S: Into<String>>(msg: S) -> Self {
        OpenError::InvalidFormat(msg.into())
    }
}

fn format_tried(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = LookupError::OutOfBounds { offset: 10, len: 3, size: 12 };
        assert_eq!(err.to_string(), "Index out of bounds: offset=10, len=3, size=12");
    }

    #[test]
    fn test_no_database_lists_paths() {
        let err = OpenError::NoDatabase(vec![PathBuf::from("/a/GeoIPCity.dat"), PathBuf::from("/a/GeoIP.dat")]);
        let msg = err.to_string();
        assert!(msg.contains("/a/GeoIPCity.dat, /a/GeoIP.dat"));
    }

    #[test]
    fn test_wraps_open_error() {
        let err: GeoIpError = OpenError::invalid("no marker").into();
        assert_eq!(err.to_string(), "Invalid database format: no marker");
    }
}
