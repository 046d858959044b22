//! Database module for geoipdat
//!
//! Decodes legacy GeoIP `.dat` files: Country, Region and City editions.
//!
//! # Module Organization
//!
//! - `types`: Editions, open options and lookup results
//! - `reader`: Bounds-checked access to the file bytes
//! - `header`: Structure info and version string
//! - `tree`: Search tree walk
//! - `record`: Region and city decoding
//! - `host`: Query parsing and host name resolution
//! - `fields`: Named field access on results
//! - `database`: The `GeoIpDatabase` handle

pub mod types;
pub mod reader;
pub mod header;
pub mod tree;
pub mod record;
pub mod host;
pub mod fields;
pub mod database;

#[cfg(test)]
pub(crate) mod testing;

// Re-export core types for convenience
pub use types::{CacheMode, Charset, CityRecord, CountryId, DatabaseType, RegionRecord, ResolvedLocation};
pub use database::{GeoIpDatabase, OpenOptions};
pub use fields::FieldValue;
pub use host::{HostResolver, SystemResolver};
pub use tree::TreeHit;
