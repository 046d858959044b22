//! geoipdat: reader for the legacy MaxMind GeoIP binary database format
//!
//! Resolves IPv4 addresses against Country, Region and City `.dat` files
//! without loading them into memory structures. Files are memory-mapped and
//! decoded on demand; every result is an owned copy.
//!
//! ```no_run
//! use geoipdat::database::GeoIpDatabase;
//!
//! let db = GeoIpDatabase::open("/usr/share/GeoIP/GeoIPCity.dat")?;
//! if let Some(location) = db.lookup("74.125.67.100")? {
//!     println!("{}", location);
//!     for (name, value) in location.fields() {
//!         println!("{}: {:?}", name, value);
//!     }
//! }
//! # Ok::<(), geoipdat::error::GeoIpError>(())
//! ```

pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod output;
pub mod tables;
pub mod utils;

// Re-export common types
pub use database::{DatabaseType, GeoIpDatabase, OpenOptions, ResolvedLocation};
pub use error::{GeoIpError, LookupError, OpenError, Result};
