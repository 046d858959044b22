//! GeoIP database handle
//!
//! Opening a file parses its structure info once. Lookups walk the tree and
//! decode straight from the mapped bytes, returning owned results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::header::{self, DatabaseHeader};
use super::host::{self, HostResolver, SystemResolver};
use super::reader::Storage;
use super::record;
use super::tree::{self, TreeHit};
use crate::database::{CacheMode, Charset, CountryId, DatabaseType, ResolvedLocation};
use crate::error::{LookupError, OpenError};
use crate::utils::path;

/// Options applied when opening a database
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenOptions {
    pub cache_mode: CacheMode,
    /// Encoding of city record strings
    pub charset: Charset,
    /// Directory searched by `open_preferring`, the platform data dir when unset
    pub data_dir: Option<PathBuf>,
}

struct Inner {
    storage: Storage,
    header: DatabaseHeader,
    path: Option<PathBuf>,
}

/// Read-only handle over one database file
///
/// Clones share the underlying bytes. The file stays mapped until the last
/// clone is closed or dropped.
#[derive(Clone)]
pub struct GeoIpDatabase {
    inner: Arc<Inner>,
    charset: Charset,
    resolver: Arc<dyn HostResolver>,
}

impl GeoIpDatabase {
    /// Open a database with default options
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, OpenError> {
        Self::open_with(path, &OpenOptions::default())
    }

    pub fn open_with<P: AsRef<Path>>(path: P, options: &OpenOptions) -> Result<Self, OpenError> {
        let path = path.as_ref();
        log::debug!("Opening GeoIP database: {} ({:?})", path.display(), options.cache_mode);
        let storage = Storage::open(path, options.cache_mode)?;
        Self::from_storage(storage, Some(path.to_path_buf()), options)
    }

    /// Use an in-memory copy of a database file
    pub fn from_bytes(bytes: Vec<u8>, options: &OpenOptions) -> Result<Self, OpenError> {
        Self::from_storage(Storage::Owned(bytes), None, options)
    }

    fn from_storage(storage: Storage, path: Option<PathBuf>, options: &OpenOptions) -> Result<Self, OpenError> {
        let header = DatabaseHeader::parse(&storage)?;
        if !header.edition.is_supported() {
            return Err(OpenError::UnsupportedEdition(header.edition));
        }

        log::info!(
            "Loaded {} from {}: {} segments, {} bytes",
            header.edition,
            path.as_deref().map(|p| p.display().to_string()).unwrap_or_else(|| "memory".to_string()),
            header.segments,
            header.size
        );

        Ok(Self {
            inner: Arc::new(Inner { storage, header, path }),
            charset: options.charset,
            resolver: Arc::new(SystemResolver),
        })
    }

    /// Open the first edition whose default file can be opened
    ///
    /// Editions are tried in order from the configured data directory.
    pub fn open_preferring(editions: &[DatabaseType], options: &OpenOptions) -> Result<Self, OpenError> {
        let dir = options.data_dir.clone().unwrap_or_else(path::data_dir);
        let mut tried: Vec<PathBuf> = Vec::new();

        for edition in editions {
            let file = dir.join(edition.default_file_name());
            if tried.contains(&file) {
                continue;
            }

            match Self::open_with(&file, options) {
                Ok(db) => return Ok(db),
                Err(e) => {
                    log::warn!("Skipping {} ({}): {}", edition.description(), file.display(), e);
                    tried.push(file);
                }
            }
        }

        Err(OpenError::NoDatabase(tried))
    }

    /// Replace the host name resolver used by `lookup`
    pub fn with_resolver<R: HostResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    pub fn edition(&self) -> DatabaseType {
        self.inner.header.edition
    }

    pub fn segments(&self) -> u32 {
        self.inner.header.segments
    }

    pub fn record_length(&self) -> usize {
        self.inner.header.record_length
    }

    /// File size in bytes
    pub fn size(&self) -> usize {
        self.inner.header.size
    }

    /// Path the database was opened from, `None` for in-memory buffers
    pub fn path(&self) -> Option<&Path> {
        self.inner.path.as_deref()
    }

    /// Version string embedded near the end of the file
    pub fn database_info(&self) -> Option<String> {
        header::database_info(&self.inner.storage, &self.inner.header)
    }

    /// Look up an address or host name
    ///
    /// Names that do not resolve, IPv6 addresses and addresses without data
    /// all yield `Ok(None)`. Errors mean the file is damaged.
    pub fn lookup(&self, query: &str) -> Result<Option<ResolvedLocation>, LookupError> {
        match host::resolve_query(query, &*self.resolver) {
            Some(ip) => self.lookup_ipv4(ip),
            None => Ok(None),
        }
    }

    pub fn lookup_ipv4(&self, ip: Ipv4Addr) -> Result<Option<ResolvedLocation>, LookupError> {
        let hit = self.seek(ip)?;
        let header = &self.inner.header;

        let location = match header.edition {
            DatabaseType::Country | DatabaseType::LargeCountry => {
                CountryId::new(hit.value).map(ResolvedLocation::Country)
            }
            DatabaseType::RegionRev0 | DatabaseType::RegionRev1 => {
                record::decode_region(header.edition, hit.value).map(ResolvedLocation::Region)
            }
            DatabaseType::CityRev0 | DatabaseType::CityRev1 => {
                let reader = self.inner.storage.reader();
                record::decode_city(&reader, header, hit.value, self.charset)?.map(ResolvedLocation::City)
            }
            _ => None,
        };

        Ok(location)
    }

    /// Raw tree walk for `ip`
    pub fn seek(&self, ip: Ipv4Addr) -> Result<TreeHit, LookupError> {
        tree::seek(&self.inner.storage.reader(), &self.inner.header, ip)
    }

    /// Release this handle
    ///
    /// Other clones keep working. The file is unmapped once the last one is gone.
    pub fn close(self) {
        log::debug!(
            "Closing {} handle ({} remaining)",
            self.inner.header.edition,
            Arc::strong_count(&self.inner) - 1
        );
    }
}

impl fmt::Display for GeoIpDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.edition().description())
    }
}

impl fmt::Debug for GeoIpDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeoIpDatabase")
            .field("edition", &self.inner.header.edition)
            .field("segments", &self.inner.header.segments)
            .field("storage", &self.inner.storage)
            .field("path", &self.inner.path)
            .field("charset", &self.charset)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::testing::{CityFixture, DatFileBuilder, StaticResolver};
    use std::thread;

    const GOOGLE: &str = "74.125.67.100";

    fn country_db() -> DatFileBuilder {
        DatFileBuilder::new(DatabaseType::Country)
            .insert("74.125.0.0/16", 225)
            .insert("81.0.0.0/8", 56)
            .info("GEO-106 20240101 Build 1 Copyright (c) MaxMind Inc")
    }

    fn city_db() -> DatFileBuilder {
        DatFileBuilder::new(DatabaseType::CityRev1)
            .insert_city(
                "74.125.64.0/18",
                &CityFixture {
                    country_id: 225,
                    region: b"CA",
                    city: b"Mountain View",
                    postal_code: b"94043",
                    latitude: 37.4192,
                    longitude: -122.0574,
                    metro_area: Some(807_650),
                },
            )
            .insert_city(
                "81.0.0.0/8",
                &CityFixture {
                    country_id: 56,
                    region: b"16",
                    city: b"Berlin",
                    latitude: 52.5167,
                    longitude: 13.4,
                    ..Default::default()
                },
            )
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GeoIpDatabase::open(dir.path().join("GeoIP.dat")).unwrap_err();
        assert!(matches!(err, OpenError::NotFound(_)));
    }

    #[test]
    fn test_open_without_marker() {
        let err = GeoIpDatabase::from_bytes(vec![0u8; 512], &OpenOptions::default()).unwrap_err();
        assert!(matches!(err, OpenError::InvalidFormat(_)));

        let err = GeoIpDatabase::from_bytes(Vec::new(), &OpenOptions::default()).unwrap_err();
        assert!(matches!(err, OpenError::InvalidFormat(_)));
    }

    #[test]
    fn test_open_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = GeoIpDatabase::open(file.path()).unwrap_err();
        assert!(matches!(err, OpenError::InvalidFormat(_)));
    }

    #[test]
    fn test_unsupported_edition() {
        // Organization edition: decodable header, undecodable records
        let mut data = vec![0u8; 12];
        data.extend_from_slice(&[0xff, 0xff, 0xff, 5, 1, 0, 0]);
        let err = GeoIpDatabase::from_bytes(data, &OpenOptions::default()).unwrap_err();
        assert!(matches!(err, OpenError::UnsupportedEdition(DatabaseType::Org)));
    }

    #[test]
    fn test_country_lookup() {
        let file = country_db().write();
        let db = GeoIpDatabase::open(file.path()).unwrap();
        assert_eq!(db.edition(), DatabaseType::Country);
        assert_eq!(db.to_string(), "GeoIP Country Edition");

        let location = db.lookup(GOOGLE).unwrap().unwrap();
        assert_eq!(location.country_code(), Some("US"));
        assert_eq!(location.to_string(), "United States (US)");

        // Unassigned and private space
        assert_eq!(db.lookup("192.168.1.1").unwrap(), None);
        assert_eq!(db.lookup("10.0.0.1").unwrap(), None);
        assert_eq!(db.lookup("127.0.0.1").unwrap(), None);
    }

    #[test]
    fn test_city_lookup() {
        let file = city_db().write();
        let db = GeoIpDatabase::open(file.path()).unwrap();
        assert_eq!(db.to_string(), "GeoIP City Edition, Rev 1");

        match db.lookup(GOOGLE).unwrap() {
            Some(ResolvedLocation::City(city)) => {
                assert_eq!(city.city.as_deref(), Some("Mountain View"));
                assert_eq!(city.region_name(), Some("California"));
                assert_eq!(city.metro_code, Some(807));
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let berlin = db.lookup("81.10.20.30").unwrap().unwrap();
        assert_eq!(berlin.to_string(), "Berlin, Germany (DE)");
        assert_eq!(berlin.time_zone(), Some("Europe/Berlin"));

        assert_eq!(db.lookup("192.168.1.1").unwrap(), None);
    }

    #[test]
    fn test_city_and_country_agree() {
        let country_file = country_db().write();
        let city_file = city_db().write();
        let country = GeoIpDatabase::open(country_file.path()).unwrap();
        let city = GeoIpDatabase::open(city_file.path()).unwrap();

        for ip in [GOOGLE, "81.1.1.1"] {
            let a = country.lookup(ip).unwrap().unwrap();
            let b = city.lookup(ip).unwrap().unwrap();
            assert_eq!(a.country_code(), b.country_code(), "{}", ip);
        }
    }

    #[test]
    fn test_region_lookup() {
        let data = DatFileBuilder::new(DatabaseType::RegionRev1)
            // Q=16, C=2
            .insert("24.0.0.0/8", 677 + 16 * 26 + 2)
            .insert("81.0.0.0/8", 1353 + 56 * 360)
            .build();
        let db = GeoIpDatabase::from_bytes(data, &OpenOptions::default()).unwrap();

        let quebec = db.lookup("24.1.2.3").unwrap().unwrap();
        assert_eq!(quebec.to_string(), "QC, CA");
        assert_eq!(quebec.time_zone(), Some("America/Montreal"));

        let germany = db.lookup("81.1.2.3").unwrap().unwrap();
        assert_eq!(germany.country_code(), Some("DE"));
        assert_eq!(db.lookup("8.8.8.8").unwrap(), None);
    }

    #[test]
    fn test_corrupt_record_pointer() {
        let data = DatFileBuilder::new(DatabaseType::CityRev1).insert("10.0.0.0/8", 1 << 20).build();
        let db = GeoIpDatabase::from_bytes(data, &OpenOptions::default()).unwrap();
        assert!(matches!(db.lookup("10.1.1.1"), Err(LookupError::OutOfBounds { .. })));
        assert_eq!(db.lookup("11.1.1.1").unwrap(), None);
    }

    #[test]
    fn test_cache_modes_agree() {
        let file = city_db().write();
        let mapped = GeoIpDatabase::open(file.path()).unwrap();
        let memory = GeoIpDatabase::open_with(
            file.path(),
            &OpenOptions { cache_mode: CacheMode::Memory, ..Default::default() },
        )
        .unwrap();
        assert_eq!(mapped.lookup(GOOGLE).unwrap(), memory.lookup(GOOGLE).unwrap());
    }

    #[test]
    fn test_host_name_and_ipv6_queries() {
        let data = country_db().build();
        let db = GeoIpDatabase::from_bytes(data, &OpenOptions::default())
            .unwrap()
            .with_resolver(StaticResolver::new(&[("www.google.com", GOOGLE.parse().unwrap())]));

        let location = db.lookup("www.google.com").unwrap().unwrap();
        assert_eq!(location.country_code(), Some("US"));
        assert_eq!(db.lookup("unknown.example").unwrap(), None);
        assert_eq!(db.lookup("2001:4860::1").unwrap(), None);
    }

    #[test]
    fn test_results_survive_close() {
        let file = city_db().write();
        let db = GeoIpDatabase::open(file.path()).unwrap();
        let other = db.clone();

        let before = db.lookup(GOOGLE).unwrap();
        db.close();

        // The clone still holds the mapping
        assert_eq!(other.lookup(GOOGLE).unwrap(), before);
        other.close();
        assert!(before.is_some_and(|l| l.to_string() == "Mountain View, United States (US)"));
    }

    #[test]
    fn test_concurrent_lookups() {
        let db = GeoIpDatabase::from_bytes(city_db().build(), &OpenOptions::default()).unwrap();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let db = db.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        assert!(db.lookup(GOOGLE).unwrap().is_some());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn test_database_info() {
        let db = GeoIpDatabase::from_bytes(country_db().build(), &OpenOptions::default()).unwrap();
        assert_eq!(
            db.database_info().as_deref(),
            Some("GEO-106 20240101 Build 1 Copyright (c) MaxMind Inc")
        );
    }

    #[test]
    fn test_seek_reports_network() {
        let db = GeoIpDatabase::from_bytes(country_db().build(), &OpenOptions::default()).unwrap();
        let hit = db.seek(GOOGLE.parse().unwrap()).unwrap();
        assert_eq!(hit.value, 225);
        assert_eq!(hit.network().to_string(), "74.125.0.0/16");
    }

    #[test]
    fn test_open_preferring() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("GeoIP.dat"), country_db().build()).unwrap();
        let options = OpenOptions { data_dir: Some(dir.path().to_path_buf()), ..Default::default() };

        let db = GeoIpDatabase::open_preferring(&[DatabaseType::CityRev1, DatabaseType::Country], &options).unwrap();
        assert_eq!(db.edition(), DatabaseType::Country);
        assert_eq!(db.path(), Some(dir.path().join("GeoIP.dat").as_path()));

        let err = GeoIpDatabase::open_preferring(&[DatabaseType::CityRev1, DatabaseType::RegionRev1], &options)
            .unwrap_err();
        match err {
            OpenError::NoDatabase(tried) => {
                assert_eq!(tried, vec![dir.path().join("GeoIPCity.dat"), dir.path().join("GeoIPRegion.dat")]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeoIpDatabase>();
    }
}
