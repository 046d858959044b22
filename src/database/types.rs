//! Type definitions for the database module
//!
//! Editions, cache modes and the typed results returned by a lookup.

use crate::tables;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Database edition enumeration, numbered by the type byte stored in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseType {
    Country,
    CityRev1,
    RegionRev1,
    Isp,
    Org,
    CityRev0,
    RegionRev0,
    Proxy,
    AsNum,
    Netspeed,
    Domain,
    CountryV6,
    LargeCountry,
    LargeCountryV6,
    CityRev1V6,
    CityRev0V6,
    NetspeedRev1,
    NetspeedRev1V6,
}

impl DatabaseType {
    /// Map the edition byte that follows the structure marker
    pub fn from_code(code: u8) -> Option<Self> {
        let edition = match code {
            1 => Self::Country,
            2 => Self::CityRev1,
            3 => Self::RegionRev1,
            4 => Self::Isp,
            5 => Self::Org,
            6 => Self::CityRev0,
            7 => Self::RegionRev0,
            8 => Self::Proxy,
            9 => Self::AsNum,
            10 => Self::Netspeed,
            11 => Self::Domain,
            12 => Self::CountryV6,
            17 => Self::LargeCountry,
            18 => Self::LargeCountryV6,
            30 => Self::CityRev1V6,
            31 => Self::CityRev0V6,
            32 => Self::NetspeedRev1,
            33 => Self::NetspeedRev1V6,
            _ => return None,
        };
        Some(edition)
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::Country => 1,
            Self::CityRev1 => 2,
            Self::RegionRev1 => 3,
            Self::Isp => 4,
            Self::Org => 5,
            Self::CityRev0 => 6,
            Self::RegionRev0 => 7,
            Self::Proxy => 8,
            Self::AsNum => 9,
            Self::Netspeed => 10,
            Self::Domain => 11,
            Self::CountryV6 => 12,
            Self::LargeCountry => 17,
            Self::LargeCountryV6 => 18,
            Self::CityRev1V6 => 30,
            Self::CityRev0V6 => 31,
            Self::NetspeedRev1 => 32,
            Self::NetspeedRev1V6 => 33,
        }
    }

    /// Human-readable edition name as printed by the reference tooling
    pub fn description(&self) -> &'static str {
        match self {
            Self::Country => "GeoIP Country Edition",
            Self::CityRev1 => "GeoIP City Edition, Rev 1",
            Self::RegionRev1 => "GeoIP Region Edition, Rev 1",
            Self::Isp => "GeoIP ISP Edition",
            Self::Org => "GeoIP Organization Edition",
            Self::CityRev0 => "GeoIP City Edition, Rev 0",
            Self::RegionRev0 => "GeoIP Region Edition, Rev 0",
            Self::Proxy => "GeoIP Proxy Edition",
            Self::AsNum => "GeoIP ASNum Edition",
            Self::Netspeed => "GeoIP Netspeed Edition",
            Self::Domain => "GeoIP Domain Name Edition",
            Self::CountryV6 => "GeoIP Country V6 Edition",
            Self::LargeCountry => "GeoIP Large Country Edition",
            Self::LargeCountryV6 => "GeoIP Large Country V6 Edition",
            Self::CityRev1V6 => "GeoIP City Edition V6, Rev 1",
            Self::CityRev0V6 => "GeoIP City Edition V6, Rev 0",
            Self::NetspeedRev1 => "GeoIP Netspeed Edition, Rev 1",
            Self::NetspeedRev1V6 => "GeoIP Netspeed Edition V6, Rev 1",
        }
    }

    /// Whether lookups against this edition can be decoded
    pub fn is_supported(&self) -> bool {
        matches!(
            self,
            Self::Country
                | Self::LargeCountry
                | Self::RegionRev0
                | Self::RegionRev1
                | Self::CityRev0
                | Self::CityRev1
        )
    }

    /// Default file name of the edition inside the data directory
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Country | Self::LargeCountry => "GeoIP.dat",
            Self::RegionRev0 | Self::RegionRev1 => "GeoIPRegion.dat",
            Self::CityRev0 | Self::CityRev1 => "GeoIPCity.dat",
            Self::Isp => "GeoIPISP.dat",
            Self::Org => "GeoIPOrg.dat",
            Self::Proxy => "GeoIPProxy.dat",
            Self::AsNum => "GeoIPASNum.dat",
            Self::Netspeed => "GeoIPNetspeed.dat",
            Self::NetspeedRev1 => "GeoIPNetSpeedCell.dat",
            Self::Domain => "GeoIPDomain.dat",
            Self::CountryV6 | Self::LargeCountryV6 => "GeoIPv6.dat",
            Self::CityRev0V6 | Self::CityRev1V6 => "GeoLiteCityv6.dat",
            Self::NetspeedRev1V6 => "GeoIPNetSpeedCellv6.dat",
        }
    }

    /// Parse the short edition names accepted on the command line and in config
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "city" | "city_rev1" => Some(Self::CityRev1),
            "city_rev0" => Some(Self::CityRev0),
            "region" | "region_rev1" => Some(Self::RegionRev1),
            "region_rev0" => Some(Self::RegionRev0),
            "country" => Some(Self::Country),
            "large_country" => Some(Self::LargeCountry),
            _ => None,
        }
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// How the file contents are held once opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheMode {
    /// Map the file read-only
    #[default]
    MemoryMap,
    /// Read the whole file into memory up front
    Memory,
}

/// Encoding of strings stored in city records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Charset {
    #[default]
    #[serde(rename = "iso-8859-1", alias = "latin1")]
    Iso8859_1,
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
}

impl FromStr for Charset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "iso-8859-1" | "latin1" => Ok(Charset::Iso8859_1),
            "utf-8" | "utf8" => Ok(Charset::Utf8),
            other => Err(format!("unknown charset: {}", other)),
        }
    }
}

/// Country result: an index into the static country tables
///
/// Every named field is computed from the tables on access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryId(u8);

impl CountryId {
    /// Wrap a raw id, `0` is the "unknown" slot and is rejected
    pub fn new(id: u32) -> Option<Self> {
        if id == 0 || id as usize >= tables::COUNTRY_COUNT {
            return None;
        }
        Some(Self(id as u8))
    }

    pub fn id(&self) -> u8 {
        self.0
    }

    pub fn name(&self) -> &'static str {
        tables::country_name(self.0).unwrap_or("N/A")
    }

    pub fn iso_code(&self) -> &'static str {
        tables::country_code(self.0).unwrap_or("--")
    }

    pub fn iso_code3(&self) -> &'static str {
        tables::country_code3(self.0).unwrap_or("--")
    }

    pub fn continent(&self) -> &'static str {
        tables::country_continent(self.0).unwrap_or("--")
    }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.iso_code())
    }
}

impl Serialize for CountryId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("CountryId", 4)?;
        s.serialize_field("id", &self.0)?;
        s.serialize_field("country", self.name())?;
        s.serialize_field("country_code", self.iso_code())?;
        s.serialize_field("continent", self.continent())?;
        s.end()
    }
}

/// Region result: decoded country code and optional region code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionRecord {
    pub country_code: String,
    pub region: Option<String>,
}

impl RegionRecord {
    pub fn time_zone(&self) -> Option<&'static str> {
        tables::time_zone(&self.country_code, self.region.as_deref())
    }

    pub fn region_name(&self) -> Option<&'static str> {
        tables::region_name(&self.country_code, self.region.as_deref()?)
    }
}

impl fmt::Display for RegionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.region.as_deref().unwrap_or(""), self.country_code)
    }
}

/// City result, deep-copied out of the database file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityRecord {
    pub country_code: Option<String>,
    pub country_code3: Option<String>,
    pub country_name: Option<String>,
    pub continent_code: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: f32,
    pub longitude: f32,
    /// Only present in Rev1 records for the United States
    pub metro_code: Option<u32>,
    pub area_code: Option<u32>,
}

impl CityRecord {
    pub fn region_name(&self) -> Option<&'static str> {
        tables::region_name(self.country_code.as_deref()?, self.region.as_deref()?)
    }

    pub fn time_zone(&self) -> Option<&'static str> {
        tables::time_zone(self.country_code.as_deref()?, self.region.as_deref())
    }
}

impl fmt::Display for CityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} ({})",
            self.city.as_deref().unwrap_or("(null)"),
            self.country_name.as_deref().unwrap_or("(null)"),
            self.country_code.as_deref().unwrap_or("(null)")
        )
    }
}

/// Outcome of a successful lookup, one variant per decodable edition
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "edition", rename_all = "snake_case")]
pub enum ResolvedLocation {
    Country(CountryId),
    Region(RegionRecord),
    City(CityRecord),
}

impl ResolvedLocation {
    /// ISO country code regardless of edition
    pub fn country_code(&self) -> Option<&str> {
        match self {
            Self::Country(id) => Some(id.iso_code()),
            Self::Region(region) => Some(&region.country_code),
            Self::City(city) => city.country_code.as_deref(),
        }
    }

    pub fn time_zone(&self) -> Option<&'static str> {
        match self {
            Self::Country(_) => None,
            Self::Region(region) => region.time_zone(),
            Self::City(city) => city.time_zone(),
        }
    }
}

impl fmt::Display for ResolvedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Country(id) => fmt::Display::fmt(id, f),
            Self::Region(region) => fmt::Display::fmt(region, f),
            Self::City(city) => fmt::Display::fmt(city, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_type_codes() {
        for code in 0..=255u8 {
            if let Some(edition) = DatabaseType::from_code(code) {
                assert_eq!(edition.code(), code);
            }
        }
        assert_eq!(DatabaseType::from_code(2), Some(DatabaseType::CityRev1));
        assert!(DatabaseType::from_code(0).is_none());
        assert!(DatabaseType::from_code(99).is_none());
    }

    #[test]
    fn test_supported_editions() {
        assert!(DatabaseType::CityRev1.is_supported());
        assert!(DatabaseType::RegionRev0.is_supported());
        assert!(!DatabaseType::Org.is_supported());
        assert!(!DatabaseType::CountryV6.is_supported());
    }

    #[test]
    fn test_country_id_zero_is_never_valid() {
        assert!(CountryId::new(0).is_none());
        assert!(CountryId::new(256).is_none());
        let us = CountryId::new(225).unwrap();
        assert_eq!(us.iso_code(), "US");
        assert_eq!(us.to_string(), "United States (US)");
    }

    #[test]
    fn test_city_display() {
        let record = CityRecord {
            country_code: Some("US".to_string()),
            country_code3: Some("USA".to_string()),
            country_name: Some("United States".to_string()),
            continent_code: Some("NA".to_string()),
            region: Some("CA".to_string()),
            city: Some("Mountain View".to_string()),
            postal_code: None,
            latitude: 37.4192,
            longitude: -122.0574,
            metro_code: Some(807),
            area_code: Some(650),
        };
        assert_eq!(record.to_string(), "Mountain View, United States (US)");
        assert_eq!(record.region_name(), Some("California"));
        assert_eq!(record.time_zone(), Some("America/Los_Angeles"));
    }

    #[test]
    fn test_region_display() {
        let region = RegionRecord { country_code: "CA".to_string(), region: Some("QC".to_string()) };
        assert_eq!(region.to_string(), "QC, CA");
        assert_eq!(region.time_zone(), Some("America/Montreal"));
        assert_eq!(region.region_name(), Some("Quebec"));
    }

    #[test]
    fn test_charset_names() {
        assert_eq!("UTF-8".parse::<Charset>(), Ok(Charset::Utf8));
        assert_eq!("latin1".parse::<Charset>(), Ok(Charset::Iso8859_1));
        assert_eq!("iso_8859_1".parse::<Charset>(), Ok(Charset::Iso8859_1));
        assert!("ebcdic".parse::<Charset>().is_err());
    }

    #[test]
    fn test_country_serializes_named_fields() {
        let json = serde_json::to_string(&ResolvedLocation::Country(CountryId::new(225).unwrap())).unwrap();
        assert!(json.contains("\"edition\":\"country\""));
        assert!(json.contains("\"country_code\":\"US\""));
    }
}
