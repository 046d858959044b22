//! Terminal value decoding
//!
//! Country and region editions encode the whole answer in the terminal value.
//! City editions point into a record area that follows the tree.

use super::header::DatabaseHeader;
use super::reader::Reader;
use crate::database::{Charset, CityRecord, DatabaseType, RegionRecord};
use crate::error::LookupError;
use crate::tables;
use crate::utils::encoding;

const US_OFFSET: u32 = 1;
const CANADA_OFFSET: u32 = 677;
const WORLD_OFFSET: u32 = 1353;
/// Region slots reserved per country in the world range
const FIPS_RANGE: u32 = 360;

/// Rev0 values from here on are US states
const REV0_STATE_OFFSET: u32 = 1000;

/// Two-letter code packed as `first * 26 + second`
fn letters(index: u32) -> String {
    let first = (b'A' + (index / 26 % 26) as u8) as char;
    let second = (b'A' + (index % 26) as u8) as char;
    [first, second].iter().collect()
}

fn region(country_code: &str, region: Option<String>) -> RegionRecord {
    RegionRecord {
        country_code: country_code.to_string(),
        region,
    }
}

/// Decode a region edition terminal, `None` when it maps to no known country
pub fn decode_region(edition: DatabaseType, value: u32) -> Option<RegionRecord> {
    match edition {
        DatabaseType::RegionRev1 => {
            if value < US_OFFSET {
                None
            } else if value < CANADA_OFFSET {
                Some(region("US", Some(letters(value - US_OFFSET))))
            } else if value < WORLD_OFFSET {
                Some(region("CA", Some(letters(value - CANADA_OFFSET))))
            } else {
                let id = (value - WORLD_OFFSET) / FIPS_RANGE;
                let code = u8::try_from(id).ok().and_then(tables::country_code)?;
                Some(region(code, None))
            }
        }
        DatabaseType::RegionRev0 => {
            if value >= REV0_STATE_OFFSET {
                Some(region("US", Some(letters(value - REV0_STATE_OFFSET))))
            } else {
                let code = u8::try_from(value).ok().and_then(tables::country_code)?;
                Some(region(code, None))
            }
        }
        _ => None,
    }
}

/// Decode the city record a terminal points at
///
/// A terminal of zero means the address has no record. Any read outside the
/// file fails the whole record.
pub fn decode_city(
    reader: &Reader<'_>,
    header: &DatabaseHeader,
    terminal: u32,
    charset: Charset,
) -> Result<Option<CityRecord>, LookupError> {
    if terminal == 0 {
        return Ok(None);
    }

    let start = header.record_base() + terminal as usize;
    let country_id = reader.byte(start)?;
    let mut offset = start + 1;

    let mut next_string = || -> Result<Option<String>, LookupError> {
        let (raw, next) = reader.cstr(offset)?;
        offset = next;
        Ok(raw.map(|bytes| encoding::decode(bytes, charset)))
    };
    let region = next_string()?;
    let city = next_string()?;
    let postal_code = next_string()?;

    let latitude = coordinate(reader.u24_le(offset)?);
    let longitude = coordinate(reader.u24_le(offset + 3)?);
    offset += 6;

    let country_code = tables::country_code(country_id);
    let (metro_code, area_code) = if header.edition == DatabaseType::CityRev1 && country_code == Some("US") {
        let combo = reader.u24_le(offset)?;
        (Some(combo / 1000), Some(combo % 1000))
    } else {
        (None, None)
    };

    log::debug!("decoded city record at {} ({} bytes)", start, offset - start);

    Ok(Some(CityRecord {
        country_code: country_code.map(str::to_string),
        country_code3: tables::country_code3(country_id).map(str::to_string),
        country_name: tables::country_name(country_id).map(str::to_string),
        continent_code: tables::country_continent(country_id).map(str::to_string),
        region,
        city,
        postal_code,
        latitude,
        longitude,
        metro_code,
        area_code,
    }))
}

fn coordinate(raw: u32) -> f32 {
    (raw as f64 / 10000.0 - 180.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::testing::{CityFixture, DatFileBuilder};
    use crate::database::tree;

    #[test]
    fn test_region_rev1_ranges() {
        let us = decode_region(DatabaseType::RegionRev1, 1).unwrap();
        assert_eq!((us.country_code.as_str(), us.region.as_deref()), ("US", Some("AA")));

        // C=2, A=0
        let ca_state = decode_region(DatabaseType::RegionRev1, 1 + 2 * 26).unwrap();
        assert_eq!(ca_state.region.as_deref(), Some("CA"));

        // Q=16, C=2
        let quebec = decode_region(DatabaseType::RegionRev1, 677 + 16 * 26 + 2).unwrap();
        assert_eq!(quebec.country_code, "CA");
        assert_eq!(quebec.region.as_deref(), Some("QC"));

        let germany = decode_region(DatabaseType::RegionRev1, 1353 + 56 * 360).unwrap();
        assert_eq!(germany.country_code, "DE");
        assert_eq!(germany.region, None);
    }

    #[test]
    fn test_region_rev1_unknown() {
        assert!(decode_region(DatabaseType::RegionRev1, 0).is_none());
        // World slot 0 is the "--" placeholder
        assert!(decode_region(DatabaseType::RegionRev1, 1353).is_none());
        assert!(decode_region(DatabaseType::RegionRev1, 1353 + 300 * 360).is_none());
    }

    #[test]
    fn test_region_rev0() {
        // N=13, Y=24
        let ny = decode_region(DatabaseType::RegionRev0, 1000 + 13 * 26 + 24).unwrap();
        assert_eq!(ny.country_code, "US");
        assert_eq!(ny.region.as_deref(), Some("NY"));

        let gb = decode_region(DatabaseType::RegionRev0, 77).unwrap();
        assert_eq!(gb.country_code, "GB");
        assert_eq!(gb.region, None);

        assert!(decode_region(DatabaseType::RegionRev0, 0).is_none());
        assert!(decode_region(DatabaseType::Country, 5).is_none());
    }

    fn decode_at(data: &[u8], ip: &str, charset: Charset) -> Result<Option<CityRecord>, LookupError> {
        let header = DatabaseHeader::parse(data).unwrap();
        let reader = Reader::new(data);
        let hit = tree::seek(&reader, &header, ip.parse().unwrap()).unwrap();
        decode_city(&reader, &header, hit.value, charset)
    }

    #[test]
    fn test_city_rev1_us_record() {
        let data = DatFileBuilder::new(DatabaseType::CityRev1)
            .insert_city(
                "74.125.0.0/16",
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
            .build();

        let record = decode_at(&data, "74.125.67.100", Charset::Iso8859_1).unwrap().unwrap();
        assert_eq!(record.country_code.as_deref(), Some("US"));
        assert_eq!(record.country_code3.as_deref(), Some("USA"));
        assert_eq!(record.continent_code.as_deref(), Some("NA"));
        assert_eq!(record.region.as_deref(), Some("CA"));
        assert_eq!(record.city.as_deref(), Some("Mountain View"));
        assert_eq!(record.postal_code.as_deref(), Some("94043"));
        assert!((record.latitude - 37.4192).abs() < 1e-3);
        assert!((record.longitude + 122.0574).abs() < 1e-3);
        assert_eq!(record.metro_code, Some(807));
        assert_eq!(record.area_code, Some(650));

        assert!(decode_at(&data, "8.8.8.8", Charset::Iso8859_1).unwrap().is_none());
    }

    #[test]
    fn test_city_absent_strings_and_no_metro_outside_us() {
        let data = DatFileBuilder::new(DatabaseType::CityRev1)
            .insert_city(
                "81.0.0.0/8",
                &CityFixture {
                    country_id: 56,
                    city: b"M\xfcnchen",
                    latitude: 48.15,
                    longitude: 11.5833,
                    ..Default::default()
                },
            )
            .build();

        let record = decode_at(&data, "81.2.3.4", Charset::Iso8859_1).unwrap().unwrap();
        assert_eq!(record.country_code.as_deref(), Some("DE"));
        assert_eq!(record.city.as_deref(), Some("München"));
        assert_eq!(record.region, None);
        assert_eq!(record.postal_code, None);
        assert_eq!(record.metro_code, None);
        assert_eq!(record.area_code, None);
    }

    #[test]
    fn test_city_rev0_has_no_metro() {
        let data = DatFileBuilder::new(DatabaseType::CityRev0)
            .insert_city(
                "74.0.0.0/8",
                &CityFixture {
                    country_id: 225,
                    region: b"NY",
                    city: b"New York",
                    latitude: 40.7,
                    longitude: -74.0,
                    ..Default::default()
                },
            )
            .build();

        let record = decode_at(&data, "74.1.1.1", Charset::Iso8859_1).unwrap().unwrap();
        assert_eq!(record.region.as_deref(), Some("NY"));
        assert_eq!(record.metro_code, None);
    }

    #[test]
    fn test_truncated_record_is_out_of_bounds() {
        let mut builder = DatFileBuilder::new(DatabaseType::CityRev1);
        // Country byte and region, then the file ends before the city terminator
        let offset = builder.push_raw_record(&[225, b'C', b'A', 0, b'S', b'a']);
        let data = builder.insert("10.0.0.0/8", offset).build();

        let header = DatabaseHeader::parse(&data).unwrap();
        let reader = Reader::new(&data[..header.marker_offset]);
        let err = decode_city(&reader, &header, offset, Charset::Iso8859_1).unwrap_err();
        assert!(matches!(err, LookupError::OutOfBounds { .. }));
    }

    #[test]
    fn test_record_past_end_of_file() {
        let data = DatFileBuilder::new(DatabaseType::CityRev1).insert("10.0.0.0/8", 1).build();
        let header = DatabaseHeader::parse(&data).unwrap();
        let reader = Reader::new(&data);
        let err = decode_city(&reader, &header, 4096, Charset::Iso8859_1).unwrap_err();
        assert!(matches!(err, LookupError::OutOfBounds { .. }));
    }
}
