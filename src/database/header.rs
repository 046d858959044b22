//! Structure info parsing
//!
//! A database ends with a structure marker (`FF FF FF`) followed by the
//! edition byte and, for editions with a variable tree size, a 3-byte segment
//! count. An optional version string sits just before the marker, introduced by
//! three zero bytes.

use crate::database::DatabaseType;
use crate::error::OpenError;
use crate::utils::encoding::latin1_to_utf8;

use super::reader::Reader;

/// Terminal threshold of the country editions
pub const COUNTRY_BEGIN: u32 = 16_776_960;
pub const LARGE_COUNTRY_BEGIN: u32 = 16_515_072;
pub const STATE_BEGIN_REV0: u32 = 16_700_000;
pub const STATE_BEGIN_REV1: u32 = 16_000_000;

/// Bytes per tree record in every decodable edition
pub const STANDARD_RECORD_LENGTH: usize = 3;

const STRUCTURE_INFO_MAX_SIZE: usize = 20;
const DATABASE_INFO_MAX_SIZE: usize = 100;
const MARKER: [u8; 3] = [0xff, 0xff, 0xff];

/// Edition codes above this carry a 105 offset in older files
const EDITION_CODE_OFFSET: u8 = 105;

/// Parsed structure info of a database file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseHeader {
    pub edition: DatabaseType,
    /// Node count of the search tree, also the terminal threshold
    pub segments: u32,
    pub record_length: usize,
    /// Total file size in bytes
    pub size: usize,
    /// Offset of the structure marker
    pub marker_offset: usize,
}

impl DatabaseHeader {
    /// Locate the structure marker and derive the tree geometry
    pub fn parse(data: &[u8]) -> Result<Self, OpenError> {
        let reader = Reader::new(data);
        let size = reader.len();
        if size < MARKER.len() + 1 {
            return Err(OpenError::invalid(format!("file too small ({} bytes)", size)));
        }

        let marker_offset = (0..STRUCTURE_INFO_MAX_SIZE)
            .map_while(|back| (size - MARKER.len()).checked_sub(back))
            .find(|&offset| reader.bytes(offset, MARKER.len()).is_ok_and(|b| b == MARKER))
            .ok_or_else(|| OpenError::invalid("structure marker not found"))?;

        let mut code = reader
            .byte(marker_offset + MARKER.len())
            .map_err(|_| OpenError::invalid("structure marker is not followed by an edition byte"))?;
        if code >= 106 {
            code -= EDITION_CODE_OFFSET;
        }
        let edition = DatabaseType::from_code(code)
            .ok_or_else(|| OpenError::invalid(format!("unknown edition code {}", code)))?;

        let segments = match edition {
            DatabaseType::Country
            | DatabaseType::CountryV6
            | DatabaseType::Proxy
            | DatabaseType::Netspeed => COUNTRY_BEGIN,
            DatabaseType::LargeCountry | DatabaseType::LargeCountryV6 => LARGE_COUNTRY_BEGIN,
            DatabaseType::RegionRev0 => STATE_BEGIN_REV0,
            DatabaseType::RegionRev1 => STATE_BEGIN_REV1,
            _ => {
                let segments = reader
                    .u24_le(marker_offset + MARKER.len() + 1)
                    .map_err(|_| OpenError::invalid("segment count truncated"))?;
                let tree_size = segments as usize * 2 * STANDARD_RECORD_LENGTH;
                if segments == 0 || tree_size > size {
                    return Err(OpenError::invalid(format!(
                        "segment count {} does not fit a {} byte file",
                        segments, size
                    )));
                }
                segments
            }
        };

        Ok(Self {
            edition,
            segments,
            record_length: STANDARD_RECORD_LENGTH,
            size,
            marker_offset,
        })
    }

    /// Start of the record area, only meaningful for city editions
    pub fn record_base(&self) -> usize {
        self.segments as usize * 2 * self.record_length
    }
}

/// Version string stored before the structure marker
pub fn database_info(data: &[u8], header: &DatabaseHeader) -> Option<String> {
    let reader = Reader::new(data);
    let limit = header.marker_offset;

    let start = (0..DATABASE_INFO_MAX_SIZE)
        .map_while(|back| limit.checked_sub(3 + back))
        .find(|&offset| reader.bytes(offset, 3).is_ok_and(|b| b == [0, 0, 0]))?
        + 3;

    let raw = reader.bytes(start, limit - start).ok()?;
    let trimmed = match raw.iter().position(|&b| b == 0) {
        Some(end) => &raw[..end],
        None => raw,
    };
    if trimmed.is_empty() {
        return None;
    }
    Some(latin1_to_utf8(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tail(body: &[u8], info: Option<&str>, structure: &[u8]) -> Vec<u8> {
        let mut data = body.to_vec();
        if let Some(info) = info {
            data.extend_from_slice(&[0, 0, 0]);
            data.extend_from_slice(info.as_bytes());
        }
        data.extend_from_slice(&MARKER);
        data.extend_from_slice(structure);
        data
    }

    #[test]
    fn test_country_edition_uses_fixed_segments() {
        let data = tail(&[0u8; 12], None, &[1]);
        let header = DatabaseHeader::parse(&data).unwrap();
        assert_eq!(header.edition, DatabaseType::Country);
        assert_eq!(header.segments, COUNTRY_BEGIN);
        assert_eq!(header.record_length, 3);
        assert_eq!(header.marker_offset, 12);
    }

    #[test]
    fn test_region_segments() {
        let rev0 = DatabaseHeader::parse(&tail(&[0u8; 6], None, &[7])).unwrap();
        assert_eq!(rev0.segments, STATE_BEGIN_REV0);
        let rev1 = DatabaseHeader::parse(&tail(&[0u8; 6], None, &[3])).unwrap();
        assert_eq!(rev1.segments, STATE_BEGIN_REV1);
    }

    #[test]
    fn test_city_reads_segment_count() {
        let data = tail(&[0u8; 60], None, &[2, 4, 0, 0]);
        let header = DatabaseHeader::parse(&data).unwrap();
        assert_eq!(header.edition, DatabaseType::CityRev1);
        assert_eq!(header.segments, 4);
        assert_eq!(header.record_base(), 24);
    }

    #[test]
    fn test_offset_edition_codes() {
        // 106 is the legacy spelling of Country
        let data = tail(&[0u8; 6], None, &[106]);
        assert_eq!(DatabaseHeader::parse(&data).unwrap().edition, DatabaseType::Country);
        let data = tail(&[0u8; 60], None, &[111, 4, 0, 0]);
        assert_eq!(DatabaseHeader::parse(&data).unwrap().edition, DatabaseType::CityRev0);
    }

    #[test]
    fn test_missing_marker() {
        let err = DatabaseHeader::parse(&[0u8; 64]).unwrap_err();
        assert!(matches!(err, OpenError::InvalidFormat(_)));

        // Marker further back than the scan window
        let mut data = tail(&[0u8; 6], None, &[1]);
        data.extend_from_slice(&[0u8; 32]);
        assert!(matches!(DatabaseHeader::parse(&data), Err(OpenError::InvalidFormat(_))));
    }

    #[test]
    fn test_degenerate_files() {
        for data in [&[][..], &[0xff][..], &[0xff, 0xff, 0xff][..]] {
            assert!(matches!(DatabaseHeader::parse(data), Err(OpenError::InvalidFormat(_))));
        }
        // Unknown edition code
        assert!(DatabaseHeader::parse(&tail(&[0u8; 6], None, &[99])).is_err());
        // City segment count larger than the file
        assert!(DatabaseHeader::parse(&tail(&[0u8; 6], None, &[2, 0xff, 0, 0])).is_err());
        // City segment count cut off
        assert!(DatabaseHeader::parse(&tail(&[0u8; 6], None, &[2, 1])).is_err());
    }

    #[test]
    fn test_database_info() {
        let data = tail(&[7u8; 30], Some("GEO-106 20240101 Build 1"), &[1]);
        let header = DatabaseHeader::parse(&data).unwrap();
        assert_eq!(database_info(&data, &header).as_deref(), Some("GEO-106 20240101 Build 1"));

        let data = tail(&[7u8; 30], None, &[1]);
        let header = DatabaseHeader::parse(&data).unwrap();
        assert_eq!(database_info(&data, &header), None);
    }
}
