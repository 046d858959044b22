//! Synthetic database files for unit tests
//!
//! Builds a search tree from CIDR blocks and appends city records and the
//! structure info the way real files lay them out.

use super::host::HostResolver;
use super::header::{COUNTRY_BEGIN, LARGE_COUNTRY_BEGIN, STATE_BEGIN_REV0, STATE_BEGIN_REV1};
use crate::database::DatabaseType;
use ipnetwork::Ipv4Network;
use std::collections::HashMap;
use std::io::Write;
use std::net::Ipv4Addr;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy)]
enum Child {
    Node(u32),
    Leaf(u32),
}

/// One city record as stored on disk
#[derive(Debug, Clone, Default)]
pub struct CityFixture {
    pub country_id: u8,
    pub region: &'static [u8],
    pub city: &'static [u8],
    pub postal_code: &'static [u8],
    pub latitude: f64,
    pub longitude: f64,
    pub metro_area: Option<u32>,
}

impl CityFixture {
    pub fn encode(&self) -> Vec<u8> {
        let mut out = vec![self.country_id];
        for s in [self.region, self.city, self.postal_code] {
            out.extend_from_slice(s);
            out.push(0);
        }
        for coord in [self.latitude, self.longitude] {
            let raw = ((coord + 180.0) * 10000.0).round() as u32;
            out.extend_from_slice(&raw.to_le_bytes()[..3]);
        }
        if let Some(combo) = self.metro_area {
            out.extend_from_slice(&combo.to_le_bytes()[..3]);
        }
        out
    }
}

pub struct DatFileBuilder {
    edition: DatabaseType,
    nodes: Vec<[Child; 2]>,
    // Offset 0 stays reserved so a zero terminal means "no record"
    records: Vec<u8>,
    info: Option<String>,
}

impl DatFileBuilder {
    pub fn new(edition: DatabaseType) -> Self {
        Self {
            edition,
            nodes: vec![[Child::Leaf(0); 2]],
            records: vec![0],
            info: None,
        }
    }

    /// Map a CIDR block to a raw terminal value
    pub fn insert(mut self, cidr: &str, value: u32) -> Self {
        let network: Ipv4Network = cidr.parse().unwrap();
        let bits = u32::from(network.network());
        let prefix = network.prefix() as u32;
        assert!(prefix > 0);

        let mut node = 0usize;
        for i in 0..prefix {
            let bit = ((bits >> (31 - i)) & 1) as usize;
            if i + 1 == prefix {
                self.nodes[node][bit] = Child::Leaf(value);
                break;
            }
            node = match self.nodes[node][bit] {
                Child::Node(next) => next as usize,
                Child::Leaf(previous) => {
                    let next = self.nodes.len();
                    self.nodes.push([Child::Leaf(previous); 2]);
                    self.nodes[node][bit] = Child::Node(next as u32);
                    next
                }
            };
        }
        self
    }

    /// Append a city record and point a CIDR block at it
    pub fn insert_city(mut self, cidr: &str, record: &CityFixture) -> Self {
        let offset = self.records.len() as u32;
        self.records.extend_from_slice(&record.encode());
        self.insert(cidr, offset)
    }

    /// Append raw bytes to the record area, returning their terminal value
    pub fn push_raw_record(&mut self, bytes: &[u8]) -> u32 {
        let offset = self.records.len() as u32;
        self.records.extend_from_slice(bytes);
        offset
    }

    pub fn info(mut self, info: &str) -> Self {
        self.info = Some(info.to_string());
        self
    }

    fn is_city(&self) -> bool {
        matches!(self.edition, DatabaseType::CityRev0 | DatabaseType::CityRev1)
    }

    fn segments(&self) -> u32 {
        match self.edition {
            DatabaseType::Country => COUNTRY_BEGIN,
            DatabaseType::LargeCountry => LARGE_COUNTRY_BEGIN,
            DatabaseType::RegionRev0 => STATE_BEGIN_REV0,
            DatabaseType::RegionRev1 => STATE_BEGIN_REV1,
            _ => self.nodes.len() as u32,
        }
    }

    pub fn build(&self) -> Vec<u8> {
        let segments = self.segments();
        let mut out = Vec::new();
        for node in &self.nodes {
            for child in node {
                let value = match *child {
                    Child::Node(next) => next,
                    Child::Leaf(value) => segments + value,
                };
                out.extend_from_slice(&value.to_le_bytes()[..3]);
            }
        }
        if self.is_city() {
            out.extend_from_slice(&self.records);
        }
        if let Some(info) = &self.info {
            out.extend_from_slice(&[0, 0, 0]);
            out.extend_from_slice(info.as_bytes());
        }
        out.extend_from_slice(&[0xff, 0xff, 0xff, self.edition.code()]);
        if self.is_city() {
            out.extend_from_slice(&segments.to_le_bytes()[..3]);
        }
        out
    }

    pub fn write(&self) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&self.build()).unwrap();
        file.flush().unwrap();
        file
    }
}

/// Fixed name table so lookups never touch the network
pub struct StaticResolver(HashMap<String, Ipv4Addr>);

impl StaticResolver {
    pub fn new(entries: &[(&str, Ipv4Addr)]) -> Self {
        Self(entries.iter().map(|(host, ip)| (host.to_string(), *ip)).collect())
    }
}

impl HostResolver for StaticResolver {
    fn resolve(&self, host: &str) -> Option<Ipv4Addr> {
        self.0.get(host).copied()
    }
}
