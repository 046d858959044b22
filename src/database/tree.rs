//! Binary search tree walk
//!
//! Each node holds two little-endian records of `record_length` bytes, the left
//! child for a 0 bit and the right child for a 1 bit. A record value below the
//! segment count is the index of the next node; anything at or above it ends
//! the walk.

use ipnetwork::Ipv4Network;
use std::net::Ipv4Addr;

use super::header::DatabaseHeader;
use super::reader::Reader;
use crate::error::LookupError;

/// Terminal reached by a tree walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeHit {
    /// Record value minus the segment count
    pub value: u32,
    /// Number of address bits consumed before the walk ended
    pub prefix_len: u8,
    ip: Ipv4Addr,
}

impl TreeHit {
    /// Network that shares this terminal with the looked-up address
    pub fn network(&self) -> Ipv4Network {
        let bits = u32::from(self.ip);
        let mask = u32::MAX.checked_shl(32 - self.prefix_len as u32).unwrap_or(0);
        let base = Ipv4Addr::from(bits & mask);
        Ipv4Network::new(base, self.prefix_len).unwrap_or_else(|_| Ipv4Network::from(self.ip))
    }
}

/// Walk the tree for `ip`, one bit per level starting from the most significant
pub fn seek(reader: &Reader<'_>, header: &DatabaseHeader, ip: Ipv4Addr) -> Result<TreeHit, LookupError> {
    let bits = u32::from(ip);
    let record_length = header.record_length;
    let mut node: u32 = 0;

    for depth in (0..32u32).rev() {
        let bit = ((bits >> depth) & 1) as usize;
        let offset = (node as usize * 2 + bit) * record_length;
        let value = reader
            .uint_le(offset, record_length)
            .map_err(|_| LookupError::CorruptTree { ip, node })?;

        if value >= header.segments {
            let hit = TreeHit {
                value: value - header.segments,
                prefix_len: (32 - depth) as u8,
                ip,
            };
            log::debug!("{} terminated at node {} with value {} (/{})", ip, node, hit.value, hit.prefix_len);
            return Ok(hit);
        }
        node = value;
    }

    log::debug!("{} exhausted all 32 bits without a terminal", ip);
    Err(LookupError::CorruptTree { ip, node })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::testing::DatFileBuilder;
    use crate::database::DatabaseType;

    fn walk(data: &[u8], ip: &str) -> Result<TreeHit, LookupError> {
        let header = DatabaseHeader::parse(data).unwrap();
        seek(&Reader::new(data), &header, ip.parse().unwrap())
    }

    #[test]
    fn test_walk_terminates_with_prefix() {
        let data = DatFileBuilder::new(DatabaseType::Country)
            .insert("10.0.0.0/8", 38)
            .insert("10.1.0.0/16", 225)
            .build();

        let hit = walk(&data, "10.1.2.3").unwrap();
        assert_eq!(hit.value, 225);
        assert_eq!(hit.prefix_len, 16);
        assert_eq!(hit.network(), "10.1.0.0/16".parse::<Ipv4Network>().unwrap());

        // The /16 split the /8, so its other half ends one level deeper
        let hit = walk(&data, "10.200.0.1").unwrap();
        assert_eq!(hit.value, 38);
        assert_eq!(hit.network().to_string(), "10.128.0.0/9");

        // Unassigned space ends on a zero terminal
        let hit = walk(&data, "192.168.1.1").unwrap();
        assert_eq!(hit.value, 0);
        assert_eq!(hit.prefix_len, 1);
        assert_eq!(hit.network().to_string(), "128.0.0.0/1");
    }

    #[test]
    fn test_every_address_terminates() {
        let data = DatFileBuilder::new(DatabaseType::Country)
            .insert("1.2.3.4/32", 12)
            .insert("255.255.255.0/24", 13)
            .build();

        for ip in ["0.0.0.0", "1.2.3.4", "1.2.3.5", "255.255.255.255", "127.0.0.1"] {
            let hit = walk(&data, ip).unwrap();
            assert!(hit.prefix_len >= 1 && hit.prefix_len <= 32);
        }
        assert_eq!(walk(&data, "1.2.3.4").unwrap().prefix_len, 32);
    }

    #[test]
    fn test_self_referencing_tree_is_corrupt() {
        // Node 0 points back to itself on both branches
        let mut data = vec![0u8; 6];
        data.extend_from_slice(&[0xff, 0xff, 0xff, 1]);
        assert_eq!(
            walk(&data, "8.8.8.8"),
            Err(LookupError::CorruptTree { ip: Ipv4Addr::new(8, 8, 8, 8), node: 0 })
        );
    }

    #[test]
    fn test_node_outside_file_is_corrupt() {
        // Left child points at node 5, far past the end of the file
        let mut data = vec![5, 0, 0, 5, 0, 0];
        data.extend_from_slice(&[0xff, 0xff, 0xff, 1]);
        assert_eq!(
            walk(&data, "1.1.1.1"),
            Err(LookupError::CorruptTree { ip: Ipv4Addr::new(1, 1, 1, 1), node: 5 })
        );
    }
}
