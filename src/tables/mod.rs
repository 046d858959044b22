//! Static lookup tables
//!
//! Pure data: country ids map to codes, names and continents, while
//! (country, region) pairs map to region names and time zones. Every function
//! returns `None` for a key the tables do not know.

mod countries;
mod regions;
mod time_zones;

pub use countries::{COUNTRY_CODES, COUNTRY_CODES3, COUNTRY_CONTINENTS, COUNTRY_COUNT, COUNTRY_NAMES};
pub use regions::region_name;
pub use time_zones::time_zone;

/// Slot 0 is the "unknown country" placeholder and never resolves
fn slot(table: &'static [&'static str; COUNTRY_COUNT], id: u8) -> Option<&'static str> {
    if id == 0 {
        return None;
    }
    table.get(id as usize).copied().filter(|value| *value != "--")
}

/// Two-letter ISO code for a country id
pub fn country_code(id: u8) -> Option<&'static str> {
    slot(&COUNTRY_CODES, id)
}

/// Three-letter ISO code for a country id
pub fn country_code3(id: u8) -> Option<&'static str> {
    slot(&COUNTRY_CODES3, id)
}

pub fn country_name(id: u8) -> Option<&'static str> {
    slot(&COUNTRY_NAMES, id)
}

/// Continent code (AF, AN, AS, EU, NA, OC, SA)
pub fn country_continent(id: u8) -> Option<&'static str> {
    slot(&COUNTRY_CONTINENTS, id)
}

/// Reverse lookup from a two-letter code, first match wins
pub fn country_id(code: &str) -> Option<u8> {
    COUNTRY_CODES
        .iter()
        .skip(1)
        .position(|c| c.eq_ignore_ascii_case(code))
        .map(|index| (index + 1) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_lookup() {
        assert_eq!(country_code(225), Some("US"));
        assert_eq!(country_code3(225), Some("USA"));
        assert_eq!(country_name(225), Some("United States"));
        assert_eq!(country_continent(225), Some("NA"));
        assert_eq!(country_name(38), Some("Canada"));
        assert_eq!(country_code(77), Some("GB"));
    }

    #[test]
    fn test_unknown_slot_is_absent() {
        assert_eq!(country_code(0), None);
        assert_eq!(country_name(0), None);
        assert_eq!(country_continent(0), None);
        // Anonymous proxy has no continent
        assert_eq!(country_continent(244), None);
        assert_eq!(country_name(244), Some("Anonymous Proxy"));
    }

    #[test]
    fn test_country_id_reverse() {
        assert_eq!(country_id("US"), Some(225));
        assert_eq!(country_id("ca"), Some(38));
        assert_eq!(country_id("O1"), Some(246));
        assert_eq!(country_id("--"), None);
        assert_eq!(country_id("XX"), None);
    }

    #[test]
    fn test_region_pairs_resolve_or_are_absent() {
        assert_eq!(region_name("US", "CA"), Some("California"));
        assert_eq!(region_name("CA", "BC"), Some("British Columbia"));
        assert_eq!(region_name("DE", "16"), Some("Berlin"));
        assert_eq!(region_name("US", "ZZ"), None);
        assert_eq!(region_name("XX", "01"), None);
        assert_eq!(region_name("GB", "H9"), Some("London, City of"));
        assert_eq!(time_zone("GB", Some("H9")), Some("Europe/London"));
        assert_eq!(time_zone("ES", None), None);

        for (country, region) in [
            ("US", "TX"),
            ("AU", "02"),
            ("CN", "22"),
            ("BR", "27"),
            ("RU", "48"),
            ("ID", "04"),
            ("KZ", "02"),
            ("MX", "09"),
        ] {
            assert!(region_name(country, region).is_some_and(|n| !n.is_empty()));
            assert!(time_zone(country, Some(region)).is_some_and(|z| !z.is_empty()));
        }
    }
}
