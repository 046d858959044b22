//! Named field access on lookup results
//!
//! Every edition exposes a fixed, ordered list of field names. Iterating the
//! list yields each name with its value, or `None` when the record has none.

use serde::Serialize;
use std::fmt;

use crate::database::{CityRecord, CountryId, RegionRecord, ResolvedLocation};
use crate::tables;

pub const CITY_FIELDS: &[&str] = &[
    "city",
    "postal_code",
    "latitude",
    "longitude",
    "country",
    "country_code",
    "region",
    "continent",
    "region_name",
    "time_zone",
    "metro_code",
    "area_code",
];

pub const COUNTRY_FIELDS: &[&str] = &["country", "country_code", "continent"];

pub const REGION_FIELDS: &[&str] = &["country_code", "region", "time_zone"];

/// Value of a single field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Float(f32),
    Integer(u32),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Float(v) => write!(f, "{:.4}", v),
            FieldValue::Integer(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

fn text(value: Option<&str>) -> Option<FieldValue> {
    value.map(FieldValue::from)
}

impl CityRecord {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "city" => text(self.city.as_deref()),
            "postal_code" => text(self.postal_code.as_deref()),
            "latitude" => Some(FieldValue::Float(self.latitude)),
            "longitude" => Some(FieldValue::Float(self.longitude)),
            "country" => text(self.country_name.as_deref()),
            "country_code" => text(self.country_code.as_deref()),
            "region" => text(self.region.as_deref()),
            "continent" => text(self.continent_code.as_deref()),
            "region_name" => text(self.region_name()),
            "time_zone" => text(self.time_zone()),
            "metro_code" => self.metro_code.map(FieldValue::Integer),
            "area_code" => self.area_code.map(FieldValue::Integer),
            _ => None,
        }
    }
}

impl CountryId {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "country" => text(tables::country_name(self.id())),
            "country_code" => text(tables::country_code(self.id())),
            "continent" => text(tables::country_continent(self.id())),
            _ => None,
        }
    }
}

impl RegionRecord {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "country_code" => text(Some(&self.country_code)),
            "region" => text(self.region.as_deref()),
            "time_zone" => text(self.time_zone()),
            _ => None,
        }
    }
}

impl ResolvedLocation {
    /// Field names of this result's edition, in display order
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            ResolvedLocation::Country(_) => COUNTRY_FIELDS,
            ResolvedLocation::Region(_) => REGION_FIELDS,
            ResolvedLocation::City(_) => CITY_FIELDS,
        }
    }

    /// Single field by name, `None` for an unknown name or an absent value
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        match self {
            ResolvedLocation::Country(id) => id.field(name),
            ResolvedLocation::Region(region) => region.field(name),
            ResolvedLocation::City(city) => city.field(name),
        }
    }

    /// Every field in order, absent values included
    pub fn fields(&self) -> Vec<(&'static str, Option<FieldValue>)> {
        self.field_names()
            .iter()
            .map(|&name| (name, self.field(name)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city() -> ResolvedLocation {
        ResolvedLocation::City(CityRecord {
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
        })
    }

    #[test]
    fn test_city_field_order() {
        let names: Vec<_> = city().fields().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, CITY_FIELDS);
        assert_eq!(names[0], "city");
        assert_eq!(names[9], "time_zone");
    }

    #[test]
    fn test_city_values() {
        let location = city();
        let fields = location.fields();
        assert_eq!(fields[0].1, Some(FieldValue::from("Mountain View")));
        // Postal code is absent but still listed
        assert_eq!(fields[1], ("postal_code", None));
        assert_eq!(location.field("region_name"), Some(FieldValue::from("California")));
        assert_eq!(location.field("time_zone"), Some(FieldValue::from("America/Los_Angeles")));
        assert_eq!(location.field("metro_code"), Some(FieldValue::Integer(807)));
        assert_eq!(location.field("latitude").unwrap().to_string(), "37.4192");
        assert_eq!(location.field("nonexistent"), None);
    }

    #[test]
    fn test_country_fields() {
        let location = ResolvedLocation::Country(CountryId::new(38).unwrap());
        assert_eq!(
            location.fields(),
            vec![
                ("country", Some(FieldValue::from("Canada"))),
                ("country_code", Some(FieldValue::from("CA"))),
                ("continent", Some(FieldValue::from("NA"))),
            ]
        );
    }

    #[test]
    fn test_region_fields() {
        let world = ResolvedLocation::Region(RegionRecord {
            country_code: "DE".to_string(),
            region: None,
        });
        assert_eq!(
            world.fields(),
            vec![
                ("country_code", Some(FieldValue::from("DE"))),
                ("region", None),
                ("time_zone", Some(FieldValue::from("Europe/Berlin"))),
            ]
        );
    }
}
