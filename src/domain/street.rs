// Street domain model
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A coordinate pair in degrees. No range validation is done here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[cfg(test)]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// One street segment as delivered by the remote street collection.
#[derive(Debug, Clone, PartialEq)]
pub struct StreetRecord {
    pub name: String,
    pub location: String,
    pub coordinates: Vec<LatLng>,
}

impl StreetRecord {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, location: impl Into<String>, coordinates: Vec<LatLng>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            coordinates,
        }
    }
}

// Both types only accept keyed objects. The derived impls would also take
// positional arrays such as `[33.6, 73.0]`, which the street endpoint never sends.

fn set_once<T, E: de::Error>(slot: &mut Option<T>, value: T, field: &'static str) -> Result<(), E> {
    if slot.is_some() {
        return Err(E::duplicate_field(field));
    }
    *slot = Some(value);
    Ok(())
}

struct LatLngVisitor;

impl<'de> Visitor<'de> for LatLngVisitor {
    type Value = LatLng;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with numeric `lat` and `lng`")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<LatLng, A::Error> {
        let mut lat = None;
        let mut lng = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "lat" => set_once::<_, A::Error>(&mut lat, map.next_value::<f64>()?, "lat")?,
                "lng" => set_once::<_, A::Error>(&mut lng, map.next_value::<f64>()?, "lng")?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(LatLng {
            lat: lat.ok_or_else(|| de::Error::missing_field("lat"))?,
            lng: lng.ok_or_else(|| de::Error::missing_field("lng"))?,
        })
    }
}

impl<'de> Deserialize<'de> for LatLng {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LatLngVisitor)
    }
}

struct StreetRecordVisitor;

impl<'de> Visitor<'de> for StreetRecordVisitor {
    type Value = StreetRecord;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a street object with `name`, `location` and `coordinates`")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<StreetRecord, A::Error> {
        let mut name = None;
        let mut location = None;
        let mut coordinates = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "name" => set_once::<_, A::Error>(&mut name, map.next_value::<String>()?, "name")?,
                "location" => set_once::<_, A::Error>(&mut location, map.next_value::<String>()?, "location")?,
                "coordinates" => {
                    set_once::<_, A::Error>(&mut coordinates, map.next_value::<Vec<LatLng>>()?, "coordinates")?
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(StreetRecord {
            name: name.ok_or_else(|| de::Error::missing_field("name"))?,
            location: location.ok_or_else(|| de::Error::missing_field("location"))?,
            coordinates: coordinates.ok_or_else(|| de::Error::missing_field("coordinates"))?,
        })
    }
}

impl<'de> Deserialize<'de> for StreetRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StreetRecordVisitor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointRole {
    Start,
    End,
}

impl EndpointRole {
    fn caption_prefix(self) -> &'static str {
        match self {
            EndpointRole::Start => "Start",
            EndpointRole::End => "End",
        }
    }
}

/// First or last point of a street, promoted to a labeled marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub position: LatLng,
    pub name: String,
    pub location: String,
    pub role: EndpointRole,
}

impl Endpoint {
    pub fn new(position: LatLng, record: &StreetRecord, role: EndpointRole) -> Self {
        Self {
            position,
            name: record.name.clone(),
            location: record.location.clone(),
            role,
        }
    }

    /// Secondary popup line, e.g. "Start - Sector A"
    pub fn caption(&self) -> String {
        format!("{} - {}", self.role.caption_prefix(), self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_street_collection() {
        let body = r#"[{"name":"Main St","location":"Sector A","coordinates":[{"lat":33.68,"lng":73.04},{"lat":33,"lng":73}]}]"#;
        let records: Vec<StreetRecord> = serde_json::from_str(body).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Main St");
        assert_eq!(records[0].coordinates[0], LatLng::new(33.68, 73.04));
        // integer degrees are accepted as floats
        assert_eq!(records[0].coordinates[1], LatLng::new(33.0, 73.0));
    }

    #[test]
    fn test_deserialize_rejects_wrong_shape() {
        assert!(serde_json::from_str::<Vec<StreetRecord>>(r#"{"name":"Main St"}"#).is_err());
        assert!(serde_json::from_str::<Vec<StreetRecord>>(r#"[{"name":"Main St","location":"A"}]"#).is_err());
        assert!(
            serde_json::from_str::<Vec<StreetRecord>>(
                r#"[{"name":"Main St","location":"A","coordinates":[[33.6,73.0]]}]"#
            )
            .is_err()
        );
    }

    #[test]
    fn test_deserialize_rejects_positional_record() {
        let body = r#"[["Main St","Sector A",[[33.68,73.04],[33.70,73.06]]]]"#;
        assert!(serde_json::from_str::<Vec<StreetRecord>>(body).is_err());

        let body = r#"[["Main St","Sector A",[{"lat":33.68,"lng":73.04}]]]"#;
        assert!(serde_json::from_str::<Vec<StreetRecord>>(body).is_err());
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let body = r#"[{"id":7,"name":"Main St","location":"A","coordinates":[{"lat":1,"lng":2,"alt":3}]}]"#;
        let records: Vec<StreetRecord> = serde_json::from_str(body).unwrap();

        assert_eq!(records[0].coordinates, vec![LatLng::new(1.0, 2.0)]);
    }

    #[test]
    fn test_deserialize_rejects_duplicate_field() {
        let body = r#"[{"name":"Main St","name":"Other","location":"A","coordinates":[]}]"#;
        assert!(serde_json::from_str::<Vec<StreetRecord>>(body).is_err());
    }

    #[test]
    fn test_endpoint_caption() {
        let record = StreetRecord::new("Main St", "Sector A", vec![LatLng::new(1.0, 2.0)]);

        let start = Endpoint::new(record.coordinates[0], &record, EndpointRole::Start);
        let end = Endpoint::new(record.coordinates[0], &record, EndpointRole::End);

        assert_eq!(start.caption(), "Start - Sector A");
        assert_eq!(end.caption(), "End - Sector A");
    }
}
