//! Fixed per-body longitude table.

use std::collections::BTreeMap;
use std::future::{Future, ready};
use std::path::Path;
use std::str::FromStr;

use gochara_base::{ALL_BODIES, CelestialBody};
use gochara_time::UtcTime;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::SourceError;
use crate::source::{PositionSource, SnapshotProvider};

/// One tropical longitude per body, independent of the instant.
///
/// JSON form is an object keyed by body name (English or Sanskrit):
/// `{"Sun": 280.0, "Moon": 10.0, ...}`. All seven bodies are required.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongitudeTable {
    values: [f64; 7],
}

impl LongitudeTable {
    /// Build from values in [`ALL_BODIES`] order.
    pub const fn new(values: [f64; 7]) -> Self {
        Self { values }
    }

    /// Build from `(body, longitude)` pairs. Every body must appear exactly once.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, SourceError>
    where
        I: IntoIterator<Item = (CelestialBody, f64)>,
    {
        let mut slots: [Option<f64>; 7] = [None; 7];
        for (body, lon) in pairs {
            let slot = &mut slots[body.index() as usize];
            if slot.is_some() {
                return Err(SourceError::DuplicateBody(body));
            }
            *slot = Some(lon);
        }
        let mut values = [0.0; 7];
        for body in ALL_BODIES {
            values[body.index() as usize] =
                slots[body.index() as usize].ok_or(SourceError::MissingBody(body))?;
        }
        Ok(Self { values })
    }

    /// Parse the JSON object form.
    pub fn from_json_str(json: &str) -> Result<Self, SourceError> {
        let raw: BTreeMap<String, f64> = serde_json::from_str(json)?;
        let mut pairs = Vec::with_capacity(raw.len());
        for (name, lon) in raw {
            let body = CelestialBody::from_str(&name)
                .map_err(|_| SourceError::UnknownBody(name.clone()))?;
            pairs.push((body, lon));
        }
        Self::from_pairs(pairs)
    }

    /// Read and parse a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Stored value for a body, unchecked.
    pub const fn get(&self, body: CelestialBody) -> f64 {
        self.values[body.index() as usize]
    }
}

impl PositionSource for LongitudeTable {
    fn longitude(&self, body: CelestialBody, _utc: &UtcTime) -> Result<f64, SourceError> {
        let value = self.get(body);
        if !value.is_finite() {
            return Err(SourceError::NonFinite { body, value });
        }
        Ok(value)
    }
}

impl SnapshotProvider for LongitudeTable {
    fn snapshot(
        &self,
        _utc: &UtcTime,
    ) -> impl Future<Output = Result<LongitudeTable, SourceError>> + Send {
        ready(Ok(*self))
    }
}

impl Serialize for LongitudeTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ALL_BODIES.len()))?;
        for body in ALL_BODIES {
            map.serialize_entry(body.name(), &self.get(body))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Sun": 280.0, "Moon": 10.0, "Mercury": 300.0, "Venus": 330.0,
        "Mars": 100.0, "Jupiter": 70.0, "Saturn": 350.0
    }"#;

    fn utc() -> UtcTime {
        UtcTime::from_date(2025, 1, 1)
    }

    #[test]
    fn parses_all_bodies() {
        let table = LongitudeTable::from_json_str(SAMPLE).unwrap();
        assert_eq!(table.longitude(CelestialBody::Sun, &utc()), Ok(280.0));
        assert_eq!(table.longitude(CelestialBody::Saturn, &utc()), Ok(350.0));
    }

    #[test]
    fn accepts_sanskrit_keys() {
        let json = r#"{"Surya":1,"Chandra":2,"Buddh":3,"Shukra":4,"Mangal":5,"Guru":6,"Shani":7}"#;
        let table = LongitudeTable::from_json_str(json).unwrap();
        assert_eq!(table.get(CelestialBody::Jupiter), 6.0);
    }

    #[test]
    fn rejects_unknown_key() {
        let json = SAMPLE.replace("\"Saturn\"", "\"Rahu\"");
        assert_eq!(
            LongitudeTable::from_json_str(&json),
            Err(SourceError::UnknownBody("Rahu".into()))
        );
    }

    #[test]
    fn rejects_missing_body() {
        let json = r#"{"Sun": 280.0}"#;
        assert_eq!(
            LongitudeTable::from_json_str(json),
            Err(SourceError::MissingBody(CelestialBody::Moon))
        );
    }

    #[test]
    fn rejects_body_named_twice() {
        let json = SAMPLE.replace("\"Moon\": 10.0,", "\"Moon\": 10.0, \"Shani\": 12.0,");
        assert_eq!(
            LongitudeTable::from_json_str(&json),
            Err(SourceError::DuplicateBody(CelestialBody::Saturn))
        );
    }

    #[test]
    fn rejects_duplicate_pairs() {
        let mut pairs: Vec<_> = ALL_BODIES.iter().map(|&b| (b, 1.0)).collect();
        pairs.push((CelestialBody::Sun, 2.0));
        assert_eq!(
            LongitudeTable::from_pairs(pairs),
            Err(SourceError::DuplicateBody(CelestialBody::Sun))
        );
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            LongitudeTable::from_json_str("[1, 2]"),
            Err(SourceError::Parse(_))
        ));
    }

    #[test]
    fn non_finite_rejected_at_query() {
        let mut values = [0.0; 7];
        values[CelestialBody::Venus.index() as usize] = f64::INFINITY;
        let table = LongitudeTable::new(values);
        assert!(matches!(
            table.longitude(CelestialBody::Venus, &utc()),
            Err(SourceError::NonFinite {
                body: CelestialBody::Venus,
                ..
            })
        ));
        assert_eq!(table.longitude(CelestialBody::Sun, &utc()), Ok(0.0));
    }

    #[test]
    fn serializes_by_name_in_order() {
        let table = LongitudeTable::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(
            json,
            r#"{"Sun":1.0,"Moon":2.0,"Mercury":3.0,"Venus":4.0,"Mars":5.0,"Jupiter":6.0,"Saturn":7.0}"#
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            LongitudeTable::from_path("/nonexistent/longitudes.json"),
            Err(SourceError::Io(_))
        ));
    }
}
