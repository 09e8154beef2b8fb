//! Daily summary composition.
//!
//! For every body in [`ALL_BODIES`] order the composer queries the source,
//! resolves the longitude into the requested system, classifies the sign on
//! that resolved value and the nakshatra on the sidereal value. Nakshatras
//! are sidereal regardless of the display system.

use gochara_base::{
    ALL_BODIES, CelestialBody, CoordinateSystem, LinearAyanamsha, NakshatraInfo, RashiInfo,
    nakshatra_from_longitude, rashi_from_longitude, resolve_longitude, sidereal_longitude,
};
use gochara_time::UtcTime;
use serde::Serialize;

use crate::error::{SourceError, SummaryError};
use crate::source::PositionSource;

/// Composer switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryOptions {
    /// Classify and render nakshatras.
    pub nakshatras: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self { nakshatras: true }
    }
}

/// One body's classified position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionRecord {
    pub body: CelestialBody,
    /// Longitude as reported by the source.
    pub tropical_longitude: f64,
    /// Longitude in the requested system, [0, 360).
    pub longitude: f64,
    pub rashi: RashiInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nakshatra: Option<NakshatraInfo>,
}

/// Classified positions of all bodies at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub instant: UtcTime,
    pub system: CoordinateSystem,
    /// Ayanamsha in degrees used for the sidereal values.
    pub ayanamsha_deg: f64,
    pub records: Vec<PositionRecord>,
    /// Human-readable one-line rendering.
    pub rendered: String,
}

/// Build a [`Summary`] from any position source.
pub fn summarize<S: PositionSource + ?Sized>(
    source: &S,
    utc: &UtcTime,
    system: CoordinateSystem,
    model: &LinearAyanamsha,
    options: SummaryOptions,
) -> Result<Summary, SummaryError> {
    utc.validate()?;

    let mut records = Vec::with_capacity(ALL_BODIES.len());
    for body in ALL_BODIES {
        let tropical = source.longitude(body, utc)?;
        if !tropical.is_finite() {
            return Err(SourceError::NonFinite {
                body,
                value: tropical,
            }
            .into());
        }

        let longitude = resolve_longitude(tropical, utc, system, model);
        let nakshatra = options
            .nakshatras
            .then(|| nakshatra_from_longitude(sidereal_longitude(tropical, utc, model)));

        records.push(PositionRecord {
            body,
            tropical_longitude: tropical,
            longitude,
            rashi: rashi_from_longitude(longitude),
            nakshatra,
        });
    }

    let rendered = render_line(system, &records);
    Ok(Summary {
        instant: *utc,
        system,
        ayanamsha_deg: model.at(utc),
        records,
        rendered,
    })
}

/// `Today ({system}): Sun: Sagittarius 15.9°, Purva Ashadha; ... .`
pub fn render_line(system: CoordinateSystem, records: &[PositionRecord]) -> String {
    let parts: Vec<String> = records
        .iter()
        .map(|r| {
            let sign = format!(
                "{}: {} {:.1}°",
                r.body,
                r.rashi.rashi.western_name(),
                r.rashi.degrees_in_rashi
            );
            match &r.nakshatra {
                Some(n) => format!("{sign}, {}", n.nakshatra),
                None => sign,
            }
        })
        .collect();
    format!("Today ({system}): {}.", parts.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::LongitudeTable;

    fn table() -> LongitudeTable {
        LongitudeTable::new([280.0, 10.0, 300.0, 330.0, 100.0, 70.0, 350.0])
    }

    fn utc() -> UtcTime {
        UtcTime::from_date(2025, 3, 1)
    }

    struct Failing;

    impl PositionSource for Failing {
        fn longitude(&self, body: CelestialBody, _utc: &UtcTime) -> Result<f64, SourceError> {
            match body {
                CelestialBody::Mars => Err(SourceError::Failed("mars offline".into())),
                _ => Ok(0.0),
            }
        }
    }

    struct Nan;

    impl PositionSource for Nan {
        fn longitude(&self, _body: CelestialBody, _utc: &UtcTime) -> Result<f64, SourceError> {
            Ok(f64::NAN)
        }
    }

    #[test]
    fn records_in_body_order() {
        let s = summarize(
            &table(),
            &utc(),
            CoordinateSystem::Sidereal,
            &LinearAyanamsha::default(),
            SummaryOptions::default(),
        )
        .unwrap();
        let bodies: Vec<_> = s.records.iter().map(|r| r.body).collect();
        assert_eq!(bodies, ALL_BODIES.to_vec());
        assert!((s.ayanamsha_deg - 24.102).abs() < 1e-12);
    }

    #[test]
    fn nakshatra_is_sidereal_in_tropical_mode() {
        let s = summarize(
            &table(),
            &utc(),
            CoordinateSystem::Tropical,
            &LinearAyanamsha::default(),
            SummaryOptions::default(),
        )
        .unwrap();
        let sun = &s.records[0];
        assert_eq!(sun.rashi.rashi.western_name(), "Capricorn");
        assert_eq!(sun.nakshatra.map(|n| n.nakshatra_index), Some(19));
    }

    #[test]
    fn nakshatras_can_be_disabled() {
        let s = summarize(
            &table(),
            &utc(),
            CoordinateSystem::Sidereal,
            &LinearAyanamsha::default(),
            SummaryOptions { nakshatras: false },
        )
        .unwrap();
        assert!(s.records.iter().all(|r| r.nakshatra.is_none()));
        assert!(s.rendered.starts_with("Today (sidereal): Sun: Sagittarius 15.9°; Moon:"));
    }

    #[test]
    fn source_error_propagates() {
        let err = summarize(
            &Failing,
            &utc(),
            CoordinateSystem::Sidereal,
            &LinearAyanamsha::default(),
            SummaryOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            SummaryError::Source(SourceError::Failed("mars offline".into()))
        );
    }

    #[test]
    fn non_finite_is_rejected() {
        let err = summarize(
            &Nan,
            &utc(),
            CoordinateSystem::Tropical,
            &LinearAyanamsha::default(),
            SummaryOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SummaryError::Source(SourceError::NonFinite {
                body: CelestialBody::Sun,
                ..
            })
        ));
    }

    #[test]
    fn invalid_instant_is_rejected() {
        let err = summarize(
            &table(),
            &UtcTime::from_date(2025, 2, 30),
            CoordinateSystem::Sidereal,
            &LinearAyanamsha::default(),
            SummaryOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SummaryError::InvalidInstant(_)));
    }
}
