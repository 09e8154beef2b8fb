//! Symbolic layer for daily graha positions.
//!
//! This crate provides:
//! - Angle normalization to [0, 360)
//! - A linear (configurable) Lahiri ayanamsha estimate
//! - Tropical/sidereal coordinate selection
//! - Rashi (12 x 30 deg) and nakshatra (27 x 13 deg 20') classification
//!
//! Everything here is a pure function of its inputs. Ecliptic longitudes
//! come from elsewhere (see `gochara_core::PositionSource`).

pub mod ayanamsha;
pub mod body;
pub mod coordinate;
pub mod error;
pub mod nakshatra;
pub mod rashi;
pub mod util;

pub use ayanamsha::{
    BASE_DEG, DRIFT_ARCSEC_PER_YEAR, LinearAyanamsha, REFERENCE_YEAR, ayanamsha_for_year,
};
pub use body::{ALL_BODIES, CelestialBody};
pub use coordinate::{CoordinateSystem, resolve_longitude, sidereal_longitude};
pub use error::ParseError;
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
    nakshatra_from_tropical,
};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, deg_to_dms, dms_to_deg, rashi_from_longitude,
    rashi_from_tropical,
};
pub use util::normalize_360;
