//! Tropical/sidereal coordinate selection.
//!
//! [`sidereal_longitude`] is the only place the ayanamsha correction is
//! applied. Displayed longitudes and nakshatra inputs both go through it, so
//! a reported sign can never disagree with a reported longitude.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use gochara_time::UtcTime;
use serde::{Deserialize, Serialize};

use crate::ayanamsha::LinearAyanamsha;
use crate::error::ParseError;
use crate::util::normalize_360;

/// Zodiac reference convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateSystem {
    /// Equinox-based zodiac, no correction.
    Tropical,
    /// Fixed-star zodiac: tropical minus ayanamsha.
    #[default]
    Sidereal,
}

impl CoordinateSystem {
    /// Lowercase label used in rendered summaries and query strings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tropical => "tropical",
            Self::Sidereal => "sidereal",
        }
    }
}

impl Display for CoordinateSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoordinateSystem {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tropical" => Ok(Self::Tropical),
            "sidereal" => Ok(Self::Sidereal),
            _ => Err(ParseError::UnknownSystem(s.to_string())),
        }
    }
}

/// Sidereal longitude: `normalize(tropical - ayanamsha(year))`.
pub fn sidereal_longitude(tropical_lon_deg: f64, utc: &UtcTime, model: &LinearAyanamsha) -> f64 {
    normalize_360(tropical_lon_deg - model.at(utc))
}

/// Longitude in the requested system, normalized to [0, 360).
pub fn resolve_longitude(
    tropical_lon_deg: f64,
    utc: &UtcTime,
    system: CoordinateSystem,
    model: &LinearAyanamsha,
) -> f64 {
    match system {
        CoordinateSystem::Tropical => normalize_360(tropical_lon_deg),
        CoordinateSystem::Sidereal => sidereal_longitude(tropical_lon_deg, utc, model),
    }
}
