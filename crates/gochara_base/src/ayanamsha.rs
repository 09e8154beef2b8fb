//! Linear Lahiri ayanamsha estimate.
//!
//! The ayanamsha is the angular offset between the tropical zodiac (defined
//! by the vernal equinox) and the sidereal zodiac (anchored to fixed stars).
//! It grows as the equinox precesses westward.
//!
//! This is a first-order model: a value near 2025 plus a constant yearly
//! drift, evaluated on the UTC calendar year only. It tracks the published
//! Lahiri value to a few hundredths of a degree over a few decades and is
//! not a precession-series ayanamsha. The constants live in
//! [`LinearAyanamsha`] so a caller can swap them without touching the
//! classification code.

use gochara_time::UtcTime;
use serde::{Deserialize, Serialize};

/// Reference year of the default model.
pub const REFERENCE_YEAR: i32 = 2025;

/// Ayanamsha at [`REFERENCE_YEAR`], degrees.
pub const BASE_DEG: f64 = 24.102;

/// Yearly drift, arcseconds.
pub const DRIFT_ARCSEC_PER_YEAR: f64 = 50.290966;

/// `base + (year - reference_year) * drift`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearAyanamsha {
    pub reference_year: i32,
    pub base_deg: f64,
    pub drift_arcsec_per_year: f64,
}

impl Default for LinearAyanamsha {
    fn default() -> Self {
        Self::LAHIRI_2025
    }
}

impl LinearAyanamsha {
    /// Lahiri, anchored at 24.102 deg in 2025 with 50.290966"/yr drift.
    pub const LAHIRI_2025: Self = Self {
        reference_year: REFERENCE_YEAR,
        base_deg: BASE_DEG,
        drift_arcsec_per_year: DRIFT_ARCSEC_PER_YEAR,
    };

    pub const fn new(reference_year: i32, base_deg: f64, drift_arcsec_per_year: f64) -> Self {
        Self {
            reference_year,
            base_deg,
            drift_arcsec_per_year,
        }
    }

    /// Yearly drift in degrees.
    pub fn drift_deg_per_year(&self) -> f64 {
        self.drift_arcsec_per_year / 3600.0
    }

    /// Ayanamsha in degrees for a calendar year.
    pub fn at_year(&self, year: i32) -> f64 {
        let years = (i64::from(year) - i64::from(self.reference_year)) as f64;
        self.base_deg + years * self.drift_deg_per_year()
    }

    /// Ayanamsha in degrees for an instant. Month, day and time are ignored.
    pub fn at(&self, utc: &UtcTime) -> f64 {
        self.at_year(utc.year())
    }
}

/// Ayanamsha for a calendar year under the default Lahiri model.
pub fn ayanamsha_for_year(year: i32) -> f64 {
    LinearAyanamsha::LAHIRI_2025.at_year(year)
}
