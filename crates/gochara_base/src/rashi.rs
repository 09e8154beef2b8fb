//! Rashi (zodiac sign) and DMS (degrees-minutes-seconds) computation.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg. Classification works on any
//! longitude; which zodiac it refers to (tropical or sidereal) is the
//! caller's choice, made through [`crate::coordinate::resolve_longitude`].

use gochara_time::UtcTime;
use serde::{Serialize, Serializer};

use crate::ayanamsha::LinearAyanamsha;
use crate::coordinate::sidereal_longitude;
use crate::util::{divide_arc, normalize_360};

/// Width of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name, the label used in rendered summaries.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }
}

impl std::fmt::Display for Rashi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.western_name())
    }
}

impl Serialize for Rashi {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.western_name())
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:04.1}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    /// The rashi (zodiac sign).
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Position within the rashi as DMS.
    pub dms: Dms,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Determine the rashi of an ecliptic longitude.
///
/// Input may be any finite value; it is normalized first. Each rashi spans
/// exactly 30 degrees and a longitude on a boundary belongs to the sign that
/// starts there: Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(lon_deg);
    let (rashi_idx, degrees_in_rashi) = divide_arc(lon, RASHI_SPAN, 12);
    RashiInfo {
        rashi: ALL_RASHIS[rashi_idx as usize],
        rashi_index: rashi_idx,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}

/// Convenience: sidereal rashi from a tropical longitude.
///
/// Computes `sidereal = tropical - ayanamsha(year)`, then calls
/// [`rashi_from_longitude`].
pub fn rashi_from_tropical(
    tropical_lon_deg: f64,
    utc: &UtcTime,
    model: &LinearAyanamsha,
) -> RashiInfo {
    rashi_from_longitude(sidereal_longitude(tropical_lon_deg, utc, model))
}
