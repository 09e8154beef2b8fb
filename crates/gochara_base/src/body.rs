//! The seven classical bodies covered by daily summaries.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ParseError;

/// Sun, Moon and the five visible planets, in summary order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CelestialBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// All bodies in the fixed summary order.
pub const ALL_BODIES: [CelestialBody; 7] = [
    CelestialBody::Sun,
    CelestialBody::Moon,
    CelestialBody::Mercury,
    CelestialBody::Venus,
    CelestialBody::Mars,
    CelestialBody::Jupiter,
    CelestialBody::Saturn,
];

impl CelestialBody {
    /// English name, as rendered in summaries.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
        }
    }

    /// Sanskrit graha name.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Sun => "Surya",
            Self::Moon => "Chandra",
            Self::Mercury => "Buddh",
            Self::Venus => "Shukra",
            Self::Mars => "Mangal",
            Self::Jupiter => "Guru",
            Self::Saturn => "Shani",
        }
    }

    /// 0-based position in [`ALL_BODIES`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
        }
    }
}

impl Display for CelestialBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CelestialBody {
    type Err = ParseError;

    /// Accepts English or Sanskrit names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| {
                b.name().eq_ignore_ascii_case(needle)
                    || b.sanskrit_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseError::UnknownBody(s.to_string()))
    }
}

impl Serialize for CelestialBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
