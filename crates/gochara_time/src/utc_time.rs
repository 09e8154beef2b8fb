//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the instant type threaded through every summary operation.
//! The linear ayanamsha model reads only [`UtcTime::year`]; the Horizons
//! adapter uses [`UtcTime::to_jd_utc`].

use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight UTC on the given calendar date.
    pub fn from_date(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Current wall-clock instant.
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    /// Calendar year, the only component the linear ayanamsha depends on.
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Check every field against the Gregorian calendar and a 24h clock.
    ///
    /// Seconds up to 61 are accepted so leap-second stamps survive a round trip.
    pub fn validate(&self) -> Result<(), TimeError> {
        if NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_none() {
            return Err(TimeError::OutOfRange("date"));
        }
        if self.hour > 23 {
            return Err(TimeError::OutOfRange("hour"));
        }
        if self.minute > 59 {
            return Err(TimeError::OutOfRange("minute"));
        }
        if !self.second.is_finite() || !(0.0..61.0).contains(&self.second) {
            return Err(TimeError::OutOfRange("second"));
        }
        Ok(())
    }

    /// Julian Date on the UTC time scale.
    pub fn to_jd_utc(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }
}

impl From<DateTime<Utc>> for UtcTime {
    fn from(dt: DateTime<Utc>) -> Self {
        let second = dt.second() as f64 + dt.nanosecond() as f64 / 1e9;
        Self::new(
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            second,
        )
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`, `YYYY-MM-DDThh:mm` or `YYYY-MM-DDThh:mm:ss[.fff][Z]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_end_matches('Z');
        let (date, time) = match s.split_once('T') {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        let date_parts: Vec<&str> = date.split('-').collect();
        if date_parts.len() != 3 {
            return Err(TimeError::InvalidFormat(format!(
                "expected YYYY-MM-DD[Thh:mm[:ss]][Z], got {s}"
            )));
        }
        let year: i32 = date_parts[0].parse().map_err(|e| invalid(s, e))?;
        let month: u32 = date_parts[1].parse().map_err(|e| invalid(s, e))?;
        let day: u32 = date_parts[2].parse().map_err(|e| invalid(s, e))?;

        let (hour, minute, second) = match time {
            None => (0, 0, 0.0),
            Some(t) => {
                let time_parts: Vec<&str> = t.split(':').collect();
                match time_parts.as_slice() {
                    [h, m] => (
                        h.parse::<u32>().map_err(|e| invalid(s, e))?,
                        m.parse::<u32>().map_err(|e| invalid(s, e))?,
                        0.0,
                    ),
                    [h, m, sec] => (
                        h.parse::<u32>().map_err(|e| invalid(s, e))?,
                        m.parse::<u32>().map_err(|e| invalid(s, e))?,
                        sec.parse::<f64>().map_err(|e| invalid(s, e))?,
                    ),
                    _ => return Err(TimeError::InvalidFormat(format!("invalid time part: {t}"))),
                }
            }
        };

        let utc = Self::new(year, month, day, hour, minute, second);
        utc.validate()?;
        Ok(utc)
    }
}

fn invalid(input: &str, e: impl std::fmt::Display) -> TimeError {
    TimeError::InvalidFormat(format!("{input}: {e}"))
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Round to microseconds, but never carry into the next whole second.
        let second = self.second.max(0.0);
        let whole = second.floor() as u64;
        let micros = ((second * 1e6).round() as u64).min(whole * 1_000_000 + 999_999);
        let (secs, frac) = (micros / 1_000_000, micros % 1_000_000);
        if frac == 0 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, secs
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:06}Z",
                self.year, self.month, self.day, self.hour, self.minute, secs, frac
            )
        }
    }
}

impl Serialize for UtcTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for UtcTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
