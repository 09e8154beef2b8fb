//! Julian Date conversion for the proleptic Gregorian calendar.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a Gregorian calendar date to a Julian Date.
///
/// `day` carries the time of day as a fraction (e.g. 1.5 = day 1, 12:00).
/// Meeus, *Astronomical Algorithms*, ch. 7.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day + b
        - 1524.5
}
