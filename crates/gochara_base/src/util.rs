//! Shared utility functions for longitude arithmetic.

/// Normalize an angle to [0, 360) degrees.
///
/// True modulo: negative inputs wrap upward. Inputs so close below zero that
/// the wrap rounds to 360.0 fold to 0.0, and -0.0 becomes +0.0.
/// Only meaningful for finite input.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r + 0.0 }
}

/// Split a normalized longitude into `(sector index, degrees within sector)`
/// for `count` equal sectors of `span` degrees.
///
/// Division can round a longitude across a sector boundary; the index is
/// stepped back or forward so the remainder stays in [0, span).
/// A NaN longitude is not clamped: the remainder comes back NaN.
pub(crate) fn divide_arc(lon: f64, span: f64, count: u8) -> (u8, f64) {
    let last = count - 1;
    let mut idx = ((lon / span).floor() as u8).min(last);
    let mut within = lon - idx as f64 * span;
    if within < 0.0 && idx > 0 {
        idx -= 1;
        within = lon - idx as f64 * span;
    } else if within >= span && idx < last {
        idx += 1;
        within = lon - idx as f64 * span;
    }
    (idx, if within < 0.0 { 0.0 } else { within })
}
