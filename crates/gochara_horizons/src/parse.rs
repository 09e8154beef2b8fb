//! Observer-table text parsing.
//!
//! A CSV observer table with quantity 31 looks like:
//!
//! ```text
//!  Date_________JDUT, , ,ObsEcLon,ObsEcLat,
//! ***************************************
//! $$SOE
//!  2460691.000000000, , ,295.3160841, -0.0003297,
//! $$EOE
//! ```
//!
//! The header line closest above `$$SOE` names the columns.

use crate::error::HorizonsError;

const SOE: &str = "$$SOE";
const EOE: &str = "$$EOE";
const LONGITUDE_COLUMN: &str = "ObsEcLon";

/// Extract the first ecliptic longitude (degrees) from a text response.
pub fn parse_ecliptic_longitude(response: &str) -> Result<f64, HorizonsError> {
    let (head, rest) = response
        .split_once(SOE)
        .ok_or(HorizonsError::MissingDataBlock)?;
    let (data, _) = rest.split_once(EOE).ok_or(HorizonsError::MissingDataBlock)?;

    let column = head
        .lines()
        .rev()
        .find(|line| line.contains(LONGITUDE_COLUMN))
        .and_then(|header| {
            header
                .split(',')
                .position(|field| field.trim() == LONGITUDE_COLUMN)
        })
        .ok_or(HorizonsError::MissingColumn)?;

    let row = data
        .lines()
        .find(|line| !line.trim().is_empty())
        .ok_or(HorizonsError::MissingDataBlock)?;
    let field = row
        .split(',')
        .nth(column)
        .map(str::trim)
        .ok_or_else(|| HorizonsError::InvalidValue(row.trim().to_string()))?;

    let value = field
        .parse::<f64>()
        .map_err(|_| HorizonsError::InvalidValue(field.to_string()))?;
    if !value.is_finite() {
        return Err(HorizonsError::InvalidValue(field.to_string()));
    }
    Ok(value)
}
