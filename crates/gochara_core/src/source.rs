//! Capabilities that supply tropical ecliptic longitudes.

use std::future::Future;

use gochara_base::CelestialBody;
use gochara_time::UtcTime;

use crate::error::SourceError;
use crate::table::LongitudeTable;

/// Geocentric apparent tropical ecliptic longitude of a body, in degrees.
///
/// Implementations must be safe to share between request handlers.
/// Returning a non-finite value is treated by callers as
/// [`SourceError::NonFinite`].
pub trait PositionSource: Send + Sync {
    fn longitude(&self, body: CelestialBody, utc: &UtcTime) -> Result<f64, SourceError>;
}

/// Asynchronously fetch every body's longitude for one instant.
///
/// Network-backed sources implement this and hand back a
/// [`LongitudeTable`], which is then a plain [`PositionSource`].
pub trait SnapshotProvider: Send + Sync {
    fn snapshot(
        &self,
        utc: &UtcTime,
    ) -> impl Future<Output = Result<LongitudeTable, SourceError>> + Send;
}
