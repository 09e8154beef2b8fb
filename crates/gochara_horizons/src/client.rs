//! HTTP client for the Horizons API.

use gochara_base::{ALL_BODIES, CelestialBody};
use gochara_core::{LongitudeTable, SnapshotProvider, SourceError};
use gochara_time::UtcTime;
use reqwest::Client;
use tracing::{debug, info};

use crate::error::HorizonsError;
use crate::parse::parse_ecliptic_longitude;

/// Public Horizons API endpoint.
pub const DEFAULT_URL: &str = "https://ssd.jpl.nasa.gov/api/horizons.api";

/// Horizons target code for a body (NAIF IDs for body centers).
pub const fn command_code(body: CelestialBody) -> &'static str {
    match body {
        CelestialBody::Sun => "10",
        CelestialBody::Moon => "301",
        CelestialBody::Mercury => "199",
        CelestialBody::Venus => "299",
        CelestialBody::Mars => "499",
        CelestialBody::Jupiter => "599",
        CelestialBody::Saturn => "699",
    }
}

/// Query parameters for a geocentric observer table at one Julian Date (UT).
pub fn request_params(body: CelestialBody, jd_ut: f64) -> Vec<(&'static str, String)> {
    vec![
        ("format", "text".to_string()),
        ("COMMAND", format!("'{}'", command_code(body))),
        ("OBJ_DATA", "'NO'".to_string()),
        ("MAKE_EPHEM", "'YES'".to_string()),
        ("EPHEM_TYPE", "'OBSERVER'".to_string()),
        ("CENTER", "'500@399'".to_string()),
        ("TLIST_TYPE", "'JD'".to_string()),
        ("TLIST", format!("'{jd_ut:.9}'")),
        ("TIME_TYPE", "'UT'".to_string()),
        ("QUANTITIES", "'31'".to_string()),
        ("CSV_FORMAT", "'YES'".to_string()),
    ]
}

/// Fetches apparent geocentric ecliptic longitudes from JPL Horizons.
#[derive(Debug, Clone)]
pub struct HorizonsClient {
    http: Client,
    base_url: String,
}

impl Default for HorizonsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HorizonsClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_URL)
    }

    /// Point at a different endpoint (mirror or local stub).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ecliptic longitude of one body at one instant.
    pub async fn longitude(
        &self,
        body: CelestialBody,
        utc: &UtcTime,
    ) -> Result<f64, HorizonsError> {
        let jd = utc.to_jd_utc();
        debug!(body = body.name(), jd, "requesting Horizons observer table");

        let response = self
            .http
            .get(&self.base_url)
            .query(&request_params(body, jd))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HorizonsError::Status(status.as_u16()));
        }
        let text = response.text().await?;
        parse_ecliptic_longitude(&text)
    }
}

impl SnapshotProvider for HorizonsClient {
    async fn snapshot(&self, utc: &UtcTime) -> Result<LongitudeTable, SourceError> {
        utc.validate().map_err(|e| SourceError::Failed(e.to_string()))?;
        let mut pairs = Vec::with_capacity(ALL_BODIES.len());
        for body in ALL_BODIES {
            let lon = self.longitude(body, utc).await?;
            pairs.push((body, lon));
        }
        info!(instant = %utc, "fetched Horizons snapshot");
        LongitudeTable::from_pairs(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_body_centers() {
        assert_eq!(command_code(CelestialBody::Sun), "10");
        assert_eq!(command_code(CelestialBody::Moon), "301");
        assert_eq!(command_code(CelestialBody::Saturn), "699");
    }

    #[test]
    fn params_request_observer_longitude() {
        let params = request_params(CelestialBody::Mars, 2_460_691.0);
        let get = |k: &str| {
            params
                .iter()
                .find(|(key, _)| *key == k)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("COMMAND"), Some("'499'"));
        assert_eq!(get("CENTER"), Some("'500@399'"));
        assert_eq!(get("QUANTITIES"), Some("'31'"));
        assert_eq!(get("TLIST"), Some("'2460691.000000000'"));
    }

    #[test]
    fn default_points_at_public_api() {
        assert_eq!(HorizonsClient::default().base_url(), DEFAULT_URL);
    }
}
