//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use gochara_base::LinearAyanamsha;
use gochara_time::UtcTime;

use crate::error::ServerError;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Include nakshatras in summaries.
    pub nakshatras: bool,
    pub ayanamsha: LinearAyanamsha,
    /// Answer every request for this instant instead of the current time.
    pub instant: Option<UtcTime>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            nakshatras: true,
            ayanamsha: LinearAyanamsha::default(),
            instant: None,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn validate(&self) -> Result<(), ServerError> {
        let aya = &self.ayanamsha;
        if !aya.base_deg.is_finite() || !aya.drift_arcsec_per_year.is_finite() {
            return Err(ServerError::InvalidConfig("ayanamsha constants must be finite"));
        }
        if let Some(instant) = &self.instant {
            instant
                .validate()
                .map_err(|_| ServerError::InvalidConfig("pinned instant is not a valid UTC time"))?;
        }
        Ok(())
    }
}
