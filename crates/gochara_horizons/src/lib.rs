//! JPL Horizons adapter.
//!
//! Requests one observer table per body from the Horizons API with
//! quantity 31 (observer-centered ecliptic longitude and latitude of date,
//! apparent) and assembles the longitudes into a
//! [`gochara_core::LongitudeTable`].

pub mod client;
pub mod error;
pub mod parse;

pub use client::{DEFAULT_URL, HorizonsClient, command_code, request_params};
pub use error::HorizonsError;
pub use parse::parse_ecliptic_longitude;
