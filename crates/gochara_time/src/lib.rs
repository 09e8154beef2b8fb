//! UTC instants for daily position summaries.
//!
//! This crate provides:
//! - `UtcTime`, the instant type consumed by every summary operation
//! - calendar → Julian Date conversion
//! - `TimeError` for parse and range failures

pub mod error;
pub mod julian;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd};
pub use utc_time::UtcTime;
