//! Error types for UTC instant handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from UTC parsing or calendar validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Input string does not match any accepted UTC layout.
    InvalidFormat(String),
    /// A calendar or clock field is outside its valid range.
    OutOfRange(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(msg) => write!(f, "invalid UTC format: {msg}"),
            Self::OutOfRange(field) => write!(f, "UTC field out of range: {field}"),
        }
    }
}

impl Error for TimeError {}
