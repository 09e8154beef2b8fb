//! Error types for name parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing user-facing names into enumerations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// Not `tropical` or `sidereal`.
    UnknownSystem(String),
    /// Not one of the seven supported bodies.
    UnknownBody(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSystem(s) => {
                write!(f, "unknown coordinate system: {s} (expected tropical or sidereal)")
            }
            Self::UnknownBody(s) => write!(f, "unknown body: {s}"),
        }
    }
}

impl Error for ParseError {}
