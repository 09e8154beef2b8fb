//! Error types for position sources and summary composition.

use std::error::Error;
use std::fmt::{Display, Formatter};

use gochara_base::CelestialBody;
use gochara_time::TimeError;

/// Errors raised by a position source.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SourceError {
    /// A name that is not one of the seven supported bodies.
    UnknownBody(String),
    /// The source holds no value for this body.
    MissingBody(CelestialBody),
    /// The same body was given twice, e.g. once by English and once by Sanskrit name.
    DuplicateBody(CelestialBody),
    /// The source produced NaN or an infinity.
    NonFinite { body: CelestialBody, value: f64 },
    /// The backing computation or service failed.
    Failed(String),
    Io(String),
    Parse(String),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownBody(name) => write!(f, "unknown body: {name}"),
            Self::MissingBody(body) => write!(f, "no longitude for {body}"),
            Self::DuplicateBody(body) => write!(f, "more than one longitude for {body}"),
            Self::NonFinite { body, value } => {
                write!(f, "non-finite longitude for {body}: {value}")
            }
            Self::Failed(msg) => write!(f, "position source failed: {msg}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for SourceError {}

impl From<std::io::Error> for SourceError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

/// Errors from [`crate::summarize`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SummaryError {
    InvalidInstant(TimeError),
    Source(SourceError),
}

impl Display for SummaryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInstant(e) => write!(f, "invalid instant: {e}"),
            Self::Source(e) => write!(f, "{e}"),
        }
    }
}

impl Error for SummaryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInstant(e) => Some(e),
            Self::Source(e) => Some(e),
        }
    }
}

impl From<SourceError> for SummaryError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

impl From<TimeError> for SummaryError {
    fn from(e: TimeError) -> Self {
        Self::InvalidInstant(e)
    }
}
