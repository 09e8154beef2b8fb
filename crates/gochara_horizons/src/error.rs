use gochara_core::SourceError;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum HorizonsError {
    #[error("HTTP request to Horizons failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Horizons returned status {0}")]
    Status(u16),

    #[error("Horizons response has no $$SOE/$$EOE data block")]
    MissingDataBlock,

    #[error("Horizons response has no ObsEcLon column")]
    MissingColumn,

    #[error("Invalid ObsEcLon value: {0}")]
    InvalidValue(String),
}

impl From<HorizonsError> for SourceError {
    fn from(e: HorizonsError) -> Self {
        SourceError::Failed(e.to_string())
    }
}
