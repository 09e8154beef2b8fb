use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NarrativeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("narrative service returned status {0}")]
    Status(u16),

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("narrative service returned no text")]
    EmptyResponse,
}

impl From<serde_json::Error> for NarrativeError {
    fn from(e: serde_json::Error) -> Self {
        NarrativeError::Decode(e.to_string())
    }
}
