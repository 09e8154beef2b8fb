//! Narrative embellishment of a rendered summary.
//!
//! The deterministic summary is always produced first. A language model may
//! then add a short reflection; when it is unavailable the summary is
//! returned with an annotation instead of an error (see [`Narration`]).

pub mod config;
pub mod error;
pub mod generator;
pub mod narration;

pub use config::{
    API_KEY_ENV, DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_URL, MODEL_ENV, NarrativeConfig,
    TEMPERATURE_ENV, URL_ENV,
};
pub use error::NarrativeError;
pub use generator::{NarrativeGenerator, OpenAiNarrator};
pub use narration::{NO_CREDENTIAL_REASON, Narration, narrate, prompt_for};
