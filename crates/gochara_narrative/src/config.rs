//! Environment-driven narrative configuration.

use tracing::warn;

use crate::generator::OpenAiNarrator;

/// Credential variable. Unset or empty disables narration.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const MODEL_ENV: &str = "GOCHARA_OPENAI_MODEL";
pub const URL_ENV: &str = "GOCHARA_OPENAI_URL";
pub const TEMPERATURE_ENV: &str = "GOCHARA_OPENAI_TEMPERATURE";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

#[derive(Clone, PartialEq)]
pub struct NarrativeConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub url: String,
    pub temperature: f64,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            url: DEFAULT_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

// Keeps the credential out of logs.
impl std::fmt::Debug for NarrativeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NarrativeConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<set>"))
            .field("model", &self.model)
            .field("url", &self.url)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl NarrativeConfig {
    /// Read from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let temperature = match non_empty(TEMPERATURE_ENV) {
            None => DEFAULT_TEMPERATURE,
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(t) if t.is_finite() && t >= 0.0 => t,
                _ => {
                    warn!(var = TEMPERATURE_ENV, value = %raw, "ignoring invalid temperature");
                    DEFAULT_TEMPERATURE
                }
            },
        };

        Self {
            api_key: non_empty(API_KEY_ENV),
            model: non_empty(MODEL_ENV).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            url: non_empty(URL_ENV).unwrap_or_else(|| DEFAULT_URL.to_string()),
            temperature,
        }
    }

    /// A ready client when a credential is present.
    pub fn narrator(&self) -> Option<OpenAiNarrator> {
        self.api_key.as_ref().map(|key| {
            OpenAiNarrator::new(key.clone())
                .with_model(self.model.clone())
                .with_url(self.url.clone())
                .with_temperature(self.temperature)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let cfg = NarrativeConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg, NarrativeConfig::default());
        assert!(cfg.narrator().is_none());
    }

    #[test]
    fn empty_key_counts_as_absent() {
        let cfg = NarrativeConfig::from_lookup(lookup(&[(API_KEY_ENV, "  ")]));
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn overrides_apply() {
        let cfg = NarrativeConfig::from_lookup(lookup(&[
            (API_KEY_ENV, "sk-test"),
            (MODEL_ENV, "gpt-4o"),
            (URL_ENV, "http://localhost:9999/v1/chat/completions"),
            (TEMPERATURE_ENV, "0.2"),
        ]));
        assert_eq!(cfg.api_key.as_deref(), Some("sk-test"));
        assert_eq!(cfg.model, "gpt-4o");
        assert_eq!(cfg.url, "http://localhost:9999/v1/chat/completions");
        assert_eq!(cfg.temperature, 0.2);
        assert!(cfg.narrator().is_some());
    }

    #[test]
    fn bad_temperature_falls_back() {
        let cfg = NarrativeConfig::from_lookup(lookup(&[(TEMPERATURE_ENV, "warm")]));
        assert_eq!(cfg.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn debug_hides_key() {
        let cfg = NarrativeConfig::from_lookup(lookup(&[(API_KEY_ENV, "sk-secret")]));
        let shown = format!("{cfg:?}");
        assert!(!shown.contains("sk-secret"));
        assert!(shown.contains("<set>"));
    }
}
