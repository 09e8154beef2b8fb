//! Narrative generator capability and the OpenAI chat-completions client.

use std::future::Future;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_URL};
use crate::error::NarrativeError;

/// Turns a prompt into prose.
pub trait NarrativeGenerator: Send + Sync {
    fn generate(&self, prompt: &str)
    -> impl Future<Output = Result<String, NarrativeError>> + Send;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

/// Extract `choices[0].message.content`, trimmed.
fn first_choice_text(body: &str) -> Result<String, NarrativeError> {
    let parsed: ChatResponse = serde_json::from_str(body)?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or(NarrativeError::EmptyResponse)
}

/// Chat-completions client authenticated with a bearer token.
#[derive(Clone)]
pub struct OpenAiNarrator {
    http: Client,
    api_key: String,
    model: String,
    url: String,
    temperature: f64,
}

impl std::fmt::Debug for OpenAiNarrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiNarrator")
            .field("model", &self.model)
            .field("url", &self.url)
            .field("temperature", &self.temperature)
            .finish_non_exhaustive()
    }
}

impl OpenAiNarrator {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            url: DEFAULT_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

impl NarrativeGenerator for OpenAiNarrator {
    async fn generate(&self, prompt: &str) -> Result<String, NarrativeError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
        };
        debug!(model = %self.model, url = %self.url, "requesting narrative");

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NarrativeError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        first_choice_text(&body)
    }
}
