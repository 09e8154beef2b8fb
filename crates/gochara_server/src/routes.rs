//! Router, shared state and handlers.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use gochara_base::{CoordinateSystem, LinearAyanamsha};
use gochara_core::{SnapshotProvider, Summary, SummaryOptions, summarize};
use gochara_narrative::{NarrativeGenerator, narrate};
use gochara_time::UtcTime;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

use crate::config::ServerConfig;
use crate::error::ApiError;

/// Immutable per-process state shared by all requests.
pub struct AppState<P, G> {
    pub provider: P,
    pub narrator: Option<G>,
    pub ayanamsha: LinearAyanamsha,
    pub options: SummaryOptions,
    pub instant: Option<UtcTime>,
}

impl<P, G> AppState<P, G> {
    pub fn new(provider: P, narrator: Option<G>, config: &ServerConfig) -> Self {
        Self {
            provider,
            narrator,
            ayanamsha: config.ayanamsha,
            options: SummaryOptions {
                nakshatras: config.nakshatras,
            },
            instant: config.instant,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct InsightQuery {
    pub system: Option<String>,
    pub debug: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InsightResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narration: Option<&'static str>,
}

pub fn router<P, G>(state: Arc<AppState<P, G>>) -> Router
where
    P: SnapshotProvider + 'static,
    G: NarrativeGenerator + 'static,
{
    Router::new()
        .route("/api/insight", get(insight::<P, G>))
        .route("/health", get(health))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn insight<P, G>(
    State(state): State<Arc<AppState<P, G>>>,
    Query(query): Query<InsightQuery>,
) -> Result<Json<InsightResponse>, ApiError>
where
    P: SnapshotProvider + 'static,
    G: NarrativeGenerator + 'static,
{
    let system = match query.system.as_deref() {
        Some(raw) => raw.parse::<CoordinateSystem>()?,
        None => CoordinateSystem::default(),
    };
    let with_debug = match query.debug.as_deref() {
        Some(raw) => parse_flag("debug", raw)?,
        None => false,
    };
    let utc = state.instant.unwrap_or_else(UtcTime::now);
    debug!(%system, %utc, with_debug, "insight request");

    let table = state.provider.snapshot(&utc).await?;
    let summary = summarize(&table, &utc, system, &state.ayanamsha, state.options)?;
    let narration = narrate(&summary, state.narrator.as_ref()).await;

    Ok(Json(InsightResponse {
        message: narration.message(&summary.rendered),
        narration: with_debug.then(|| narration.kind()),
        summary: with_debug.then_some(summary),
    }))
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ApiError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        _ => Err(ApiError::InvalidFlag {
            name,
            value: raw.to_string(),
        }),
    }
}
