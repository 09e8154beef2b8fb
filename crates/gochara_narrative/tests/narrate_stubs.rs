//! `narrate` with stub generators.

use std::sync::Mutex;

use gochara_base::{CoordinateSystem, LinearAyanamsha};
use gochara_core::{LongitudeTable, Summary, SummaryOptions, summarize};
use gochara_narrative::{
    NO_CREDENTIAL_REASON, Narration, NarrativeError, NarrativeGenerator, OpenAiNarrator, narrate,
    prompt_for,
};
use gochara_time::UtcTime;

fn summary() -> Summary {
    summarize(
        &LongitudeTable::new([280.0, 10.0, 300.0, 330.0, 100.0, 70.0, 350.0]),
        &UtcTime::from_date(2025, 1, 15),
        CoordinateSystem::Sidereal,
        &LinearAyanamsha::default(),
        SummaryOptions::default(),
    )
    .unwrap()
}

/// Records prompts and answers with fixed text.
struct Echo {
    seen: Mutex<Vec<String>>,
}

impl NarrativeGenerator for Echo {
    async fn generate(&self, prompt: &str) -> Result<String, NarrativeError> {
        self.seen.lock().unwrap().push(prompt.to_string());
        Ok("The sky holds steady today.".to_string())
    }
}

struct Down;

impl NarrativeGenerator for Down {
    async fn generate(&self, _prompt: &str) -> Result<String, NarrativeError> {
        Err(NarrativeError::Status(429))
    }
}

#[tokio::test]
async fn absent_generator_degrades() {
    let s = summary();
    let n = narrate::<Echo>(&s, None).await;
    assert_eq!(
        n,
        Narration::Degraded {
            reason: NO_CREDENTIAL_REASON.to_string()
        }
    );
    assert!(n.message(&s.rendered).starts_with(&s.rendered));
}

#[tokio::test]
async fn generated_text_follows_summary() {
    let s = summary();
    let echo = Echo {
        seen: Mutex::new(Vec::new()),
    };
    let n = narrate(&s, Some(&echo)).await;
    assert_eq!(n, Narration::Generated("The sky holds steady today.".into()));
    assert_eq!(
        n.message(&s.rendered),
        format!("{}\n\nThe sky holds steady today.", s.rendered)
    );
    assert_eq!(*echo.seen.lock().unwrap(), vec![prompt_for(&s.rendered)]);
}

#[tokio::test]
async fn failure_degrades_with_reason() {
    let s = summary();
    let n = narrate(&s, Some(&Down)).await;
    match &n {
        Narration::Degraded { reason } => assert!(reason.contains("429"), "{reason}"),
        other => panic!("expected degraded, got {other:?}"),
    }
    assert!(n.message(&s.rendered).starts_with(&s.rendered));
}

#[tokio::test]
async fn deterministic_portion_unchanged_by_narration() {
    let s = summary();
    let before = s.rendered.clone();
    let _ = narrate(&s, Some(&Down)).await;
    let _ = narrate::<Down>(&s, None).await;
    assert_eq!(s.rendered, before);
}

#[tokio::test]
async fn unreachable_endpoint_degrades() {
    // Port 9 (discard) on localhost is not expected to speak HTTP.
    let narrator =
        OpenAiNarrator::new("sk-test").with_url("http://127.0.0.1:9/v1/chat/completions");
    let n = narrate(&summary(), Some(&narrator)).await;
    assert!(!n.is_generated());
}
