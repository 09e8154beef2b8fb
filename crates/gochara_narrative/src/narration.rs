//! Graceful-degradation result of the narrative step.

use gochara_core::Summary;
use tracing::{debug, warn};

use crate::generator::NarrativeGenerator;

/// Annotation used when no credential is configured.
pub const NO_CREDENTIAL_REASON: &str = "no credential set; showing summary only";

/// Outcome of asking a generator for prose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Narration {
    /// Prose produced by the generator.
    Generated(String),
    /// No prose; `reason` is a short annotation for the user.
    Degraded { reason: String },
}

impl Narration {
    /// `"generated"` or `"degraded"`.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Generated(_) => "generated",
            Self::Degraded { .. } => "degraded",
        }
    }

    pub const fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }

    /// User-facing text. The rendered summary is always the prefix.
    pub fn message(&self, rendered: &str) -> String {
        match self {
            Self::Generated(text) => format!("{rendered}\n\n{text}"),
            Self::Degraded { reason } => format!("{rendered} ({reason})"),
        }
    }
}

/// Prompt sent to the generator for a rendered summary.
pub fn prompt_for(rendered: &str) -> String {
    format!(
        "Write a gentle 2-3 sentence reflection based on: {rendered}\n\
         Avoid predictions. Use present-focused language."
    )
}

/// Ask `generator` for a reflection on `summary`.
///
/// Never fails: a missing generator or a failed call becomes
/// [`Narration::Degraded`].
pub async fn narrate<G: NarrativeGenerator>(
    summary: &Summary,
    generator: Option<&G>,
) -> Narration {
    let Some(generator) = generator else {
        debug!("narrative disabled: no credential");
        return Narration::Degraded {
            reason: NO_CREDENTIAL_REASON.to_string(),
        };
    };

    match generator.generate(&prompt_for(&summary.rendered)).await {
        Ok(text) => Narration::Generated(text),
        Err(e) => {
            warn!(error = %e, "narrative generation failed; returning summary only");
            Narration::Degraded {
                reason: format!("narrative unavailable: {e}"),
            }
        }
    }
}
