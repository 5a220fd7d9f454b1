//! Summarization: LLM-generated explanatory prose with a deterministic local
//! fallback.
//!
//! Behavioral contract for the generated summary: 2-4 sentences, never a
//! verdict, never a recommendation, and a detected substance deficit must be
//! acknowledged rather than papered over with praise for the writing.

mod fallback;
mod prompts;

pub use fallback::fallback_summary;

use rig::client::CompletionClient;

use crate::model::{AnalysisContext, AnalysisSummary, BusinessPriorityAssessment, Signal};
use crate::service::business::has_significant_substance_deficit;
use crate::service::llm::LlmClient;

/// Verdict and recommendation phrases that trigger regeneration
const BANNED_PHRASES: &[&str] = &[
    "this is a scam",
    "safe to proceed",
    "you should sign",
    "do not sign",
    "you should avoid",
    "avoid this",
    "we recommend",
    "i recommend",
    "you should",
];

/// Praise phrases that are invalid when a substance deficit is present
const PRAISE_PHRASES: &[&str] = &["professional", "polished", "well-written", "impressive"];

const MAX_RETRIES: usize = 2;

#[derive(serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
struct SummaryDraft {
    /// 2-4 sentence explanation of the findings
    summary: String,
}

/// Summary generator. Without an LLM client it always produces the local
/// fallback; with one, the fallback still backs every failed generation.
pub struct SummaryService {
    llm: Option<LlmClient>,
    model: String,
}

impl SummaryService {
    pub fn new(llm: Option<LlmClient>, model: String) -> Self {
        Self { llm, model }
    }

    pub async fn summarize(
        &self,
        signals: &[Signal],
        context: AnalysisContext,
        business: Option<&BusinessPriorityAssessment>,
    ) -> AnalysisSummary {
        let mut result = fallback_summary(signals, context, business);

        let Some(llm) = &self.llm else {
            return result;
        };

        let deficit = has_significant_substance_deficit(signals);
        match self.generate(llm, signals, context, business, deficit).await {
            Ok(summary) => {
                result.summary = summary;
                result.model_used = self.model.clone();
                result.fallback = false;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Summary generation failed, using fallback");
            }
        }
        result
    }

    async fn generate(
        &self,
        llm: &LlmClient,
        signals: &[Signal],
        context: AnalysisContext,
        business: Option<&BusinessPriorityAssessment>,
        deficit: bool,
    ) -> Result<String, String> {
        let prompt = prompts::build_summary_prompt(signals, context, business, deficit);

        let extractor = llm
            .openai_client()
            .extractor::<SummaryDraft>(&self.model)
            .preamble(prompts::SYSTEM_PREAMBLE)
            .build();

        for attempt in 1..=MAX_RETRIES {
            match extractor.extract(&prompt).await {
                Ok(draft) => match validate_summary(&draft.summary, deficit) {
                    Ok(()) => return Ok(draft.summary),
                    Err(reason) => {
                        tracing::warn!(
                            attempt,
                            reason,
                            "Generated summary failed validation, regenerating"
                        );
                    }
                },
                Err(e) => {
                    tracing::debug!(attempt, error = %e, "Summary extraction failed");
                    if attempt == MAX_RETRIES {
                        return Err(e.to_string());
                    }
                }
            }
        }
        Err("no valid summary after retries".to_string())
    }
}

/// Enforce the behavioral contract on a generated summary
fn validate_summary(summary: &str, substance_deficit: bool) -> Result<(), &'static str> {
    let sentences = sentence_count(summary);
    if !(2..=4).contains(&sentences) {
        return Err("summary is not 2-4 sentences");
    }

    let lower = summary.to_lowercase();
    if BANNED_PHRASES.iter().any(|p| lower.contains(p)) {
        return Err("summary contains a verdict or recommendation");
    }

    if substance_deficit {
        let acknowledges = ["substance", "specific", "verifiable", "unverified", "vague"]
            .iter()
            .any(|marker| lower.contains(marker));
        let praises = PRAISE_PHRASES.iter().any(|p| lower.contains(p));
        if !acknowledges || praises {
            return Err("summary does not acknowledge the substance deficit");
        }
    }

    Ok(())
}

fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|part| !part.trim().is_empty())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SignalCategory;

    #[test]
    fn verdicts_are_rejected() {
        let text = "Three risk patterns were found. This is a scam.";
        assert!(validate_summary(text, false).is_err());
    }

    #[test]
    fn recommendations_are_rejected() {
        let text = "Several clauses shift risk to you. We recommend declining.";
        assert!(validate_summary(text, false).is_err());
    }

    #[test]
    fn sentence_range_is_enforced() {
        assert!(validate_summary("One sentence only.", false).is_err());
        let five = "One. Two. Three. Four. Five.";
        assert!(validate_summary(five, false).is_err());
        let three = "The text contains three risk patterns. Each shifts control away \
                     from the reader. No positive markers offset them.";
        assert!(validate_summary(three, false).is_ok());
    }

    #[test]
    fn deficit_summaries_must_acknowledge_the_deficit() {
        let praise = "The message reads as professional outreach. It names a broad \
                      set of services.";
        assert!(validate_summary(praise, true).is_err());

        let honest = "The message asserts strong results without verifiable specifics. \
                      No company identity can be confirmed from the text.";
        assert!(validate_summary(honest, true).is_ok());
    }

    #[tokio::test]
    async fn without_llm_the_fallback_is_used() {
        let service = SummaryService::new(None, "gpt-4o-mini".to_string());
        let signals = vec![Signal::new(
            "forced_arbitration",
            SignalCategory::Risk,
            "Forced Arbitration",
            "Disputes must go to arbitration.",
        )];
        let summary = service
            .summarize(&signals, AnalysisContext::LegalAgreement, None)
            .await;
        assert!(summary.fallback);
        assert_eq!(summary.model_used, "fallback");
    }
}
