//! Prompt construction for the summarizer

use crate::model::{AnalysisContext, BusinessPriorityAssessment, Signal, SignalCategory};

pub const SYSTEM_PREAMBLE: &str =
    "You are a careful analyst. You explain detection findings in plain language. \
     You never issue verdicts and never tell the reader what to do.";

/// Build the summary prompt from the structured findings
pub fn build_summary_prompt(
    signals: &[Signal],
    context: AnalysisContext,
    business: Option<&BusinessPriorityAssessment>,
    substance_deficit: bool,
) -> String {
    let mut findings = String::new();
    for signal in signals {
        findings.push_str(&format!(
            "- [{:?}] {}: {}\n",
            signal.category, signal.title, signal.explanation
        ));
    }
    if findings.is_empty() {
        findings.push_str("- (no patterns detected)\n");
    }

    let risk_count = signals
        .iter()
        .filter(|s| s.category == SignalCategory::Risk)
        .count();

    let mut prompt = format!(
        r#"Write a 2-4 sentence explanation of the findings below for a non-expert reader.

## Context
Detected text type: {context:?}
Risk signal count: {risk_count}

## Findings
{findings}
## Rules
- Treat the findings as final; do not re-evaluate them
- Describe what the patterns mean, not what the reader should do
- Never issue a verdict (no "this is a scam", "safe to proceed", "you should sign", "avoid this")
- Never recommend an action; the action list is produced separately
- Use declarative, factual sentences only
"#
    );

    if substance_deficit {
        prompt.push_str(
            "- The findings include a substance deficit: the message lacks verifiable \
             specifics. Acknowledge this directly instead of describing the writing \
             as professional or polished.\n",
        );
    }
    if let Some(priority) = business {
        prompt.push_str(&format!(
            "- A business priority of {:?} importance was already computed; stay \
             consistent with it without naming it as a verdict.\n",
            priority.strategic_importance
        ));
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deficit_instruction_appears_only_when_flagged() {
        let with = build_summary_prompt(&[], AnalysisContext::VendorProposal, None, true);
        let without =
            build_summary_prompt(&[], AnalysisContext::VendorProposal, None, false);
        assert!(with.contains("substance deficit"));
        assert!(!without.contains("substance deficit"));
    }

    #[test]
    fn findings_are_listed_per_signal() {
        let signals = vec![Signal::new(
            "forced_arbitration",
            SignalCategory::Risk,
            "Forced Arbitration",
            "Disputes must go to arbitration.",
        )];
        let prompt =
            build_summary_prompt(&signals, AnalysisContext::LegalAgreement, None, false);
        assert!(prompt.contains("Forced Arbitration"));
        assert!(prompt.contains("[Risk]"));
    }
}
