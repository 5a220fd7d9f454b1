//! Deterministic local summary, used whenever the LLM is unavailable or its
//! output fails validation

use crate::model::{
    AnalysisContext, AnalysisSummary, BusinessPriorityAssessment, Signal, SignalCategory,
    StrategicImportance,
};

pub const FALLBACK_MODEL_NAME: &str = "fallback";

/// Concern tier derived from the number of risk signals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcernTier {
    Critical,
    High,
    Moderate,
    Low,
}

pub fn concern_tier(signals: &[Signal]) -> ConcernTier {
    let risk_count = signals
        .iter()
        .filter(|s| s.category == SignalCategory::Risk)
        .count();
    match risk_count {
        n if n >= 6 => ConcernTier::Critical,
        n if n >= 3 => ConcernTier::High,
        n if n >= 1 => ConcernTier::Moderate,
        _ => ConcernTier::Low,
    }
}

/// Build the templated three-part summary from signal counts and context
pub fn fallback_summary(
    signals: &[Signal],
    context: AnalysisContext,
    business: Option<&BusinessPriorityAssessment>,
) -> AnalysisSummary {
    let tier = concern_tier(signals);
    let risk_count = signals
        .iter()
        .filter(|s| s.category == SignalCategory::Risk)
        .count();
    let uncertainty_count = signals
        .iter()
        .filter(|s| s.category == SignalCategory::Uncertainty)
        .count();
    let green_count = signals
        .iter()
        .filter(|s| s.category == SignalCategory::Green)
        .count();

    let opening = match (tier, context) {
        (ConcernTier::Low, _) => {
            "The text shows no significant warning patterns.".to_string()
        }
        (_, AnalysisContext::LegalAgreement) => format!(
            "This agreement contains {risk_count} clause pattern{} that shift risk or \
             control toward the drafting party.",
            plural(risk_count)
        ),
        (_, AnalysisContext::ConsumerMessage) => format!(
            "This message carries {risk_count} pattern{} commonly seen in deceptive \
             or high-pressure outreach.",
            plural(risk_count)
        ),
        (_, c) if c.is_business() => format!(
            "This business communication triggered {risk_count} warning pattern{}.",
            plural(risk_count)
        ),
        _ => format!(
            "The text triggered {risk_count} warning pattern{}.",
            plural(risk_count)
        ),
    };

    let mut summary = opening;
    if uncertainty_count > 0 {
        summary.push_str(&format!(
            " {uncertainty_count} point{} could not be verified from the text alone.",
            plural(uncertainty_count)
        ));
    }
    if green_count > 0 {
        summary.push_str(&format!(
            " {green_count} positive indicator{} partially offset the picture.",
            plural(green_count)
        ));
    }
    if let Some(priority) = business {
        if priority.strategic_importance == StrategicImportance::Low {
            summary.push_str(
                " The lack of verifiable specifics, not the tone, drives this result.",
            );
        }
    }

    let what_you_might_miss = what_you_might_miss(signals, tier, context);
    let recommended_actions = recommended_actions(tier, context, business);

    AnalysisSummary {
        summary,
        what_you_might_miss,
        recommended_actions,
        model_used: FALLBACK_MODEL_NAME.to_string(),
        fallback: true,
    }
}

fn what_you_might_miss(
    signals: &[Signal],
    tier: ConcernTier,
    context: AnalysisContext,
) -> String {
    if tier == ConcernTier::Low {
        return "Absence of warning patterns is not proof of legitimacy. Independent \
                verification of the sender still applies."
            .to_string();
    }

    // Lead with the most severe risk the reader may have skimmed past
    let top_risk = signals
        .iter()
        .filter(|s| s.category == SignalCategory::Risk)
        .min_by_key(|s| s.effective_severity().priority());

    let mut text = match top_risk {
        Some(signal) => format!(
            "The most consequential finding is \"{}\": {}",
            signal.title, signal.explanation
        ),
        None => "Several points could not be verified from the text alone.".to_string(),
    };

    match context {
        AnalysisContext::LegalAgreement => text.push_str(
            " Clauses like this are routinely buried in boilerplate and survive \
             casual reading.",
        ),
        AnalysisContext::ConsumerMessage => text.push_str(
            " Pressure tactics work precisely because they feel urgent in the moment.",
        ),
        c if c.is_business() => text.push_str(
            " Polished language is often mistaken for substance when skimming.",
        ),
        _ => {}
    }
    text
}

fn recommended_actions(
    tier: ConcernTier,
    context: AnalysisContext,
    business: Option<&BusinessPriorityAssessment>,
) -> Vec<String> {
    let mut actions = Vec::new();

    match context {
        AnalysisContext::LegalAgreement => {
            actions.push(
                "Read the flagged clauses in the original document before agreeing"
                    .to_string(),
            );
            if matches!(tier, ConcernTier::Critical | ConcernTier::High) {
                actions.push(
                    "Have a qualified professional review the rights you would be \
                     giving up"
                        .to_string(),
                );
            }
        }
        AnalysisContext::ConsumerMessage => {
            actions.push(
                "Verify the sender through an independent channel, not the contact \
                 details in the message"
                    .to_string(),
            );
            if matches!(tier, ConcernTier::Critical | ConcernTier::High) {
                actions.push(
                    "Do not send payment or personal information until identity is \
                     confirmed"
                        .to_string(),
                );
            }
        }
        c if c.is_business() => {
            actions.push(
                "Ask for verifiable specifics: company name, named contact, and a \
                 reachable reference"
                    .to_string(),
            );
            if let Some(priority) = business {
                actions.extend(priority.comparative_advice.iter().cloned());
            }
        }
        _ => {
            actions.push(
                "Cross-check any factual claims against a source you choose yourself"
                    .to_string(),
            );
        }
    }

    if tier == ConcernTier::Low {
        actions.push("No urgent action is indicated by the text itself".to_string());
    }
    actions.truncate(4);
    actions
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
