//! Generic uncertainty and green-flag detectors, applicable in any context.

use crate::model::{RiskDomain, Severity, SignalCategory};

use super::patterns;
use super::Rule;

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "vague_sender_identity",
            category: SignalCategory::Uncertainty,
            severity: Severity::Medium,
            domain: None,
            title: "Vague Sender Identity",
            explanation: "An outreach message provides no name, company, or address that would identify the sender.",
            details: None,
            matcher: |text, _| {
                text.len() > 120
                    && patterns::OUTREACH_LIKE.is_match(text)
                    && patterns::substance_marker_count(text) == 0
            },
        },
        Rule {
            id: "unverifiable_claims",
            category: SignalCategory::Uncertainty,
            severity: Severity::Medium,
            domain: None,
            title: "Unverifiable Claims",
            explanation: "Appeals to studies, research, or experts appear without any citation or source to check.",
            details: None,
            matcher: |text, _| {
                patterns::UNVERIFIABLE_CLAIMS.is_match(text) && !patterns::CITATION.is_match(text)
            },
        },
        Rule {
            id: "professional_tone_with_substance",
            category: SignalCategory::Green,
            severity: Severity::Medium,
            domain: None,
            title: "Professional Tone, Backed by Substance",
            explanation: "Professional framing is paired with at least three identity/offering markers. Tone alone is never credited.",
            details: None,
            // Explicitly NOT tone alone: requires >= 3 substance markers
            matcher: |text, _| {
                patterns::PROFESSIONAL_TONE.is_match(text)
                    && patterns::substance_marker_count(text) >= 3
            },
        },
        Rule {
            id: "verifiable_reference_number",
            category: SignalCategory::Green,
            severity: Severity::Medium,
            domain: None,
            title: "Verifiable Reference Number",
            explanation: "An order, case, or invoice number is included that can be checked against official records.",
            details: None,
            matcher: |text, _| patterns::REFERENCE_NUMBER.is_match(text),
        },
        Rule {
            id: "clear_business_context",
            category: SignalCategory::Green,
            severity: Severity::Medium,
            domain: Some(RiskDomain::Business),
            title: "Clear Business Context",
            explanation: "A budget and a timeline are both stated, which indicates a concrete, plannable engagement.",
            details: None,
            matcher: |text, _| {
                patterns::BUDGET_STATED.is_match(text) && patterns::TIMELINE_STATED.is_match(text)
            },
        },
        Rule {
            id: "specific_requirements",
            category: SignalCategory::Green,
            severity: Severity::Medium,
            domain: Some(RiskDomain::Business),
            title: "Specific Requirements",
            explanation: "Concrete requirements are spelled out rather than implied, with specifics a provider can estimate against.",
            details: None,
            matcher: |text, _| {
                patterns::REQUIREMENTS_STATED.is_match(text)
                    && patterns::CONCRETE_SPECIFICS.is_match(text)
            },
        },
        Rule {
            id: "vendor_transparency",
            category: SignalCategory::Green,
            severity: Severity::Medium,
            domain: Some(RiskDomain::Business),
            title: "Vendor Transparency",
            explanation: "Pricing, case studies, references, or a portfolio are offered openly for inspection.",
            details: None,
            matcher: |text, _| patterns::VENDOR_TRANSPARENCY.is_match(text),
        },
        Rule {
            id: "user_rights_protections",
            category: SignalCategory::Green,
            severity: Severity::Medium,
            domain: Some(RiskDomain::Legal),
            title: "Explicit User Protections",
            explanation: "The text grants explicit rights: cancellation, opt-out, refund windows, or data deletion.",
            details: None,
            matcher: |text, _| patterns::USER_RIGHTS.is_match(text),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched_ids(text: &str) -> Vec<&'static str> {
        rules()
            .iter()
            .filter(|r| (r.matcher)(text, None))
            .map(|r| r.id)
            .collect()
    }

    #[test]
    fn tone_alone_earns_no_green_flag() {
        let text = "Please find our proposal attached; we propose a phased timeline \
                    with clear deliverables and next steps.";
        assert!(!matched_ids(text).contains(&"professional_tone_with_substance"));
    }

    #[test]
    fn tone_with_substance_is_credited() {
        let text = "Please find our proposal attached. My name is Ana Sosa of Brightline LLC \
                    (ana@brightline.dev); the timeline covers 12 weeks of software development.";
        assert!(matched_ids(text).contains(&"professional_tone_with_substance"));
    }

    #[test]
    fn budget_and_deadline_give_clear_context() {
        let text = "Our budget is $25,000 and the deadline is Q3.";
        assert!(matched_ids(text).contains(&"clear_business_context"));
    }

    #[test]
    fn reference_number_is_detected() {
        let text = "Your order number: AB-12345 has shipped.";
        assert!(matched_ids(text).contains(&"verifiable_reference_number"));
    }

    #[test]
    fn studies_show_without_source_is_unverifiable() {
        assert!(matched_ids("Studies show our method works twice as well.")
            .contains(&"unverifiable_claims"));
        assert!(!matched_ids("Studies show it works, published in the Journal of Testing (2023).")
            .contains(&"unverifiable_claims"));
    }
}
