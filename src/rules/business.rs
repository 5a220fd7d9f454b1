//! Business-domain detectors: client-inquiry quality, substance deficit, and
//! vendor evaluation.
//!
//! The substance-deficit rules are the most consequential in the catalog: each
//! weighs a positive marker count against a negative evidence-marker count
//! with explicit thresholds. Polished language alone never passes them.

use crate::model::{RiskDomain, Severity, SignalCategory};

use super::patterns;
use super::Rule;

pub(crate) fn rules() -> Vec<Rule> {
    let mut rules = inquiry_quality_rules();
    rules.extend(substance_deficit_rules());
    rules.extend(vendor_rules());
    rules
}

fn inquiry_quality_rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "vague_inquiry",
            category: SignalCategory::Uncertainty,
            severity: Severity::Medium,
            domain: Some(RiskDomain::Business),
            title: "Vague, Low-Intent Inquiry",
            explanation: "The inquiry signals browsing rather than intent: no concrete need, scope, or question is stated.",
            details: None,
            matcher: |text, _| {
                patterns::LOW_INTENT.is_match(text) && !patterns::CONCRETE_SPECIFICS.is_match(text)
            },
        },
        Rule {
            id: "missing_context",
            category: SignalCategory::Uncertainty,
            severity: Severity::Medium,
            domain: Some(RiskDomain::Business),
            title: "No Identifying Context",
            explanation: "The sender asks about services without saying who they are, what company they represent, or what the work is for.",
            details: None,
            matcher: |text, _| {
                patterns::INQUIRY_LIKE.is_match(text) && patterns::substance_marker_count(text) == 0
            },
        },
        Rule {
            id: "unrealistic_scope",
            category: SignalCategory::Risk,
            severity: Severity::Medium,
            domain: Some(RiskDomain::Business),
            title: "Unrealistic Scope or Timeline",
            explanation: "A large deliverable is requested on a timeline no diligent provider could meet, which predicts a troubled engagement.",
            details: None,
            matcher: |text, _| {
                patterns::LARGE_SCOPE.is_match(text) && patterns::UNREALISTIC_DEADLINE.is_match(text)
            },
        },
        Rule {
            id: "process_bypass",
            category: SignalCategory::Risk,
            severity: Severity::High,
            domain: Some(RiskDomain::Business),
            title: "Process Bypass Attempt",
            explanation: "The sender asks to skip contracts, procurement, or normal channels. Bypassing process removes the protections both sides rely on.",
            details: None,
            matcher: |text, _| patterns::PROCESS_BYPASS.is_match(text),
        },
        Rule {
            id: "template_language",
            category: SignalCategory::Uncertainty,
            severity: Severity::Low,
            domain: Some(RiskDomain::Business),
            title: "Generic Template Language",
            explanation: "Greeting and framing match mass-mailed templates rather than a message written for you.",
            details: None,
            matcher: |text, _| patterns::TEMPLATE_LANGUAGE.is_match(text),
        },
    ]
}

fn substance_deficit_rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "low_substance_proposal",
            category: SignalCategory::Risk,
            severity: Severity::High,
            domain: Some(RiskDomain::Business),
            title: "Low-Substance Proposal",
            explanation: "At least four of six identity and offering markers are missing: company name, named sender, website, corporate email, a specific offering, and concrete numbers.",
            details: Some("A proposal that cannot identify its sender or offering cannot be evaluated, regardless of how it is written."),
            // Missing >= 4 of 6 markers, i.e. at most 2 present
            matcher: |text, _| {
                patterns::PROPOSAL_LIKE.is_match(text) && patterns::substance_marker_count(text) <= 2
            },
        },
        Rule {
            id: "confidence_without_evidence",
            category: SignalCategory::Risk,
            severity: Severity::Medium,
            domain: Some(RiskDomain::Business),
            title: "Confidence Without Evidence",
            explanation: "Two or more assertive claims (industry-leading, award-winning, ...) appear with zero proof markers such as case studies, named clients, or figures.",
            details: None,
            matcher: |text, _| {
                patterns::assertive_count(text) >= 2 && !patterns::PROOF_MARKERS.is_match(text)
            },
        },
        Rule {
            id: "vague_value_proposition",
            category: SignalCategory::Uncertainty,
            severity: Severity::Medium,
            domain: Some(RiskDomain::Business),
            title: "Vague Value Proposition",
            explanation: "Two or more buzzword families appear without a single concrete specific (price, percentage, deliverable, or timeline).",
            details: None,
            matcher: |text, _| {
                patterns::buzzword_count(text) >= 2 && !patterns::CONCRETE_SPECIFICS.is_match(text)
            },
        },
        Rule {
            id: "urgency_without_substance",
            category: SignalCategory::Risk,
            severity: Severity::High,
            domain: Some(RiskDomain::Business),
            title: "Urgency Without Substance",
            explanation: "The message pushes for a fast decision while providing almost none of the markers that would let you verify it.",
            details: None,
            matcher: |text, _| {
                patterns::URGENCY.is_match(text)
                    && !patterns::ADVANCE_NOTICE.is_match(text)
                    && patterns::substance_marker_count(text) <= 2
            },
        },
        Rule {
            id: "unverifiable_identity",
            category: SignalCategory::Risk,
            severity: Severity::High,
            domain: Some(RiskDomain::Business),
            title: "Unverifiable Sender Identity",
            explanation: "No website, LinkedIn, corporate email, or legal company name is provided; there is no way to verify who is reaching out.",
            details: None,
            matcher: |text, _| {
                patterns::PROPOSAL_LIKE.is_match(text) && patterns::verifiability_count(text) == 0
            },
        },
        Rule {
            id: "compliance_without_verification",
            category: SignalCategory::Uncertainty,
            severity: Severity::Medium,
            domain: Some(RiskDomain::Business),
            title: "Compliance Claimed, Not Evidenced",
            explanation: "Compliance standards are invoked (GDPR, SOC 2, ISO 27001, ...) without a certificate, audit, or attestation to back them.",
            details: None,
            matcher: |text, _| {
                patterns::COMPLIANCE_MENTION.is_match(text)
                    && !patterns::COMPLIANCE_EVIDENCE.is_match(text)
            },
        },
        Rule {
            id: "vague_authority",
            category: SignalCategory::Uncertainty,
            severity: Severity::Medium,
            domain: Some(RiskDomain::Business),
            title: "Vague Authority Framing",
            explanation: "Requirements are attributed to an unnamed team, policy, or industry standard rather than a person or document you could consult.",
            details: None,
            matcher: |text, _| patterns::VAGUE_AUTHORITY.is_match(text),
        },
    ]
}

fn vendor_rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "asymmetric_obligations",
            category: SignalCategory::Risk,
            severity: Severity::High,
            domain: Some(RiskDomain::Business),
            title: "Asymmetric Obligations",
            explanation: "The terms bind you with musts and shalls while the provider commits to nothing comparable.",
            details: None,
            matcher: |text, _| {
                patterns::CLIENT_OBLIGATIONS.is_match(text)
                    && !patterns::PROVIDER_COMMITMENTS.is_match(text)
            },
        },
        Rule {
            id: "missing_commercial_safeguards",
            category: SignalCategory::Uncertainty,
            severity: Severity::Medium,
            domain: Some(RiskDomain::Business),
            title: "No Commercial Safeguards",
            explanation: "A commercial offer is made with no mention of SLA, support, warranty, or refund terms.",
            details: None,
            matcher: |text, _| {
                patterns::VENDOR_LIKE.is_match(text)
                    && !patterns::COMMERCIAL_SAFEGUARDS.is_match(text)
            },
        },
        Rule {
            id: "overpromising_without_evidence",
            category: SignalCategory::Risk,
            severity: Severity::Medium,
            domain: Some(RiskDomain::Business),
            title: "Overpromising Without Evidence",
            explanation: "Specific outcomes are guaranteed (rankings, ROI, overnight growth) without any supporting evidence.",
            details: None,
            matcher: |text, _| {
                patterns::OVERPROMISE.is_match(text) && !patterns::PROOF_MARKERS.is_match(text)
            },
        },
        Rule {
            id: "credibility_gap",
            category: SignalCategory::Uncertainty,
            severity: Severity::Medium,
            domain: Some(RiskDomain::Business),
            title: "Credibility Gap",
            explanation: "Claims of large scale (thousands of clients, Fortune 500) are made by a sender who provides no verifiable identity.",
            details: None,
            matcher: |text, _| {
                patterns::SCALE_CLAIMS.is_match(text) && patterns::verifiability_count(text) == 0
            },
        },
        Rule {
            id: "lock_in_risk",
            category: SignalCategory::Risk,
            severity: Severity::High,
            domain: Some(RiskDomain::Business),
            title: "Lock-In Risk",
            explanation: "Minimum terms, early-termination fees, or non-cancellable commitments make it costly to leave if the relationship sours.",
            details: None,
            matcher: |text, _| patterns::LOCK_IN.is_match(text),
        },
        Rule {
            id: "no_refund_terms",
            category: SignalCategory::Risk,
            severity: Severity::Medium,
            domain: Some(RiskDomain::Business),
            title: "No-Refund Terms",
            explanation: "All sales are final; nothing is recoverable if the service disappoints or is never delivered.",
            details: None,
            matcher: |text, _| patterns::NO_REFUND.is_match(text),
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
    fn polished_pitch_without_identity_is_low_substance() {
        let text = "We are an industry-leading, award-winning agency offering \
                    best-in-class solutions. We specialize in growth. Let's talk.";
        let ids = matched_ids(text);
        assert!(ids.contains(&"low_substance_proposal"));
        assert!(ids.contains(&"confidence_without_evidence"));
        assert!(ids.contains(&"unverifiable_identity"));
    }

    #[test]
    fn identified_inquiry_has_no_deficit_signals() {
        let text = "Hello, my name is Dana Reyes from Northwind Logistics Inc. \
                    (dana@northwindlogistics.com, https://northwindlogistics.com). \
                    We need a customer portal; our budget is $40,000 over 4 months.";
        let ids = matched_ids(text);
        for id in crate::rules::SUBSTANCE_DEFICIT_IDS {
            assert!(!ids.contains(id), "{id} should not fire: {ids:?}");
        }
    }

    #[test]
    fn assertive_claims_with_proof_are_not_flagged() {
        let text = "We are an industry-leading and award-winning firm; see our case studies \
                    and clients such as regional hospitals.";
        assert!(!matched_ids(text).contains(&"confidence_without_evidence"));
    }

    #[test]
    fn buzzwords_without_specifics_are_vague() {
        let text = "Our synergy-driven, cutting-edge approach will leverage disruptive methods.";
        assert!(matched_ids(text).contains(&"vague_value_proposition"));
    }

    #[test]
    fn buzzwords_with_deliverables_are_tolerated() {
        let text = "Our cutting-edge, disruptive platform ships these deliverables: \
                    a milestone plan and a $12,000 fixed price.";
        assert!(!matched_ids(text).contains(&"vague_value_proposition"));
    }

    #[test]
    fn lock_in_and_no_refund_detected() {
        let text = "Plans require a 24-month minimum commitment and all sales are final.";
        let ids = matched_ids(text);
        assert!(ids.contains(&"lock_in_risk"));
        assert!(ids.contains(&"no_refund_terms"));
    }

    #[test]
    fn process_bypass_detected() {
        let ids = matched_ids("Let's skip the paperwork and you can pay in cash.");
        assert!(ids.contains(&"process_bypass"));
    }
}
