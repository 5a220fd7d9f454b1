//! Context classification: which of the six analysis contexts does the text
//! belong to, and which risk domain dominates.
//!
//! This is a first-match cascade, not a scored vote. Legal and partnership
//! language override everything else because their consequences are treated
//! as most severe; `general` is the floor.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{AnalysisContext, RiskDomain, Signal, SignalCategory};

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("invalid context pattern")
}

static LEGAL_MARKERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)terms\s+of\s+(service|use)",
        r"(?i)terms\s+and\s+conditions",
        r"(?i)user\s+agreement",
        r"(?i)privacy\s+policy",
        r"(?i)this\s+agreement",
        r"(?i)\bhereinafter\b|\bherein\b",
        r"(?i)binding\s+arbitration",
        r"(?i)governed\s+by\s+the\s+laws",
        r"(?i)\bindemnif\w+",
        r"(?i)intellectual\s+property",
        r"(?i)liability\s+waiver|limitation\s+of\s+liability",
    ]
    .iter()
    .map(|p| re(p))
    .collect()
});

/// Single markers strong enough to classify as legal on their own
static LEGAL_DEFINITIVE: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)terms\s+of\s+(service|use)|user\s+agreement|terms\s+and\s+conditions"));

static PARTNERSHIP: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)\bpartnership\b|strategic\s+alliance|joint\s+venture|collaborat\w+\s+(opportunity|proposal)|mutually\s+beneficial|partner\s+with\s+(you|your)")
});

static CLIENT_INQUIRY: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)interested\s+in\s+your\s+(services|products?|work)",
        r"(?i)(request|requesting)\s+(a\s+)?(quote|proposal|estimate|demo)",
        r"(?i)would\s+like\s+a\s+(quote|proposal|estimate)",
        r"(?i)\b(inquiry|enquiry)\b",
        r"(?i)looking\s+to\s+hire",
        r"(?i)need\s+help\s+with",
        r"(?i)can\s+you\s+(build|develop|design|help|deliver)",
        r"(?i)what\s+(are|is)\s+your\s+(rates?|pricing|availability)",
        r"(?i)our\s+budget\b|budget\s+(of|is|:)",
        r"(?i)we\s+(need|require|are\s+looking\s+for)",
        r"(?i)scope\s+of\s+work",
        r"(?i)\bdeliverables?\b",
        r"(?i)project\s+(timeline|deadline|scope)",
        r"(?i)\bengagement\b",
        r"(?i)do\s+you\s+(offer|provide|support)",
    ]
    .iter()
    .map(|p| re(p))
    .collect()
});

static VENDOR: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)\bour\s+(services|products?|platform|solution|offering)\b|we\s+(offer|provide|specialize|deliver)|pricing\s+(plans?|tiers?)|free\s+trial|\b(vendor|supplier)\b|per\s+(month|user|seat)")
});

/// Infer the context of the input. Pure function of (text, signals).
pub fn classify_context(content: &str, signals: &[Signal]) -> AnalysisContext {
    // Contract language is recognized by its own markers or by the signals it
    // produced: two legal-domain risk signals mean the text reads as an
    // agreement even when it avoids the usual boilerplate phrases.
    let legal_hits = LEGAL_MARKERS.iter().filter(|m| m.is_match(content)).count();
    let legal_risk_signals = signals
        .iter()
        .filter(|s| {
            s.category == SignalCategory::Risk && s.domain == Some(RiskDomain::Legal)
        })
        .count();
    if legal_hits >= 2 || LEGAL_DEFINITIVE.is_match(content) || legal_risk_signals >= 2 {
        return AnalysisContext::LegalAgreement;
    }

    if PARTNERSHIP.is_match(content) {
        return AnalysisContext::PartnershipOffer;
    }

    if CLIENT_INQUIRY.iter().any(|m| m.is_match(content)) {
        return AnalysisContext::ClientInquiry;
    }

    if VENDOR.is_match(content) {
        return AnalysisContext::VendorProposal;
    }

    let has_consumer_risk = signals.iter().any(|s| {
        s.category == SignalCategory::Risk && s.domain == Some(RiskDomain::Consumer)
    });
    if has_consumer_risk {
        return AnalysisContext::ConsumerMessage;
    }

    // Business-flavored signals without inquiry phrasing still read as an
    // inquiry, the broadest business context
    if signals.iter().any(|s| s.domain == Some(RiskDomain::Business)) {
        return AnalysisContext::ClientInquiry;
    }

    AnalysisContext::General
}

/// Aggregate domain of the whole analysis. Context overrides win; otherwise
/// the domain with the most signals, ties broken legal > business > consumer.
pub fn primary_domain(signals: &[Signal], context: AnalysisContext) -> RiskDomain {
    match context {
        AnalysisContext::LegalAgreement => return RiskDomain::Legal,
        AnalysisContext::ClientInquiry
        | AnalysisContext::VendorProposal
        | AnalysisContext::PartnershipOffer => return RiskDomain::Business,
        AnalysisContext::ConsumerMessage => return RiskDomain::Consumer,
        AnalysisContext::General => {}
    }

    let count = |domain: RiskDomain| signals.iter().filter(|s| s.domain == Some(domain)).count();

    let legal = count(RiskDomain::Legal);
    let business = count(RiskDomain::Business);
    let consumer = count(RiskDomain::Consumer);

    if legal >= business && legal >= consumer && legal > 0 {
        RiskDomain::Legal
    } else if business >= consumer && business > 0 {
        RiskDomain::Business
    } else if consumer > 0 {
        RiskDomain::Consumer
    } else {
        RiskDomain::Consumer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;
    use crate::rules::evaluate_text;

    #[test]
    fn terms_of_service_is_legal_on_its_own() {
        let context = classify_context("Welcome to our Terms of Service.", &[]);
        assert_eq!(context, AnalysisContext::LegalAgreement);
    }

    #[test]
    fn legal_overrides_inquiry_phrasing() {
        let text = "This Agreement is governed by the laws of Delaware. \
                    We need help with indemnification terms.";
        assert_eq!(classify_context(text, &[]), AnalysisContext::LegalAgreement);
    }

    #[test]
    fn stacked_legal_signals_classify_as_legal_without_boilerplate() {
        let text = "By signing you give irrevocable consent. Disputes go to binding \
                    arbitration and you waive your right to sue.";
        let signals = evaluate_text(text);
        assert_eq!(
            classify_context(text, &signals),
            AnalysisContext::LegalAgreement
        );
    }

    #[test]
    fn partnership_language_beats_vendor_language() {
        let text = "We offer a strategic alliance that would be mutually beneficial.";
        assert_eq!(classify_context(text, &[]), AnalysisContext::PartnershipOffer);
    }

    #[test]
    fn scam_text_classifies_as_consumer_message() {
        let text = "Dear Sir, we guarantee 100% risk-free returns, \
                    send payment via gift card within 24 hours";
        let signals = evaluate_text(text);
        assert_eq!(
            classify_context(text, &signals),
            AnalysisContext::ConsumerMessage
        );
    }

    #[test]
    fn vendor_pitch_classifies_as_vendor_proposal() {
        let text = "We specialize in growth marketing. Our platform comes with a free trial.";
        assert_eq!(classify_context(text, &[]), AnalysisContext::VendorProposal);
    }

    #[test]
    fn inquiry_with_budget_is_client_inquiry() {
        let text = "We are looking for a development partner for a portal; our budget is $40k.";
        // "partner" alone is not partnership framing
        assert_eq!(classify_context(text, &[]), AnalysisContext::ClientInquiry);
    }

    #[test]
    fn empty_everything_is_general() {
        assert_eq!(classify_context("hello there", &[]), AnalysisContext::General);
    }

    #[test]
    fn context_overrides_drive_primary_domain() {
        assert_eq!(
            primary_domain(&[], AnalysisContext::LegalAgreement),
            RiskDomain::Legal
        );
        assert_eq!(
            primary_domain(&[], AnalysisContext::VendorProposal),
            RiskDomain::Business
        );
        assert_eq!(
            primary_domain(&[], AnalysisContext::ConsumerMessage),
            RiskDomain::Consumer
        );
    }

    #[test]
    fn general_context_counts_domains_with_legal_tie_break() {
        use crate::model::{Signal, SignalCategory};
        let signals = vec![
            Signal::new("a", SignalCategory::Risk, "a", "a")
                .with_severity(Severity::High)
                .with_domain(RiskDomain::Legal),
            Signal::new("b", SignalCategory::Risk, "b", "b")
                .with_severity(Severity::High)
                .with_domain(RiskDomain::Business),
        ];
        assert_eq!(
            primary_domain(&signals, AnalysisContext::General),
            RiskDomain::Legal
        );
    }
}
