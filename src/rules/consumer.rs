//! Consumer/scam detectors, tagged `domain=consumer`.

use crate::model::{RiskDomain, Severity, SignalCategory};

use super::patterns;
use super::Rule;

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "urgency_language",
            category: SignalCategory::Risk,
            severity: Severity::High,
            domain: Some(RiskDomain::Consumer),
            title: "Urgency Pressure",
            explanation: "The message pushes you to act immediately. Time pressure is used to bypass careful reading and independent verification.",
            details: Some("Urgency tied to documented advance notice (e.g. \"30 days' notice\") is not flagged."),
            // Risk only when no advance-notice language mitigates the pressure
            matcher: |text, _| {
                patterns::URGENCY.is_match(text) && !patterns::ADVANCE_NOTICE.is_match(text)
            },
        },
        Rule {
            id: "unusual_payment_method",
            category: SignalCategory::Risk,
            severity: Severity::VeryHigh,
            domain: Some(RiskDomain::Consumer),
            title: "Untraceable Payment Requested",
            explanation: "Payment is requested via gift cards, wire transfer, or cryptocurrency. These channels are irreversible and favored by fraud.",
            details: None,
            matcher: |text, _| patterns::UNUSUAL_PAYMENT.is_match(text),
        },
        Rule {
            id: "too_good_to_be_true",
            category: SignalCategory::Risk,
            severity: Severity::High,
            domain: Some(RiskDomain::Consumer),
            title: "Too Good to Be True",
            explanation: "Guaranteed returns, risk-free profits, or prize winnings are promised. Legitimate offers do not eliminate risk.",
            details: None,
            matcher: |text, _| patterns::TOO_GOOD_TO_BE_TRUE.is_match(text),
        },
        Rule {
            id: "impersonation_language",
            category: SignalCategory::Risk,
            severity: Severity::High,
            domain: Some(RiskDomain::Consumer),
            title: "Possible Impersonation",
            explanation: "The message claims to come from a bank, government agency, or large company, paired with account-threat language typical of phishing.",
            details: None,
            matcher: |text, _| patterns::IMPERSONATION.is_match(text),
        },
        Rule {
            id: "sensitive_info_request",
            category: SignalCategory::Risk,
            severity: Severity::VeryHigh,
            domain: Some(RiskDomain::Consumer),
            title: "Sensitive Information Requested",
            explanation: "You are asked to provide or confirm passwords, account numbers, or identity data. Legitimate organizations do not collect these over unsolicited messages.",
            details: None,
            matcher: |text, _| patterns::SENSITIVE_INFO_REQUEST.is_match(text),
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
    fn gift_card_scam_trips_three_rules() {
        let text = "Dear Sir, we guarantee 100% risk-free returns, \
                    send payment via gift card within 24 hours";
        let ids = matched_ids(text);
        assert!(ids.contains(&"too_good_to_be_true"));
        assert!(ids.contains(&"unusual_payment_method"));
        assert!(ids.contains(&"urgency_language"));
    }

    #[test]
    fn urgency_with_advance_notice_is_mitigated() {
        let text = "Act now to keep your plan; we will provide 30 days' advance notice \
                    before any change takes effect.";
        assert!(!matched_ids(text).contains(&"urgency_language"));
    }

    #[test]
    fn password_confirmation_request_is_flagged() {
        let ids = matched_ids("Please confirm your password and card number to continue.");
        assert!(ids.contains(&"sensitive_info_request"));
    }
}
