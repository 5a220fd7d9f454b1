//! Legal clause detectors: abusive contract patterns, tagged `domain=legal`.

use crate::model::{RiskDomain, Severity, SignalCategory};

use super::patterns;
use super::Rule;

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "irrevocable_consent",
            category: SignalCategory::Risk,
            severity: Severity::VeryHigh,
            domain: Some(RiskDomain::Legal),
            title: "Irrevocable Consent",
            explanation: "The agreement treats your consent as permanent and impossible to withdraw, removing your ability to change your mind after signing.",
            details: Some("Standard agreements allow consent to be withdrawn, usually by closing the account or giving notice."),
            matcher: |text, _| patterns::IRREVOCABLE_CONSENT.is_match(text),
        },
        Rule {
            id: "unilateral_modification",
            category: SignalCategory::Risk,
            severity: Severity::VeryHigh,
            domain: Some(RiskDomain::Legal),
            title: "Unilateral Modification Rights",
            explanation: "The other party may change the terms at any time, at its sole discretion or without notice, after you have already committed.",
            details: None,
            matcher: |text, _| patterns::UNILATERAL_MODIFICATION.is_match(text),
        },
        Rule {
            id: "retroactive_billing",
            category: SignalCategory::Risk,
            severity: Severity::High,
            domain: Some(RiskDomain::Legal),
            title: "Retroactive Billing",
            explanation: "Charges may be applied to past usage or periods that have already elapsed, leaving you exposed to bills you could not anticipate.",
            details: None,
            matcher: |text, _| patterns::RETROACTIVE_BILLING.is_match(text),
        },
        Rule {
            id: "suit_waiver",
            category: SignalCategory::Risk,
            severity: Severity::VeryHigh,
            domain: Some(RiskDomain::Legal),
            title: "Waiver of Right to Sue",
            explanation: "You give up the right to bring a lawsuit, a jury trial, or a class action, even for serious harm.",
            details: None,
            matcher: |text, _| patterns::SUIT_WAIVER.is_match(text),
        },
        Rule {
            id: "forced_arbitration",
            category: SignalCategory::Risk,
            severity: Severity::VeryHigh,
            domain: Some(RiskDomain::Legal),
            title: "Forced Arbitration",
            explanation: "Disputes must go to binding private arbitration chosen by the drafting party instead of a court.",
            details: Some("Arbitration outcomes are rarely appealable and the arbitrator is often selected and paid by the drafting party."),
            matcher: |text, _| patterns::FORCED_ARBITRATION.is_match(text),
        },
        Rule {
            id: "perpetual_data_assignment",
            category: SignalCategory::Risk,
            severity: Severity::VeryHigh,
            domain: Some(RiskDomain::Legal),
            title: "Perpetual IP or Data Assignment",
            explanation: "Your content, data, or intellectual property is licensed or assigned perpetually and irrevocably, extending beyond account closure.",
            details: None,
            matcher: |text, _| patterns::PERPETUAL_DATA_ASSIGNMENT.is_match(text),
        },
        Rule {
            id: "negligence_indemnification",
            category: SignalCategory::Risk,
            severity: Severity::VeryHigh,
            domain: Some(RiskDomain::Legal),
            title: "Indemnification of Negligence",
            explanation: "You agree to cover the other party's losses even when caused by their own negligence or errors.",
            details: None,
            matcher: |text, _| patterns::NEGLIGENCE_INDEMNIFICATION.is_match(text),
        },
        Rule {
            id: "survival_clause",
            category: SignalCategory::Risk,
            severity: Severity::High,
            domain: Some(RiskDomain::Legal),
            title: "Obligations Survive Termination",
            explanation: "Key obligations continue indefinitely after the agreement ends, so leaving the service does not end your exposure.",
            details: None,
            matcher: |text, _| patterns::SURVIVAL_CLAUSE.is_match(text),
        },
        Rule {
            id: "unlimited_liability",
            category: SignalCategory::Risk,
            severity: Severity::High,
            domain: Some(RiskDomain::Legal),
            title: "Unlimited Liability",
            explanation: "You are made liable for any and all losses, damages, or costs without a cap, while the other party's liability is typically limited elsewhere.",
            details: None,
            matcher: |text, _| patterns::UNLIMITED_LIABILITY.is_match(text),
        },
        Rule {
            id: "opaque_auto_renewal",
            category: SignalCategory::Risk,
            severity: Severity::High,
            domain: Some(RiskDomain::Legal),
            title: "Opaque Auto-Renewal",
            explanation: "The agreement renews automatically without clear notice or an obvious cancellation path.",
            details: None,
            matcher: |text, _| patterns::OPAQUE_AUTO_RENEWAL.is_match(text),
        },
        Rule {
            id: "unrestricted_data_sharing",
            category: SignalCategory::Risk,
            severity: Severity::VeryHigh,
            domain: Some(RiskDomain::Legal),
            title: "Unrestricted Data Sharing",
            explanation: "Your data may be shared, sold, or transferred to third parties without restriction or further consent.",
            details: None,
            matcher: |text, _| patterns::UNRESTRICTED_DATA_SHARING.is_match(text),
        },
        Rule {
            id: "silence_as_consent",
            category: SignalCategory::Risk,
            severity: Severity::High,
            domain: Some(RiskDomain::Legal),
            title: "Silence Treated as Consent",
            explanation: "Failing to object or respond is deemed acceptance, so changes bind you unless you actively push back.",
            details: None,
            matcher: |text, _| patterns::SILENCE_AS_CONSENT.is_match(text),
        },
    ]
}
