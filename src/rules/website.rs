//! URL/website detectors, evaluated against scraped page text and metadata.
//!
//! These rules only run through [`super::evaluator::evaluate_url`]; each still
//! degrades to a non-match when metadata is absent.

use crate::model::{RiskDomain, Severity, SignalCategory};

use super::patterns;
use super::Rule;

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "secure_connection",
            category: SignalCategory::Green,
            severity: Severity::Low,
            domain: Some(RiskDomain::Consumer),
            title: "HTTPS In Use",
            explanation: "The site serves traffic over HTTPS, the baseline expectation for any legitimate site.",
            details: None,
            matcher: |_, meta| meta.map(|m| m.is_https).unwrap_or(false),
        },
        Rule {
            id: "insecure_connection",
            category: SignalCategory::Risk,
            severity: Severity::High,
            domain: Some(RiskDomain::Consumer),
            title: "No HTTPS",
            explanation: "The site does not use HTTPS. Anything submitted to it travels unencrypted, and modern legitimate sites do not operate this way.",
            details: None,
            matcher: |_, meta| meta.map(|m| !m.is_https).unwrap_or(false),
        },
        Rule {
            id: "missing_contact_info",
            category: SignalCategory::Uncertainty,
            severity: Severity::Medium,
            domain: Some(RiskDomain::Consumer),
            title: "No Contact Information",
            explanation: "The page shows no email, phone, or address. A business you cannot contact is a business you cannot hold to anything.",
            details: None,
            matcher: |text, meta| meta.is_some() && !patterns::CONTACT_INFO.is_match(text),
        },
        Rule {
            id: "multiple_contact_channels",
            category: SignalCategory::Green,
            severity: Severity::Medium,
            domain: Some(RiskDomain::Consumer),
            title: "Multiple Contact Channels",
            explanation: "The page lists two or more ways to reach the operator (email, phone, address, contact page).",
            details: None,
            matcher: |text, meta| meta.is_some() && patterns::contact_channel_count(text) >= 2,
        },
    ]
}
