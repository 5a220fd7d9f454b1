//! Declarative rule catalog and evaluator.
//!
//! Each rule is a fixed `{id, category, severity, domain, predicate}` record
//! with fixed explanatory text; the catalog is assembled once at first use and
//! evaluated by a single shared loop in [`evaluator`]. Rules are pure and
//! stateless: a matcher may not panic, and missing URL metadata degrades to a
//! non-match.

pub mod business;
pub mod consumer;
pub mod evaluator;
pub mod generic;
pub mod legal;
pub mod patterns;
pub mod website;

use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::model::{RiskDomain, Severity, Signal, SignalCategory, UrlMetadata};

pub use evaluator::{evaluate_text, evaluate_url, sort_signals};

/// One catalog entry: a named predicate with fixed explanatory text
pub struct Rule {
    pub id: &'static str,
    pub category: SignalCategory,
    pub severity: Severity,
    pub domain: Option<RiskDomain>,
    pub title: &'static str,
    pub explanation: &'static str,
    pub details: Option<&'static str>,
    pub matcher: fn(&str, Option<&UrlMetadata>) -> bool,
}

impl Rule {
    /// Instantiate a signal for a match of this rule
    pub fn to_signal(&self) -> Signal {
        Signal {
            id: Uuid::new_v4().to_string(),
            category: self.category,
            title: self.title.to_string(),
            explanation: self.explanation.to_string(),
            details: self.details.map(str::to_string),
            rule_id: self.id.to_string(),
            severity: Some(self.severity),
            domain: self.domain,
        }
    }
}

/// The full text-rule catalog, in fixed evaluation order
pub static TEXT_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    let mut rules = legal::rules();
    rules.extend(consumer::rules());
    rules.extend(business::rules());
    rules.extend(generic::rules());
    rules
});

/// URL-only rules, evaluated against scraped page text and metadata
pub static URL_RULES: Lazy<Vec<Rule>> = Lazy::new(website::rules);

/// Legal rights-stripping clause ids. Single source of truth shared by the
/// evaluator's stacked-clause escalation and the scorer's critical tier and
/// floor rules.
pub const CRITICAL_CLAUSE_IDS: &[&str] = &[
    "irrevocable_consent",
    "unilateral_modification",
    "suit_waiver",
    "forced_arbitration",
    "perpetual_data_assignment",
    "negligence_indemnification",
    "unlimited_liability",
    "unrestricted_data_sharing",
    "survival_clause",
    "silence_as_consent",
];

/// Liability/payment/fraud-adjacent rule ids. Authoritative for the scorer's
/// major tier; the per-rule severity field only drives the fall-through tier.
pub const MAJOR_RULE_IDS: &[&str] = &[
    "retroactive_billing",
    "opaque_auto_renewal",
    "unusual_payment_method",
    "too_good_to_be_true",
    "impersonation_language",
    "sensitive_info_request",
    "asymmetric_obligations",
    "lock_in_risk",
];

/// Substance-deficit rule ids considered by the business-priority suppression.
/// A significant deficit is `low_substance_proposal` alone, or any two of
/// these together.
pub const SUBSTANCE_DEFICIT_IDS: &[&str] = &[
    "low_substance_proposal",
    "confidence_without_evidence",
    "vague_value_proposition",
    "urgency_without_substance",
    "unverifiable_identity",
];

/// Synthetic rule ids produced by the evaluator's escalation passes
pub const STACKED_POWER_IMBALANCE: &str = "stacked_power_imbalance";
pub const STRUCTURAL_IMBALANCE: &str = "structural_imbalance";
pub const LIMITED_PROTECTIONS: &str = "limited_protections";

pub fn is_critical_clause(rule_id: &str) -> bool {
    CRITICAL_CLAUSE_IDS.contains(&rule_id)
}

pub fn is_major_rule(rule_id: &str) -> bool {
    MAJOR_RULE_IDS.contains(&rule_id)
}

pub fn is_substance_deficit(rule_id: &str) -> bool {
    SUBSTANCE_DEFICIT_IDS.contains(&rule_id)
}
