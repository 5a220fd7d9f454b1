//! Rule evaluation: the shared loop over the catalog plus the two escalation
//! passes that model compound, structural risk.

use crate::model::{RiskDomain, Severity, Signal, SignalCategory, UrlMetadata};

use super::patterns;
use super::{
    is_critical_clause, Rule, LIMITED_PROTECTIONS, STACKED_POWER_IMBALANCE, STRUCTURAL_IMBALANCE,
    TEXT_RULES, URL_RULES,
};

/// Number of critical-clause matches at which the stacked-power-imbalance
/// escalation fires
const STACKED_CLAUSE_THRESHOLD: usize = 3;

/// Run the full text catalog and both escalation passes.
///
/// The returned list is in catalog order (escalation signals prepended or
/// appended as documented); callers wanting display order apply
/// [`sort_signals`] separately.
pub fn evaluate_text(content: &str) -> Vec<Signal> {
    let mut signals = run_rules(&TEXT_RULES, content, None);

    apply_stacked_clause_escalation(&mut signals);
    apply_structural_imbalance_escalation(content, &mut signals);

    tracing::debug!(
        signal_count = signals.len(),
        risk_count = signals
            .iter()
            .filter(|s| s.category == SignalCategory::Risk)
            .count(),
        "Text evaluation complete"
    );

    signals
}

/// URL analysis: URL-only rules against the scraped page, then the full text
/// rule set over the same scraped text, concatenated in that order.
pub fn evaluate_url(content: &str, metadata: &UrlMetadata) -> Vec<Signal> {
    let mut signals = run_rules(&URL_RULES, content, Some(metadata));
    signals.extend(evaluate_text(content));
    signals
}

fn run_rules(rules: &[Rule], content: &str, metadata: Option<&UrlMetadata>) -> Vec<Signal> {
    rules
        .iter()
        .filter(|rule| (rule.matcher)(content, metadata))
        .map(Rule::to_signal)
        .collect()
}

/// Escalation pass 1: three or more critical legal clauses together are
/// categorically worse than their parts. Prepends a synthetic very-high risk
/// signal summarizing the cumulative effect.
fn apply_stacked_clause_escalation(signals: &mut Vec<Signal>) {
    let critical_count = signals
        .iter()
        .filter(|s| s.category == SignalCategory::Risk && is_critical_clause(&s.rule_id))
        .count();

    if critical_count >= STACKED_CLAUSE_THRESHOLD {
        let signal = Signal::new(
            STACKED_POWER_IMBALANCE,
            SignalCategory::Risk,
            "Stacked Power Imbalance",
            "Multiple rights-stripping clauses appear together. Individually each might pass \
             as boilerplate; combined they remove your ability to dispute, exit, or seek \
             remedy while the other party keeps unilateral control.",
        )
        .with_severity(Severity::VeryHigh)
        .with_domain(RiskDomain::Legal)
        .with_details(&format!(
            "{critical_count} critical clauses detected in one document"
        ));
        signals.insert(0, signal);
    }
}

/// Escalation pass 2: one-sided power clauses are materially worse when no
/// counterbalancing user right exists anywhere in the text. Scans the raw text
/// for the four protection patterns independently of the rule matches.
fn apply_structural_imbalance_escalation(content: &str, signals: &mut Vec<Signal>) {
    let has_provider_favoring_clause = signals
        .iter()
        .any(|s| s.category == SignalCategory::Risk && is_critical_clause(&s.rule_id));

    if !has_provider_favoring_clause {
        return;
    }

    match patterns::protection_count(content) {
        0 => {
            signals.push(
                Signal::new(
                    STRUCTURAL_IMBALANCE,
                    SignalCategory::Risk,
                    "Structural Imbalance",
                    "Provider-favoring clauses are present and not one user protection \
                     (opt-out, dispute process, refund, advance notice) exists anywhere \
                     in the text.",
                )
                .with_severity(Severity::VeryHigh)
                .with_domain(RiskDomain::Legal),
            );
        }
        1 => {
            signals.push(
                Signal::new(
                    LIMITED_PROTECTIONS,
                    SignalCategory::Uncertainty,
                    "Limited User Protections",
                    "Only one user protection counterbalances the provider-favoring clauses; \
                     check whether it actually covers your likely disputes.",
                )
                .with_severity(Severity::Medium)
                .with_domain(RiskDomain::Legal),
            );
        }
        _ => {}
    }
}

/// Stable display ordering: risk before uncertainty before green; within risk,
/// very_high first. Ties keep evaluation order.
pub fn sort_signals(signals: &[Signal]) -> Vec<Signal> {
    let mut sorted = signals.to_vec();
    sorted.sort_by_key(|s| {
        let severity_rank = if s.category == SignalCategory::Risk {
            s.effective_severity().priority()
        } else {
            0
        };
        (s.category.priority(), severity_rank)
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABUSIVE_TERMS: &str =
        "By signing you give irrevocable consent to these terms. All disputes go to \
         binding arbitration, and you waive your right to sue in any court.";

    #[test]
    fn three_critical_clauses_stack() {
        let signals = evaluate_text(ABUSIVE_TERMS);

        assert_eq!(signals[0].rule_id, STACKED_POWER_IMBALANCE);
        assert_eq!(signals[0].severity, Some(Severity::VeryHigh));

        let rule_ids: Vec<&str> = signals.iter().map(|s| s.rule_id.as_str()).collect();
        assert!(rule_ids.contains(&"irrevocable_consent"));
        assert!(rule_ids.contains(&"forced_arbitration"));
        assert!(rule_ids.contains(&"suit_waiver"));
    }

    #[test]
    fn no_protections_adds_structural_imbalance() {
        let signals = evaluate_text(ABUSIVE_TERMS);
        assert!(signals.iter().any(|s| s.rule_id == STRUCTURAL_IMBALANCE));
    }

    #[test]
    fn one_protection_downgrades_to_limited_protections() {
        let text = format!("{ABUSIVE_TERMS} You may opt-out of arbitration within 30 days.");
        let signals = evaluate_text(&text);
        assert!(signals.iter().any(|s| s.rule_id == LIMITED_PROTECTIONS));
        assert!(!signals.iter().any(|s| s.rule_id == STRUCTURAL_IMBALANCE));
    }

    #[test]
    fn protections_without_critical_clauses_add_nothing() {
        let signals = evaluate_text("You can request a refund anytime within 30 days.");
        assert!(!signals
            .iter()
            .any(|s| s.rule_id == STRUCTURAL_IMBALANCE || s.rule_id == LIMITED_PROTECTIONS));
    }

    #[test]
    fn evaluation_is_deterministic_up_to_ids() {
        let a = evaluate_text(ABUSIVE_TERMS);
        let b = evaluate_text(ABUSIVE_TERMS);

        assert_eq!(a.len(), b.len());
        for (lhs, rhs) in a.iter().zip(&b) {
            assert_eq!(lhs.rule_id, rhs.rule_id);
            assert_eq!(lhs.category, rhs.category);
            assert_eq!(lhs.severity, rhs.severity);
            assert_ne!(lhs.id, rhs.id, "signal ids are per-evaluation");
        }
    }

    #[test]
    fn sort_orders_categories_then_severity() {
        let signals = vec![
            Signal::new("g", SignalCategory::Green, "g", "g"),
            Signal::new("u", SignalCategory::Uncertainty, "u", "u"),
            Signal::new("r_med", SignalCategory::Risk, "r", "r").with_severity(Severity::Medium),
            Signal::new("r_vh", SignalCategory::Risk, "r", "r").with_severity(Severity::VeryHigh),
        ];

        let sorted = sort_signals(&signals);
        let order: Vec<&str> = sorted.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(order, vec!["r_vh", "r_med", "u", "g"]);
    }

    #[test]
    fn sort_is_stable_within_equal_keys() {
        let signals = vec![
            Signal::new("first", SignalCategory::Uncertainty, "a", "a"),
            Signal::new("second", SignalCategory::Uncertainty, "b", "b"),
        ];
        let sorted = sort_signals(&signals);
        assert_eq!(sorted[0].rule_id, "first");
        assert_eq!(sorted[1].rule_id, "second");
    }

    #[test]
    fn url_rules_precede_text_rules_in_url_evaluation() {
        let meta = UrlMetadata {
            domain: "example.com".to_string(),
            is_https: false,
            page_title: None,
        };
        let signals = evaluate_url("A page and its text.", &meta);
        assert_eq!(signals[0].rule_id, "insecure_connection");
    }
}
