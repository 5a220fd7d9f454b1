//! Risk scoring: additive weights, mandatory floors, compound-pattern
//! escalation, and the 4-tier label mapping.
//!
//! Floors are overrides, never averaged away: a critical rights-stripping
//! clause guarantees a minimum score no matter how many green flags surround
//! it.

use crate::model::{ScoreLabel, Severity, Signal, SignalCategory};
use crate::rules::{
    is_critical_clause, is_major_rule, STACKED_POWER_IMBALANCE, STRUCTURAL_IMBALANCE,
};

/// Severity tier a risk signal lands in for scoring purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RiskTier {
    Critical,
    Major,
    Medium,
    Low,
}

/// The rule-ID allow-lists are the source of truth for the critical and major
/// tiers; the signal's own severity only decides the fall-through.
fn classify_tier(signal: &Signal) -> RiskTier {
    if is_critical_clause(&signal.rule_id) {
        return RiskTier::Critical;
    }
    if is_major_rule(&signal.rule_id) {
        return RiskTier::Major;
    }
    match signal.effective_severity() {
        Severity::VeryHigh | Severity::High => RiskTier::Major,
        Severity::Medium => RiskTier::Medium,
        Severity::Low => RiskTier::Low,
    }
}

fn severity_weight(severity: Severity) -> f64 {
    match severity {
        Severity::Low => 4.0,
        Severity::Medium => 8.0,
        Severity::High => 15.0,
        Severity::VeryHigh => 25.0,
    }
}

/// Convert a signal list into a bounded score in [0, 100]
pub fn score_risk(signals: &[Signal]) -> u32 {
    let risk: Vec<&Signal> = signals
        .iter()
        .filter(|s| s.category == SignalCategory::Risk)
        .collect();
    let uncertainty: Vec<&Signal> = signals
        .iter()
        .filter(|s| s.category == SignalCategory::Uncertainty)
        .collect();
    let green_count = signals
        .iter()
        .filter(|s| s.category == SignalCategory::Green)
        .count();

    let critical_count = risk
        .iter()
        .filter(|s| classify_tier(s) == RiskTier::Critical)
        .count();
    let major_count = risk
        .iter()
        .filter(|s| classify_tier(s) == RiskTier::Major)
        .count();

    // Step 2: additive base score
    let mut score: f64 = risk
        .iter()
        .map(|s| severity_weight(s.effective_severity()))
        .sum();

    // Uncertainty compounds risk; it does not stand alone. Half weight,
    // amplified when a critical or major risk anchors it.
    let amplifier = if critical_count > 0 || major_count > 0 {
        1.5
    } else {
        1.0
    };
    score += uncertainty
        .iter()
        .map(|s| severity_weight(s.effective_severity()) * 0.5 * amplifier)
        .sum::<f64>();

    // Green flags soften but never erase risk
    let green_credit = (green_count as f64 * 4.0).min(12.0);
    score -= green_credit;

    // Step 3: mandatory floors
    let mut floor: f64 = 0.0;
    if critical_count >= 1 {
        floor = 60.0;
        if risk.len() > 1 || !uncertainty.is_empty() {
            floor = 70.0;
        }
    }
    if critical_count >= 2 || (critical_count >= 1 && major_count >= 2) {
        floor = floor.max(80.0);
    }
    if critical_count >= 3 {
        floor = floor.max(85.0);
    }
    let has_synthetic_imbalance = signals.iter().any(|s| {
        s.rule_id == STACKED_POWER_IMBALANCE || s.rule_id == STRUCTURAL_IMBALANCE
    });
    if has_synthetic_imbalance {
        floor = floor.max(80.0);
    }
    score = score.max(floor);

    // Step 4: compound-pattern escalation. The combination of control,
    // permanence, and no-recourse is categorically worse than any one alone.
    let present = |ids: &[&str]| {
        risk.iter()
            .any(|s| ids.contains(&s.rule_id.as_str()))
    };
    let unilateral_control = present(&["unilateral_modification", "opaque_auto_renewal"]);
    let permanence = present(&[
        "irrevocable_consent",
        "perpetual_data_assignment",
        "survival_clause",
    ]);
    let no_recourse = present(&["suit_waiver", "forced_arbitration"]);

    let factor_count = [unilateral_control, permanence, no_recourse]
        .iter()
        .filter(|f| **f)
        .count();
    if factor_count >= 2 {
        score += 10.0;
    }

    // Step 5: clamp and round
    score.clamp(0.0, 100.0).round() as u32
}

/// Map a score to its discrete 4-tier label
pub fn score_label(score: u32) -> ScoreLabel {
    let (label, description) = match score {
        0..=24 => (
            "Low Concern",
            "No significant risk patterns detected. Standard verification practices apply.",
        ),
        25..=49 => (
            "Mixed Signals",
            "Some indicators warrant attention, balanced by neutral or positive markers.",
        ),
        50..=69 => (
            "Elevated Concern",
            "Multiple concerning patterns detected. Review the specific signals before acting.",
        ),
        _ => (
            "High Concern",
            "Serious risk patterns detected. The structure of this text heavily favors the other party.",
        ),
    };
    ScoreLabel {
        label: label.to_string(),
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RiskDomain, Signal};
    use crate::rules::evaluate_text;

    fn risk(rule_id: &str, severity: Severity) -> Signal {
        Signal::new(rule_id, SignalCategory::Risk, rule_id, "test")
            .with_severity(severity)
            .with_domain(RiskDomain::Legal)
    }

    fn uncertainty(rule_id: &str) -> Signal {
        Signal::new(rule_id, SignalCategory::Uncertainty, rule_id, "test")
            .with_severity(Severity::Medium)
    }

    fn green(rule_id: &str) -> Signal {
        Signal::new(rule_id, SignalCategory::Green, rule_id, "test")
            .with_severity(Severity::Medium)
    }

    #[test]
    fn empty_signal_list_scores_zero() {
        assert_eq!(score_risk(&[]), 0);
        assert_eq!(score_label(0).label, "Low Concern");
    }

    #[test]
    fn label_boundaries_are_exact() {
        assert_eq!(score_label(24).label, "Low Concern");
        assert_eq!(score_label(25).label, "Mixed Signals");
        assert_eq!(score_label(49).label, "Mixed Signals");
        assert_eq!(score_label(50).label, "Elevated Concern");
        assert_eq!(score_label(69).label, "Elevated Concern");
        assert_eq!(score_label(70).label, "High Concern");
        assert_eq!(score_label(100).label, "High Concern");
    }

    #[test]
    fn single_critical_signal_floors_at_sixty() {
        let signals = vec![risk("forced_arbitration", Severity::VeryHigh)];
        assert!(score_risk(&signals) >= 60);
    }

    #[test]
    fn critical_plus_uncertainty_floors_at_seventy() {
        let signals = vec![
            risk("forced_arbitration", Severity::VeryHigh),
            uncertainty("vague_sender_identity"),
        ];
        assert!(score_risk(&signals) >= 70);
    }

    #[test]
    fn two_criticals_floor_at_eighty() {
        let signals = vec![
            risk("forced_arbitration", Severity::VeryHigh),
            risk("suit_waiver", Severity::VeryHigh),
        ];
        // floor 80, plus the no-recourse factor alone is not enough for +10
        assert!(score_risk(&signals) >= 80);
    }

    #[test]
    fn three_criticals_floor_at_eighty_five() {
        let signals = vec![
            risk("forced_arbitration", Severity::VeryHigh),
            risk("suit_waiver", Severity::VeryHigh),
            risk("irrevocable_consent", Severity::VeryHigh),
        ];
        assert!(score_risk(&signals) >= 85);
    }

    #[test]
    fn green_flags_soften_but_never_erase_critical_floors() {
        let mut signals = vec![risk("forced_arbitration", Severity::VeryHigh)];
        for i in 0..10 {
            signals.push(green(&format!("green_{i}")));
        }
        assert!(score_risk(&signals) >= 60);
    }

    #[test]
    fn mixed_signals_label_never_coexists_with_critical() {
        // Any list containing a critical signal floors at >= 60, past the
        // Mixed Signals band
        let samples: Vec<Vec<Signal>> = vec![
            vec![risk("unlimited_liability", Severity::High)],
            vec![
                risk("unrestricted_data_sharing", Severity::VeryHigh),
                green("a"),
                green("b"),
                green("c"),
            ],
        ];
        for signals in samples {
            let score = score_risk(&signals);
            assert_ne!(score_label(score).label, "Mixed Signals");
            assert!(score >= 60);
        }
    }

    #[test]
    fn compound_factors_add_ten() {
        // permanence + no recourse, single critical each side
        let compound = vec![
            risk("irrevocable_consent", Severity::VeryHigh),
            risk("forced_arbitration", Severity::VeryHigh),
        ];
        // two criticals -> floor 80, compound -> +10
        assert_eq!(score_risk(&compound), 90);
    }

    #[test]
    fn uncertainty_alone_stays_low() {
        let signals = vec![uncertainty("vague_sender_identity")];
        // 8 * 0.5, no amplification without critical/major risk
        assert_eq!(score_risk(&signals), 4);
        assert_eq!(score_label(score_risk(&signals)).label, "Low Concern");
    }

    #[test]
    fn uncertainty_is_amplified_by_major_risk() {
        let with_major = vec![
            risk("unusual_payment_method", Severity::VeryHigh),
            uncertainty("vague_sender_identity"),
        ];
        // 25 + 8 * 0.5 * 1.5 = 31
        assert_eq!(score_risk(&with_major), 31);
    }

    #[test]
    fn synthetic_imbalance_floors_at_eighty() {
        let signals = vec![
            Signal::new(
                STRUCTURAL_IMBALANCE,
                SignalCategory::Risk,
                "Structural Imbalance",
                "test",
            )
            .with_severity(Severity::VeryHigh),
        ];
        assert!(score_risk(&signals) >= 80);
    }

    #[test]
    fn scenario_a_three_stacked_clauses_score_high_concern() {
        let text = "By signing you give irrevocable consent. Disputes go to binding \
                    arbitration and you waive your right to sue.";
        let signals = evaluate_text(text);
        assert!(signals
            .iter()
            .any(|s| s.rule_id == STACKED_POWER_IMBALANCE));

        let score = score_risk(&signals);
        assert!(score >= 85, "score was {score}");
        assert_eq!(score_label(score).label, "High Concern");
    }

    #[test]
    fn score_is_always_in_bounds() {
        let mut signals = Vec::new();
        for i in 0..40 {
            signals.push(risk(&format!("r{i}"), Severity::VeryHigh));
        }
        assert!(score_risk(&signals) <= 100);
    }
}
