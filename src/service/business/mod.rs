//! Business assessment engine: company credibility plus priority judgment.
//!
//! The single most important rule here is substance-deficit suppression:
//! polished language can never, by itself, earn a favorable verdict. When
//! the deficit trips, every additive adjustment is disabled and the verdict
//! is forced low.

mod company;
mod verification;

pub use company::assess_company;
pub use verification::verify_company;

use crate::model::{
    AnalysisContext, AttentionWorthiness, BusinessPriorityAssessment, CompanyAssessment,
    CompanyMaturity, CompanyVisibility, RiskDomain, RiskToRewardBalance, Severity, Signal,
    SignalCategory, StrategicImportance, TrackRecord,
};
use crate::rules::is_substance_deficit;

const SUPPRESSED_TIME_RECOMMENDATION: &str =
    "Not worth time investment until the sender provides verifiable specifics \
     about who they are and what they deliver";

/// True when the low-substance signal fired, or at least two of the five
/// substance-deficit signals fired together.
pub fn has_significant_substance_deficit(signals: &[Signal]) -> bool {
    let deficit_count = signals
        .iter()
        .filter(|s| is_substance_deficit(&s.rule_id))
        .count();
    signals.iter().any(|s| s.rule_id == "low_substance_proposal") || deficit_count >= 2
}

/// Derive the priority judgment for a business-like context.
///
/// Callers gate on [`AnalysisContext::is_business`]; a non-business context
/// yields no assessment.
pub fn assess_business_priority(
    signals: &[Signal],
    context: AnalysisContext,
    company: &CompanyAssessment,
) -> Option<BusinessPriorityAssessment> {
    if !context.is_business() {
        return None;
    }

    let business_risks: Vec<&Signal> = signals
        .iter()
        .filter(|s| {
            s.category == SignalCategory::Risk && s.domain == Some(RiskDomain::Business)
        })
        .collect();
    let uncertainty_count = signals
        .iter()
        .filter(|s| s.category == SignalCategory::Uncertainty)
        .count();
    let greens: Vec<&Signal> = signals
        .iter()
        .filter(|s| s.category == SignalCategory::Green)
        .collect();
    let deficit_count = signals
        .iter()
        .filter(|s| is_substance_deficit(&s.rule_id))
        .count();

    let confidence_factors = collect_confidence_factors(&greens, company);
    let concerns = collect_concerns(signals, company);

    if has_significant_substance_deficit(signals) {
        tracing::debug!(
            context = ?context,
            deficit_count,
            "Substance deficit detected, suppressing business priority"
        );
        return Some(BusinessPriorityAssessment {
            strategic_importance: StrategicImportance::Low,
            attention_worthiness: AttentionWorthiness::Ignore,
            risk_to_reward_balance: RiskToRewardBalance::Unfavorable,
            time_recommendation: SUPPRESSED_TIME_RECOMMENDATION.to_string(),
            confidence_factors: Vec::new(),
            concerns,
            comparative_advice: comparative_advice(context, true),
        });
    }

    // Additive importance score from a neutral baseline
    let mut importance: i32 = 50;
    let has_signal = |rule_id: &str| signals.iter().any(|s| s.rule_id == rule_id);

    if has_signal("specific_requirements") {
        importance += 20;
    }
    if has_signal("clear_business_context") {
        importance += 15;
    }
    if has_signal("vendor_transparency") {
        importance += 15;
    }
    if has_signal("professional_tone_with_substance") {
        importance += 10;
    }
    if company.track_record == TrackRecord::Verified {
        importance += 15;
    }
    if company.maturity == CompanyMaturity::Established {
        importance += 10;
    }
    for risk in &business_risks {
        importance -= match risk.effective_severity() {
            Severity::Low => 10,
            Severity::Medium => 15,
            Severity::High => 20,
            Severity::VeryHigh => 25,
        };
    }
    if matches!(
        company.visibility,
        CompanyVisibility::Unknown | CompanyVisibility::Limited
    ) {
        importance -= 10;
    }
    if uncertainty_count > 2 && !business_risks.is_empty() {
        importance -= 10;
    }
    importance += greens.len() as i32 * 5;
    let importance = importance.clamp(0, 100);

    let strategic_importance = match importance {
        i if i >= 70 => StrategicImportance::High,
        i if i >= 40 => StrategicImportance::Medium,
        _ => StrategicImportance::Low,
    };

    let has_very_high_risk = signals.iter().any(|s| {
        s.category == SignalCategory::Risk && s.effective_severity() == Severity::VeryHigh
    });
    let attention_worthiness = match strategic_importance {
        StrategicImportance::High if concerns.len() > 3 || has_very_high_risk => {
            AttentionWorthiness::Monitor
        }
        StrategicImportance::High => AttentionWorthiness::Engage,
        StrategicImportance::Medium => AttentionWorthiness::Monitor,
        StrategicImportance::Low => AttentionWorthiness::Ignore,
    };

    let risk_weight =
        2 * business_risks.len() + uncertainty_count + 3 * deficit_count;
    let reward_weight = greens.len() + confidence_factors.len();
    let risk_to_reward_balance = match reward_weight.cmp(&risk_weight) {
        std::cmp::Ordering::Greater => RiskToRewardBalance::Favorable,
        std::cmp::Ordering::Less => RiskToRewardBalance::Unfavorable,
        std::cmp::Ordering::Equal => RiskToRewardBalance::Neutral,
    };

    let time_recommendation = match strategic_importance {
        StrategicImportance::High => "Warrants prompt attention",
        StrategicImportance::Medium => "Evaluate alongside other opportunities",
        StrategicImportance::Low => "Does not merit significant time investment",
    }
    .to_string();

    Some(BusinessPriorityAssessment {
        strategic_importance,
        attention_worthiness,
        risk_to_reward_balance,
        time_recommendation,
        confidence_factors,
        concerns,
        comparative_advice: comparative_advice(context, false),
    })
}

fn collect_confidence_factors(
    greens: &[&Signal],
    company: &CompanyAssessment,
) -> Vec<String> {
    let mut factors: Vec<String> = greens.iter().map(|s| s.title.clone()).collect();
    if company.track_record == TrackRecord::Verified {
        factors.push("Track record corroborated by independent sources".to_string());
    }
    if company.maturity == CompanyMaturity::Established {
        factors.push("Established operating history".to_string());
    }
    factors.truncate(4);
    factors
}

fn collect_concerns(signals: &[Signal], company: &CompanyAssessment) -> Vec<String> {
    let mut concerns: Vec<String> = signals
        .iter()
        .filter(|s| s.category != SignalCategory::Green)
        .map(|s| s.title.clone())
        .collect();
    concerns.extend(company.flags.iter().cloned());
    concerns.truncate(4);
    concerns
}

fn comparative_advice(context: AnalysisContext, suppressed: bool) -> Vec<String> {
    let mut advice = Vec::new();
    if suppressed {
        advice.push(
            "Ask for a company name, a named contact, and one verifiable client before \
             any further engagement"
                .to_string(),
        );
        advice.push(
            "Compare against inbound messages that state concrete deliverables and \
             budgets up front"
                .to_string(),
        );
    } else {
        match context {
            AnalysisContext::ClientInquiry => {
                advice.push(
                    "Qualify budget and timeline in the first reply to avoid unpaid \
                     discovery work"
                        .to_string(),
                );
            }
            AnalysisContext::VendorProposal => {
                advice.push(
                    "Request references you can contact directly, not curated quotes"
                        .to_string(),
                );
            }
            AnalysisContext::PartnershipOffer => {
                advice.push(
                    "Clarify what each side contributes before agreeing to any exclusivity"
                        .to_string(),
                );
            }
            _ => {}
        }
    }
    advice.truncate(4);
    advice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::evaluate_text;
    use crate::service::context::classify_context;

    fn green(rule_id: &str, title: &str) -> Signal {
        Signal::new(rule_id, SignalCategory::Green, title, "test")
            .with_severity(Severity::Medium)
            .with_domain(RiskDomain::Business)
    }

    fn unknown_company() -> CompanyAssessment {
        CompanyAssessment {
            visibility: CompanyVisibility::Unknown,
            maturity: CompanyMaturity::Unknown,
            track_record: TrackRecord::Unverified,
            public_footprint: Vec::new(),
            flags: Vec::new(),
        }
    }

    #[test]
    fn non_business_context_yields_no_assessment() {
        let result = assess_business_priority(
            &[],
            AnalysisContext::ConsumerMessage,
            &unknown_company(),
        );
        assert!(result.is_none());
    }

    #[test]
    fn substance_deficit_suppresses_even_with_green_flags() {
        let mut signals = vec![Signal::new(
            "low_substance_proposal",
            SignalCategory::Risk,
            "Low-Substance Proposal",
            "test",
        )
        .with_severity(Severity::High)
        .with_domain(RiskDomain::Business)];
        for i in 0..5 {
            signals.push(green(&format!("g{i}"), "Positive marker"));
        }

        let assessment = assess_business_priority(
            &signals,
            AnalysisContext::VendorProposal,
            &unknown_company(),
        )
        .unwrap();

        assert_eq!(assessment.strategic_importance, StrategicImportance::Low);
        assert_eq!(assessment.attention_worthiness, AttentionWorthiness::Ignore);
        assert_eq!(
            assessment.risk_to_reward_balance,
            RiskToRewardBalance::Unfavorable
        );
        assert!(assessment.confidence_factors.is_empty());
        assert!(assessment
            .time_recommendation
            .contains("verifiable specifics"));
    }

    #[test]
    fn two_deficit_signals_without_low_substance_still_suppress() {
        let signals = vec![
            Signal::new(
                "confidence_without_evidence",
                SignalCategory::Risk,
                "Confidence Without Evidence",
                "test",
            ),
            Signal::new(
                "vague_value_proposition",
                SignalCategory::Uncertainty,
                "Vague Value Proposition",
                "test",
            ),
        ];
        assert!(has_significant_substance_deficit(&signals));
    }

    #[test]
    fn strong_inquiry_scores_high_and_engages() {
        let signals = vec![
            green("specific_requirements", "Specific Requirements"),
            green("clear_business_context", "Clear Business Context"),
        ];
        let company = CompanyAssessment {
            visibility: CompanyVisibility::High,
            maturity: CompanyMaturity::Established,
            track_record: TrackRecord::Verified,
            public_footprint: Vec::new(),
            flags: Vec::new(),
        };

        let assessment = assess_business_priority(
            &signals,
            AnalysisContext::ClientInquiry,
            &company,
        )
        .unwrap();

        // 50 + 20 + 15 + 15 + 10 + 10 = 120 clamped to 100
        assert_eq!(assessment.strategic_importance, StrategicImportance::High);
        assert_eq!(assessment.attention_worthiness, AttentionWorthiness::Engage);
        assert_eq!(
            assessment.risk_to_reward_balance,
            RiskToRewardBalance::Favorable
        );
        assert_eq!(assessment.time_recommendation, "Warrants prompt attention");
    }

    #[test]
    fn very_high_risk_blocks_engage() {
        let mut signals = vec![
            green("specific_requirements", "Specific Requirements"),
            green("clear_business_context", "Clear Business Context"),
            green("vendor_transparency", "Vendor Transparency"),
        ];
        signals.push(
            Signal::new(
                "lock_in_risk",
                SignalCategory::Risk,
                "Lock-In Risk",
                "test",
            )
            .with_severity(Severity::VeryHigh)
            .with_domain(RiskDomain::Business),
        );
        let company = CompanyAssessment {
            visibility: CompanyVisibility::High,
            maturity: CompanyMaturity::Established,
            track_record: TrackRecord::Verified,
            public_footprint: Vec::new(),
            flags: Vec::new(),
        };

        let assessment = assess_business_priority(
            &signals,
            AnalysisContext::VendorProposal,
            &company,
        )
        .unwrap();

        // 50+20+15+15+15+10-25+15 = 115 -> High, but very_high risk demotes
        assert_eq!(assessment.strategic_importance, StrategicImportance::High);
        assert_eq!(
            assessment.attention_worthiness,
            AttentionWorthiness::Monitor
        );
    }

    #[test]
    fn scenario_vendor_pitch_ends_low_importance() {
        let text = "We are an industry-leading, award-winning agency offering \
                    best-in-class solutions. We specialize in growth. Let's talk.";
        let signals = evaluate_text(text);
        let context = classify_context(text, &signals);
        assert_eq!(context, AnalysisContext::VendorProposal);

        let company = assess_company(text, &signals);
        let assessment =
            assess_business_priority(&signals, context, &company).unwrap();
        assert_eq!(assessment.strategic_importance, StrategicImportance::Low);
    }

    #[test]
    fn concerns_and_factors_are_capped_at_four() {
        let mut signals = Vec::new();
        for i in 0..8 {
            signals.push(
                Signal::new(
                    &format!("r{i}"),
                    SignalCategory::Uncertainty,
                    &format!("Concern {i}"),
                    "test",
                ),
            );
            signals.push(green(&format!("g{i}"), &format!("Factor {i}")));
        }

        let assessment = assess_business_priority(
            &signals,
            AnalysisContext::ClientInquiry,
            &unknown_company(),
        )
        .unwrap();
        assert!(assessment.concerns.len() <= 4);
        assert!(assessment.confidence_factors.len() <= 4);
    }
}
