use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Three-way classification of a signal's implication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    /// Warning: a concerning pattern was detected
    Risk,
    /// Missing or ambiguous information
    Uncertainty,
    /// Trust indicator
    Green,
}

impl SignalCategory {
    /// Sort rank: risk signals surface before uncertainty, green last
    pub fn priority(&self) -> u8 {
        match self {
            SignalCategory::Risk => 0,
            SignalCategory::Uncertainty => 1,
            SignalCategory::Green => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Severity {
    /// Sort rank within risk signals (very_high first)
    pub fn priority(&self) -> u8 {
        match self {
            Severity::VeryHigh => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskDomain {
    Consumer,
    Legal,
    Business,
}

/// Inferred genre of the analyzed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisContext {
    ConsumerMessage,
    LegalAgreement,
    ClientInquiry,
    VendorProposal,
    PartnershipOffer,
    General,
}

impl AnalysisContext {
    /// Contexts for which business assessments are computed
    pub fn is_business(&self) -> bool {
        matches!(
            self,
            AnalysisContext::ClientInquiry
                | AnalysisContext::VendorProposal
                | AnalysisContext::PartnershipOffer
        )
    }
}

// One detected pattern instance.
// - id: unique per evaluation, not stable across runs
// - rule_id: stable identifier of the originating rule, used for escalation
//   lookups and suppression logic
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub id: String,
    pub category: SignalCategory,
    pub title: String,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub rule_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<RiskDomain>,
}

impl Signal {
    pub fn new(
        rule_id: &str,
        category: SignalCategory,
        title: &str,
        explanation: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            category,
            title: title.to_string(),
            explanation: explanation.to_string(),
            details: None,
            rule_id: rule_id.to_string(),
            severity: None,
            domain: None,
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_domain(mut self, domain: RiskDomain) -> Self {
        self.domain = Some(domain);
        self
    }

    pub fn with_details(mut self, details: &str) -> Self {
        self.details = Some(details.to_string());
        self
    }

    /// Effective severity: signals without one default to medium
    pub fn effective_severity(&self) -> Severity {
        self.severity.unwrap_or(Severity::Medium)
    }
}

/// Metadata accompanying a URL analysis
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UrlMetadata {
    pub domain: String,
    pub is_https: bool,
    pub page_title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_defaults_to_medium() {
        let signal = Signal::new("a", SignalCategory::Risk, "A", "a");
        assert_eq!(signal.effective_severity(), Severity::Medium);
    }

    #[test]
    fn wire_format_uses_camel_case_and_omits_empty_fields() {
        let signal = Signal::new(
            "forced_arbitration",
            SignalCategory::Risk,
            "Forced Arbitration",
            "Disputes must go to arbitration.",
        )
        .with_severity(Severity::VeryHigh)
        .with_domain(RiskDomain::Legal);

        let json = serde_json::to_value(&signal).unwrap();
        assert_eq!(json["ruleId"], "forced_arbitration");
        assert_eq!(json["severity"], "very_high");
        assert_eq!(json["domain"], "legal");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn signals_deserialize_without_optional_fields() {
        let json = r#"{
            "id": "x",
            "category": "uncertainty",
            "title": "Vague Sender Identity",
            "explanation": "No verifiable identity markers.",
            "ruleId": "vague_sender_identity"
        }"#;
        let signal: Signal = serde_json::from_str(json).unwrap();
        assert_eq!(signal.category, SignalCategory::Uncertainty);
        assert!(signal.severity.is_none());
        assert_eq!(signal.effective_severity(), Severity::Medium);
    }
}
