use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Field names on the assessment types keep the camelCase wire format consumed
// by the existing frontend.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StrategicImportance {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AttentionWorthiness {
    Ignore,
    Monitor,
    Engage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskToRewardBalance {
    Unfavorable,
    Neutral,
    Favorable,
}

/// Derived priority judgment for business-like contexts.
///
/// Invariant: never `high`/`engage`/`favorable` when a significant substance
/// deficit is detected. The suppression in `service::business` enforces this
/// before any additive scoring is applied.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessPriorityAssessment {
    pub strategic_importance: StrategicImportance,
    pub attention_worthiness: AttentionWorthiness,
    pub risk_to_reward_balance: RiskToRewardBalance,
    pub time_recommendation: String,
    pub confidence_factors: Vec<String>,
    pub concerns: Vec<String>,
    pub comparative_advice: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CompanyVisibility {
    High,
    Moderate,
    Limited,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CompanyMaturity {
    Established,
    Growth,
    Startup,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TrackRecord {
    Verified,
    Claimed,
    Unverified,
    Concerning,
}

/// Credibility profile built from pattern scans over the analyzed text,
/// optionally enhanced by fetched company-site content.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAssessment {
    pub visibility: CompanyVisibility,
    pub maturity: CompanyMaturity,
    pub track_record: TrackRecord,
    pub public_footprint: Vec<String>,
    pub flags: Vec<String>,
}
