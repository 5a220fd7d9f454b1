use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::assessment::{BusinessPriorityAssessment, CompanyAssessment};
use super::signal::{AnalysisContext, RiskDomain, Signal};

/// Discrete label derived from the 0-100 risk score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoreLabel {
    pub label: String,
    pub description: String,
}

/// Explanatory prose produced by the summarizer (LLM or local fallback)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub summary: String,
    pub what_you_might_miss: String,
    pub recommended_actions: Vec<String>,
    /// Model that produced `summary`, or "fallback"
    pub model_used: String,
    pub fallback: bool,
}

/// Complete result of one analysis pass
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrustAnalysis {
    pub request_id: String,
    pub score: u32,
    pub label: ScoreLabel,
    pub detected_context: AnalysisContext,
    pub primary_domain: RiskDomain,
    pub concern_count: usize,
    /// Sorted: risk first, then uncertainty, then green
    pub signals: Vec<Signal>,
    pub summary: AnalysisSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_priority: Option<BusinessPriorityAssessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_assessment: Option<CompanyAssessment>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    pub content: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AnalyzeUrlRequest {
    pub url: String,
}

/// Regenerate a summary for an existing signal list
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub signals: Vec<Signal>,
    pub detected_context: AnalysisContext,
    #[serde(default)]
    pub business_priority: Option<BusinessPriorityAssessment>,
}
