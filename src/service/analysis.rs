//! Analysis orchestration: one pass from raw text to a complete result

use std::sync::Arc;

use chrono::Utc;
use url::Url;
use uuid::Uuid;

use crate::fetch::{FetchError, PageFetcher};
use crate::model::{
    AnalysisContext, BusinessPriorityAssessment, CompanyAssessment, Signal, SignalCategory,
    TrustAnalysis,
};
use crate::rules::{evaluate_text, evaluate_url, sort_signals};
use crate::service::business::{assess_business_priority, assess_company, verify_company};
use crate::service::context::{classify_context, primary_domain};
use crate::service::scoring::{score_label, score_risk};
use crate::service::summary::SummaryService;

/// End-to-end analysis service. The rule pass, scoring, and assessments are
/// synchronous and deterministic; only page fetching and summarization await.
pub struct AnalysisService {
    fetcher: Arc<dyn PageFetcher>,
    summary: SummaryService,
}

impl AnalysisService {
    pub fn new(fetcher: Arc<dyn PageFetcher>, summary: SummaryService) -> Self {
        Self { fetcher, summary }
    }

    /// Analyze free-form text
    pub async fn analyze_text(&self, content: &str) -> TrustAnalysis {
        let signals = evaluate_text(content);
        self.build_analysis(content, signals).await
    }

    /// Fetch a page and analyze its visible text plus connection metadata
    pub async fn analyze_url(&self, url: &Url) -> Result<TrustAnalysis, FetchError> {
        let page = self.fetcher.fetch(url).await?;
        tracing::info!(url = %page.url, domain = %page.metadata.domain, "Analyzing fetched page");

        let signals = evaluate_url(&page.text, &page.metadata);
        Ok(self.build_analysis(&page.text, signals).await)
    }

    /// Regenerate a summary for an already-computed signal list
    pub async fn summarize(
        &self,
        signals: &[Signal],
        context: AnalysisContext,
        business: Option<&BusinessPriorityAssessment>,
    ) -> crate::model::AnalysisSummary {
        self.summary.summarize(signals, context, business).await
    }

    async fn build_analysis(&self, content: &str, signals: Vec<Signal>) -> TrustAnalysis {
        let context = classify_context(content, &signals);
        let domain = primary_domain(&signals, context);
        let score = score_risk(&signals);
        let label = score_label(score);

        let (company_assessment, business_priority) =
            self.assess_business(content, &signals, context).await;

        let summary = self
            .summary
            .summarize(&signals, context, business_priority.as_ref())
            .await;

        let concern_count = signals
            .iter()
            .filter(|s| s.category != SignalCategory::Green)
            .count();
        let signals = sort_signals(&signals);

        tracing::info!(
            score,
            context = ?context,
            signal_count = signals.len(),
            concern_count,
            "Analysis complete"
        );

        TrustAnalysis {
            request_id: Uuid::new_v4().to_string(),
            score,
            label,
            detected_context: context,
            primary_domain: domain,
            concern_count,
            signals,
            summary,
            business_priority,
            company_assessment,
            generated_at: Utc::now(),
        }
    }

    /// Company and priority assessments, computed only for business contexts
    async fn assess_business(
        &self,
        content: &str,
        signals: &[Signal],
        context: AnalysisContext,
    ) -> (
        Option<CompanyAssessment>,
        Option<BusinessPriorityAssessment>,
    ) {
        if !context.is_business() {
            return (None, None);
        }

        let company = assess_company(content, signals);
        let company = verify_company(self.fetcher.as_ref(), content, company).await;
        let priority = assess_business_priority(signals, context, &company);
        (Some(company), priority)
    }
}
