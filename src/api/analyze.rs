//! REST API endpoints for text and URL analysis

use actix_web::{post, web, HttpResponse};
use url::Url;
use utoipa::OpenApi;

use crate::api::error::ApiError;
use crate::model::{AnalyzeRequest, AnalyzeUrlRequest, SummaryRequest};
use crate::service::AnalysisService;

/// Maximum accepted input length in characters
const MAX_CONTENT_LENGTH: usize = 100_000;

fn validate_content(content: &str) -> Result<&str, ApiError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ApiError::BadRequest("content must not be empty".to_string()));
    }
    if trimmed.chars().count() > MAX_CONTENT_LENGTH {
        return Err(ApiError::BadRequest(format!(
            "content exceeds {MAX_CONTENT_LENGTH} characters"
        )));
    }
    Ok(trimmed)
}

/// Analyze free-form text for risk, uncertainty, and trust signals
#[utoipa::path(
    post,
    path = "/v1/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis completed", body = crate::model::TrustAnalysis),
        (status = 400, description = "Empty or oversized content")
    ),
    tag = "analysis"
)]
#[post("/v1/analyze")]
pub async fn analyze_text(
    service: web::Data<AnalysisService>,
    request: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, ApiError> {
    let content = validate_content(&request.content)?;
    tracing::info!(content_length = content.len(), "Analyzing text");

    let analysis = service.analyze_text(content).await;
    Ok(HttpResponse::Ok().json(analysis))
}

/// Fetch a web page and analyze its visible text plus connection metadata
#[utoipa::path(
    post,
    path = "/v1/analyze/url",
    request_body = AnalyzeUrlRequest,
    responses(
        (status = 200, description = "Analysis completed", body = crate::model::TrustAnalysis),
        (status = 400, description = "Invalid or blocked URL"),
        (status = 502, description = "Page could not be fetched")
    ),
    tag = "analysis"
)]
#[post("/v1/analyze/url")]
pub async fn analyze_url(
    service: web::Data<AnalysisService>,
    request: web::Json<AnalyzeUrlRequest>,
) -> Result<HttpResponse, ApiError> {
    let url = Url::parse(request.url.trim())
        .map_err(|e| ApiError::BadRequest(format!("invalid URL: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::BadRequest(format!(
            "unsupported URL scheme: {}",
            url.scheme()
        )));
    }

    tracing::info!(url = %url, "Analyzing URL");
    let analysis = service.analyze_url(&url).await?;
    Ok(HttpResponse::Ok().json(analysis))
}

/// Regenerate the explanatory summary for an existing signal list
#[utoipa::path(
    post,
    path = "/v1/summary",
    request_body = SummaryRequest,
    responses(
        (status = 200, description = "Summary generated", body = crate::model::AnalysisSummary)
    ),
    tag = "analysis"
)]
#[post("/v1/summary")]
pub async fn summarize(
    service: web::Data<AnalysisService>,
    request: web::Json<SummaryRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    let summary = service
        .summarize(
            &request.signals,
            request.detected_context,
            request.business_priority.as_ref(),
        )
        .await;
    Ok(HttpResponse::Ok().json(summary))
}

/// Pre-v1 route kept for frontend compatibility, same behavior as /v1/summary
async fn summarize_compat(
    service: web::Data<AnalysisService>,
    request: web::Json<SummaryRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    let summary = service
        .summarize(
            &request.signals,
            request.detected_context,
            request.business_priority.as_ref(),
        )
        .await;
    Ok(HttpResponse::Ok().json(summary))
}

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze_text)
        .service(analyze_url)
        .service(summarize)
        .route(
            "/api/generate-summary",
            web::post().to(summarize_compat),
        );
}

#[derive(OpenApi)]
#[openapi(
    paths(
        analyze_text,
        analyze_url,
        summarize,
        crate::api::health::liveness,
        crate::api::health::readiness,
    ),
    components(schemas(
        crate::model::AnalyzeRequest,
        crate::model::AnalyzeUrlRequest,
        crate::model::SummaryRequest,
        crate::model::TrustAnalysis,
        crate::model::AnalysisSummary,
        crate::model::ScoreLabel,
        crate::model::Signal,
        crate::model::SignalCategory,
        crate::model::Severity,
        crate::model::RiskDomain,
        crate::model::AnalysisContext,
        crate::model::UrlMetadata,
        crate::model::BusinessPriorityAssessment,
        crate::model::StrategicImportance,
        crate::model::AttentionWorthiness,
        crate::model::RiskToRewardBalance,
        crate::model::CompanyAssessment,
        crate::model::CompanyVisibility,
        crate::model::CompanyMaturity,
        crate::model::TrackRecord,
        crate::api::health::HealthStatus,
        crate::api::health::ReadinessStatus,
        crate::api::health::DependencyHealth,
    )),
    tags(
        (name = "analysis", description = "Text and URL trust analysis"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
