//! Application state and service initialization
//!
//! This module centralizes all service initialization and dependency injection,
//! making it easier to manage the application lifecycle and test services.

use std::sync::Arc;

use actix_web::web;

use crate::api::health::HealthContext;
use crate::fetch::{PageFetcher, WebPageFetcher};
use crate::model::Config;
use crate::service::{AnalysisService, LlmClient, SummaryService};

/// Application state containing all services and shared resources
pub struct AppState {
    pub analysis_service: web::Data<AnalysisService>,
    pub health: web::Data<HealthContext>,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// The analysis pipeline is stateless; the only optional dependency is
    /// the LLM summarizer, which degrades to the local fallback when no
    /// OPENAI_API_KEY is configured.
    pub fn new(config: &Config) -> Self {
        let llm = LlmClient::from_env();
        let llm_enabled = llm.is_some();
        if llm_enabled {
            tracing::info!(model = %LlmClient::model_from_env(), "LLM summarizer enabled");
        } else {
            tracing::warn!("No LLM configured, summaries will use the local fallback");
        }

        let summary_service = SummaryService::new(llm, LlmClient::model_from_env());
        let fetcher: Arc<dyn PageFetcher> =
            Arc::new(WebPageFetcher::new(config.fetch.clone()));
        let analysis_service = AnalysisService::new(fetcher, summary_service);

        Self {
            analysis_service: web::Data::new(analysis_service),
            health: web::Data::new(HealthContext { llm_enabled }),
        }
    }
}
