pub mod analysis;
pub mod business;
pub mod context;
pub mod llm;
pub mod scoring;
pub mod summary;

pub use analysis::AnalysisService;
pub use llm::LlmClient;
pub use summary::SummaryService;
