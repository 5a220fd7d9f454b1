//! Shared LLM client used by the summarizer

use rig::providers::openai;

const ENV_API_KEY: &str = "OPENAI_API_KEY";
const ENV_MODEL: &str = "SUMMARY_MODEL";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Thin wrapper around the OpenAI client
#[derive(Clone)]
pub struct LlmClient {
    client: openai::Client,
}

impl LlmClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: openai::Client::new(api_key),
        }
    }

    /// Build a client from the environment. Returns None when no API key is
    /// configured; the summarizer then runs in fallback-only mode.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var(ENV_API_KEY).ok()?;
        Some(Self::new(&api_key))
    }

    /// Model name to request, overridable via SUMMARY_MODEL
    pub fn model_from_env() -> String {
        std::env::var(ENV_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string())
    }

    /// Use this to create extractors with custom configuration
    pub fn openai_client(&self) -> &openai::Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Construction never fails; key validity only surfaces at request time
    #[test]
    fn client_constructs_from_any_key() {
        let client = LlmClient::new("test-key");
        let _ = client.openai_client();
    }
}
