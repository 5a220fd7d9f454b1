use serde::Deserialize;
use std::fs;
use std::path::Path;
use url::Url;

const ENV_CONFIG_PATH: &str = "TRUSTLENS_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Page-fetch filtering configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Allowed domains (whitelist). If empty, all domains are allowed.
    #[serde(default)]
    pub allow: Vec<String>,
    /// Denied domains (blacklist). Applied after the allow list.
    #[serde(default)]
    pub deny: Vec<String>,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            allow: Vec::new(),
            deny: Vec::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl FetchConfig {
    /// Check if a URL is allowed based on the allow/deny lists
    pub fn is_url_allowed(&self, url: &Url) -> bool {
        let host = match url.host_str() {
            Some(h) => h.to_lowercase(),
            None => return false,
        };

        if self.deny.iter().any(|d| host.contains(&d.to_lowercase())) {
            return false;
        }

        if self.allow.is_empty() {
            return true;
        }

        self.allow.iter().any(|a| host.contains(&a.to_lowercase()))
    }
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub fetch: FetchConfig,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let fetch = Self::load_config_file(&config_path)
            .map(|cf| cf.fetch)
            .unwrap_or_default();

        Self { fetch, port, host }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => {
                let contents = contents.trim();
                if contents.is_empty() {
                    tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
                    return Some(ConfigFile::default());
                }

                match serde_yaml::from_str(contents) {
                    Ok(config) => {
                        tracing::info!(path = %path.display(), "Loaded configuration from file");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                        None
                    }
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deny_list_wins_over_allow_list() {
        let config = FetchConfig {
            allow: vec!["example.com".to_string()],
            deny: vec!["bad.example.com".to_string()],
            timeout_secs: 30,
        };

        let allowed = Url::parse("https://www.example.com/about").unwrap();
        let denied = Url::parse("https://bad.example.com/").unwrap();

        assert!(config.is_url_allowed(&allowed));
        assert!(!config.is_url_allowed(&denied));
    }

    #[test]
    fn empty_allow_list_permits_everything_not_denied() {
        let config = FetchConfig::default();
        let url = Url::parse("https://anything.example.org/").unwrap();
        assert!(config.is_url_allowed(&url));
    }
}
