use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;

use crate::article::fetcher::DEFAULT_USER_AGENT;
use crate::pipeline::DEFAULT_MIN_TOKENS;
use crate::topics::analyzer::AnalyzerConfig;

/// Central configuration loaded from environment variables.
///
/// Everything has a default, so an empty environment gives a working
/// service. The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Vocabulary cap, topic count and result cap for the analyzer
    pub analyzer: AnalyzerConfig,
    /// Caller-side gate: fewer tokens than this after cleaning is rejected
    pub min_tokens: usize,
    /// Article download timeout
    pub fetch_timeout: Duration,
    /// User agent sent when downloading articles
    pub user_agent: String,
    /// Address the HTTP server binds to
    pub bind: String,
    /// Port the HTTP server listens on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analyzer: AnalyzerConfig::default(),
            min_tokens: DEFAULT_MIN_TOKENS,
            fetch_timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            bind: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to their defaults.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let analyzer = AnalyzerConfig {
            max_features: env_or("NEWSCLOUD_MAX_FEATURES", defaults.analyzer.max_features),
            n_topics: env_or("NEWSCLOUD_TOPICS", defaults.analyzer.n_topics),
            top_n: env_or("NEWSCLOUD_TOP_N", defaults.analyzer.top_n),
            ..defaults.analyzer.clone()
        };

        let config = Self {
            analyzer,
            min_tokens: env_or("NEWSCLOUD_MIN_TOKENS", defaults.min_tokens),
            fetch_timeout: Duration::from_secs(env_or(
                "NEWSCLOUD_FETCH_TIMEOUT_SECS",
                defaults.fetch_timeout.as_secs(),
            )),
            user_agent: env::var("NEWSCLOUD_USER_AGENT").unwrap_or(defaults.user_agent),
            bind: env::var("NEWSCLOUD_BIND").unwrap_or(defaults.bind),
            port: env_or("PORT", defaults.port),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make every analysis come back empty.
    pub fn validate(&self) -> Result<()> {
        if self.analyzer.max_features == 0 {
            anyhow::bail!("NEWSCLOUD_MAX_FEATURES must be at least 1");
        }
        if self.analyzer.n_topics == 0 {
            anyhow::bail!("NEWSCLOUD_TOPICS must be at least 1");
        }
        if self.analyzer.top_n == 0 {
            anyhow::bail!("NEWSCLOUD_TOP_N must be at least 1");
        }
        Ok(())
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.analyzer.max_features, 100);
        assert_eq!(config.analyzer.n_topics, 5);
        assert_eq!(config.analyzer.top_n, 30);
        assert_eq!(config.min_tokens, 10);
        assert_eq!(config.port, 8000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_topics_invalid() {
        let mut config = Config::default();
        config.analyzer.n_topics = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_or_falls_back_on_garbage() {
        assert_eq!(env_or("NEWSCLOUD_TEST_UNSET_VARIABLE", 7usize), 7);
    }
}
