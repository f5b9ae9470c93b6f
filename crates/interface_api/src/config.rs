//! API configuration

use chrono::TimeDelta;
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use domain_claims::DEFAULT_PAGE_SIZE;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level: trace, debug, info, warn, error
    pub log_level: String,
    pub log_format: LogFormat,
    /// Rows per page when a request does not say
    pub page_size: usize,
    /// Claim dataset on disk; the bundled sample register when unset
    pub dataset_path: Option<PathBuf>,
    /// Upper bound on live query sessions
    pub max_sessions: usize,
    /// Seconds without a request after which a session may be evicted
    pub session_idle_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            page_size: DEFAULT_PAGE_SIZE.get(),
            dataset_path: None,
            max_sessions: 1024,
            session_idle_secs: 1800,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_`-prefixed environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let config: Self = config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the server cannot run with
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.page_size == 0 {
            return Err(config::ConfigError::Message(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.max_sessions == 0 {
            return Err(config::ConfigError::Message(
                "max_sessions must be at least 1".to_string(),
            ));
        }
        if self.session_idle_secs == 0 {
            return Err(config::ConfigError::Message(
                "session_idle_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Idle time after which a session is evicted
    pub fn session_idle_timeout(&self) -> TimeDelta {
        i64::try_from(self.session_idle_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX)
    }

    /// Configured page size, falling back to the default for 0
    pub fn default_page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.page_size).unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.default_page_size().get(), 25);
        assert_eq!(config.session_idle_timeout(), TimeDelta::minutes(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_idle_timeout_rejected() {
        let config = ApiConfig {
            session_idle_secs: 0,
            ..ApiConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_huge_idle_timeout_saturates() {
        let config = ApiConfig {
            session_idle_secs: u64::MAX,
            ..ApiConfig::default()
        };
        assert_eq!(config.session_idle_timeout(), TimeDelta::MAX);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = ApiConfig {
            page_size: 0,
            ..ApiConfig::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.default_page_size(), DEFAULT_PAGE_SIZE);
    }
}
