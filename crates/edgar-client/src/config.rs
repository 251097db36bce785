//! Configuration for the EDGAR client

use crate::error::{EdgarError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Company ticker directory published by the SEC
pub const DEFAULT_DIRECTORY_URL: &str = "https://www.sec.gov/files/company_tickers.json";

/// Base for `CIK##########.json` submissions documents
pub const DEFAULT_SUBMISSIONS_BASE_URL: &str = "https://data.sec.gov/submissions";

/// Base for filing document archives
pub const DEFAULT_ARCHIVES_BASE_URL: &str = "https://www.sec.gov/Archives/edgar/data";

/// Environment variable holding the identifying `User-Agent`
pub const USER_AGENT_ENV: &str = "EDGAR_USER_AGENT";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How a filing date is matched against a requested year and quarter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateMatching {
    /// Literal prefix match on `YYYY`, month read from characters 5..7
    #[default]
    Prefix,
    /// Parse as `%Y-%m-%d` and compare year and month numerically
    Parsed,
}

/// Configuration for [`EdgarClient`](crate::EdgarClient)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgarConfig {
    /// Identifying `User-Agent`; SEC requires an application name and contact email
    pub user_agent: String,

    /// Company ticker directory URL
    pub directory_url: String,

    /// Submissions base URL (no trailing slash)
    pub submissions_base_url: String,

    /// Filing archive base URL used when composing document links
    pub archives_base_url: String,

    /// Per-request timeout
    pub request_timeout: Duration,

    /// Filing date matching mode
    pub date_matching: DateMatching,
}

impl EdgarConfig {
    /// Configuration pointing at the public SEC endpoints
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            directory_url: DEFAULT_DIRECTORY_URL.to_string(),
            submissions_base_url: DEFAULT_SUBMISSIONS_BASE_URL.to_string(),
            archives_base_url: DEFAULT_ARCHIVES_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            date_matching: DateMatching::Prefix,
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> EdgarConfigBuilder {
        EdgarConfigBuilder::default()
    }

    /// Build from `EDGAR_USER_AGENT` with default endpoints
    pub fn from_env() -> Result<Self> {
        Self::builder().user_agent_from_env().build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let agent = self.user_agent.trim();
        if agent.is_empty() {
            return Err(EdgarError::Config(format!(
                "user agent is required (set {USER_AGENT_ENV})"
            )));
        }
        if !agent.contains('@') {
            return Err(EdgarError::Config(
                "user agent must include a contact email".to_string(),
            ));
        }

        for (name, value) in [
            ("directory_url", &self.directory_url),
            ("submissions_base_url", &self.submissions_base_url),
            ("archives_base_url", &self.archives_base_url),
        ] {
            let url = Url::parse(value).map_err(|e| {
                EdgarError::Config(format!("{name} '{value}' is not a valid URL: {e}"))
            })?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(EdgarError::Config(format!(
                    "{name} must use http or https, got '{}'",
                    url.scheme()
                )));
            }
        }

        if self.request_timeout.is_zero() {
            return Err(EdgarError::Config(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for EdgarConfig
#[derive(Debug, Default)]
pub struct EdgarConfigBuilder {
    user_agent: Option<String>,
    directory_url: Option<String>,
    submissions_base_url: Option<String>,
    archives_base_url: Option<String>,
    request_timeout: Option<Duration>,
    date_matching: Option<DateMatching>,
}

impl EdgarConfigBuilder {
    /// Set the identifying user agent, e.g. `"MyApp admin@example.com"`
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Load the user agent from `EDGAR_USER_AGENT` if it is set
    pub fn user_agent_from_env(mut self) -> Self {
        if let Ok(agent) = std::env::var(USER_AGENT_ENV) {
            self.user_agent = Some(agent);
        }
        self
    }

    pub fn directory_url(mut self, url: impl Into<String>) -> Self {
        self.directory_url = Some(url.into());
        self
    }

    pub fn submissions_base_url(mut self, url: impl Into<String>) -> Self {
        self.submissions_base_url = Some(url.into());
        self
    }

    pub fn archives_base_url(mut self, url: impl Into<String>) -> Self {
        self.archives_base_url = Some(url.into());
        self
    }

    /// Set request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    pub fn date_matching(mut self, mode: DateMatching) -> Self {
        self.date_matching = Some(mode);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<EdgarConfig> {
        let defaults = EdgarConfig::new(self.user_agent.unwrap_or_default());

        let config = EdgarConfig {
            directory_url: self.directory_url.unwrap_or(defaults.directory_url),
            submissions_base_url: trim_base(
                self.submissions_base_url.unwrap_or(defaults.submissions_base_url),
            ),
            archives_base_url: trim_base(
                self.archives_base_url.unwrap_or(defaults.archives_base_url),
            ),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            date_matching: self.date_matching.unwrap_or(defaults.date_matching),
            user_agent: defaults.user_agent,
        };

        config.validate()?;
        Ok(config)
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const AGENT: &str = "edgar-rs tests@example.com";

    #[test]
    fn test_default_config() {
        let config = EdgarConfig::new(AGENT);
        assert_eq!(config.directory_url, DEFAULT_DIRECTORY_URL);
        assert_eq!(config.submissions_base_url, DEFAULT_SUBMISSIONS_BASE_URL);
        assert_eq!(config.archives_base_url, DEFAULT_ARCHIVES_BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.date_matching, DateMatching::Prefix);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = EdgarConfig::builder()
            .user_agent(AGENT)
            .submissions_base_url("http://127.0.0.1:8080/submissions/")
            .request_timeout(Duration::from_secs(5))
            .date_matching(DateMatching::Parsed)
            .build()
            .unwrap();

        assert_eq!(config.user_agent, AGENT);
        assert_eq!(config.submissions_base_url, "http://127.0.0.1:8080/submissions");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.date_matching, DateMatching::Parsed);
    }

    #[test]
    fn test_validation_missing_user_agent() {
        let err = EdgarConfig::builder().build().unwrap_err();
        assert!(matches!(err, EdgarError::Config(ref msg) if msg.contains(USER_AGENT_ENV)));
    }

    #[test]
    fn test_validation_user_agent_without_email() {
        let config = EdgarConfig::new("edgar-rs");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bad_urls() {
        let config = EdgarConfig {
            directory_url: "not a url".to_string(),
            ..EdgarConfig::new(AGENT)
        };
        assert!(config.validate().is_err());

        let config = EdgarConfig {
            archives_base_url: "ftp://www.sec.gov/Archives".to_string(),
            ..EdgarConfig::new(AGENT)
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = EdgarConfig {
            request_timeout: Duration::ZERO,
            ..EdgarConfig::new(AGENT)
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_env() {
        // Both cases share one test so no other test observes the variable
        unsafe {
            std::env::set_var(USER_AGENT_ENV, "edgar-rs env@example.com");
        }

        let config = EdgarConfig::from_env().unwrap();
        assert_eq!(config.user_agent, "edgar-rs env@example.com");
        assert_eq!(config.submissions_base_url, DEFAULT_SUBMISSIONS_BASE_URL);

        let config = EdgarConfig::builder()
            .user_agent("explicit@example.com")
            .user_agent_from_env()
            .build()
            .unwrap();
        assert_eq!(config.user_agent, "edgar-rs env@example.com");

        unsafe {
            std::env::remove_var(USER_AGENT_ENV);
        }

        let result = EdgarConfig::from_env();
        assert!(matches!(result, Err(EdgarError::Config(_))));

        let config = EdgarConfig::builder()
            .user_agent("explicit@example.com")
            .user_agent_from_env()
            .build()
            .unwrap();
        assert_eq!(config.user_agent, "explicit@example.com");
    }

    #[test]
    fn test_date_matching_serde() {
        assert_eq!(
            serde_json::to_string(&DateMatching::Parsed).unwrap(),
            "\"parsed\""
        );
        let mode: DateMatching = serde_json::from_str("\"prefix\"").unwrap();
        assert_eq!(mode, DateMatching::Prefix);
    }
}
