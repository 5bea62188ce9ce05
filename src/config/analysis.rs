//! Analysis service configuration

use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Remote analysis function settings
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Endpoint of the analysis function; the mock service is used when unset
    pub endpoint: Option<String>,

    /// Bearer key sent with each analysis request
    pub api_key: Option<SecretString>,

    /// Deadline for one analysis call, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AnalysisConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn is_remote(&self) -> bool {
        self.endpoint.as_ref().is_some_and(|e| !e.is_empty())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(endpoint) = &self.endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ValidationError::InvalidAnalysisEndpoint);
            }
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    120
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_config_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(120));
        assert!(!config.is_remote());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_endpoint_must_be_http() {
        let config = AnalysisConfig {
            endpoint: Some("ftp://functions.example.com".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidAnalysisEndpoint)
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = AnalysisConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidTimeout)));
    }
}
