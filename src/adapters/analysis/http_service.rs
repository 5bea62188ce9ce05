//! HTTP Analysis Service - calls a remote analysis function over HTTPS.
//!
//! The request body is `{"formData": <form>}`; a successful response body is
//! the analysis result JSON itself.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpAnalysisConfig::new("https://functions.example.com/analyze-decision")
//!     .with_api_key(key)
//!     .with_timeout(Duration::from_secs(120));
//!
//! let service = HttpAnalysisService::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::time::Duration;

use crate::config::AnalysisConfig;
use crate::domain::analysis::AnalysisResult;
use crate::domain::decision::DecisionFormData;
use crate::ports::{AnalysisService, AnalysisServiceError, ProgressCallback};

/// Configuration for the HTTP analysis service.
#[derive(Debug, Clone)]
pub struct HttpAnalysisConfig {
    pub endpoint: String,
    api_key: Option<SecretString>,
    pub timeout: Duration,
}

impl HttpAnalysisConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds from the `analysis` config section. `None` without an endpoint.
    pub fn from_app_config(config: &AnalysisConfig) -> Option<Self> {
        let endpoint = config.endpoint.as_ref()?;
        Some(Self {
            endpoint: endpoint.clone(),
            api_key: config.api_key.clone(),
            timeout: config.timeout(),
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeRequest<'a> {
    form_data: &'a DecisionFormData,
}

/// [`AnalysisService`] backed by an HTTP endpoint.
pub struct HttpAnalysisService {
    config: HttpAnalysisConfig,
    client: Client,
}

impl HttpAnalysisService {
    pub fn new(config: HttpAnalysisConfig) -> Result<Self, AnalysisServiceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AnalysisServiceError::unavailable(format!("HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }

    async fn send(&self, form: &DecisionFormData) -> Result<Response, AnalysisServiceError> {
        let mut request = self
            .client
            .post(&self.config.endpoint)
            .json(&AnalyzeRequest { form_data: form });
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        request.send().await.map_err(|e| {
            if e.is_timeout() {
                AnalysisServiceError::Timeout {
                    timeout_secs: self.config.timeout.as_secs(),
                }
            } else if e.is_connect() {
                AnalysisServiceError::unavailable(format!("Connection failed: {}", e))
            } else {
                AnalysisServiceError::unavailable(e.to_string())
            }
        })
    }

    async fn check_status(response: Response) -> Result<Response, AnalysisServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        match status.as_u16() {
            400..=499 => Err(AnalysisServiceError::Rejected(format!("{}: {}", status, body))),
            _ => Err(AnalysisServiceError::unavailable(format!(
                "Server error {}: {}",
                status, body
            ))),
        }
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    async fn analyze(
        &self,
        form: &DecisionFormData,
        on_progress: ProgressCallback<'_>,
    ) -> Result<AnalysisResult, AnalysisServiceError> {
        on_progress("Analyzing your options...");
        let response = Self::check_status(self.send(form).await?).await?;

        on_progress("Generating recommendation...");
        let body = response
            .text()
            .await
            .map_err(|e| AnalysisServiceError::unavailable(e.to_string()))?;
        AnalysisResult::from_json(&body)
            .map_err(|e| AnalysisServiceError::invalid_response(e.to_string()))
    }
}
