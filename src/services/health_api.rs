use crate::config::AppConfig;
use crate::models::{error::AppError, health::HealthResponse};

/// HTTP client for the backend health endpoint.
pub struct HealthClient {
    http: reqwest::Client,
    url: String,
}

impl HealthClient {
    /// Creates a client targeting the health endpoint of `config`.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            url: config.health_url(),
        })
    }

    /// Returns the URL this client queries.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issues a single `GET` to the health endpoint.
    pub async fn check(&self) -> Result<HealthResponse, AppError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Parse(format!("Failed to parse response: {e}")))
    }
}
