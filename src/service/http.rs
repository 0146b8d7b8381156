//! reqwest-backed client for the summarization backend.
//!
//! Endpoints (relative to the configured base URL):
//! - `POST /summarize` with `{"text": ...}` → `{"summary": ...}`
//! - `GET /` → `{"status": "OK", "message": ...}`
//!
//! No timeout and no retries: a request runs until it succeeds or fails.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;

use crate::service::{HealthStatus, ServiceError, SummarizeRequest, SummarizeResponse, SummaryService};

pub struct HttpSummaryService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSummaryService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Reads the body as text, then as JSON, mapping non-2xx to `Api`.
    async fn read_json(response: reqwest::Response) -> Result<Value, ServiceError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        if !status.is_success() {
            warn!("Backend error: {} - {}", status.as_u16(), body);
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        debug!("Backend replied {} with {} bytes", status.as_u16(), body.len());
        serde_json::from_str(&body).map_err(|e| ServiceError::Parse(e.to_string()))
    }
}

#[async_trait]
impl SummaryService for HttpSummaryService {
    fn endpoint(&self) -> &str {
        &self.base_url
    }

    async fn summarize(&self, text: &str) -> Result<Option<String>, ServiceError> {
        info!("POST {} ({} bytes of input)", self.url("/summarize"), text.len());

        // `.json()` sets `Content-Type: application/json`
        let response = self
            .client
            .post(self.url("/summarize"))
            .json(&SummarizeRequest { text })
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let value = Self::read_json(response).await?;
        let reply = SummarizeResponse::from_value(value)
            .ok_or_else(|| ServiceError::Parse("response body was null".to_string()))?;
        let summary = reply.into_text();
        if summary.is_none() {
            debug!("Reply carried no summary field");
        }
        Ok(summary)
    }

    async fn health(&self) -> Result<HealthStatus, ServiceError> {
        let response = self
            .client
            .get(self.url("/"))
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let value = Self::read_json(response).await?;
        serde_json::from_value(value).map_err(|e| ServiceError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let service = HttpSummaryService::new("http://localhost:5000/");
        assert_eq!(service.endpoint(), "http://localhost:5000");
        assert_eq!(service.url("/summarize"), "http://localhost:5000/summarize");
    }

    #[test]
    fn test_root_url() {
        let service = HttpSummaryService::new("https://example.com/api");
        assert_eq!(service.url("/"), "https://example.com/api/");
    }
}
