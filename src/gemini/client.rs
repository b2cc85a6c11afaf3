// Gemini API client
// Author: kelexine (https://github.com/kelexine)

use super::ContentGenerator;
use crate::config::GeminiConfig;
use crate::error::{Result, TranslateError};
use crate::models::gemini::{GenerateContentRequest, GenerateContentResponse};
use crate::utils::logging::sanitize;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error};
use zeroize::Zeroizing;

/// Client for the public Gemini `generateContent` API.
///
/// Each client owns its API key; nothing is registered globally, so two
/// clients with different keys can coexist in one process.
pub struct GeminiClient {
    http_client: Client,
    api_key: Zeroizing<String>,
    api_base_url: String,
}

impl GeminiClient {
    /// Create a client bound to `api_key`.
    pub fn new(api_key: impl Into<String>, config: &GeminiConfig) -> Result<Self> {
        let mut builder = Client::builder().use_rustls_tls();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build().map_err(|e| {
            TranslateError::Transport(format!("Failed to create HTTP client: {}", e))
        })?;

        debug!("Created HTTP client for {}", config.api_base_url);

        Ok(Self {
            http_client,
            api_key: Zeroizing::new(api_key.into()),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the API base_url
    pub fn base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Call Gemini `generateContent` once. No retries.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
        model: &str,
    ) -> Result<GenerateContentResponse> {
        let url = format!("{}/models/{}:generateContent", self.api_base_url, model);
        debug!("Calling generateContent API for model: {}", model);

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", self.api_key.as_str())
            .json(request)
            .send()
            .await
            .map_err(|e| TranslateError::Transport(self.redact(&e.to_string())))?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            TranslateError::Transport(format!("Failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            let message = Self::extract_error_message(&response_text)
                .unwrap_or_else(|| response_text.trim().to_string());
            let message = self.redact(&message);
            error!("Gemini API error: HTTP {} - {}", status, message);
            // An empty body still gets the canonical reason, e.g. "500 Internal Server Error"
            if message.is_empty() {
                return Err(TranslateError::Transport(status.to_string()));
            }
            return Err(TranslateError::Transport(format!("{} {}", status.as_u16(), message)));
        }

        serde_json::from_str(&response_text).map_err(|e| {
            error!("Failed to parse Gemini response: {}", e);
            TranslateError::Transport(format!("Response parsing error: {}", e))
        })
    }

    /// Extract error message from API response JSON
    fn extract_error_message(response_text: &str) -> Option<String> {
        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            error: Option<ErrorDetail>,
        }

        #[derive(serde::Deserialize)]
        struct ErrorDetail {
            message: Option<String>,
            status: Option<String>,
        }

        let error = serde_json::from_str::<ErrorResponse>(response_text).ok()?.error?;
        error.message.or(error.status)
    }

    fn redact(&self, message: &str) -> String {
        sanitize(message, Some(self.api_key.as_str()))
    }
}

impl ContentGenerator for GeminiClient {
    fn generate(
        &self,
        request: &GenerateContentRequest,
        model: &str,
    ) -> impl Future<Output = Result<GenerateContentResponse>> + Send {
        self.generate_content(request, model)
    }
}
