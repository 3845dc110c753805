use crate::error::AppError;
use crate::orders::OrderDirectory;
use crate::vapi_types::AssistantConfig;

use serde_json::Value;
use tracing::error;

/// Process-wide immutable state: credentials and base URL for the voice
/// platform, one shared HTTP client, and the order table.  Built once in
/// main and handed to every handler behind an Arc.
pub struct AppState {
    pub vapi_api_key: String,
    pub vapi_base_url: String,
    pub http_client: reqwest::Client,
    pub orders: OrderDirectory,
}

impl AppState {
    /// Register an assistant profile with the platform and return its
    /// response body untouched.
    pub async fn create_assistant(&self, config: &AssistantConfig) -> Result<Value, AppError> {
        let url = format!("{}/assistant", self.vapi_base_url);
        let resp = self
            .http_client
            .post(url)
            .bearer_auth(&self.vapi_api_key)
            .json(config)
            .send()
            .await
            .map_err(|e| {
                error!(error=%e, "failed to send assistant request to the platform");
                AppError("Failed to create assistant")
            })?;
        if !resp.status().is_success() {
            let status = resp.status();
            let payload = resp.text().await.unwrap_or_default();
            error!(status=%status, payload=%payload, "platform rejected assistant request");
            return Err(AppError("Failed to create assistant"));
        }
        resp.json().await.map_err(|e| {
            error!(error=%e, "failed to decode assistant response from the platform");
            AppError("Failed to create assistant")
        })
    }

    /// Fetch the record for a single call from the platform.
    pub async fn get_call(&self, call_id: &str) -> Result<Value, AppError> {
        let url = format!("{}/call/{}", self.vapi_base_url, call_id);
        let resp = self
            .http_client
            .get(url)
            .bearer_auth(&self.vapi_api_key)
            .send()
            .await
            .map_err(|e| {
                error!(error=%e, "failed to send call request to the platform");
                AppError("Failed to fetch call data")
            })?;
        if !resp.status().is_success() {
            let status = resp.status();
            let payload = resp.text().await.unwrap_or_default();
            error!(status=%status, payload=%payload, call_id, "platform rejected call request");
            return Err(AppError("Failed to fetch call data"));
        }
        resp.json().await.map_err(|e| {
            error!(error=%e, "failed to decode call response from the platform");
            AppError("Failed to fetch call data")
        })
    }
}
