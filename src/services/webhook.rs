//! Webhook relay service
//!
//! This module handles communication with the external workflow webhook
//! that generates travel recommendations. The relay re-issues the client's
//! `{city, country}` request as a GET query string against a fixed URL and
//! normalizes the payload that comes back.

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the upstream webhook
#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned status {code}")]
    Status { code: u16 },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Configuration for the webhook service
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Full webhook URL, including the workflow path
    pub url: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl WebhookConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_seconds: 30,
        }
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }
}

/// Service for fetching travel recommendations from the upstream webhook
#[derive(Debug, Clone)]
pub struct WebhookService {
    /// HTTP client
    client: Client,

    /// Webhook URL
    url: String,
}

impl WebhookService {
    /// Create a new webhook service
    pub fn new(config: WebhookConfig) -> Result<Self, WebhookError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            url: config.url,
        })
    }

    /// Fetch travel recommendations for a city/country pair.
    ///
    /// The two fields are forwarded as URL-encoded query parameters. Any
    /// non-success status or non-JSON body is an error; a successful payload
    /// is normalized with [`unwrap_output`] before being returned.
    pub async fn fetch_recommendations(
        &self,
        city: &str,
        country: &str,
    ) -> Result<Value, WebhookError> {
        tracing::debug!(url = %self.url, city, country, "Calling upstream webhook");

        let response = self
            .client
            .get(&self.url)
            .query(&[("city", city), ("country", country)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebhookError::Status {
                code: status.as_u16(),
            });
        }

        let payload = response
            .json::<Value>()
            .await
            .map_err(|e| WebhookError::Decode(e.to_string()))?;

        Ok(unwrap_output(payload))
    }
}

/// Normalize the upstream payload to the innermost travel object.
///
/// The workflow engine has been observed to return three shapes for the same
/// workflow: the bare travel object, `{"output": {...}}`, and the items form
/// `[{"output": {...}}]`. Clients always read `response.output`, so all three
/// are unwrapped here. Anything else passes through untouched.
pub fn unwrap_output(payload: Value) -> Value {
    match payload {
        Value::Array(mut items) if !items.is_empty() => {
            let first = items.remove(0);
            match first {
                Value::Object(mut map) if map.contains_key("output") => {
                    map.remove("output").unwrap_or(Value::Null)
                }
                other => other,
            }
        }
        Value::Object(mut map) if map.contains_key("output") => {
            map.remove("output").unwrap_or(Value::Null)
        }
        other => other,
    }
}
