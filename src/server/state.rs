//! Application state container
//!
//! This module defines the shared application state that is passed
//! to all request handlers via Axum's state extraction.

use crate::config::Settings;
use crate::services::{WebhookConfig, WebhookService};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
///
/// Holds the shared resources handlers need access to. Cheaply cloneable
/// (via Arc) and thread-safe.
#[derive(Clone)]
pub struct AppState {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Webhook service for fetching travel recommendations
    pub webhook: Arc<WebhookService>,

    /// Application start time (for uptime calculation)
    pub start_time: Instant,
}

impl AppState {
    /// Create a new application state
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let settings = Arc::new(settings);
        let start_time = Instant::now();

        tracing::debug!(webhook_url = %settings.webhook_url, "Initializing webhook service");
        let webhook_config = WebhookConfig::new(settings.webhook_url.clone())
            .with_timeout(settings.webhook_timeout_seconds);
        let webhook = Arc::new(WebhookService::new(webhook_config)?);

        tracing::info!("Application state initialized");

        Ok(Self {
            settings,
            webhook,
            start_time,
        })
    }

    /// Get the application uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
