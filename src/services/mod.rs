//! Service layer

mod webhook;

pub use webhook::{WebhookConfig, WebhookError, WebhookService};
