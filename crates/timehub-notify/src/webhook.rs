//! Webhook delivery of session records.

use std::time::Duration;

use tracing::{debug, warn};

use timehub_core::config::webhook::WebhookConfig;
use timehub_core::error::AppError;
use timehub_core::result::AppResult;
use timehub_entity::TimeLog;
use timehub_service::sink::LogSink;

/// Posts each completed session record as JSON to a configured webhook
/// URL. Delivery happens on a spawned task and failures are logged and
/// dropped, so a slow or dead endpoint never stalls a timer transition.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    /// Build a notifier from configuration. Returns `None` when no
    /// webhook URL is configured, which disables delivery entirely.
    pub fn from_config(config: &WebhookConfig) -> AppResult<Option<Self>> {
        let Some(url) = config.url.as_ref().filter(|u| !u.trim().is_empty()) else {
            return Ok(None);
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    timehub_core::error::ErrorKind::Configuration,
                    "Failed to build webhook HTTP client",
                    e,
                )
            })?;

        Ok(Some(Self {
            client,
            url: url.clone(),
        }))
    }
}

impl LogSink for WebhookNotifier {
    fn deliver(&self, log: TimeLog) {
        let client = self.client.clone();
        let url = self.url.clone();

        tokio::spawn(async move {
            let result = client.post(&url).json(&log).send().await;
            match result {
                Ok(response) if response.status().is_success() => {
                    debug!(log_id = %log.id, "webhook delivered");
                }
                Ok(response) => {
                    warn!(
                        log_id = %log.id,
                        status = %response.status(),
                        "webhook endpoint rejected session record"
                    );
                }
                Err(e) => {
                    warn!(log_id = %log.id, error = %e, "webhook delivery failed");
                }
            }
        });
    }
}
