//! Webhook sink configuration.

use serde::{Deserialize, Serialize};

/// Outbound webhook sink configuration.
///
/// Every completed timer session is POSTed to `url` as JSON. Delivery is
/// best-effort: failures are logged and ignored, and no endpoint waits on
/// the sink.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WebhookConfig {
    /// Destination URL. `None` disables delivery entirely.
    #[serde(default)]
    pub url: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_timeout() -> u64 {
    3
}
