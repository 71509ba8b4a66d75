//! # timehub-notify
//!
//! Best-effort outbound delivery of completed session records to an
//! external webhook (typically an n8n workflow endpoint).

pub mod webhook;

pub use webhook::WebhookNotifier;
