//! Application state shared across all handlers.

use std::sync::Arc;

use timehub_core::config::AppConfig;
use timehub_service::log::LogService;
use timehub_service::settings::SettingsService;
use timehub_service::timer::{StatusService, TimerService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Timer lifecycle engine
    pub timer_service: Arc<TimerService>,
    /// Bulk status projector
    pub status_service: Arc<StatusService>,
    /// Log history and corrections
    pub log_service: Arc<LogService>,
    /// Per-card settings
    pub settings_service: Arc<SettingsService>,
}
