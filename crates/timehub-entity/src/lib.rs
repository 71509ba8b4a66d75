//! # timehub-entity
//!
//! Domain entity models for TimeHub: active timers, time logs with their
//! stop actions, and per-card settings. Wire serialization is camelCase
//! to match the power-up client and the webhook sink.

pub mod log;
pub mod settings;
pub mod timer;

pub use log::{StopAction, TimeLog};
pub use settings::CardSettings;
pub use timer::ActiveTimer;
