//! HTTP request handlers.

pub mod health;
pub mod logs;
pub mod settings;
pub mod timer;
