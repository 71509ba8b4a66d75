//! # timehub-database
//!
//! Timer store adapter: connection pool management, migrations, the
//! async store traits the services depend on, and their PostgreSQL
//! implementations.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod stores;

pub use stores::{LogStore, SettingsStore, TimerStore};
