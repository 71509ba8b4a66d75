//! Time log administration.

pub mod service;

pub use service::{CardLogs, LogService};
