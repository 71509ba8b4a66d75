//! Core value types and pure calculators.

pub mod duration;
pub mod limit;

pub use duration::{elapsed_seconds, elapsed_seconds_at, parse_start_time};
pub use limit::TimeLimit;
