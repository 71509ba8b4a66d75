//! # timehub-core
//!
//! Core crate for TimeHub. Contains configuration schemas, the unified
//! error system, and the pure calculators (elapsed-duration and time-limit
//! parsing) that the lifecycle engine and sweep are built on.
//!
//! This crate has **no** internal dependencies on other TimeHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
