//! # timehub-service
//!
//! Business logic for TimeHub. The timer module carries the core of the
//! system: the per-member lifecycle state machine, the limit-enforcement
//! engine shared by the sweep and inline status checks, and the bulk
//! status projector. Log administration and settings are thin layers
//! over their stores.

pub mod log;
pub mod settings;
pub mod sink;
pub mod timer;
