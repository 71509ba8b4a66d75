//! Timer lifecycle, limit enforcement, and status projection.

pub mod enforcement;
pub mod service;
pub mod status;

pub use enforcement::LimitEnforcer;
pub use service::{StartOutcome, TimerService};
pub use status::{CardStatus, StatusService};
