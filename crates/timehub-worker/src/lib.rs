//! # timehub-worker
//!
//! Background sweep loop. Runs the limit-enforcement engine on a fixed
//! interval so timers keep expiring even when nobody is looking at the
//! board.

pub mod sweep;

pub use sweep::SweepRunner;
