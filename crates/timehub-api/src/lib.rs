//! # timehub-api
//!
//! HTTP surface of TimeHub. Thin Axum handlers over the service layer:
//! request DTOs in, domain calls, response DTOs out. All state handling
//! lives below this crate.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
