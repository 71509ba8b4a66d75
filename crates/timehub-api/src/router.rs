//! Route definitions for the TimeHub HTTP API.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state);

    Router::new()
        .merge(timer_routes())
        .merge(log_routes())
        .merge(settings_routes())
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Timer lifecycle and status endpoints
fn timer_routes() -> Router<AppState> {
    Router::new()
        .route("/timer/start", post(handlers::timer::start_timer))
        .route("/timer/stop", post(handlers::timer::stop_timer))
        .route("/timer/status/bulk", get(handlers::timer::bulk_status))
}

/// Log history and correction endpoints. GET takes a card id, PUT and
/// DELETE take a log id; the capture name is shared because the path is.
fn log_routes() -> Router<AppState> {
    Router::new().route(
        "/timer/logs/{id}",
        get(handlers::logs::card_logs)
            .put(handlers::logs::update_log)
            .delete(handlers::logs::delete_log),
    )
}

/// Per-card settings endpoints
fn settings_routes() -> Router<AppState> {
    Router::new().route("/timer/settings", post(handlers::settings::save_settings))
}

/// Health endpoints
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

fn build_cors_layer(state: &AppState) -> CorsLayer {
    use http::Method;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
