//! TimeHub Server — work-timer tracking service for board power-ups.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tokio::sync::watch;
use tracing;
use tracing_subscriber::{EnvFilter, fmt};

use timehub_core::config::AppConfig;
use timehub_core::error::AppError;
use timehub_service::sink::LogSink;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("TIMEHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting TimeHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db_pool = timehub_database::connection::create_pool(&config.database).await?;

    tracing::info!("Running database migrations...");
    timehub_database::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Initialize repositories ──────────────────────────
    let timer_store: Arc<dyn timehub_database::stores::TimerStore> = Arc::new(
        timehub_database::repositories::timer::TimerRepository::new(db_pool.clone()),
    );
    let log_store: Arc<dyn timehub_database::stores::LogStore> = Arc::new(
        timehub_database::repositories::log::LogRepository::new(db_pool.clone()),
    );
    let settings_store: Arc<dyn timehub_database::stores::SettingsStore> = Arc::new(
        timehub_database::repositories::settings::SettingsRepository::new(db_pool.clone()),
    );

    // ── Step 3: Initialize webhook sink ──────────────────────────
    let sink: Option<Arc<dyn LogSink>> =
        match timehub_notify::WebhookNotifier::from_config(&config.webhook)? {
            Some(notifier) => {
                tracing::info!("Webhook delivery enabled");
                Some(Arc::new(notifier))
            }
            None => {
                tracing::info!("Webhook delivery disabled (no URL configured)");
                None
            }
        };

    // ── Step 4: Initialize services ───────────────────────────────
    tracing::info!("Initializing services...");
    let timer_service = Arc::new(timehub_service::timer::TimerService::new(
        Arc::clone(&timer_store),
        Arc::clone(&log_store),
        sink,
    ));
    let enforcer = Arc::new(timehub_service::timer::LimitEnforcer::new(
        Arc::clone(&timer_store),
        Arc::clone(&log_store),
        Arc::clone(&settings_store),
        Arc::clone(&timer_service),
        config.sweep.mode,
        config.status.aggregate_chunk_size,
    ));
    let status_service = Arc::new(timehub_service::timer::StatusService::new(
        Arc::clone(&timer_store),
        Arc::clone(&log_store),
        Arc::clone(&enforcer),
        config.status.inline_enforcement,
        config.status.aggregate_chunk_size,
    ));
    let log_service = Arc::new(timehub_service::log::LogService::new(
        Arc::clone(&log_store),
        Arc::clone(&settings_store),
    ));
    let settings_service = Arc::new(timehub_service::settings::SettingsService::new(Arc::clone(
        &settings_store,
    )));
    tracing::info!("Services initialized");

    // ── Step 5: Shutdown channel ─────────────────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // ── Step 6: Start limit sweep ────────────────────────────────
    let sweep_handle = if config.sweep.enabled {
        let runner =
            timehub_worker::SweepRunner::new(Arc::clone(&enforcer), config.sweep.clone());
        let sweep_cancel = shutdown_rx.clone();
        let handle = tokio::spawn(async move {
            runner.run(sweep_cancel).await;
        });
        tracing::info!("Limit sweep started");
        Some(handle)
    } else {
        tracing::info!("Limit sweep disabled");
        None
    };

    // ── Step 7: Build and start HTTP server ──────────────────────
    tracing::info!(
        "Starting HTTP server on {}:{}...",
        config.server.host,
        config.server.port
    );

    let app_state = timehub_api::AppState {
        config: Arc::new(config.clone()),
        timer_service,
        status_service,
        log_service,
        settings_service,
    };

    let app = timehub_api::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("TimeHub server listening on {}", addr);

    // ── Step 8: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    // ── Step 9: Wait for background tasks ────────────────────────
    if let Some(handle) = sweep_handle {
        tracing::info!("Waiting for sweep to complete...");
        let grace = std::time::Duration::from_secs(config.server.shutdown_grace_seconds);
        let _ = tokio::time::timeout(grace, handle).await;
    }

    tracing::info!("TimeHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
