//! Sweep runner — periodic limit enforcement loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;
use tracing;

use timehub_core::config::sweep::SweepConfig;
use timehub_service::timer::LimitEnforcer;

/// Periodic runner that drives the limit enforcer.
#[derive(Debug)]
pub struct SweepRunner {
    enforcer: Arc<LimitEnforcer>,
    config: SweepConfig,
}

impl SweepRunner {
    /// Create a new sweep runner.
    pub fn new(enforcer: Arc<LimitEnforcer>, config: SweepConfig) -> Self {
        Self { enforcer, config }
    }

    /// Start the sweep loop — runs until the cancel signal is received.
    ///
    /// Each cycle is independent: a failing cycle is logged and the
    /// loop keeps going, the next interval gets a fresh attempt.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        let interval = Duration::from_secs(self.config.interval_seconds);
        tracing::info!(
            "Sweep started with interval={}s, mode={:?}",
            self.config.interval_seconds,
            self.config.mode
        );

        loop {
            tokio::select! {
                _ = cancel.changed() => {
                    if *cancel.borrow() {
                        tracing::info!("Sweep received shutdown signal");
                        break;
                    }
                }
                _ = time::sleep(interval) => {
                    self.run_once().await;
                }
            }
        }

        tracing::info!("Sweep shut down complete");
    }

    /// Run a single enforcement cycle.
    async fn run_once(&self) {
        match self.enforcer.run_cycle().await {
            Ok(0) => {
                tracing::debug!("Sweep cycle complete, nothing to expire");
            }
            Ok(expired) => {
                tracing::info!("Sweep cycle expired {} timer(s)", expired);
            }
            Err(e) => {
                tracing::error!("Sweep cycle failed: {}", e);
            }
        }
    }
}
