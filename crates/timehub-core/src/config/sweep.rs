//! Limit sweep configuration.

use serde::{Deserialize, Serialize};

/// Which limit semantics the sweep enforces.
///
/// `Budget` compares accumulated seconds (past logs plus the current
/// session) against the parsed `HH:MM[:SS]` budget. `Deadline` compares
/// the local wall-clock time of day against the limit string read as a
/// cutoff time. Both variants of the source system exist in production;
/// budget is the canonical default here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepMode {
    /// Accumulated duration vs. budget seconds.
    Budget,
    /// Wall-clock time of day vs. cutoff.
    Deadline,
}

/// Background limit sweep configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Whether the sweep is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Interval in seconds between sweep cycles.
    #[serde(default = "default_interval")]
    pub interval_seconds: u64,
    /// Limit enforcement semantics.
    #[serde(default = "default_mode")]
    pub mode: SweepMode,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            interval_seconds: default_interval(),
            mode: default_mode(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_interval() -> u64 {
    60
}

fn default_mode() -> SweepMode {
    SweepMode::Budget
}
