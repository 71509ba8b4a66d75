//! Bulk status projection configuration.

use serde::{Deserialize, Serialize};

/// Bulk status projection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusConfig {
    /// Whether bulk status performs limit enforcement inline before
    /// projecting, so viewers see an expired timer without waiting for
    /// the next sweep cycle.
    #[serde(default = "default_true")]
    pub inline_enforcement: bool,
    /// Number of card IDs per aggregated-duration query. The store caps
    /// `IN`-list sizes, so larger requests are chunked.
    #[serde(default = "default_chunk_size")]
    pub aggregate_chunk_size: usize,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            inline_enforcement: default_true(),
            aggregate_chunk_size: default_chunk_size(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_chunk_size() -> usize {
    20
}
