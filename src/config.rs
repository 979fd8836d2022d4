//! Command-line configuration
//!
//! Logging is configured separately through `RUST_LOG`.

use clap::Parser;
use std::time::Duration;

/// Four-function calculator served over stdio JSON-RPC
#[derive(Debug, Clone, Parser)]
#[command(name = "calculator-mcp", version)]
pub struct Config {
    /// Seconds the ON/OFF status stays on screen after a power toggle
    #[arg(long, env = "CALCULATOR_STATUS_SECS", default_value_t = 5)]
    pub status_secs: u64,
}

impl Config {
    pub fn status_duration(&self) -> Duration {
        Duration::from_secs(self.status_secs)
    }
}
