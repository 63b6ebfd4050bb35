//! Structured logging with tracing.
//!
//! Logs go to stderr so stdout carries only the game itself. The filter is
//! read from `SCRABBLE_LOG`, then `RUST_LOG`, falling back to the level the
//! caller passes.

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable checked first for a log filter.
pub const LOG_ENV: &str = "SCRABBLE_LOG";

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        init_logging("debug");
        init_logging("warn");
        tracing::debug!("logging initialized");
    }
}
