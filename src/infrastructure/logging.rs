//! Structured logging using the tracing crate.
//!
//! Logs go to stderr so stdout stays clean for command output.
//! The filter comes from `RUST_LOG` when set, otherwise from the configured level.

use std::sync::OnceLock;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Build the filter: `RUST_LOG` wins, then `fallback`, then "warn".
pub fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize the global subscriber. Later calls are no-ops.
pub fn init_logging(level: &str) {
    INITIALIZED.get_or_init(|| {
        let result = tracing_subscriber::registry()
            .with(build_filter(level))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .try_init();

        if let Err(e) = result {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_level_falls_back() {
        // An unparseable directive must not panic
        let _ = build_filter("not a [valid filter");
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logging("debug");
        init_logging("info");
    }
}
