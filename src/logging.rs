//! tracing-subscriber setup
//!
//! Logs go to stderr; stdout is reserved for the usage line and completions.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Tracing target prefix of every event this binary emits
const LOG_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Filter directive scoping `level` to this crate
pub fn filter_directive(level: &str) -> String {
    format!("{LOG_TARGET}={}", level.trim().to_ascii_lowercase())
}

/// Install the global subscriber
pub fn init(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_new(filter_directive(level))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directive("warn")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
