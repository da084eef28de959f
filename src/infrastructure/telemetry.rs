// src/infrastructure/telemetry.rs
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info";

/// Install a global `tracing` subscriber for hosts that do not set up their own.
///
/// Reads the filter from `RUST_LOG`, falling back to `info`. Calling it more
/// than once is harmless.
pub fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| DEFAULT_FILTER.to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::debug!("tracing subscriber already initialised");
    }
}
