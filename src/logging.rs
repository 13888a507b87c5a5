//! Diagnostics for the binaries, written to stderr so stdout only carries answers.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. Filter comes from `RUST_LOG`, `warn` if unset.
///
/// ```bash
/// RUST_LOG=guard_patrol=debug cargo run --bin part2 -- example.txt
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
