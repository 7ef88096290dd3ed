//! `tracing` setup shared by the harness binary and the test suites.

use tracing::{info_span, Span};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize logging with the default `info` level.
pub fn init_harness_logging() {
    init_harness_logging_with_level("info");
}

/// Initialize logging, honouring `RUST_LOG` when set and falling back to
/// `level` otherwise.
///
/// Output goes to stderr with thread ids and names, since almost every
/// interesting line here is emitted from a scenario worker thread. Safe
/// to call more than once; later calls keep the first subscriber.
pub fn init_harness_logging_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(true)
                .with_thread_names(true),
        )
        .with(filter)
        .try_init();
}

/// Span wrapping one scenario execution.
pub fn scenario_span(index: usize, name: &str) -> Span {
    info_span!("scenario", index, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_harness_logging();
        init_harness_logging_with_level("debug");
        let span = scenario_span(3, "lock_when_handshake");
        let _entered = span.enter();
        tracing::info!("logging ready");
    }
}
