use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize a tracing subscriber for tests.
///
/// Output goes through the test writer so it is captured per test. The level
/// comes from `RUST_LOG`, defaulting to "info". Calling this more than once
/// is harmless; only the first call installs a subscriber.
pub fn init() {
    let fmt_layer = fmt::layer()
        .with_test_writer()
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
}
