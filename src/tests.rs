use std::sync::Once;

mod errors;
mod platform;

static INIT_LOGGING: Once = Once::new();

/// Routes `tracing` output to the test harness. Only the first call installs the subscriber.
fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}
