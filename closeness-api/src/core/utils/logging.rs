use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Build the log filter, `RUST_LOG` takes precedence over `log_level` when set.
pub fn get_log_env(log_level: String) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

fn init_global_logger(log_level: &str) {
    INIT.call_once(|| {
        // a subscriber may already be installed by the embedding application
        let _ = fmt()
            .with_env_filter(get_log_env(log_level.to_string()))
            .with_test_writer()
            .try_init();
    });
}

pub fn global_info_logger() {
    init_global_logger("INFO")
}

pub fn global_debug_logger() {
    init_global_logger("DEBUG")
}
