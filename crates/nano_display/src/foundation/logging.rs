//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with a default filter
///
/// `RUST_LOG` still wins when it is set; `level` (e.g. `"info"` or
/// `"nano_display=debug"`) only applies when the variable is absent.
/// Calling this more than once is harmless.
pub fn init_with_level(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A second initialisation fails because a logger is already installed; keep the first one.
    let _ = env_logger::Builder::from_env(env).try_init();
}
