//! Logging utilities

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system with a default level
///
/// `RUST_LOG` still overrides the default. Later calls are ignored.
pub fn init(default_level: log::LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .try_init();
}
