//! Logging setup.

use log::{LevelFilter, SetLoggerError};

/// Initialize the logger with the specified level.
///
/// `RUST_LOG` is read first and `level` overrides its global filter. Fails
/// if a logger is already installed.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init()
}
