//! Logger setup for the CLI

use log::LevelFilter;
use std::env;

/// Initialize the process-wide logger.
///
/// Uses `Debug` level when `verbose` is set, `Info` otherwise. An explicit
/// `RUST_LOG` always wins over the flag. Calling this twice is harmless; the
/// second call is ignored.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
