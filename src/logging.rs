//! Logger setup for the `drills` binary

use log::LevelFilter;
use std::env;

/// Initialize the logger.
///
/// `debug` forces `Debug` level. Otherwise `RUST_LOG` is honored when set,
/// and the default is `Warn`.
pub fn init_logger(debug: bool) {
    let mut builder = if debug {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(LevelFilter::Debug);
        builder
    } else if env::var("RUST_LOG").is_ok() {
        env_logger::Builder::from_default_env()
    } else {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(LevelFilter::Warn);
        builder
    };

    builder.format_timestamp(None).init();
}
