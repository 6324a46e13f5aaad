// src/logging/mod.rs
use crate::core::Config;

/// Initialise the global logger. `RUST_LOG`, when set, takes precedence over
/// the configured level.
pub fn init(config: &Config) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .target(env_logger::Target::Stderr);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_err() {
        log::debug!("logger already initialised");
    }
}
