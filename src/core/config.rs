// src/core/config.rs
use std::env;
use std::str::FromStr;

use log::LevelFilter;

use crate::models::ClassSet;

// Configuration for the generator front-ends
#[derive(Debug, Clone)]
pub struct Config {
    // Length slider bounds
    pub min_length: usize,
    pub max_length: usize,

    // Password Generation
    pub default_length: usize,
    pub default_classes: ClassSet,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_length: 4,
            max_length: 32,

            default_length: 10,
            default_classes: ClassSet::all(),

            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unparsable values are
    /// ignored and the default kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(val) = lookup("PASSMETER_MIN_LENGTH") {
            match val.parse::<usize>() {
                Ok(min) if min >= 1 => config.min_length = min,
                _ => log::warn!("Ignoring invalid PASSMETER_MIN_LENGTH '{}'", val),
            }
        }

        if let Some(val) = lookup("PASSMETER_MAX_LENGTH") {
            match val.parse::<usize>() {
                Ok(max) if max >= 1 => config.max_length = max,
                _ => log::warn!("Ignoring invalid PASSMETER_MAX_LENGTH '{}'", val),
            }
        }

        if config.min_length > config.max_length {
            log::warn!(
                "Length range {}..={} is inverted, swapping bounds",
                config.min_length,
                config.max_length
            );
            std::mem::swap(&mut config.min_length, &mut config.max_length);
        }

        // Password Generation
        if let Some(val) = lookup("PASSMETER_DEFAULT_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) => config.default_length = length,
                Err(_) => log::warn!("Ignoring invalid PASSMETER_DEFAULT_LENGTH '{}'", val),
            }
        }
        config.default_length = config.clamp_length(config.default_length);

        if let Some(val) = lookup("PASSMETER_DEFAULT_CLASSES") {
            match ClassSet::from_str(&val) {
                Ok(classes) if !classes.is_empty() => config.default_classes = classes,
                Ok(_) => log::warn!("PASSMETER_DEFAULT_CLASSES is empty, keeping all classes"),
                Err(e) => log::warn!("Ignoring PASSMETER_DEFAULT_CLASSES: {}", e),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        config
    }

    /// Keeps a requested length inside the configured slider range.
    pub fn clamp_length(&self, length: usize) -> usize {
        length.clamp(self.min_length, self.max_length)
    }
}
