//! Geosphere configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use geosphere_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use schema::{
    CollisionProfile, GeosphereConfig, LogLevel, NormalMode, OutputFormat, CONFIG_SCHEMA_VERSION,
};
pub use toml_writer::save_config_to_path;

use geosphere_common::ConfigError;
use std::path::Path;

/// Load and validate config.
///
/// With `Some(path)` the file must exist. With `None` the platform default
/// path is used, and a commented default file is created there if missing.
pub fn load_config(path: Option<&Path>) -> Result<GeosphereConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GeosphereConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
