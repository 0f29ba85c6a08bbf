//! Output and logging configuration types.

use serde::{Deserialize, Serialize};

/// What the CLI prints after building a sphere.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum OutputFormat {
    /// One line of mesh statistics.
    #[default]
    Summary,
    /// Full vertex, normal, and index buffers as JSON.
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Emit `[pos.xyz, normal.xyz]` per vertex instead of separate arrays.
    pub interleaved: bool,
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing-subscriber` filter directive for this level.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "geosphere=debug",
            LogLevel::Info => "geosphere=info",
            LogLevel::Warning => "geosphere=warn",
            LogLevel::Error => "geosphere=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
