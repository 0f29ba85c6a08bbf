//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod sphere;


pub use sphere::MAX_SUBDIVISIONS;

use crate::schema::GeosphereConfig;
use geosphere_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GeosphereConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sphere::validate_sphere(&mut errors, config);
    sphere::validate_weld(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
