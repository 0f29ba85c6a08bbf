//! Sphere and weld configuration validation.

use crate::schema::GeosphereConfig;

use super::helpers::{validate_positive_range_f64, validate_range};

/// Largest accepted subdivision depth. Depth 8 is already 655,362 vertices.
pub const MAX_SUBDIVISIONS: u32 = 8;

/// Validate radius and subdivision depth.
pub(crate) fn validate_sphere(errors: &mut Vec<String>, config: &GeosphereConfig) {
    validate_positive_range_f64(errors, "sphere.radius", config.sphere.radius, 0.0, 1e6);
    validate_range(
        errors,
        "sphere.subdivisions",
        config.sphere.subdivisions,
        0,
        MAX_SUBDIVISIONS,
    );
}

/// Validate the weld grid size.
pub(crate) fn validate_weld(errors: &mut Vec<String>, config: &GeosphereConfig) {
    validate_positive_range_f64(errors, "weld.precision", config.weld.precision, 0.0, 1e-2);
}
