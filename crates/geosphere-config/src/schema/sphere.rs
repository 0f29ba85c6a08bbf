//! Sphere construction and vertex welding configuration types.

use serde::{Deserialize, Serialize};

/// Base sphere geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    /// Distance of every generated vertex from the origin (valid range: (0, 1e6]).
    pub radius: f64,
    /// Number of geodesic subdivision passes (valid range: 0-8).
    pub subdivisions: u32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            subdivisions: 2,
        }
    }
}

/// Vertex welding settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeldConfig {
    /// Weld grid size as a fraction of the sphere radius
    /// (valid range: (0, 0.01]).
    pub precision: f64,
}

impl Default for WeldConfig {
    fn default() -> Self {
        Self { precision: 1e-5 }
    }
}
