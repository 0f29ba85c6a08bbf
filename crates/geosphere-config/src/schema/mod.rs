//! Configuration schema types for Geosphere.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the values the demo scene uses.

mod shading;
mod sphere;
mod system;

pub use shading::*;
pub use sphere::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Geosphere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct GeosphereConfig {
    pub sphere: SphereConfig,
    pub weld: WeldConfig,
    pub normals: NormalsConfig,
    pub collision: CollisionConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
