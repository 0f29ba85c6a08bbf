//! Normal generation and collision deformation configuration types.

use serde::{Deserialize, Serialize};

/// How per-vertex normals are derived from face normals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum NormalMode {
    /// Sum every adjacent face normal and normalize.
    #[default]
    Smooth,
    /// Each vertex keeps the raw normal of the last face that touched it.
    Faceted,
}

/// Normal generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NormalsConfig {
    pub mode: NormalMode,
}

/// Deformation profile applied by a collision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum CollisionProfile {
    /// Scale each vertex by its angular distance from the impact times
    /// `1 + magnitude`. Far vertices move the most.
    #[default]
    Literal,
    /// Dent the surface inward, strongest at the impact direction and
    /// fading to nothing at the antipode.
    Attenuated,
}

/// Collision configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CollisionConfig {
    pub profile: CollisionProfile,
}
