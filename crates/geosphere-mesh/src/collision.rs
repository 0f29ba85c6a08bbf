//! Collision deformation.
//!
//! An impact is a point in space (only its direction from the origin
//! matters) and a magnitude. Each vertex is scaled along its own direction
//! by a factor that depends on how far, on the unit sphere, it lies from the
//! impact direction. That chord distance `eu_dist` runs from `0` at the
//! impact direction to `2` at the antipode.

use geosphere_common::MeshError;
use geosphere_config::CollisionProfile;
use glam::Vec3;

use super::mesh::Mesh;

/// Scale factor applied to a vertex at chord distance `eu_dist` from the
/// impact direction.
pub fn collision_factor(profile: CollisionProfile, eu_dist: f32, magnitude: f32) -> f32 {
    match profile {
        // Grows with distance: the impact point itself collapses to the origin.
        CollisionProfile::Literal => eu_dist * (1.0 + magnitude),
        CollisionProfile::Attenuated => {
            let weight = (1.0 - eu_dist * 0.5).clamp(0.0, 1.0).powi(2);
            (1.0 - magnitude * weight).max(0.0)
        }
    }
}

/// Deform `mesh` in place. Topology is never touched.
///
/// New positions are computed first and swapped in only once every vertex
/// has succeeded, so an error leaves `mesh` exactly as it was.
pub fn apply_collision(
    mesh: &mut Mesh,
    impact: Vec3,
    magnitude: f32,
    profile: CollisionProfile,
) -> Result<(), MeshError> {
    let impact_dir = impact
        .try_normalize()
        .ok_or_else(|| MeshError::DegenerateDirection {
            context: "impact point".into(),
        })?;

    let deformed = mesh
        .vertices()
        .iter()
        .enumerate()
        .map(|(i, &v)| -> Result<Vec3, MeshError> {
            let dir = v.try_normalize().ok_or_else(|| MeshError::DegenerateDirection {
                context: format!("vertex {i}"),
            })?;
            let eu_dist = dir.distance(impact_dir);
            Ok(v * collision_factor(profile, eu_dist, magnitude))
        })
        .collect::<Result<Vec<_>, MeshError>>()?;

    mesh.replace_vertices(deformed);
    tracing::debug!(%impact, magnitude, ?profile, "applied collision");
    Ok(())
}
