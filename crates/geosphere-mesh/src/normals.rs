//! Face and vertex normal generation.

use geosphere_common::MeshError;
use geosphere_config::NormalMode;
use glam::Vec3;

use super::mesh::{Mesh, Triangle};

/// Unnormalized normal of `triangle`: `(a - b) × (b - c)`.
///
/// Its length is twice the triangle's area. With the icosahedron's winding
/// it points away from the origin.
pub fn face_normal(mesh: &Mesh, triangle: Triangle) -> Vec3 {
    let [a, b, c] = mesh.corners(triangle);
    (a - b).cross(b - c)
}

/// One normal per vertex, in vertex order.
pub fn generate_normals(mesh: &Mesh, mode: NormalMode) -> Result<Vec<Vec3>, MeshError> {
    match mode {
        NormalMode::Faceted => Ok(faceted_normals(mesh)),
        NormalMode::Smooth => smooth_normals(mesh),
    }
}

/// Each vertex takes the raw normal of the last triangle that touches it.
///
/// Adjacent faces are not blended, which gives flat-shaded facets.
fn faceted_normals(mesh: &Mesh) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; mesh.vertex_count()];
    for &tri in mesh.triangles() {
        let n = face_normal(mesh, tri);
        for i in tri {
            normals[i as usize] = n;
        }
    }
    normals
}

/// Area-weighted average of every face around a vertex, normalized.
fn smooth_normals(mesh: &Mesh) -> Result<Vec<Vec3>, MeshError> {
    let mut sums = vec![Vec3::ZERO; mesh.vertex_count()];
    for &tri in mesh.triangles() {
        let n = face_normal(mesh, tri);
        for i in tri {
            sums[i as usize] += n;
        }
    }

    sums.into_iter()
        .enumerate()
        .map(|(i, sum)| {
            sum.try_normalize()
                .ok_or_else(|| MeshError::DegenerateDirection {
                    context: format!("normal of vertex {i}"),
                })
        })
        .collect()
}
