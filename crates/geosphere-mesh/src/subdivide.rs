//! Geodesic subdivision.
//!
//! Each pass splits every triangle into four. Edge midpoints are pushed
//! back out to the sphere, so the result converges on a sphere instead of
//! a finer copy of the flat icosahedron.
//!
//! ```text
//!            a
//!           / \
//!       m_ca---m_ab
//!         / \ / \
//!        c--m_bc--b
//! ```

use geosphere_common::MeshError;
use glam::Vec3;

use super::icosahedron::{validate_radius, ICOSAHEDRON_TRIANGLE_COUNT};
use super::mesh::Mesh;
use super::weld::VertexWelder;

/// Vertex count after `depth` passes over the icosahedron: `10·4^d + 2`.
pub const fn vertex_count_at_depth(depth: u32) -> usize {
    10 * 4usize.pow(depth) + 2
}

/// Triangle count after `depth` passes over the icosahedron: `20·4^d`.
pub const fn triangle_count_at_depth(depth: u32) -> usize {
    ICOSAHEDRON_TRIANGLE_COUNT * 4usize.pow(depth)
}

/// Run one subdivision pass and return the new mesh.
///
/// The corners of every input triangle are welded into a fresh vertex list
/// along with the new midpoints, so nothing from the previous index space
/// survives into the result. `mesh` is only read; on error it is untouched.
///
/// `precision` is relative to `radius`: the weld grid is `precision * radius`
/// wide, so edge lengths and grid cells shrink together.
pub fn subdivide(mesh: &Mesh, radius: f32, precision: f32) -> Result<Mesh, MeshError> {
    validate_radius(radius)?;
    if !(precision.is_finite() && precision > 0.0) {
        return Err(MeshError::InvalidPrecision(precision));
    }

    // Every edge is shared by two triangles in a closed mesh.
    let edges = mesh.triangle_count() * 3 / 2;
    let mut welder =
        VertexWelder::with_capacity(precision * radius, mesh.vertex_count() + edges)?;
    let mut triangles = Vec::with_capacity(mesh.triangle_count() * 4);

    for &tri in mesh.triangles() {
        let [pa, pb, pc] = mesh.corners(tri);

        let (a, _) = welder.add_vertex(pa);
        let (b, _) = welder.add_vertex(pb);
        let (c, _) = welder.add_vertex(pc);

        let (ab, _) = welder.add_vertex(spherical_midpoint(pa, pb, radius)?);
        let (bc, _) = welder.add_vertex(spherical_midpoint(pb, pc, radius)?);
        let (ca, _) = welder.add_vertex(spherical_midpoint(pc, pa, radius)?);

        triangles.push([a, ab, ca]);
        triangles.push([b, bc, ab]);
        triangles.push([c, ca, bc]);
        triangles.push([ab, bc, ca]);
    }

    let out = Mesh::new(welder.into_vertices(), triangles);
    tracing::debug!(
        vertices = out.vertex_count(),
        triangles = out.triangle_count(),
        "subdivision pass complete"
    );
    Ok(out)
}

/// Midpoint of `p` and `q`, rescaled to lie at `radius` from the origin.
///
/// `p + q` is commutative in IEEE arithmetic, so both triangles sharing an
/// edge produce bit-identical midpoints regardless of winding.
fn spherical_midpoint(p: Vec3, q: Vec3, radius: f32) -> Result<Vec3, MeshError> {
    let mid = (p + q) * 0.5;
    mid.try_normalize()
        .map(|dir| dir * radius)
        .ok_or_else(|| MeshError::DegenerateDirection {
            context: format!("midpoint of {p} and {q}"),
        })
}
