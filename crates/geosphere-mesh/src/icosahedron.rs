//! Base icosahedron generation.
//!
//! The twelve corners are the cyclic permutations of `(±1, ±t, 0)` where
//! `t` is the golden ratio: three mutually orthogonal golden rectangles.

use geosphere_common::MeshError;
use glam::Vec3;

use super::mesh::{Mesh, Triangle};

/// Golden ratio, `(1 + √5) / 2`.
pub const GOLDEN_RATIO: f32 = 1.618_034;

pub const ICOSAHEDRON_VERTEX_COUNT: usize = 12;
pub const ICOSAHEDRON_TRIANGLE_COUNT: usize = 20;

const T: f32 = GOLDEN_RATIO;

#[rustfmt::skip]
const CORNERS: [[f32; 3]; ICOSAHEDRON_VERTEX_COUNT] = [
    // xy rectangle
    [-1.0,   T, 0.0],
    [ 1.0,   T, 0.0],
    [-1.0,  -T, 0.0],
    [ 1.0,  -T, 0.0],
    // yz rectangle
    [ 0.0, -1.0,   T],
    [ 0.0,  1.0,   T],
    [ 0.0, -1.0,  -T],
    [ 0.0,  1.0,  -T],
    // zx rectangle
    [   T, 0.0, -1.0],
    [   T, 0.0,  1.0],
    [  -T, 0.0, -1.0],
    [  -T, 0.0,  1.0],
];

#[rustfmt::skip]
const FACES: [Triangle; ICOSAHEDRON_TRIANGLE_COUNT] = [
    // fan around vertex 0
    [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
    // upper band
    [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
    // fan around vertex 3
    [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
    // lower band
    [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
];

/// Build a regular icosahedron whose vertices all lie at `radius`.
pub fn icosahedron(radius: f32) -> Result<Mesh, MeshError> {
    validate_radius(radius)?;

    let vertices = CORNERS
        .iter()
        .map(|&c| Vec3::from_array(c).normalize() * radius)
        .collect();

    let mesh = Mesh::new(vertices, FACES.to_vec());
    tracing::debug!(radius, "built base icosahedron");
    Ok(mesh)
}

/// Reject radii that would poison every later normalization.
pub(crate) fn validate_radius(radius: f32) -> Result<(), MeshError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(MeshError::InvalidRadius(radius))
    }
}
