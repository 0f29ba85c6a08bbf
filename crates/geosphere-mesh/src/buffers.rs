//! Flat GPU-ready buffers.

use geosphere_common::MeshError;
use glam::Vec3;
use serde::Serialize;

use super::mesh::Mesh;
use super::types::SphereVertex;

/// Separate position, normal, and index arrays for upload.
///
/// `positions` and `normals` hold three floats per vertex in the same
/// order; `indices` holds three entries per triangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshBuffers {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Flatten `mesh` with a matching normal table.
    pub fn new(mesh: &Mesh, normals: &[Vec3]) -> Result<Self, MeshError> {
        if normals.len() != mesh.vertex_count() {
            return Err(MeshError::MissingNormals);
        }
        Ok(Self {
            positions: mesh.positions_flat(),
            normals: normals.iter().flat_map(|n| n.to_array()).collect(),
            indices: mesh.indices_flat(),
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// `[pos.xyz, normal.xyz]` per vertex, for a single vertex buffer.
    pub fn interleaved(&self) -> Vec<SphereVertex> {
        self.positions
            .chunks_exact(3)
            .zip(self.normals.chunks_exact(3))
            .map(|(p, n)| SphereVertex {
                position: [p[0], p[1], p[2]],
                normal: [n[0], n[1], n[2]],
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Mesh {
        Mesh::new(vec![Vec3::X, Vec3::Y, Vec3::Z], vec![[0, 1, 2]])
    }

    #[test]
    fn buffers_have_matching_lengths() {
        let mesh = triangle();
        let normals = vec![Vec3::ONE; 3];
        let buffers = MeshBuffers::new(&mesh, &normals).unwrap();
        assert_eq!(buffers.positions.len(), 9);
        assert_eq!(buffers.normals.len(), 9);
        assert_eq!(buffers.indices, vec![0, 1, 2]);
        assert_eq!(buffers.vertex_count(), 3);
        assert_eq!(buffers.triangle_count(), 1);
    }

    #[test]
    fn short_normal_table_is_rejected() {
        let mesh = triangle();
        let err = MeshBuffers::new(&mesh, &[Vec3::Z]).unwrap_err();
        assert_eq!(err, MeshError::MissingNormals);
    }

    #[test]
    fn interleaved_pairs_position_with_normal() {
        let mesh = triangle();
        let normals = vec![Vec3::NEG_X, Vec3::NEG_Y, Vec3::NEG_Z];
        let buffers = MeshBuffers::new(&mesh, &normals).unwrap();
        let interleaved = buffers.interleaved();
        assert_eq!(interleaved.len(), 3);
        assert_eq!(
            interleaved[1],
            SphereVertex {
                position: [0.0, 1.0, 0.0],
                normal: [0.0, -1.0, 0.0],
            }
        );

        let flat: &[f32] = bytemuck::cast_slice(&interleaved);
        assert_eq!(&flat[..6], &[1.0, 0.0, 0.0, -1.0, 0.0, 0.0]);
    }

    #[test]
    fn buffers_serialize_to_json() {
        let mesh = triangle();
        let buffers = MeshBuffers::new(&mesh, &[Vec3::Z; 3]).unwrap();
        let json = serde_json::to_string(&buffers).unwrap();
        assert!(json.contains("\"positions\""));
        assert!(json.contains("\"normals\""));
        assert!(json.contains("\"indices\":[0,1,2]"));
    }
}
