//! Sphere vertex types and summary statistics.

use serde::Serialize;

/// A single interleaved vertex of the sphere mesh.
///
/// Layout: position(vec3) + normal(vec3) = 24 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl SphereVertex {
    /// Byte stride between consecutive vertices.
    pub const STRIDE: usize = std::mem::size_of::<SphereVertex>();
    /// Byte offset of `position`.
    pub const POSITION_OFFSET: usize = 0;
    /// Byte offset of `normal`.
    pub const NORMAL_OFFSET: usize = 12;
}

/// Size and shape of a generated mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeshStats {
    pub vertices: usize,
    pub triangles: usize,
    /// Smallest vertex distance from the origin.
    pub min_distance: f32,
    /// Largest vertex distance from the origin.
    pub max_distance: f32,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_vertex_size_is_24_bytes() {
        assert_eq!(SphereVertex::STRIDE, 24);
    }

    #[test]
    fn sphere_vertex_alignment_is_4_bytes() {
        assert_eq!(std::mem::align_of::<SphereVertex>(), 4);
    }

    #[test]
    fn bytemuck_cast_works() {
        let v = SphereVertex {
            position: [1.0, 2.0, 3.0],
            normal: [0.0, 1.0, 0.0],
        };
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 24);

        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.0, 1.0, 0.0]);
        assert_eq!(&floats[SphereVertex::NORMAL_OFFSET / 4..][..3], &v.normal[..]);
    }
}
