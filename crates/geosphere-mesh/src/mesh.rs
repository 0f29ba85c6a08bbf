//! Indexed triangle mesh storage.

use glam::Vec3;

/// A triangle as three indices into [`Mesh::vertices`].
pub type Triangle = [u32; 3];

/// Unique vertex positions plus the triangles that reference them.
///
/// Every triangle index is checked against the vertex count when the
/// triangle is added, so a `Mesh` never holds a dangling index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Create a mesh from prebuilt vertex and triangle lists.
    ///
    /// # Panics
    ///
    /// Panics if any triangle references a vertex that does not exist.
    pub fn new(vertices: Vec<Vec3>, triangles: Vec<Triangle>) -> Self {
        let mut mesh = Self {
            vertices,
            triangles: Vec::with_capacity(triangles.len()),
        };
        for triangle in triangles {
            mesh.push_triangle(triangle);
        }
        mesh
    }

    /// Create an empty mesh with room for `vertices` and `triangles`.
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            triangles: Vec::with_capacity(triangles),
        }
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Positions of the three corners of `triangle`.
    pub fn corners(&self, triangle: Triangle) -> [Vec3; 3] {
        triangle.map(|i| self.vertices[i as usize])
    }

    /// Triangle indices flattened to `[a0, b0, c0, a1, b1, c1, ...]`.
    pub fn indices_flat(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Vertex positions flattened to `[x0, y0, z0, x1, ...]`.
    pub fn positions_flat(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.to_array()).collect()
    }

    /// Append a triangle.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of range; that is a logic error in the
    /// caller, never a property of the input data.
    pub(crate) fn push_triangle(&mut self, triangle: Triangle) {
        let count = self.vertices.len();
        assert!(
            triangle.iter().all(|&i| (i as usize) < count),
            "triangle {triangle:?} references a vertex outside 0..{count}"
        );
        self.triangles.push(triangle);
    }

    /// Replace every vertex position. The count must not change.
    pub(crate) fn replace_vertices(&mut self, vertices: Vec<Vec3>) {
        assert_eq!(
            vertices.len(),
            self.vertices.len(),
            "vertex replacement must keep the vertex count"
        );
        self.vertices = vertices;
    }
}

// =============================================================================
// Tests
// =============================================================================
