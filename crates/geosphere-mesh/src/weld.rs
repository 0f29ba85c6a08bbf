//! Vertex welding.
//!
//! Positions are snapped to a grid of `precision` and looked up by their
//! integer grid coordinates, so two computations of the same point that
//! land in the same cell share one vertex.

use std::collections::HashMap;

use geosphere_common::MeshError;
use glam::Vec3;

/// Default weld grid size, relative to the sphere radius.
pub const DEFAULT_WELD_PRECISION: f32 = 1e-5;

type WeldKey = [i64; 3];

/// Builds a deduplicated vertex list.
#[derive(Debug, Clone)]
pub struct VertexWelder {
    precision: f32,
    vertices: Vec<Vec3>,
    lookup: HashMap<WeldKey, u32>,
}

impl VertexWelder {
    pub fn new(precision: f32) -> Result<Self, MeshError> {
        Self::with_capacity(precision, 0)
    }

    pub fn with_capacity(precision: f32, capacity: usize) -> Result<Self, MeshError> {
        if !(precision.is_finite() && precision > 0.0) {
            return Err(MeshError::InvalidPrecision(precision));
        }
        Ok(Self {
            precision,
            vertices: Vec::with_capacity(capacity),
            lookup: HashMap::with_capacity(capacity),
        })
    }

    /// Add `position`, or find the vertex already occupying its cell.
    ///
    /// Returns the vertex index and whether it already existed.
    pub fn add_vertex(&mut self, position: Vec3) -> (u32, bool) {
        let key = self.key(position);
        if let Some(&index) = self.lookup.get(&key) {
            return (index, true);
        }

        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.lookup.insert(key, index);
        (index, false)
    }

    pub fn precision(&self) -> f32 {
        self.precision
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn into_vertices(self) -> Vec<Vec3> {
        self.vertices
    }

    fn key(&self, position: Vec3) -> WeldKey {
        (position / self.precision)
            .round()
            .to_array()
            .map(|c| c as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn welder() -> VertexWelder {
        VertexWelder::new(DEFAULT_WELD_PRECISION).unwrap()
    }

    #[test]
    fn new_positions_get_sequential_indices() {
        let mut w = welder();
        assert_eq!(w.add_vertex(Vec3::X), (0, false));
        assert_eq!(w.add_vertex(Vec3::Y), (1, false));
        assert_eq!(w.add_vertex(Vec3::Z), (2, false));
        assert_eq!(w.len(), 3);
    }

    #[test]
    fn reinserting_is_idempotent() {
        let mut w = welder();
        let p = Vec3::new(0.25, -0.5, 0.75);
        w.add_vertex(Vec3::X);
        let (first, existed) = w.add_vertex(p);
        assert!(!existed);

        let (again, existed) = w.add_vertex(p);
        assert_eq!(again, first);
        assert!(existed);
        assert_eq!(w.len(), 2);
    }

    #[test]
    fn nearly_equal_positions_weld() {
        let mut w = welder();
        let p = Vec3::new(0.3, 0.6, 0.9);
        let (a, _) = w.add_vertex(p);
        let (b, existed) = w.add_vertex(p + Vec3::splat(1e-7));
        assert_eq!(a, b);
        assert!(existed);
    }

    #[test]
    fn positions_a_cell_apart_stay_distinct() {
        let mut w = welder();
        let (a, _) = w.add_vertex(Vec3::ZERO);
        let (b, existed) = w.add_vertex(Vec3::new(1e-3, 0.0, 0.0));
        assert_ne!(a, b);
        assert!(!existed);
    }

    #[test]
    fn negative_zero_welds_with_zero() {
        let mut w = welder();
        let (a, _) = w.add_vertex(Vec3::new(0.0, 1.0, 0.0));
        let (b, existed) = w.add_vertex(Vec3::new(-0.0, 1.0, -0.0));
        assert_eq!(a, b);
        assert!(existed);
    }

    #[test]
    fn rejects_bad_precision() {
        assert_eq!(
            VertexWelder::new(0.0).unwrap_err(),
            MeshError::InvalidPrecision(0.0)
        );
        assert!(VertexWelder::new(-1e-3).is_err());
        assert!(VertexWelder::new(f32::NAN).is_err());
    }

    #[test]
    fn into_vertices_keeps_insertion_order() {
        let mut w = welder();
        w.add_vertex(Vec3::Z);
        w.add_vertex(Vec3::X);
        w.add_vertex(Vec3::Z);
        assert_eq!(w.into_vertices(), vec![Vec3::Z, Vec3::X]);
    }
}
