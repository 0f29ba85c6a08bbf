//! The `Sphere` value: a geodesic mesh plus everything needed to keep
//! regenerating it.
//!
//! Lifecycle: [`Sphere::new`] → [`Sphere::divide`] →
//! [`Sphere::generate_normals`] → [`Sphere::buffers`], with
//! [`Sphere::apply_collision`] available at any point afterwards.
//! Anything that moves vertices drops the normal table, so stale normals
//! can never reach the renderer.

use geosphere_common::MeshError;
use geosphere_config::{CollisionProfile, GeosphereConfig, NormalMode};
use glam::Vec3;

use super::buffers::MeshBuffers;
use super::collision::apply_collision;
use super::icosahedron::icosahedron;
use super::mesh::Mesh;
use super::normals::generate_normals;
use super::subdivide::subdivide;
use super::types::MeshStats;
use super::weld::DEFAULT_WELD_PRECISION;

#[derive(Debug, Clone)]
pub struct Sphere {
    radius: f32,
    precision: f32,
    depth: u32,
    mesh: Mesh,
    normals: Option<Vec<Vec3>>,
}

impl Sphere {
    /// Base icosahedron at `radius`, welding with the default precision.
    pub fn new(radius: f32) -> Result<Self, MeshError> {
        Self::with_precision(radius, DEFAULT_WELD_PRECISION)
    }

    /// Base icosahedron at `radius`, welding with `precision` (a fraction
    /// of the radius).
    pub fn with_precision(radius: f32, precision: f32) -> Result<Self, MeshError> {
        if !(precision.is_finite() && precision > 0.0) {
            return Err(MeshError::InvalidPrecision(precision));
        }
        Ok(Self {
            radius,
            precision,
            depth: 0,
            mesh: icosahedron(radius)?,
            normals: None,
        })
    }

    /// Subdivide `subdivisions` times and generate normals in one go.
    pub fn build(
        radius: f32,
        subdivisions: u32,
        precision: f32,
        mode: NormalMode,
    ) -> Result<Self, MeshError> {
        let mut sphere = Self::with_precision(radius, precision)?;
        sphere.divide(subdivisions)?;
        sphere.generate_normals(mode)?;
        tracing::info!(
            radius,
            subdivisions,
            vertices = sphere.mesh.vertex_count(),
            triangles = sphere.mesh.triangle_count(),
            "built sphere"
        );
        Ok(sphere)
    }

    /// [`Sphere::build`] from the `[sphere]`, `[weld]`, and `[normals]`
    /// config sections.
    pub fn from_config(config: &GeosphereConfig) -> Result<Self, MeshError> {
        Self::build(
            config.sphere.radius as f32,
            config.sphere.subdivisions,
            config.weld.precision as f32,
            config.normals.mode,
        )
    }

    /// One geodesic subdivision pass.
    pub fn subdivide(&mut self) -> Result<(), MeshError> {
        let next = subdivide(&self.mesh, self.radius, self.precision)?;
        self.mesh = next;
        self.depth += 1;
        self.normals = None;
        Ok(())
    }

    /// Subdivide `iterations` times. Zero leaves the mesh alone.
    ///
    /// On error, passes that already finished are kept.
    pub fn divide(&mut self, iterations: u32) -> Result<(), MeshError> {
        for _ in 0..iterations {
            self.subdivide()?;
        }
        Ok(())
    }

    /// Compute and store the per-vertex normal table.
    pub fn generate_normals(&mut self, mode: NormalMode) -> Result<&[Vec3], MeshError> {
        let normals = generate_normals(&self.mesh, mode)?;
        Ok(self.normals.insert(normals).as_slice())
    }

    /// Deform the surface from an impact at `impact` with `magnitude`.
    ///
    /// Leaves the radius invariant behind and drops the normal table.
    pub fn apply_collision(
        &mut self,
        impact: Vec3,
        magnitude: f32,
        profile: CollisionProfile,
    ) -> Result<(), MeshError> {
        apply_collision(&mut self.mesh, impact, magnitude, profile)?;
        self.normals = None;
        Ok(())
    }

    /// Screen-plane hit test.
    ///
    /// If `(x, y)` is not the origin and falls strictly inside the circle of
    /// `radius` around the center's xy projection, a collision with
    /// magnitude `velocity` is applied at `(x, y, center.z)` and `true` is
    /// returned. Misses return `false` and change nothing.
    pub fn hit_test(
        &mut self,
        x: f32,
        y: f32,
        velocity: f32,
        profile: CollisionProfile,
    ) -> Result<bool, MeshError> {
        if x == 0.0 && y == 0.0 {
            return Ok(false);
        }

        let center = self.center();
        let offset = glam::Vec2::new(x - center.x, y - center.y);
        if offset.length_squared() >= self.radius * self.radius {
            tracing::debug!(x, y, "no collision");
            return Ok(false);
        }

        tracing::debug!(x, y, velocity, "collision detected");
        self.apply_collision(Vec3::new(x, y, center.z), velocity, profile)?;
        Ok(true)
    }

    /// Mean of all vertex positions.
    pub fn center(&self) -> Vec3 {
        let vertices = self.mesh.vertices();
        if vertices.is_empty() {
            return Vec3::ZERO;
        }
        vertices.iter().sum::<Vec3>() / vertices.len() as f32
    }

    pub fn stats(&self) -> MeshStats {
        let (min_distance, max_distance) = self
            .mesh
            .vertices()
            .iter()
            .map(|v| v.length())
            .fold((f32::INFINITY, 0.0_f32), |(lo, hi), d| (lo.min(d), hi.max(d)));
        MeshStats {
            vertices: self.mesh.vertex_count(),
            triangles: self.mesh.triangle_count(),
            min_distance,
            max_distance,
        }
    }

    /// Position, normal, and index buffers. Requires current normals.
    pub fn buffers(&self) -> Result<MeshBuffers, MeshError> {
        let normals = self.normals.as_deref().ok_or(MeshError::MissingNormals)?;
        MeshBuffers::new(&self.mesh, normals)
    }

    /// Positions only, for re-uploading after a collision.
    pub fn positions_flat(&self) -> Vec<f32> {
        self.mesh.positions_flat()
    }

    pub fn indices_flat(&self) -> Vec<u32> {
        self.mesh.indices_flat()
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn precision(&self) -> f32 {
        self.precision
    }

    /// Number of subdivision passes applied so far.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn normals(&self) -> Option<&[Vec3]> {
        self.normals.as_deref()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subdivide::{triangle_count_at_depth, vertex_count_at_depth};

    #[test]
    fn build_matches_growth_law() {
        let sphere = Sphere::build(1.0, 2, DEFAULT_WELD_PRECISION, NormalMode::Smooth).unwrap();
        assert_eq!(sphere.depth(), 2);
        assert_eq!(sphere.mesh().vertex_count(), vertex_count_at_depth(2));
        assert_eq!(sphere.mesh().triangle_count(), triangle_count_at_depth(2));
        assert_eq!(sphere.normals().unwrap().len(), vertex_count_at_depth(2));
    }

    #[test]
    fn divide_zero_keeps_base_icosahedron() {
        let mut sphere = Sphere::new(1.0).unwrap();
        sphere.divide(0).unwrap();
        assert_eq!(sphere.mesh(), &icosahedron(1.0).unwrap());
        assert_eq!(sphere.depth(), 0);
    }

    #[test]
    fn stats_report_radius_bounds() {
        let sphere = Sphere::build(2.0, 3, DEFAULT_WELD_PRECISION, NormalMode::Faceted).unwrap();
        let stats = sphere.stats();
        assert_eq!(stats.vertices, 642);
        assert_eq!(stats.triangles, 1280);
        assert!((stats.min_distance - 2.0).abs() < 2e-4);
        assert!((stats.max_distance - 2.0).abs() < 2e-4);
    }

    #[test]
    fn center_of_symmetric_sphere_is_origin() {
        let sphere = Sphere::build(5.0, 1, DEFAULT_WELD_PRECISION, NormalMode::Smooth).unwrap();
        assert!(sphere.center().length() < 1e-5);
    }

    #[test]
    fn buffers_require_normals() {
        let sphere = Sphere::new(1.0).unwrap();
        assert_eq!(sphere.buffers().unwrap_err(), MeshError::MissingNormals);
    }

    #[test]
    fn subdivide_invalidates_normals() {
        let mut sphere = Sphere::new(1.0).unwrap();
        sphere.generate_normals(NormalMode::Smooth).unwrap();
        assert!(sphere.buffers().is_ok());
        sphere.subdivide().unwrap();
        assert!(sphere.normals().is_none());
        assert_eq!(sphere.buffers().unwrap_err(), MeshError::MissingNormals);
    }

    #[test]
    fn collision_keeps_topology_and_drops_normals() {
        let mut sphere =
            Sphere::build(1.0, 1, DEFAULT_WELD_PRECISION, NormalMode::Smooth).unwrap();
        let indices = sphere.indices_flat();
        let vertex_count = sphere.mesh().vertex_count();

        sphere
            .apply_collision(Vec3::new(0.0, 0.0, 1.0), 0.3, CollisionProfile::Attenuated)
            .unwrap();

        assert_eq!(sphere.indices_flat(), indices);
        assert_eq!(sphere.mesh().vertex_count(), vertex_count);
        assert!(sphere.normals().is_none());

        sphere.generate_normals(NormalMode::Smooth).unwrap();
        let buffers = sphere.buffers().unwrap();
        assert_eq!(buffers.positions, sphere.positions_flat());
    }

    #[test]
    fn hit_inside_radius_applies_collision() {
        let mut sphere = Sphere::new(1.0).unwrap();
        let before = sphere.positions_flat();
        let hit = sphere
            .hit_test(0.25, 0.25, 0.5, CollisionProfile::Attenuated)
            .unwrap();
        assert!(hit);
        assert_ne!(sphere.positions_flat(), before);
    }

    #[test]
    fn hit_outside_radius_changes_nothing() {
        let mut sphere = Sphere::new(1.0).unwrap();
        let before = sphere.positions_flat();
        let hit = sphere
            .hit_test(0.9, 0.9, 0.5, CollisionProfile::Literal)
            .unwrap();
        assert!(!hit);
        assert_eq!(sphere.positions_flat(), before);
    }

    #[test]
    fn hit_at_origin_is_ignored() {
        let mut sphere = Sphere::new(1.0).unwrap();
        let before = sphere.positions_flat();
        assert!(!sphere
            .hit_test(0.0, 0.0, 1.0, CollisionProfile::Literal)
            .unwrap());
        assert_eq!(sphere.positions_flat(), before);
    }

    #[test]
    fn from_config_uses_sections() {
        let mut config = GeosphereConfig::default();
        config.sphere.radius = 3.0;
        config.sphere.subdivisions = 1;
        config.normals.mode = NormalMode::Faceted;

        let sphere = Sphere::from_config(&config).unwrap();
        assert_eq!(sphere.radius(), 3.0);
        assert_eq!(sphere.depth(), 1);
        assert_eq!(sphere.mesh().vertex_count(), 42);
        let normals = sphere.normals().unwrap();
        assert!(normals.iter().any(|n| (n.length() - 1.0).abs() > 1e-3));
    }

    #[test]
    fn any_valid_config_follows_growth_law() {
        let mut config = GeosphereConfig::default();
        config.sphere.radius = 1e-3;
        config.sphere.subdivisions = 7;
        geosphere_config::validation::validate(&config).unwrap();

        let sphere = Sphere::from_config(&config).unwrap();
        assert_eq!(sphere.mesh().vertex_count(), vertex_count_at_depth(7));
        assert_eq!(sphere.mesh().triangle_count(), triangle_count_at_depth(7));
        let stats = sphere.stats();
        assert!((stats.min_distance - 1e-3).abs() < 1e-7);
        assert!((stats.max_distance - 1e-3).abs() < 1e-7);
    }

    #[test]
    fn invalid_construction_is_rejected() {
        assert_eq!(Sphere::new(-1.0).unwrap_err(), MeshError::InvalidRadius(-1.0));
        assert_eq!(
            Sphere::with_precision(1.0, 0.0).unwrap_err(),
            MeshError::InvalidPrecision(0.0)
        );
    }
}
