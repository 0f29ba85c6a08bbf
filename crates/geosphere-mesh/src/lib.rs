//! Geodesic sphere mesh engine.
//!
//! Builds an icosahedron, subdivides it into an icosphere while welding
//! shared vertices, derives normals, and deforms the surface in response
//! to collisions. Output is flat position/normal/index buffers ready for
//! upload by whatever renderer sits on top.
//!
//! ```
//! use geosphere_mesh::{NormalMode, Sphere};
//!
//! let mut sphere = Sphere::new(1.0).unwrap();
//! sphere.divide(1).unwrap();
//! sphere.generate_normals(NormalMode::Smooth).unwrap();
//! let buffers = sphere.buffers().unwrap();
//! assert_eq!(buffers.vertex_count(), 42);
//! ```

mod buffers;
mod collision;
mod icosahedron;
mod mesh;
mod normals;
mod sphere;
mod subdivide;
mod types;
mod weld;

pub use buffers::*;
pub use collision::*;
pub use icosahedron::*;
pub use mesh::*;
pub use normals::*;
pub use sphere::*;
pub use subdivide::*;
pub use types::*;
pub use weld::*;

pub use geosphere_config::{CollisionProfile, NormalMode};
