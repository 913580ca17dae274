//! Tube meshes swept along a 3D centerline.
//!
//! Turns an ordered list of centerline points into a closed cylindrical
//! surface: one ring of vertices per point, quads stitched between
//! consecutive rings, and two end-cap markers.
//!
//! # Example
//!
//! ```
//! use rhizome_cable_mesh::tube_mesh;
//! use glam::Vec3;
//!
//! let centerline = [Vec3::ZERO, Vec3::Z, Vec3::Z * 2.0];
//! let mesh = tube_mesh(&centerline, 4, 1.0).unwrap();
//!
//! assert_eq!(mesh.vertex_count(), 12);
//! assert_eq!(mesh.indices.len(), 48);
//! ```

mod error;
mod frame;
mod mesh;
mod sink;
mod tube;

pub use error::{MeshError, MeshResult};
pub use frame::{RingFrame, SIDE_REFERENCE};
pub use mesh::{Aabb3, TubeMesh};
pub use sink::MeshSink;
pub use tube::{CapMarker, EndCaps, TubeConfig, TubeMeshBuilder, tube_mesh};
