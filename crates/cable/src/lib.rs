//! Simulated cables: a Verlet rope rendered as a tube mesh.
//!
//! [`Cable`] owns one [`RopeSimulator`] and one [`TubeMeshBuilder`]. The host
//! calls [`Cable::fixed_update`] on its physics tick and [`Cable::update`] on
//! its display tick.
//!
//! # Example
//!
//! ```
//! use rhizome_cable::{AnchorState, Cable, CableConfig};
//! use glam::Vec3;
//!
//! let mut cable = Cable::new(
//!     AnchorState::fixed(Vec3::new(0.0, 1.0, 0.0)),
//!     AnchorState::fixed(Vec3::new(1.5, 1.0, 0.0)),
//!     CableConfig::default(),
//! )
//! .unwrap();
//!
//! cable.fixed_update(Vec3::new(0.0, -9.81, 0.0), 0.02);
//! let mesh = cable.update().unwrap();
//!
//! assert_eq!(mesh.vertex_count(), 17 * 6);
//! ```

mod cable;
mod error;

pub use cable::{Cable, CableConfig};
pub use error::{CableError, CableResult};

pub use rhizome_cable_mesh::{
    Aabb3, CapMarker, EndCaps, MeshError, MeshSink, RingFrame, TubeConfig, TubeMesh,
    TubeMeshBuilder, tube_mesh,
};
pub use rhizome_cable_rope::{
    Anchor, AnchorState, Interpolation, PointMass, RopeConfig, RopeEnd, RopeError,
    RopeSimulator,
};
