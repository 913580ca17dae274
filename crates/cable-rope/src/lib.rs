//! Verlet rope simulation for cables, chains, and tethers.
//!
//! A rope is a chain of [`PointMass`] particles joined by uniform distance
//! constraints. Both ends are pinned to [`Anchor`]s that the host moves
//! between physics ticks.
//!
//! # Example
//!
//! ```
//! use rhizome_cable_rope::{AnchorState, RopeConfig, RopeSimulator};
//! use glam::Vec3;
//!
//! let start = AnchorState::fixed(Vec3::ZERO);
//! let end = AnchorState::fixed(Vec3::new(1.5, 0.0, 0.0));
//! let mut rope = RopeSimulator::new(start, end, RopeConfig::new(2.0, 16)).unwrap();
//!
//! for _ in 0..50 {
//!     rope.step(Vec3::new(0.0, -9.81, 0.0), 0.02);
//! }
//!
//! // The slack rope sags below its anchors.
//! let positions = rope.positions();
//! assert!(positions[8].y < 0.0);
//! ```

mod anchor;
mod error;
mod particle;
mod rope;

pub use anchor::{Anchor, AnchorState, Interpolation};
pub use error::{RopeError, RopeResult};
pub use particle::{PointMass, RopeEnd};
pub use rope::{RopeConfig, RopeSimulator, solve_distance_constraint};
