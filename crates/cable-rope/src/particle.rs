//! Verlet point masses.

use glam::Vec3;

/// The rope end an anchored particle is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RopeEnd {
    /// First particle of the rope.
    Start,
    /// Last particle of the rope.
    End,
}

/// A simulated particle.
///
/// Velocity is implicit: it is the difference between the current and the
/// previous position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass {
    /// Current position.
    pub position: Vec3,
    /// Position one integration step ago.
    pub previous_position: Vec3,
    binding: Option<RopeEnd>,
}

impl PointMass {
    /// Creates a free particle at rest.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            previous_position: position,
            binding: None,
        }
    }

    /// Creates a particle pinned to one of the rope's anchors.
    pub fn pinned(position: Vec3, end: RopeEnd) -> Self {
        Self {
            binding: Some(end),
            ..Self::new(position)
        }
    }

    /// Returns the per-step velocity.
    pub fn velocity(&self) -> Vec3 {
        self.position - self.previous_position
    }

    /// Returns true if the particle is driven by integration and constraints.
    pub fn is_free(&self) -> bool {
        self.binding.is_none()
    }

    /// Returns the anchor this particle is pinned to, if any.
    pub fn binding(&self) -> Option<RopeEnd> {
        self.binding
    }

    /// Moves the particle, keeping the old position as the previous one.
    pub fn update_position(&mut self, position: Vec3) {
        self.previous_position = self.position;
        self.position = position;
    }

    /// Advances a free particle by its own velocity plus a gravity displacement.
    pub(crate) fn integrate(&mut self, gravity_displacement: Vec3) {
        let next = self.position + self.velocity() + gravity_displacement;
        self.update_position(next);
    }
}
