//! Anchors that pin rope endpoints to externally driven positions.
//!
//! An anchor is anything that can report a world position: a static point,
//! a transform, or a rigid body with its own linear velocity. The rope asks
//! its anchors for a predicted position once per integration step.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a moving anchor's velocity is blended into its pinned particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Interpolation {
    /// The anchor is rendered at its simulated position: predict a full step.
    #[default]
    None,
    /// The anchor interpolates its rendered position between physics steps:
    /// predict half a step.
    Interpolate,
}

/// A source of position for a pinned rope end.
pub trait Anchor {
    /// Current world position.
    fn world_position(&self) -> Vec3;

    /// Linear velocity of the rigid motion driving this anchor.
    ///
    /// `None` means the anchor is a plain transform and the pinned particle
    /// snaps to [`world_position`](Anchor::world_position).
    fn linear_velocity(&self) -> Option<Vec3> {
        None
    }

    /// Interpolation mode of the rigid motion, if any.
    fn interpolation(&self) -> Interpolation {
        Interpolation::None
    }

    /// Position the pinned particle takes for a step of length `dt`.
    fn predict(&self, dt: f32) -> Vec3 {
        let position = self.world_position();
        match self.linear_velocity() {
            None => position,
            Some(velocity) => match self.interpolation() {
                Interpolation::None => position + velocity * dt,
                Interpolation::Interpolate => position + velocity * dt / 2.0,
            },
        }
    }
}

/// A bare point is a fixed anchor.
impl Anchor for Vec3 {
    fn world_position(&self) -> Vec3 {
        *self
    }
}

/// Plain anchor state owned by the host and updated between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnchorState {
    /// World position.
    pub position: Vec3,
    /// Rigid-body velocity, `None` for a plain transform.
    pub velocity: Option<Vec3>,
    /// Interpolation mode used when `velocity` is set.
    pub interpolation: Interpolation,
}

impl AnchorState {
    /// Creates an anchor that only follows its transform.
    pub fn fixed(position: Vec3) -> Self {
        Self {
            position,
            velocity: None,
            interpolation: Interpolation::None,
        }
    }

    /// Creates an anchor driven by a rigid body.
    pub fn rigid(position: Vec3, velocity: Vec3, interpolation: Interpolation) -> Self {
        Self {
            position,
            velocity: Some(velocity),
            interpolation,
        }
    }

    /// Moves the anchor.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Sets the rigid-body velocity.
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = Some(velocity);
    }
}

impl Anchor for AnchorState {
    fn world_position(&self) -> Vec3 {
        self.position
    }

    fn linear_velocity(&self) -> Option<Vec3> {
        self.velocity
    }

    fn interpolation(&self) -> Interpolation {
        self.interpolation
    }
}

impl<T: Anchor + ?Sized> Anchor for &T {
    fn world_position(&self) -> Vec3 {
        (**self).world_position()
    }

    fn linear_velocity(&self) -> Option<Vec3> {
        (**self).linear_velocity()
    }

    fn interpolation(&self) -> Interpolation {
        (**self).interpolation()
    }

    fn predict(&self, dt: f32) -> Vec3 {
        (**self).predict(dt)
    }
}

impl<T: Anchor + ?Sized> Anchor for Box<T> {
    fn world_position(&self) -> Vec3 {
        (**self).world_position()
    }

    fn linear_velocity(&self) -> Option<Vec3> {
        (**self).linear_velocity()
    }

    fn interpolation(&self) -> Interpolation {
        (**self).interpolation()
    }

    fn predict(&self, dt: f32) -> Vec3 {
        (**self).predict(dt)
    }
}

/// Shared handle, so a host can keep moving an anchor the rope owns a clone of.
impl<T: Anchor + ?Sized> Anchor for Rc<RefCell<T>> {
    fn world_position(&self) -> Vec3 {
        self.borrow().world_position()
    }

    fn linear_velocity(&self) -> Option<Vec3> {
        self.borrow().linear_velocity()
    }

    fn interpolation(&self) -> Interpolation {
        self.borrow().interpolation()
    }

    fn predict(&self, dt: f32) -> Vec3 {
        self.borrow().predict(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_anchor_snaps() {
        let anchor = AnchorState::fixed(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(anchor.predict(0.02), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_vec3_is_fixed_anchor() {
        assert_eq!(Vec3::Y.predict(1.0), Vec3::Y);
        assert_eq!(Vec3::Y.linear_velocity(), None);
    }

    #[test]
    fn test_rigid_anchor_predicts_full_step() {
        let anchor = AnchorState::rigid(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Interpolation::None);
        assert_eq!(anchor.predict(0.5), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_interpolated_anchor_predicts_half_step() {
        let anchor = AnchorState::rigid(
            Vec3::ZERO,
            Vec3::new(2.0, 0.0, 0.0),
            Interpolation::Interpolate,
        );
        assert_eq!(anchor.predict(0.5), Vec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn test_shared_anchor_sees_updates() {
        let shared = Rc::new(RefCell::new(AnchorState::fixed(Vec3::ZERO)));
        let handle = Rc::clone(&shared);

        shared.borrow_mut().set_position(Vec3::Z);

        assert_eq!(handle.predict(0.1), Vec3::Z);
    }

    #[test]
    fn test_boxed_dyn_anchor() {
        let anchor: Box<dyn Anchor> = Box::new(AnchorState::rigid(
            Vec3::ZERO,
            Vec3::Y,
            Interpolation::None,
        ));
        assert_eq!(anchor.predict(1.0), Vec3::Y);
    }
}
