//! Rope simulation and tube rendering bundled into one component.

use glam::{Affine3A, Vec3};
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rhizome_cable_mesh::{EndCaps, MeshSink, TubeConfig, TubeMesh, TubeMeshBuilder};
use rhizome_cable_rope::{Anchor, AnchorState, RopeConfig, RopeSimulator};

use crate::CableResult;

/// Physics and rendering parameters of a cable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CableConfig {
    /// Rope layout and solver iterations.
    pub rope: RopeConfig,
    /// Tube cross-section.
    pub tube: TubeConfig,
}

impl CableConfig {
    /// Creates a config from its two halves.
    pub fn new(rope: RopeConfig, tube: TubeConfig) -> Self {
        Self { rope, tube }
    }
}

/// A rope stretched between two anchors and its tube mesh.
///
/// Physics and rendering run strictly in sequence: every relaxation sweep
/// of a [`fixed_update`](Self::fixed_update) has finished before
/// [`update`](Self::update) reads the centerline.
#[derive(Debug, Clone)]
pub struct Cable<A = AnchorState> {
    simulator: RopeSimulator<A>,
    builder: TubeMeshBuilder,
    centerline: Vec<Vec3>,
}

impl<A: Anchor> Cable<A> {
    /// Builds the rope and an empty tube.
    pub fn new(start: A, end: A, config: CableConfig) -> CableResult<Self> {
        let builder = TubeMeshBuilder::new(config.tube)?;
        let simulator = RopeSimulator::new(start, end, config.rope)?;
        let centerline = Vec::with_capacity(simulator.particle_count());

        debug!(
            "cable created: {} particles, {} sides",
            simulator.particle_count(),
            config.tube.sides
        );

        Ok(Self {
            simulator,
            builder,
            centerline,
        })
    }

    /// Physics tick.
    pub fn fixed_update(&mut self, gravity: Vec3, dt: f32) {
        self.simulator.step(gravity, dt);
    }

    /// Display tick: rebuilds the tube around the current rope.
    pub fn update(&mut self) -> CableResult<&TubeMesh> {
        self.simulator.positions_into(&mut self.centerline);
        Ok(self.builder.build_or_update(&self.centerline)?)
    }

    /// Pushes the mesh from the last [`update`](Self::update) into `sink`.
    pub fn upload<S: MeshSink + ?Sized>(&mut self, sink: &mut S) {
        self.builder.upload(sink);
    }

    /// Sets the transform from world space into the mesh's local space.
    pub fn set_world_to_local(&mut self, transform: Affine3A) {
        self.builder.set_world_to_local(transform);
    }

    /// Changes the tube cross-section; applied on the next update.
    pub fn set_tube_config(&mut self, config: TubeConfig) -> CableResult<()> {
        Ok(self.builder.set_config(config)?)
    }

    /// The rope simulator.
    pub fn simulator(&self) -> &RopeSimulator<A> {
        &self.simulator
    }

    /// Mutable access to the rope simulator (and through it, the anchors).
    pub fn simulator_mut(&mut self) -> &mut RopeSimulator<A> {
        &mut self.simulator
    }

    /// The tube builder.
    pub fn builder(&self) -> &TubeMeshBuilder {
        &self.builder
    }

    /// The mesh from the last update.
    pub fn mesh(&self) -> &TubeMesh {
        self.builder.mesh()
    }

    /// End-cap markers from the last update.
    pub fn caps(&self) -> &EndCaps {
        self.builder.caps()
    }

    /// Centerline snapshot used by the last update.
    pub fn centerline(&self) -> &[Vec3] {
        &self.centerline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CableError;

    #[test]
    fn test_invalid_rope_config() {
        let config = CableConfig::new(RopeConfig::new(1.0, 0), TubeConfig::default());
        let result = Cable::new(Vec3::ZERO, Vec3::X, config);
        assert!(matches!(result, Err(CableError::Rope(_))));
    }

    #[test]
    fn test_invalid_tube_config() {
        let config = CableConfig::new(RopeConfig::default(), TubeConfig::new(2, 0.1));
        let result = Cable::new(Vec3::ZERO, Vec3::X, config);
        assert!(matches!(result, Err(CableError::Mesh(_))));
    }

    #[test]
    fn test_mesh_empty_until_first_update() {
        let cable = Cable::new(Vec3::ZERO, Vec3::X, CableConfig::default()).unwrap();
        assert!(cable.mesh().is_empty());
        assert!(cable.centerline().is_empty());
    }

    #[test]
    fn test_update_snapshots_centerline() {
        let mut cable = Cable::new(Vec3::ZERO, Vec3::X, CableConfig::default()).unwrap();
        cable.fixed_update(Vec3::new(0.0, -9.81, 0.0), 0.02);
        cable.update().unwrap();

        assert_eq!(cable.centerline(), cable.simulator().positions().as_slice());
        assert_eq!(cable.caps().start.position, Vec3::ZERO);
        assert_eq!(cable.caps().end.position, Vec3::X);
    }

    #[test]
    fn test_set_tube_config_applies_on_update() {
        let mut cable = Cable::new(Vec3::ZERO, Vec3::X, CableConfig::default()).unwrap();
        cable.update().unwrap();
        assert_eq!(cable.mesh().sides(), 6);

        cable.set_tube_config(TubeConfig::new(10, 0.05)).unwrap();
        let mesh = cable.update().unwrap();
        assert_eq!(mesh.sides(), 10);
        assert_eq!(mesh.vertex_count(), 17 * 10);

        assert!(cable.set_tube_config(TubeConfig::new(10, -1.0)).is_err());
    }
}
