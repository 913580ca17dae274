//! Tube mesh builder.
//!
//! The builder keeps its buffers between calls. Index and UV buffers only
//! change when the number of rings or sides changes; vertex positions and
//! normals are recomputed on every update.

use std::f32::consts::TAU;

use glam::{Affine3A, Vec3};
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::frame::{DEFAULT_TANGENT, centerline_tangent};
use crate::{MeshError, MeshResult, MeshSink, RingFrame, TubeMesh};

/// Cross-section parameters of a tube.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TubeConfig {
    /// Vertices per ring.
    pub sides: usize,
    /// Tube radius.
    pub radius: f32,
    /// End-cap marker scale relative to the radius.
    pub cap_scale: f32,
}

impl Default for TubeConfig {
    fn default() -> Self {
        Self {
            sides: 6,
            radius: 0.1,
            cap_scale: 1.75,
        }
    }
}

impl TubeConfig {
    /// Creates a config with the given cross-section.
    pub fn new(sides: usize, radius: f32) -> Self {
        Self {
            sides,
            radius,
            ..Self::default()
        }
    }

    /// Checks that the config describes a closed tube.
    pub fn validate(&self) -> MeshResult<()> {
        if self.sides < 3 {
            return Err(MeshError::InvalidInput(format!(
                "tube needs at least 3 sides, got {}",
                self.sides
            )));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(MeshError::InvalidInput(format!(
                "tube radius must be positive and finite, got {}",
                self.radius
            )));
        }
        if !self.cap_scale.is_finite() || self.cap_scale < 0.0 {
            return Err(MeshError::InvalidInput(format!(
                "cap scale must be non-negative and finite, got {}",
                self.cap_scale
            )));
        }
        Ok(())
    }
}

/// Placement of one end-cap sphere.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CapMarker {
    /// Sphere center.
    pub position: Vec3,
    /// Uniform sphere scale.
    pub scale: f32,
}

/// Spheres closing both ends of the tube.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EndCaps {
    /// Cap at the first centerline point.
    pub start: CapMarker,
    /// Cap at the last centerline point.
    pub end: CapMarker,
}

/// Builds and refreshes a tube mesh from centerline snapshots.
#[derive(Debug, Clone)]
pub struct TubeMeshBuilder {
    config: TubeConfig,
    world_to_local: Affine3A,
    mesh: TubeMesh,
    caps: EndCaps,
    topology_dirty: bool,
    uploaded_vertex_count: usize,
}

impl TubeMeshBuilder {
    /// Creates a builder with no mesh yet.
    pub fn new(config: TubeConfig) -> MeshResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            world_to_local: Affine3A::IDENTITY,
            mesh: TubeMesh::new(),
            caps: EndCaps::default(),
            topology_dirty: false,
            uploaded_vertex_count: 0,
        })
    }

    /// Current cross-section config.
    pub fn config(&self) -> &TubeConfig {
        &self.config
    }

    /// Replaces the cross-section config; applied on the next update.
    pub fn set_config(&mut self, config: TubeConfig) -> MeshResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Transform from centerline (world) space into the mesh's local space.
    pub fn world_to_local(&self) -> Affine3A {
        self.world_to_local
    }

    /// Sets the transform applied to vertices and cap markers.
    pub fn set_world_to_local(&mut self, transform: Affine3A) {
        self.world_to_local = transform;
    }

    /// Regenerates the tube around `positions`.
    ///
    /// Fails without touching the current mesh if there are fewer than two
    /// points.
    pub fn build_or_update(&mut self, positions: &[Vec3]) -> MeshResult<&TubeMesh> {
        if positions.len() < 2 {
            return Err(MeshError::InvalidInput(format!(
                "tube needs at least 2 centerline points, got {}",
                positions.len()
            )));
        }

        let rings = positions.len();
        let sides = self.config.sides;
        if rings != self.mesh.ring_count() || sides != self.mesh.sides() {
            debug!("tube topology rebuilt: {rings} rings x {sides} sides");
            self.mesh.rebuild_topology(rings, sides);
            self.topology_dirty = true;
        }

        self.write_rings(positions);
        self.mesh.compute_smooth_normals();

        let scale = self.config.radius * self.config.cap_scale;
        self.caps = EndCaps {
            start: CapMarker {
                position: self.world_to_local.transform_point3(positions[0]),
                scale,
            },
            end: CapMarker {
                position: self.world_to_local.transform_point3(positions[rings - 1]),
                scale,
            },
        };

        Ok(&self.mesh)
    }

    /// Like [`build_or_update`](Self::build_or_update) with a new cross-section.
    ///
    /// Nothing changes if either the points or the cross-section are invalid.
    pub fn build_or_update_with(
        &mut self,
        positions: &[Vec3],
        sides: usize,
        radius: f32,
    ) -> MeshResult<&TubeMesh> {
        if positions.len() < 2 {
            return Err(MeshError::InvalidInput(format!(
                "tube needs at least 2 centerline points, got {}",
                positions.len()
            )));
        }
        self.set_config(TubeConfig {
            sides,
            radius,
            ..self.config
        })?;
        self.build_or_update(positions)
    }

    fn write_rings(&mut self, positions: &[Vec3]) {
        let sides = self.config.sides;
        let radius = self.config.radius;
        let world_to_local = self.world_to_local;
        let angle_step = TAU / sides as f32;

        // Coincident or folded-back points have no tangent of their own.
        let mut last_forward = DEFAULT_TANGENT;

        for (index, ring) in self.mesh.vertices.chunks_exact_mut(sides).enumerate() {
            let center = positions[index];
            let mut forward = centerline_tangent(positions, index);
            if forward == Vec3::ZERO {
                forward = last_forward;
            }
            last_forward = forward;

            let frame = RingFrame::from_forward(forward);
            for (side, vertex) in ring.iter_mut().enumerate() {
                let (sin, cos) = (angle_step * side as f32).sin_cos();
                let point = center + frame.side * (cos * radius) + frame.up * (sin * radius);
                *vertex = world_to_local.transform_point3(point);
            }
        }
    }

    /// Pushes the current buffers into `sink`.
    ///
    /// After a topology change the vertex and index buffers are written in
    /// the order that never leaves an index out of range: vertices first
    /// when growing, indices first when shrinking. Otherwise only vertices
    /// and normals are written.
    pub fn upload<S: MeshSink + ?Sized>(&mut self, sink: &mut S) {
        let vertex_count = self.mesh.vertex_count();

        if self.topology_dirty {
            if vertex_count > self.uploaded_vertex_count {
                sink.write_vertices(&self.mesh.vertices);
                sink.write_indices(&self.mesh.indices);
            } else {
                sink.write_indices(&self.mesh.indices);
                sink.write_vertices(&self.mesh.vertices);
            }
            sink.write_uvs(&self.mesh.uvs);
            self.topology_dirty = false;
            self.uploaded_vertex_count = vertex_count;
        } else {
            sink.write_vertices(&self.mesh.vertices);
        }

        sink.write_normals(&self.mesh.normals);
    }

    /// The current mesh.
    pub fn mesh(&self) -> &TubeMesh {
        &self.mesh
    }

    /// Takes the mesh out of the builder.
    pub fn into_mesh(self) -> TubeMesh {
        self.mesh
    }

    /// End-cap markers from the last update.
    pub fn caps(&self) -> &EndCaps {
        &self.caps
    }
}

/// Builds a one-off tube mesh.
pub fn tube_mesh(positions: &[Vec3], sides: usize, radius: f32) -> MeshResult<TubeMesh> {
    let mut builder = TubeMeshBuilder::new(TubeConfig::new(sides, radius))?;
    builder.build_or_update(positions)?;
    Ok(builder.into_mesh())
}
