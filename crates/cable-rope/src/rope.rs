//! Rope simulator: Verlet integration plus iterative distance relaxation.

use glam::Vec3;
use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Anchor, AnchorState, PointMass, RopeEnd, RopeError, RopeResult};

/// Construction-time rope parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RopeConfig {
    /// Total rest length of the cable.
    pub cable_length: f32,
    /// Number of segments (the rope has `segments + 1` particles).
    pub segments: usize,
    /// Integrate/relax rounds per physics step.
    pub verlet_iterations: usize,
    /// Relaxation sweeps per integrate/relax round.
    pub solver_iterations: usize,
}

impl Default for RopeConfig {
    fn default() -> Self {
        Self {
            cable_length: 2.0,
            segments: 16,
            verlet_iterations: 1,
            solver_iterations: 1,
        }
    }
}

impl RopeConfig {
    /// Creates a config with the given length and segment count.
    pub fn new(cable_length: f32, segments: usize) -> Self {
        Self {
            cable_length,
            segments,
            ..Self::default()
        }
    }

    /// Returns a copy with different iteration counts.
    pub fn with_iterations(self, verlet_iterations: usize, solver_iterations: usize) -> Self {
        Self {
            verlet_iterations,
            solver_iterations,
            ..self
        }
    }

    /// Rest length of every segment.
    pub fn rest_segment_length(&self) -> f32 {
        self.cable_length / self.segments as f32
    }

    /// Checks that the config describes a buildable rope.
    pub fn validate(&self) -> RopeResult<()> {
        if self.segments < 1 {
            return Err(RopeError::InvalidConfiguration(format!(
                "segments must be at least 1, got {}",
                self.segments
            )));
        }
        if !self.cable_length.is_finite() || self.cable_length <= 0.0 {
            return Err(RopeError::InvalidConfiguration(format!(
                "cable length must be positive and finite, got {}",
                self.cable_length
            )));
        }
        if self.verlet_iterations < 1 {
            return Err(RopeError::InvalidConfiguration(
                "verlet iterations must be at least 1".to_string(),
            ));
        }
        if self.solver_iterations < 1 {
            return Err(RopeError::InvalidConfiguration(
                "solver iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// A rope of uniform segments with both ends pinned to anchors.
///
/// Particle order is centerline order and never changes after construction.
#[derive(Debug, Clone)]
pub struct RopeSimulator<A = AnchorState> {
    particles: Vec<PointMass>,
    start: A,
    end: A,
    config: RopeConfig,
    rest_segment_length: f32,
}

impl<A: Anchor> RopeSimulator<A> {
    /// Lays out a straight rope from the start anchor towards the end anchor.
    ///
    /// Interior particles are spaced at the rest segment length. Particle 0
    /// is bound to `start` and the last particle to `end`, both placed at
    /// their anchor's position and at rest.
    pub fn new(start: A, end: A, config: RopeConfig) -> RopeResult<Self> {
        config.validate()?;

        let origin = start.world_position();
        let direction = (end.world_position() - origin).normalize_or(Vec3::NEG_Y);
        let rest_segment_length = config.rest_segment_length();
        let last = config.segments;

        let particles = (0..=last)
            .map(|i| {
                if i == 0 {
                    PointMass::pinned(origin, RopeEnd::Start)
                } else if i == last {
                    PointMass::pinned(end.world_position(), RopeEnd::End)
                } else {
                    PointMass::new(origin + direction * (rest_segment_length * i as f32))
                }
            })
            .collect();

        debug!(
            "rope created: {} segments, length {}, rest segment {}",
            config.segments, config.cable_length, rest_segment_length
        );

        Ok(Self {
            particles,
            start,
            end,
            config,
            rest_segment_length,
        })
    }

    /// Advances the rope by one fixed physics step.
    pub fn step(&mut self, gravity: Vec3, dt: f32) {
        for _ in 0..self.config.verlet_iterations {
            self.integrate(gravity, dt);
            self.relax();
        }
        trace!("rope step: max segment error {}", self.max_segment_error());
    }

    /// Moves free particles by Verlet integration and pinned ones to their anchors.
    pub fn integrate(&mut self, gravity: Vec3, dt: f32) {
        let gravity_displacement = gravity * dt * dt;
        let start = self.start.predict(dt);
        let end = self.end.predict(dt);

        for particle in &mut self.particles {
            match particle.binding() {
                None => particle.integrate(gravity_displacement),
                Some(RopeEnd::Start) => particle.update_position(start),
                Some(RopeEnd::End) => particle.update_position(end),
            }
        }
    }

    /// Runs every configured relaxation sweep.
    pub fn relax(&mut self) {
        for _ in 0..self.config.solver_iterations {
            self.relax_pass();
        }
    }

    /// One left-to-right sweep over all adjacent particle pairs.
    ///
    /// Each sweep only approximately satisfies the chain; repeated sweeps
    /// converge towards the rest length.
    pub fn relax_pass(&mut self) {
        for i in 1..self.particles.len() {
            let (head, tail) = self.particles.split_at_mut(i);
            solve_distance_constraint(&mut head[i - 1], &mut tail[0], self.rest_segment_length);
        }
    }

    /// Snapshot of all particle positions in centerline order.
    pub fn positions(&self) -> Vec<Vec3> {
        self.particles.iter().map(|p| p.position).collect()
    }

    /// Writes all particle positions into `out`, reusing its allocation.
    pub fn positions_into(&self, out: &mut Vec<Vec3>) {
        out.clear();
        out.extend(self.particles.iter().map(|p| p.position));
    }

    /// Returns all particles.
    pub fn particles(&self) -> &[PointMass] {
        &self.particles
    }

    /// Returns all particles for direct manipulation.
    ///
    /// Pin bindings are fixed; only positions can be changed.
    pub fn particles_mut(&mut self) -> &mut [PointMass] {
        &mut self.particles
    }

    /// Number of particles (`segments + 1`).
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.config.segments
    }

    /// Rest length shared by every segment.
    pub fn rest_segment_length(&self) -> f32 {
        self.rest_segment_length
    }

    /// The configuration the rope was built with.
    pub fn config(&self) -> &RopeConfig {
        &self.config
    }

    /// The anchor pinning particle 0.
    pub fn start_anchor(&self) -> &A {
        &self.start
    }

    /// Mutable access to the start anchor.
    pub fn start_anchor_mut(&mut self) -> &mut A {
        &mut self.start
    }

    /// The anchor pinning the last particle.
    pub fn end_anchor(&self) -> &A {
        &self.end
    }

    /// Mutable access to the end anchor.
    pub fn end_anchor_mut(&mut self) -> &mut A {
        &mut self.end
    }

    /// Current length of every segment.
    pub fn segment_lengths(&self) -> Vec<f32> {
        self.particles
            .windows(2)
            .map(|pair| pair[0].position.distance(pair[1].position))
            .collect()
    }

    /// Largest deviation of any segment from the rest length.
    pub fn max_segment_error(&self) -> f32 {
        let rest = self.rest_segment_length;
        self.particles
            .windows(2)
            .map(|pair| (pair[0].position.distance(pair[1].position) - rest).abs())
            .fold(0.0, f32::max)
    }

    /// Current length along the centerline.
    pub fn current_length(&self) -> f32 {
        self.particles
            .windows(2)
            .map(|pair| pair[0].position.distance(pair[1].position))
            .sum()
    }
}

/// Pulls two particles towards `rest_length` apart.
///
/// Two free particles share the correction equally. When one is pinned the
/// free one absorbs all of it; two pinned particles are left alone.
/// Coincident particles are skipped since there is no direction to push along.
pub fn solve_distance_constraint(a: &mut PointMass, b: &mut PointMass, rest_length: f32) {
    let delta = b.position - a.position;
    let dist = delta.length();

    if dist <= 0.0 {
        return;
    }

    let error_factor = (dist - rest_length) / dist;

    match (a.is_free(), b.is_free()) {
        (true, true) => {
            let correction = delta * (0.5 * error_factor);
            a.position += correction;
            b.position -= correction;
        }
        (true, false) => a.position += delta * error_factor,
        (false, true) => b.position -= delta * error_factor,
        (false, false) => {}
    }
}
