//! Upload seam between tube buffers and a renderer.

use glam::{Vec2, Vec3};

/// Receiver of tube buffers, typically a GPU mesh or an engine mesh asset.
///
/// Many mesh APIs reject an index buffer that references vertices beyond the
/// current vertex buffer. [`TubeMeshBuilder::upload`](crate::TubeMeshBuilder::upload)
/// therefore writes the larger of the two buffers last, so every
/// intermediate state is valid.
pub trait MeshSink {
    /// Replaces the vertex positions.
    fn write_vertices(&mut self, vertices: &[Vec3]);

    /// Replaces the triangle indices.
    fn write_indices(&mut self, indices: &[u32]);

    /// Replaces the texture coordinates.
    fn write_uvs(&mut self, uvs: &[Vec2]);

    /// Replaces the vertex normals. Sinks that compute their own can ignore this.
    fn write_normals(&mut self, _normals: &[Vec3]) {}
}
