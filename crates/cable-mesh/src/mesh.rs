//! Indexed triangle buffers for tube surfaces.

use glam::{Vec2, Vec3};

/// 3D axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb3 {
    /// Creates a new AABB from min and max corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing all points, `None` for an empty slice.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::new(*first, *first);
        for &p in rest {
            bounds.min = bounds.min.min(p);
            bounds.max = bounds.max.max(p);
        }
        Some(bounds)
    }

    /// Returns the size of the AABB.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Checks if this AABB contains a point.
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Vertex, normal, UV and index buffers of a tube.
///
/// Vertices are ring-major: vertex `ring * sides + side`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TubeMesh {
    /// Vertex positions.
    pub vertices: Vec<Vec3>,
    /// Per-vertex smooth normals.
    pub normals: Vec<Vec3>,
    /// Texture coordinates, same order as `vertices`.
    pub uvs: Vec<Vec2>,
    /// Triangle indices (every 3 indices form a triangle).
    pub indices: Vec<u32>,
    sides: usize,
}

impl TubeMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertices per ring.
    pub fn sides(&self) -> usize {
        self.sides
    }

    /// Number of rings (centerline points).
    pub fn ring_count(&self) -> usize {
        if self.sides == 0 {
            0
        } else {
            self.vertices.len() / self.sides
        }
    }

    /// Vertices of one ring.
    pub fn ring(&self, index: usize) -> Option<&[Vec3]> {
        if index >= self.ring_count() {
            return None;
        }
        let start = index * self.sides;
        Some(&self.vertices[start..start + self.sides])
    }

    /// Returns true if the mesh has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Bounding box of all vertices.
    pub fn bounds(&self) -> Option<Aabb3> {
        Aabb3::from_points(&self.vertices)
    }

    /// Computes smooth normals by averaging adjacent face normals.
    pub fn compute_smooth_normals(&mut self) {
        self.normals.clear();
        self.normals.resize(self.vertices.len(), Vec3::ZERO);

        for tri in self.indices.chunks_exact(3) {
            let [i0, i1, i2] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let v0 = self.vertices[i0];
            let v1 = self.vertices[i1];
            let v2 = self.vertices[i2];

            // unnormalized = area-weighted
            let normal = (v1 - v0).cross(v2 - v0);

            self.normals[i0] += normal;
            self.normals[i1] += normal;
            self.normals[i2] += normal;
        }

        for normal in &mut self.normals {
            *normal = normal.normalize_or_zero();
        }
    }

    /// Regenerates indices and UVs for `rings` rings of `sides` vertices.
    ///
    /// Vertex positions are resized but not computed.
    pub(crate) fn rebuild_topology(&mut self, rings: usize, sides: usize) {
        self.sides = sides;
        self.vertices.resize(rings * sides, Vec3::ZERO);

        self.indices.clear();
        self.indices.reserve((rings - 1) * sides * 6);
        for ring in 1..rings {
            for side in 0..sides {
                let current = (ring * sides + side) as u32;
                let previous = current - sides as u32;
                let (next, previous_next) = if side == sides - 1 {
                    (current + 1 - sides as u32, previous + 1 - sides as u32)
                } else {
                    (current + 1, previous + 1)
                };

                self.indices.extend_from_slice(&[previous, next, current]);
                self.indices.extend_from_slice(&[previous_next, next, previous]);
            }
        }

        self.uvs.clear();
        self.uvs.reserve(rings * sides);
        let u_max = (sides - 1) as f32;
        let v_max = (rings - 1) as f32;
        for ring in 0..rings {
            for side in 0..sides {
                self.uvs.push(Vec2::new(side as f32 / u_max, ring as f32 / v_max));
            }
        }
    }
}
