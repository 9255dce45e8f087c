//! # Mesh Data Structure
//!
//! Core mesh representation with per-vertex positions, normals and UVs plus
//! triangle indices.

use crate::error::MeshError;
use crate::params::UvChannel;
use glam::{DVec2, DVec3};

/// A triangle mesh with one normal and one UV per vertex.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the host boundary for GPU upload.
///
/// # Example
///
/// ```rust
/// use box_mesh::Mesh;
/// use glam::{DVec2, DVec3};
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0), DVec3::Z, DVec2::ZERO);
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0), DVec3::Z, DVec2::X);
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0), DVec3::Z, DVec2::Y);
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Vertex normals, one per vertex
    normals: Vec<DVec3>,
    /// Texture coordinates, one per vertex
    uvs: Vec<DVec2>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Channel the UVs are meant for
    uv_channel: UvChannel,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            uv_channel: UvChannel::Uv0,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex with its normal and UV and returns its index.
    pub fn add_vertex(&mut self, position: DVec3, normal: DVec3, uv: DVec2) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Adds a quad as the two triangles `(i0, i1, i2)` and `(i0, i2, i3)`.
    pub fn add_quad(&mut self, i0: u32, i1: u32, i2: u32, i3: u32) {
        self.add_triangle(i0, i1, i2);
        self.add_triangle(i0, i2, i3);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns a reference to the UVs.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    #[inline]
    pub fn uv_channel(&self) -> UvChannel {
        self.uv_channel
    }

    pub fn set_uv_channel(&mut self, channel: UvChannel) {
        self.uv_channel = channel;
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box. Always recomputed
    /// from the current vertex set.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Right-handed geometric normal of a triangle (not normalized).
    pub fn face_normal(&self, index: usize) -> DVec3 {
        let [a, b, c] = self.triangles[index];
        let v0 = self.vertices[a as usize];
        let v1 = self.vertices[b as usize];
        let v2 = self.vertices[c as usize];
        (v1 - v0).cross(v2 - v0)
    }

    /// Appends another mesh, offsetting its triangle indices.
    ///
    /// The UV channel of `self` is kept.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);

        for tri in &other.triangles {
            self.triangles
                .push([tri[0] + offset, tri[1] + offset, tri[2] + offset]);
        }
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Positions, normals and UVs have the same length
    /// - The vertex count fits 32-bit indices
    /// - All triangle indices are valid
    ///
    /// Zero-area triangles are allowed; a box of zero size is still a box.
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();
        if self.normals.len() != vertex_count || self.uvs.len() != vertex_count {
            return Err(MeshError::length_mismatch(
                vertex_count,
                self.normals.len(),
                self.uvs.len(),
            ));
        }

        let max = u32::MAX as usize;
        if vertex_count > max {
            return Err(MeshError::TooManyVertices {
                count: vertex_count,
                max,
            });
        }

        for (i, tri) in self.triangles.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&idx| idx as usize >= vertex_count) {
                return Err(MeshError::index_out_of_bounds(i, index, vertex_count));
            }
        }

        Ok(())
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        flatten3(&self.vertices)
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten3(&self.normals)
    }

    /// Exports UVs as flattened [u, v, u, v, ...] f32 array.
    pub fn uvs_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.uvs.len() * 2);
        for uv in &self.uvs {
            result.push(uv.x as f32);
            result.push(uv.y as f32);
        }
        result
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

fn flatten3(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO, DVec3::Z, DVec2::ZERO);
        mesh.add_vertex(DVec3::X, DVec3::Z, DVec2::X);
        mesh.add_vertex(DVec3::Y, DVec3::Z, DVec2::Y);
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.uv_channel(), UvChannel::Uv0);
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0), DVec3::Y, DVec2::new(0.5, 0.25));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.normals()[0], DVec3::Y);
        assert_eq!(mesh.uvs()[0], DVec2::new(0.5, 0.25));
    }

    #[test]
    fn test_mesh_add_quad() {
        let mut mesh = Mesh::new();
        mesh.add_quad(0, 1, 2, 3);
        assert_eq!(mesh.triangles(), &[[0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0), DVec3::Z, DVec2::ZERO);
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0), DVec3::Z, DVec2::ZERO);
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_face_normal() {
        let mesh = unit_triangle();
        assert_eq!(mesh.face_normal(0), DVec3::Z);
    }

    #[test]
    fn test_mesh_validate_valid() {
        assert_eq!(unit_triangle().validate(), Ok(()));
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO, DVec3::Z, DVec2::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert_eq!(
            mesh.validate(),
            Err(MeshError::index_out_of_bounds(0, 1, 1))
        );
    }

    #[test]
    fn test_mesh_exports() {
        let mesh = unit_triangle();
        assert_eq!(mesh.vertices_f32(), vec![0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(mesh.normals_f32().len(), 9);
        assert_eq!(mesh.uvs_f32(), vec![0.0f32, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(mesh.indices_u32(), vec![0, 1, 2]);
    }

    #[test]
    fn test_mesh_merge() {
        let mut mesh1 = unit_triangle();
        let mut mesh2 = unit_triangle();
        mesh2.set_uv_channel(UvChannel::Uv2);

        mesh1.merge(&mesh2);
        assert_eq!(mesh1.vertex_count(), 6);
        assert_eq!(mesh1.normals().len(), 6);
        assert_eq!(mesh1.uvs().len(), 6);
        assert_eq!(mesh1.triangle_count(), 2);
        assert_eq!(mesh1.triangle(1), [3, 4, 5]); // Offset by 3
        assert_eq!(mesh1.uv_channel(), UvChannel::Uv0);
    }
}
