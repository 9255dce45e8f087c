//! # Mesh Errors
//!
//! Error types for mesh validation. Building a box never fails; these only
//! surface when a mesh is checked before being handed to a host.

use thiserror::Error;

/// Errors reported by [`Mesh::validate`](crate::Mesh::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// Per-vertex attribute buffers disagree in length
    #[error("Attribute length mismatch: {vertices} vertices, {normals} normals, {uvs} uvs")]
    AttributeLengthMismatch {
        vertices: usize,
        normals: usize,
        uvs: usize,
    },

    /// A triangle references a vertex that does not exist
    #[error("Triangle {triangle} references vertex {index} (vertex count: {vertex_count})")]
    IndexOutOfBounds {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },

    /// Too many vertices to address with 32-bit indices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}

impl MeshError {
    /// Creates an attribute length mismatch error.
    pub fn length_mismatch(vertices: usize, normals: usize, uvs: usize) -> Self {
        Self::AttributeLengthMismatch {
            vertices,
            normals,
            uvs,
        }
    }

    /// Creates an out-of-bounds index error.
    pub fn index_out_of_bounds(triangle: usize, index: u32, vertex_count: usize) -> Self {
        Self::IndexOutOfBounds {
            triangle,
            index,
            vertex_count,
        }
    }
}
