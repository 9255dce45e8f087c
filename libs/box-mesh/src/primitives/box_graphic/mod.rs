//! # Box Graphic Primitive
//!
//! Generates a flat rectangular prism for GUI panels: a back and a front
//! face grid, optionally nine-sliced, joined by four edge skirts.
//!
//! ## Layout
//!
//! ```text
//! back grid (z = 0, +Z)
//! front grid (z = -depth, -Z)
//! left / right / top / bottom skirts
//! ```
//!
//! Blocks are appended in exactly that order, so for identical input the
//! output buffers are bit-identical.

mod axis;
mod face;
mod grid;
mod resolution;
mod skirt;

#[cfg(test)]
mod tests;

pub use axis::position_along_axis;
pub use resolution::{resolve, resolve_with_limit, GridResolution};

use crate::mesh::Mesh;
use crate::params::BoxSpec;
use config::constants::GlobalConfig;
use face::emit_face;
use glam::DVec3;
use grid::{GridSampler, Layer};
use serde::{Deserialize, Serialize};
use skirt::{emit_skirt, Skirt};
use std::ops::Range;

/// The six vertex blocks of a box, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoxSide {
    Back,
    Front,
    Left,
    Right,
    Top,
    Bottom,
}

impl BoxSide {
    /// All sides in the order their blocks appear in the mesh.
    pub const EMISSION_ORDER: [BoxSide; 6] = [
        BoxSide::Back,
        BoxSide::Front,
        BoxSide::Left,
        BoxSide::Right,
        BoxSide::Top,
        BoxSide::Bottom,
    ];

    /// Outward normal shared by every vertex of this side.
    pub fn normal(self) -> DVec3 {
        match self {
            BoxSide::Back => DVec3::Z,
            BoxSide::Front => DVec3::NEG_Z,
            BoxSide::Left => DVec3::NEG_X,
            BoxSide::Right => DVec3::X,
            BoxSide::Top => DVec3::Y,
            BoxSide::Bottom => DVec3::NEG_Y,
        }
    }
}

/// Vertex and triangle ranges one side occupies in the merged mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshSection {
    pub side: BoxSide,
    pub vertices: Range<usize>,
    pub triangles: Range<usize>,
}

/// Output of [`build`]: the merged mesh plus how it was laid out.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxMesh {
    mesh: Mesh,
    grid: GridResolution,
    nine_sliced: bool,
    sections: Vec<MeshSection>,
}

impl BoxMesh {
    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }

    /// Per-face grid resolution the box was built with.
    #[inline]
    pub fn grid(&self) -> GridResolution {
        self.grid
    }

    /// Whether nine-slice spacing was actually applied.
    #[inline]
    pub fn nine_sliced(&self) -> bool {
        self.nine_sliced
    }

    /// Sections in emission order.
    pub fn sections(&self) -> &[MeshSection] {
        &self.sections
    }

    pub fn section(&self, side: BoxSide) -> Option<&MeshSection> {
        self.sections.iter().find(|s| s.side == side)
    }

    /// Vertex index where the front grid begins.
    pub fn back_verts_count(&self) -> usize {
        self.grid.face_vertex_count()
    }
}

/// Builds a box mesh with the default configuration.
///
/// Never fails: negative counts, zero sizes and a missing nine-slice border
/// all degrade to a valid mesh of at least a 2x2 grid per face.
///
/// # Example
///
/// ```rust
/// use box_mesh::{build, BoxSpec, Resolution};
/// use glam::DVec3;
///
/// let spec = BoxSpec {
///     size: DVec3::new(1.0, 1.0, 0.1),
///     resolution: Resolution::Vertices { x: 0, y: 0 },
///     ..Default::default()
/// };
/// let result = build(&spec);
/// assert_eq!(result.mesh().vertex_count(), 24);
/// assert_eq!(result.mesh().triangle_count(), 12);
/// ```
pub fn build(spec: &BoxSpec) -> BoxMesh {
    build_with_config(spec, &GlobalConfig::default())
}

/// Builds a box mesh using the vertex clamp from `config`.
pub fn build_with_config(spec: &BoxSpec, config: &GlobalConfig) -> BoxMesh {
    if spec.nine_sliced && spec.border.is_none() {
        tracing::warn!("[box_mesh] Nine-slicing requested without a border source, building a plain box");
    }

    let rect = spec.rect();
    let nine_sliced = spec.is_nine_sliced();
    let border = spec.effective_border();
    let grid = resolve_with_limit(rect.width(), rect.height(), spec, config.max_verts_per_axis);
    let sampler = GridSampler::new(grid, rect, spec.depth(), border.size, border.uv, nine_sliced);

    let mut mesh = Mesh::with_capacity(grid.box_vertex_count(), grid.box_triangle_count());
    mesh.set_uv_channel(spec.uv_channel);

    let blocks = [
        (BoxSide::Back, emit_face(&sampler, Layer::Back)),
        (BoxSide::Front, emit_face(&sampler, Layer::Front)),
        (BoxSide::Left, emit_skirt(&sampler, Skirt::Left)),
        (BoxSide::Right, emit_skirt(&sampler, Skirt::Right)),
        (BoxSide::Top, emit_skirt(&sampler, Skirt::Top)),
        (BoxSide::Bottom, emit_skirt(&sampler, Skirt::Bottom)),
    ];

    let mut sections = Vec::with_capacity(BoxSide::EMISSION_ORDER.len());
    for (side, block) in blocks {
        let vertex_start = mesh.vertex_count();
        let triangle_start = mesh.triangle_count();
        mesh.merge(&block);
        sections.push(MeshSection {
            side,
            vertices: vertex_start..mesh.vertex_count(),
            triangles: triangle_start..mesh.triangle_count(),
        });
    }

    tracing::debug!(
        "[box_mesh] Built {}x{} box: {} vertices, {} triangles, nine_sliced={}",
        grid.verts_x,
        grid.verts_y,
        mesh.vertex_count(),
        mesh.triangle_count(),
        nine_sliced
    );

    BoxMesh {
        mesh,
        grid,
        nine_sliced,
        sections,
    }
}
