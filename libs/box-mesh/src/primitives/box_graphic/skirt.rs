//! # Edge Skirts
//!
//! Each skirt repeats one boundary row of the back grid and the matching row
//! of the front grid with the skirt's outward normal, then joins the two rows
//! with quads. Boundary vertices are duplicated rather than shared so each
//! copy can carry its own face normal.

use super::grid::{GridSampler, Layer};
use super::BoxSide;
use crate::mesh::Mesh;

/// The four sides joining the back and front grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Skirt {
    Left,
    Right,
    Top,
    Bottom,
}

impl Skirt {
    pub(crate) fn side(self) -> BoxSide {
        match self {
            Skirt::Left => BoxSide::Left,
            Skirt::Right => BoxSide::Right,
            Skirt::Top => BoxSide::Top,
            Skirt::Bottom => BoxSide::Bottom,
        }
    }

    /// Grid coordinate of the `i`-th boundary vertex along this side.
    fn boundary(self, i: usize, sampler: &GridSampler) -> (usize, usize) {
        let last_x = sampler.grid.verts_x.saturating_sub(1);
        let last_y = sampler.grid.verts_y.saturating_sub(1);
        match self {
            Skirt::Left => (0, i),
            Skirt::Right => (last_x, i),
            Skirt::Top => (i, last_y),
            Skirt::Bottom => (i, 0),
        }
    }

    /// Boundary vertices along this side: rows run along y for left/right
    /// and along x for top/bottom.
    fn len(self, sampler: &GridSampler) -> usize {
        match self {
            Skirt::Left | Skirt::Right => sampler.grid.verts_y,
            Skirt::Top | Skirt::Bottom => sampler.grid.verts_x,
        }
    }

    /// Right and bottom boundaries are traversed against their outward
    /// orientation, so their quads use the mirrored order.
    fn mirrored(self) -> bool {
        matches!(self, Skirt::Right | Skirt::Bottom)
    }
}

/// Emits one skirt as a standalone block: the back row, then the front row,
/// then `len - 1` quads.
pub(crate) fn emit_skirt(sampler: &GridSampler, skirt: Skirt) -> Mesh {
    let len = skirt.len(sampler);
    let normal = skirt.side().normal();
    let mut mesh = Mesh::with_capacity(len * 2, len.saturating_sub(1) * 2);

    for layer in [Layer::Back, Layer::Front] {
        for i in 0..len {
            let (vx, vy) = skirt.boundary(i, sampler);
            mesh.add_vertex(sampler.position(vx, vy, layer), normal, sampler.uv(vx, vy));
        }
    }

    let back = 0u32;
    let front = len as u32;
    for i in 0..len.saturating_sub(1) as u32 {
        if skirt.mirrored() {
            mesh.add_quad(front + i + 1, back + i + 1, back + i, front + i);
        } else {
            mesh.add_quad(front + i, back + i, back + i + 1, front + i + 1);
        }
    }

    mesh
}
