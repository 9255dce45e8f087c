//! # Face Grids
//!
//! Emits the back (z = 0, facing +Z) and front (z = -depth, facing -Z)
//! vertex grids and triangulates their cells.

use super::grid::{GridSampler, Layer};
use crate::mesh::Mesh;

/// Emits one face grid as a standalone block with block-relative indices.
///
/// Vertices are row-major (`vy` outer, `vx` inner). Each cell
/// `{v, v+1, v+1+W, v+W}` becomes two triangles; the front face uses the
/// mirrored order of the back face.
pub(crate) fn emit_face(sampler: &GridSampler, layer: Layer) -> Mesh {
    let verts_x = sampler.grid.verts_x;
    let verts_y = sampler.grid.verts_y;
    let cells = verts_x.saturating_sub(1) * verts_y.saturating_sub(1);
    let mut mesh = Mesh::with_capacity(verts_x * verts_y, cells * 2);
    let normal = layer.side().normal();

    for vy in 0..verts_y {
        for vx in 0..verts_x {
            mesh.add_vertex(sampler.position(vx, vy, layer), normal, sampler.uv(vx, vy));
        }
    }

    let row = verts_x as u32;
    for vy in 0..verts_y.saturating_sub(1) {
        for vx in 0..verts_x.saturating_sub(1) {
            let v = (vy * verts_x + vx) as u32;
            match layer {
                Layer::Back => {
                    mesh.add_triangle(v, v + 1, v + 1 + row);
                    mesh.add_triangle(v, v + 1 + row, v + row);
                }
                Layer::Front => {
                    mesh.add_triangle(v, v + 1 + row, v + 1);
                    mesh.add_triangle(v, v + row, v + 1 + row);
                }
            }
        }
    }

    mesh
}
