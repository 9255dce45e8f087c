//! # Grid Resolution
//!
//! Turns a [`Resolution`] and a rect extent into per-axis vertex counts.

use crate::params::{BoxSpec, Resolution};
use config::constants::{boundary_verts, HARD_MAX_VERTS_PER_AXIS, MAX_VERTS_PER_AXIS};
use serde::{Deserialize, Serialize};

/// Vertex counts along x and y for one face grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridResolution {
    pub verts_x: usize,
    pub verts_y: usize,
}

impl GridResolution {
    pub fn new(verts_x: usize, verts_y: usize) -> Self {
        Self { verts_x, verts_y }
    }

    /// Vertices in one face grid.
    pub fn face_vertex_count(&self) -> usize {
        self.verts_x * self.verts_y
    }

    /// Vertices in the finished box: two face grids plus two rows per skirt.
    pub fn box_vertex_count(&self) -> usize {
        2 * self.face_vertex_count() + 4 * self.verts_x + 4 * self.verts_y
    }

    /// Triangles in the finished box.
    ///
    /// ```rust
    /// use box_mesh::primitives::box_graphic::GridResolution;
    /// assert_eq!(GridResolution::new(2, 2).box_triangle_count(), 12);
    /// ```
    pub fn box_triangle_count(&self) -> usize {
        let cells_x = self.verts_x.saturating_sub(1);
        let cells_y = self.verts_y.saturating_sub(1);
        2 * (cells_x * cells_y) * 2 + 2 * cells_x * 2 + 2 * cells_y * 2
    }
}

/// Resolves the grid for a rect of the given extent, clamped to
/// [`MAX_VERTS_PER_AXIS`].
pub fn resolve(rect_width: f64, rect_height: f64, spec: &BoxSpec) -> GridResolution {
    resolve_with_limit(rect_width, rect_height, spec, MAX_VERTS_PER_AXIS)
}

/// Resolves the grid with an explicit per-axis clamp.
///
/// Interior counts come from the explicit vertex counts (negatives treated as
/// zero) or from `round(extent * density)`. Boundary padding of 2, or 4 when
/// nine-sliced, is added before clamping to `max_verts`. `max_verts` itself
/// is capped at [`HARD_MAX_VERTS_PER_AXIS`] so vertex indices fit `u32`.
pub fn resolve_with_limit(
    rect_width: f64,
    rect_height: f64,
    spec: &BoxSpec,
    max_verts: usize,
) -> GridResolution {
    let (interior_x, interior_y) = match spec.resolution {
        Resolution::Vertices { x, y } => (clamp_count(x), clamp_count(y)),
        Resolution::VerticesPerUnit { x, y } => {
            (density_count(rect_width, x), density_count(rect_height, y))
        }
    };

    let padding = boundary_verts(spec.is_nine_sliced());
    let max_verts = max_verts.min(HARD_MAX_VERTS_PER_AXIS);
    GridResolution {
        verts_x: interior_x.saturating_add(padding).min(max_verts),
        verts_y: interior_y.saturating_add(padding).min(max_verts),
    }
}

fn clamp_count(count: i32) -> usize {
    count.max(0) as usize
}

/// `round(extent * density)` with ties to even. Negative and NaN products
/// become zero; `as` saturates huge products.
pub(crate) fn density_count(extent: f64, density: f64) -> usize {
    let product = (extent * density).round_ties_even();
    if product > 0.0 {
        product as usize
    } else {
        0
    }
}
