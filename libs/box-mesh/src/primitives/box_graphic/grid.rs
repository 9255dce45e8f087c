//! Shared sampling of face-grid positions and UVs.

use super::axis::position_along_axis;
use super::resolution::GridResolution;
use super::BoxSide;
use crate::params::{Border, Rect};
use glam::{DVec2, DVec3};

/// Which of the two parallel face planes a vertex lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Layer {
    /// z = 0
    Back,
    /// z = -depth
    Front,
}

impl Layer {
    /// The box side whose face grid lies on this layer.
    pub(crate) fn side(self) -> BoxSide {
        match self {
            Layer::Back => BoxSide::Back,
            Layer::Front => BoxSide::Front,
        }
    }
}

/// Evaluates grid coordinates for one build. Face and skirt emitters both
/// go through this so duplicated boundary vertices land on identical values.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GridSampler {
    pub(crate) grid: GridResolution,
    rect: Rect,
    depth: f64,
    border_size: Border,
    border_uv: Border,
    nine_sliced: bool,
}

impl GridSampler {
    pub(crate) fn new(
        grid: GridResolution,
        rect: Rect,
        depth: f64,
        border_size: Border,
        border_uv: Border,
        nine_sliced: bool,
    ) -> Self {
        Self {
            grid,
            rect,
            depth,
            border_size,
            border_uv,
            nine_sliced,
        }
    }

    pub(crate) fn position(&self, vx: usize, vy: usize, layer: Layer) -> DVec3 {
        let x = position_along_axis(
            vx,
            self.grid.verts_x,
            self.rect.width(),
            self.border_size.left,
            self.border_size.right,
            self.nine_sliced,
        );
        let y = position_along_axis(
            vy,
            self.grid.verts_y,
            self.rect.height(),
            self.border_size.bottom,
            self.border_size.top,
            self.nine_sliced,
        );
        let z = match layer {
            Layer::Back => 0.0,
            Layer::Front => -self.depth,
        };
        DVec3::new(x + self.rect.origin.x, y + self.rect.origin.y, z)
    }

    pub(crate) fn uv(&self, vx: usize, vy: usize) -> DVec2 {
        DVec2::new(
            position_along_axis(
                vx,
                self.grid.verts_x,
                1.0,
                self.border_uv.left,
                self.border_uv.right,
                self.nine_sliced,
            ),
            position_along_axis(
                vy,
                self.grid.verts_y,
                1.0,
                self.border_uv.bottom,
                self.border_uv.top,
                self.nine_sliced,
            ),
        )
    }
}
