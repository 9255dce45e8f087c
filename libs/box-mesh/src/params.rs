//! # Box Parameters
//!
//! Input types for the box builder. A [`BoxSpec`] is assembled by the host
//! from component state and is never mutated by the builder.

use config::constants::{DEFAULT_BOX_SIZE, DEFAULT_VERTS_PER_UNIT};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in local space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Lower-left corner
    pub origin: DVec2,
    /// Width and height
    pub size: DVec2,
}

impl Rect {
    /// Creates a rectangle from its lower-left corner and size.
    pub fn new(origin: DVec2, size: DVec2) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle of the given size centered on the origin.
    ///
    /// ```rust
    /// use box_mesh::Rect;
    /// use glam::DVec2;
    ///
    /// let rect = Rect::centered(DVec2::new(2.0, 4.0));
    /// assert_eq!(rect.origin, DVec2::new(-1.0, -2.0));
    /// ```
    pub fn centered(size: DVec2) -> Self {
        Self {
            origin: -size / 2.0,
            size,
        }
    }

    /// The same area with a non-negative size: a negative extent moves the
    /// origin to the lower edge and is flipped.
    ///
    /// ```rust
    /// use box_mesh::Rect;
    /// use glam::DVec2;
    ///
    /// let rect = Rect::new(DVec2::new(1.0, 0.0), DVec2::new(-2.0, 3.0)).normalized();
    /// assert_eq!(rect, Rect::new(DVec2::new(-1.0, 0.0), DVec2::new(2.0, 3.0)));
    /// ```
    pub fn normalized(&self) -> Self {
        Self {
            origin: self.origin + self.size.min(DVec2::ZERO),
            size: self.size.abs(),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.size.y
    }
}

/// Border metrics in (left, bottom, right, top) order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl Border {
    /// A border of zero width on every side.
    pub const ZERO: Self = Self {
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
        top: 0.0,
    };

    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }
}

/// Nine-slice border metrics taken from a sprite.
///
/// `size` is in local units, `uv` is a fraction of the sprite's texture rect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NineSliceBorder {
    pub size: Border,
    pub uv: Border,
}

/// How the vertex resolution of a face is specified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Resolution {
    /// Interior vertex count per axis. Negative counts are treated as zero.
    Vertices { x: i32, y: i32 },
    /// Interior vertices per local unit of rect extent.
    VerticesPerUnit { x: f64, y: f64 },
}

impl Default for Resolution {
    fn default() -> Self {
        Self::VerticesPerUnit {
            x: DEFAULT_VERTS_PER_UNIT[0],
            y: DEFAULT_VERTS_PER_UNIT[1],
        }
    }
}

/// Mesh UV channel the box UVs are written to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UvChannel {
    #[default]
    Uv0,
    Uv1,
    Uv2,
    Uv3,
}

impl UvChannel {
    /// Zero-based channel index.
    pub fn index(self) -> usize {
        match self {
            UvChannel::Uv0 => 0,
            UvChannel::Uv1 => 1,
            UvChannel::Uv2 => 2,
            UvChannel::Uv3 => 3,
        }
    }
}

/// Everything the builder needs to produce a box mesh.
///
/// # Example
///
/// ```rust
/// use box_mesh::{BoxSpec, Resolution};
/// use glam::DVec3;
///
/// let spec = BoxSpec {
///     size: DVec3::new(1.0, 1.0, 0.1),
///     resolution: Resolution::Vertices { x: 0, y: 0 },
///     ..Default::default()
/// };
/// assert!(!spec.is_nine_sliced());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    /// Width, height and depth in local units
    pub size: DVec3,
    /// Layout rectangle supplied by the host; overrides `size.xy` when set
    pub layout_rect: Option<Rect>,
    pub resolution: Resolution,
    /// Nine-slicing requested
    pub nine_sliced: bool,
    /// Border metrics; `None` when the source cannot provide them
    pub border: Option<NineSliceBorder>,
    pub uv_channel: UvChannel,
}

impl Default for BoxSpec {
    fn default() -> Self {
        Self {
            size: DVec3::from_array(DEFAULT_BOX_SIZE),
            layout_rect: None,
            resolution: Resolution::default(),
            nine_sliced: false,
            border: None,
            uv_channel: UvChannel::Uv0,
        }
    }
}

impl BoxSpec {
    /// The rectangle the faces span: the layout rect if supplied, otherwise
    /// `size.xy` centered on the origin. Negative sizes are clamped to zero;
    /// a layout rect with a negative extent is normalized.
    pub fn rect(&self) -> Rect {
        match self.layout_rect {
            Some(rect) => rect.normalized(),
            None => Rect::centered(self.size.truncate().max(DVec2::ZERO)),
        }
    }

    /// Distance between the back and front faces, never negative.
    pub fn depth(&self) -> f64 {
        self.size.z.max(0.0)
    }

    /// Nine-slicing is only honored when a border source is present.
    pub fn is_nine_sliced(&self) -> bool {
        self.nine_sliced && self.border.is_some()
    }

    /// The border metrics in effect: zero unless nine-slicing applies.
    pub fn effective_border(&self) -> NineSliceBorder {
        match self.border {
            Some(border) if self.nine_sliced => border,
            _ => NineSliceBorder::default(),
        }
    }
}
