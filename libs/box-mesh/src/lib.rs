//! # Box Mesh
//!
//! CPU-side mesh synthesis for box graphics: flat rectangular prisms whose
//! front and back faces may be nine-sliced.
//!
//! ## Architecture
//!
//! ```text
//! host component state → BoxSpec → build → BoxMesh (Mesh + layout)
//! ```
//!
//! The builder is a pure function. It holds no state between calls, does no
//! I/O, and may run on any thread.
//!
//! ## Usage
//!
//! ```rust
//! use box_mesh::{build, Border, BoxSpec, NineSliceBorder, Resolution};
//! use glam::DVec3;
//!
//! let spec = BoxSpec {
//!     size: DVec3::new(1.0, 1.0, 0.1),
//!     resolution: Resolution::Vertices { x: 0, y: 0 },
//!     nine_sliced: true,
//!     border: Some(NineSliceBorder {
//!         size: Border::new(0.1, 0.1, 0.1, 0.1),
//!         uv: Border::new(0.25, 0.25, 0.25, 0.25),
//!     }),
//!     ..Default::default()
//! };
//! let result = build(&spec);
//! assert_eq!(result.grid().verts_x, 4);
//! assert!(result.mesh().validate().is_ok());
//! ```

pub mod error;
pub mod mesh;
pub mod params;
pub mod primitives;

pub use error::MeshError;
pub use mesh::Mesh;
pub use params::{Border, BoxSpec, NineSliceBorder, Rect, Resolution, UvChannel};
pub use primitives::{build, build_with_config, BoxMesh, BoxSide};
