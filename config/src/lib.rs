//! # Config Crate
//!
//! Centralized configuration constants for the box graphic pipeline.
//! Grid limits, boundary padding, component defaults and transition timing
//! are defined here so the mesh, feature and transition crates agree.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MAX_VERTS_PER_AXIS, BOUNDARY_VERTS, NINE_SLICE_BOUNDARY_VERTS};
//!
//! // A requested resolution of zero still yields a 2x2 grid
//! let requested = 0usize;
//! let verts = (requested + BOUNDARY_VERTS).min(MAX_VERTS_PER_AXIS);
//! assert_eq!(verts, 2);
//!
//! // Nine-sliced grids reserve two extra border rows
//! let verts = (requested + NINE_SLICE_BOUNDARY_VERTS).min(MAX_VERTS_PER_AXIS);
//! assert_eq!(verts, 4);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Engine-Agnostic**: No host engine types leak in here
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
