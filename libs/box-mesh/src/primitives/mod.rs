//! # Primitives
//!
//! Procedural mesh generation for graphic primitives.

pub mod box_graphic;

pub use box_graphic::{build, build_with_config, BoxMesh, BoxSide};
