//! # Graphic Features
//!
//! Host-side state that feeds the box mesh builder.
//!
//! ## Architecture
//!
//! ```text
//! FeatureRegistry (features + per-element data)
//!        ↓ source data (texture / sprite)
//! BoxGraphic (component state) → BoxSpec → box_mesh::build
//! ```
//!
//! Features form a closed set. Each owns a typed data array, and elements
//! refer into those arrays through [`DataRef`] indices rather than object
//! references.
//!
//! ## Usage
//!
//! ```rust
//! use graphic_features::{BoxGraphic, Feature, FeatureRegistry, TextureFeature};
//!
//! let mut registry = FeatureRegistry::new();
//! registry.add_feature(Feature::Texture(TextureFeature::default()));
//! let element = registry.add_element();
//!
//! let mut graphic = BoxGraphic::new(element);
//! graphic.on_validate(&mut registry, None);
//! let result = graphic.refresh_mesh_data(&registry, None);
//! assert!(result.mesh().validate().is_ok());
//! ```

pub mod error;
pub mod feature;
pub mod graphic;
pub mod names;
pub mod registry;

pub use error::FeatureError;
pub use feature::{
    Feature, FeatureData, FeatureKind, Sprite, SpriteData, SpriteFeature, TextureData,
    TextureFeature, TextureHandle, TintData, TintFeature,
};
pub use graphic::{BoxGraphic, ResolutionType};
pub use names::FeatureNames;
pub use registry::{DataRef, ElementId, FeatureId, FeatureRegistry};
