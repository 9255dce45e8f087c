//! # Features
//!
//! The closed set of graphic features. Each feature owns a typed array of
//! per-element data; elements refer into it by index through the registry.

use crate::registry::ElementId;
use box_mesh::{Border, NineSliceBorder, Rect, UvChannel};
use serde::{Deserialize, Serialize};

/// Feature discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    Texture,
    Sprite,
    Tint,
}

/// Opaque handle to a host texture asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureHandle(pub u64);

/// Sprite metrics needed for nine-slicing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    /// Border in pixels, (left, bottom, right, top)
    pub border: Border,
    pub pixels_per_unit: f64,
    /// Sprite's rect within its texture, in pixels
    pub texture_rect: Rect,
}

impl Sprite {
    /// Converts the pixel border into local-unit sizes and UV fractions.
    ///
    /// Returns `None` when `pixels_per_unit` or the texture rect extent is not
    /// positive, since neither conversion is defined then.
    ///
    /// ```rust
    /// use box_mesh::{Border, Rect};
    /// use glam::DVec2;
    /// use graphic_features::Sprite;
    ///
    /// let sprite = Sprite {
    ///     border: Border::new(10.0, 20.0, 10.0, 20.0),
    ///     pixels_per_unit: 100.0,
    ///     texture_rect: Rect::new(DVec2::ZERO, DVec2::new(100.0, 80.0)),
    /// };
    /// let border = sprite.nine_slice_border().unwrap();
    /// assert_eq!(border.size.left, 0.1);
    /// assert_eq!(border.uv.bottom, 0.25);
    /// ```
    pub fn nine_slice_border(&self) -> Option<NineSliceBorder> {
        let ppu = self.pixels_per_unit;
        let width = self.texture_rect.width();
        let height = self.texture_rect.height();
        if !(ppu > 0.0 && width > 0.0 && height > 0.0) {
            return None;
        }

        let b = self.border;
        Some(NineSliceBorder {
            size: Border::new(b.left / ppu, b.bottom / ppu, b.right / ppu, b.top / ppu),
            uv: Border::new(b.left / width, b.bottom / height, b.right / width, b.top / height),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureData {
    pub element: ElementId,
    pub texture: Option<TextureHandle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteData {
    pub element: ElementId,
    pub sprite: Option<Sprite>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TintData {
    pub element: ElementId,
    /// RGBA in [0, 1]
    pub color: [f32; 4],
}

/// Samples a texture into a UV channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextureFeature {
    pub property_name: String,
    pub channel: UvChannel,
    pub data: Vec<TextureData>,
}

/// Samples a packed sprite into a UV channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpriteFeature {
    pub property_name: String,
    pub channel: UvChannel,
    pub data: Vec<SpriteData>,
}

/// Per-element vertex color.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TintFeature {
    pub data: Vec<TintData>,
}

/// A feature together with the data of every element that uses it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Feature {
    Texture(TextureFeature),
    Sprite(SpriteFeature),
    Tint(TintFeature),
}

impl Feature {
    pub fn kind(&self) -> FeatureKind {
        match self {
            Feature::Texture(_) => FeatureKind::Texture,
            Feature::Sprite(_) => FeatureKind::Sprite,
            Feature::Tint(_) => FeatureKind::Tint,
        }
    }

    /// UV channel written by this feature, if it samples a texture at all.
    pub fn channel(&self) -> Option<UvChannel> {
        match self {
            Feature::Texture(f) => Some(f.channel),
            Feature::Sprite(f) => Some(f.channel),
            Feature::Tint(_) => None,
        }
    }

    /// Number of data objects currently held.
    pub fn data_len(&self) -> usize {
        match self {
            Feature::Texture(f) => f.data.len(),
            Feature::Sprite(f) => f.data.len(),
            Feature::Tint(f) => f.data.len(),
        }
    }

    /// Appends a default data object for `element` and returns its index.
    pub fn create_data_object(&mut self, element: ElementId) -> usize {
        match self {
            Feature::Texture(f) => {
                f.data.push(TextureData {
                    element,
                    texture: None,
                });
                f.data.len() - 1
            }
            Feature::Sprite(f) => {
                f.data.push(SpriteData {
                    element,
                    sprite: None,
                });
                f.data.len() - 1
            }
            Feature::Tint(f) => {
                f.data.push(TintData {
                    element,
                    color: [1.0; 4],
                });
                f.data.len() - 1
            }
        }
    }

    pub fn clear_data_object_references(&mut self) {
        match self {
            Feature::Texture(f) => f.data.clear(),
            Feature::Sprite(f) => f.data.clear(),
            Feature::Tint(f) => f.data.clear(),
        }
    }

    /// Borrowed view of one data object.
    pub fn data(&self, index: usize) -> Option<FeatureData<'_>> {
        match self {
            Feature::Texture(f) => f.data.get(index).map(FeatureData::Texture),
            Feature::Sprite(f) => f.data.get(index).map(FeatureData::Sprite),
            Feature::Tint(f) => f.data.get(index).map(FeatureData::Tint),
        }
    }
}

/// Borrowed per-element data of any feature kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureData<'a> {
    Texture(&'a TextureData),
    Sprite(&'a SpriteData),
    Tint(&'a TintData),
}

impl FeatureData<'_> {
    pub fn kind(&self) -> FeatureKind {
        match self {
            FeatureData::Texture(_) => FeatureKind::Texture,
            FeatureData::Sprite(_) => FeatureKind::Sprite,
            FeatureData::Tint(_) => FeatureKind::Tint,
        }
    }

    pub fn element(&self) -> ElementId {
        match self {
            FeatureData::Texture(d) => d.element,
            FeatureData::Sprite(d) => d.element,
            FeatureData::Tint(d) => d.element,
        }
    }

    /// Only texture and sprite data can drive a box graphic's UVs.
    pub fn is_valid_box_source(&self) -> bool {
        matches!(self, FeatureData::Texture(_) | FeatureData::Sprite(_))
    }

    /// The sprite, if this is sprite data with one assigned.
    pub fn sprite(&self) -> Option<&Sprite> {
        match self {
            FeatureData::Sprite(d) => d.sprite.as_ref(),
            _ => None,
        }
    }
}
