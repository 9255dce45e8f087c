//! # Feature Registry
//!
//! Arena of features and elements. Every element holds one [`DataRef`] per
//! feature, pointing into that feature's typed data array.

use crate::error::FeatureError;
use crate::feature::{Feature, FeatureData, FeatureKind, SpriteData, TextureData, TintData};
use crate::names::FeatureNames;
use serde::{Deserialize, Serialize};

/// Index of a feature in its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FeatureId(pub usize);

/// Index of an element in its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub usize);

/// Location of one data object: a feature and an index into its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataRef {
    pub feature: FeatureId,
    pub index: usize,
}

#[derive(Debug, Clone)]
struct FeatureSlot {
    feature: Feature,
    dirty: bool,
}

/// Owns all features and the element to data mapping.
#[derive(Debug, Clone, Default)]
pub struct FeatureRegistry {
    features: Vec<FeatureSlot>,
    elements: Vec<Vec<DataRef>>,
    names: FeatureNames,
}

impl FeatureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a feature. Existing elements get a data object in it.
    pub fn add_feature(&mut self, mut feature: Feature) -> FeatureId {
        let id = FeatureId(self.features.len());
        for (element, refs) in self.elements.iter_mut().enumerate() {
            let index = feature.create_data_object(ElementId(element));
            refs.push(DataRef { feature: id, index });
        }
        self.features.push(FeatureSlot {
            feature,
            dirty: true,
        });
        id
    }

    /// Adds an element with one data object per feature, in feature order.
    pub fn add_element(&mut self) -> ElementId {
        let id = ElementId(self.elements.len());
        let refs = self
            .features
            .iter_mut()
            .enumerate()
            .map(|(i, slot)| {
                slot.dirty = true;
                DataRef {
                    feature: FeatureId(i),
                    index: slot.feature.create_data_object(id),
                }
            })
            .collect();
        self.elements.push(refs);
        id
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn feature(&self, id: FeatureId) -> Result<&Feature, FeatureError> {
        self.features
            .get(id.0)
            .map(|slot| &slot.feature)
            .ok_or(FeatureError::UnknownFeature(id))
    }

    fn feature_mut(&mut self, id: FeatureId) -> Result<&mut Feature, FeatureError> {
        self.features
            .get_mut(id.0)
            .map(|slot| &mut slot.feature)
            .ok_or(FeatureError::UnknownFeature(id))
    }

    /// The element's data references, one per feature.
    pub fn element_data(&self, element: ElementId) -> Result<&[DataRef], FeatureError> {
        self.elements
            .get(element.0)
            .map(Vec::as_slice)
            .ok_or(FeatureError::UnknownElement(element))
    }

    pub fn data(&self, data: DataRef) -> Result<FeatureData<'_>, FeatureError> {
        self.feature(data.feature)?
            .data(data.index)
            .ok_or(FeatureError::StaleData(data))
    }

    pub fn texture_data_mut(&mut self, data: DataRef) -> Result<&mut TextureData, FeatureError> {
        match self.feature_mut(data.feature)? {
            Feature::Texture(f) => f.data.get_mut(data.index).ok_or(FeatureError::StaleData(data)),
            other => Err(FeatureError::kind_mismatch(FeatureKind::Texture, other.kind())),
        }
    }

    pub fn sprite_data_mut(&mut self, data: DataRef) -> Result<&mut SpriteData, FeatureError> {
        match self.feature_mut(data.feature)? {
            Feature::Sprite(f) => f.data.get_mut(data.index).ok_or(FeatureError::StaleData(data)),
            other => Err(FeatureError::kind_mismatch(FeatureKind::Sprite, other.kind())),
        }
    }

    pub fn tint_data_mut(&mut self, data: DataRef) -> Result<&mut TintData, FeatureError> {
        match self.feature_mut(data.feature)? {
            Feature::Tint(f) => f.data.get_mut(data.index).ok_or(FeatureError::StaleData(data)),
            other => Err(FeatureError::kind_mismatch(FeatureKind::Tint, other.kind())),
        }
    }

    /// Drops every data object of a feature and every element reference to it.
    pub fn clear_data_object_references(&mut self, id: FeatureId) -> Result<(), FeatureError> {
        self.feature_mut(id)?.clear_data_object_references();
        tracing::debug!("[feature_registry] Cleared data objects of {:?}", id);
        for refs in &mut self.elements {
            refs.retain(|r| r.feature != id);
        }
        self.mark_dirty(id);
        Ok(())
    }

    /// Flags a feature for re-upload by the host. Unknown ids are ignored.
    pub fn mark_dirty(&mut self, id: FeatureId) {
        if let Some(slot) = self.features.get_mut(id.0) {
            slot.dirty = true;
        }
    }

    pub fn is_dirty(&self, id: FeatureId) -> bool {
        self.features.get(id.0).is_some_and(|slot| slot.dirty)
    }

    /// Returns and clears every dirty flag.
    pub fn take_dirty(&mut self) -> Vec<FeatureId> {
        self.features
            .iter_mut()
            .enumerate()
            .filter(|(_, slot)| slot.dirty)
            .map(|(i, slot)| {
                slot.dirty = false;
                FeatureId(i)
            })
            .collect()
    }

    pub fn names(&self) -> &FeatureNames {
        &self.names
    }

    pub fn names_mut(&mut self) -> &mut FeatureNames {
        &mut self.names
    }

    pub fn feature_name(&self, id: FeatureId) -> Result<&str, FeatureError> {
        let kind = self.feature(id)?.kind();
        Ok(self.names.name(kind))
    }
}
