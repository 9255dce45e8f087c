//! # Box Graphic Component
//!
//! Component state for a box graphic and the glue that turns it, together
//! with the element's texture or sprite source, into a [`BoxSpec`].
//!
//! The host decides when to call [`BoxGraphic::on_validate`],
//! [`BoxGraphic::reset`] and [`BoxGraphic::refresh_mesh_data`]; nothing here
//! tracks scene lifecycle.

use crate::error::FeatureError;
use crate::feature::FeatureData;
use crate::registry::{DataRef, ElementId, FeatureRegistry};
use box_mesh::{build, BoxMesh, BoxSpec, Rect, Resolution, UvChannel};
use config::constants::{DEFAULT_BOX_SIZE, DEFAULT_VERTS_PER_UNIT};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Whether the panel has a fixed vertex count or scales with its size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionType {
    Vertices,
    #[default]
    VerticesPerUnit,
}

/// Serializable state of one box graphic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxGraphic {
    element: ElementId,
    /// Index into the element's data refs; `None` until a source is assigned
    source_data_index: Option<usize>,
    resolution_type: ResolutionType,
    resolution_verts: [i32; 2],
    resolution_verts_per_unit: DVec2,
    size: DVec3,
    nine_sliced: bool,
}

impl BoxGraphic {
    pub fn new(element: ElementId) -> Self {
        Self {
            element,
            source_data_index: None,
            resolution_type: ResolutionType::default(),
            resolution_verts: [0, 0],
            resolution_verts_per_unit: DVec2::from_array(DEFAULT_VERTS_PER_UNIT),
            size: DVec3::from_array(DEFAULT_BOX_SIZE),
            nine_sliced: false,
        }
    }

    #[inline]
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Dimensions in local space.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.size
    }

    /// Negative components are clamped to zero.
    pub fn set_size(&mut self, size: DVec3) {
        self.size = size.max(DVec3::ZERO);
    }

    #[inline]
    pub fn resolution_type(&self) -> ResolutionType {
        self.resolution_type
    }

    pub fn set_resolution_type(&mut self, resolution_type: ResolutionType) {
        self.resolution_type = resolution_type;
    }

    #[inline]
    pub fn resolution_verts(&self) -> [i32; 2] {
        self.resolution_verts
    }

    pub fn set_resolution_verts(&mut self, verts: [i32; 2]) {
        self.resolution_verts = verts;
    }

    #[inline]
    pub fn resolution_verts_per_unit(&self) -> DVec2 {
        self.resolution_verts_per_unit
    }

    pub fn set_resolution_verts_per_unit(&mut self, density: DVec2) {
        self.resolution_verts_per_unit = density;
    }

    /// The resolution handed to the builder.
    pub fn resolution(&self) -> Resolution {
        match self.resolution_type {
            ResolutionType::Vertices => Resolution::Vertices {
                x: self.resolution_verts[0],
                y: self.resolution_verts[1],
            },
            ResolutionType::VerticesPerUnit => Resolution::VerticesPerUnit {
                x: self.resolution_verts_per_unit.x,
                y: self.resolution_verts_per_unit.y,
            },
        }
    }

    /// Local-space rect. A layout rect from the host wins and its normalized
    /// size is copied into `size.xy`; otherwise `size.xy` centered on the
    /// origin.
    pub fn rect(&mut self, layout: Option<Rect>) -> Rect {
        match layout.map(|rect| rect.normalized()) {
            Some(rect) => {
                self.size = DVec3::new(rect.width(), rect.height(), self.size.z);
                rect
            }
            None => Rect::centered(self.size.truncate()),
        }
    }

    /// The currently referenced source data, falling back to the first
    /// valid source when none has been assigned.
    pub fn source_data(&self, registry: &FeatureRegistry) -> Option<DataRef> {
        let refs = registry.element_data(self.element).ok()?;
        match self.source_data_index {
            Some(index) => refs.get(index).copied(),
            None => default_source_index(registry, refs).map(|i| refs[i]),
        }
    }

    /// Points the graphic at `data`, which must be a texture or sprite data
    /// object of this graphic's element.
    pub fn set_source_data(
        &mut self,
        registry: &mut FeatureRegistry,
        data: DataRef,
    ) -> Result<(), FeatureError> {
        let view = registry.data(data)?;
        if !view.is_valid_box_source() {
            return Err(FeatureError::InvalidSource(data));
        }
        if view.element() != self.element {
            return Err(FeatureError::ForeignData {
                data,
                element: self.element,
            });
        }

        let index = registry
            .element_data(self.element)?
            .iter()
            .position(|r| *r == data)
            .ok_or(FeatureError::ForeignData {
                data,
                element: self.element,
            })?;
        self.source_data_index = Some(index);
        tracing::debug!("[box_graphic] Source data set to {:?}", data);
        self.set_source_feature_dirty(registry);
        Ok(())
    }

    /// Picks the first texture or sprite data of the element, if any.
    pub fn assign_default_source(&mut self, registry: &FeatureRegistry) {
        self.source_data_index = registry
            .element_data(self.element)
            .ok()
            .and_then(|refs| default_source_index(registry, refs));
    }

    /// True only for sprite data that has a sprite assigned.
    pub fn can_nine_slice(&self, registry: &FeatureRegistry) -> bool {
        self.source_view(registry)
            .is_some_and(|view| view.sprite().is_some())
    }

    /// Nine-slicing as requested and supported by the source.
    pub fn nine_sliced(&self, registry: &FeatureRegistry) -> bool {
        self.nine_sliced && self.can_nine_slice(registry)
    }

    pub fn set_nine_sliced(&mut self, registry: &mut FeatureRegistry, value: bool) {
        self.nine_sliced = value;
        self.set_source_feature_dirty(registry);
    }

    /// UV channel of the source's feature; `Uv0` without a textured source.
    pub fn uv_channel(&self, registry: &FeatureRegistry) -> UvChannel {
        self.source_data(registry)
            .and_then(|data| registry.feature(data.feature).ok())
            .and_then(|feature| feature.channel())
            .unwrap_or_default()
    }

    /// Restores the default source and marks it dirty.
    pub fn reset(&mut self, registry: &mut FeatureRegistry) {
        self.assign_default_source(registry);
        self.set_source_feature_dirty(registry);
    }

    /// Clamps edited values and keeps the two resolution representations in
    /// sync with the current rect.
    pub fn on_validate(&mut self, registry: &mut FeatureRegistry, layout: Option<Rect>) {
        if self.source_data(registry).is_none() {
            self.assign_default_source(registry);
        }

        self.resolution_verts = self.resolution_verts.map(|v| v.max(0));
        self.resolution_verts_per_unit = self.resolution_verts_per_unit.max(DVec2::ZERO);

        let rect = self.rect(layout);
        match self.resolution_type {
            ResolutionType::Vertices => {
                self.resolution_verts_per_unit = DVec2::new(
                    density_for(self.resolution_verts[0], rect.width()),
                    density_for(self.resolution_verts[1], rect.height()),
                );
            }
            ResolutionType::VerticesPerUnit => {
                self.resolution_verts = [
                    count_for(self.resolution_verts_per_unit.x, rect.width()),
                    count_for(self.resolution_verts_per_unit.y, rect.height()),
                ];
            }
        }

        self.set_source_feature_dirty(registry);
    }

    /// Assembles the builder input from component state and the source.
    ///
    /// The nine-slice border is only available from sprite data with a
    /// usable sprite; otherwise the builder falls back to a plain box.
    pub fn to_box_spec(&mut self, registry: &FeatureRegistry, layout: Option<Rect>) -> BoxSpec {
        self.rect(layout);
        let border = if self.nine_sliced {
            self.source_view(registry)
                .and_then(|view| view.sprite().copied())
                .and_then(|sprite| sprite.nine_slice_border())
        } else {
            None
        };

        BoxSpec {
            size: self.size,
            layout_rect: layout,
            resolution: self.resolution(),
            nine_sliced: self.nine_sliced,
            border,
            uv_channel: self.uv_channel(registry),
        }
    }

    /// Rebuilds the mesh from scratch.
    pub fn refresh_mesh_data(&mut self, registry: &FeatureRegistry, layout: Option<Rect>) -> BoxMesh {
        if self.source_data_index.is_none() {
            self.assign_default_source(registry);
        }
        let spec = self.to_box_spec(registry, layout);
        tracing::trace!("[box_graphic] Refreshing mesh for {:?}", self.element);
        build(&spec)
    }

    /// Center and extent of the selection wire cube, which spans from the
    /// back face at z = 0 to the front face at z = -depth.
    pub fn gizmo_bounds(&self) -> (DVec3, DVec3) {
        (DVec3::new(0.0, 0.0, -self.size.z / 2.0), self.size)
    }

    fn source_view<'a>(&self, registry: &'a FeatureRegistry) -> Option<FeatureData<'a>> {
        self.source_data(registry)
            .and_then(|data| registry.data(data).ok())
    }

    fn set_source_feature_dirty(&self, registry: &mut FeatureRegistry) {
        if let Some(data) = self.source_data(registry) {
            registry.mark_dirty(data.feature);
        }
    }
}

fn default_source_index(registry: &FeatureRegistry, refs: &[DataRef]) -> Option<usize> {
    refs.iter().position(|r| {
        registry
            .data(*r)
            .is_ok_and(|view| view.is_valid_box_source())
    })
}

/// Vertices per unit implied by an explicit count; zero for an empty extent.
fn density_for(count: i32, extent: f64) -> f64 {
    if extent > 0.0 {
        count as f64 / extent
    } else {
        0.0
    }
}

/// Explicit count implied by a density, rounded half to even.
fn count_for(density: f64, extent: f64) -> i32 {
    let product = (density * extent).round_ties_even();
    if product > 0.0 {
        product.min(i32::MAX as f64) as i32
    } else {
        0
    }
}
