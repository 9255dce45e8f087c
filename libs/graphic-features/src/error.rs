//! # Feature Errors
//!
//! Error types for registry lookups and component source assignment.

use crate::feature::FeatureKind;
use crate::registry::{DataRef, ElementId, FeatureId};
use thiserror::Error;

/// Errors that can occur when resolving feature data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    /// Feature id does not exist in this registry
    #[error("Unknown feature: {0:?}")]
    UnknownFeature(FeatureId),

    /// Element id does not exist in this registry
    #[error("Unknown element: {0:?}")]
    UnknownElement(ElementId),

    /// Data reference points past the feature's data array
    #[error("Stale data reference: {0:?}")]
    StaleData(DataRef),

    /// Data was requested as the wrong feature kind
    #[error("Kind mismatch: expected {expected:?}, found {found:?}")]
    KindMismatch {
        expected: FeatureKind,
        found: FeatureKind,
    },

    /// Data cannot drive a box graphic's texture source
    #[error("Invalid box source: {0:?}")]
    InvalidSource(DataRef),

    /// Data belongs to a different element
    #[error("Data {data:?} does not belong to element {element:?}")]
    ForeignData { data: DataRef, element: ElementId },
}

impl FeatureError {
    /// Creates a kind mismatch error.
    pub fn kind_mismatch(expected: FeatureKind, found: FeatureKind) -> Self {
        Self::KindMismatch { expected, found }
    }
}
