//! Display names for feature kinds.
//!
//! Each kind has a built-in name; a registry may register overrides.

use crate::feature::FeatureKind;
use std::collections::HashMap;

impl FeatureKind {
    /// Built-in display name.
    pub fn default_name(self) -> &'static str {
        match self {
            FeatureKind::Texture => "Texture",
            FeatureKind::Sprite => "Sprite",
            FeatureKind::Tint => "Tint",
        }
    }
}

/// Display name table with explicit overrides.
#[derive(Debug, Clone, Default)]
pub struct FeatureNames {
    overrides: HashMap<FeatureKind, String>,
}

impl FeatureNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a display name for `kind`, replacing any earlier override.
    pub fn register(&mut self, kind: FeatureKind, name: impl Into<String>) {
        self.overrides.insert(kind, name.into());
    }

    pub fn name(&self, kind: FeatureKind) -> &str {
        self.overrides
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_name())
    }
}
