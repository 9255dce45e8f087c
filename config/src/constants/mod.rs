//! # Configuration Constants
//!
//! Centralized constants for the box graphic pipeline. Every public item
//! documents its purpose and carries a minimal usage example so downstream
//! crates stay declarative and avoid scattering literals.
//!
//! ## Categories
//!
//! - **Grid**: Vertex resolution limits and boundary padding
//! - **Defaults**: Initial component state for new box graphics
//! - **Transitions**: Hand transition timing

use std::fmt;

// =============================================================================
// GRID CONSTANTS
// =============================================================================

/// Maximum number of vertices along one axis of a box face.
///
/// Bounds each face to a 128x128 grid so extreme density inputs cannot
/// produce runaway vertex counts.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTS_PER_AXIS;
///
/// let requested = 10_000usize;
/// assert_eq!(requested.min(MAX_VERTS_PER_AXIS), 128);
/// ```
pub const MAX_VERTS_PER_AXIS: usize = 128;

/// Largest per-axis clamp a configuration may set.
///
/// A box holds `2 * n * n + 8 * n` vertices for an `n x n` grid; at this
/// limit that stays below `u32::MAX`, so every index fits the `u32` index
/// buffer.
///
/// # Example
///
/// ```rust
/// use config::constants::HARD_MAX_VERTS_PER_AXIS;
///
/// let n = HARD_MAX_VERTS_PER_AXIS as u64;
/// assert!(2 * n * n + 8 * n <= u32::MAX as u64);
/// ```
pub const HARD_MAX_VERTS_PER_AXIS: usize = 32_768;

/// Boundary vertices added along each axis of a plain (not nine-sliced) grid.
///
/// The two corner rows guarantee at least a 2x2 grid.
pub const BOUNDARY_VERTS: usize = 2;

/// Boundary vertices added along each axis of a nine-sliced grid.
///
/// Two corner rows plus two border-adjacent rows, so the border band always
/// has a vertex to pin against.
///
/// # Example
///
/// ```rust
/// use config::constants::{BOUNDARY_VERTS, NINE_SLICE_BOUNDARY_VERTS};
/// assert_eq!(NINE_SLICE_BOUNDARY_VERTS, BOUNDARY_VERTS + 2);
/// ```
pub const NINE_SLICE_BOUNDARY_VERTS: usize = 4;

/// Returns the boundary padding for an axis.
///
/// # Example
///
/// ```rust
/// use config::constants::boundary_verts;
/// assert_eq!(boundary_verts(false), 2);
/// assert_eq!(boundary_verts(true), 4);
/// ```
#[inline]
pub const fn boundary_verts(nine_sliced: bool) -> usize {
    if nine_sliced {
        NINE_SLICE_BOUNDARY_VERTS
    } else {
        BOUNDARY_VERTS
    }
}

// =============================================================================
// DEFAULT COMPONENT STATE
// =============================================================================

/// Default box dimensions in local units: width, height, depth.
pub const DEFAULT_BOX_SIZE: [f64; 3] = [0.1, 0.1, 0.01];

/// Default vertex density (vertices per local unit) along x and y.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_BOX_SIZE, DEFAULT_VERTS_PER_UNIT};
///
/// // A default box requests two interior vertices per axis
/// let verts_x = (DEFAULT_BOX_SIZE[0] * DEFAULT_VERTS_PER_UNIT[0]).round();
/// assert_eq!(verts_x, 2.0);
/// ```
pub const DEFAULT_VERTS_PER_UNIT: [f64; 2] = [20.0, 20.0];

// =============================================================================
// TRANSITION CONSTANTS
// =============================================================================

/// Seconds a dropped hand takes to lerp back to its starting palm pose.
///
/// # Example
///
/// ```rust
/// use config::constants::HAND_DROP_DURATION_SECS;
/// assert!(HAND_DROP_DURATION_SECS > 0.0);
/// ```
pub const HAND_DROP_DURATION_SECS: f64 = 1.0;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert_eq!(config.max_verts_per_axis, 128);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Per-axis vertex clamp applied after boundary padding.
    pub max_verts_per_axis: usize,
    /// Duration of the hand drop transition in seconds.
    pub hand_drop_duration: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// values.
    ///
    /// The clamp must leave room for a nine-sliced grid, so anything below
    /// [`NINE_SLICE_BOUNDARY_VERTS`] is rejected, and must keep indices within
    /// `u32`, so anything above [`HARD_MAX_VERTS_PER_AXIS`] is rejected.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(64, 0.5).expect("valid config");
    /// assert_eq!(cfg.max_verts_per_axis, 64);
    /// assert!(GlobalConfig::new(3, 0.5).is_err());
    /// assert!(GlobalConfig::new(usize::MAX, 0.5).is_err());
    /// ```
    pub fn new(max_verts_per_axis: usize, hand_drop_duration: f64) -> Result<Self, ConfigError> {
        if max_verts_per_axis < NINE_SLICE_BOUNDARY_VERTS {
            return Err(ConfigError::InvalidMaxVerts(max_verts_per_axis));
        }
        if max_verts_per_axis > HARD_MAX_VERTS_PER_AXIS {
            return Err(ConfigError::MaxVertsTooLarge(max_verts_per_axis));
        }
        // Also rejects NaN.
        if !(hand_drop_duration > 0.0) {
            return Err(ConfigError::InvalidDuration(hand_drop_duration));
        }
        Ok(Self {
            max_verts_per_axis,
            hand_drop_duration,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            max_verts_per_axis: MAX_VERTS_PER_AXIS,
            hand_drop_duration: HAND_DROP_DURATION_SECS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the per-axis clamp cannot hold a nine-sliced grid.
    InvalidMaxVerts(usize),
    /// Raised when the per-axis clamp would overflow `u32` vertex indices.
    MaxVertsTooLarge(usize),
    /// Raised when the transition duration is zero, negative or NaN.
    InvalidDuration(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMaxVerts(value) => {
                write!(
                    f,
                    "max_verts_per_axis must be >= {NINE_SLICE_BOUNDARY_VERTS}: {value}"
                )
            }
            ConfigError::MaxVertsTooLarge(value) => {
                write!(
                    f,
                    "max_verts_per_axis must be <= {HARD_MAX_VERTS_PER_AXIS}: {value}"
                )
            }
            ConfigError::InvalidDuration(value) => {
                write!(f, "hand_drop_duration must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
