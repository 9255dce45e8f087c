//! Tests for the global configuration snapshot.

use super::*;

/// Ensures default constants are sane and positive.
#[test]
fn default_config_is_valid() {
    let cfg = GlobalConfig::default();
    assert_eq!(cfg.max_verts_per_axis, MAX_VERTS_PER_AXIS);
    assert!(cfg.hand_drop_duration > 0.0);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(3, 1.0).unwrap_err(),
        ConfigError::InvalidMaxVerts(3)
    );
    assert_eq!(
        GlobalConfig::new(128, 0.0).unwrap_err(),
        ConfigError::InvalidDuration(0.0)
    );
    assert!(GlobalConfig::new(128, f64::NAN).is_err());
}

/// Limits large enough to overflow `u32` indices are rejected.
#[test]
fn new_rejects_huge_limits() {
    assert_eq!(
        GlobalConfig::new(usize::MAX, 1.0).unwrap_err(),
        ConfigError::MaxVertsTooLarge(usize::MAX)
    );
    assert!(GlobalConfig::new(HARD_MAX_VERTS_PER_AXIS + 1, 1.0).is_err());
    let cfg = GlobalConfig::new(HARD_MAX_VERTS_PER_AXIS, 1.0).unwrap();
    assert_eq!(cfg.max_verts_per_axis, HARD_MAX_VERTS_PER_AXIS);
}

#[test]
fn new_accepts_minimum_nine_slice_grid() {
    let cfg = GlobalConfig::new(NINE_SLICE_BOUNDARY_VERTS, 0.25).unwrap();
    assert_eq!(cfg.max_verts_per_axis, 4);
    assert_eq!(cfg.hand_drop_duration, 0.25);
}

#[test]
fn error_messages_name_the_field() {
    let msg = ConfigError::InvalidMaxVerts(1).to_string();
    assert!(msg.contains("max_verts_per_axis"));
    let msg = ConfigError::MaxVertsTooLarge(usize::MAX).to_string();
    assert!(msg.contains("max_verts_per_axis"));
    let msg = ConfigError::InvalidDuration(-1.0).to_string();
    assert!(msg.contains("hand_drop_duration"));
}
