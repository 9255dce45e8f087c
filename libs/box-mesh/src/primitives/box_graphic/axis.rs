//! # Axis Positions
//!
//! Maps a vertex index to a coordinate along one axis. The same function
//! serves spatial coordinates (borders in local units) and UVs (unit axis,
//! borders as UV fractions).

/// Position of vertex `vertex_index` of `vertex_count` along an axis of
/// `axis_length`.
///
/// Plain axes interpolate linearly. Nine-sliced axes pin index 1 to
/// `border0` and index `vertex_count - 2` to `axis_length - border1`, and
/// stretch every index in between across the interior.
///
/// Index 0 always maps to 0 and the last index to `axis_length`. Borders are
/// clamped to be non-negative and scaled down together when they overlap, so
/// the result is non-decreasing in `vertex_index`. A nine-sliced axis with
/// fewer than 4 vertices falls back to linear spacing.
///
/// ```rust
/// use box_mesh::primitives::box_graphic::position_along_axis;
///
/// assert_eq!(position_along_axis(1, 5, 10.0, 1.0, 2.0, true), 1.0);
/// assert_eq!(position_along_axis(2, 5, 10.0, 1.0, 2.0, true), 4.5);
/// assert_eq!(position_along_axis(3, 5, 10.0, 1.0, 2.0, true), 8.0);
/// assert_eq!(position_along_axis(2, 5, 10.0, 1.0, 2.0, false), 5.0);
/// ```
pub fn position_along_axis(
    vertex_index: usize,
    vertex_count: usize,
    axis_length: f64,
    border0: f64,
    border1: f64,
    nine_sliced: bool,
) -> f64 {
    if vertex_count < 2 || vertex_index == 0 {
        return 0.0;
    }
    if vertex_index >= vertex_count - 1 {
        return axis_length;
    }

    if !nine_sliced || vertex_count < 4 {
        return (vertex_index as f64 / (vertex_count as f64 - 1.0)) * axis_length;
    }

    let (border0, border1) = fit_borders(axis_length, border0, border1);
    if vertex_index == 1 {
        border0
    } else if vertex_index == vertex_count - 2 {
        axis_length - border1
    } else {
        ((vertex_index as f64 - 1.0) / (vertex_count as f64 - 3.0))
            * (axis_length - border0 - border1)
            + border0
    }
}

/// Clamps borders to `>= 0` and, if together they exceed the axis, scales
/// both so they meet exactly.
fn fit_borders(axis_length: f64, border0: f64, border1: f64) -> (f64, f64) {
    let border0 = border0.max(0.0);
    let border1 = border1.max(0.0);
    let total = border0 + border1;
    if total > axis_length && total > 0.0 {
        let scale = axis_length.max(0.0) / total;
        (border0 * scale, border1 * scale)
    } else {
        (border0, border1)
    }
}
