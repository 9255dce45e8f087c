//! # Box Graphic Tests
//!
//! End-to-end checks of the assembled box mesh.

use super::*;
use crate::params::{Border, NineSliceBorder, Rect, Resolution, UvChannel};
use approx::assert_relative_eq;
use glam::{DVec2, DVec3};

fn unit_box(resolution: Resolution) -> BoxSpec {
    BoxSpec {
        size: DVec3::new(1.0, 1.0, 0.1),
        resolution,
        ..Default::default()
    }
}

fn nine_sliced_box(resolution: Resolution) -> BoxSpec {
    BoxSpec {
        nine_sliced: true,
        border: Some(NineSliceBorder {
            size: Border::new(0.1, 0.1, 0.1, 0.1),
            uv: Border::new(0.25, 0.25, 0.25, 0.25),
        }),
        ..unit_box(resolution)
    }
}

fn assert_outward_winding(result: &BoxMesh) {
    let mesh = result.mesh();
    for section in result.sections() {
        let outward = section.side.normal();
        for tri in section.triangles.clone() {
            let geometric = mesh.face_normal(tri);
            assert!(
                geometric.dot(outward) > 0.0,
                "{:?} triangle {} faces {:?}",
                section.side,
                tri,
                geometric
            );
        }
    }
}

// =============================================================================
// COUNTS
// =============================================================================

#[test]
fn test_minimum_box_counts() {
    let result = build(&unit_box(Resolution::Vertices { x: 0, y: 0 }));
    assert_eq!(result.grid(), GridResolution::new(2, 2));
    // back 4 + front 4 + four skirts of 2 rows x 2 vertices
    assert_eq!(result.mesh().vertex_count(), 24);
    // 2 + 2 faces, one quad per skirt
    assert_eq!(result.mesh().triangle_count(), 12);
}

#[test]
fn test_triangle_count_formula() {
    for (x, y) in [(0, 0), (1, 0), (3, 5), (10, 2), (126, 126), (500, 7)] {
        let result = build(&unit_box(Resolution::Vertices { x, y }));
        let grid = result.grid();
        let (cx, cy) = (grid.verts_x - 1, grid.verts_y - 1);
        let expected = 2 * (cx * cy) * 2 + 2 * cx * 2 + 2 * cy * 2;
        assert_eq!(result.mesh().triangle_count(), expected, "({x}, {y})");
        assert_eq!(result.mesh().vertex_count(), grid.box_vertex_count());
    }
}

#[test]
fn test_default_spec_uses_density() {
    // 0.1 * 20 = 2 interior vertices per axis
    let result = build(&BoxSpec::default());
    assert_eq!(result.grid(), GridResolution::new(4, 4));
}

// =============================================================================
// BUFFER INVARIANTS
// =============================================================================

#[test]
fn test_buffers_valid_for_degenerate_specs() {
    let specs = [
        BoxSpec {
            size: DVec3::ZERO,
            resolution: Resolution::Vertices { x: 0, y: 0 },
            ..Default::default()
        },
        BoxSpec {
            size: DVec3::ZERO,
            ..Default::default()
        },
        BoxSpec {
            size: DVec3::new(-1.0, -1.0, -1.0),
            resolution: Resolution::Vertices { x: -7, y: -7 },
            ..Default::default()
        },
        nine_sliced_box(Resolution::VerticesPerUnit { x: f64::NAN, y: -1.0 }),
        nine_sliced_box(Resolution::VerticesPerUnit { x: 1.0e9, y: 1.0e9 }),
    ];

    for spec in &specs {
        let result = build(spec);
        let mesh = result.mesh();
        assert_eq!(mesh.vertices().len(), mesh.normals().len());
        assert_eq!(mesh.vertices().len(), mesh.uvs().len());
        assert_eq!(mesh.validate(), Ok(()));
        assert!(result.grid().verts_x >= 2 && result.grid().verts_x <= 128);
        assert!(result.grid().verts_y >= 2 && result.grid().verts_y <= 128);
    }
}

#[test]
fn test_zero_size_collapses_to_origin() {
    let result = build(&BoxSpec {
        size: DVec3::ZERO,
        resolution: Resolution::Vertices { x: 0, y: 0 },
        ..Default::default()
    });
    assert!(result.mesh().vertices().iter().all(|v| *v == DVec3::ZERO));
    assert_eq!(result.mesh().bounding_box(), (DVec3::ZERO, DVec3::ZERO));
}

#[test]
fn test_deterministic() {
    let spec = nine_sliced_box(Resolution::Vertices { x: 5, y: 3 });
    let first = build(&spec);
    let second = build(&spec);
    assert_eq!(first, second);

    let bits = |m: &Mesh| m.vertices_f32().iter().map(|f| f.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(first.mesh()), bits(second.mesh()));
    assert_eq!(first.mesh().indices_u32(), second.mesh().indices_u32());
}

// =============================================================================
// LAYOUT
// =============================================================================

#[test]
fn test_sections_in_emission_order() {
    let result = build(&unit_box(Resolution::Vertices { x: 1, y: 2 }));
    let grid = result.grid();
    let (w, h) = (grid.verts_x, grid.verts_y);
    let face = w * h;

    let sides: Vec<_> = result.sections().iter().map(|s| s.side).collect();
    assert_eq!(sides, BoxSide::EMISSION_ORDER.to_vec());

    assert_eq!(result.back_verts_count(), face);
    let expected = [
        0..face,
        face..2 * face,
        2 * face..2 * face + 2 * h,
        2 * face + 2 * h..2 * face + 4 * h,
        2 * face + 4 * h..2 * face + 4 * h + 2 * w,
        2 * face + 4 * h + 2 * w..2 * face + 4 * h + 4 * w,
    ];
    for (section, range) in result.sections().iter().zip(expected) {
        assert_eq!(section.vertices, range, "{:?}", section.side);
    }
    assert_eq!(
        result.section(BoxSide::Bottom).map(|s| s.triangles.end),
        Some(result.mesh().triangle_count())
    );
}

#[test]
fn test_face_depths_and_normals() {
    let result = build(&unit_box(Resolution::Vertices { x: 2, y: 2 }));
    let mesh = result.mesh();
    for section in result.sections() {
        for i in section.vertices.clone() {
            assert_eq!(mesh.normals()[i], section.side.normal());
        }
    }

    let back = result.section(BoxSide::Back).map(|s| s.vertices.clone()).unwrap_or_default();
    let front = result.section(BoxSide::Front).map(|s| s.vertices.clone()).unwrap_or_default();
    assert!(mesh.vertices()[back].iter().all(|v| v.z == 0.0));
    assert!(mesh.vertices()[front].iter().all(|v| v.z == -0.1));
}

#[test]
fn test_bounding_box_centered() {
    let result = build(&unit_box(Resolution::Vertices { x: 3, y: 3 }));
    let (min, max) = result.mesh().bounding_box();
    assert_eq!(min, DVec3::new(-0.5, -0.5, -0.1));
    assert_eq!(max, DVec3::new(0.5, 0.5, 0.0));
}

#[test]
fn test_layout_rect_overrides_size() {
    let spec = BoxSpec {
        size: DVec3::new(1.0, 1.0, 0.5),
        layout_rect: Some(Rect::new(DVec2::new(1.0, 2.0), DVec2::new(4.0, 2.0))),
        resolution: Resolution::Vertices { x: 0, y: 0 },
        ..Default::default()
    };
    let (min, max) = build(&spec).mesh().bounding_box();
    assert_eq!(min, DVec3::new(1.0, 2.0, -0.5));
    assert_eq!(max, DVec3::new(5.0, 4.0, 0.0));
}

#[test]
fn test_negative_layout_rect_faces_outward() {
    let spec = BoxSpec {
        size: DVec3::new(1.0, 1.0, 0.1),
        layout_rect: Some(Rect::new(DVec2::ZERO, DVec2::new(-1.0, 1.0))),
        resolution: Resolution::Vertices { x: 0, y: 0 },
        ..Default::default()
    };
    let result = build(&spec);
    assert_outward_winding(&result);
    let (min, max) = result.mesh().bounding_box();
    assert_eq!(min, DVec3::new(-1.0, 0.0, -0.1));
    assert_eq!(max, DVec3::new(0.0, 1.0, 0.0));
}

#[test]
fn test_layout_rect_drives_density() {
    let spec = BoxSpec {
        layout_rect: Some(Rect::centered(DVec2::new(1.0, 0.5))),
        resolution: Resolution::VerticesPerUnit { x: 4.0, y: 4.0 },
        ..Default::default()
    };
    assert_eq!(build(&spec).grid(), GridResolution::new(6, 4));
}

#[test]
fn test_skirts_duplicate_face_boundaries() {
    let result = build(&nine_sliced_box(Resolution::Vertices { x: 3, y: 2 }));
    let mesh = result.mesh();
    let grid = result.grid();
    let (w, h) = (grid.verts_x, grid.verts_y);
    let front = result.back_verts_count();
    let face_vertex = |base: usize, vx: usize, vy: usize| mesh.vertices()[base + vy * w + vx];
    let face_uv = |vx: usize, vy: usize| mesh.uvs()[vy * w + vx];

    let boundary = |side: BoxSide, i: usize| match side {
        BoxSide::Left => (0, i),
        BoxSide::Right => (w - 1, i),
        BoxSide::Top => (i, h - 1),
        _ => (i, 0),
    };

    for side in [BoxSide::Left, BoxSide::Right, BoxSide::Top, BoxSide::Bottom] {
        let section = result.section(side).cloned().unwrap_or_else(|| panic!("{side:?}"));
        let len = section.vertices.len() / 2;
        for i in 0..len {
            let (vx, vy) = boundary(side, i);
            let back_row = section.vertices.start + i;
            let front_row = section.vertices.start + len + i;
            assert_eq!(mesh.vertices()[back_row], face_vertex(0, vx, vy), "{side:?} {i}");
            assert_eq!(mesh.vertices()[front_row], face_vertex(front, vx, vy), "{side:?} {i}");
            assert_eq!(mesh.uvs()[back_row], face_uv(vx, vy));
        }
    }
}

// =============================================================================
// WINDING
// =============================================================================

#[test]
fn test_winding_faces_outward() {
    assert_outward_winding(&build(&unit_box(Resolution::Vertices { x: 0, y: 0 })));
    assert_outward_winding(&build(&unit_box(Resolution::Vertices { x: 4, y: 7 })));
    assert_outward_winding(&build(&nine_sliced_box(Resolution::Vertices { x: 3, y: 1 })));
}

#[test]
fn test_minimum_box_triangles() {
    let result = build(&unit_box(Resolution::Vertices { x: 0, y: 0 }));
    let tris = result.mesh().triangles();
    // back
    assert_eq!(tris[0], [0, 1, 3]);
    assert_eq!(tris[1], [0, 3, 2]);
    // front, mirrored
    assert_eq!(tris[2], [4, 7, 5]);
    assert_eq!(tris[3], [4, 6, 7]);
    // left: back row 8..10, front row 10..12
    assert_eq!(tris[4], [10, 8, 9]);
    assert_eq!(tris[5], [10, 9, 11]);
    // right: back row 12..14, front row 14..16, mirrored
    assert_eq!(tris[6], [15, 13, 12]);
    assert_eq!(tris[7], [15, 12, 14]);
}

// =============================================================================
// NINE-SLICING
// =============================================================================

#[test]
fn test_nine_slice_minimum_grid() {
    let result = build(&nine_sliced_box(Resolution::Vertices { x: 0, y: 0 }));
    assert!(result.nine_sliced());
    assert_eq!(result.grid(), GridResolution::new(4, 4));

    let mesh = result.mesh();
    let xs: Vec<f64> = (0..4).map(|vx| mesh.vertices()[vx].x).collect();
    assert_relative_eq!(xs[0], -0.5);
    assert_relative_eq!(xs[1], -0.4);
    assert_relative_eq!(xs[2], 0.4);
    assert_relative_eq!(xs[3], 0.5);

    let us: Vec<f64> = (0..4).map(|vx| mesh.uvs()[vx].x).collect();
    assert_eq!(us, vec![0.0, 0.25, 0.75, 1.0]);
}

#[test]
fn test_nine_slice_corners_exact() {
    let result = build(&nine_sliced_box(Resolution::Vertices { x: 6, y: 9 }));
    let mesh = result.mesh();
    let grid = result.grid();
    let (w, h) = (grid.verts_x, grid.verts_y);
    assert_eq!(mesh.vertices()[0], DVec3::new(-0.5, -0.5, 0.0));
    assert_eq!(mesh.vertices()[w - 1], DVec3::new(0.5, -0.5, 0.0));
    assert_eq!(mesh.vertices()[(h - 1) * w], DVec3::new(-0.5, 0.5, 0.0));
    assert_eq!(mesh.vertices()[h * w - 1], DVec3::new(0.5, 0.5, 0.0));
    assert_eq!(mesh.uvs()[h * w - 1], DVec2::ONE);
}

#[test]
fn test_nine_slice_without_border_falls_back() {
    let spec = BoxSpec {
        nine_sliced: true,
        border: None,
        ..unit_box(Resolution::Vertices { x: 0, y: 0 })
    };
    let result = build(&spec);
    assert!(!result.nine_sliced());
    assert_eq!(result.grid(), GridResolution::new(2, 2));
    assert_eq!(result.mesh().vertex_count(), 24);
}

#[test]
fn test_border_ignored_when_not_requested() {
    let mut spec = nine_sliced_box(Resolution::Vertices { x: 2, y: 2 });
    spec.nine_sliced = false;
    let result = build(&spec);
    assert!(!result.nine_sliced());
    let xs: Vec<f64> = (0..4).map(|vx| result.mesh().vertices()[vx].x).collect();
    assert_relative_eq!(xs[1], -0.5 + 1.0 / 3.0);
    assert_relative_eq!(xs[2], -0.5 + 2.0 / 3.0);
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn test_custom_vertex_limit() {
    let config = GlobalConfig::new(8, 1.0).unwrap();
    let result = build_with_config(&unit_box(Resolution::Vertices { x: 100, y: 1 }), &config);
    assert_eq!(result.grid(), GridResolution::new(8, 3));
}

#[test]
fn test_uv_channel_propagates() {
    let spec = BoxSpec {
        uv_channel: UvChannel::Uv2,
        ..unit_box(Resolution::Vertices { x: 0, y: 0 })
    };
    assert_eq!(build(&spec).mesh().uv_channel(), UvChannel::Uv2);
}
