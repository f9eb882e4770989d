//! Integration tests for field generation, advection and recycling.

use motefield::color;
use motefield::prelude::*;

// ============================================================================
// Generation
// ============================================================================

#[test]
fn test_generate_fills_bounds_ambient() {
    let field = FieldConfig::ambient().with_seed(11).generate();
    assert_eq!(field.len(), 800);

    let bounds = field.config().bounds;
    for &position in field.positions() {
        assert!(bounds.contains(position), "escaped at {position}");
    }
}

#[test]
fn test_generate_fills_bounds_environment() {
    let field = FieldConfig::environment().with_seed(12).generate();
    assert_eq!(field.len(), 4500);

    let bounds = field.config().bounds;
    for &position in field.positions() {
        assert!(bounds.contains(position));
        assert!(position.y >= 0.0, "floor-anchored Y went negative");
    }
}

#[test]
fn test_lift_is_strictly_upward() {
    // Never zero or downward, in either preset.
    for (config, drift) in [
        (FieldConfig::ambient(), DriftProfile::AMBIENT),
        (FieldConfig::environment(), DriftProfile::ENVIRONMENT),
    ] {
        let field = config.with_count(500).with_seed(13).generate();
        for velocity in field.velocities() {
            assert!(velocity.y >= drift.lift_min);
            assert!(velocity.y <= drift.lift_max);
            assert!(velocity.x.abs() <= drift.horizontal);
            assert!(velocity.z.abs() <= drift.horizontal);
        }
    }
}

#[test]
fn test_explicit_defaults_match_preset() {
    // A preset equals the same configuration with every default spelled out.
    let explicit = FieldConfig::ambient()
        .with_count(800)
        .with_size(0.04)
        .with_bounds(Bounds::centered(15.0))
        .with_colors(color::ACCENT_BLUE, color::SKY_BLUE)
        .with_opacity(0.8)
        .with_rotation_speed(0.0003)
        .with_drift(DriftProfile::AMBIENT)
        .with_recycle(RecyclePolicy::Resample)
        .with_varied_sizes(true);

    assert_eq!(explicit, FieldConfig::ambient());
}

#[test]
fn test_seeded_fields_are_reproducible() {
    let mut a = FieldConfig::ambient().with_count(64).with_seed(99).generate();
    let mut b = FieldConfig::ambient().with_count(64).with_seed(99).generate();

    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.colors(), b.colors());
    assert_eq!(a.velocities(), b.velocities());

    for _ in 0..200 {
        a.advance();
        b.advance();
    }
    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.rotation(), b.rotation());
}

// ============================================================================
// Advection
// ============================================================================

#[test]
fn test_advance_is_plain_euler_integration() {
    // No hidden per-call state: N advances leave every in-range mote
    // exactly where N velocity additions put it.
    let mut field = FieldConfig::ambient().with_count(32).with_seed(21).generate();
    let start: Vec<Vec3> = field.positions().to_vec();
    let velocities: Vec<Vec3> = field.velocities().to_vec();

    const TICKS: usize = 50;
    for _ in 0..TICKS {
        field.advance();
    }

    let bounds = field.config().bounds;
    for i in 0..field.len() {
        // Same op order as advance: repeated addition, not one multiply.
        let mut expected = start[i];
        for _ in 0..TICKS {
            expected += velocities[i];
        }
        let actual = field.positions()[i];
        // Motes that never left the volume must match exactly; recycled
        // ones merely have to still be inside it.
        if bounds.contains(expected) {
            assert_eq!(actual, expected);
        } else {
            assert!(bounds.contains(actual));
        }
    }
}

#[test]
fn test_colors_blend_between_endpoints_and_never_change() {
    let mut field = FieldConfig::ambient().with_count(100).with_seed(61).generate();
    let (c1, c2) = (field.config().color1, field.config().color2);

    for color in field.colors() {
        assert!(color.x >= c1.x.min(c2.x) && color.x <= c1.x.max(c2.x));
        assert!(color.y >= c1.y.min(c2.y) && color.y <= c1.y.max(c2.y));
        assert!(color.z >= c1.z.min(c2.z) && color.z <= c1.z.max(c2.z));
    }

    let before: Vec<Vec3> = field.colors().to_vec();
    for _ in 0..10 {
        field.advance();
    }
    assert_eq!(field.colors(), &before[..]);
}

// ============================================================================
// Boundary recycling
// ============================================================================

#[test]
fn test_ambient_ceiling_wraps_to_floor() {
    // A mote crossing range_y / 2 lands exactly on the floor at -range_y / 2.
    let mut field = FieldConfig::ambient().with_count(4).with_seed(31).generate();

    field.place(0, Vec3::new(0.0, 7.45, 0.0), Vec3::new(0.0, 0.1, 0.0));
    field.advance();

    assert_eq!(field.get(0).unwrap().position.y, -7.5);
    for &position in field.positions() {
        assert!(position.y <= 7.5);
    }
}

#[test]
fn test_ambient_horizontal_escape_resamples() {
    // A mote forced to (6, 0, 0) with velocity (1, 0, 0) in a 10-unit cube
    // is re-sampled into range, not left at x = 7.
    let mut field = FieldConfig::ambient()
        .with_bounds(Bounds::centered(10.0))
        .with_count(2)
        .with_seed(32)
        .generate();

    field.place(0, Vec3::new(6.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
    field.advance();

    let x = field.get(0).unwrap().position.x;
    assert!((-5.0..=5.0).contains(&x));
}

#[test]
fn test_far_wall_flips_to_opposite_bound() {
    // With far-wall recycling, a mote at x = 205 in a 400-unit range flips
    // to exactly -200 after the update-then-check step.
    let mut field = FieldConfig::environment().with_count(4).with_seed(41).generate();

    field.place(0, Vec3::new(205.0, 0.0, 0.0), Vec3::new(0.01, 0.02, 0.0));
    field.advance();

    let position = field.get(0).unwrap().position;
    assert_eq!(position.x, -200.0);
    assert_eq!(position.y, 0.02);

    for &p in field.positions() {
        assert!(p.x.abs() <= 200.0);
        assert!(p.z.abs() <= 200.0);
    }
}

#[test]
fn test_environment_ceiling_resets_to_zero() {
    // Crossing range_y resets to the floor at 0.
    let mut field = FieldConfig::environment().with_count(2).with_seed(42).generate();

    field.place(0, Vec3::new(0.0, 199.99, 0.0), Vec3::new(0.0, 0.05, 0.0));
    field.advance();

    assert_eq!(field.get(0).unwrap().position.y, 0.0);
}

#[test]
fn test_degenerate_axis_stays_a_point() {
    // A zero range collapses that axis to a single point and keeps it there.
    let mut field = FieldConfig::ambient()
        .with_bounds(Bounds::centered_xyz(0.0, 15.0, 15.0))
        .with_count(50)
        .with_seed(51)
        .generate();

    for _ in 0..20 {
        field.advance();
        for &position in field.positions() {
            assert_eq!(position.x, 0.0);
        }
    }
}

// ============================================================================
// Renderer hand-off
// ============================================================================

#[test]
fn test_flat_views_are_index_aligned() {
    let mut field = FieldConfig::ambient().with_count(16).with_seed(71).generate();
    field.advance();

    let flat = field.positions_flat();
    for (i, &position) in field.positions().iter().enumerate() {
        assert_eq!(flat[i * 3], position.x);
        assert_eq!(flat[i * 3 + 1], position.y);
        assert_eq!(flat[i * 3 + 2], position.z);
    }
}
