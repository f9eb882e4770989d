//! Bounding volumes and boundary recycling.
//!
//! A mote field lives inside an axis-aligned [`Bounds`] volume. Horizontal
//! axes (X and Z) always span `[-range/2, +range/2]` around the origin; the
//! vertical axis is either centered the same way or anchored to the floor,
//! spanning `[0, range_y]` (large environment-scale fields sit on a ground
//! plane rather than floating around the origin).
//!
//! Motes drift strictly upward, so the only vertical exit is through the
//! ceiling, and every policy handles it the same way: the mote wraps back
//! to the floor of the volume. What differs between policies is the
//! horizontal handling - see [`RecyclePolicy`].

use crate::spawn::SpawnRng;
use glam::Vec3;

/// Axis-aligned bounding volume for a mote field.
///
/// `range_x`, `range_y` and `range_z` are full extents, not half-extents.
/// Non-positive ranges are allowed and collapse that axis to a single
/// point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Full extent along X (spans `[-range_x/2, +range_x/2]`).
    pub range_x: f32,
    /// Full extent along Y. Spans `[-range_y/2, +range_y/2]` when centered,
    /// `[0, range_y]` when floor-anchored.
    pub range_y: f32,
    /// Full extent along Z (spans `[-range_z/2, +range_z/2]`).
    pub range_z: f32,
    /// Whether the vertical axis starts at the floor (`y = 0`) instead of
    /// being centered on the origin.
    pub floor_anchored: bool,
}

impl Bounds {
    /// A cube centered on the origin with the given full extent per axis.
    pub fn centered(range: f32) -> Self {
        Self::centered_xyz(range, range, range)
    }

    /// A centered box with independent extents per axis.
    pub fn centered_xyz(range_x: f32, range_y: f32, range_z: f32) -> Self {
        Self {
            range_x,
            range_y,
            range_z,
            floor_anchored: false,
        }
    }

    /// A box whose vertical axis spans `[0, range_y]` while X and Z stay
    /// centered on the origin.
    pub fn floor_anchored(range_x: f32, range_y: f32, range_z: f32) -> Self {
        Self {
            range_x,
            range_y,
            range_z,
            floor_anchored: true,
        }
    }

    /// Clamp negative extents to zero (degenerate axes are points).
    pub(crate) fn sanitized(self) -> Self {
        Self {
            range_x: self.range_x.max(0.0),
            range_y: self.range_y.max(0.0),
            range_z: self.range_z.max(0.0),
            floor_anchored: self.floor_anchored,
        }
    }

    /// Half extent along X.
    #[inline]
    pub fn half_x(&self) -> f32 {
        self.range_x * 0.5
    }

    /// Half extent along Z.
    #[inline]
    pub fn half_z(&self) -> f32 {
        self.range_z * 0.5
    }

    /// The floor of the volume (lowest allowed Y).
    #[inline]
    pub fn min_y(&self) -> f32 {
        if self.floor_anchored {
            0.0
        } else {
            -self.range_y * 0.5
        }
    }

    /// The ceiling of the volume (highest allowed Y).
    #[inline]
    pub fn max_y(&self) -> f32 {
        if self.floor_anchored {
            self.range_y
        } else {
            self.range_y * 0.5
        }
    }

    /// Whether a point lies inside the volume (inclusive on all faces).
    pub fn contains(&self, point: Vec3) -> bool {
        point.x.abs() <= self.half_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
            && point.z.abs() <= self.half_z()
    }

    /// Wrap a mote that escaped through the ceiling back to the floor.
    ///
    /// Only the upward exit is checked: lift velocity is strictly positive,
    /// so motes never leave through the floor on their own.
    #[inline]
    pub(crate) fn recycle_vertical(&self, y: &mut f32) {
        if *y > self.max_y() {
            *y = self.min_y();
        }
    }
}

/// How motes that escape the volume horizontally are recycled.
///
/// Both policies share the vertical rule (ceiling wraps to floor); they
/// diverge on X and Z. The policy is part of the field configuration and
/// stays fixed for the field's entire lifetime - it is never inferred
/// from the bounds shape.
///
/// # Example
///
/// ```ignore
/// FieldConfig::ambient()
///     .with_recycle(RecyclePolicy::FarWall)
///     .generate();
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecyclePolicy {
    /// Re-seed the escaped axis with a fresh uniform draw over its full
    /// range. The mote reappears somewhere random along that axis, which
    /// keeps small ambient fields looking evenly filled.
    #[default]
    Resample,

    /// Teleport the escaped coordinate to the opposite wall: a mote
    /// leaving through `+range/2` reappears at `-range/2` and vice versa,
    /// velocity preserved. Suits large environment-scale fields where a
    /// visible re-entry at the far edge reads as continuous flow.
    FarWall,
}

impl RecyclePolicy {
    /// Recycle one horizontal coordinate if it left `[-half, +half]`.
    pub(crate) fn recycle_horizontal(&self, coord: &mut f32, half: f32, rng: &mut SpawnRng) {
        if coord.abs() > half {
            *coord = match self {
                RecyclePolicy::Resample => rng.centered(half),
                RecyclePolicy::FarWall => {
                    if *coord > 0.0 {
                        -half
                    } else {
                        half
                    }
                }
            };
        }
    }
}
