//! Field configuration and presets.
//!
//! A [`FieldConfig`] fully describes a mote field before generation: how
//! many motes, the bounding volume, the color palette, drift speeds, point
//! sizing and the boundary recycling policy. Configure with method
//! chaining, then call `.generate()`:
//!
//! ```
//! use motefield::prelude::*;
//!
//! let field = FieldConfig::ambient()
//!     .with_count(300)
//!     .with_rotation_speed(0.001)
//!     .with_seed(7)
//!     .generate();
//! assert_eq!(field.len(), 300);
//! ```
//!
//! # Presets
//!
//! Two presets cover the two field styles this crate grew out of:
//!
//! - [`FieldConfig::ambient`] - a small, dense haze of 800 tiny motes in a
//!   15-unit cube around the origin, per-mote size variation, escaped
//!   motes re-sampled back in. Tuned to hang around a close-up scene.
//! - [`FieldConfig::environment`] - 4500 motes across a 400 x 200 x 400
//!   floor-anchored volume with one uniform point size and far-wall
//!   recycling. Tuned to fill a large scene viewed from a distance.
//!
//! Every numeric field is coerced to a usable value at generation time;
//! there is no invalid configuration, only degenerate ones (a zero-size
//! volume, an empty field).

use crate::bounds::{Bounds, RecyclePolicy};
use crate::color;
use crate::field::ParticleField;
use glam::Vec3;

/// Smallest permitted upward lift. Keeps vertical velocity support
/// strictly positive even when a caller zeroes the interval.
const MIN_LIFT: f32 = 1e-6;

/// Per-mote velocity draw intervals.
///
/// Horizontal components (X and Z) are drawn from a symmetric interval
/// around zero; the vertical component ("lift") is drawn from a strictly
/// positive interval, so every mote rises.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftProfile {
    /// Half-width of the symmetric horizontal interval: X and Z are drawn
    /// from `[-horizontal, +horizontal)`.
    pub horizontal: f32,
    /// Lower bound of the lift interval. Strictly positive.
    pub lift_min: f32,
    /// Upper bound of the lift interval.
    pub lift_max: f32,
}

impl DriftProfile {
    /// Slow drift for close-up ambient haze.
    pub const AMBIENT: Self = Self {
        horizontal: 0.001,
        lift_min: 0.001,
        lift_max: 0.003,
    };

    /// Faster drift scaled to environment-size volumes, roughly 15-20x
    /// the ambient magnitudes so the flow reads the same at a distance.
    pub const ENVIRONMENT: Self = Self {
        horizontal: 0.015,
        lift_min: 0.01,
        lift_max: 0.06,
    };

    /// Coerce into a usable profile: negative half-widths collapse to
    /// zero, and the lift interval is kept strictly positive and ordered.
    pub(crate) fn sanitized(self) -> Self {
        let lift_min = if self.lift_min > 0.0 {
            self.lift_min
        } else {
            MIN_LIFT
        };

        Self {
            horizontal: self.horizontal.max(0.0),
            lift_min,
            lift_max: self.lift_max.max(lift_min),
        }
    }
}

/// Complete description of a mote field before generation.
///
/// All fields are public for direct struct construction, but the
/// `with_*` builder methods on top of a preset are the usual route.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Number of motes. Fixed for the field's lifetime; `0` is a valid,
    /// empty field.
    pub count: u32,
    /// Base point size handed to the renderer.
    pub size: f32,
    /// Bounding volume motes are recycled into.
    pub bounds: Bounds,
    /// First palette endpoint (RGB in `[0, 1]`).
    pub color1: Vec3,
    /// Second palette endpoint. Each mote's color is a random linear
    /// blend of the two, fixed at generation.
    pub color2: Vec3,
    /// Opacity handed to the renderer, clamped to `[0, 1]`.
    pub opacity: f32,
    /// Whole-field rotation about the vertical axis, radians per tick.
    pub rotation_speed: f32,
    /// Velocity draw intervals.
    pub drift: DriftProfile,
    /// Horizontal boundary recycling policy.
    pub recycle: RecyclePolicy,
    /// Draw a per-mote size factor in `[0.5, 2.0)` of the base size
    /// instead of using one uniform point size.
    pub varied_sizes: bool,
    /// RNG seed. `None` seeds from the system clock.
    pub seed: Option<u64>,
}

impl FieldConfig {
    /// Ambient haze preset: 800 small motes in a 15-unit cube centered on
    /// the origin, varied sizes, resample recycling.
    pub fn ambient() -> Self {
        Self {
            count: 800,
            size: 0.04,
            bounds: Bounds::centered(15.0),
            color1: color::ACCENT_BLUE,
            color2: color::SKY_BLUE,
            opacity: 0.8,
            rotation_speed: 0.0003,
            drift: DriftProfile::AMBIENT,
            recycle: RecyclePolicy::Resample,
            varied_sizes: true,
            seed: None,
        }
    }

    /// Environment preset: 4500 motes across a 400 x 200 x 400
    /// floor-anchored volume, uniform point size, far-wall recycling.
    pub fn environment() -> Self {
        Self {
            count: 4500,
            size: 1.0,
            bounds: Bounds::floor_anchored(400.0, 200.0, 400.0),
            color1: color::ACCENT_BLUE,
            color2: color::SKY_BLUE,
            opacity: 0.8,
            rotation_speed: 0.0001,
            drift: DriftProfile::ENVIRONMENT,
            recycle: RecyclePolicy::FarWall,
            varied_sizes: false,
            seed: None,
        }
    }

    /// Set the number of motes.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Set the base point size.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the bounding volume.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set both palette endpoints. Components outside `[0, 1]` are
    /// clamped at generation time.
    pub fn with_colors(mut self, color1: Vec3, color2: Vec3) -> Self {
        self.color1 = color1;
        self.color2 = color2;
        self
    }

    /// Set both palette endpoints from hex strings (`#rrggbb` or `#rgb`).
    ///
    /// A string that fails to parse silently falls back to the stock blue
    /// for that endpoint; this mirrors the rest of the configuration
    /// surface, which degrades instead of erroring. Use
    /// [`color::parse_hex`] directly when you want the failure.
    pub fn with_palette_hex(mut self, color1: &str, color2: &str) -> Self {
        self.color1 = color::parse_hex(color1).unwrap_or(color::ACCENT_BLUE);
        self.color2 = color::parse_hex(color2).unwrap_or(color::SKY_BLUE);
        self
    }

    /// Set the renderer-facing opacity.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set the whole-field rotation speed (radians per tick).
    pub fn with_rotation_speed(mut self, rotation_speed: f32) -> Self {
        self.rotation_speed = rotation_speed;
        self
    }

    /// Set the velocity draw intervals.
    pub fn with_drift(mut self, drift: DriftProfile) -> Self {
        self.drift = drift;
        self
    }

    /// Set the horizontal recycling policy.
    pub fn with_recycle(mut self, recycle: RecyclePolicy) -> Self {
        self.recycle = recycle;
        self
    }

    /// Enable or disable per-mote size variation.
    pub fn with_varied_sizes(mut self, varied: bool) -> Self {
        self.varied_sizes = varied;
        self
    }

    /// Pin the RNG seed for reproducible generation and recycling.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate a field from this configuration.
    ///
    /// Shorthand for [`ParticleField::generate`].
    pub fn generate(self) -> ParticleField {
        ParticleField::generate(self)
    }

    /// Coerce every numeric field to a usable value. Called once by
    /// `generate`; the field keeps the sanitized copy.
    pub(crate) fn sanitized(self) -> Self {
        Self {
            count: self.count,
            size: self.size.max(0.0),
            bounds: self.bounds.sanitized(),
            color1: self.color1.clamp(Vec3::ZERO, Vec3::ONE),
            color2: self.color2.clamp(Vec3::ZERO, Vec3::ONE),
            opacity: self.opacity.clamp(0.0, 1.0),
            rotation_speed: self.rotation_speed.max(0.0),
            drift: self.drift.sanitized(),
            recycle: self.recycle,
            varied_sizes: self.varied_sizes,
            seed: self.seed,
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::ambient()
    }
}
