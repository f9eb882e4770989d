//! Seeded random draws for mote generation and recycling.
//!
//! All randomness in a field flows through one [`SpawnRng`], owned by the
//! field itself. Seed it explicitly for reproducible runs (tests, replays)
//! or let it seed from the clock for one-off ambiance:
//!
//! ```ignore
//! FieldConfig::ambient().with_seed(42).generate();  // reproducible
//! FieldConfig::ambient().generate();                // clock-seeded
//! ```

use crate::bounds::Bounds;
use crate::config::DriftProfile;
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Random source for a single mote field.
///
/// Wraps a [`SmallRng`] with draw helpers that are safe on degenerate
/// (zero-width) intervals - a collapsed axis yields its single point
/// instead of panicking on an empty range.
#[derive(Debug)]
pub struct SpawnRng {
    rng: SmallRng,
}

impl SpawnRng {
    /// Create a new spawn RNG.
    ///
    /// With `None`, the seed is taken from the system clock so every run
    /// scatters differently.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(42)
        });

        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Random f32 in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in `[-half, +half)`, or `0.0` when the interval is
    /// degenerate (`half <= 0`).
    #[inline]
    pub fn centered(&mut self, half: f32) -> f32 {
        if half > 0.0 {
            self.rng.gen_range(-half..half)
        } else {
            0.0
        }
    }

    /// Random f32 in `[min, max)`, or `min` when the interval is
    /// degenerate (`max <= min`).
    #[inline]
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        if max > min {
            self.rng.gen_range(min..max)
        } else {
            min
        }
    }

    /// Uniform random point inside a bounding volume.
    ///
    /// Centered axes draw from `[-range/2, +range/2)`; a floor-anchored
    /// vertical axis draws from `[0, range_y)`.
    pub fn point_in(&mut self, bounds: &Bounds) -> Vec3 {
        let y = if bounds.floor_anchored {
            self.range(0.0, bounds.range_y)
        } else {
            self.centered(bounds.range_y * 0.5)
        };

        Vec3::new(
            self.centered(bounds.half_x()),
            y,
            self.centered(bounds.half_z()),
        )
    }

    /// Random drift velocity: symmetric horizontal components, strictly
    /// upward lift.
    pub fn drift(&mut self, profile: &DriftProfile) -> Vec3 {
        Vec3::new(
            self.centered(profile.horizontal),
            self.range(profile.lift_min, profile.lift_max),
            self.centered(profile.horizontal),
        )
    }
}
