//! The mote field core: generation, advection, boundary recycling.
//!
//! A [`ParticleField`] owns a fixed-size set of motes as flat
//! structure-of-arrays storage (positions, velocities, colors, optional
//! per-mote sizes). It is created once by [`ParticleField::generate`] and
//! stepped by [`ParticleField::advance`], once per host frame:
//!
//! ```
//! use motefield::prelude::*;
//!
//! let mut field = FieldConfig::ambient().with_seed(42).generate();
//!
//! // Host frame callback:
//! field.advance();
//!
//! // Renderer hand-off: read-only flat views, 3 floats per mote.
//! let positions: &[f32] = field.positions_flat();
//! let colors: &[f32] = field.colors_flat();
//! assert_eq!(positions.len(), field.len() * 3);
//! ```
//!
//! # Renderer contract
//!
//! The renderer only ever reads. After each `advance` call the position
//! data has changed in place, so the host must re-upload (or mark dirty)
//! whatever GPU buffer mirrors it, and must not hold borrowed slices
//! across the call - take a fresh slice (or a [`MoteVertex`] snapshot)
//! each frame. The accumulated [`rotation`](ParticleField::rotation) is a
//! whole-field transform about the vertical axis, applied by the host,
//! not baked into positions.
//!
//! # Update semantics
//!
//! One `advance` call is one tick. Per mote: `position += velocity`
//! (constant velocity, unit timestep), then boundary recycling against
//! the configured [`Bounds`](crate::Bounds) and
//! [`RecyclePolicy`](crate::RecyclePolicy). Motes never interact, so the
//! per-mote updates are order-independent.

use crate::config::FieldConfig;
use crate::spawn::SpawnRng;
use crate::{color, Vec3};

/// A single mote: the logical per-particle view over the field's
/// structure-of-arrays storage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mote {
    /// Current position.
    pub position: Vec3,
    /// Constant drift velocity, assigned at generation.
    pub velocity: Vec3,
    /// Fixed palette blend, assigned at generation (RGB in `[0, 1]`).
    pub color: Vec3,
    /// Point size for this mote.
    pub size: f32,
}

/// Interleaved per-mote vertex data for renderers that upload
/// array-of-structs buffers.
///
/// `#[repr(C)]` and `Pod`, so a `&[MoteVertex]` can be handed to a
/// graphics API as raw bytes via `bytemuck::cast_slice`. Snapshots are
/// copies by construction and stay valid across later `advance` calls.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MoteVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Point size.
    pub size: f32,
    /// RGB color in `[0, 1]`.
    pub color: [f32; 3],
    /// Field-wide opacity.
    pub opacity: f32,
}

/// A fixed-size set of drifting motes.
///
/// See the [module docs](self) for the generate/advance lifecycle and the
/// renderer contract.
#[derive(Debug)]
pub struct ParticleField {
    config: FieldConfig,
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    colors: Vec<Vec3>,
    /// Per-mote sizes; `None` means one uniform size for the whole field.
    sizes: Option<Vec<f32>>,
    /// Accumulated whole-field rotation about the vertical axis, radians.
    rotation: f32,
    ticks: u64,
    rng: SpawnRng,
}

impl ParticleField {
    /// Generate a field from a configuration.
    ///
    /// The configuration is sanitized first (see [`FieldConfig`]); there
    /// are no failure paths. Per mote, in order: position uniform inside
    /// the bounding volume, color as a random blend of the two palette
    /// endpoints, optional size factor in `[0.5, 2.0)` of the base size,
    /// then drift velocity.
    pub fn generate(config: FieldConfig) -> Self {
        let config = config.sanitized();
        let mut rng = SpawnRng::new(config.seed);

        let count = config.count as usize;
        let mut positions = Vec::with_capacity(count);
        let mut velocities = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        let mut sizes = config.varied_sizes.then(|| Vec::with_capacity(count));

        for _ in 0..count {
            positions.push(rng.point_in(&config.bounds));
            colors.push(color::blend(config.color1, config.color2, rng.unit()));
            if let Some(sizes) = sizes.as_mut() {
                sizes.push(config.size * rng.range(0.5, 2.0));
            }
            velocities.push(rng.drift(&config.drift));
        }

        Self {
            config,
            positions,
            velocities,
            colors,
            sizes,
            rotation: 0.0,
            ticks: 0,
            rng,
        }
    }

    /// Step the simulation by one tick.
    ///
    /// Every mote advances by its constant velocity and is recycled if it
    /// left the volume: through the ceiling it wraps to the floor, and
    /// escaped horizontal coordinates are handled by the configured
    /// [`RecyclePolicy`](crate::RecyclePolicy). Afterwards the whole-field
    /// rotation angle grows by `rotation_speed`. A no-op on an empty
    /// field (apart from the rotation and tick bookkeeping).
    pub fn advance(&mut self) {
        let bounds = self.config.bounds;
        let policy = self.config.recycle;

        for (position, velocity) in self.positions.iter_mut().zip(&self.velocities) {
            *position += *velocity;

            bounds.recycle_vertical(&mut position.y);
            policy.recycle_horizontal(&mut position.x, bounds.half_x(), &mut self.rng);
            policy.recycle_horizontal(&mut position.z, bounds.half_z(), &mut self.rng);
        }

        self.rotation += self.config.rotation_speed;
        self.ticks += 1;
    }

    /// Reposition one mote by hand.
    ///
    /// For scripted setups and tests; the new position is not checked
    /// against the volume, so an out-of-bounds mote is simply recycled on
    /// the next `advance`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn place(&mut self, index: usize, position: Vec3, velocity: Vec3) {
        self.positions[index] = position;
        self.velocities[index] = velocity;
    }

    /// Number of motes. Fixed for the field's lifetime.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the field holds no motes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Ticks advanced so far.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The sanitized configuration this field was generated from.
    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Mote positions, one `Vec3` per mote.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Mote positions as a flat float slice, `[x0, y0, z0, x1, ...]`.
    #[inline]
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Mote velocities, one `Vec3` per mote. Constant after generation.
    #[inline]
    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    /// Mote colors, one RGB `Vec3` per mote. Constant after generation.
    #[inline]
    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Mote colors as a flat float slice, `[r0, g0, b0, r1, ...]`.
    #[inline]
    pub fn colors_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Per-mote sizes, if the field was generated with size variation.
    #[inline]
    pub fn sizes(&self) -> Option<&[f32]> {
        self.sizes.as_deref()
    }

    /// Base (or uniform) point size.
    #[inline]
    pub fn size(&self) -> f32 {
        self.config.size
    }

    /// Field-wide opacity for the renderer.
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.config.opacity
    }

    /// Accumulated whole-field rotation about the vertical axis, radians.
    ///
    /// The host applies this to the field's transform; positions are
    /// stored unrotated.
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Per-tick rotation delta, radians.
    #[inline]
    pub fn rotation_speed(&self) -> f32 {
        self.config.rotation_speed
    }

    /// The logical view of one mote, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<Mote> {
        if index >= self.len() {
            return None;
        }

        Some(Mote {
            position: self.positions[index],
            velocity: self.velocities[index],
            color: self.colors[index],
            size: self
                .sizes
                .as_ref()
                .map_or(self.config.size, |sizes| sizes[index]),
        })
    }

    /// Interleaved vertex snapshot of the whole field.
    ///
    /// Allocates a fresh copy each call; see [`MoteVertex`].
    pub fn vertices(&self) -> Vec<MoteVertex> {
        (0..self.len())
            .map(|i| MoteVertex {
                position: self.positions[i].to_array(),
                size: self
                    .sizes
                    .as_ref()
                    .map_or(self.config.size, |sizes| sizes[i]),
                color: self.colors[i].to_array(),
                opacity: self.config.opacity,
            })
            .collect()
    }
}
