//! # Motefield
//!
//! Floating-particle ambiance fields with a simple, declarative API.
//!
//! Motefield simulates the slow upward drift of decorative point particles
//! ("motes") inside an axis-aligned volume: generate a fixed-size field
//! once, advance it once per frame, and hand the renderer flat position
//! and color arrays. The crate owns the simulation only - it talks to no
//! window, no GPU and no scene graph, so it drops into any host that can
//! draw points.
//!
//! ## Quick Start
//!
//! ```
//! use motefield::prelude::*;
//!
//! let mut field = FieldConfig::ambient()
//!     .with_count(500)
//!     .with_seed(7)
//!     .generate();
//!
//! // Once per frame:
//! field.advance();
//!
//! // Renderer reads, never writes:
//! assert_eq!(field.positions_flat().len(), 500 * 3);
//! assert_eq!(field.colors_flat().len(), 500 * 3);
//! ```
//!
//! ## Core Concepts
//!
//! ### Fields
//!
//! A [`ParticleField`] is a fixed-length set of motes stored as flat
//! arrays. Motes are never added or removed, only repositioned: each tick
//! every mote moves by its constant velocity, and motes that leave the
//! bounding volume are recycled back in. Color and velocity are assigned
//! once at generation and never change.
//!
//! ### Presets
//!
//! [`FieldConfig::ambient`] is a close-up haze (800 tiny motes, 15-unit
//! cube); [`FieldConfig::environment`] fills a large floor-anchored scene
//! (4500 motes, 400 x 200 x 400). Both are starting points for the
//! `with_*` builder methods.
//!
//! ### Recycling
//!
//! Motes drift strictly upward and wrap from the ceiling back to the
//! floor. Horizontal escapes are handled by the configured
//! [`RecyclePolicy`]:
//!
//! | Policy | On horizontal escape | Suits |
//! |--------|---------------------|-------|
//! | [`RecyclePolicy::Resample`] | re-seed the axis with a fresh uniform draw | small ambient fields |
//! | [`RecyclePolicy::FarWall`] | teleport to the opposite wall | large environment fields |
//!
//! ### The host's side of the contract
//!
//! `advance` mutates positions in place. After every call the host must
//! treat its mirrored GPU buffer as dirty, re-reading
//! [`positions_flat`](ParticleField::positions_flat) (or taking a fresh
//! [`vertices`](ParticleField::vertices) snapshot) rather than holding
//! slices across ticks. The whole-field
//! [`rotation`](ParticleField::rotation) angle is applied to the host's
//! transform, not baked into positions. Hosts without their own frame
//! callback can pace themselves with a [`Ticker`].

pub mod bounds;
pub mod color;
mod config;
pub mod error;
mod field;
mod spawn;
pub mod time;

pub use bounds::{Bounds, RecyclePolicy};
pub use bytemuck;
pub use config::{DriftProfile, FieldConfig};
pub use error::ColorParseError;
pub use field::{Mote, MoteVertex, ParticleField};
pub use glam::Vec3;
pub use spawn::SpawnRng;
pub use time::Ticker;

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```
/// use motefield::prelude::*;
/// ```
///
/// This imports:
/// - [`FieldConfig`] - the configuration builder and presets
/// - [`ParticleField`] - the field itself
/// - [`Bounds`], [`RecyclePolicy`], [`DriftProfile`] - configuration pieces
/// - [`Mote`], [`MoteVertex`] - per-mote views and POD snapshots
/// - [`Ticker`] - fixed-rate tick driver for headless hosts
/// - [`Vec3`] - the glam vector type used throughout
pub mod prelude {
    pub use crate::bounds::{Bounds, RecyclePolicy};
    pub use crate::config::{DriftProfile, FieldConfig};
    pub use crate::field::{Mote, MoteVertex, ParticleField};
    pub use crate::time::Ticker;
    pub use crate::Vec3;
}
