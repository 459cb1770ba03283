#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Orrery Motion
//!
//! The simulation layer of the orrery scene: a field of spheroids drifting
//! on oscillating orbits around the origin, plus the circular path of the
//! directional light that illuminates them.
//!
//! This crate is pure CPU math. It knows nothing about windows or the GPU,
//! which keeps every property of the motion testable with plain asserts and
//! keeps the renderer free to consume positions however it likes.
//!
//! ## Key Components
//!
//! -   **Bodies:** [`Body`] carries the fixed orbit parameters sampled at
//!     spawn time and the derived position. Its [`Look`] decides both the
//!     material and the mesh, so the two can never disagree.
//! -   **The field:** [`BodyField`] owns every body, spins them as a group
//!     and steps each one per frame.
//! -   **The clock:** everything advances from a single scene time `t` in
//!     milliseconds via the [`Updatable`] trait.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use motion::{BodyField, Updatable, BODY_COUNT};
//!
//! let mut rng = rand::thread_rng();
//! let mut field = BodyField::generate(BODY_COUNT, &mut rng);
//! field.update(16.6);
//! let first = field.bodies[0].position;
//! ```

pub mod body;
pub mod field;
pub mod palette;

pub use body::{Body, Look};
pub use field::{sun_position, BodyField};
pub use palette::PALETTE;

/// Number of bodies in a freshly generated field.
pub const BODY_COUNT: usize = 100;

/// Radians added to the field's spin on every update call.
///
/// A per-call step, not a per-second rate; the spin advances with the frame
/// rate.
pub const ROTATION_STEP: f32 = 0.01;

/// Angular rate of the sun's circular path, in radians per millisecond.
pub const SUN_RATE: f32 = 0.0005;

/// Radius of the sun's circular path.
pub const SUN_RADIUS: f32 = 2.0;

/// Per-frame advance driven by the scene clock.
///
/// `t` is the time in milliseconds since the scene started. It is
/// monotonically non-decreasing; implementations must not assume a fixed
/// delta between calls.
pub trait Updatable {
    /// Bring `self` up to date with scene time `t`.
    fn update(&mut self, t: f32);
}
