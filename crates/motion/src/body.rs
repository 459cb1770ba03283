//! Orbiting bodies and their per-frame motion.

use std::f32::consts::TAU;

use glam::{EulerRot, Quat, Vec3};
use rand::Rng;

use crate::palette::{self, PALETTE};
use crate::Updatable;

/// Rendering treatment of a body, fixed at spawn time.
///
/// The variant also selects the mesh: toon bodies render as smooth spheres,
/// glass bodies as faceted icosahedra.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Look {
    /// Opaque and cel-shaded, tinted with a palette color (floating-point sRGB).
    Toon { color: [f32; 3] },
    /// Fully transmissive, untinted.
    Glass,
}

/// A single spheroid drifting on an oscillating orbit around the origin.
///
/// Every field except `position` is sampled once at spawn time and never
/// changes. `position` is recomputed from scratch on each
/// [`update`](Updatable::update), so a body is a pure function of the scene
/// clock and its fixed parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Base orbit radius, the center of the oscillation.
    pub r: f32,
    /// Azimuthal angle, fixed.
    pub theta: f32,
    /// Polar angle, fixed.
    pub phi: f32,
    /// Oscillation rate in radians per millisecond.
    pub speed: f32,
    /// Oscillation half-range around `r`. May be negative.
    pub amplitude: f32,
    /// Material and mesh selection.
    pub look: Look,
    /// Fixed model-space orientation.
    pub orientation: Quat,
    /// Current position. Zero until the first update.
    pub position: Vec3,
}

impl Body {
    /// Spawn a body with uniformly sampled orbit parameters.
    ///
    /// Ranges: `r` in `[1, 1.5)`, both angles in `[0, 2π)`, `speed` in
    /// `[0.001, 0.003)` rad/ms, `amplitude` in `[0.25, 0.75)`. The look is
    /// toon with probability one half, tinted from [`PALETTE`], otherwise
    /// glass. Orientation is an independent uniform spin about each axis.
    #[must_use]
    pub fn spawn(rng: &mut impl Rng) -> Self {
        let look = if rng.gen::<f32>() < 0.5 {
            let color = palette::srgb(PALETTE[rng.gen_range(0..PALETTE.len())]);
            Look::Toon { color }
        } else {
            Look::Glass
        };
        Self {
            r: 1.0 + rng.gen::<f32>() * 0.5,
            theta: rng.gen::<f32>() * TAU,
            phi: rng.gen::<f32>() * TAU,
            speed: 0.001 + rng.gen::<f32>() * 0.002,
            amplitude: 0.25 + rng.gen::<f32>() * 0.5,
            look,
            orientation: Quat::from_euler(
                EulerRot::XYZ,
                rng.gen::<f32>() * TAU,
                rng.gen::<f32>() * TAU,
                rng.gen::<f32>() * TAU,
            ),
            position: Vec3::ZERO,
        }
    }

    /// Orbit radius at scene time `t` (milliseconds).
    #[must_use]
    pub fn radius_at(&self, t: f32) -> f32 {
        (t * self.speed).sin() * self.amplitude + self.r
    }
}

impl Updatable for Body {
    /// Recompute `position` for scene time `t`.
    ///
    /// Spherical to cartesian with the oscillated radius; no other state is
    /// touched, and repeated calls with the same `t` are idempotent.
    fn update(&mut self, t: f32) {
        let radius = self.radius_at(t);
        self.position = Vec3::new(
            radius * self.theta.cos() * self.phi.sin(),
            radius * self.theta.sin() * self.phi.sin(),
            radius * self.phi.cos(),
        );
    }
}
