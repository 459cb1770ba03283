//! The rotating field that owns every body, plus the sun's path.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::body::Body;
use crate::{Updatable, ROTATION_STEP, SUN_RADIUS, SUN_RATE};

/// The spinning cluster of bodies at the heart of the scene.
///
/// Strict ownership: bodies are created with the field and dropped with it.
/// Body positions stay in unrotated orbit space; the spin applies to the
/// cluster as a whole and composes at draw time.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyField {
    /// Owned bodies, in spawn order.
    pub bodies: Vec<Body>,
    /// Accumulated spin about the world Y axis, wrapped into `[0, 2π)`.
    pub rotation: f32,
}

impl BodyField {
    /// Generate a field of `count` freshly sampled bodies.
    #[must_use]
    pub fn generate(count: usize, rng: &mut impl Rng) -> Self {
        let bodies = (0..count).map(|_| Body::spawn(rng)).collect();
        Self {
            bodies,
            rotation: 0.0,
        }
    }

    /// Replace every body with a fresh sample and restart the spin.
    pub fn respawn(&mut self, rng: &mut impl Rng) {
        let count = self.bodies.len();
        self.bodies.clear();
        self.bodies.extend((0..count).map(|_| Body::spawn(rng)));
        self.rotation = 0.0;
    }
}

impl Updatable for BodyField {
    /// Advance the spin by one fixed step, then move every body to time `t`.
    ///
    /// The step is per call, not per elapsed millisecond, and the angle
    /// wraps into `[0, 2π)`.
    fn update(&mut self, t: f32) {
        self.rotation = (self.rotation + ROTATION_STEP).rem_euclid(TAU);
        for body in &mut self.bodies {
            body.update(t);
        }
    }
}

/// Position of the directional light at scene time `t` (milliseconds).
///
/// A circle of radius [`SUN_RADIUS`] in the XY plane, starting at the top.
/// The sun follows the same clock as the field but is not part of it and
/// does not pick up the field's spin.
#[must_use]
pub fn sun_position(t: f32) -> Vec3 {
    Vec3::new(
        (t * SUN_RATE).sin() * SUN_RADIUS,
        (t * SUN_RATE).cos() * SUN_RADIUS,
        0.0,
    )
}
