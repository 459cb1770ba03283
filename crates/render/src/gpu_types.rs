//! GPU-compatible type definitions for rendering
//!
//! This module contains the GPU buffer structures that are used to pass
//! scene data to the WGSL shaders. All types must be Pod and properly
//! aligned to 16 bytes.

use std::f32::consts::FRAC_1_PI;

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use motion::{sun_position, Body, Look};

use crate::camera::Camera;
use crate::color;

/// Sky tint of the hemisphere fill light.
const HEMI_SKY: u32 = 0x7799ee;
/// Ground tint of the hemisphere fill light.
const HEMI_GROUND: u32 = 0x400000;
/// Fill light strength.
const HEMI_INTENSITY: f32 = 5.0;
/// Sun strength.
const SUN_INTENSITY: f32 = 2.0;

/// Uniform buffer carrying the camera matrices.
///
/// The eye position rides along for the fresnel term of the glass material.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct CameraGpu {
    /// Combined view projection matrix used for rendering
    pub view_proj: [[f32; 4]; 4],
    /// Camera position in world coordinates
    pub eye: [f32; 4],
}

impl From<&Camera> for CameraGpu {
    fn from(camera: &Camera) -> Self {
        Self {
            view_proj: camera.build_view_projection_matrix().to_cols_array_2d(),
            eye: [camera.eye.x, camera.eye.y, camera.eye.z, 1.0],
        }
    }
}

/// Per-instance data for one body, rewritten every frame.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct BodyGpu {
    /// Transform matrix (field spin, orbit position and fixed orientation)
    pub model: [[f32; 4]; 4],
    /// Linear albedo; untinted white for glass
    pub color: [f32; 4],
}

impl BodyGpu {
    /// Build the instance for `body` under the field's current spin.
    ///
    /// The model matrix contains rotation and translation only, so the
    /// shader can rotate normals with it directly.
    pub fn from_body(body: &Body, field_rotation: f32) -> Self {
        let model = Mat4::from_rotation_y(field_rotation)
            * Mat4::from_rotation_translation(body.orientation, body.position);
        let color = match body.look {
            Look::Toon { color } => {
                let [r, g, b] = color::to_linear(color);
                [r, g, b, 1.0]
            }
            Look::Glass => [1.0, 1.0, 1.0, 1.0],
        };
        Self {
            model: model.to_cols_array_2d(),
            color,
        }
    }
}

/// Uniform buffer describing the two scene lights.
///
/// Intensities and the lambert normalization are folded into the colors at
/// upload so the shader only multiplies.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct LightsGpu {
    /// Unit direction from the origin toward the sun
    pub sun_dir: [f32; 4],
    /// Sun color, pre-scaled
    pub sun_color: [f32; 4],
    /// Hemisphere tint for upward-facing normals, pre-scaled
    pub hemi_sky: [f32; 4],
    /// Hemisphere tint for downward-facing normals, pre-scaled
    pub hemi_ground: [f32; 4],
}

impl LightsGpu {
    /// Light state at scene time `t` (milliseconds).
    pub fn at(t: f32) -> Self {
        let dir = sun_position(t).normalize();
        Self {
            sun_dir: [dir.x, dir.y, dir.z, 0.0],
            sun_color: scaled([1.0, 1.0, 1.0], SUN_INTENSITY),
            hemi_sky: scaled(color::to_linear(color::srgb_from_hex(HEMI_SKY)), HEMI_INTENSITY),
            hemi_ground: scaled(
                color::to_linear(color::srgb_from_hex(HEMI_GROUND)),
                HEMI_INTENSITY,
            ),
        }
    }
}

fn scaled(rgb: [f32; 3], intensity: f32) -> [f32; 4] {
    let k = intensity * FRAC_1_PI;
    [rgb[0] * k, rgb[1] * k, rgb[2] * k, 1.0]
}
