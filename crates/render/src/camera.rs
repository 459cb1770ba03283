//! Camera and orbit interaction for the scene.
//!
//! The camera circles the origin; a left drag orbits the eye and the scroll
//! wheel moves it along the view axis. There is no free-fly mode, the scene
//! is a diorama watched from outside its cluster.

use glam::{Mat4, Vec3};
use winit::dpi::PhysicalPosition;

/// Perspective camera aimed at the origin.
pub struct Camera {
    /// Camera position
    pub eye: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    /// Up vector
    pub up: Vec3,
    /// Render target aspect ratio
    pub aspect: f32,
    /// Field of view in radians
    pub fovy: f32,
    /// Near clipping plane distance
    pub znear: f32,
    /// Far clipping plane distance
    pub zfar: f32,
}

impl Camera {
    /// Create the scene camera: a 75 degree lens four units back from the
    /// origin, inside the background shell.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 4.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: width as f32 / height.max(1) as f32,
            fovy: 75.0f32.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    /// Update the aspect ratio when the window is resized.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Computes a view projection matrix from the camera parameters.
    pub fn build_view_projection_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }

    /// Rotate the eye around the origin from a mouse drag delta in pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        let rotation = Mat4::from_rotation_y(dx * 0.005) * Mat4::from_rotation_x(dy * 0.005);
        self.eye = rotation.transform_point3(self.eye);
    }

    /// Move the eye along the view axis, never through the origin.
    pub fn zoom(&mut self, scroll: f32) {
        let new_eye = self.eye + self.eye.normalize() * scroll;
        if new_eye.length_squared() > 0.01 {
            self.eye = new_eye;
        }
    }
}

/// Mouse state backing the orbit interaction.
pub struct CameraState {
    /// Whether the left button is currently held
    pub mouse_pressed: bool,
    /// Last observed cursor position
    pub last_mouse_pos: PhysicalPosition<f64>,
}

impl CameraState {
    pub fn new() -> Self {
        Self {
            mouse_pressed: false,
            last_mouse_pos: PhysicalPosition::new(0.0, 0.0),
        }
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new()
    }
}
