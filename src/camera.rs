//! First-person viewing direction.
//!
//! # Coordinate System
//!
//! Uses a **left-handed** coordinate system:
//! - X: positive right
//! - Y: positive up
//! - Z: positive forward (into screen)
//!
//! # Orientation
//!
//! Orientation is stored as yaw/pitch angles and converted to a rotation
//! matrix when needed. The camera has no position of its own; the viewer
//! owns the position and passes the eye point in when building the view
//! matrix.
//!
//! - **Yaw**: Rotation around Y-axis (horizontal look, positive = look right)
//! - **Pitch**: Rotation around X-axis (vertical look, positive = look up)

use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

/// Yaw/pitch orientation for a walking or flying viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerCamera {
    yaw: f32,   // Rotation around Y-axis (radians)
    pitch: f32, // Rotation around X-axis (radians)

    pitch_limit: f32,
}

impl Default for ViewerCamera {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl ViewerCamera {
    /// Creates a camera with the given yaw and pitch in radians.
    pub fn new(yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            yaw: 0.0,
            pitch: 0.0,
            pitch_limit: 89.0_f32.to_radians(),
        };
        camera.rotate(yaw, pitch);
        camera
    }

    /// Builds the rotation matrix from yaw and pitch.
    ///
    /// Order: Yaw (Y) * Pitch (X). Yaw is negated so positive yaw turns
    /// right in a left-handed frame.
    fn rotation_matrix(&self) -> Mat4 {
        Mat4::rotation_y(-self.yaw) * Mat4::rotation_x(self.pitch)
    }

    /// Rotates the camera by yaw (horizontal) and pitch (vertical) deltas.
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw = (self.yaw + yaw_delta).rem_euclid(std::f32::consts::TAU);
        self.pitch = (self.pitch + pitch_delta).clamp(-self.pitch_limit, self.pitch_limit);
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Unit view direction. This is +Z transformed by the rotation matrix.
    pub fn forward(&self) -> Vec3 {
        let rot = self.rotation_matrix();
        Vec3::new(rot.get(0, 2), rot.get(1, 2), rot.get(2, 2)).normalize()
    }

    /// View direction with pitch ignored, for walking.
    pub fn flat_forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, self.yaw.cos())
    }

    /// Unit right direction. This is +X transformed by the rotation matrix.
    pub fn right(&self) -> Vec3 {
        let rot = self.rotation_matrix();
        Vec3::new(rot.get(0, 0), rot.get(1, 0), rot.get(2, 0)).normalize()
    }

    /// World-to-view transform for an eye at `eye`.
    pub fn view_matrix(&self, eye: Vec3) -> Mat4 {
        Mat4::look_at_lh(eye, eye + self.forward(), Vec3::UP)
    }
}
