//! Perspective projection parameters.
//!
//! The [`Projection`] struct is the single source of truth for the
//! perspective parameters (FOV, aspect ratio, near/far planes). Both matrix
//! forms it can produce map view depth to clip `z` in `0..w`, which is the
//! range the clip-space clipper keeps.

use crate::math::mat4::Mat4;

/// Which perspective matrix to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectionKind {
    /// Blinn's matrix with `w` scaled by `sin(fov / 2)`.
    #[default]
    Blinn,
    /// The Direct3D left-handed matrix with `w` equal to view depth.
    Direct3D,
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians.
    fov_y: f32,
    /// Aspect ratio (width / height).
    aspect_ratio: f32,
    /// Near clipping plane distance.
    z_near: f32,
    /// Far clipping plane distance.
    z_far: f32,
    kind: ProjectionKind,
}

impl Default for Projection {
    fn default() -> Self {
        Self::from_degrees(60.0, 1.0, 1.0, 10_000.0)
    }
}

impl Projection {
    /// Creates a new projection with the given parameters.
    ///
    /// # Arguments
    /// * `fov_y` - Vertical field of view in radians
    /// * `aspect_ratio` - Width divided by height
    /// * `z_near` - Near clipping plane distance (must be > 0)
    /// * `z_far` - Far clipping plane distance (must be > z_near)
    pub fn new(fov_y: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            fov_y,
            aspect_ratio,
            z_near,
            z_far,
            kind: ProjectionKind::default(),
        }
    }

    /// Creates a projection from degrees instead of radians.
    pub fn from_degrees(fov_y_degrees: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self::new(fov_y_degrees.to_radians(), aspect_ratio, z_near, z_far)
    }

    pub fn with_kind(mut self, kind: ProjectionKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    pub fn kind(&self) -> ProjectionKind {
        self.kind
    }

    /// Updates the aspect ratio (typically after a viewport change).
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Generates the left-handed perspective projection matrix.
    pub fn matrix(&self) -> Mat4 {
        match self.kind {
            ProjectionKind::Blinn => {
                Mat4::perspective_blinn(self.fov_y, self.aspect_ratio, self.z_near, self.z_far)
            }
            ProjectionKind::Direct3D => {
                Mat4::perspective_d3d(self.fov_y, self.aspect_ratio, self.z_near, self.z_far)
            }
        }
    }
}
