use crate::math::{Vec2, Vec3, Vec4};

/// A polygon corner carrying every per-vertex attribute the core touches.
///
/// `world` is the authored position, `clip` is filled in by the transform
/// step before clipping, `texture` is interpolated along with `clip`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    pub world: Vec3,
    pub clip: Vec4,
    pub texture: Vec2,
}

impl Vertex {
    pub fn new(world: Vec3, texture: Vec2) -> Self {
        Self {
            world,
            clip: Vec4::from_vec3(world, 1.0),
            texture,
        }
    }

    /// A vertex that only has a clip-space position and texture coordinate.
    pub fn from_clip(clip: Vec4, texture: Vec2) -> Self {
        Self {
            world: clip.to_vec3(),
            clip,
            texture,
        }
    }

    /// Linearly interpolate all attributes between two vertices.
    /// Used when a polygon edge crosses a clipping plane.
    ///
    /// The clip position is an affine image of the world position, so the
    /// same `t` is exact for both.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            world: self.world.lerp(other.world, t),
            clip: self.clip.lerp(other.clip, t),
            texture: self.texture.lerp(other.texture, t),
        }
    }
}

impl From<Vec3> for Vertex {
    fn from(world: Vec3) -> Self {
        Self::new(world, Vec2::ZERO)
    }
}
