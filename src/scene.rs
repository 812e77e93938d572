//! Procedural test scenes.
//!
//! [`RoomBuilder`] produces a closed box room whose faces point inward,
//! plus optional ramps and solid blocks standing on its floor. Every
//! polygon is wound so its plane faces the walkable space.

use crate::geometry::Polygon;
use crate::math::Vec3;

/// A wedge rising along +x from `min.y` at `min.x` to `max.y` at `max.x`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Ramp {
    min: Vec3,
    max: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomBuilder {
    half_width: f32,
    half_depth: f32,
    height: f32,
    blocks: Vec<(Vec3, Vec3)>,
    ramps: Vec<Ramp>,
    texture_scale: (f32, f32),
}

impl Default for RoomBuilder {
    fn default() -> Self {
        Self::new(500.0, 500.0, 300.0)
    }
}

impl RoomBuilder {
    /// Room spanning `±half_width` in x, `±half_depth` in z and `0..height`
    /// in y.
    pub fn new(half_width: f32, half_depth: f32, height: f32) -> Self {
        Self {
            half_width,
            half_depth,
            height,
            blocks: Vec::new(),
            ramps: Vec::new(),
            texture_scale: (0.4, 0.4),
        }
    }

    /// The walkthrough room: a ramp, a step and a pillar.
    pub fn demo() -> Self {
        Self::default()
            .with_ramp(Vec3::new(-300.0, 0.0, 100.0), Vec3::new(-100.0, 60.0, 250.0))
            .with_step(Vec3::new(100.0, 0.0, 100.0), Vec3::new(250.0, 20.0, 250.0))
            .with_pillar(Vec3::new(0.0, 0.0, -200.0), 40.0, 300.0)
    }

    pub fn with_ramp(mut self, min: Vec3, max: Vec3) -> Self {
        self.ramps.push(Ramp { min, max });
        self
    }

    /// A solid box from `min` to `max`.
    pub fn with_step(mut self, min: Vec3, max: Vec3) -> Self {
        self.blocks.push((min, max));
        self
    }

    /// A square column standing on `base`.
    pub fn with_pillar(self, base: Vec3, half_size: f32, height: f32) -> Self {
        let half = Vec3::new(half_size, 0.0, half_size);
        self.with_step(base - half, base + half + Vec3::new(0.0, height, 0.0))
    }

    pub fn with_texture_scale(mut self, u_scale: f32, v_scale: f32) -> Self {
        self.texture_scale = (u_scale, v_scale);
        self
    }

    pub fn build(&self) -> Vec<Polygon> {
        let min = Vec3::new(-self.half_width, 0.0, -self.half_depth);
        let max = Vec3::new(self.half_width, self.height, self.half_depth);

        let mut polygons: Vec<Polygon> = box_faces(min, max)
            .into_iter()
            .map(Polygon::from_points)
            .collect();

        for &(min, max) in &self.blocks {
            // Outward faces; the underside sits on the floor.
            polygons.extend(box_faces(min, max).into_iter().skip(1).map(|mut face| {
                face.reverse();
                Polygon::from_points(face)
            }));
        }

        for ramp in &self.ramps {
            polygons.extend(ramp_faces(ramp));
        }

        let (u, v) = self.texture_scale;
        for polygon in &mut polygons {
            polygon.apply_planar_texture(u, v);
        }
        polygons
    }
}

/// The six faces of a box, wound to face its interior. Bottom face first.
fn box_faces(min: Vec3, max: Vec3) -> [[Vec3; 4]; 6] {
    let (x0, y0, z0) = (min.x, min.y, min.z);
    let (x1, y1, z1) = (max.x, max.y, max.z);
    let p = Vec3::new;
    [
        [p(x0, y0, z0), p(x0, y0, z1), p(x1, y0, z1), p(x1, y0, z0)],
        [p(x1, y1, z0), p(x1, y1, z1), p(x0, y1, z1), p(x0, y1, z0)],
        [p(x0, y0, z0), p(x0, y1, z0), p(x0, y1, z1), p(x0, y0, z1)],
        [p(x1, y0, z1), p(x1, y1, z1), p(x1, y1, z0), p(x1, y0, z0)],
        [p(x1, y0, z0), p(x1, y1, z0), p(x0, y1, z0), p(x0, y0, z0)],
        [p(x0, y0, z1), p(x0, y1, z1), p(x1, y1, z1), p(x1, y0, z1)],
    ]
}

fn ramp_faces(ramp: &Ramp) -> [Polygon; 4] {
    let (x0, y0, z0) = (ramp.min.x, ramp.min.y, ramp.min.z);
    let (x1, y1, z1) = (ramp.max.x, ramp.max.y, ramp.max.z);
    let p = Vec3::new;
    [
        // Slope
        Polygon::from_points([p(x0, y0, z0), p(x0, y0, z1), p(x1, y1, z1), p(x1, y1, z0)]),
        // High end
        Polygon::from_points([p(x1, y0, z0), p(x1, y1, z0), p(x1, y1, z1), p(x1, y0, z1)]),
        // Sides
        Polygon::from_points([p(x0, y0, z0), p(x1, y1, z0), p(x1, y0, z0)]),
        Polygon::from_points([p(x0, y0, z1), p(x1, y0, z1), p(x1, y1, z1)]),
    ]
}
