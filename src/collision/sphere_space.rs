//! The ellipsoid-to-unit-sphere coordinate change.
//!
//! Dividing every world coordinate by the ellipsoid's radius vector turns
//! the ellipsoid into a unit sphere, so one swept-sphere test covers any
//! radius. Queries convert on entry and convert back on exit; nothing else
//! in the crate knows about this space.

use crate::geometry::{Polygon, Ray};
use crate::math::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereSpace {
    radius: Vec3,
}

impl SphereSpace {
    /// `radius` components must be positive.
    pub fn new(radius: Vec3) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> Vec3 {
        self.radius
    }

    /// World point or vector into sphere space.
    pub fn to_sphere(&self, v: Vec3) -> Vec3 {
        v.div_elem(self.radius)
    }

    /// Sphere-space point or vector back into world space.
    pub fn to_world(&self, v: Vec3) -> Vec3 {
        v.mul_elem(self.radius)
    }

    pub fn ray_to_sphere(&self, ray: &Ray) -> Ray {
        Ray::new(self.to_sphere(ray.origin), self.to_sphere(ray.direction))
    }

    /// Scaled copies of `polygons` with their planes recomputed.
    ///
    /// Order is preserved so indices still name the caller's polygons.
    pub fn polygons_to_sphere(&self, polygons: &[Polygon]) -> Vec<Polygon> {
        polygons
            .iter()
            .map(|p| p.map_world(|w| self.to_sphere(w)))
            .collect()
    }
}
