//! Coarse polygon selection before the swept-sphere tests.

use crate::geometry::{Aabb, Polygon, Ray};
use crate::math::Vec3;

/// Box around `origin` that any polygon touched this frame must overlap.
///
/// The half-extent is `2·|direction| + radius` on every axis, loose enough
/// to cover slides that bend away from the original direction.
pub fn query_box(ray: &Ray, radius: Vec3) -> Aabb {
    let reach = ray.length() * 2.0;
    Aabb::around(ray.origin, radius + Vec3::splat(reach))
}

/// Indices of the polygons whose bounds overlap [`query_box`].
pub fn potential_colliders(polygons: &[Polygon], ray: &Ray, radius: Vec3) -> Vec<usize> {
    let query = query_box(ray, radius);
    polygons
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_degenerate())
        .filter(|(_, p)| p.bounds().is_some_and(|b| b.overlaps(&query)))
        .map(|(i, _)| i)
        .collect()
}

/// Clones of the polygons selected by [`potential_colliders`].
pub fn gather_potential_colliders(polygons: &[Polygon], ray: &Ray, radius: Vec3) -> Vec<Polygon> {
    potential_colliders(polygons, ray, radius)
        .into_iter()
        .map(|i| polygons[i].clone())
        .collect()
}
