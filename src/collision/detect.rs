//! Swept unit sphere against polygons.
//!
//! Everything here works in sphere space: the moving body is a sphere of
//! radius 1 whose centre travels along a [`Ray`]. Times are fractions of the
//! ray's direction vector.

use super::config::CollisionConfig;
use super::record::{CollisionKind, CollisionRecord};
use crate::geometry::{Plane, Polygon, Ray};
use crate::math::Vec3;

/// First time at which `ray` enters the unit sphere around `center`.
///
/// Returns `Some(0.0)` when the ray starts inside the sphere and `None` when
/// it misses, points away, or has no length. The time may exceed 1; callers
/// decide what range is meaningful.
pub fn unit_sphere_intersection(center: Vec3, ray: &Ray) -> Option<f32> {
    let d = ray.direction;
    let m = ray.origin - center;

    let a = d.dot(d);
    if a <= f32::EPSILON {
        return None;
    }
    let b = m.dot(d);
    let c = m.dot(m) - 1.0;

    // Outside and heading away
    if c > 0.0 && b > 0.0 {
        return None;
    }

    let discriminant = b * b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / a;
    Some(t.max(0.0))
}

/// Returns the polygon point closest to `sphere_center` when that point is
/// inside the unit sphere.
pub fn is_embedded(polygon: &Polygon, sphere_center: Vec3, epsilon: f32) -> Option<Vec3> {
    let innermost = polygon.closest_point(sphere_center, epsilon)?;
    (sphere_center.distance(innermost) < 1.0 - epsilon).then_some(innermost)
}

/// Cheap rejection: can a sphere travelling along `ray` touch `plane` at all?
///
/// Planes are one-sided; a centre that starts behind the plane never
/// collides with it.
pub fn reaches_plane(plane: &Plane, ray: &Ray, epsilon: f32) -> bool {
    let start = plane.distance(ray.origin);
    let end = plane.distance(ray.end());
    start >= -epsilon && (start <= 1.0 + epsilon || end <= 1.0 + epsilon)
}

/// Collects a record for every polygon the swept sphere hits within the ray.
pub fn calc_colliders(
    polygons: &[Polygon],
    ray: &Ray,
    config: &CollisionConfig,
) -> Vec<CollisionRecord> {
    polygons
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            p.plane()
                .is_some_and(|plane| reaches_plane(plane, ray, config.epsilon))
        })
        .filter_map(|(index, p)| collide_polygon(index, p, ray, config))
        .collect()
}

/// Earliest valid contact. Ties go to the first record found.
pub fn trace_collision(records: &[CollisionRecord]) -> Option<CollisionRecord> {
    records
        .iter()
        .filter(|r| r.kind != CollisionKind::None && (0.0..=1.0).contains(&r.distance))
        .fold(None, |best: Option<CollisionRecord>, r| match best {
            Some(b) if b.distance <= r.distance => Some(b),
            _ => Some(*r),
        })
}

fn plane_through(point: Vec3, unit_normal: Vec3) -> Plane {
    Plane::new(unit_normal, -unit_normal.dot(point))
}

/// Narrow-phase test of one polygon.
fn collide_polygon(
    index: usize,
    polygon: &Polygon,
    ray: &Ray,
    config: &CollisionConfig,
) -> Option<CollisionRecord> {
    let plane = *polygon.plane()?;
    if polygon.vertex_count() < 3 {
        return None;
    }

    let eps = config.epsilon;
    let center = ray.origin;
    let velocity = ray.direction;
    let start = plane.distance(center);
    if start < -eps {
        return None;
    }
    let approach = plane.normal.dot(velocity);

    let record = |plane: Plane, distance: f32, kind: CollisionKind| CollisionRecord {
        collider: index,
        plane,
        distance,
        kind,
    };

    // Where the sphere first meets the supporting plane.
    let overlapping = start < 1.0 + eps;
    let (plane_point, time) = if overlapping {
        if let Some(innermost) = is_embedded(polygon, center, eps) {
            let normal = (center - innermost)
                .try_normalize()
                .unwrap_or(plane.normal);
            return Some(record(
                plane_through(innermost, normal),
                0.0,
                CollisionKind::Embedded,
            ));
        }
        (plane.project(center), 0.0)
    } else if approach < 0.0 {
        let t = (start - 1.0) / -approach;
        if t > 1.0 {
            return None;
        }
        (ray.point_at(t) - plane.normal, t)
    } else {
        return None;
    };

    if polygon.contains_point(plane_point, eps) {
        if overlapping && approach >= 0.0 {
            return None;
        }
        return Some(record(
            plane_through(plane_point, plane.normal),
            time,
            CollisionKind::Surface,
        ));
    }

    // The face was missed. Sweep the sphere against every edge and corner
    // and keep the earliest touch.
    let vertices = polygon.vertices();
    let edges = vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .filter_map(|(a, b)| sweep_edge(ray, a.world, b.world))
        .map(|(t, contact)| (t, contact, CollisionKind::Edge));
    let corners = vertices.iter().filter_map(|v| {
        let t = unit_sphere_intersection(v.world, ray)?;
        (t <= 1.0).then_some((t, v.world, CollisionKind::Point))
    });

    edges
        .chain(corners)
        .filter_map(|(t, contact, kind)| {
            let normal = (ray.point_at(t) - contact).try_normalize()?;
            (normal.dot(velocity) < 0.0).then_some((t, contact, normal, kind))
        })
        .fold(None, |best: Option<(f32, Vec3, Vec3, CollisionKind)>, hit| match best {
            Some(b) if b.0 <= hit.0 => Some(b),
            _ => Some(hit),
        })
        .map(|(t, contact, normal, kind)| record(plane_through(contact, normal), t, kind))
}

/// Earliest time in `[0, 1]` at which the unit sphere swept along `ray`
/// touches the segment `a..b` away from its endpoints, with the touched point.
fn sweep_edge(ray: &Ray, a: Vec3, b: Vec3) -> Option<(f32, Vec3)> {
    let edge = b - a;
    let to_start = a - ray.origin;
    let v = ray.direction;

    let edge_sq = edge.dot(edge);
    let edge_dot_v = edge.dot(v);
    let edge_dot_start = edge.dot(to_start);

    // Sphere against the infinite line through the edge.
    let qa = edge_dot_v * edge_dot_v - edge_sq * v.dot(v);
    let qb = 2.0 * (edge_sq * v.dot(to_start) - edge_dot_v * edge_dot_start);
    let qc = edge_sq * (1.0 - to_start.dot(to_start)) + edge_dot_start * edge_dot_start;
    let t = first_root(qa, qb, qc)?;
    if t > 1.0 {
        return None;
    }

    let f = (edge_dot_v * t - edge_dot_start) / edge_sq;
    (0.0..=1.0).contains(&f).then_some((t, a + edge * f))
}

/// Entry time of a quadratic interval: the smaller root if it is ahead,
/// zero if the interval already holds at `t = 0`.
fn first_root(a: f32, b: f32, c: f32) -> Option<f32> {
    if a.abs() <= f32::EPSILON {
        return None;
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    let x = (-b - root) / (2.0 * a);
    let y = (-b + root) / (2.0 * a);
    let (r0, r1) = (x.min(y), x.max(y));
    if r1 < 0.0 {
        return None;
    }
    Some(r0.max(0.0))
}
