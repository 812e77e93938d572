//! Closest-point queries on line segments.

use crate::math::vec3::Vec3;

/// Where on a segment a closest-point query landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentFeature {
    /// Strictly between the endpoints.
    Interior,
    /// Clamped to one of the endpoints.
    Endpoint,
}

/// Closest point to `p` on the segment `a..b`.
///
/// Degenerate segments (`a == b`) report `a` as an endpoint hit.
pub fn closest_point_on_segment(a: Vec3, b: Vec3, p: Vec3) -> (Vec3, SegmentFeature) {
    let ab = b - a;
    let Some(dir) = ab.try_normalize() else {
        return (a, SegmentFeature::Endpoint);
    };

    let t = dir.dot(p - a);
    if t <= 0.0 {
        return (a, SegmentFeature::Endpoint);
    }
    if t >= ab.magnitude() {
        return (b, SegmentFeature::Endpoint);
    }
    (a + dir * t, SegmentFeature::Interior)
}
