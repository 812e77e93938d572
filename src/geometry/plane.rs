use crate::math::vec3::Vec3;

/// An infinite plane stored as a unit normal and a signed offset.
///
/// A point `p` lies on the plane when `normal.dot(p) + d == 0`. Points on
/// the side the normal points toward have positive distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub d: f32,
}

impl Plane {
    pub fn new(normal: Vec3, d: f32) -> Self {
        Self { normal, d }
    }

    /// Builds the plane through `point` facing along `normal`.
    ///
    /// `normal` is normalized here; a zero normal yields `None`.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Option<Self> {
        let normal = normal.try_normalize()?;
        Some(Self {
            normal,
            d: -normal.dot(point),
        })
    }

    /// Builds the plane through three points.
    ///
    /// The normal is `(b - a) x (c - a)`, so the winding of the points picks
    /// the front side. Collinear or coincident points yield `None`.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Option<Self> {
        Self::from_point_normal(a, (b - a).cross(c - a))
    }

    /// Signed distance from `point` to the plane.
    #[inline]
    pub fn distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.d
    }

    /// Orthogonal projection of `point` onto the plane.
    pub fn project(&self, point: Vec3) -> Vec3 {
        point - self.normal * self.distance(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn winding_selects_front_side() {
        let plane = Plane::from_points(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
        )
        .unwrap();
        assert_relative_eq!(plane.normal, Vec3::UP, epsilon = 1e-6);
        assert_relative_eq!(plane.distance(Vec3::new(4.0, 3.0, -2.0)), 3.0, epsilon = 1e-6);
    }

    #[test]
    fn collinear_points_have_no_plane() {
        let p = Plane::from_points(Vec3::ZERO, Vec3::ONE, Vec3::splat(2.0));
        assert!(p.is_none());
    }

    #[test]
    fn project_lands_on_plane() {
        let plane = Plane::from_point_normal(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, 2.0, 0.0))
            .unwrap();
        let projected = plane.project(Vec3::new(1.0, 9.0, -3.0));
        assert_relative_eq!(projected, Vec3::new(1.0, 5.0, -3.0), epsilon = 1e-6);
        assert_relative_eq!(plane.distance(Vec3::ZERO), -5.0, epsilon = 1e-6);
    }
}
