//! Convex planar polygons.

use super::aabb::Aabb;
use super::plane::Plane;
use super::segment::{closest_point_on_segment, SegmentFeature};
use super::vertex::Vertex;
use crate::math::{Vec2, Vec3};

/// A convex, planar polygon with a cached supporting plane.
///
/// The plane is derived from the first three world positions. It is `None`
/// when those are degenerate, in which case the polygon takes no part in
/// collision queries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vertex>,
    plane: Option<Plane>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        let mut polygon = Self {
            vertices,
            plane: None,
        };
        polygon.recalc_plane();
        polygon
    }

    /// Builds a polygon from world positions with zeroed texture coordinates.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vec3>,
    {
        Self::new(points.into_iter().map(Vertex::from).collect())
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Mutable access to the vertices.
    ///
    /// Call [`Polygon::recalc_plane`] after moving any world position.
    pub fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn plane(&self) -> Option<&Plane> {
        self.plane.as_ref()
    }

    /// Recomputes the cached plane from the first three world positions.
    pub fn recalc_plane(&mut self) {
        self.plane = match self.vertices.as_slice() {
            [a, b, c, ..] => Plane::from_points(a.world, b.world, c.world),
            _ => None,
        };
    }

    /// True when the polygon cannot take part in plane queries.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3 || self.plane.is_none()
    }

    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.vertices.iter().map(|v| v.world))
    }

    /// World-space edges in winding order, closing back to the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i].world, self.vertices[(i + 1) % n].world))
    }

    /// Returns a copy with every world position passed through `f` and the
    /// plane recomputed. Clip and texture attributes are carried unchanged.
    pub fn map_world<F>(&self, mut f: F) -> Self
    where
        F: FnMut(Vec3) -> Vec3,
    {
        Self::new(
            self.vertices
                .iter()
                .map(|v| Vertex {
                    world: f(v.world),
                    ..*v
                })
                .collect(),
        )
    }

    /// Tests whether `point`, assumed to lie on the plane, is inside the
    /// polygon boundary. Points within `epsilon` of an edge count as inside.
    pub fn contains_point(&self, point: Vec3, epsilon: f32) -> bool {
        let Some(plane) = self.plane else {
            return false;
        };
        self.edges().all(|(a, b)| {
            let inward = plane.normal.cross(b - a);
            match inward.try_normalize() {
                Some(inward) => inward.dot(point - a) >= -epsilon,
                None => true,
            }
        })
    }

    /// Closest point to `point` on the polygon's boundary, and whether it
    /// landed inside an edge or on a corner.
    pub fn closest_boundary_point(&self, point: Vec3) -> Option<(Vec3, SegmentFeature)> {
        self.edges()
            .map(|(a, b)| closest_point_on_segment(a, b, point))
            .min_by(|(p, _), (q, _)| {
                p.distance(point)
                    .partial_cmp(&q.distance(point))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// Closest point to `point` anywhere on the polygon's surface.
    pub fn closest_point(&self, point: Vec3, epsilon: f32) -> Option<Vec3> {
        let plane = self.plane?;
        let projected = plane.project(point);
        if self.contains_point(projected, epsilon) {
            Some(projected)
        } else {
            self.closest_boundary_point(projected).map(|(p, _)| p)
        }
    }

    /// Assigns texture coordinates by projecting world positions onto the
    /// two axes orthogonal to the plane's dominant axis.
    pub fn apply_planar_texture(&mut self, u_scale: f32, v_scale: f32) {
        let axis = self.plane.map_or(1, |p| p.normal.dominant_axis());
        for v in &mut self.vertices {
            let w = v.world;
            let (u, t) = match axis {
                0 => (w.z, w.y),
                1 => (w.x, w.z),
                _ => (w.x, w.y),
            };
            v.texture = Vec2::new(u * u_scale, t * v_scale);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Polygon {
        Polygon::from_points([
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(-1.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, -1.0),
        ])
    }

    #[test]
    fn plane_follows_winding() {
        let sq = square();
        assert_relative_eq!(sq.plane().unwrap().normal, Vec3::UP, epsilon = 1e-6);
    }

    #[test]
    fn contains_point_respects_edges() {
        let sq = square();
        assert!(sq.contains_point(Vec3::new(0.5, 0.0, -0.5), 1e-5));
        assert!(sq.contains_point(Vec3::new(1.0, 0.0, 0.0), 1e-5));
        assert!(!sq.contains_point(Vec3::new(1.5, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn closest_boundary_point_reports_feature() {
        let sq = square();
        let (p, feature) = sq.closest_boundary_point(Vec3::new(3.0, 0.0, 0.2)).unwrap();
        assert_relative_eq!(p, Vec3::new(1.0, 0.0, 0.2), epsilon = 1e-6);
        assert_eq!(feature, SegmentFeature::Interior);

        let (p, feature) = sq.closest_boundary_point(Vec3::new(3.0, 0.0, 3.0)).unwrap();
        assert_relative_eq!(p, Vec3::new(1.0, 0.0, 1.0), epsilon = 1e-6);
        assert_eq!(feature, SegmentFeature::Endpoint);
    }

    #[test]
    fn closest_point_projects_inside() {
        let sq = square();
        let p = sq.closest_point(Vec3::new(0.25, 4.0, 0.5), 1e-5).unwrap();
        assert_relative_eq!(p, Vec3::new(0.25, 0.0, 0.5), epsilon = 1e-6);
    }

    #[test]
    fn degenerate_polygon_has_no_plane() {
        let line = Polygon::from_points([Vec3::ZERO, Vec3::ONE, Vec3::splat(2.0)]);
        assert!(line.is_degenerate());
        assert!(!line.contains_point(Vec3::ZERO, 1e-5));
        let pair = Polygon::from_points([Vec3::ZERO, Vec3::ONE]);
        assert!(pair.is_degenerate());
    }

    #[test]
    fn planar_texture_uses_floor_axes() {
        let mut sq = square();
        sq.apply_planar_texture(0.5, 0.25);
        assert_relative_eq!(sq.vertices()[2].texture, Vec2::new(0.5, 0.25), epsilon = 1e-6);
    }
}
