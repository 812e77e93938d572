//! Geometry primitives shared by the clipper and the collision engine.

pub mod aabb;
pub mod plane;
pub mod polygon;
pub mod ray;
pub mod segment;
pub mod vertex;

pub use aabb::Aabb;
pub use plane::Plane;
pub use polygon::Polygon;
pub use ray::Ray;
pub use segment::{closest_point_on_segment, SegmentFeature};
pub use vertex::Vertex;
