//! Ellipsoid-versus-polygon collision.
//!
//! An axis-aligned ellipsoid with radius vector `radius` is swept along a
//! ray through a soup of convex polygons. Queries scale the world by
//! `1 / radius` so the ellipsoid becomes a unit sphere ([`sphere_space`]),
//! find the earliest contact ([`detect`]), and respond by stopping or
//! sliding ([`response`]).
//!
//! The free functions below use [`CollisionConfig::default`]; build a
//! [`Collider`] to change tolerances or the slide iteration bound.
//!
//! ```
//! use ellipsy::collision::collide_and_stop;
//! use ellipsy::geometry::{Polygon, Ray};
//! use ellipsy::math::Vec3;
//!
//! let floor = Polygon::from_points([
//!     Vec3::new(-50.0, 0.0, -50.0),
//!     Vec3::new(-50.0, 0.0, 50.0),
//!     Vec3::new(50.0, 0.0, 50.0),
//!     Vec3::new(50.0, 0.0, -50.0),
//! ]);
//! let ray = Ray::new(Vec3::new(0.0, 100.0, 0.0), Vec3::new(0.0, -1000.0, 0.0));
//! let rest = collide_and_stop(Vec3::new(15.0, 30.0, 15.0), &[floor], &ray);
//! assert!((rest.y - 30.0).abs() < 0.1);
//! ```

pub mod broadphase;
pub mod config;
pub mod detect;
pub mod record;
pub mod response;
pub mod sphere_space;

pub use broadphase::{gather_potential_colliders, potential_colliders};
pub use config::CollisionConfig;
pub use record::{CollisionKind, CollisionRecord};
pub use response::{Collider, SlideResult};
pub use sphere_space::SphereSpace;

use crate::geometry::{Polygon, Ray};
use crate::math::Vec3;

/// See [`Collider::collide_and_stop`].
pub fn collide_and_stop(radius: Vec3, polygons: &[Polygon], ray: &Ray) -> Vec3 {
    Collider::default().collide_and_stop(radius, polygons, ray)
}

/// See [`Collider::collide_and_slide`].
pub fn collide_and_slide(
    radius: Vec3,
    polygons: &[Polygon],
    ray: &Ray,
    filter_pulse_jumps: bool,
) -> SlideResult {
    Collider::default().collide_and_slide(radius, polygons, ray, filter_pulse_jumps)
}

/// See [`Collider::trace`].
pub fn trace(radius: Vec3, polygons: &[Polygon], ray: &Ray) -> Option<CollisionRecord> {
    Collider::default().trace(radius, polygons, ray)
}
