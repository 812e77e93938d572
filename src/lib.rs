//! A homogeneous clip-space polygon clipper and an ellipsoid collision engine.
//!
//! The two halves share one set of geometry types:
//!
//! - [`clipper`] cuts convex polygons against the six planes of the clip
//!   volume, interpolating every vertex attribute as it goes.
//! - [`collision`] sweeps an axis-aligned ellipsoid through a polygon soup
//!   and either stops it at the first contact or slides it along whatever
//!   it hits.
//!
//! Around them sit a small frame [`pipeline`], a first-person [`viewer`],
//! and procedural [`scene`]s used by the walkthrough binary, tests and
//! benchmarks.
//!
//! # Quick Start
//!
//! ```
//! use ellipsy::prelude::*;
//!
//! let world = World::new(RoomBuilder::default().build());
//! let mut viewer = Viewer::new(ViewerConfig::default(), Vec3::new(0.0, 100.0, 0.0));
//! for _ in 0..120 {
//!     viewer.animate(&world, &ViewerInput::default());
//! }
//! assert!((viewer.position().y - 30.0).abs() < 0.1);
//! ```

// Core
pub mod clipper;
pub mod collision;
pub mod geometry;
pub mod math;

// Frame driving
pub mod camera;
pub mod pipeline;
pub mod projection;
pub mod scene;
pub mod viewer;
pub mod world;

pub mod error;

// Re-export commonly needed types at crate root for convenience
pub use collision::{collide_and_slide, collide_and_stop, Collider, CollisionConfig, SlideResult};
pub use error::ConfigError;
pub use geometry::{Polygon, Ray};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use ellipsy::prelude::*;
/// ```
pub mod prelude {
    // Clipping
    pub use crate::clipper::{classify, ClipSpaceClipper, Visibility};

    // Collision
    pub use crate::collision::{
        collide_and_slide, collide_and_stop, trace, Collider, CollisionConfig, CollisionKind,
        CollisionRecord, SlideResult,
    };

    // Geometry
    pub use crate::geometry::{Plane, Polygon, Ray, Vertex};

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Frame driving
    pub use crate::camera::ViewerCamera;
    pub use crate::pipeline::{FrameStats, Pipeline, PolygonSink, ProjectedVertex, Viewport};
    pub use crate::projection::{Projection, ProjectionKind};
    pub use crate::scene::RoomBuilder;
    pub use crate::viewer::{CollisionMode, Viewer, ViewerConfig, ViewerInput};
    pub use crate::world::World;

    pub use crate::error::ConfigError;
}
