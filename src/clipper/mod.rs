//! Polygon clipping in homogeneous clip space.
//!
//! - [`outcode`]: per-vertex outcodes used to decide whether a polygon is
//!   fully visible, fully culled, or needs clipping.
//! - [`clip_space`]: the six-plane Sutherland-Hodgman clipper itself.

pub mod clip_space;
pub mod outcode;

pub use clip_space::{ClipPlane, ClipSpaceClipper};
pub use outcode::{classify, Outcode, Visibility};
