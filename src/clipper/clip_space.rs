//! Clip-space clipping against the homogeneous view volume.
//!
//! Clipping occurs after projection (in homogeneous clip space), before the
//! perspective divide. The clip volume is defined by:
//!
//! ```text
//! -w <= x <= w
//! -w <= y <= w
//!  0 <= z <= w   (Direct3D-style depth range)
//! ```
//!
//! The planes are fixed, so nothing needs rebuilding when the projection
//! changes. Polygons are clipped against near, far, left, right, top and
//! bottom in that order, each stage consuming the previous stage's output.

use crate::geometry::{Polygon, Vertex};
use crate::math::Vec4;

/// The 6 planes of the canonical clip volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipPlane {
    /// Near plane: z >= 0
    Near,
    /// Far plane: z <= w
    Far,
    /// Left plane: x >= -w
    Left,
    /// Right plane: x <= w
    Right,
    /// Top plane: y <= w
    Top,
    /// Bottom plane: y >= -w
    Bottom,
}

impl ClipPlane {
    /// Clipping order used by [`ClipSpaceClipper`].
    pub const ALL: [ClipPlane; 6] = [
        ClipPlane::Near,
        ClipPlane::Far,
        ClipPlane::Left,
        ClipPlane::Right,
        ClipPlane::Top,
        ClipPlane::Bottom,
    ];

    /// Returns true if `p` lies in this plane's rejected half-space.
    pub fn is_outside(&self, p: &Vec4) -> bool {
        match self {
            Self::Near => p.z < 0.0,
            Self::Far => p.z > p.w,
            Self::Left => p.x < -p.w,
            Self::Right => p.x > p.w,
            Self::Top => p.y > p.w,
            Self::Bottom => p.y < -p.w,
        }
    }

    /// Parameter along `on -> off` at which the edge meets this plane.
    ///
    /// `on` is the vertex inside the half-space, `off` the one outside.
    pub fn delta(&self, on: &Vec4, off: &Vec4) -> f32 {
        match self {
            Self::Near => -on.z / (off.z - on.z),
            Self::Far => (on.w - on.z) / ((off.z + on.w) - (on.z + off.w)),
            Self::Left => (-on.x - on.w) / (off.w - on.w + off.x - on.x),
            Self::Right => (on.x - on.w) / (off.w - on.w - off.x + on.x),
            Self::Top => (on.y - on.w) / (off.w - on.w - off.y + on.y),
            Self::Bottom => (-on.y - on.w) / (off.w - on.w + off.y - on.y),
        }
    }

    /// New vertex where the edge `on -> off` crosses this plane.
    fn intersect(&self, on: &Vertex, off: &Vertex) -> Vertex {
        on.lerp(off, self.delta(&on.clip, &off.clip))
    }

    /// Clip a vertex ring against this plane (one Sutherland-Hodgman pass).
    pub fn clip_vertices(&self, vertices: &[Vertex]) -> Vec<Vertex> {
        let count = vertices.len();
        let mut output = Vec::with_capacity(count + 2);

        for (i, current) in vertices.iter().enumerate() {
            let next = &vertices[(i + 1) % count];

            let code = self.is_outside(&current.clip) as u8 | (self.is_outside(&next.clip) as u8) << 1;
            match code {
                // Both inside
                0 => output.push(*current),
                // Entering: only the crossing survives
                1 => output.push(self.intersect(next, current)),
                // Leaving: keep current, then the crossing
                2 => {
                    output.push(*current);
                    output.push(self.intersect(current, next));
                }
                // Both outside
                _ => {}
            }
        }

        output
    }
}

/// Clips polygons against the canonical clip-space volume.
///
/// Stateless. Callers are expected to screen polygons with outcodes first so
/// that only partially visible polygons reach the clipper.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClipSpaceClipper;

impl ClipSpaceClipper {
    pub fn new() -> Self {
        Self
    }

    /// Clip a polygon against all 6 planes.
    ///
    /// Returns `None` as soon as any stage leaves fewer than 3 vertices; later
    /// planes are not visited. The input polygon is left untouched.
    pub fn clip_polygon(&self, polygon: &Polygon) -> Option<Polygon> {
        let mut vertices = polygon.vertices().to_vec();

        for plane in ClipPlane::ALL {
            vertices = plane.clip_vertices(&vertices);
            if vertices.len() < 3 {
                return None;
            }
        }

        Some(Polygon::new(vertices))
    }

    /// Clip `polygon` in place, returning false when it was clipped away.
    ///
    /// A rejected polygon is left unmodified.
    pub fn clip_in_place(&self, polygon: &mut Polygon) -> bool {
        match self.clip_polygon(polygon) {
            Some(clipped) => {
                *polygon = clipped;
                true
            }
            None => false,
        }
    }
}
