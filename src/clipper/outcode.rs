//! Per-vertex frustum outcodes.
//!
//! Each bit marks one clip-volume half-space the vertex violates. ANDing the
//! codes of a polygon's vertices finds planes every vertex is behind (the
//! polygon is invisible); ORing them finds whether any vertex is outside at
//! all (the polygon needs clipping).

use std::ops::{BitAnd, BitOr};

use crate::geometry::Polygon;
use crate::math::Vec4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Outcode(pub u8);

impl Outcode {
    pub const INSIDE: Self = Self(0);
    /// x > w
    pub const RIGHT: Self = Self(1 << 0);
    /// x < -w
    pub const LEFT: Self = Self(1 << 1);
    /// y > w
    pub const TOP: Self = Self(1 << 2);
    /// y < -w
    pub const BOTTOM: Self = Self(1 << 3);
    /// z < 0
    pub const NEAR: Self = Self(1 << 4);
    /// z > w
    pub const FAR: Self = Self(1 << 5);
    pub const ALL: Self = Self(0b11_1111);

    /// Computes the outcode of a clip-space position.
    pub fn of(p: &Vec4) -> Self {
        let mut code = Self::INSIDE;
        if p.x > p.w {
            code = code | Self::RIGHT;
        }
        if p.x < -p.w {
            code = code | Self::LEFT;
        }
        if p.y > p.w {
            code = code | Self::TOP;
        }
        if p.y < -p.w {
            code = code | Self::BOTTOM;
        }
        if p.z < 0.0 {
            code = code | Self::NEAR;
        }
        if p.z > p.w {
            code = code | Self::FAR;
        }
        code
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Outcode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for Outcode {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// How a polygon sits relative to the clip volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Every vertex is inside; no clipping needed.
    Inside,
    /// Straddles at least one plane; must be clipped.
    Partial,
    /// Every vertex is outside one common plane; cull it.
    Outside,
}

/// Classifies a polygon from the outcodes of its clip-space vertices.
pub fn classify(polygon: &Polygon) -> Visibility {
    let (all, any) = polygon
        .vertices()
        .iter()
        .map(|v| Outcode::of(&v.clip))
        .fold((Outcode::ALL, Outcode::INSIDE), |(all, any), code| {
            (all & code, any | code)
        });

    if polygon.vertex_count() == 0 || !all.is_empty() {
        Visibility::Outside
    } else if any.is_empty() {
        Visibility::Inside
    } else {
        Visibility::Partial
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vertex;
    use crate::math::Vec2;

    fn clip_polygon(points: [Vec4; 3]) -> Polygon {
        Polygon::new(
            points
                .into_iter()
                .map(|p| Vertex::from_clip(p, Vec2::ZERO))
                .collect(),
        )
    }

    #[test]
    fn outcode_bits_match_half_spaces() {
        assert_eq!(Outcode::of(&Vec4::new(0.0, 0.0, 0.5, 1.0)), Outcode::INSIDE);
        assert_eq!(Outcode::of(&Vec4::new(2.0, 0.0, 0.5, 1.0)), Outcode::RIGHT);
        let code = Outcode::of(&Vec4::new(-2.0, 3.0, -1.0, 1.0));
        assert!(code.contains(Outcode::LEFT | Outcode::TOP | Outcode::NEAR));
        assert!(!code.contains(Outcode::FAR));
    }

    #[test]
    fn classify_inside_partial_outside() {
        let inside = clip_polygon([
            Vec4::new(-0.5, -0.5, 0.5, 1.0),
            Vec4::new(0.5, -0.5, 0.5, 1.0),
            Vec4::new(0.0, 0.5, 0.5, 1.0),
        ]);
        let partial = clip_polygon([
            Vec4::new(-0.5, -0.5, 0.5, 1.0),
            Vec4::new(3.0, -0.5, 0.5, 1.0),
            Vec4::new(0.0, 0.5, 0.5, 1.0),
        ]);
        // Outside in different planes but never all behind one: still partial.
        let straddling = clip_polygon([
            Vec4::new(-3.0, 0.0, 0.5, 1.0),
            Vec4::new(3.0, 0.0, 0.5, 1.0),
            Vec4::new(0.0, 3.0, 0.5, 1.0),
        ]);
        let outside = clip_polygon([
            Vec4::new(2.0, -0.5, 0.5, 1.0),
            Vec4::new(3.0, -0.5, 0.5, 1.0),
            Vec4::new(2.5, 0.5, 0.5, 1.0),
        ]);
        assert_eq!(classify(&inside), Visibility::Inside);
        assert_eq!(classify(&partial), Visibility::Partial);
        assert_eq!(classify(&straddling), Visibility::Partial);
        assert_eq!(classify(&outside), Visibility::Outside);
    }
}
