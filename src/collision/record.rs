use crate::geometry::Plane;

/// Which feature of a polygon the sphere ran into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollisionKind {
    #[default]
    None,
    /// The polygon's face.
    Surface,
    /// The interior of one of its edges.
    Edge,
    /// One of its corners.
    Point,
    /// The sphere already overlapped the polygon when the motion began.
    Embedded,
}

/// One candidate contact between the swept sphere and a polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionRecord {
    /// Index of the polygon in the caller's slice.
    pub collider: usize,
    /// Sphere-space plane through the contact point, facing the sphere centre.
    pub plane: Plane,
    /// Time of impact as a fraction of the ray direction, in `[0, 1]`.
    pub distance: f32,
    pub kind: CollisionKind,
}
