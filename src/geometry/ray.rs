use crate::math::vec3::Vec3;

/// A motion segment: an origin plus a direction whose length is the travel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn end(&self) -> Vec3 {
        self.origin + self.direction
    }

    /// Point at fraction `t` of the direction vector.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    pub fn length(&self) -> f32 {
        self.direction.magnitude()
    }
}
