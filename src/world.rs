//! The polygon soup a viewer walks through.
//!
//! Besides holding the polygons, the world can be shaken: [`World::perturb`]
//! nudges vertices at random and [`World::jumble`] keeps them wobbling around
//! their authored positions. Both recompute planes, so collision always sees
//! the geometry as it currently is.

use rand::Rng;

use crate::geometry::Polygon;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct World {
    polygons: Vec<Polygon>,
    /// Authored geometry, restored by [`World::reset`].
    backup: Vec<Polygon>,
}

impl World {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self {
            backup: polygons.clone(),
            polygons,
        }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Moves the first three vertices of every polygon by up to
    /// `amount / 2` on each axis.
    ///
    /// Only the plane-defining vertices move, so polygons with more corners
    /// can end up non-planar. Collision still uses the recomputed plane.
    pub fn perturb<R: Rng + ?Sized>(&mut self, rng: &mut R, amount: f32) {
        for polygon in &mut self.polygons {
            for v in polygon.vertices_mut().iter_mut().take(3) {
                v.world.x += (rng.gen::<f32>() - 0.5) * amount;
                v.world.y += (rng.gen::<f32>() - 0.5) * amount;
                v.world.z += (rng.gen::<f32>() - 0.5) * amount;
            }
            polygon.recalc_plane();
        }
    }

    /// Rotates every vertex's displacement from its authored position and
    /// resets its length to `scale`.
    ///
    /// The rotation angles come from the vertex's own coordinates, so the
    /// motion is deterministic but looks random. Undisplaced vertices stay
    /// where they are.
    pub fn jumble(&mut self, scale: f32) {
        if scale == 0.0 {
            return;
        }
        for (polygon, authored) in self.polygons.iter_mut().zip(&self.backup) {
            for (v, original) in polygon.vertices_mut().iter_mut().zip(authored.vertices()) {
                let angles = v.world;
                let offset = (v.world - original.world)
                    .rotate_x(angles.x % 0.54321)
                    .rotate_y(angles.y % 0.4321)
                    .rotate_z(angles.z % 0.321)
                    .with_length(scale);
                v.world = original.world + offset;
            }
            polygon.recalc_plane();
        }
    }

    /// Restores the authored geometry.
    pub fn reset(&mut self) {
        self.polygons.clone_from(&self.backup);
    }

    /// Assigns planar texture coordinates to the live polygons and the
    /// backup.
    pub fn apply_planar_texture(&mut self, u_scale: f32, v_scale: f32) {
        for polygon in self.polygons.iter_mut().chain(self.backup.iter_mut()) {
            polygon.apply_planar_texture(u_scale, v_scale);
        }
    }
}
