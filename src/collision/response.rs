//! Turning the earliest contact into a new position.

use log::{debug, trace};

use super::config::CollisionConfig;
use super::detect::{calc_colliders, trace_collision};
use super::record::{CollisionKind, CollisionRecord};
use super::sphere_space::SphereSpace;
use crate::geometry::{Plane, Polygon, Ray};
use crate::math::Vec3;

/// Outcome of [`Collider::collide_and_slide`], in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SlideResult {
    /// Where the ellipsoid centre ended up.
    pub position: Vec3,
    /// The last leg of motion that was actually travelled or planned.
    /// Callers typically keep it as their velocity for the next frame.
    pub slide_direction: Vec3,
    /// Slide passes spent, at most `max_slide_iterations`.
    pub iterations: usize,
}

/// Ellipsoid-versus-polygons collision queries with a fixed configuration.
///
/// Every query takes world-space input, works internally in sphere space and
/// returns world-space output. Polygons are taken as one-sided; a polygon is
/// only solid from the side its plane normal points to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Collider {
    config: CollisionConfig,
}

impl Collider {
    pub fn new(config: CollisionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    /// The earliest contact along `ray`.
    ///
    /// The record's plane and distance are in sphere space; `collider`
    /// indexes into `polygons`.
    pub fn trace(&self, radius: Vec3, polygons: &[Polygon], ray: &Ray) -> Option<CollisionRecord> {
        let space = SphereSpace::new(radius);
        let scaled = space.polygons_to_sphere(polygons);
        trace_collision(&calc_colliders(&scaled, &space.ray_to_sphere(ray), &self.config))
    }

    /// Moves along `ray` until the first contact and stops just short of it.
    pub fn collide_and_stop(&self, radius: Vec3, polygons: &[Polygon], ray: &Ray) -> Vec3 {
        let space = SphereSpace::new(radius);
        let motion = space.ray_to_sphere(ray);
        if motion.length() < self.config.epsilon {
            return ray.origin;
        }

        let scaled = space.polygons_to_sphere(polygons);
        let end = match trace_collision(&calc_colliders(&scaled, &motion, &self.config)) {
            None => motion.end(),
            Some(hit) if hit.kind == CollisionKind::Embedded => {
                debug!("stop: embedded in polygon {}, pushing out", hit.collider);
                self.push_out(motion.origin, &hit.plane)
            }
            Some(hit) => self.advance(&motion, hit.distance),
        };
        space.to_world(end)
    }

    /// Moves along `ray`, sliding along whatever is hit, for at most
    /// `max_slide_iterations` passes.
    ///
    /// With `filter_pulse_jumps`, an upward kink in the returned slide
    /// direction that the input motion did not ask for is flattened out.
    pub fn collide_and_slide(
        &self,
        radius: Vec3,
        polygons: &[Polygon],
        ray: &Ray,
        filter_pulse_jumps: bool,
    ) -> SlideResult {
        let space = SphereSpace::new(radius);
        let motion = space.ray_to_sphere(ray);
        let eps = self.config.epsilon;
        if motion.length() < eps {
            return SlideResult {
                position: ray.origin,
                ..Default::default()
            };
        }
        let scaled = space.polygons_to_sphere(polygons);

        let mut position = motion.origin;
        let mut destination = motion.end();
        let mut slide = Vec3::ZERO;
        let mut iterations = 0;
        let mut settled = false;

        while iterations < self.config.max_slide_iterations {
            let remaining = destination - position;
            if remaining.magnitude() < eps {
                settled = true;
                break;
            }
            iterations += 1;

            let leg = Ray::new(position, remaining);
            let Some(hit) = trace_collision(&calc_colliders(&scaled, &leg, &self.config)) else {
                trace!("slide pass {iterations}: clear, {remaining:?}");
                position = destination;
                slide = remaining;
                settled = true;
                break;
            };

            if hit.kind == CollisionKind::Embedded {
                debug!("slide pass {iterations}: embedded in polygon {}", hit.collider);
                position = self.push_out(position, &hit.plane);
                continue;
            }

            position = self.advance(&leg, hit.distance);

            // Drop the part of the leftover motion that points into the
            // contact plane.
            let normal = hit.plane.normal;
            let leftover = destination - position;
            let into = leftover.dot(normal);
            let projected = if into < 0.0 {
                leftover - normal * into
            } else {
                leftover
            };
            destination = position + projected;
            slide = projected;

            trace!(
                "slide pass {iterations}: {:?} on polygon {} at t={:.4}, sliding {projected:?}",
                hit.kind,
                hit.collider,
                hit.distance
            );
        }

        if !settled {
            debug!(
                "slide stopped after {iterations} passes with {:?} left",
                space.to_world(destination - position)
            );
        }

        let mut slide_direction = space.to_world(slide);
        if filter_pulse_jumps {
            self.filter_pulse_jump(ray.direction, &mut slide_direction);
        }

        SlideResult {
            position: space.to_world(position),
            slide_direction,
            iterations,
        }
    }

    /// Point along `ray` at time `t`, backed off by `back_off` along the
    /// motion. Never backs up past the ray origin.
    fn advance(&self, ray: &Ray, t: f32) -> Vec3 {
        let Some(dir) = ray.direction.try_normalize() else {
            return ray.origin;
        };
        let travel = (ray.length() * t - self.config.back_off).max(0.0);
        ray.origin + dir * travel
    }

    /// Moves an embedded centre out along the contact normal until it sits
    /// `1 + back_off` from the contact point.
    fn push_out(&self, center: Vec3, plane: &Plane) -> Vec3 {
        let depth = 1.0 + self.config.back_off - plane.distance(center);
        center + plane.normal * depth
    }

    fn filter_pulse_jump(&self, input: Vec3, slide: &mut Vec3) {
        if input.y > 0.0 || slide.y <= 0.0 {
            return;
        }
        let length = slide.magnitude();
        if length > 0.0 && slide.y / length <= self.config.pulse_jump_threshold {
            trace!("pulse jump filtered: {slide:?}");
            slide.y = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn floor() -> Polygon {
        Polygon::from_points([
            Vec3::new(-50.0, 0.0, -50.0),
            Vec3::new(-50.0, 0.0, 50.0),
            Vec3::new(50.0, 0.0, 50.0),
            Vec3::new(50.0, 0.0, -50.0),
        ])
    }

    /// Wall at x = 20 facing -x.
    fn wall() -> Polygon {
        Polygon::from_points([
            Vec3::new(20.0, 0.0, -50.0),
            Vec3::new(20.0, 0.0, 50.0),
            Vec3::new(20.0, 100.0, 50.0),
            Vec3::new(20.0, 100.0, -50.0),
        ])
    }

    const RADIUS: Vec3 = Vec3::new(15.0, 30.0, 15.0);

    #[test]
    fn stop_rests_on_floor() {
        let ray = Ray::new(Vec3::new(0.0, 100.0, 0.0), Vec3::new(0.0, -1000.0, 0.0));
        let pos = Collider::default().collide_and_stop(RADIUS, &[floor()], &ray);
        assert_relative_eq!(pos.y, 30.0, epsilon = 0.1);
        assert!(pos.y >= 30.0);
        assert_relative_eq!(pos.x, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn stop_without_contact_reaches_end() {
        let ray = Ray::new(Vec3::new(0.0, 100.0, 0.0), Vec3::new(0.0, 10.0, 5.0));
        let pos = Collider::default().collide_and_stop(RADIUS, &[floor()], &ray);
        assert_relative_eq!(pos, Vec3::new(0.0, 110.0, 5.0), epsilon = 1e-3);
    }

    #[test]
    fn stop_with_zero_motion_stays_put() {
        let origin = Vec3::new(3.0, 10.0, -2.0);
        let pos = Collider::default().collide_and_stop(RADIUS, &[floor()], &Ray::new(origin, Vec3::ZERO));
        assert_eq!(pos, origin);
    }

    #[test]
    fn embedded_start_is_pushed_out() {
        let ray = Ray::new(Vec3::new(0.0, 15.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let pos = Collider::default().collide_and_stop(RADIUS, &[floor()], &ray);
        assert!(pos.y > 30.0 && pos.y < 30.1, "{pos:?}");
    }

    #[test]
    fn slide_keeps_horizontal_motion() {
        let ray = Ray::new(Vec3::new(0.0, 100.0, 0.0), Vec3::new(100.0, -1000.0, 0.0));
        let result = Collider::default().collide_and_slide(RADIUS, &[floor()], &ray, false);
        assert_relative_eq!(result.position.y, 30.0, epsilon = 0.1);
        assert!(result.slide_direction.x > 0.0);
        assert_relative_eq!(result.slide_direction.y, 0.0, epsilon = 1e-3);
        assert_relative_eq!(result.slide_direction.z, 0.0, epsilon = 1e-3);
        assert!(result.iterations >= 2);
    }

    #[test]
    fn slide_along_wall() {
        let ray = Ray::new(Vec3::new(0.0, 50.0, 0.0), Vec3::new(40.0, 0.0, 40.0));
        let result = Collider::default().collide_and_slide(RADIUS, &[wall()], &ray, false);
        assert!(result.position.x <= 5.0 + 1e-2, "{:?}", result.position);
        assert_relative_eq!(result.position.z, 40.0, epsilon = 0.1);
        assert_relative_eq!(result.slide_direction.x, 0.0, epsilon = 1e-3);
        assert!(result.slide_direction.z > 0.0);
    }

    #[test]
    fn slide_respects_iteration_bound() {
        let collider = Collider::new(CollisionConfig::default().with_max_slide_iterations(1));
        let ray = Ray::new(Vec3::new(0.0, 100.0, 0.0), Vec3::new(100.0, -1000.0, 0.0));
        let result = collider.collide_and_slide(RADIUS, &[floor()], &ray, false);
        assert_eq!(result.iterations, 1);
        // Stopped at the first contact instead of travelling the slide.
        assert!(result.position.x < 10.0);
    }

    #[test]
    fn pulse_filter_flattens_upward_slide() {
        let collider = Collider::default();
        let mut slide = Vec3::new(10.0, 0.5, 0.0);
        collider.filter_pulse_jump(Vec3::new(1.0, -1.0, 0.0), &mut slide);
        assert_eq!(slide, Vec3::new(10.0, 0.0, 0.0));

        let mut rising = Vec3::new(10.0, 0.5, 0.0);
        collider.filter_pulse_jump(Vec3::new(1.0, 1.0, 0.0), &mut rising);
        assert_eq!(rising.y, 0.5);

        let mut steep = Vec3::new(1.0, 1.0, 0.0);
        collider.filter_pulse_jump(Vec3::DOWN, &mut steep);
        assert_eq!(steep.y, 1.0);

        let everything = Collider::new(CollisionConfig::default().with_pulse_jump_threshold(1.0));
        everything.filter_pulse_jump(Vec3::DOWN, &mut steep);
        assert_eq!(steep.y, 0.0);
    }

    /// Incline through the origin rising along +x by `rise` over 200 units.
    fn incline(rise: f32) -> Polygon {
        let h = rise / 2.0;
        Polygon::from_points([
            Vec3::new(-100.0, -h, -50.0),
            Vec3::new(-100.0, -h, 50.0),
            Vec3::new(100.0, h, 50.0),
            Vec3::new(100.0, h, -50.0),
        ])
    }

    #[test]
    fn filtered_slide_drops_shallow_climb() {
        let ramp = [incline(10.0)];
        let ray = Ray::new(Vec3::new(-20.0, 20.0, 0.0), Vec3::new(60.0, -30.0, 0.0));
        let radius = Vec3::splat(10.0);

        let raw = Collider::default().collide_and_slide(radius, &ramp, &ray, false);
        assert!(raw.slide_direction.y > 0.0, "{:?}", raw.slide_direction);
        assert!(raw.slide_direction.x > 0.0);

        let filtered = Collider::default().collide_and_slide(radius, &ramp, &ray, true);
        assert_eq!(filtered.slide_direction.y, 0.0);
        assert_relative_eq!(filtered.slide_direction.x, raw.slide_direction.x);
        assert_relative_eq!(filtered.position, raw.position);
    }

    #[test]
    fn filtered_slide_keeps_steep_climb() {
        let ramp = [incline(100.0)];
        let ray = Ray::new(Vec3::new(-20.0, 40.0, 0.0), Vec3::new(60.0, -30.0, 0.0));
        let radius = Vec3::splat(10.0);

        let raw = Collider::default().collide_and_slide(radius, &ramp, &ray, false);
        let filtered = Collider::default().collide_and_slide(radius, &ramp, &ray, true);
        assert!(raw.slide_direction.y > 0.0, "{:?}", raw.slide_direction);
        assert_eq!(filtered, raw);
    }

    #[test]
    fn trace_reports_collider_index() {
        let ray = Ray::new(Vec3::new(0.0, 50.0, 0.0), Vec3::new(0.0, -100.0, 0.0));
        let hit = Collider::default().trace(RADIUS, &[wall(), floor()], &ray).unwrap();
        assert_eq!(hit.collider, 1);
        assert_eq!(hit.kind, CollisionKind::Surface);
    }
}
