//! A walking or flying viewer driven through a [`World`].
//!
//! Each call to [`Viewer::animate`] is one frame: steer, thrust, clamp,
//! apply friction and gravity, then move the ellipsoid through the world
//! with the chosen [`CollisionMode`]. Whatever motion survives becomes the
//! velocity for the next frame.

use std::str::FromStr;

use log::debug;
use rand::Rng;

use crate::camera::ViewerCamera;
use crate::collision::{gather_potential_colliders, Collider, CollisionConfig};
use crate::error::ConfigError;
use crate::geometry::Ray;
use crate::math::Vec3;
use crate::world::World;

/// How the viewer reacts to the world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionMode {
    /// Pass through everything.
    None,
    /// Stop at the first contact and lose all momentum.
    Stop,
    /// Slide along contacts and keep the slide as momentum.
    #[default]
    Slide,
}

impl FromStr for CollisionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "stop" => Ok(Self::Stop),
            "slide" => Ok(Self::Slide),
            _ => Err(ConfigError::ParseMode(s.to_string())),
        }
    }
}

/// Parses `"x,y,z"` into a vector.
pub fn parse_vec3(s: &str) -> Result<Vec3, ConfigError> {
    let parts: Vec<f32> = s
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<_, _>>()
        .map_err(|_| ConfigError::ParseVector(s.to_string()))?;
    match parts.as_slice() {
        &[x, y, z] => Ok(Vec3::new(x, y, z)),
        _ => Err(ConfigError::ParseVector(s.to_string())),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    /// Ellipsoid radii.
    pub radius: Vec3,
    /// Velocity added per frame of thrust.
    pub speed: f32,
    pub terminal_velocity: f32,
    /// Velocity multiplier applied every frame, in `[0, 1]`.
    pub friction: f32,
    pub gravity: Vec3,
    pub gravity_enabled: bool,
    /// Thrust along the full view direction instead of the ground plane.
    pub fly: bool,
    pub mode: CollisionMode,
    pub filter_pulse_jumps: bool,
    /// Eye height as a fraction of `radius.y` above the centre.
    pub head_height: f32,
    pub collision: CollisionConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            radius: Vec3::new(15.0, 30.0, 15.0),
            speed: 3.0,
            terminal_velocity: 150.0,
            friction: 0.6,
            gravity: Vec3::DOWN,
            gravity_enabled: true,
            fly: false,
            mode: CollisionMode::default(),
            filter_pulse_jumps: false,
            head_height: 0.9,
            collision: CollisionConfig::default(),
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = self.radius;
        if !(r.is_finite() && r.x > 0.0 && r.y > 0.0 && r.z > 0.0) {
            return Err(ConfigError::NonPositiveRadius {
                x: r.x,
                y: r.y,
                z: r.z,
            });
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(ConfigError::InvalidFriction(self.friction));
        }
        for (name, value) in [
            ("speed", self.speed),
            ("terminal_velocity", self.terminal_velocity),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidTolerance { name, value });
            }
        }
        self.collision.validate()
    }
}

/// One frame of control input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewerInput {
    pub thrust: bool,
    /// Look deltas in radians.
    pub yaw: f32,
    pub pitch: f32,
}

/// What happened during one [`Viewer::animate`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameMotion {
    pub from: Vec3,
    pub to: Vec3,
    /// Velocity carried into the next frame.
    pub velocity: Vec3,
    /// Polygons that passed the bounding-box test.
    pub candidates: usize,
    /// Slide passes spent, zero outside slide mode.
    pub iterations: usize,
}

#[derive(Debug, Clone)]
pub struct Viewer {
    config: ViewerConfig,
    collider: Collider,
    camera: ViewerCamera,
    position: Vec3,
    velocity: Vec3,
}

impl Viewer {
    pub fn new(config: ViewerConfig, position: Vec3) -> Self {
        Self {
            collider: Collider::new(config.collision),
            config,
            camera: ViewerCamera::default(),
            position,
            velocity: Vec3::ZERO,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ViewerConfig {
        &mut self.config
    }

    pub fn camera(&self) -> &ViewerCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut ViewerCamera {
        &mut self.camera
    }

    /// Centre of the ellipsoid.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Eye point, a little below the top of the ellipsoid.
    pub fn head_position(&self) -> Vec3 {
        self.position + Vec3::UP * (self.config.radius.y * self.config.head_height)
    }

    /// Points gravity in a random unit direction.
    pub fn randomize_gravity<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let g = Vec3::new(
            rng.gen::<f32>() - 0.5,
            rng.gen::<f32>() - 0.5,
            rng.gen::<f32>() - 0.5,
        );
        self.config.gravity = g.try_normalize().unwrap_or(Vec3::DOWN);
    }

    /// Advances the viewer by one frame.
    pub fn animate(&mut self, world: &World, input: &ViewerInput) -> FrameMotion {
        self.camera.rotate(input.yaw, input.pitch);

        if input.thrust {
            let heading = if self.config.fly {
                self.camera.forward()
            } else {
                self.camera.flat_forward()
            };
            self.velocity += heading * self.config.speed;
        }

        self.velocity = self.velocity.clamp_length(self.config.terminal_velocity);
        self.velocity = self.velocity * self.config.friction;
        if self.config.gravity_enabled {
            self.velocity += self.config.gravity;
        }

        let ray = Ray::new(self.position, self.velocity);
        let radius = self.config.radius;
        let colliders = gather_potential_colliders(world.polygons(), &ray, radius);

        let from = self.position;
        let mut iterations = 0;
        match self.config.mode {
            CollisionMode::Slide => {
                let result = self.collider.collide_and_slide(
                    radius,
                    &colliders,
                    &ray,
                    self.config.filter_pulse_jumps,
                );
                self.position = result.position;
                self.velocity = result.slide_direction;
                iterations = result.iterations;
            }
            CollisionMode::Stop => {
                self.position = self.collider.collide_and_stop(radius, &colliders, &ray);
                self.velocity = Vec3::ZERO;
            }
            CollisionMode::None => {
                self.position = ray.end();
            }
        }

        debug!(
            "viewer {:?} -> {:?} ({} candidates, {iterations} passes)",
            from,
            self.position,
            colliders.len()
        );

        FrameMotion {
            from,
            to: self.position,
            velocity: self.velocity,
            candidates: colliders.len(),
            iterations,
        }
    }
}
