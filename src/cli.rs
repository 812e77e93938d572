use argh::FromArgs;
use ellipsy::error::ConfigError;
use ellipsy::math::Vec3;
use ellipsy::scene::RoomBuilder;
use ellipsy::viewer::{parse_vec3, CollisionMode, ViewerConfig};
use ellipsy::world::World;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Headless walkthrough of a procedural room
#[derive(Debug, Clone, FromArgs)]
pub struct CLIOptions {
    /// verbose level: off, error, warn, info, debug, trace
    #[argh(option)]
    pub verbose: Option<log::LevelFilter>,
    /// number of frames to simulate
    #[argh(option, default = "240")]
    pub frames: usize,
    /// collision mode <none, stop, slide>
    #[argh(option, default = "CollisionMode::Slide")]
    pub mode: CollisionMode,
    /// ellipsoid radius as x,y,z
    #[argh(
        option,
        from_str_fn(parse_radius),
        default = "Vec3::new(15.0, 30.0, 15.0)"
    )]
    pub radius: Vec3,
    /// flatten upward kinks in the retained slide direction
    #[argh(switch)]
    pub filter_pulse_jumps: bool,
    /// disable gravity
    #[argh(switch)]
    pub no_gravity: bool,
    /// thrust along the view direction instead of the ground
    #[argh(switch)]
    pub fly: bool,
    /// displace every polygon's corners at random by up to this much, once
    #[argh(option)]
    pub entropy: Option<f32>,
    /// keep vertices displaced by --entropy wobbling at this distance
    #[argh(option)]
    pub jumble: Option<f32>,
    /// seed for --entropy
    #[argh(option, default = "1")]
    pub seed: u64,
}

fn parse_radius(value: &str) -> Result<Vec3, String> {
    parse_vec3(value).map_err(|e| e.to_string())
}

impl CLIOptions {
    pub fn viewer_config(&self) -> Result<ViewerConfig, ConfigError> {
        let config = ViewerConfig {
            radius: self.radius,
            mode: self.mode,
            filter_pulse_jumps: self.filter_pulse_jumps,
            gravity_enabled: !self.no_gravity,
            fly: self.fly,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// The demo room, displaced by `--entropy` with a generator seeded from
    /// `--seed`.
    pub fn world(&self) -> Result<World, ConfigError> {
        let mut world = World::new(RoomBuilder::demo().build());
        if let Some(amount) = self.entropy {
            if !(amount.is_finite() && amount > 0.0) {
                return Err(ConfigError::InvalidTolerance {
                    name: "entropy",
                    value: amount,
                });
            }
            world.perturb(&mut StdRng::seed_from_u64(self.seed), amount);
        }
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(args: &[&str]) -> CLIOptions {
        CLIOptions::from_args(&["ellipsy"], args).expect("valid arguments")
    }

    #[test]
    fn world_is_authored_without_entropy() {
        let authored = World::new(RoomBuilder::demo().build());
        assert_eq!(options(&[]).world().unwrap(), authored);
        assert_eq!(options(&["--seed", "42", "--jumble", "5"]).world().unwrap(), authored);
    }

    #[test]
    fn entropy_is_seeded() {
        let a = options(&["--entropy", "5", "--seed", "3"]).world().unwrap();
        let b = options(&["--entropy", "5", "--seed", "3"]).world().unwrap();
        let c = options(&["--entropy", "5", "--seed", "4"]).world().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, World::new(RoomBuilder::demo().build()));
    }

    #[test]
    fn rejects_non_positive_entropy() {
        assert!(matches!(
            options(&["--entropy", "0"]).world(),
            Err(ConfigError::InvalidTolerance { name: "entropy", .. })
        ));
    }
}
