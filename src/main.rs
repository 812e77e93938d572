mod cli;

use std::error::Error;

use cli::CLIOptions;
use ellipsy::prelude::*;
use log::{debug, info, warn};
use simplelog::TermLogger;

/// Counts what the pipeline hands over instead of drawing it.
#[derive(Debug, Default)]
struct CountingSink {
    polygons: usize,
    vertices: usize,
}

impl PolygonSink for CountingSink {
    fn submit(&mut self, vertices: &[ProjectedVertex]) {
        self.polygons += 1;
        self.vertices += vertices.len();
    }
}

/// Walk forward, swing around now and then, and nod the camera a little.
fn scripted_input(frame: usize) -> ViewerInput {
    let phase = frame % 90;
    let nod = ((frame as f32) * 0.05).sin() * 0.01;
    if phase < 60 {
        ViewerInput {
            thrust: true,
            yaw: 0.004,
            pitch: nod,
        }
    } else {
        ViewerInput {
            thrust: false,
            yaw: 0.06,
            pitch: -nod,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let options: CLIOptions = argh::from_env();

    TermLogger::init(
        options.verbose.unwrap_or(log::LevelFilter::Info),
        simplelog::ConfigBuilder::default()
            .set_time_level(log::LevelFilter::Trace)
            .build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let config = options.viewer_config()?;
    info!(
        "mode {:?}, radius {:?}, gravity {}",
        config.mode, config.radius, config.gravity_enabled
    );

    let mut world = options.world()?;
    if options.jumble.is_some() && options.entropy.is_none() {
        warn!("--jumble only moves vertices displaced by --entropy");
    }
    info!("world has {} polygons", world.len());

    let mut viewer = Viewer::new(config, Vec3::new(0.0, 100.0, -400.0));
    let mut pipeline = Pipeline::new(Viewport::new(640, 480).widescreen(true), Projection::default());
    let mut sink = CountingSink::default();
    let mut totals = FrameStats::default();

    for frame in 0..options.frames {
        if let Some(scale) = options.jumble {
            world.jumble(scale);
        }

        let motion = viewer.animate(&world, &scripted_input(frame));
        let stats = pipeline.render(
            world.polygons(),
            viewer.camera(),
            viewer.head_position(),
            &mut sink,
        );

        totals.submitted += stats.submitted;
        totals.backface_culled += stats.backface_culled;
        totals.offscreen_culled += stats.offscreen_culled;
        totals.clipped += stats.clipped;
        totals.clip_rejected += stats.clip_rejected;

        debug!("frame {frame}: {stats:?}");
        if frame % 30 == 0 {
            info!(
                "frame {frame}: at {:?}, velocity {:?}, {} candidates, {} passes",
                motion.to, motion.velocity, motion.candidates, motion.iterations
            );
        }
    }

    info!("final position {:?}", viewer.position());
    info!(
        "submitted {} polygons ({} vertices), {totals:?}",
        sink.polygons, sink.vertices
    );
    Ok(())
}
