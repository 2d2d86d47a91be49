use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use surface_placer::cli::Cli;
use surface_placer::error::SpawnError;
use surface_placer::frame::FrameIterator;
use surface_placer::{Config, PlacementApp, TapTarget};

const FRAME_STEP: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(policy) = cli.hidden_cursor {
        config.hidden_cursor = policy.into();
    }

    let mut app = PlacementApp::new(&config).context("Invalid configuration")?;
    if let Some(scale) = cli.scale {
        app.set_scale(scale);
    }
    info!("tracking started, scale {:.2}", app.scale());

    let sweep = cli.sweep_degrees.to_radians();
    let center = app.world().session.viewport.center();
    let mut rejected = 0u64;

    for frame in FrameIterator::fixed_step(FRAME_STEP).take(cli.frames as usize) {
        app.world_mut().session.camera.rotate(sweep, 0.0);
        app.on_frame(&frame);

        if frame.number % cli.spawn_every != 0 {
            continue;
        }

        match app.press_spawn() {
            Ok(placement) => {
                if !cli.quiet {
                    println!(
                        "frame {:>4}: placed {} ({})",
                        frame.number, placement.name, placement.status
                    );
                }
                if let TapTarget::Instance { name, .. } = app.tap(center) {
                    info!("tap at reticle resolved to {name}");
                }
            }
            Err(SpawnError::CursorHidden) => {
                rejected += 1;
                if !cli.quiet {
                    println!("frame {:>4}: no surface under cursor", frame.number);
                }
            }
            Err(err) => return Err(err).context("Spawn failed"),
        }
    }

    app.stop_tracking();

    println!("{}", app.spawn_button_title());
    println!("Rejected spawns: {}", rejected);
    if let Some(label) = app.status_label() {
        println!("Label: {}", label);
    }

    Ok(())
}
