//! Faucetwave - headless host for the faucet ripple simulation
//!
//! Loads (or generates) the surface, then drives the simulation with a
//! fixed-step clock, logging stats along the way. Set `RUST_LOG=info`
//! (or `debug` for every impact) to see progress.

use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info, trace, warn};

use faucetwave::cli::Args;
use faucetwave::snapshot;
use faucetwave::surface;
use faucetwave::Simulation;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let run = args.run_config();

    // Scene setup: nothing ticks unless the surface is ready
    let (field, columns) = match args.load_surface() {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("Surface failed to load, not starting: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Surface ready: {} vertices", field.len());

    let physics = args.ripple_physics();
    let max_deviation = physics.max_deviation;
    let droplet = args.droplet_params();
    if droplet.initial_velocity <= 0.0 {
        warn!(
            "Velocity {} never reaches the surface; no ripples will form",
            droplet.initial_velocity
        );
    }

    let mut sim = Simulation::new(field, &droplet, physics);
    sim.set_wave_amplitude(args.amplitude);

    let dt = run.frame_delta();
    let total_frames = run.total_frames();
    let log_every = run.log_every();
    info!(
        "Running {} frames at {} fps ({:.2}s)",
        total_frames, run.fps, run.duration_secs
    );

    let mut peak_ripples = 0;
    for frame in 1..=total_frames {
        let report = sim.tick(dt);
        peak_ripples = peak_ripples.max(report.active_ripples);
        trace!(
            "Frame {}: ripples={} peak_deviation={:.3}",
            frame,
            report.active_ripples,
            sim.height_field().peak_deviation()
        );

        if let Some(impact) = report.impact {
            debug!(
                "Frame {}: impact at ({:.2}, {:.2})",
                frame, impact.x, impact.y
            );
        }

        if frame % log_every == 0 {
            info!(
                "t={:.2}s ripples={} impacts={} peak_deviation={:.3}",
                frame as f32 * dt,
                report.active_ripples,
                sim.impacts(),
                sim.height_field().peak_deviation()
            );
        }
    }

    info!(
        "Done: {} impacts, at most {} concurrent ripples",
        sim.impacts(),
        peak_ripples
    );

    let mut status = ExitCode::SUCCESS;

    if let Some(path) = &run.export_heights {
        match surface::export_heights(sim.height_field(), path) {
            Ok(()) => info!("Heights written to {}", path.display()),
            Err(e) => {
                error!("{}", e);
                status = ExitCode::FAILURE;
            }
        }
    }

    if let Some(path) = &run.snapshot {
        let Some(columns) = columns else {
            error!("Snapshot needs --columns for a loaded surface");
            return ExitCode::FAILURE;
        };
        match snapshot::save_heightmap(sim.height_field(), columns, max_deviation, path) {
            Ok(()) => info!("Heightmap written to {}", path.display()),
            Err(e) => {
                error!("{}", e);
                status = ExitCode::FAILURE;
            }
        }
    }

    status
}
