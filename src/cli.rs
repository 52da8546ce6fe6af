//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::params::{DropletParams, RipplePhysics, RunConfig, SurfaceParams};
use crate::surface::{self, HeightField, SurfaceError};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "faucetwave")]
#[command(about = "Headless faucet drip and ripple simulation", long_about = None)]
pub struct Args {
    /// Simulated duration (seconds)
    #[arg(long, value_name = "SECONDS", default_value = "10")]
    pub seconds: f32,

    /// Frames per simulated second (one tick per frame)
    #[arg(long, value_name = "FPS", default_value = "60")]
    pub fps: u32,

    /// Droplet fall speed (units per second)
    #[arg(long, value_name = "UNITS_PER_S", default_value = "10", allow_negative_numbers = true)]
    pub velocity: f32,

    /// Ripple height multiplier
    #[arg(long, value_name = "SCALE", default_value = "1", allow_negative_numbers = true)]
    pub amplitude: f32,

    /// Cap on concurrent ripples (oldest evicted); unbounded if omitted
    #[arg(long, value_name = "COUNT")]
    pub max_ripples: Option<usize>,

    /// Surface vertex file (little-endian f32 x, y, z per vertex)
    #[arg(long, value_name = "PATH")]
    pub surface: Option<PathBuf>,

    /// Vertices per row of the loaded surface, for snapshots
    #[arg(long, value_name = "COUNT")]
    pub columns: Option<usize>,

    /// Write final heights as little-endian f32
    #[arg(long, value_name = "PATH")]
    pub export_heights: Option<PathBuf>,

    /// Write final heightmap as grayscale PNG
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,
}

impl Args {
    pub fn droplet_params(&self) -> DropletParams {
        DropletParams {
            initial_velocity: self.velocity,
            ..DropletParams::default()
        }
    }

    pub fn ripple_physics(&self) -> RipplePhysics {
        RipplePhysics {
            max_ripples: self.max_ripples,
            ..RipplePhysics::default()
        }
    }

    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            duration_secs: self.seconds,
            fps: self.fps,
            export_heights: self.export_heights.clone(),
            snapshot: self.snapshot.clone(),
            ..RunConfig::default()
        }
    }

    /// Load the surface file, or generate the default plane
    ///
    /// # Returns
    /// * Tuple of (height field, vertices per row if known)
    pub fn load_surface(&self) -> Result<(HeightField, Option<usize>), SurfaceError> {
        match &self.surface {
            Some(path) => {
                let field = surface::load_positions(path)?;
                Ok((field, self.columns))
            }
            None => {
                let params = SurfaceParams::default();
                Ok((HeightField::flat_grid(&params), Some(params.columns())))
            }
        }
    }
}
