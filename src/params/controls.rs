//! Live controls adjusted by the host while the simulation runs.

use super::DropletParams;

/// Values a host UI may change between any two ticks
#[derive(Debug, Clone, Copy)]
pub struct Controls {
    /// Droplet fall speed (local units per second)
    pub velocity: f32,

    /// Multiplier on every ripple's height contribution
    pub wave_amplitude: f32,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            velocity: DropletParams::default().initial_velocity,
            wave_amplitude: 1.0,
        }
    }
}
