//! Falling droplet parameters.

/// Droplet emitter parameters
#[derive(Debug, Clone)]
pub struct DropletParams {
    /// Fall speed at startup (local units per second)
    pub initial_velocity: f32,

    /// Height the droplet starts at and returns to after each impact
    pub reset_height: f32,

    /// Height of the surface plane; reaching it counts as an impact
    pub surface_height: f32,

    /// Planar (x, z) position of the faucet spout
    pub spout: [f32; 2],
}

impl Default for DropletParams {
    fn default() -> Self {
        Self {
            initial_velocity: 10.0,
            reset_height: 20.0,
            surface_height: 0.0,
            spout: [0.0, 0.0],
        }
    }
}
