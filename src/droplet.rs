//! Droplet emitter: a single drop that falls, hits the surface and respawns.

use glam::{Vec2, Vec3};

use crate::params::DropletParams;

/// Single respawning droplet falling from the faucet spout
#[derive(Debug, Clone)]
pub struct DropletEmitter {
    position: Vec3,
    reset_height: f32,
    surface_height: f32,
}

impl DropletEmitter {
    /// Place the droplet at the spout, at its reset height
    pub fn new(params: &DropletParams) -> Self {
        let [x, z] = params.spout;
        Self {
            position: Vec3::new(x, params.reset_height, z),
            reset_height: params.reset_height,
            surface_height: params.surface_height,
        }
    }

    /// Advance the drop by one frame
    ///
    /// Returns the planar (x, z) impact point when the drop reaches the
    /// surface this frame; the drop is then back at its reset height.
    /// Non-positive velocities never reach the surface.
    ///
    /// # Arguments
    /// * `delta_s` - Seconds since the previous tick
    /// * `velocity` - Fall speed (units per second)
    pub fn tick(&mut self, delta_s: f32, velocity: f32) -> Option<Vec2> {
        self.position.y -= velocity * delta_s;

        if self.position.y <= self.surface_height {
            let impact = Vec2::new(self.position.x, self.position.z);
            self.position.y = self.reset_height;
            return Some(impact);
        }
        None
    }

    /// Current droplet position (for drawing the drop)
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn surface_height(&self) -> f32 {
        self.surface_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_after_fall_time() {
        // 20 units at 10 units/s: impact at exactly 2.0s
        let mut droplet = DropletEmitter::new(&DropletParams::default());

        for _ in 0..7 {
            assert_eq!(droplet.tick(0.25, 10.0), None);
        }
        assert_eq!(droplet.position().y, 2.5);

        assert_eq!(droplet.tick(0.25, 10.0), Some(Vec2::ZERO));
        assert_eq!(droplet.position().y, 20.0);
    }

    #[test]
    fn test_impact_reports_spout_position() {
        let params = DropletParams {
            spout: [4.0, -3.0],
            ..DropletParams::default()
        };
        let mut droplet = DropletEmitter::new(&params);

        assert_eq!(droplet.tick(5.0, 10.0), Some(Vec2::new(4.0, -3.0)));
        assert_eq!(droplet.position(), Vec3::new(4.0, 20.0, -3.0));
    }

    #[test]
    fn test_exactly_one_impact_per_fall() {
        let mut droplet = DropletEmitter::new(&DropletParams::default());
        let dt = 1.0 / 64.0;
        let velocity = 8.0;

        // 20 / 8 = 2.5s = 160 ticks of 1/64s per fall
        let impacts: Vec<usize> = (1..=480)
            .filter(|_| droplet.tick(dt, velocity).is_some())
            .collect();
        assert_eq!(impacts, vec![160, 320, 480]);
    }

    #[test]
    fn test_non_positive_velocity_never_lands() {
        let mut droplet = DropletEmitter::new(&DropletParams::default());
        for _ in 0..1000 {
            assert_eq!(droplet.tick(0.1, 0.0), None);
            assert_eq!(droplet.tick(0.1, -3.0), None);
        }
        assert!(droplet.position().y > 20.0);
    }

    #[test]
    fn test_zero_delta_is_idle() {
        let mut droplet = DropletEmitter::new(&DropletParams::default());
        assert_eq!(droplet.tick(0.0, 100.0), None);
        assert_eq!(droplet.position().y, 20.0);
    }
}
