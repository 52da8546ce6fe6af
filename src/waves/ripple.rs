//! A single circular wavefront.

use glam::Vec2;

use crate::params::RipplePhysics;

/// One expanding circular ripple in surface local space
#[derive(Debug, Clone, PartialEq)]
pub struct Ripple {
    /// Impact point (x, z), fixed at creation
    pub center: Vec2,
    /// Current wavefront radius; only vertices strictly inside are displaced
    pub radius: f32,
    /// Energy factor in (0, 1]; decays once `radius > max_radius`
    pub fade: f32,
    /// Radius cap and amplitude falloff distance
    pub max_radius: f32,
}

impl Ripple {
    /// Fresh ripple at an impact point
    pub fn new(center: Vec2, max_radius: f32) -> Self {
        Self {
            center,
            radius: 0.0,
            fade: 1.0,
            max_radius,
        }
    }

    /// Height this ripple adds at a local (x, z) point, before clamping
    ///
    /// # Arguments
    /// * `point` - Vertex planar position
    /// * `wave_amplitude` - Live amplitude multiplier
    /// * `physics` - Phase scales
    #[inline]
    pub fn contribution(&self, point: Vec2, wave_amplitude: f32, physics: &RipplePhysics) -> f32 {
        let dist = point.distance(self.center);
        if dist >= self.radius {
            return 0.0;
        }

        let phase = dist * physics.distance_phase_scale - self.radius * physics.radius_phase_scale;
        // Weaker toward the edge of the cap
        let amplitude = (1.0 - dist / self.max_radius) * self.fade * wave_amplitude;
        phase.sin() * amplitude
    }

    /// Grow by one tick, decaying once past the cap
    pub fn advance(&mut self, physics: &RipplePhysics) {
        self.radius += physics.radius_increment;
        if self.radius > self.max_radius {
            self.fade *= physics.fade_decay;
        }
    }

    /// Whether the ripple has passed its cap and is losing energy
    pub fn is_fading(&self) -> bool {
        self.radius > self.max_radius
    }

    pub fn is_expired(&self, physics: &RipplePhysics) -> bool {
        self.fade <= physics.fade_expiry_threshold
    }
}
