//! Wave field simulator: owns the active ripples and the height field.

use std::collections::VecDeque;

use glam::Vec2;

use super::Ripple;
use crate::params::RipplePhysics;
use crate::surface::HeightField;

/// Superposition of active ripples over a height field
pub struct WaveField {
    field: HeightField,
    ripples: VecDeque<Ripple>,
    physics: RipplePhysics,
}

impl WaveField {
    /// Create a wave field over a surface with no active ripples
    pub fn new(field: HeightField, physics: RipplePhysics) -> Self {
        Self {
            field,
            ripples: VecDeque::new(),
            physics,
        }
    }

    /// Start a ripple at a local (x, z) impact point
    ///
    /// With `max_ripples` set, the oldest ripples are evicted to make room.
    pub fn spawn_ripple(&mut self, center: Vec2) {
        if let Some(cap) = self.physics.max_ripples {
            if cap == 0 {
                return;
            }
            while self.ripples.len() >= cap {
                self.ripples.pop_front();
            }
        }

        self.ripples
            .push_back(Ripple::new(center, self.physics.max_radius));
    }

    /// Advance the field by one frame
    ///
    /// Heights are computed from the ripples as they stood at the start of the
    /// frame; ripples grow and expire afterwards.
    ///
    /// # Arguments
    /// * `wave_amplitude` - Live amplitude multiplier
    pub fn tick(&mut self, wave_amplitude: f32) {
        let ripples = &self.ripples;
        let physics = &self.physics;

        self.field.displace(physics.max_deviation, |point| {
            ripples
                .iter()
                .map(|ripple| ripple.contribution(point, wave_amplitude, physics))
                .sum()
        });

        for ripple in self.ripples.iter_mut() {
            ripple.advance(&self.physics);
        }
        self.ripples
            .retain(|ripple| !ripple.is_expired(&self.physics));
    }

    /// Live heights, read-only
    pub fn heights(&self) -> &[f32] {
        self.field.heights()
    }

    pub fn height_field(&self) -> &HeightField {
        &self.field
    }

    /// Active ripples, oldest first
    pub fn ripples(&self) -> impl ExactSizeIterator<Item = &Ripple> {
        self.ripples.iter()
    }

    pub fn active_ripples(&self) -> usize {
        self.ripples.len()
    }

    pub fn physics(&self) -> &RipplePhysics {
        &self.physics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SurfaceParams;
    use glam::Vec3;

    fn small_grid() -> HeightField {
        HeightField::flat_grid(&SurfaceParams {
            width: 40.0,
            depth: 40.0,
            width_segments: 20,
            depth_segments: 20,
            height: 0.0,
        })
    }

    #[test]
    fn test_spawn_starts_fresh_ripple() {
        let mut waves = WaveField::new(small_grid(), RipplePhysics::default());
        waves.spawn_ripple(Vec2::new(3.0, -2.0));

        let ripple = waves.ripples().next().unwrap();
        assert_eq!(ripple.center, Vec2::new(3.0, -2.0));
        assert_eq!(ripple.radius, 0.0);
        assert_eq!(ripple.fade, 1.0);
        assert_eq!(ripple.max_radius, 100.0);
    }

    #[test]
    fn test_heights_use_pre_advance_radius() {
        // One vertex at distance 0.25: outside radius 0, inside radius 0.5
        let field = HeightField::from_positions(&[Vec3::new(0.25, 0.0, 0.0)]);
        let mut waves = WaveField::new(field, RipplePhysics::default());
        waves.spawn_ripple(Vec2::ZERO);

        waves.tick(1.0);
        assert_eq!(waves.heights()[0], 0.0);
        assert_eq!(waves.ripples().next().unwrap().radius, 0.5);

        waves.tick(1.0);
        let expected = (0.25_f32 * 0.2 - 0.5 * 0.05).sin() * (1.0 - 0.25 / 100.0);
        assert!((waves.heights()[0] - expected).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_invariant_under_many_ripples() {
        let mut waves = WaveField::new(small_grid(), RipplePhysics::default());
        let max_deviation = waves.physics().max_deviation;

        for frame in 0..400 {
            if frame % 3 == 0 {
                waves.spawn_ripple(Vec2::new((frame % 17) as f32 - 8.0, (frame % 11) as f32 - 5.0));
            }
            waves.tick(25.0);

            let field = waves.height_field();
            for (live, base) in field.heights().iter().zip(field.original_heights()) {
                assert!((live - base).abs() <= max_deviation);
            }
        }
    }

    #[test]
    fn test_ripple_lifecycle() {
        let mut waves = WaveField::new(small_grid(), RipplePhysics::default());
        waves.spawn_ripple(Vec2::ZERO);

        for _ in 0..201 {
            waves.tick(1.0);
        }
        let ripple = waves.ripples().next().unwrap();
        assert_eq!(ripple.radius, 100.5);
        assert!(ripple.fade < 1.0);

        // 0.98^227 > 0.01 >= 0.98^228
        for _ in 0..226 {
            waves.tick(1.0);
        }
        assert_eq!(waves.active_ripples(), 1);

        waves.tick(1.0);
        assert_eq!(waves.active_ripples(), 0);
    }

    #[test]
    fn test_expired_field_returns_to_baseline() {
        let mut waves = WaveField::new(small_grid(), RipplePhysics::default());
        waves.spawn_ripple(Vec2::ZERO);

        let physics = waves.physics().clone();
        let lifetime = physics.growth_ticks().saturating_add(physics.fade_ticks());
        for _ in 0..lifetime {
            waves.tick(1.0);
        }
        assert_eq!(waves.active_ripples(), 0);

        waves.tick(1.0);
        assert_eq!(waves.height_field().peak_deviation(), 0.0);
    }

    #[test]
    fn test_unbounded_by_default() {
        let mut waves = WaveField::new(small_grid(), RipplePhysics::default());
        for i in 0..500 {
            waves.spawn_ripple(Vec2::new(i as f32, 0.0));
        }
        assert_eq!(waves.active_ripples(), 500);
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let physics = RipplePhysics {
            max_ripples: Some(3),
            ..RipplePhysics::default()
        };
        let mut waves = WaveField::new(small_grid(), physics);
        for i in 0..5 {
            waves.spawn_ripple(Vec2::new(i as f32, 0.0));
        }

        let centers: Vec<f32> = waves.ripples().map(|r| r.center.x).collect();
        assert_eq!(centers, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_zero_cap_spawns_nothing() {
        let physics = RipplePhysics {
            max_ripples: Some(0),
            ..RipplePhysics::default()
        };
        let mut waves = WaveField::new(small_grid(), physics);
        waves.spawn_ripple(Vec2::ZERO);
        assert_eq!(waves.active_ripples(), 0);
    }
}
