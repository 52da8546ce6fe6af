//! Per-frame composition of the droplet emitter and the wave field.

use glam::{Affine3A, Vec2, Vec3};

use crate::droplet::DropletEmitter;
use crate::params::{Controls, DropletParams, RipplePhysics};
use crate::surface::HeightField;
use crate::waves::WaveField;

/// Outcome of a single frame, for host feedback (sound, splash effects, stats)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Local (x, z) of the ripple spawned this frame, if the drop landed
    pub impact: Option<Vec2>,
    /// Ripples alive after the frame
    pub active_ripples: usize,
}

/// Simulation context owned by the host and ticked once per frame
///
/// The emitter works in world space; the surface (and every ripple) lives in
/// the surface's local frame, related by `world_from_local`.
pub struct Simulation {
    droplet: DropletEmitter,
    waves: WaveField,
    controls: Controls,
    world_from_local: Affine3A,
    local_from_world: Affine3A,
    impacts: u64,
}

impl Simulation {
    /// Create a simulation over a captured surface
    ///
    /// The surface must be fully set up by the host before the first tick.
    pub fn new(field: HeightField, droplet: &DropletParams, physics: RipplePhysics) -> Self {
        Self {
            droplet: DropletEmitter::new(droplet),
            waves: WaveField::new(field, physics),
            controls: Controls {
                velocity: droplet.initial_velocity,
                ..Controls::default()
            },
            world_from_local: Affine3A::IDENTITY,
            local_from_world: Affine3A::IDENTITY,
            impacts: 0,
        }
    }

    /// Place the surface in the world (e.g. a plane rotated to lie flat)
    pub fn with_world_transform(mut self, world_from_local: Affine3A) -> Self {
        self.set_world_transform(world_from_local);
        self
    }

    pub fn set_world_transform(&mut self, world_from_local: Affine3A) {
        self.world_from_local = world_from_local;
        self.local_from_world = world_from_local.inverse();
    }

    /// Advance one frame: drop, optional ripple spawn, wave field update
    ///
    /// # Arguments
    /// * `delta_s` - Seconds since the previous frame, from the host clock
    pub fn tick(&mut self, delta_s: f32) -> FrameReport {
        let impact = self
            .droplet
            .tick(delta_s, self.controls.velocity)
            .map(|world| self.spawn_at_world(world));

        self.waves.tick(self.controls.wave_amplitude);

        FrameReport {
            impact,
            active_ripples: self.waves.active_ripples(),
        }
    }

    /// Map a world-space planar impact onto the surface and start a ripple there
    fn spawn_at_world(&mut self, world: Vec2) -> Vec2 {
        let point = Vec3::new(world.x, self.droplet.surface_height(), world.y);
        let local = self.local_from_world.transform_point3(point);
        let center = Vec2::new(local.x, local.z);

        self.waves.spawn_ripple(center);
        self.impacts += 1;
        center
    }

    /// Start a ripple directly at a local (x, z) point
    pub fn spawn_ripple(&mut self, center: Vec2) {
        self.waves.spawn_ripple(center);
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    pub fn controls_mut(&mut self) -> &mut Controls {
        &mut self.controls
    }

    pub fn set_velocity(&mut self, velocity: f32) {
        self.controls.velocity = velocity;
    }

    pub fn set_wave_amplitude(&mut self, wave_amplitude: f32) {
        self.controls.wave_amplitude = wave_amplitude;
    }

    /// Live heights for the renderer, read-only
    pub fn heights(&self) -> &[f32] {
        self.waves.heights()
    }

    pub fn height_field(&self) -> &HeightField {
        self.waves.height_field()
    }

    pub fn waves(&self) -> &WaveField {
        &self.waves
    }

    pub fn droplet(&self) -> &DropletEmitter {
        &self.droplet
    }

    pub fn world_from_local(&self) -> Affine3A {
        self.world_from_local
    }

    /// Impacts since creation
    pub fn impacts(&self) -> u64 {
        self.impacts
    }
}
