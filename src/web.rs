//! Browser bindings: the page owns the renderer and drives `tick` from its
//! animation frame callback.

use glam::{Affine3A, Mat4, Vec3};
use js_sys::Float32Array;
use wasm_bindgen::prelude::*;

use crate::params::{DropletParams, RipplePhysics};
use crate::simulation::Simulation;
use crate::surface::HeightField;

/// Faucet scene handle exposed to JavaScript
#[wasm_bindgen]
pub struct FaucetScene {
    sim: Simulation,
    positions: Vec<f32>,
    last_impact: Option<[f32; 2]>,
}

#[wasm_bindgen]
impl FaucetScene {
    /// Capture the plane geometry once the scene has finished loading
    ///
    /// `positions` is the mesh position attribute: x, y, z per vertex.
    #[wasm_bindgen(constructor)]
    pub fn new(positions: &[f32]) -> Result<FaucetScene, JsError> {
        if positions.is_empty() || positions.len() % 3 != 0 {
            return Err(JsError::new("positions must be non-empty x, y, z triples"));
        }

        let vertices: Vec<Vec3> = positions.chunks_exact(3).map(Vec3::from_slice).collect();
        let field = HeightField::from_positions(&vertices);

        Ok(Self {
            sim: Simulation::new(field, &DropletParams::default(), RipplePhysics::default()),
            positions: positions.to_vec(),
            last_impact: None,
        })
    }

    /// Advance one frame; returns true when the drop landed
    pub fn tick(&mut self, delta_s: f32) -> bool {
        let report = self.sim.tick(delta_s);
        self.last_impact = report.impact.map(|p| p.to_array());
        report.impact.is_some()
    }

    pub fn set_velocity(&mut self, velocity: f32) {
        self.sim.set_velocity(velocity);
    }

    pub fn set_amplitude(&mut self, wave_amplitude: f32) {
        self.sim.set_wave_amplitude(wave_amplitude);
    }

    /// Surface world matrix, column-major (three.js `matrixWorld.elements`)
    pub fn set_world_matrix(&mut self, elements: &[f32]) -> Result<(), JsError> {
        if elements.len() != 16 {
            return Err(JsError::new("world matrix needs 16 elements"));
        }
        let matrix = Mat4::from_cols_slice(elements);
        self.sim.set_world_transform(Affine3A::from_mat4(matrix));
        Ok(())
    }

    /// Local x of the most recent impact, if the last tick had one
    pub fn impact_x(&self) -> Option<f32> {
        self.last_impact.map(|p| p[0])
    }

    /// Local z of the most recent impact, if the last tick had one
    pub fn impact_z(&self) -> Option<f32> {
        self.last_impact.map(|p| p[1])
    }

    /// World height of the falling drop
    pub fn droplet_y(&self) -> f32 {
        self.sim.droplet().position().y
    }

    pub fn active_ripples(&self) -> usize {
        self.sim.waves().active_ripples()
    }

    /// Copy the live surface into a position attribute array (x, y, z per vertex)
    pub fn write_positions(&mut self, target: &Float32Array) -> Result<(), JsError> {
        if target.length() as usize != self.positions.len() {
            return Err(JsError::new("target length does not match the surface"));
        }

        for (xyz, &y) in self.positions.chunks_exact_mut(3).zip(self.sim.heights()) {
            xyz[1] = y;
        }
        target.copy_from(&self.positions);
        Ok(())
    }

    // Zero-copy access to the live heights in wasm memory
    pub fn heights_ptr(&self) -> *const f32 {
        self.sim.heights().as_ptr()
    }

    pub fn heights_len(&self) -> usize {
        self.sim.heights().len()
    }
}
