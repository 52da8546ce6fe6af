//! Faucetwave library - Dripping faucet and surface ripple simulation
//!
//! A single droplet falls onto a deformable plane; each impact spawns a
//! circular ripple whose height contribution is summed over every vertex
//! of the surface each frame. Rendering is left to the host.

pub mod cli;
pub mod droplet;
pub mod params;
pub mod simulation;
pub mod snapshot;
pub mod surface;
pub mod waves;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use simulation::{FrameReport, Simulation};
