//! Parameter definitions with units and documented semantics.
//!
//! All magic numbers of the simulation live here:
//! - Units are local surface units and seconds
//! - Each struct carries the defaults of the faucet scene

mod controls;
mod droplet;
mod ripple;
mod run;
mod surface;

// Re-export all types
pub use controls::Controls;
pub use droplet::DropletParams;
pub use ripple::RipplePhysics;
pub use run::RunConfig;
pub use surface::SurfaceParams;
