//! Expanding ripples and the wave field that superimposes them.

mod field;
mod ripple;

// Re-export public types
pub use field::WaveField;
pub use ripple::Ripple;
