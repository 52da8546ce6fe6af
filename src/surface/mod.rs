//! Deformable surface: per-vertex baseline and live heights.

mod io;
mod mesh;

// Re-export public types
pub use io::{export_heights, load_positions, SurfaceError};
pub use mesh::{HeightField, Vertex};
