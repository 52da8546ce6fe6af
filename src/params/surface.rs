//! Generated surface plane parameters.

/// Flat plane used when no surface file is supplied
#[derive(Debug, Clone)]
pub struct SurfaceParams {
    /// Extent along local X (local units)
    pub width: f32,

    /// Extent along local Z (local units)
    pub depth: f32,

    /// Segments along X (vertices per row = segments + 1)
    pub width_segments: usize,

    /// Segments along Z
    pub depth_segments: usize,

    /// Baseline height of every generated vertex
    pub height: f32,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            width: 120.0,
            depth: 73.0,
            width_segments: 104,
            depth_segments: 104,
            height: 0.0,
        }
    }
}

impl SurfaceParams {
    /// Vertices per row of the generated grid
    pub fn columns(&self) -> usize {
        self.width_segments.max(1) + 1
    }

    /// Total generated vertex count
    pub fn vertex_count(&self) -> usize {
        (self.width_segments.max(1) + 1) * (self.depth_segments.max(1) + 1)
    }
}
