//! Height field over a fixed set of planar vertex positions.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use crate::params::SurfaceParams;

/// Vertex data handed to the renderer (position only)
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

/// Per-vertex heights of the deformable surface in its local frame
///
/// Planar coordinates and baseline heights are captured once and never change.
/// Live heights are written only by the wave field, always within
/// `max_deviation` of the baseline.
#[derive(Debug, Clone)]
pub struct HeightField {
    /// Local (x, z) of each vertex
    planar: Vec<Vec2>,
    /// Baseline heights captured at initialization
    original: Vec<f32>,
    /// Heights after the most recent tick
    live: Vec<f32>,
}

impl HeightField {
    /// Capture a height field from local vertex positions (y is the height)
    pub fn from_positions(positions: &[Vec3]) -> Self {
        let planar = positions.iter().map(|p| Vec2::new(p.x, p.z)).collect();
        let original: Vec<f32> = positions.iter().map(|p| p.y).collect();
        let live = original.clone();

        Self {
            planar,
            original,
            live,
        }
    }

    /// Create a flat XZ grid centered on the origin
    ///
    /// Vertices are laid out row by row along X, rows advancing along Z.
    pub fn flat_grid(params: &SurfaceParams) -> Self {
        let cols = params.width_segments.max(1);
        let rows = params.depth_segments.max(1);
        let half_width = params.width / 2.0;
        let half_depth = params.depth / 2.0;

        let mut positions = Vec::with_capacity((cols + 1) * (rows + 1));
        for z in 0..=rows {
            for x in 0..=cols {
                let x_pos = x as f32 / cols as f32 * params.width - half_width;
                let z_pos = z as f32 / rows as f32 * params.depth - half_depth;
                positions.push(Vec3::new(x_pos, params.height, z_pos));
            }
        }

        Self::from_positions(&positions)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Live heights, read-only
    pub fn heights(&self) -> &[f32] {
        &self.live
    }

    /// Baseline heights
    pub fn original_heights(&self) -> &[f32] {
        &self.original
    }

    /// Local (x, z) of every vertex
    pub fn planar(&self) -> &[Vec2] {
        &self.planar
    }

    /// Live heights as raw bytes for GPU upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.live)
    }

    /// Local position of vertex `i` with its live height
    pub fn position(&self, i: usize) -> Option<Vec3> {
        let p = self.planar.get(i)?;
        Some(Vec3::new(p.x, self.live[i], p.y))
    }

    /// Fill a renderer vertex buffer; extra entries on either side are left alone
    pub fn write_vertices(&self, out: &mut [Vertex]) {
        for ((vertex, p), &y) in out.iter_mut().zip(&self.planar).zip(&self.live) {
            vertex.position = [p.x, y, p.y];
        }
    }

    /// Build a fresh renderer vertex buffer
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut out = vec![Vertex::default(); self.len()];
        self.write_vertices(&mut out);
        out
    }

    /// Largest absolute displacement from the baseline
    pub fn peak_deviation(&self) -> f32 {
        self.live
            .iter()
            .zip(&self.original)
            .map(|(live, base)| (live - base).abs())
            .fold(0.0, f32::max)
    }

    /// Overwrite every live height with baseline + displacement, clamped
    ///
    /// `displacement` receives each vertex's local (x, z).
    pub(crate) fn displace<F>(&mut self, max_deviation: f32, mut displacement: F)
    where
        F: FnMut(Vec2) -> f32,
    {
        for ((live, &base), &p) in self.live.iter_mut().zip(&self.original).zip(&self.planar) {
            let height = base + displacement(p);
            // min/max, not clamp: max_deviation may be negative or NaN
            *live = height.min(base + max_deviation).max(base - max_deviation);
        }
    }
}
