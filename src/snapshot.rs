//! Grayscale heightmap export of the surface.
//!
//! Deviation from the baseline maps linearly onto 8-bit gray:
//! `-max_deviation` is black, the baseline is mid gray, `+max_deviation` is white.

use std::fmt;
use std::path::Path;

use image::{GrayImage, Luma};

use crate::surface::HeightField;

/// Errors that can occur while exporting a heightmap
#[derive(Debug)]
pub enum SnapshotError {
    /// Vertex count is not a whole number of rows.
    Columns { columns: usize, vertices: usize },
    /// Failed to encode or write the image.
    Image(image::ImageError),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Columns { columns, vertices } => write!(
                f,
                "Cannot lay out {} vertices in rows of {} columns",
                vertices, columns
            ),
            SnapshotError::Image(e) => write!(f, "Failed to write heightmap: {}", e),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for SnapshotError {
    fn from(e: image::ImageError) -> Self {
        SnapshotError::Image(e)
    }
}

/// Render the surface as a row-major grid image
///
/// # Arguments
/// * `field` - Surface, vertices laid out row by row
/// * `columns` - Vertices per row
/// * `max_deviation` - Displacement mapped to full black / full white
pub fn heightmap_image(
    field: &HeightField,
    columns: usize,
    max_deviation: f32,
) -> Result<GrayImage, SnapshotError> {
    let vertices = field.len();
    if columns == 0 || vertices == 0 || vertices % columns != 0 {
        return Err(SnapshotError::Columns { columns, vertices });
    }
    let rows = vertices / columns;

    let heights = field.heights();
    let original = field.original_heights();
    let scale = if max_deviation > 0.0 {
        0.5 / max_deviation
    } else {
        0.0
    };

    Ok(GrayImage::from_fn(columns as u32, rows as u32, |x, y| {
        let i = y as usize * columns + x as usize;
        let level = ((heights[i] - original[i]) * scale + 0.5).clamp(0.0, 1.0);
        Luma([(level * 255.0).round() as u8])
    }))
}

/// Render and save the heightmap as PNG
pub fn save_heightmap(
    field: &HeightField,
    columns: usize,
    max_deviation: f32,
    path: &Path,
) -> Result<(), SnapshotError> {
    let image = heightmap_image(field, columns, max_deviation)?;
    image.save(path)?;
    Ok(())
}
