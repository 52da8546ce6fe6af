//! Surface file loading and height export.
//!
//! Surface files are raw little-endian `f32` triples (x, y, z), one per vertex.
//! Height exports are raw little-endian `f32`, one per vertex.

use std::fmt;
use std::fs;
use std::path::Path;

use glam::Vec3;

use super::HeightField;

const VERTEX_BYTES: usize = 12;

/// Errors that can occur while loading or exporting a surface
#[derive(Debug)]
pub enum SurfaceError {
    /// Failed to read or write the file.
    Io(std::io::Error),
    /// File length is not a whole number of vertices.
    Truncated { len: usize },
    /// File contains no vertices.
    Empty,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::Io(e) => write!(f, "Failed to access surface file: {}", e),
            SurfaceError::Truncated { len } => write!(
                f,
                "Surface file is {} bytes, not a multiple of {} (x, y, z as f32)",
                len, VERTEX_BYTES
            ),
            SurfaceError::Empty => write!(f, "Surface file contains no vertices"),
        }
    }
}

impl std::error::Error for SurfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SurfaceError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SurfaceError {
    fn from(e: std::io::Error) -> Self {
        SurfaceError::Io(e)
    }
}

/// Decode vertex positions from raw surface bytes
pub fn parse_positions(bytes: &[u8]) -> Result<Vec<Vec3>, SurfaceError> {
    if bytes.len() % VERTEX_BYTES != 0 {
        return Err(SurfaceError::Truncated { len: bytes.len() });
    }
    if bytes.is_empty() {
        return Err(SurfaceError::Empty);
    }

    Ok(bytes
        .chunks_exact(VERTEX_BYTES)
        .map(|chunk| {
            let [x, y, z] = bytemuck::pod_read_unaligned::<[u32; 3]>(chunk).map(u32::from_le);
            Vec3::new(f32::from_bits(x), f32::from_bits(y), f32::from_bits(z))
        })
        .collect())
}

/// Load a height field from a surface file
pub fn load_positions(path: &Path) -> Result<HeightField, SurfaceError> {
    let bytes = fs::read(path)?;
    let positions = parse_positions(&bytes)?;
    Ok(HeightField::from_positions(&positions))
}

/// Write the live heights as raw little-endian f32
pub fn export_heights(field: &HeightField, path: &Path) -> Result<(), SurfaceError> {
    let bytes: Vec<u8> = field
        .heights()
        .iter()
        .flat_map(|h| h.to_le_bytes())
        .collect();
    fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(positions: &[[f32; 3]]) -> Vec<u8> {
        positions
            .iter()
            .flatten()
            .flat_map(|v| v.to_le_bytes())
            .collect()
    }

    #[test]
    fn test_parse_positions() {
        let bytes = encode(&[[1.0, 2.0, 3.0], [-0.5, 0.0, 8.25]]);
        let positions = parse_positions(&bytes).unwrap();
        assert_eq!(
            positions,
            vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(-0.5, 0.0, 8.25)]
        );
    }

    #[test]
    fn test_parse_rejects_partial_vertex() {
        let mut bytes = encode(&[[1.0, 2.0, 3.0]]);
        bytes.pop();
        assert!(matches!(
            parse_positions(&bytes),
            Err(SurfaceError::Truncated { len: 11 })
        ));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(parse_positions(&[]), Err(SurfaceError::Empty)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("faucetwave-does-not-exist.surface");
        assert!(matches!(load_positions(&path), Err(SurfaceError::Io(_))));
    }

    #[test]
    fn test_export_then_load_heights() {
        let field = HeightField::from_positions(&[Vec3::new(0.0, 1.5, 0.0), Vec3::new(1.0, -2.0, 0.0)]);
        let path = std::env::temp_dir().join(format!("faucetwave-heights-{}.bin", std::process::id()));

        export_heights(&field, &path).unwrap();
        let bytes = fs::read(&path).unwrap();
        fs::remove_file(&path).ok();

        let heights: Vec<f32> = bytes
            .chunks_exact(4)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect();
        assert_eq!(heights, vec![1.5, -2.0]);
    }
}
