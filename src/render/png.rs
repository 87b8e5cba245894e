//! PNG output for generated canvases.
//!
//! Converts canvases to PNG bytes or files with optional integer scaling.

use std::io::Cursor;
use std::path::Path;

use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};

use crate::error::{PxError, Result};

use super::Canvas;

/// Largest edge, in pixels, of an encoded image after scaling.
pub const MAX_OUTPUT_EDGE: u32 = 16_384;

/// Encode a canvas as PNG bytes.
///
/// Output is deterministic for a given pixel grid and scale.
///
/// # Arguments
///
/// * `canvas` - The canvas to encode
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn encode_png(canvas: &Canvas, scale: u32) -> Result<Vec<u8>> {
    let img = to_image(canvas, scale)?;
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| PxError::Encode {
            message: format!("Failed to encode PNG: {}", e),
        })?;
    Ok(bytes)
}

/// Write a canvas to a PNG file.
pub fn write_png(canvas: &Canvas, path: &Path, scale: u32) -> Result<()> {
    let bytes = encode_png(canvas, scale)?;
    std::fs::write(path, bytes).map_err(|e| PxError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })
}

/// Scaled output edge, or an error when it would exceed [`MAX_OUTPUT_EDGE`].
pub fn scaled_edge(size: usize, scale: u32) -> Result<u32> {
    u32::try_from(size)
        .ok()
        .and_then(|size| size.checked_mul(scale.max(1)))
        .filter(|&edge| edge <= MAX_OUTPUT_EDGE)
        .ok_or_else(|| PxError::Validation {
            message: format!("{}px canvas at scale {} is too large to encode", size, scale),
            help: Some(format!(
                "Scaled images are limited to {}x{} pixels",
                MAX_OUTPUT_EDGE, MAX_OUTPUT_EDGE
            )),
        })
}

fn to_image(canvas: &Canvas, scale: u32) -> Result<RgbaImage> {
    let edge = scaled_edge(canvas.size(), scale)?;
    let scale = scale.max(1);

    let mut img: RgbaImage = ImageBuffer::new(edge, edge);

    for (y, row) in canvas.pixels().iter().enumerate() {
        for (x, colour) in row.iter().enumerate() {
            let rgba = Rgba(colour.to_rgba());

            // Fill scaled pixels
            for sy in 0..scale {
                for sx in 0..scale {
                    img.put_pixel(x as u32 * scale + sx, y as u32 * scale + sy, rgba);
                }
            }
        }
    }

    Ok(img)
}
