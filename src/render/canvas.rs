//! Canvas - the square pixel grid a generator draws into.

use crate::error::Result;
use crate::types::Colour;

/// A square grid of colours, origin at the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Pixel grid (row-major: pixels[y][x]).
    pixels: Vec<Vec<Colour>>,

    /// Width and height in pixels.
    size: usize,
}

impl Canvas {
    /// Create a canvas with every pixel set to `background`.
    pub fn new(size: u32, background: Colour) -> Self {
        let size = size as usize;
        Self {
            pixels: vec![vec![background; size]; size],
            size,
        }
    }

    /// Wrap an existing grid of rows.
    ///
    /// The edge length is the row count; short rows are padded with
    /// transparent pixels and long rows are cut.
    pub fn from_rows(mut pixels: Vec<Vec<Colour>>) -> Self {
        let size = pixels.len();
        for row in &mut pixels {
            row.resize(size, Colour::TRANSPARENT);
        }
        Self { pixels, size }
    }

    /// Get the edge length in pixels.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Set a pixel. Coordinates outside the canvas are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, colour: Colour) {
        if let Some(px) = self.cell_mut(x, y) {
            *px = colour;
        }
    }

    /// Get a pixel, or `None` outside the canvas.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Colour> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Get a reference to the pixel grid.
    pub fn pixels(&self) -> &[Vec<Colour>] {
        &self.pixels
    }

    /// Count pixels of exactly this colour.
    pub fn count(&self, colour: Colour) -> usize {
        self.pixels
            .iter()
            .flatten()
            .filter(|&&c| c == colour)
            .count()
    }

    /// Replace every pixel of colour `from` with `to`.
    ///
    /// Used to key out the background, e.g. black to transparent.
    pub fn replace(&mut self, from: Colour, to: Colour) {
        for px in self.pixels.iter_mut().flatten() {
            if *px == from {
                *px = to;
            }
        }
    }

    /// Encode as PNG bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        super::png::encode_png(self, 1)
    }

    fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Colour> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        self.pixels.get_mut(y).and_then(|row| row.get_mut(x))
    }
}
