//! Contact sheet packer.
//!
//! Lays several equally sized canvases out on a square grid so a batch of
//! variations can be reviewed side by side. Frame metadata is written in the
//! TexturePacker JSON Hash format for game engine interop.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{PxError, Result};
use crate::types::Colour;

use super::Canvas;

/// A frame in the contact sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Contact sheet metadata.
#[derive(Debug, Clone)]
pub struct SheetMeta {
    pub frames: Vec<Frame>,
    pub image: String,
    pub size: u32,
    pub scale: u32,
}

/// Grid packer for same-sized canvases.
#[derive(Debug, Clone)]
pub struct SheetBuilder {
    /// Gap between cells and around the border, in pixels.
    pub padding: u32,

    /// Colour of the gaps and unused cells.
    pub background: Colour,
}

impl SheetBuilder {
    pub fn new(padding: u32) -> Self {
        Self {
            padding,
            background: Colour::TRANSPARENT,
        }
    }

    pub fn with_background(mut self, background: Colour) -> Self {
        self.background = background;
        self
    }

    /// Number of columns (and rows) for `count` cells.
    pub fn columns(count: usize) -> u32 {
        let mut cols = 1u32;
        while (cols as usize) * (cols as usize) < count {
            cols += 1;
        }
        cols
    }

    /// Pack named canvases into one sheet.
    ///
    /// The cell size is taken from the largest canvas. Returns the sheet and
    /// the frame for each input, in input order.
    pub fn pack(&self, items: &[(String, Canvas)]) -> (Canvas, SheetMeta) {
        let cell = items.iter().map(|(_, c)| c.size() as u32).max().unwrap_or(0);
        let cols = Self::columns(items.len());
        let edge = if items.is_empty() {
            0
        } else {
            cols * (cell + self.padding) + self.padding
        };

        let mut sheet = Canvas::new(edge, self.background);
        let mut frames = Vec::with_capacity(items.len());

        for (idx, (name, canvas)) in items.iter().enumerate() {
            let col = idx as u32 % cols;
            let row = idx as u32 / cols;
            let ox = self.padding + col * (cell + self.padding);
            let oy = self.padding + row * (cell + self.padding);

            for (y, pixels) in canvas.pixels().iter().enumerate() {
                for (x, &colour) in pixels.iter().enumerate() {
                    sheet.set_pixel((ox as usize + x) as i32, (oy as usize + y) as i32, colour);
                }
            }

            frames.push(Frame {
                name: name.clone(),
                x: ox,
                y: oy,
                w: canvas.size() as u32,
                h: canvas.size() as u32,
            });
        }

        let meta = SheetMeta {
            frames,
            image: "sheet.png".to_string(),
            size: edge,
            scale: 1,
        };

        (sheet, meta)
    }
}

impl Default for SheetBuilder {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Write sheet metadata as TexturePacker-compatible JSON Hash format.
pub fn write_sheet_json(meta: &SheetMeta, path: &Path) -> Result<()> {
    let output = TexturePackerJson::from_meta(meta);
    let json = serde_json::to_string_pretty(&output).map_err(|e| PxError::Encode {
        message: format!("Failed to serialize sheet metadata: {}", e),
    })?;
    fs::write(path, json).map_err(|e| PxError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write sheet metadata: {}", e),
    })?;
    Ok(())
}

// --- TexturePacker JSON serialization types ---

#[derive(Serialize)]
struct TexturePackerJson {
    frames: BTreeMap<String, TPFrame>,
    meta: TPMeta,
}

#[derive(Serialize)]
struct TPFrame {
    frame: TPRect,
    rotated: bool,
    trimmed: bool,
    #[serde(rename = "spriteSourceSize")]
    sprite_source_size: TPRect,
    #[serde(rename = "sourceSize")]
    source_size: TPSize,
}

#[derive(Serialize)]
struct TPRect {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct TPSize {
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct TPMeta {
    app: String,
    version: String,
    image: String,
    size: TPSize,
    scale: String,
}

impl TexturePackerJson {
    fn from_meta(meta: &SheetMeta) -> Self {
        let s = meta.scale.max(1);
        let frames = meta
            .frames
            .iter()
            .map(|f| {
                let (w, h) = (f.w * s, f.h * s);
                let frame = TPFrame {
                    frame: TPRect {
                        x: f.x * s,
                        y: f.y * s,
                        w,
                        h,
                    },
                    rotated: false,
                    trimmed: false,
                    sprite_source_size: TPRect { x: 0, y: 0, w, h },
                    source_size: TPSize { w, h },
                };
                (f.name.clone(), frame)
            })
            .collect();

        TexturePackerJson {
            frames,
            meta: TPMeta {
                app: "pxgen".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                image: meta.image.clone(),
                size: TPSize {
                    w: meta.size * s,
                    h: meta.size * s,
                },
                scale: s.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, size: u32, colour: Colour) -> (String, Canvas) {
        (name.to_string(), Canvas::new(size, colour))
    }

    #[test]
    fn test_columns() {
        assert_eq!(SheetBuilder::columns(0), 1);
        assert_eq!(SheetBuilder::columns(1), 1);
        assert_eq!(SheetBuilder::columns(2), 2);
        assert_eq!(SheetBuilder::columns(4), 2);
        assert_eq!(SheetBuilder::columns(5), 3);
        assert_eq!(SheetBuilder::columns(9), 3);
    }

    #[test]
    fn test_pack_empty() {
        let (sheet, meta) = SheetBuilder::new(2).pack(&[]);
        assert_eq!(sheet.size(), 0);
        assert!(meta.frames.is_empty());
    }

    #[test]
    fn test_pack_dimensions() {
        let items: Vec<_> = (0..5)
            .map(|i| item(&format!("a-{}", i), 16, Colour::BLACK))
            .collect();
        let (sheet, meta) = SheetBuilder::new(2).pack(&items);
        // 3 columns of 16 px with 2 px gaps and border
        assert_eq!(sheet.size(), 3 * (16 + 2) + 2);
        assert_eq!(meta.size, 56);
        assert_eq!(meta.frames[4], Frame { name: "a-4".into(), x: 20, y: 20, w: 16, h: 16 });
    }

    #[test]
    fn test_pack_preserves_pixel_data() {
        let red = Colour::rgb(255, 0, 0);
        let blue = Colour::rgb(0, 0, 255);
        let items = vec![item("a", 2, red), item("b", 2, blue)];
        let (sheet, meta) = SheetBuilder::new(1).pack(&items);

        for frame in &meta.frames {
            let pixel = sheet.get_pixel(frame.x as i32 + 1, frame.y as i32 + 1).unwrap();
            match frame.name.as_str() {
                "a" => assert_eq!(pixel, red),
                "b" => assert_eq!(pixel, blue),
                _ => panic!("unexpected frame"),
            }
        }
        // Border stays background
        assert_eq!(sheet.get_pixel(0, 0), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_write_sheet_json() {
        let items = vec![item("monster-0", 4, Colour::BLACK)];
        let (_, mut meta) = SheetBuilder::new(0).pack(&items);
        meta.scale = 2;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.json");
        write_sheet_json(&meta, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(parsed["frames"]["monster-0"]["frame"]["w"], 8);
        assert_eq!(parsed["frames"]["monster-0"]["rotated"], false);
        assert_eq!(parsed["meta"]["app"], "pxgen");
        assert_eq!(parsed["meta"]["image"], "sheet.png");
        assert_eq!(parsed["meta"]["size"]["w"], 8);
        assert_eq!(parsed["meta"]["scale"], "2");
    }
}
