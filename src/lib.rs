//! pxgen - Procedural pixel-art asset generator
//!
//! Composes small game assets (characters, monsters, props, weapons, scenes,
//! tile maps and UI widgets) from filled rectangles, circles and diamonds on
//! a square canvas, and encodes them as PNG.
//!
//! ```no_run
//! use pxgen::{generate_seeded, GenerationOptions};
//!
//! let options = GenerationOptions::default().with_size(64).with_palette("neon");
//! let png = generate_seeded("monster", &options, 42)?;
//! std::fs::write("monster.png", png)?;
//! # Ok::<(), pxgen::PxError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod output;
pub mod render;
pub mod types;

pub use config::Config;
pub use error::{PxError, Result};
pub use generate::{
    builtin_palettes, generate, generate_canvas, generate_seeded, generate_with_palettes,
    generator_for, DrawContext, Generator,
};
pub use render::{
    encode_png, fill_circle, fill_diamond, fill_rect, write_png, write_sheet_json, Canvas,
    SheetBuilder, SheetMeta,
};
pub use types::{Category, Colour, GenerationOptions, Palette, PaletteRegistry};
