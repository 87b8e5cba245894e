//! Core domain types for pxgen.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Colour` - RGBA colour values
//! - `Palette` / `PaletteRegistry` - Ordered, named colour collections
//! - `Category` / `GenerationOptions` - What to generate and how

mod colour;
mod options;
mod palette;

pub use colour::Colour;
pub use options::{Category, GenerationOptions, DEFAULT_SIZE, DEFAULT_STYLE, MAX_SIZE};
pub use palette::{Palette, PaletteRegistry, DEFAULT_PALETTE};
