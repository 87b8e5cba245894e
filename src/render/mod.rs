//! Rendering module for pxgen.
//!
//! This module holds the pixel canvas, the shape primitives generators draw
//! with, and PNG / contact sheet output.

mod canvas;
mod png;
pub mod primitives;
mod sheet;

pub use canvas::Canvas;
pub use png::{encode_png, scaled_edge, write_png, MAX_OUTPUT_EDGE};
pub use primitives::{fill_circle, fill_diamond, fill_rect};
pub use sheet::{write_sheet_json, Frame, SheetBuilder, SheetMeta};
