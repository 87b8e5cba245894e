//! Fixed real-world colours used by the categories that ignore the palette.

use crate::types::Colour;

pub const GOLD: Colour = Colour::from_rgb_u32(0xFFD700);
pub const ORANGE: Colour = Colour::from_rgb_u32(0xFFA500);
pub const GREEN: Colour = Colour::from_rgb_u32(0x00FF00);
pub const BROWN: Colour = Colour::from_rgb_u32(0x8B4513);
pub const SIENNA: Colour = Colour::from_rgb_u32(0xA0522D);
pub const CYAN: Colour = Colour::from_rgb_u32(0x00FFFF);
pub const SILVER: Colour = Colour::from_rgb_u32(0xC0C0C0);
pub const MAGENTA: Colour = Colour::from_rgb_u32(0xFF00FF);

/// Sky, also used for water tiles.
pub const SKY_BLUE: Colour = Colour::from_rgb_u32(0x87CEEB);
/// Ground, also used for grass tiles.
pub const FOREST_GREEN: Colour = Colour::from_rgb_u32(0x228B22);
pub const DARK_GREEN: Colour = Colour::from_rgb_u32(0x006400);
pub const AZURE: Colour = Colour::from_rgb_u32(0x0080FF);

pub const BUTTON_EDGE: Colour = Colour::from_rgb_u32(0x4A90E2);
pub const BUTTON_FACE: Colour = Colour::from_rgb_u32(0x5AA0F2);
pub const CHARCOAL: Colour = Colour::from_rgb_u32(0x333333);
pub const SLOT_GREY: Colour = Colour::from_rgb_u32(0x8B8B8B);
