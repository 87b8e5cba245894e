//! Named, ordered colour palettes and the registry that samples from them.
//!
//! Palettes are small closed sets of colours. Generators pick harmonious
//! colours by sampling a palette, and get cheap two-tone shading by stepping
//! to a neighbouring entry.

use rand::Rng;

use crate::error::{PxError, Result};

use super::Colour;

/// Name of the palette every lookup falls back to.
pub const DEFAULT_PALETTE: &str = "default";

/// An ordered, non-empty list of colours identified by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Palette name
    pub name: String,

    /// Colours in their defined order
    colours: Vec<Colour>,
}

impl Palette {
    /// Create a palette from resolved colours.
    ///
    /// Fails when `colours` is empty.
    pub fn new(name: impl Into<String>, colours: Vec<Colour>) -> Result<Self> {
        let name = name.into();
        if colours.is_empty() {
            return Err(PxError::Validation {
                message: format!("Palette '{}' has no colours", name),
                help: Some("Define at least one colour".to_string()),
            });
        }
        Ok(Self { name, colours })
    }

    /// Create a palette from hex strings.
    pub fn from_hex(name: impl Into<String>, hexes: &[&str]) -> Result<Self> {
        let colours = hexes
            .iter()
            .map(|h| Colour::from_hex(h))
            .collect::<Result<Vec<_>>>()?;
        Self::new(name, colours)
    }

    /// Colours in palette order.
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Get a colour by index.
    pub fn get(&self, index: usize) -> Option<Colour> {
        self.colours.get(index).copied()
    }

    /// Index of the first entry equal to `colour`.
    pub fn position(&self, colour: Colour) -> Option<usize> {
        self.colours.iter().position(|&c| c == colour)
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Always false for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Sample one colour uniformly.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Colour {
        self.colours[rng.gen_range(0..self.colours.len())]
    }

    /// Step `direction` entries away from `colour`, wrapping at both ends.
    ///
    /// Returns `colour` unchanged if it is not in the palette.
    pub fn adjacent(&self, colour: Colour, direction: i32) -> Colour {
        match self.position(colour) {
            Some(index) => {
                let len = self.colours.len() as i64;
                let next = (index as i64 + direction as i64).rem_euclid(len);
                self.colours[next as usize]
            }
            None => colour,
        }
    }
}

/// Builtin palette definitions, in registration order.
const BUILTIN_PALETTES: &[(&str, [u32; 16])] = &[
    (
        "default",
        [
            0x000000, 0xffffff, 0x888888, 0xff0000, 0x00ff00, 0x0000ff, 0xffff00, 0xff00ff,
            0x00ffff, 0xff8800, 0x8800ff, 0x0088ff, 0x88ff00, 0xff88ff, 0x888800, 0x880088,
        ],
    ),
    (
        "retro",
        [
            0x000000, 0x111111, 0x222222, 0x444444, 0x888888, 0xffffff, 0xff0000, 0x00ff00,
            0x0000ff, 0xffff00, 0xff00ff, 0x00ffff, 0xff8800, 0x8800ff, 0x0088ff, 0x88ff00,
        ],
    ),
    (
        "pastel",
        [
            0xffffff, 0xf0f0f0, 0xe0e0e0, 0xffaaaa, 0xaaffaa, 0xaaaaff, 0xffffaa, 0xffaaff,
            0xaaffff, 0xffaa88, 0x88aaff, 0x88ffaa, 0xffaaff, 0xaaaa88, 0xaa88aa, 0x88aaaa,
        ],
    ),
    (
        "dark",
        [
            0x000000, 0x111111, 0x222222, 0x333333, 0x880000, 0x008800, 0x000088, 0x888800,
            0x880088, 0x008888, 0x884400, 0x440088, 0x004488, 0x448800, 0x880044, 0x008844,
        ],
    ),
    (
        "neon",
        [
            0x000000, 0x111111, 0xffffff, 0xff0000, 0x00ff00, 0x0000ff, 0xffff00, 0xff00ff,
            0x00ffff, 0xff8800, 0x8800ff, 0x0088ff, 0x88ff00, 0xffaaff, 0x88ffff, 0xffff88,
        ],
    ),
];

/// Read-only collection of named palettes.
///
/// Always contains [`DEFAULT_PALETTE`]; lookups by unknown name resolve to it.
#[derive(Debug, Clone)]
pub struct PaletteRegistry {
    palettes: Vec<Palette>,
}

impl PaletteRegistry {
    /// Registry holding the builtin palettes (`default`, `retro`, `pastel`, `dark`, `neon`).
    pub fn builtin() -> Self {
        let palettes = BUILTIN_PALETTES
            .iter()
            .map(|(name, rgb)| Palette {
                name: (*name).to_string(),
                colours: rgb.iter().map(|&c| Colour::from_rgb_u32(c)).collect(),
            })
            .collect();
        Self { palettes }
    }

    /// Add or replace a palette.
    ///
    /// Replacing `default` is allowed; removing it is not possible.
    pub fn insert(&mut self, palette: Palette) {
        match self.palettes.iter_mut().find(|p| p.name == palette.name) {
            Some(existing) => *existing = palette,
            None => self.palettes.push(palette),
        }
    }

    /// Palette names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.iter().map(|p| p.name.as_str())
    }

    /// Check whether a palette with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Look up a palette without falling back.
    pub fn get(&self, name: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.name == name)
    }

    /// Look up a palette, falling back to `default` for unknown names.
    pub fn resolve(&self, name: &str) -> &Palette {
        self.get(name)
            .or_else(|| self.get(DEFAULT_PALETTE))
            .unwrap_or(&self.palettes[0])
    }

    /// Sample one colour uniformly from the resolved palette.
    pub fn random_colour<R: Rng + ?Sized>(&self, name: &str, rng: &mut R) -> Colour {
        self.resolve(name).random(rng)
    }

    /// Neighbouring colour in the resolved palette, or `colour` if absent.
    pub fn adjacent_colour(&self, colour: Colour, name: &str, direction: i32) -> Colour {
        self.resolve(name).adjacent(colour, direction)
    }

    /// Black or white, whichever reads better on `colour`.
    pub fn contrast_colour(colour: Colour) -> Colour {
        colour.contrast()
    }
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
