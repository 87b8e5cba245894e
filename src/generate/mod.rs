//! Asset generation.
//!
//! Each category has a generator that composes primitive fills on a fresh
//! canvas. [`generate`] is the entry point: it validates the category,
//! normalizes the options, runs the generator and encodes the result as PNG.
//!
//! Randomness is always injected, so a seeded RNG reproduces an asset
//! exactly.

mod character;
mod colours;
mod map;
mod monster;
mod prop;
mod scene;
mod ui;
mod weapon;

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::debug;

use crate::error::Result;
use crate::render::Canvas;
use crate::types::{Category, Colour, GenerationOptions, PaletteRegistry};

pub use character::CharacterGenerator;
pub use map::{MapGenerator, Terrain, MAP_TILES};
pub use monster::MonsterGenerator;
pub use prop::{PropGenerator, PropKind};
pub use scene::SceneGenerator;
pub use ui::{UiGenerator, Widget};
pub use weapon::{WeaponGenerator, WeaponKind};

/// Per-call state handed to a generator.
pub struct DrawContext<'a> {
    /// Normalized options for this call.
    pub options: &'a GenerationOptions,

    /// Palettes to sample from.
    pub palettes: &'a PaletteRegistry,

    /// Random source for this call.
    pub rng: &'a mut dyn RngCore,
}

impl<'a> DrawContext<'a> {
    pub fn new(
        options: &'a GenerationOptions,
        palettes: &'a PaletteRegistry,
        rng: &'a mut dyn RngCore,
    ) -> Self {
        Self {
            options,
            palettes,
            rng,
        }
    }

    /// Canvas edge length.
    pub fn size(&self) -> i32 {
        self.options.size as i32
    }

    /// Sample a colour from the requested palette.
    pub fn random_colour(&mut self) -> Colour {
        self.palettes
            .random_colour(&self.options.colour_palette, &mut *self.rng)
    }

    /// The next colour after `colour` in the requested palette.
    pub fn adjacent_colour(&self, colour: Colour) -> Colour {
        self.palettes
            .adjacent_colour(colour, &self.options.colour_palette, 1)
    }

    /// Uniform integer in `[0, n)`, or 0 when `n <= 0`.
    pub fn below(&mut self, n: i32) -> i32 {
        if n <= 0 {
            0
        } else {
            self.rng.gen_range(0..n)
        }
    }

    /// Uniform float in `[0, 1)`.
    pub fn roll(&mut self) -> f64 {
        self.rng.gen()
    }

    /// Pick one element uniformly.
    pub fn pick<T: Copy>(&mut self, choices: &[T]) -> T {
        choices[self.rng.gen_range(0..choices.len())]
    }
}

/// A composition algorithm for one asset category.
pub trait Generator: Sync {
    /// Colour the canvas is cleared to before drawing.
    fn background(&self) -> Colour {
        Colour::BLACK
    }

    /// Draw the asset onto `canvas`.
    fn draw(&self, canvas: &mut Canvas, ctx: &mut DrawContext<'_>);
}

/// The generator for a category.
pub fn generator_for(category: Category) -> &'static dyn Generator {
    match category {
        Category::Character => &CharacterGenerator,
        Category::Monster => &MonsterGenerator,
        Category::Prop => &PropGenerator,
        Category::Weapon => &WeaponGenerator,
        Category::Scene => &SceneGenerator,
        Category::Map => &MapGenerator,
        Category::Ui => &UiGenerator,
    }
}

/// Shared builtin palette registry.
pub fn builtin_palettes() -> &'static PaletteRegistry {
    static PALETTES: OnceLock<PaletteRegistry> = OnceLock::new();
    PALETTES.get_or_init(PaletteRegistry::builtin)
}

/// Generate a finished canvas for an already-validated category.
pub fn generate_canvas<R: RngCore>(
    category: Category,
    options: &GenerationOptions,
    palettes: &PaletteRegistry,
    rng: &mut R,
) -> Canvas {
    let options = options.normalized();
    debug!(
        %category,
        size = options.size,
        palette = %options.colour_palette,
        style = %options.style,
        "generating asset"
    );

    let generator = generator_for(category);
    let mut canvas = Canvas::new(options.size, generator.background());
    let mut ctx = DrawContext::new(&options, palettes, rng);
    generator.draw(&mut canvas, &mut ctx);
    canvas
}

/// Generate an asset and encode it as PNG.
///
/// Fails with `UnsupportedCategory` before any drawing when `category` is not
/// one of the seven known names.
pub fn generate<R: RngCore>(
    category: &str,
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<Vec<u8>> {
    generate_with_palettes(category, options, builtin_palettes(), rng)
}

/// [`generate`] with a caller-supplied palette registry.
pub fn generate_with_palettes<R: RngCore>(
    category: &str,
    options: &GenerationOptions,
    palettes: &PaletteRegistry,
    rng: &mut R,
) -> Result<Vec<u8>> {
    let category: Category = category.parse()?;
    generate_canvas(category, options, palettes, rng).encode()
}

/// [`generate`] with a fresh RNG seeded from `seed`.
pub fn generate_seeded(category: &str, options: &GenerationOptions, seed: u64) -> Result<Vec<u8>> {
    generate(category, options, &mut StdRng::seed_from_u64(seed))
}
