//! Collectable props: coin, potion, key, gem, box.
//!
//! Props use fixed real-world colours rather than the requested palette, so
//! a coin is always gold.

use tracing::trace;

use crate::render::{fill_circle, fill_diamond, fill_rect, Canvas};

use super::colours::{BROWN, CYAN, GOLD, GREEN, ORANGE, SIENNA};
use super::{DrawContext, Generator};

/// The prop variants, chosen uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropKind {
    Coin,
    Potion,
    Key,
    Gem,
    Box,
}

impl PropKind {
    pub const ALL: [PropKind; 5] = [
        PropKind::Coin,
        PropKind::Potion,
        PropKind::Key,
        PropKind::Gem,
        PropKind::Box,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PropKind::Coin => "coin",
            PropKind::Potion => "potion",
            PropKind::Key => "key",
            PropKind::Gem => "gem",
            PropKind::Box => "box",
        }
    }

    /// Draw this prop centred on the canvas.
    ///
    /// Small fixed-size details grow by one step per 32 px of canvas.
    pub fn draw(self, canvas: &mut Canvas) {
        let size = canvas.size() as i32;
        let (cx, cy) = (size / 2, size / 2);
        let u = (size / 32).max(1);

        match self {
            PropKind::Coin => {
                fill_circle(canvas, cx, cy, size / 3, GOLD);
                fill_circle(canvas, cx, cy, size / 5, ORANGE);
            }
            PropKind::Potion => {
                fill_rect(canvas, cx - 3 * u, cy - 6 * u, 6 * u, 10 * u, GREEN);
                fill_rect(canvas, cx - 4 * u, cy - 8 * u, 8 * u, 2 * u, BROWN);
            }
            PropKind::Key => {
                fill_rect(canvas, cx - 2 * u, cy - 5 * u, 4 * u, 10 * u, GOLD);
                fill_rect(canvas, cx + 2 * u, cy - 3 * u, 3 * u, 2 * u, GOLD);
            }
            PropKind::Gem => {
                fill_diamond(canvas, cx, cy, size / 4, CYAN);
            }
            PropKind::Box => {
                fill_rect(canvas, cx - 4 * u, cy - 4 * u, 8 * u, 8 * u, BROWN);
                fill_rect(canvas, cx - 3 * u, cy - 3 * u, 6 * u, 6 * u, SIENNA);
            }
        }
    }
}

/// Draws one randomly chosen [`PropKind`].
pub struct PropGenerator;

impl Generator for PropGenerator {
    fn draw(&self, canvas: &mut Canvas, ctx: &mut DrawContext<'_>) {
        let kind = ctx.pick(&PropKind::ALL);
        trace!(kind = kind.name(), "prop");
        kind.draw(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;

    fn drawn(kind: PropKind, size: u32) -> Canvas {
        let mut canvas = Canvas::new(size, Colour::BLACK);
        kind.draw(&mut canvas);
        canvas
    }

    #[test]
    fn test_coin_has_gold_rim_and_orange_centre() {
        let canvas = drawn(PropKind::Coin, 32);
        assert_eq!(canvas.get_pixel(16, 16), Some(ORANGE));
        assert_eq!(canvas.get_pixel(16 + 8, 16), Some(GOLD));
        assert_eq!(canvas.get_pixel(0, 0), Some(Colour::BLACK));
    }

    #[test]
    fn test_potion() {
        let canvas = drawn(PropKind::Potion, 32);
        assert_eq!(canvas.count(GREEN), 60);
        // The cork sits on rows 8..10, above the bottle
        assert_eq!(canvas.get_pixel(12, 8), Some(BROWN));
        assert_eq!(canvas.count(BROWN), 16);
    }

    #[test]
    fn test_key() {
        let canvas = drawn(PropKind::Key, 32);
        assert_eq!(canvas.count(GOLD), 4 * 10 + 3 * 2);
    }

    #[test]
    fn test_gem_is_a_diamond() {
        let canvas = drawn(PropKind::Gem, 32);
        // Manhattan radius 8: 2r^2 + 2r + 1 cells
        assert_eq!(canvas.count(CYAN), 2 * 64 + 16 + 1);
    }

    #[test]
    fn test_box_has_border() {
        let canvas = drawn(PropKind::Box, 32);
        assert_eq!(canvas.count(SIENNA), 36);
        assert_eq!(canvas.count(BROWN), 64 - 36);
    }

    #[test]
    fn test_details_scale_with_canvas() {
        let small = drawn(PropKind::Box, 32);
        let large = drawn(PropKind::Box, 128);
        assert_eq!(large.count(SIENNA), small.count(SIENNA) * 16);
    }

    #[test]
    fn test_every_kind_draws_something() {
        for kind in PropKind::ALL {
            let canvas = drawn(kind, 16);
            assert!(canvas.count(Colour::BLACK) < 256, "{}", kind.name());
        }
    }
}
