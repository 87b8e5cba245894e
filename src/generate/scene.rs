//! Outdoor scene: sky over ground, a few trees and a cloud.

use crate::render::{fill_circle, fill_rect, Canvas};
use crate::types::Colour;

use super::colours::{AZURE, BROWN, DARK_GREEN, FOREST_GREEN, SKY_BLUE};
use super::{DrawContext, Generator};

/// Number of trees scattered over the ground.
const TREES: usize = 3;

/// Cloud puffs as `(x, y)` on a 32 px canvas; radius is 3 at that size.
const CLOUD: [(i32, i32); 3] = [(10, 8), (13, 9), (11, 11)];

/// Draws a horizon split with randomly placed trees and a fixed cloud.
pub struct SceneGenerator;

impl Generator for SceneGenerator {
    fn background(&self) -> Colour {
        AZURE
    }

    fn draw(&self, canvas: &mut Canvas, ctx: &mut DrawContext<'_>) {
        let size = ctx.size();
        let horizon = size / 2;
        let u = (size / 32).max(1);

        fill_rect(canvas, 0, 0, size, horizon, SKY_BLUE);
        fill_rect(canvas, 0, horizon, size, size - horizon, FOREST_GREEN);

        for _ in 0..TREES {
            let x = ctx.below(size);
            let y = horizon + ctx.below((size + 3) / 4);
            fill_rect(canvas, x, y - 4 * u, u, 5 * u, BROWN);
            fill_circle(canvas, x, y - 5 * u, 3 * u, DARK_GREEN);
        }

        for (x, y) in CLOUD {
            fill_circle(canvas, x * u, y * u, 3 * u, Colour::WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{builtin_palettes, generate_canvas};
    use crate::types::{Category, GenerationOptions};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn draw(size: u32, seed: u64) -> Canvas {
        let options = GenerationOptions::default().with_size(size);
        let mut rng = StdRng::seed_from_u64(seed);
        generate_canvas(Category::Scene, &options, builtin_palettes(), &mut rng)
    }

    #[test]
    fn test_sky_and_ground() {
        for seed in 0..20 {
            let canvas = draw(64, seed);
            assert_eq!(canvas.get_pixel(0, 0), Some(SKY_BLUE));
            assert_eq!(canvas.get_pixel(63, 0), Some(SKY_BLUE));
            // Trees never reach the bottom row
            for x in 0..64 {
                assert_eq!(canvas.get_pixel(x, 63), Some(FOREST_GREEN));
            }
        }
    }

    #[test]
    fn test_cloud_is_fixed() {
        for seed in 0..5 {
            let canvas = draw(32, seed);
            assert_eq!(canvas.get_pixel(10, 8), Some(Colour::WHITE));
            assert_eq!(canvas.get_pixel(13, 9), Some(Colour::WHITE));
            assert_eq!(canvas.get_pixel(11, 11), Some(Colour::WHITE));
        }
    }

    #[test]
    fn test_trees_are_planted() {
        let canvas = draw(64, 3);
        assert!(canvas.count(DARK_GREEN) > 0);
        assert!(canvas.count(BROWN) > 0);
    }

    #[test]
    fn test_no_background_left_on_even_sizes() {
        for size in [16, 32, 64] {
            assert_eq!(draw(size, 1).count(AZURE), 0);
        }
    }
}
