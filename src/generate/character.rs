//! Humanoid character: head, hair, body, arms and legs.

use crate::render::{fill_rect, Canvas};
use crate::types::Colour;

use super::{DrawContext, Generator};

/// Draws a front-facing figure from four palette colours.
pub struct CharacterGenerator;

impl Generator for CharacterGenerator {
    fn draw(&self, canvas: &mut Canvas, ctx: &mut DrawContext<'_>) {
        let skin = ctx.random_colour();
        let hair = ctx.random_colour();
        let clothes = ctx.random_colour();
        let pants = ctx.random_colour();

        let size = ctx.size();
        let cx = size / 2;
        let head = size / 3;
        let body = size / 2;
        let body_w = ratio(body, 2, 3);
        let limb_w = ratio(body, 1, 6).max(1);

        // Head with a hair band across the top
        fill_rect(canvas, cx - head / 2, 0, head, head, skin);
        fill_rect(canvas, cx - head / 2 - 1, -1, head + 2, 4, hair);

        // Torso and arms
        fill_rect(canvas, cx - ratio(body, 1, 3), head, body_w, body, clothes);
        fill_rect(canvas, cx - body_w, head + 2, limb_w, body_w, clothes);
        fill_rect(canvas, cx + ratio(body, 1, 3), head + 2, limb_w, body_w, clothes);

        // Legs
        fill_rect(canvas, cx - limb_w, head + body, limb_w, body / 2, pants);
        fill_rect(canvas, cx, head + body, limb_w, body / 2, pants);

        // Face goes on last
        let eye = (head / 6).max(1);
        fill_rect(canvas, cx - head / 4, head / 4, eye, eye, Colour::BLACK);
        fill_rect(canvas, cx + head / 6, head / 4, eye, eye, Colour::BLACK);
        fill_rect(canvas, cx - head / 6, head / 2, head / 3, eye, Colour::RED);
    }
}

/// `value * num / den`, rounded to the nearest pixel.
fn ratio(value: i32, num: i32, den: i32) -> i32 {
    (value * num * 2 + den) / (den * 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{builtin_palettes, generate_canvas};
    use crate::types::{Category, GenerationOptions};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn draw(size: u32, palette: &str, seed: u64) -> Canvas {
        let options = GenerationOptions::default().with_size(size).with_palette(palette);
        let mut rng = StdRng::seed_from_u64(seed);
        generate_canvas(Category::Character, &options, builtin_palettes(), &mut rng)
    }

    #[test]
    fn test_ratio() {
        assert_eq!(ratio(16, 2, 3), 11);
        assert_eq!(ratio(16, 1, 6), 3);
        assert_eq!(ratio(8, 1, 3), 3);
        assert_eq!(ratio(0, 2, 3), 0);
    }

    #[test]
    fn test_face_is_drawn() {
        // head = 10, eye size = 1, eyes at row 2, mouth at row 5
        let canvas = draw(32, "pastel", 4);
        assert_eq!(canvas.get_pixel(16 - 2, 2), Some(Colour::BLACK));
        assert_eq!(canvas.get_pixel(16 + 1, 2), Some(Colour::BLACK));
        assert_eq!(canvas.get_pixel(16 - 1, 5), Some(Colour::RED));
    }

    #[test]
    fn test_body_uses_palette_colours() {
        // pastel has no black, so any non-black pixel on the torso came from the palette
        let palette = builtin_palettes().resolve("pastel");
        for seed in 0..10 {
            let canvas = draw(32, "pastel", seed);
            let torso = canvas.get_pixel(16, 20).unwrap();
            assert!(palette.position(torso).is_some());
            let leg = canvas.get_pixel(16, 26).unwrap();
            assert!(palette.position(leg).is_some());
        }
    }

    #[test]
    fn test_corners_stay_background() {
        let canvas = draw(64, "default", 1);
        assert_eq!(canvas.get_pixel(0, 63), Some(Colour::BLACK));
        assert_eq!(canvas.get_pixel(63, 63), Some(Colour::BLACK));
    }
}
