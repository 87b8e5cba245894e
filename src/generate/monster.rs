//! Blob monster with a scatter of eyes and a row of teeth.

use crate::render::{fill_rect, Canvas};
use crate::types::Colour;

use super::{DrawContext, Generator};

/// Number of teeth along the bottom of the body.
const TEETH: usize = 5;

/// Draws a round body in a palette colour with 1-3 eyes and palette-adjacent teeth.
pub struct MonsterGenerator;

impl Generator for MonsterGenerator {
    fn draw(&self, canvas: &mut Canvas, ctx: &mut DrawContext<'_>) {
        let main = ctx.random_colour();
        let secondary = ctx.adjacent_colour(main);

        let size = ctx.size();
        let (cx, cy) = (size / 2, size / 2);
        let radius = size / 3;

        // Body: strict distance test, so the rim sits just inside `radius`
        let r2 = radius * radius;
        for y in 0..size {
            for x in 0..size {
                let (dx, dy) = (x - cx, y - cy);
                if dx * dx + dy * dy < r2 {
                    canvas.set_pixel(x, y, main);
                }
            }
        }

        let eye_size = eye_size(radius);
        for (ex, ey) in place_eyes(ctx, cx, cy, radius) {
            fill_rect(canvas, ex, ey, eye_size, eye_size, Colour::BLACK);
            fill_rect(canvas, ex + 1, ey + 1, eye_size - 2, eye_size - 2, Colour::WHITE);
        }

        for _ in 0..TEETH {
            let tx = cx + ctx.below(radius) - radius / 2;
            let ty = cy + radius - 2;
            let length = 1 + ctx.below(4);
            fill_rect(canvas, tx, ty, 1, length, secondary);
        }
    }
}

/// Edge of an eye's black square; the white pupil is inset by one pixel.
fn eye_size(radius: i32) -> i32 {
    (radius / 5).max(1)
}

/// Top-left corners of 1 to 3 eyes, in the upper-middle of the body.
fn place_eyes(ctx: &mut DrawContext<'_>, cx: i32, cy: i32, radius: i32) -> Vec<(i32, i32)> {
    let eyes = 1 + ctx.below(3);
    (0..eyes)
        .map(|_| {
            let ex = cx + ctx.below(radius) - radius / 2;
            let ey = cy + ctx.below((radius + 1) / 2) - radius / 4;
            (ex, ey)
        })
        .collect()
}
