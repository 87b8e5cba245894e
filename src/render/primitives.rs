//! Filled shape primitives.
//!
//! Every generator is a composition of these three fills plus direct pixel
//! writes. Iteration is limited to the part of the bounding box that overlaps
//! the canvas; anything outside is dropped by [`Canvas::set_pixel`].

use std::ops::RangeInclusive;

use crate::types::Colour;

use super::Canvas;

/// Fill cells `[x, x+w) × [y, y+h)`. Non-positive `w` or `h` draws nothing.
pub fn fill_rect(canvas: &mut Canvas, x: i32, y: i32, w: i32, h: i32, colour: Colour) {
    if w <= 0 || h <= 0 {
        return;
    }
    let xs = clip(canvas, x as i64, x as i64 + w as i64 - 1);
    let ys = clip(canvas, y as i64, y as i64 + h as i64 - 1);
    for j in ys {
        for i in xs.clone() {
            canvas.set_pixel(i, j, colour);
        }
    }
}

/// Fill cells within Euclidean distance `r` of `(cx, cy)`, boundary included.
pub fn fill_circle(canvas: &mut Canvas, cx: i32, cy: i32, r: i32, colour: Colour) {
    let r2 = (r as i64) * (r as i64);
    fill_within(canvas, cx, cy, r, colour, |dx, dy| dx * dx + dy * dy <= r2);
}

/// Fill cells within Manhattan distance `r` of `(cx, cy)`, giving a diamond.
pub fn fill_diamond(canvas: &mut Canvas, cx: i32, cy: i32, r: i32, colour: Colour) {
    let reach = r as i64;
    fill_within(canvas, cx, cy, r, colour, |dx, dy| dx.abs() + dy.abs() <= reach);
}

/// Test every cell in the `[c-r, c+r]` box against `inside(dx, dy)`.
fn fill_within(
    canvas: &mut Canvas,
    cx: i32,
    cy: i32,
    r: i32,
    colour: Colour,
    inside: impl Fn(i64, i64) -> bool,
) {
    if r < 0 {
        return;
    }
    let (cx, cy, r) = (cx as i64, cy as i64, r as i64);
    let xs = clip(canvas, cx - r, cx + r);
    let ys = clip(canvas, cy - r, cy + r);
    for j in ys {
        for i in xs.clone() {
            if inside(i as i64 - cx, j as i64 - cy) {
                canvas.set_pixel(i, j, colour);
            }
        }
    }
}

/// Intersect the inclusive span `[lo, hi]` with the canvas.
fn clip(canvas: &Canvas, lo: i64, hi: i64) -> RangeInclusive<i32> {
    let max = canvas.size() as i64 - 1;
    let lo = lo.max(0);
    let hi = hi.min(max);
    if lo > hi {
        // Empty range.
        return 1..=0;
    }
    lo as i32..=hi as i32
}
