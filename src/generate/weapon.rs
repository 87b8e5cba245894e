//! Weapons: sword, axe, bow, staff, dagger.
//!
//! Like props, weapons use fixed material colours (steel, wood) rather than
//! the requested palette.

use tracing::trace;

use crate::render::{fill_circle, fill_rect, Canvas};

use super::colours::{BROWN, MAGENTA, SILVER};
use super::{DrawContext, Generator};

/// The weapon variants, chosen uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponKind {
    Sword,
    Axe,
    Bow,
    Staff,
    Dagger,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 5] = [
        WeaponKind::Sword,
        WeaponKind::Axe,
        WeaponKind::Bow,
        WeaponKind::Staff,
        WeaponKind::Dagger,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WeaponKind::Sword => "sword",
            WeaponKind::Axe => "axe",
            WeaponKind::Bow => "bow",
            WeaponKind::Staff => "staff",
            WeaponKind::Dagger => "dagger",
        }
    }

    /// Draw this weapon centred on the canvas, scaled in 32 px steps.
    pub fn draw(self, canvas: &mut Canvas) {
        let size = canvas.size() as i32;
        let (cx, cy) = (size / 2, size / 2);
        let u = (size / 32).max(1);

        match self {
            WeaponKind::Sword => {
                fill_rect(canvas, cx - u, cy - 8 * u, 2 * u, 12 * u, SILVER);
                fill_rect(canvas, cx - 3 * u, cy - 10 * u, 6 * u, 4 * u, BROWN);
            }
            WeaponKind::Axe => {
                fill_rect(canvas, cx - u, cy - 6 * u, 2 * u, 10 * u, BROWN);
                fill_rect(canvas, cx + u, cy - 8 * u, 4 * u, 6 * u, SILVER);
            }
            WeaponKind::Bow => {
                fill_rect(canvas, cx - 5 * u, cy, 10 * u, 2 * u, BROWN);
                fill_rect(canvas, cx - 5 * u, cy - u, u, 4 * u, BROWN);
                fill_rect(canvas, cx + 4 * u, cy - u, u, 4 * u, BROWN);
            }
            WeaponKind::Staff => {
                fill_rect(canvas, cx - u, cy - 10 * u, 2 * u, 14 * u, BROWN);
                fill_circle(canvas, cx, cy - 12 * u, 3 * u, MAGENTA);
            }
            WeaponKind::Dagger => {
                fill_rect(canvas, cx - u, cy - 4 * u, 2 * u, 8 * u, SILVER);
                fill_rect(canvas, cx - 2 * u, cy + 2 * u, 4 * u, 3 * u, BROWN);
            }
        }
    }
}

/// Draws one randomly chosen [`WeaponKind`].
pub struct WeaponGenerator;

impl Generator for WeaponGenerator {
    fn draw(&self, canvas: &mut Canvas, ctx: &mut DrawContext<'_>) {
        let kind = ctx.pick(&WeaponKind::ALL);
        trace!(kind = kind.name(), "weapon");
        kind.draw(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;

    fn drawn(kind: WeaponKind, size: u32) -> Canvas {
        let mut canvas = Canvas::new(size, Colour::BLACK);
        kind.draw(&mut canvas);
        canvas
    }

    #[test]
    fn test_sword_guard_overlaps_blade() {
        let canvas = drawn(WeaponKind::Sword, 32);
        // Blade rows 8..20, guard rows 6..10 drawn on top
        assert_eq!(canvas.get_pixel(16, 15), Some(SILVER));
        assert_eq!(canvas.get_pixel(16, 8), Some(BROWN));
        assert_eq!(canvas.count(SILVER), 2 * 12 - 2 * 2);
    }

    #[test]
    fn test_bow_limbs() {
        let canvas = drawn(WeaponKind::Bow, 32);
        assert_eq!(canvas.get_pixel(11, 15), Some(BROWN));
        assert_eq!(canvas.get_pixel(20, 15), Some(BROWN));
        assert_eq!(canvas.count(BROWN), 20 + 2 + 2);
    }

    #[test]
    fn test_staff_orb() {
        let canvas = drawn(WeaponKind::Staff, 32);
        assert_eq!(canvas.get_pixel(16, 4), Some(MAGENTA));
        assert!(canvas.count(MAGENTA) > 0);
    }

    #[test]
    fn test_weapons_use_fixed_colours_only() {
        for kind in WeaponKind::ALL {
            let canvas = drawn(kind, 32);
            for &px in canvas.pixels().iter().flatten() {
                assert!(
                    [Colour::BLACK, SILVER, BROWN, MAGENTA].contains(&px),
                    "{} drew {}",
                    kind.name(),
                    px
                );
            }
        }
    }

    #[test]
    fn test_staff_orb_clips_on_small_canvas() {
        // Orb centre is above the top edge at 16 px; drawing must not panic.
        let canvas = drawn(WeaponKind::Staff, 16);
        assert!(canvas.count(BROWN) > 0);
    }
}
