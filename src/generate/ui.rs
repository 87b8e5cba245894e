//! Stock HUD widgets: button, health bar, coin counter, inventory slot, menu icon.

use tracing::trace;

use crate::render::{fill_circle, fill_rect, Canvas};
use crate::types::Colour;

use super::colours::{BUTTON_EDGE, BUTTON_FACE, CHARCOAL, GOLD, SLOT_GREY};
use super::{DrawContext, Generator};

/// The widget variants, chosen uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    Button,
    HealthBar,
    CoinDisplay,
    InventorySlot,
    MenuIcon,
}

impl Widget {
    pub const ALL: [Widget; 5] = [
        Widget::Button,
        Widget::HealthBar,
        Widget::CoinDisplay,
        Widget::InventorySlot,
        Widget::MenuIcon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Widget::Button => "button",
            Widget::HealthBar => "healthbar",
            Widget::CoinDisplay => "coinDisplay",
            Widget::InventorySlot => "inventorySlot",
            Widget::MenuIcon => "menuIcon",
        }
    }

    /// Draw this widget. Positions are fractions of a 32 px layout.
    pub fn draw(self, canvas: &mut Canvas) {
        let size = canvas.size() as i32;
        let mid = size / 2;
        // Scale a coordinate from the 32 px layout
        let at = |v: i32| v * size / 32;

        match self {
            Widget::Button => {
                fill_rect(canvas, 2, 2, size - 4, size - 4, BUTTON_EDGE);
                fill_rect(canvas, 3, 3, size - 6, size - 6, BUTTON_FACE);
            }
            Widget::HealthBar => {
                fill_rect(canvas, 2, mid - 3, size - 4, 6, CHARCOAL);
                fill_rect(canvas, 4, mid - 1, size - 8, 2, Colour::RED);
            }
            Widget::CoinDisplay => {
                let digit = at(4).max(1);
                fill_circle(canvas, at(8), mid, at(4), GOLD);
                fill_rect(canvas, at(15), mid - digit / 2, digit, digit, Colour::WHITE);
                fill_rect(canvas, at(20), mid - digit / 2, digit, digit, Colour::WHITE);
            }
            Widget::InventorySlot => {
                fill_rect(canvas, 1, 1, size - 2, size - 2, SLOT_GREY);
                fill_rect(canvas, 2, 2, size - 4, size - 4, CHARCOAL);
            }
            Widget::MenuIcon => {
                let bar = at(3).max(1);
                for i in 0..3 {
                    fill_rect(canvas, at(4), at(6 + i * 5), size - 2 * at(4), bar, Colour::WHITE);
                }
            }
        }
    }
}

/// Draws one randomly chosen [`Widget`].
pub struct UiGenerator;

impl Generator for UiGenerator {
    fn draw(&self, canvas: &mut Canvas, ctx: &mut DrawContext<'_>) {
        let widget = ctx.pick(&Widget::ALL);
        trace!(widget = widget.name(), "ui");
        widget.draw(canvas);
    }
}
