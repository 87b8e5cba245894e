//! Overworld tile map: an 8×8 grid of weighted random terrain.

use crate::render::{fill_rect, Canvas};
use crate::types::Colour;

use super::colours::{BROWN, FOREST_GREEN, SIENNA, SILVER, SKY_BLUE};
use super::{DrawContext, Generator};

/// Tiles per map edge.
pub const MAP_TILES: i32 = 8;

/// A terrain type and its tile colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    Grass,
    Water,
    Dirt,
    Tree,
    Stone,
}

impl Terrain {
    pub const ALL: [Terrain; 5] = [
        Terrain::Grass,
        Terrain::Water,
        Terrain::Dirt,
        Terrain::Tree,
        Terrain::Stone,
    ];

    /// Map a uniform roll in `[0, 1]` to terrain.
    ///
    /// Bands: grass 60%, water 10%, dirt 15%, tree 10%, stone 5%.
    pub fn from_roll(roll: f64) -> Self {
        if roll < 0.6 {
            Terrain::Grass
        } else if roll < 0.7 {
            Terrain::Water
        } else if roll < 0.85 {
            Terrain::Dirt
        } else if roll < 0.95 {
            Terrain::Tree
        } else {
            Terrain::Stone
        }
    }

    pub fn colour(self) -> Colour {
        match self {
            Terrain::Grass => FOREST_GREEN,
            Terrain::Water => SKY_BLUE,
            Terrain::Dirt => SIENNA,
            Terrain::Tree => BROWN,
            Terrain::Stone => SILVER,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Terrain::Grass => "grass",
            Terrain::Water => "water",
            Terrain::Dirt => "dirt",
            Terrain::Tree => "tree",
            Terrain::Stone => "stone",
        }
    }
}

/// Fills each tile with terrain chosen by a fresh roll, column by column.
pub struct MapGenerator;

impl Generator for MapGenerator {
    fn draw(&self, canvas: &mut Canvas, ctx: &mut DrawContext<'_>) {
        let tile = ctx.size() / MAP_TILES;
        for x in 0..MAP_TILES {
            for y in 0..MAP_TILES {
                let terrain = Terrain::from_roll(ctx.roll());
                fill_rect(canvas, x * tile, y * tile, tile, tile, terrain.colour());
            }
        }
    }
}
