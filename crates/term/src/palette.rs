//! Tile colours by block value.

use crate::fb::Rgb;

/// Background and text colour of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileColors {
    pub bg: Rgb,
    pub fg: Rgb,
}

const WHITE: Rgb = Rgb::new(255, 255, 255);
const BLACK: Rgb = Rgb::new(20, 20, 20);

const fn tile(bg: Rgb, fg: Rgb) -> TileColors {
    TileColors { bg, fg }
}

/// Values past the table, and any non-tabled value, use this.
pub const FALLBACK: TileColors = tile(Rgb::new(107, 114, 128), WHITE);

/// Colours for a block value.
pub fn tile_colors(value: u32) -> TileColors {
    match value {
        2 => tile(Rgb::new(59, 130, 246), WHITE),
        4 => tile(Rgb::new(6, 182, 212), WHITE),
        8 => tile(Rgb::new(16, 185, 129), WHITE),
        16 => tile(Rgb::new(34, 197, 94), WHITE),
        32 => tile(Rgb::new(168, 85, 247), WHITE),
        64 => tile(Rgb::new(139, 92, 246), WHITE),
        128 => tile(Rgb::new(245, 158, 11), WHITE),
        256 => tile(Rgb::new(234, 179, 8), BLACK),
        512 => tile(Rgb::new(249, 115, 22), WHITE),
        1024 => tile(Rgb::new(244, 63, 94), WHITE),
        2048 => tile(Rgb::new(251, 191, 36), BLACK),
        4096 => tile(Rgb::new(236, 72, 153), WHITE),
        _ => FALLBACK,
    }
}
