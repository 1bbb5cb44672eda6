//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Block, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::palette::tile_colors;
use crate::types::{Position, SPAWN_ROW};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const DANGER_BG: Rgb = Rgb::new(55, 30, 38);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the falling-block board.
pub struct GameView {
    /// Board cell width in terminal columns. Wide enough for "2048".
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 6,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Board frame placement inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the bordered board for a snapshot, in terminal cells.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let w = snap.grid.width() as u16 * self.cell_w + 2;
        let h = snap.grid.height() as u16 * self.cell_h + 2;
        (w, h)
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap);
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
            w: frame_w,
            h: frame_h,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, frame, border);

        for y in 0..snap.grid.height() {
            for x in 0..snap.grid.width() {
                match snap.grid.get(Position::new(x, y)) {
                    Some(block) => self.draw_tile(fb, frame, block, block.merging),
                    None => self.draw_empty_cell(fb, frame, x, y),
                }
            }
        }

        // Landing preview, then the active block on top of it.
        if let (Some(active), Some(landing_y)) = (snap.active, snap.landing_y) {
            if landing_y != active.y {
                self.draw_preview(fb, frame, &active, landing_y);
            }
        }
        if let Some(active) = snap.active {
            self.draw_tile(fb, frame, &active, true);
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.paused {
            self.draw_overlay_text(fb, frame, "PAUSED", None);
        } else if snap.game_over {
            self.draw_overlay_text(fb, frame, "GAME OVER", Some("Enter: restart"));
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Top-left terminal cell of a board cell.
    fn cell_origin(&self, frame: Frame, x: u8, y: u8) -> (u16, u16) {
        (
            frame.x + 1 + x as u16 * self.cell_w,
            frame.y + 1 + y as u16 * self.cell_h,
        )
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u8, y: u8) {
        let bg = if y == SPAWN_ROW { DANGER_BG } else { BOARD_BG };
        let (px, py) = self.cell_origin(frame, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', CellStyle::new(bg, bg));

        let dot = CellStyle::new(Rgb::new(90, 90, 100), bg).dim();
        fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, '·', dot);
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, frame: Frame, block: &Block, bold: bool) {
        let colors = tile_colors(block.value);
        let (px, py) = self.cell_origin(frame, block.x, block.y);
        let mut style = CellStyle::new(colors.fg, colors.bg);
        if bold {
            style = style.bold();
        }
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        let digits = digit_count(block.value);
        let label_y = py + self.cell_h / 2;
        if digits <= self.cell_w {
            fb.put_u32(px + (self.cell_w - digits) / 2, label_y, block.value, style);
        } else {
            fb.put_char(px + self.cell_w / 2, label_y, '*', style);
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, frame: Frame, active: &Block, landing_y: u8) {
        let colors = tile_colors(active.value);
        let (px, py) = self.cell_origin(frame, active.x, landing_y);
        let style = CellStyle::new(colors.bg, BOARD_BG).dim();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '░', style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let dim = value.dim();

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        let n = fb.put_u32(panel_x, y, snap.best_score, value);
        if snap.store_degraded && panel_w >= 20 {
            fb.put_str(panel_x + n + 1, y, "(unsaved)", dim);
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if snap.next_value > 0 {
            let colors = tile_colors(snap.next_value);
            let swatch = CellStyle::new(colors.fg, colors.bg).bold();
            let digits = digit_count(snap.next_value);
            let w = self.cell_w.max(digits);
            fb.fill_rect(panel_x, y, w, 1, ' ', swatch);
            fb.put_u32(panel_x + (w - digits) / 2, y, snap.next_value, swatch);
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TIER", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, snap.difficulty.label(), value);
        y = y.saturating_add(2);

        if y < viewport.height && panel_w >= 16 {
            fb.put_str(panel_x, y, "←→ move  ↓ fast", dim);
            y = y.saturating_add(1);
            fb.put_str(panel_x, y, "space drop  p pause", dim);
            y = y.saturating_add(1);
            fb.put_str(panel_x, y, "r reset  q quit", dim);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str, hint: Option<&str>) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        put_centered(fb, frame, mid_y, text, style);
        if let Some(hint) = hint {
            let hint_style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
            put_centered(fb, frame, mid_y.saturating_add(1), hint, hint_style);
        }
    }
}

fn put_centered(fb: &mut FrameBuffer, frame: Frame, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    fb.put_str(x, y, text, style);
}

fn digit_count(mut value: u32) -> u16 {
    let mut n = 1;
    while value >= 10 {
        value /= 10;
        n += 1;
    }
    n
}
