//! GameView: maps `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Rgb};
use crate::types::{Cell, GRID_HEIGHT, GRID_WIDTH};

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

const ARENA_BG: Rgb = Rgb::new(24, 26, 32);
const BORDER_FG: Rgb = Rgb::new(200, 200, 200);
const BODY_FG: Rgb = Rgb::new(80, 200, 110);
const HEAD_FG: Rgb = Rgb::new(170, 255, 190);
const FOOD_FG: Rgb = Rgb::new(230, 80, 80);
const TEXT_FG: Rgb = Rgb::new(220, 220, 220);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot into an existing framebuffer, resizing it to the
    /// viewport. Callers keep one framebuffer across frames.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::new(' ', TEXT_FG, SCREEN_BG));

        let arena_w = (GRID_WIDTH as u16) * self.cell_w;
        let arena_h = (GRID_HEIGHT as u16) * self.cell_h;
        let frame_w = arena_w + 2;
        let frame_h = arena_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        if snap.playing() {
            fb.fill_rect(
                start_x + 1,
                start_y + 1,
                arena_w,
                arena_h,
                Glyph::new(' ', TEXT_FG, ARENA_BG),
            );

            self.fill_cell(fb, start_x, start_y, snap.food, Glyph::new('█', FOOD_FG, ARENA_BG));

            for (i, &cell) in snap.body.iter().enumerate() {
                let glyph = if i == 0 {
                    Glyph::new('█', HEAD_FG, ARENA_BG).bold()
                } else {
                    Glyph::new('█', BODY_FG, ARENA_BG)
                };
                self.fill_cell(fb, start_x, start_y, cell, glyph);
            }

            self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);
        } else {
            // Game over screen: final score and a restart prompt, no arena.
            let mid_y = start_y + frame_h / 2;
            self.put_centered(fb, start_x, frame_w, mid_y.saturating_sub(2), "GAME OVER", true);
            self.put_centered(
                fb,
                start_x,
                frame_w,
                mid_y,
                &format!("FINAL SCORE: {}", snap.score),
                false,
            );
            self.put_centered(
                fb,
                start_x,
                frame_w,
                mid_y + 2,
                "PRESS R TO RESTART",
                false,
            );
        }
    }

    /// Convenience wrapper allocating a fresh framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let border = |ch| Glyph::new(ch, BORDER_FG, SCREEN_BG);

        fb.set(x, y, border('┌'));
        fb.set(x + w - 1, y, border('┐'));
        fb.set(x, y + h - 1, border('└'));
        fb.set(x + w - 1, y + h - 1, border('┘'));

        for dx in 1..w - 1 {
            fb.set(x + dx, y, border('─'));
            fb.set(x + dx, y + h - 1, border('─'));
        }
        for dy in 1..h - 1 {
            fb.set(x, y + dy, border('│'));
            fb.set(x + w - 1, y + dy, border('│'));
        }
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, cell: Cell, glyph: Glyph) {
        if cell.x < 0 || cell.x >= GRID_WIDTH || cell.y < 0 || cell.y >= GRID_HEIGHT {
            return;
        }
        let px = start_x + 1 + (cell.x as u16) * self.cell_w;
        let py = start_y + 1 + (cell.y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, glyph);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", TEXT_FG, SCREEN_BG, true);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.score), TEXT_FG, SCREEN_BG, false);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LENGTH", TEXT_FG, SCREEN_BG, true);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.body.len()), TEXT_FG, SCREEN_BG, false);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "ARROWS/WASD MOVE", TEXT_FG, SCREEN_BG, false);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "Q QUIT", TEXT_FG, SCREEN_BG, false);
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        frame_w: u16,
        y: u16,
        text: &str,
        bold: bool,
    ) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, TEXT_FG, SCREEN_BG, bold);
    }
}
