//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: a header line with target, running sum and score;
//! a blank line; the bordered playfield; a blank line; a footer with the
//! clickable new-game label. When the viewport is wide enough a controls panel
//! is drawn to the right of the playfield.
//!
//! The same layout drives [`GameView::hit_test`], so mouse coordinates map back
//! onto exactly the tiles that were drawn.

use crate::core::{CommitEvent, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GridHit, Position, GRID_SIZE};

const NEW_GAME_LABEL: &str = "[ New Game ]";
const HEADER_ROWS: u16 = 2;
const FOOTER_ROWS: u16 = 2;

const BG: Rgb = Rgb::new(30, 30, 40);
const BLACK: Rgb = Rgb::new(0, 0, 0);

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

/// Presentation-only state that is not part of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud {
    /// Keyboard cursor, drawn as brackets around the tile value
    pub cursor: Option<Position>,
    /// Recent commit to flash next to the score
    pub flash: Option<CommitEvent>,
}

/// Screen placement of the playfield frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    header_y: u16,
    frame_x: u16,
    frame_y: u16,
    frame_w: u16,
    frame_h: u16,
    footer_y: u16,
}

/// A lightweight terminal renderer for the line-sum game.
pub struct GameView {
    /// Horizontal pitch of a tile in terminal columns (includes a 1-column gutter).
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 6,
            cell_h: 3,
        }
    }
}

impl GameView {
    fn layout(&self, viewport: Viewport) -> Layout {
        // One column of padding on the left mirrors the gutter on the right.
        let frame_w = 1 + (GRID_SIZE as u16) * self.cell_w + 2;
        let frame_h = (GRID_SIZE as u16) * self.cell_h + 2;
        let total_h = HEADER_ROWS + frame_h + FOOTER_ROWS;

        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let header_y = viewport.height.saturating_sub(total_h) / 2;
        let frame_y = header_y + HEADER_ROWS;

        Layout {
            header_y,
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            footer_y: frame_y + frame_h + 1,
        }
    }

    /// Top-left terminal cell of tile (`row`, `col`).
    fn tile_origin(&self, l: &Layout, row: u16, col: u16) -> (u16, u16) {
        (
            l.frame_x + 2 + col * self.cell_w,
            l.frame_y + 1 + row * self.cell_h,
        )
    }

    /// Map a terminal coordinate onto the playfield.
    pub fn hit_test(&self, viewport: Viewport, x: u16, y: u16) -> GridHit {
        let l = self.layout(viewport);
        let inside_x = x > l.frame_x && x < l.frame_x + l.frame_w - 1;
        let inside_y = y > l.frame_y && y < l.frame_y + l.frame_h - 1;
        if !inside_x || !inside_y {
            return GridHit::Outside;
        }

        let Some(dx) = x.checked_sub(l.frame_x + 2) else {
            return GridHit::Inside;
        };
        let dy = y - (l.frame_y + 1);
        let (col, row) = (dx / self.cell_w, dy / self.cell_h);
        let on_gutter = dx % self.cell_w == self.cell_w - 1;
        if on_gutter || col as usize >= GRID_SIZE || row as usize >= GRID_SIZE {
            return GridHit::Inside;
        }
        GridHit::Tile(Position::new(row as u8, col as u8))
    }

    /// Whether a terminal coordinate lies on the new-game label.
    pub fn hit_new_game(&self, viewport: Viewport, x: u16, y: u16) -> bool {
        let l = self.layout(viewport);
        let label_x = self.new_game_x(&l);
        y == l.footer_y && x >= label_x && x < label_x + NEW_GAME_LABEL.len() as u16
    }

    fn new_game_x(&self, l: &Layout) -> u16 {
        l.frame_x
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, hud: &Hud, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let l = self.layout(viewport);

        self.draw_header(fb, snap, hud, &l);

        let border = CellStyle::new(Rgb::new(200, 200, 200), BLACK);
        fb.fill_rect(l.frame_x + 1, l.frame_y + 1, l.frame_w - 2, l.frame_h - 2, ' ', CellStyle::new(BG, BG));
        self.draw_border(fb, l.frame_x, l.frame_y, l.frame_w, l.frame_h, border);

        for row in 0..GRID_SIZE as u16 {
            for col in 0..GRID_SIZE as u16 {
                let pos = Position::new(row as u8, col as u8);
                self.draw_tile(fb, snap, &l, pos, hud.cursor == Some(pos));
            }
        }

        self.draw_footer(fb, &l);
        self.draw_side_panel(fb, viewport, &l);

        if snap.game_over {
            self.draw_game_over(fb, snap, &l);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, hud: &Hud, l: &Layout) {
        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BLACK);
        let y = l.header_y;

        let mut x = fb.put_str(l.frame_x, y, "TARGET ", label);
        x = fb.put_u32(x, y, snap.target_sum, CellStyle::new(Rgb::new(240, 220, 80), BLACK).bold());

        x = fb.put_str(x + 3, y, "SUM ", label);
        let sum_style = if snap.selecting() && snap.current_sum > snap.target_sum {
            CellStyle::new(Rgb::new(230, 90, 90), BLACK)
        } else if snap.selecting() && snap.current_sum == snap.target_sum {
            CellStyle::new(Rgb::new(100, 220, 120), BLACK).bold()
        } else {
            value
        };
        x = fb.put_u32(x, y, snap.current_sum, sum_style);

        x = fb.put_str(x + 3, y, "SCORE ", label);
        x = fb.put_u32(x, y, snap.score, value);

        if let Some(flash) = hud.flash {
            let style = CellStyle::new(Rgb::new(100, 220, 120), BLACK).bold();
            let x = fb.put_str(x + 1, y, "+", style);
            fb.put_u32(x, y, flash.points, style);
        }
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, l: &Layout) {
        let button = CellStyle::new(BLACK, Rgb::new(200, 200, 200)).bold();
        let hint = CellStyle::default().dim();
        let x = fb.put_str(self.new_game_x(l), l.footer_y, NEW_GAME_LABEL, button);
        fb.put_str(x + 2, l.footer_y, "r new  q quit", hint);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_tile(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, l: &Layout, pos: Position, cursor: bool) {
        let Some(tile) = snap.tile(pos) else {
            return;
        };
        let (px, py) = self.tile_origin(l, pos.row as u16, pos.col as u16);
        let tile_w = self.cell_w - 1;

        let style = if tile.selected {
            CellStyle::new(BLACK, Rgb::new(245, 245, 245)).bold()
        } else {
            CellStyle::new(BLACK, tile_color(tile.value))
        };
        fb.fill_rect(px, py, tile_w, self.cell_h, ' ', style);

        let mid_x = px + (tile_w - 1) / 2;
        let mid_y = py + (self.cell_h - 1) / 2;
        fb.put_char(mid_x, mid_y, (b'0' + tile.value) as char, style.bold());

        if cursor && tile_w >= 3 {
            let mark = CellStyle { bold: true, ..style };
            fb.put_char(mid_x - 1, mid_y, '[', mark);
            fb.put_char(mid_x + 1, mid_y, ']', mark);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, viewport: Viewport, l: &Layout) {
        let panel_x = l.frame_x.saturating_add(l.frame_w).saturating_add(3);
        if panel_x >= viewport.width || viewport.width - panel_x < 18 {
            return;
        }

        let label = CellStyle::default().bold();
        let text = CellStyle::new(Rgb::new(170, 170, 170), BLACK);

        let mut y = l.frame_y;
        fb.put_str(panel_x, y, "CONTROLS", label);
        y += 1;
        for line in [
            "drag    select",
            "release commit",
            "arrows  cursor",
            "space   select",
            "esc     cancel",
        ] {
            y += 1;
            fb.put_str(panel_x, y, line, text);
        }

        y += 2;
        fb.put_str(panel_x, y, "LINES", label);
        y += 1;
        for (len, points) in [(2, 10), (3, 30), (4, 60), (5, 100), (6, 150)] {
            y += 1;
            let x = fb.put_u32(panel_x, y, len, text);
            let x = fb.put_str(x, y, " tiles  ", text);
            fb.put_u32(x, y, points, text);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, l: &Layout) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), BLACK).bold();
        let mid_y = l.frame_y + l.frame_h / 2;
        let inner_x = l.frame_x + 1;
        let inner_w = l.frame_w - 2;

        fb.fill_rect(inner_x, mid_y - 1, inner_w, 4, ' ', style);
        fb.put_str_centered(inner_x, mid_y - 1, inner_w, "GAME OVER", style);

        // "FINAL SCORE n", centered as a whole.
        let digits = digit_count(snap.score);
        let text_w = "FINAL SCORE ".len() as u16 + digits;
        let x = inner_x + inner_w.saturating_sub(text_w) / 2;
        let x = fb.put_str(x, mid_y, "FINAL SCORE ", style);
        fb.put_u32(x, mid_y, snap.score, style);

        fb.put_str_centered(inner_x, mid_y + 2, inner_w, "press r to play again", style.dim());
    }
}

fn tile_color(value: u8) -> Rgb {
    match value {
        1 => Rgb::new(80, 180, 220),
        2 => Rgb::new(100, 200, 120),
        3 => Rgb::new(240, 200, 80),
        4 => Rgb::new(220, 110, 90),
        _ => Rgb::new(150, 150, 150),
    }
}

fn digit_count(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}
