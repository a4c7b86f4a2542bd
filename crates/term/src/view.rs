//! Draws a [`GameSession`] into a [`Frame`].
//!
//! The well is rendered as a bordered box of 2x1 character cells, centred in
//! the viewport, with a side panel for score, level, hold and the piece
//! preview. Overlays (start prompt, pause, game over, level banner, high
//! score table) draw on top of the well after the fact.

use brickdrop_core::{Arena, GameSession, ShapeMatrix};
use brickdrop_types::{GamePhase, ARENA_HEIGHT, ARENA_WIDTH};

use crate::fb::{Cell, Frame, Rgb, Style};

const BACKDROP: Rgb = Rgb::new(28, 30, 38);
const WELL_BG: Rgb = Rgb::new(16, 18, 24);
const BORDER_FG: Rgb = Rgb::new(200, 200, 200);
const EMPTY_FG: Rgb = Rgb::new(64, 68, 82);
const GHOST_FG: Rgb = Rgb::new(140, 140, 140);
const TEXT_FG: Rgb = Rgb::new(220, 220, 220);
const BANNER_BG: Rgb = Rgb::new(90, 40, 120);

const PANEL_W: u16 = 14;
const PANEL_GAP: u16 = 2;

/// Color for a stored cell value, matching the piece that left it behind.
fn value_color(value: u8) -> Rgb {
    match value {
        1 => Rgb::new(255, 13, 114),
        2 => Rgb::new(13, 194, 255),
        3 => Rgb::new(13, 255, 114),
        4 => Rgb::new(245, 56, 255),
        5 => Rgb::new(255, 142, 13),
        6 => Rgb::new(255, 225, 56),
        7 => Rgb::new(56, 119, 255),
        _ => Rgb::new(200, 200, 200),
    }
}

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

/// Screen placement of the well interior, in terminal cells.
///
/// Exposed so effects drawn in board space (particles) can map a fractional
/// board position to a terminal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub inner_x: u16,
    pub inner_y: u16,
    pub inner_w: u16,
    pub inner_h: u16,
    pub cell_w: u16,
    pub cell_h: u16,
}

impl BoardLayout {
    /// Top-left terminal cell of a board cell.
    pub fn cell_origin(&self, x: u8, y: u8) -> (u16, u16) {
        (
            self.inner_x + x as u16 * self.cell_w,
            self.inner_y + y as u16 * self.cell_h,
        )
    }
}

pub struct GameView {
    cell_w: u16,
    cell_h: u16,
}

impl GameView {
    pub fn new() -> Self {
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }

    /// Where the well lands for a given viewport.
    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let inner_w = ARENA_WIDTH as u16 * self.cell_w;
        let inner_h = ARENA_HEIGHT as u16 * self.cell_h;
        let frame_w = inner_w + 2;
        let frame_h = inner_h + 2;

        let total_w = if self.panel_fits(viewport) {
            frame_w + PANEL_GAP + PANEL_W
        } else {
            frame_w
        };
        let x0 = viewport.width.saturating_sub(total_w) / 2;
        let y0 = viewport.height.saturating_sub(frame_h) / 2;

        BoardLayout {
            inner_x: x0 + 1,
            inner_y: y0 + 1,
            inner_w,
            inner_h,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        }
    }

    fn panel_fits(&self, viewport: Viewport) -> bool {
        let frame_w = ARENA_WIDTH as u16 * self.cell_w + 2;
        viewport.width >= frame_w + PANEL_GAP + PANEL_W
    }

    /// Render the whole screen for this session into `out`.
    pub fn render_into(&self, session: &GameSession, viewport: Viewport, out: &mut Frame) {
        out.resize(viewport.width, viewport.height);
        out.clear(Cell::new(' ', Style::plain(TEXT_FG, BACKDROP)));

        let layout = self.layout(viewport);
        self.draw_well_frame(&layout, out);
        self.draw_stored_cells(session.arena(), &layout, out);

        if session.phase() != GamePhase::NotStarted {
            self.draw_active(session, &layout, out);
        }
        if self.panel_fits(viewport) {
            self.draw_panel(session, &layout, out);
        }
        self.draw_phase_overlay(session.phase(), &layout, out);
    }

    fn draw_well_frame(&self, layout: &BoardLayout, out: &mut Frame) {
        let style = Style::plain(BORDER_FG, BACKDROP);
        let x0 = layout.inner_x - 1;
        let y0 = layout.inner_y - 1;
        let w = layout.inner_w + 2;
        let h = layout.inner_h + 2;

        out.put_char(x0, y0, '┌', style);
        out.put_char(x0 + w - 1, y0, '┐', style);
        out.put_char(x0, y0 + h - 1, '└', style);
        out.put_char(x0 + w - 1, y0 + h - 1, '┘', style);
        for x in 1..w - 1 {
            out.put_char(x0 + x, y0, '─', style);
            out.put_char(x0 + x, y0 + h - 1, '─', style);
        }
        for y in 1..h - 1 {
            out.put_char(x0, y0 + y, '│', style);
            out.put_char(x0 + w - 1, y0 + y, '│', style);
        }
    }

    fn draw_stored_cells(&self, arena: &Arena, layout: &BoardLayout, out: &mut Frame) {
        for y in 0..ARENA_HEIGHT {
            for x in 0..ARENA_WIDTH {
                let value = arena.get(x as i8, y as i8).unwrap_or(0);
                if value == 0 {
                    let style = Style::plain(EMPTY_FG, WELL_BG).dimmed();
                    self.draw_board_cell(layout, x, y, '·', style, out);
                } else {
                    let style = Style::plain(value_color(value), WELL_BG);
                    self.draw_board_cell(layout, x, y, '█', style, out);
                }
            }
        }
    }

    fn draw_active(&self, session: &GameSession, layout: &BoardLayout, out: &mut Frame) {
        let Some(piece) = session.active() else {
            return;
        };

        // Ghost first so the real piece wins where they overlap.
        if let Some(ghost_y) = session.ghost_y() {
            if ghost_y > piece.y {
                let style = Style::plain(GHOST_FG, WELL_BG).dimmed();
                let m = &piece.matrix;
                self.draw_matrix_cells(m, piece.x, ghost_y, '░', Some(style), layout, out);
            }
        }
        self.draw_matrix_cells(&piece.matrix, piece.x, piece.y, '█', None, layout, out);
    }

    /// Draw every occupied matrix cell at board offset (`x`, `y`).
    ///
    /// With `style` of `None` each cell takes the color of its stored value.
    fn draw_matrix_cells(
        &self,
        matrix: &ShapeMatrix,
        x: i8,
        y: i8,
        ch: char,
        style: Option<Style>,
        layout: &BoardLayout,
        out: &mut Frame,
    ) {
        for (fx, fy, value) in matrix.occupied_cells() {
            let bx = x + fx as i8;
            let by = y + fy as i8;
            if bx < 0 || by < 0 || bx >= ARENA_WIDTH as i8 || by >= ARENA_HEIGHT as i8 {
                continue;
            }
            let style = style.unwrap_or_else(|| Style::plain(value_color(value), WELL_BG));
            self.draw_board_cell(layout, bx as u8, by as u8, ch, style, out);
        }
    }

    fn draw_board_cell(
        &self,
        layout: &BoardLayout,
        x: u8,
        y: u8,
        ch: char,
        style: Style,
        out: &mut Frame,
    ) {
        let (px, py) = layout.cell_origin(x, y);
        out.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_panel(&self, session: &GameSession, layout: &BoardLayout, out: &mut Frame) {
        let x = layout.inner_x + layout.inner_w + 1 + PANEL_GAP;
        let label = Style::plain(TEXT_FG, BACKDROP).bold();
        let value = Style::plain(TEXT_FG, BACKDROP);
        let mut y = layout.inner_y;

        out.put_str(x, y, "SCORE", label);
        out.put_u32(x, y + 1, session.score(), value);
        y += 3;

        out.put_str(x, y, "LEVEL", label);
        out.put_u32(x, y + 1, session.level(), value);
        y += 3;

        out.put_str(x, y, "HOLD", label);
        match session.hold_piece() {
            Some(kind) => {
                let style = if session.can_hold() {
                    Style::plain(value_color(kind.cell_value()), BACKDROP)
                } else {
                    Style::plain(GHOST_FG, BACKDROP).dimmed()
                };
                out.put_char(x, y + 1, kind.as_char(), style);
            }
            None => out.put_char(x, y + 1, '-', value),
        }
        y += 3;

        out.put_str(x, y, "NEXT", label);
        for (i, kind) in session.upcoming().iter().enumerate() {
            let style = Style::plain(value_color(kind.cell_value()), BACKDROP);
            out.put_char(x, y + 1 + i as u16, kind.as_char(), style);
        }
    }

    fn draw_phase_overlay(&self, phase: GamePhase, layout: &BoardLayout, out: &mut Frame) {
        let mid_y = layout.inner_y + layout.inner_h / 2;
        match phase {
            GamePhase::NotStarted => {
                self.draw_centered(layout, mid_y - 1, "BRICKDROP", out);
                self.draw_centered(layout, mid_y + 1, "PRESS ENTER TO START", out);
            }
            GamePhase::Paused => {
                self.draw_centered(layout, mid_y, "PAUSED", out);
            }
            GamePhase::GameOver => {
                self.draw_centered(layout, layout.inner_y + 1, "GAME OVER", out);
                self.draw_centered(
                    layout,
                    layout.inner_y + layout.inner_h - 2,
                    "PRESS R TO RESTART",
                    out,
                );
            }
            GamePhase::Running => {}
        }
    }

    fn draw_centered(&self, layout: &BoardLayout, y: u16, text: &str, out: &mut Frame) {
        let len = text.chars().count() as u16;
        let x = layout.inner_x + layout.inner_w.saturating_sub(len) / 2;
        out.put_str(x, y, text, Style::plain(Rgb::new(255, 255, 255), WELL_BG).bold());
    }
}

impl Default for GameView {
    fn default() -> Self {
        Self::new()
    }
}

/// A single row of the high score overlay.
#[derive(Debug, Clone, Copy)]
pub struct ScoreRow<'a> {
    pub name: &'a str,
    pub score: u32,
}

/// Draw the level-up banner as a strip across the upper well.
pub fn draw_banner(layout: &BoardLayout, text: &str, out: &mut Frame) {
    let y = layout.inner_y + 2;
    let style = Style::plain(Rgb::new(255, 255, 255), BANNER_BG).bold();
    out.fill_rect(layout.inner_x, y, layout.inner_w, 1, ' ', style);

    let len = text.chars().count() as u16;
    let x = layout.inner_x + layout.inner_w.saturating_sub(len) / 2;
    out.put_str(x, y, text, style);
}

/// Draw the high score table over the middle of the well.
///
/// `pending_name` switches the last line into a name entry prompt, shown
/// while the player types a name for a freshly earned rank.
pub fn draw_scoreboard(
    layout: &BoardLayout,
    rows: &[ScoreRow<'_>],
    pending_name: Option<&str>,
    out: &mut Frame,
) {
    let box_w = layout.inner_w.saturating_sub(2);
    let shown = rows.len().min(10) as u16;
    let box_h = shown + 3 + if pending_name.is_some() { 2 } else { 0 };
    let x0 = layout.inner_x + (layout.inner_w - box_w) / 2;
    let y0 = layout.inner_y + layout.inner_h.saturating_sub(box_h) / 2;

    let bg = Style::plain(TEXT_FG, WELL_BG);
    out.fill_rect(x0, y0, box_w, box_h, ' ', bg);

    let title = "HIGH SCORES";
    let tx = x0 + box_w.saturating_sub(title.chars().count() as u16) / 2;
    out.put_str(tx, y0 + 1, title, bg.bold());

    for (i, row) in rows.iter().take(10).enumerate() {
        let rank = i as u32 + 1;
        let y = y0 + 2 + i as u16;
        let mut x = x0 + 1;

        out.put_u32(x, y, rank, bg);
        x += if rank >= 10 { 2 } else { 1 };
        out.put_char(x, y, '.', bg);
        x += 2;
        for ch in row.name.chars().take(8) {
            out.put_char(x, y, ch, bg);
            x += 1;
        }
        out.put_u32(x0 + box_w.saturating_sub(8), y, row.score, bg);
    }

    if let Some(name) = pending_name {
        let y = y0 + box_h - 2;
        let mut x = x0 + 1;
        out.put_str(x, y, "NAME: ", bg.bold());
        x += 6;
        for ch in name.chars().take(8) {
            out.put_char(x, y, ch, bg);
            x += 1;
        }
        out.put_char(x, y, '_', bg.bold());
    }
}
