//! GameView: maps a `GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-testable. Each grid cell draws
//! as 2 terminal columns by 1 row to compensate for glyph aspect ratio.

use tui_snake_core::GameState;
use tui_snake_types::{GameConfig, Phase, Point};

use crate::fb::{FrameBuffer, Rgb, Style};

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

// Palette lifted from the game's classic look: a two-tone dark
// checkerboard, red food, sky-blue snake with a lighter head.
const CHECKER_EVEN: Rgb = Rgb::new(15, 23, 42);
const CHECKER_ODD: Rgb = Rgb::new(11, 18, 36);
const FOOD: Rgb = Rgb::new(239, 68, 68);
const SNAKE_HEAD: Rgb = Rgb::new(96, 165, 250);
const SNAKE_BODY: Rgb = Rgb::new(56, 189, 248);

/// Renders the snake playfield, side panel, and overlays.
pub struct GameView {
    cols: i32,
    rows: i32,
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl GameView {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            cols: config.cols,
            rows: config.rows,
            cell_w: 2,
            cell_h: 1,
        }
    }

    /// Render one frame: playfield, side panel, and any overlay.
    pub fn render(&self, state: &GameState, best: u32, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = (self.cols as u16) * self.cell_w;
        let board_px_h = (self.rows as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Checkerboard backdrop.
        for y in 0..self.rows {
            for x in 0..self.cols {
                let bg = if (x + y) % 2 == 0 {
                    CHECKER_EVEN
                } else {
                    CHECKER_ODD
                };
                self.fill_cell(&mut fb, start_x, start_y, x, y, ' ', Style::new(bg, bg));
            }
        }

        // Food (absent once the snake owns the whole grid).
        if let Some(food) = state.food() {
            self.draw_cell_block(&mut fb, start_x, start_y, food, FOOD, false);
        }

        // Snake, tail to head so the head wins any overlap in display.
        let head = state.snake().head();
        for cell in state.snake().cells() {
            let (color, bold) = if cell == head {
                (SNAKE_HEAD, true)
            } else {
                (SNAKE_BODY, false)
            };
            self.draw_cell_block(&mut fb, start_x, start_y, cell, color, bold);
        }

        self.draw_side_panel(&mut fb, state, best, viewport, start_x, start_y, frame_w);

        match state.phase() {
            Phase::Paused => {
                self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED", "p resumes")
            }
            Phase::Over => self.draw_overlay(
                &mut fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                "GAME OVER",
                "r restarts",
            ),
            Phase::Won => self.draw_overlay(
                &mut fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                "YOU WIN",
                "r restarts",
            ),
            Phase::Running => {}
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
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

    fn draw_cell_block(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell: Point,
        color: Rgb,
        bold: bool,
    ) {
        if cell.x < 0 || cell.x >= self.cols || cell.y < 0 || cell.y >= self.rows {
            return;
        }
        let bg = if (cell.x + cell.y) % 2 == 0 {
            CHECKER_EVEN
        } else {
            CHECKER_ODD
        };
        let mut style = Style::new(color, bg);
        if bold {
            style = style.bold();
        }
        self.fill_cell(fb, start_x, start_y, cell.x, cell.y, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: i32,
        cell_y: i32,
        ch: char,
        style: Style,
    ) {
        let px = start_x + 1 + (cell_x as u16) * self.cell_w;
        let py = start_y + 1 + (cell_y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        best: u32,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        if viewport.width - panel_x < 12 {
            return;
        }

        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = Style::new(Rgb::new(130, 140, 160), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", state.score()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", best), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{} ms", state.tick_interval_ms()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "arrows/wasd steer", hint);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "p pause  r restart", hint);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "q quit", hint);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        title: &str,
        subtitle: &str,
    ) {
        let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let sub_style = Style::new(Rgb::new(170, 180, 200), Rgb::new(0, 0, 0));

        let mid_y = start_y.saturating_add(frame_h / 2);
        let center = |text: &str| {
            let w = text.chars().count() as u16;
            start_x.saturating_add(frame_w.saturating_sub(w) / 2)
        };

        fb.put_str(center(title), mid_y, title, style);
        fb.put_str(center(subtitle), mid_y + 1, subtitle, sub_style);
    }
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
