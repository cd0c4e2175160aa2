//! Rendering layer — all terminal I/O lives here.
//!
//! The game describes each frame as a `Scene` in play-field pixels.  This
//! module scales that scene onto the terminal's cell grid, paints it into an
//! off-screen buffer and writes the buffer out in one pass.  No game logic is
//! performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Colors, Print},
    QueueableCommand,
};
use weather_dodge::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use weather_dodge::entities::Rect;
use weather_dodge::render::{Align, Rgba, Scene, Shape};
use weather_dodge::GameState;

const C_HINT: Rgba = Rgba::rgb(110, 110, 110);
const C_HINT_BG: Rgba = Rgba::rgb(0, 0, 0);

/// Text at or above this size is drawn bold.
const BOLD_TEXT_SIZE: f32 = 40.0;

// ── Off-screen buffer ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    fg: Rgba,
    bg: Rgba,
    bold: bool,
}

struct Canvas {
    cols: usize,
    rows: usize,
    /// Cells per play-field pixel.
    sx: f32,
    sy: f32,
    cells: Vec<Cell>,
}

fn blend(src: Rgba, dst: Rgba) -> Rgba {
    let a = src.a as u32;
    let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * (255 - a)) / 255) as u8;
    Rgba::rgb(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b))
}

fn to_color(c: Rgba) -> Color {
    Color::Rgb { r: c.r, g: c.g, b: c.b }
}

impl Canvas {
    fn new(cols: usize, rows: usize, background: Rgba) -> Self {
        let blank = Cell {
            ch: ' ',
            fg: background,
            bg: background,
            bold: false,
        };
        Self {
            cols,
            rows,
            sx: cols as f32 / SCREEN_WIDTH,
            sy: rows as f32 / SCREEN_HEIGHT,
            cells: vec![blank; cols * rows],
        }
    }

    fn cell_mut(&mut self, col: i32, row: i32) -> Option<&mut Cell> {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return None;
        }
        Some(&mut self.cells[row as usize * self.cols + col as usize])
    }

    /// Opaque colours replace the cell; translucent ones tint it, text included.
    fn fill(&mut self, col: i32, row: i32, color: Rgba) {
        if let Some(cell) = self.cell_mut(col, row) {
            if color.a == 255 {
                *cell = Cell {
                    ch: ' ',
                    fg: color,
                    bg: color,
                    bold: false,
                };
            } else {
                cell.bg = blend(color, cell.bg);
                cell.fg = blend(color, cell.fg);
            }
        }
    }

    /// Cell span covered by a pixel span; never empty, so thin rain stays visible.
    fn span(start: f32, end: f32, scale: f32) -> (i32, i32) {
        let first = (start * scale).floor() as i32;
        let last = ((end * scale).ceil() as i32 - 1).max(first);
        (first, last)
    }

    fn rect(&mut self, rect: &Rect, color: Rgba, round_corners: bool) {
        let (c0, c1) = Self::span(rect.x, rect.right(), self.sx);
        let (r0, r1) = Self::span(rect.y, rect.bottom(), self.sy);
        let rounded = round_corners && c1 - c0 >= 2 && r1 - r0 >= 2;
        for row in r0..=r1 {
            for col in c0..=c1 {
                let corner = (col == c0 || col == c1) && (row == r0 || row == r1);
                if rounded && corner {
                    continue;
                }
                self.fill(col, row, color);
            }
        }
    }

    fn circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba) {
        let (c0, c1) = Self::span(cx - radius, cx + radius, self.sx);
        let (r0, r1) = Self::span(cy - radius, cy + radius, self.sy);
        let mut painted = false;
        for row in r0..=r1 {
            for col in c0..=c1 {
                // Cell centre back in play-field pixels
                let px = (col as f32 + 0.5) / self.sx;
                let py = (row as f32 + 0.5) / self.sy;
                if (px - cx).powi(2) + (py - cy).powi(2) <= radius * radius {
                    self.fill(col, row, color);
                    painted = true;
                }
            }
        }
        if !painted {
            self.fill(
                (cx * self.sx).floor() as i32,
                (cy * self.sy).floor() as i32,
                color,
            );
        }
    }

    fn text(&mut self, text: &str, x: f32, y: f32, size: f32, align: Align, color: Rgba) {
        let len = text.chars().count() as i32;
        let anchor = (x * self.sx).round() as i32;
        let start = match align {
            Align::Left => anchor,
            Align::Center => anchor - len / 2,
            Align::Right => anchor - len,
        };
        let row = (y * self.sy).floor() as i32;
        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = self.cell_mut(start + i as i32, row) {
                cell.ch = ch;
                cell.fg = color;
                cell.bold = size >= BOLD_TEXT_SIZE;
            }
        }
    }

    fn paint(&mut self, shape: &Shape) {
        match shape {
            Shape::Rect { rect, color } => self.rect(rect, *color, false),
            Shape::RoundedRect { rect, color, .. } => self.rect(rect, *color, true),
            Shape::Circle {
                cx,
                cy,
                radius,
                color,
            } => self.circle(*cx, *cy, *radius, *color),
            Shape::Text {
                text,
                x,
                y,
                size,
                align,
                color,
            } => self.text(text, *x, *y, *size, *align, *color),
        }
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame onto a `cols` x `rows` terminal.
/// The bottom row is kept for the controls hint.
pub fn render<W: Write>(
    out: &mut W,
    scene: &Scene,
    state: GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let field_rows = rows.saturating_sub(1) as usize;
    let mut canvas = Canvas::new(cols as usize, field_rows, scene.background);
    for shape in &scene.shapes {
        canvas.paint(shape);
    }

    out.queue(cursor::MoveTo(0, 0))?;
    let mut current: Option<(Rgba, Rgba, bool)> = None;
    for row in 0..canvas.rows {
        out.queue(cursor::MoveTo(0, row as u16))?;
        for cell in &canvas.cells[row * canvas.cols..(row + 1) * canvas.cols] {
            let look = (cell.fg, cell.bg, cell.bold);
            if current != Some(look) {
                out.queue(style::SetAttribute(if cell.bold {
                    Attribute::Bold
                } else {
                    Attribute::NormalIntensity
                }))?;
                out.queue(style::SetColors(Colors::new(to_color(cell.fg), to_color(cell.bg))))?;
                current = Some(look);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    draw_controls_hint(out, state, cols, rows)?;

    out.queue(style::SetAttribute(Attribute::Reset))?;
    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(
    out: &mut W,
    state: GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let hint = match state {
        GameState::Menu => "SPACE/ENTER : Start   Q : Quit",
        GameState::Playing => "← ↑ ↓ → / WASD : Move   F1 F2 F3 : Weather   Q : Quit",
        GameState::GameOver => "R : Restart   ESC : Menu   Q : Quit",
    };
    // Stop one short of the corner so the terminal never scrolls.
    let line: String = format!(" {:<width$}", hint, width = cols as usize)
        .chars()
        .take(cols.saturating_sub(1) as usize)
        .collect();

    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.queue(style::SetAttribute(Attribute::Reset))?;
    out.queue(style::SetColors(Colors::new(to_color(C_HINT), to_color(C_HINT_BG))))?;
    out.queue(Print(line))?;
    Ok(())
}
