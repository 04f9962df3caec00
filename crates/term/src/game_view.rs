//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! The world (reference 400 x 600 units) is fitted into the terminal keeping
//! its aspect ratio, treating a cell as `cell_aspect` times taller than wide.
//! The same layout is used in reverse to turn a clicked cell back into world
//! coordinates for the start button hit test.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, Rect};

const SKY: Rgb = Rgb::new(135, 206, 235);
const HILL: Rgb = Rgb::new(95, 175, 55);
const CLOUD: Rgb = Rgb::new(245, 245, 245);
const PIPE: Rgb = Rgb::new(100, 170, 40);
const PIPE_EDGE: Rgb = Rgb::new(60, 110, 20);
const BIRD: Rgb = Rgb::new(245, 200, 66);
const BIRD_EYE: Rgb = Rgb::new(20, 20, 20);
const TEXT: Rgb = Rgb::new(0, 0, 0);
const GAME_OVER: Rgb = Rgb::new(255, 0, 0);
const BUTTON: Rgb = Rgb::new(0, 0, 0);
const BUTTON_TEXT: Rgb = Rgb::new(255, 255, 255);
const LETTERBOX: Rgb = Rgb::new(10, 10, 20);

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

/// Where the world lands inside the terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub origin_x: u16,
    pub origin_y: u16,
    pub cols: u16,
    pub rows: u16,
    /// World units covered by one column.
    pub units_per_col: f32,
    /// World units covered by one row.
    pub units_per_row: f32,
}

impl Playfield {
    /// Project a world rect to a half-open cell span `(x0, y0, x1, y1)`, clipped to the playfield.
    ///
    /// Anything that touches a cell covers it, so small sprites stay visible.
    pub fn project(&self, r: &Rect) -> Option<(i32, i32, i32, i32)> {
        let x0 = ((r.left() / self.units_per_col).floor() as i32).max(0);
        let x1 = ((r.right() / self.units_per_col).ceil() as i32).min(self.cols as i32);
        let y0 = ((r.top() / self.units_per_row).floor() as i32).max(0);
        let y1 = ((r.bottom() / self.units_per_row).ceil() as i32).min(self.rows as i32);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        let ox = self.origin_x as i32;
        let oy = self.origin_y as i32;
        Some((x0 + ox, y0 + oy, x1 + ox, y1 + oy))
    }

    /// Terminal column of world `x`.
    pub fn col(&self, x: f32) -> i32 {
        self.origin_x as i32 + (x / self.units_per_col).floor() as i32
    }

    /// Terminal row of world `y`.
    pub fn row(&self, y: f32) -> i32 {
        self.origin_y as i32 + (y / self.units_per_row).floor() as i32
    }

    pub fn right(&self) -> i32 {
        self.origin_x as i32 + self.cols as i32
    }

    /// Centre of a terminal cell in world units, or `None` outside the playfield.
    pub fn cell_to_world(&self, col: u16, row: u16) -> Option<(f32, f32)> {
        if col < self.origin_x
            || row < self.origin_y
            || col >= self.origin_x + self.cols
            || row >= self.origin_y + self.rows
        {
            return None;
        }
        let x = ((col - self.origin_x) as f32 + 0.5) * self.units_per_col;
        let y = ((row - self.origin_y) as f32 + 0.5) * self.units_per_row;
        Some((x, y))
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Cell height divided by cell width.
    cell_aspect: f32,
}

impl Default for GameView {
    fn default() -> Self {
        // Typical terminal glyphs are about twice as tall as they are wide.
        Self { cell_aspect: 2.0 }
    }
}

impl GameView {
    pub fn new(cell_aspect: f32) -> Self {
        Self {
            cell_aspect: if cell_aspect > 0.0 { cell_aspect } else { 1.0 },
        }
    }

    /// Fit a `world_w` x `world_h` world into `viewport`.
    pub fn layout(&self, world_w: f32, world_h: f32, viewport: Viewport) -> Option<Playfield> {
        if viewport.width == 0 || viewport.height == 0 || world_w <= 0.0 || world_h <= 0.0 {
            return None;
        }
        let units_per_col = (world_w / viewport.width as f32)
            .max(world_h / (self.cell_aspect * viewport.height as f32));
        let units_per_row = units_per_col * self.cell_aspect;

        let cols = ((world_w / units_per_col).round() as u16).clamp(1, viewport.width);
        let rows = ((world_h / units_per_row).round() as u16).clamp(1, viewport.height);

        Some(Playfield {
            origin_x: (viewport.width - cols) / 2,
            origin_y: (viewport.height - rows) / 2,
            cols,
            rows,
            units_per_col,
            units_per_row,
        })
    }

    /// World coordinates under a terminal cell, for pointer hit tests.
    pub fn cell_to_world(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        col: u16,
        row: u16,
    ) -> Option<(f32, f32)> {
        self.layout(snap.viewport_width, snap.viewport_height, viewport)?
            .cell_to_world(col, row)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::solid(LETTERBOX),
        });

        let Some(pf) = self.layout(snap.viewport_width, snap.viewport_height, viewport) else {
            return;
        };

        let world = Rect::new(0.0, 0.0, snap.viewport_width, snap.viewport_height);
        fill(fb, &pf, &world, CellStyle::solid(SKY));

        if snap.phase == Phase::NotStarted {
            self.draw_start_screen(fb, &pf, snap);
            return;
        }

        fill(fb, &pf, &snap.hill, CellStyle::solid(HILL));
        for cloud in &snap.clouds {
            fill(fb, &pf, cloud, CellStyle::solid(CLOUD));
        }

        self.draw_bird(fb, &pf, &snap.bird);

        for o in &snap.obstacles {
            self.draw_pipe(fb, &pf, &o.upper);
            self.draw_pipe(fb, &pf, &o.lower);
        }

        self.draw_hud(fb, &pf, snap);

        if snap.game_over {
            let style = CellStyle::new(GAME_OVER, SKY).bold();
            let row = pf.row(snap.viewport_height / 2.0);
            fb.put_str_until(pf.col(20.0), row, pf.right(), "Game Over! Press R", style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_bird(&self, fb: &mut FrameBuffer, pf: &Playfield, bird: &Rect) {
        let Some((x0, y0, x1, _)) = pf.project(bird) else {
            return;
        };
        fb.fill_span(x0, y0, x1, y0 + 1, ' ', CellStyle::solid(BIRD));
        // Eye on the leading edge.
        fb.put_char(x1 - 1, y0, '●', CellStyle::new(BIRD_EYE, BIRD));
    }

    fn draw_pipe(&self, fb: &mut FrameBuffer, pf: &Playfield, pipe: &Rect) {
        let Some((x0, y0, x1, y1)) = pf.project(pipe) else {
            return;
        };
        fb.fill_span(x0, y0, x1, y1, ' ', CellStyle::solid(PIPE));
        let edge = CellStyle::new(PIPE_EDGE, PIPE);
        for y in y0..y1 {
            fb.put_char(x0, y, '▌', edge);
            if x1 - 1 > x0 {
                fb.put_char(x1 - 1, y, '▐', edge);
            }
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, pf: &Playfield, snap: &GameSnapshot) {
        let style = CellStyle::new(TEXT, SKY).bold();
        let x = pf.col(10.0);
        let score_row = pf.row(30.0);
        let high_row = pf.row(50.0).max(score_row + 1);

        let right = pf.right();

        let label = "Score: ";
        fb.put_str_until(x, score_row, right, label, style);
        fb.put_u32_until(x + label.len() as i32, score_row, right, snap.score, style);

        let label = "High Score: ";
        fb.put_str_until(x, high_row, right, label, style);
        fb.put_u32_until(x + label.len() as i32, high_row, right, snap.high_score, style);
    }

    fn draw_start_screen(&self, fb: &mut FrameBuffer, pf: &Playfield, snap: &GameSnapshot) {
        let title = "Flappy Bird";
        let title_row = pf.row(snap.viewport_height / 2.0 - 100.0);
        let centre = pf.col(snap.viewport_width / 2.0);
        fb.put_str_until(
            centre - title.chars().count() as i32 / 2,
            title_row,
            pf.right(),
            title,
            CellStyle::new(TEXT, SKY).bold(),
        );

        let button = &snap.start_button;
        if let Some((x0, y0, x1, y1)) = pf.project(button) {
            fb.fill_span(x0, y0, x1, y1, ' ', CellStyle::solid(BUTTON));
            let label = "Start";
            let label_w = label.chars().count() as i32;
            let lx = x0 + ((x1 - x0) - label_w).max(0) / 2;
            let ly = y0 + (y1 - y0 - 1) / 2;
            fb.put_str_until(lx, ly, x1, label, CellStyle::new(BUTTON_TEXT, BUTTON).bold());
        }
    }
}

fn fill(fb: &mut FrameBuffer, pf: &Playfield, r: &Rect, style: CellStyle) {
    if let Some((x0, y0, x1, y1)) = pf.project(r) {
        fb.fill_span(x0, y0, x1, y1, ' ', style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_fills_matching_terminal_exactly() {
        let view = GameView::default();
        let pf = view.layout(400.0, 600.0, Viewport::new(32, 24)).unwrap();
        assert_eq!((pf.origin_x, pf.origin_y, pf.cols, pf.rows), (0, 0, 32, 24));
        assert_eq!(pf.units_per_col, 12.5);
        assert_eq!(pf.units_per_row, 25.0);
    }

    #[test]
    fn layout_centres_in_wide_terminal() {
        let view = GameView::default();
        let pf = view.layout(400.0, 600.0, Viewport::new(80, 24)).unwrap();
        assert_eq!(pf.cols, 32);
        assert_eq!(pf.rows, 24);
        assert_eq!(pf.origin_x, 24);
        assert_eq!(pf.origin_y, 0);
    }

    #[test]
    fn layout_rejects_empty_viewport() {
        let view = GameView::default();
        assert!(view.layout(400.0, 600.0, Viewport::new(0, 24)).is_none());
    }

    #[test]
    fn project_clips_partially_off_screen_rects() {
        let view = GameView::default();
        let pf = view.layout(400.0, 600.0, Viewport::new(32, 24)).unwrap();

        // Upper pipe starting above the viewport.
        assert_eq!(
            pf.project(&Rect::new(200.0, -300.0, 80.0, 500.0)),
            Some((16, 0, 23, 8))
        );
        // Entirely left of the viewport.
        assert_eq!(pf.project(&Rect::new(-90.0, 0.0, 80.0, 100.0)), None);
    }

    #[test]
    fn cell_to_world_outside_playfield_is_none() {
        let view = GameView::default();
        let pf = view.layout(400.0, 600.0, Viewport::new(80, 24)).unwrap();
        assert_eq!(pf.cell_to_world(0, 0), None);
        assert_eq!(pf.cell_to_world(24, 0), Some((6.25, 12.5)));
    }

    #[test]
    fn cell_to_world_round_trips() {
        let view = GameView::default();
        for vp in [Viewport::new(80, 24), Viewport::new(32, 24), Viewport::new(50, 60)] {
            let pf = view.layout(400.0, 600.0, vp).unwrap();
            for row in pf.origin_y..pf.origin_y + pf.rows {
                for col in pf.origin_x..pf.origin_x + pf.cols {
                    let (x, y) = pf.cell_to_world(col, row).unwrap();
                    assert_eq!((pf.col(x), pf.row(y)), (col as i32, row as i32));
                }
            }
        }
    }
}
