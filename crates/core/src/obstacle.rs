//! Obstacle entity - a pipe pair with a gap
//!
//! An obstacle is a single column `pipe_width` wide. The gap spans
//! `[gap_anchor, gap_anchor + gap_size]`; the upper pipe ends at the gap
//! top and the lower pipe starts at the gap bottom.

use crate::types::{GameConfig, Rect};

/// A pipe pair scrolling towards the bird
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Top of the gap
    pub gap_anchor: f32,
    /// Set once the obstacle's `x` falls behind the bird
    pub passed: bool,
    pub width: f32,
    pub pipe_height: f32,
    pub gap_size: f32,
}

impl Obstacle {
    /// Create an obstacle at the right edge of the viewport
    pub fn new(config: &GameConfig, gap_anchor: f32) -> Self {
        Self::at(config, config.viewport_width, gap_anchor)
    }

    /// Create an obstacle at an explicit `x`
    pub fn at(config: &GameConfig, x: f32, gap_anchor: f32) -> Self {
        Self {
            x,
            gap_anchor,
            passed: false,
            width: config.pipe_width,
            pipe_height: config.pipe_height,
            gap_size: config.gap_size,
        }
    }

    /// Scroll left by `speed`
    pub fn update(&mut self, speed: f32) {
        self.x -= speed;
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn gap_top(&self) -> f32 {
        self.gap_anchor
    }

    pub fn gap_bottom(&self) -> f32 {
        self.gap_anchor + self.gap_size
    }

    /// Trailing edge is fully past the left edge of the viewport.
    pub fn is_off_screen(&self) -> bool {
        self.right() < 0.0
    }

    /// Full column occupied by the obstacle (used for the x overlap test).
    pub fn column(&self) -> Rect {
        Rect::new(
            self.x,
            self.gap_top() - self.pipe_height,
            self.width,
            self.pipe_height * 2.0 + self.gap_size,
        )
    }

    /// Pipe above the gap.
    pub fn upper_rect(&self) -> Rect {
        Rect::new(
            self.x,
            self.gap_top() - self.pipe_height,
            self.width,
            self.pipe_height,
        )
    }

    /// Pipe below the gap.
    pub fn lower_rect(&self) -> Rect {
        Rect::new(self.x, self.gap_bottom(), self.width, self.pipe_height)
    }
}
