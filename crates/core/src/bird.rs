//! Bird entity - constant-gravity vertical integration
//!
//! The bird never moves horizontally; only `y` and `velocity` change.
//! Bounds are not enforced here: the collision step decides what leaving
//! the viewport means.

use crate::types::{GameConfig, Rect};

/// The player-controlled bird
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    /// Left edge; fixed for the bird's lifetime
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Vertical velocity in units per tick (positive is downwards)
    pub velocity: f32,
    pub width: f32,
    pub height: f32,
    gravity: f32,
    flap_impulse: f32,
}

impl Bird {
    /// Create a bird at the configured start position, at rest
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_x,
            y: config.bird_start_y,
            velocity: 0.0,
            width: config.bird_width,
            height: config.bird_height,
            gravity: config.gravity,
            flap_impulse: config.flap_impulse,
        }
    }

    /// Advance one tick: accelerate, then move
    pub fn update(&mut self) {
        self.velocity += self.gravity;
        self.y += self.velocity;
    }

    /// Replace the current velocity with the flap impulse
    pub fn flap(&mut self) {
        self.velocity = self.flap_impulse;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
