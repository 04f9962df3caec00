//! Background decoration - drifting clouds
//!
//! Purely cosmetic: clouds never take part in collision or scoring.

use rand::Rng;

use crate::types::{GameConfig, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    /// Drift per tick, fixed for the cloud's lifetime
    pub speed: f32,
}

impl Cloud {
    /// Spawn a cloud anywhere across the upper half of the viewport
    pub fn spawn<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let speed = if config.cloud_speed_max > config.cloud_speed_min {
            rng.gen_range(config.cloud_speed_min..config.cloud_speed_max)
        } else {
            config.cloud_speed_min
        };
        Self {
            x: rng.gen_range(0.0..=config.viewport_width),
            y: random_cloud_y(config, rng),
            speed,
        }
    }

    /// Drift left; once fully past the left edge, wrap to the right edge at a new height
    pub fn update<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) {
        self.x -= self.speed;
        if self.x < -config.cloud_width {
            self.x = config.viewport_width;
            self.y = random_cloud_y(config, rng);
        }
    }

    pub fn rect(&self, config: &GameConfig) -> Rect {
        Rect::new(self.x, self.y, config.cloud_width, config.cloud_height)
    }
}

fn random_cloud_y<R: Rng>(config: &GameConfig, rng: &mut R) -> f32 {
    rng.gen_range(0.0..=config.cloud_max_y.max(0.0))
}
