//! Spawn/recycle manager - scrolls obstacles, awards pass events, recycles
//!
//! Each tick runs two passes over the sequence so no obstacle is skipped or
//! processed twice:
//!
//! 1. Advance every obstacle and score the ones that just fell behind the bird.
//! 2. Drop every obstacle whose trailing edge left the viewport and append one
//!    fresh obstacle per dropped one. Fresh obstacles do not move until the
//!    next tick.

use rand::Rng;

use crate::obstacle::Obstacle;
use crate::types::GameConfig;

/// Result of one spawn/recycle pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpawnStep {
    /// Pass events this tick
    pub scored: u32,
    /// Obstacles removed (and replaced) this tick
    pub recycled: u32,
}

/// Draw a gap anchor uniformly from `[gap_anchor_min, gap_anchor_max)`
pub fn random_gap_anchor<R: Rng>(config: &GameConfig, rng: &mut R) -> f32 {
    if config.gap_anchor_max > config.gap_anchor_min {
        rng.gen_range(config.gap_anchor_min..config.gap_anchor_max)
    } else {
        config.gap_anchor_min
    }
}

/// Build an obstacle at the right edge with a random gap
pub fn spawn_obstacle<R: Rng>(config: &GameConfig, rng: &mut R) -> Obstacle {
    Obstacle::new(config, random_gap_anchor(config, rng))
}

/// Run one tick of obstacle movement, scoring and recycling
pub fn step_obstacles<R: Rng>(
    obstacles: &mut Vec<Obstacle>,
    bird_x: f32,
    config: &GameConfig,
    rng: &mut R,
) -> SpawnStep {
    let mut step = SpawnStep::default();

    for obstacle in obstacles.iter_mut() {
        obstacle.update(config.pipe_speed);
        if !obstacle.passed && obstacle.x < bird_x {
            obstacle.passed = true;
            step.scored += 1;
        }
    }

    let before = obstacles.len();
    obstacles.retain(|o| !o.is_off_screen());
    let removed = before - obstacles.len();

    for _ in 0..removed {
        obstacles.push(spawn_obstacle(config, rng));
    }
    step.recycled = removed as u32;

    step
}
