//! Collision detection - viewport bounds and obstacle gaps
//!
//! Boundary checks are closed (touching the top or bottom edge ends the run).
//! Gap checks are strict: a bird whose top equals the gap top, or whose bottom
//! equals the gap bottom, is still inside the gap.

use crate::bird::Bird;
use crate::obstacle::Obstacle;
use crate::types::{Collision, GameConfig, Rect};

/// Check the bird against the top and bottom of the viewport
pub fn check_boundary(bird: &Rect, config: &GameConfig) -> Option<Collision> {
    if bird.bottom() >= config.viewport_height {
        return Some(Collision::Floor);
    }
    if bird.top() <= 0.0 {
        return Some(Collision::Ceiling);
    }
    None
}

/// Check the bird against one obstacle
///
/// Only obstacles overlapping the bird horizontally can collide.
pub fn hits_obstacle(bird: &Rect, obstacle: &Obstacle) -> bool {
    if !bird.overlaps_x(&obstacle.column()) {
        return false;
    }
    bird.top() < obstacle.gap_top() || bird.bottom() > obstacle.gap_bottom()
}

/// Full collision step: boundaries first, then obstacles in sequence order
pub fn detect(bird: &Bird, obstacles: &[Obstacle], config: &GameConfig) -> Option<Collision> {
    let rect = bird.rect();
    if let Some(hit) = check_boundary(&rect, config) {
        return Some(hit);
    }
    obstacles
        .iter()
        .position(|o| hits_obstacle(&rect, o))
        .map(Collision::Obstacle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bird_at(y: f32) -> Rect {
        Rect::new(100.0, y, 34.0, 24.0)
    }

    #[test]
    fn test_floor_is_closed() {
        let config = GameConfig::default();
        assert_eq!(check_boundary(&bird_at(576.0), &config), Some(Collision::Floor));
        assert_eq!(check_boundary(&bird_at(575.5), &config), None);
    }

    #[test]
    fn test_ceiling_is_closed() {
        let config = GameConfig::default();
        assert_eq!(check_boundary(&bird_at(0.0), &config), Some(Collision::Ceiling));
        assert_eq!(check_boundary(&bird_at(-3.0), &config), Some(Collision::Ceiling));
        assert_eq!(check_boundary(&bird_at(0.5), &config), None);
    }

    #[test]
    fn test_no_hit_without_horizontal_overlap() {
        let config = GameConfig::default();
        // Bird spans [100, 134]; obstacle spans [134, 214].
        let o = Obstacle::at(&config, 134.0, 200.0);
        assert!(!hits_obstacle(&bird_at(0.0), &o));

        // Obstacle spans [20, 100].
        let o = Obstacle::at(&config, 20.0, 200.0);
        assert!(!hits_obstacle(&bird_at(0.0), &o));
    }

    #[test]
    fn test_hit_above_and_below_gap() {
        let config = GameConfig::default();
        let o = Obstacle::at(&config, 110.0, 200.0);

        assert!(hits_obstacle(&bird_at(100.0), &o));
        assert!(hits_obstacle(&bird_at(199.0), &o));
        assert!(hits_obstacle(&bird_at(327.0), &o));
    }

    #[test]
    fn test_gap_edges_are_safe() {
        let config = GameConfig::default();
        let o = Obstacle::at(&config, 110.0, 200.0);

        assert!(!hits_obstacle(&bird_at(200.0), &o));
        assert!(!hits_obstacle(&bird_at(250.0), &o));
        // Bottom exactly on the gap bottom (326 + 24 == 350).
        assert!(!hits_obstacle(&bird_at(326.0), &o));
    }

    #[test]
    fn test_detect_reports_boundary_before_obstacle() {
        let config = GameConfig::default();
        let mut bird = Bird::new(&config);
        bird.y = 590.0;
        let obstacles = [Obstacle::at(&config, 110.0, 200.0)];

        assert_eq!(detect(&bird, &obstacles, &config), Some(Collision::Floor));
    }

    #[test]
    fn test_detect_reports_obstacle_index() {
        let config = GameConfig::default();
        let mut bird = Bird::new(&config);
        bird.y = 100.0;
        let obstacles = [
            Obstacle::at(&config, 300.0, 50.0),
            Obstacle::at(&config, 110.0, 200.0),
        ];

        assert_eq!(
            detect(&bird, &obstacles, &config),
            Some(Collision::Obstacle(1))
        );
    }
}
