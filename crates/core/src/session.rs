//! Session state - everything that resets on start and restart

use rand::Rng;

use crate::bird::Bird;
use crate::decoration::Cloud;
use crate::obstacle::Obstacle;
use crate::spawn::spawn_obstacle;
use crate::types::GameConfig;

/// One run of the game, from start (or restart) to game over
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub bird: Bird,
    pub obstacles: Vec<Obstacle>,
    pub clouds: Vec<Cloud>,
    pub score: u32,
    pub game_over: bool,
}

impl Session {
    /// Fresh session: bird at rest, one obstacle at the right edge, a full set of clouds
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let bird = Bird::new(config);
        let obstacles = vec![spawn_obstacle(config, rng)];
        let clouds = (0..config.cloud_count)
            .map(|_| Cloud::spawn(config, rng))
            .collect();

        Self {
            bird,
            obstacles,
            clouds,
            score: 0,
            game_over: false,
        }
    }
}
