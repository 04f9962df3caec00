use crate::types::{GameConfig, Phase, Rect};

/// Render-side view of one obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleSnapshot {
    pub upper: Rect,
    pub lower: Rect,
    pub passed: bool,
}

/// Everything the renderer needs for one frame, in world units.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub phase: Phase,
    pub bird: Rect,
    pub bird_velocity: f32,
    pub obstacles: Vec<ObstacleSnapshot>,
    pub clouds: Vec<Rect>,
    pub hill: Rect,
    pub start_button: Rect,
    pub score: u32,
    pub high_score: u32,
    pub game_over: bool,
    pub episode_id: u32,
    pub tick: u64,
}

impl GameSnapshot {
    /// Reset to an empty frame for `config`, keeping allocations.
    pub fn clear(&mut self, config: &GameConfig) {
        self.viewport_width = config.viewport_width;
        self.viewport_height = config.viewport_height;
        self.phase = Phase::NotStarted;
        self.bird = Rect::default();
        self.bird_velocity = 0.0;
        self.obstacles.clear();
        self.clouds.clear();
        self.hill = config.hill;
        self.start_button = config.start_button;
        self.score = 0;
        self.high_score = 0;
        self.game_over = false;
        self.episode_id = 0;
        self.tick = 0;
    }

    pub fn playing(&self) -> bool {
        self.phase == Phase::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let config = GameConfig::default();
        let mut s = Self {
            viewport_width: 0.0,
            viewport_height: 0.0,
            phase: Phase::NotStarted,
            bird: Rect::default(),
            bird_velocity: 0.0,
            obstacles: Vec::new(),
            clouds: Vec::new(),
            hill: Rect::default(),
            start_button: Rect::default(),
            score: 0,
            high_score: 0,
            game_over: false,
            episode_id: 0,
            tick: 0,
        };
        s.clear(&config);
        s
    }
}
