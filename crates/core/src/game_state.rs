//! Game state module - owns the session and drives the phase state machine
//!
//! `GameState` is the orchestrator: it accepts actions, runs the fixed-tick
//! pipeline (bird -> clouds -> obstacles -> collision -> high score) while
//! playing, and records what happened so the caller can react (for example by
//! persisting a new high score). It performs no I/O.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::collision;
use crate::session::Session;
use crate::snapshot::{GameSnapshot, ObstacleSnapshot};
use crate::spawn::step_obstacles;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    phase: Phase,
    session: Session,
    /// Best score seen by this process (seeded from persistent storage).
    high_score: u32,
    rng: ChaCha8Rng,
    seed: u64,
    /// Monotonic run id (increments on start and restart).
    episode_id: u32,
    /// Ticks simulated in the current run.
    tick_count: u64,
    /// Last tick's event record (consumed by observers).
    last_event: Option<TickEvent>,
}

impl GameState {
    /// Create a game on the start screen
    pub fn new(config: GameConfig, seed: u64, high_score: u32) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let session = Session::new(&config, &mut rng);

        Self {
            config,
            phase: Phase::NotStarted,
            session,
            high_score,
            rng,
            seed,
            episode_id: 0,
            tick_count: 0,
            last_event: None,
        }
    }

    /// Leave the start screen with a freshly initialised session
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::NotStarted {
            return false;
        }
        self.begin_run();
        true
    }

    /// Start over after a game over
    pub fn restart(&mut self) -> bool {
        if self.phase != Phase::GameOver {
            return false;
        }
        self.begin_run();
        true
    }

    fn begin_run(&mut self) {
        self.session = Session::new(&self.config, &mut self.rng);
        self.episode_id = self.episode_id.wrapping_add(1);
        self.tick_count = 0;
        self.last_event = None;
        self.set_phase(Phase::Playing);
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            log::debug!(
                "phase {} -> {} (episode {})",
                self.phase.as_str(),
                phase.as_str(),
                self.episode_id
            );
        }
        self.phase = phase;
    }

    /// Apply a player action. Returns `false` when the action is not valid in the current phase.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => self.start(),
            GameAction::Restart => self.restart(),
            GameAction::Flap => {
                if self.phase != Phase::Playing {
                    return false;
                }
                self.session.bird.flap();
                true
            }
        }
    }

    /// Pointer hit test against the start button (world units).
    pub fn start_button_hit(&self, x: f32, y: f32) -> bool {
        self.phase == Phase::NotStarted && self.config.start_button.contains(x, y)
    }

    /// Advance the simulation by one fixed tick.
    ///
    /// Returns `true` if the world advanced (only while playing).
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }

        let config = &self.config;
        let session = &mut self.session;
        let mut event = TickEvent::default();

        session.bird.update();

        for cloud in session.clouds.iter_mut() {
            cloud.update(config, &mut self.rng);
        }

        let step = step_obstacles(&mut session.obstacles, session.bird.x, config, &mut self.rng);
        session.score += step.scored;
        event.scored = step.scored;
        event.recycled = step.recycled;

        if let Some(hit) = collision::detect(&session.bird, &session.obstacles, config) {
            session.game_over = true;
            event.collision = Some(hit);
        }

        if session.score > self.high_score {
            self.high_score = session.score;
            event.new_high_score = Some(self.high_score);
            log::info!("new high score: {}", self.high_score);
        }

        self.tick_count += 1;
        self.last_event = Some(event);

        if let Some(hit) = event.collision {
            log::debug!(
                "run over after {} ticks: {:?}, score {}",
                self.tick_count,
                hit,
                self.session.score
            );
            self.set_phase(Phase::GameOver);
        }

        true
    }

    pub fn take_last_event(&mut self) -> Option<TickEvent> {
        self.last_event.take()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable session access for scripted scenarios.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn game_over(&self) -> bool {
        self.session.game_over
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let config = &self.config;
        let session = &self.session;

        out.viewport_width = config.viewport_width;
        out.viewport_height = config.viewport_height;
        out.phase = self.phase;
        out.bird = session.bird.rect();
        out.bird_velocity = session.bird.velocity;

        out.obstacles.clear();
        out.obstacles
            .extend(session.obstacles.iter().map(|o| ObstacleSnapshot {
                upper: o.upper_rect(),
                lower: o.lower_rect(),
                passed: o.passed,
            }));

        out.clouds.clear();
        out.clouds
            .extend(session.clouds.iter().map(|c| c.rect(config)));

        out.hill = config.hill;
        out.start_button = config.start_button;
        out.score = session.score;
        out.high_score = self.high_score;
        out.game_over = session.game_over;
        out.episode_id = self.episode_id;
        out.tick = self.tick_count;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
