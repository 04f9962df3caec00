//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests).
//!
//! # World Units
//!
//! Gameplay runs in "world units", independent of the terminal size. The
//! reference viewport is 400 x 600 with `y` growing downwards:
//!
//! - **Width**: 400 units
//! - **Height**: 600 units
//! - **Bird**: 34 x 24, fixed at `x = width / 4`, starting at `y = height / 2`
//! - **Pipe**: 80 x 500, gap of 150 between the upper and lower pipe
//!
//! # Physics Constants
//!
//! Values are per tick; the tick rate is fixed so there is no timestep scaling.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICKS_PER_SECOND` | 30 | Fixed tick rate |
//! | `GRAVITY` | 0.5 | Added to bird velocity every tick |
//! | `FLAP_STRENGTH` | -8.0 | Velocity set by a flap (upwards) |
//! | `PIPE_SPEED` | 5.0 | Pipe movement to the left per tick |
//! | `CLOUD_SPEED_MIN` | 1.0 | Slowest cloud drift |
//! | `CLOUD_SPEED_MAX` | 3.0 | Fastest cloud drift |
//!
//! # Examples
//!
//! ```
//! use tui_flappy_types::{GameAction, GameConfig, Phase, Rect};
//!
//! let config = GameConfig::default();
//! assert_eq!(config.bird_x, 100.0);
//! assert_eq!(config.gap_anchor_min, 100.0);
//! assert_eq!(config.gap_anchor_max, 400.0);
//!
//! // Scaled viewports derive their spawn ranges from the size.
//! let tall = GameConfig::for_viewport(400.0, 1200.0);
//! assert_eq!(tall.gap_anchor_min, 200.0);
//!
//! assert_eq!(GameAction::from_str("flap"), Some(GameAction::Flap));
//! assert_eq!(Phase::NotStarted.as_str(), "not_started");
//!
//! let r = Rect::new(10.0, 20.0, 30.0, 40.0);
//! assert!(r.contains(15.0, 25.0));
//! ```

/// Reference viewport width in world units.
pub const SCREEN_WIDTH: f32 = 400.0;

/// Reference viewport height in world units.
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Bird sprite width.
pub const BIRD_WIDTH: f32 = 34.0;

/// Bird sprite height.
pub const BIRD_HEIGHT: f32 = 24.0;

/// Pipe width.
pub const PIPE_WIDTH: f32 = 80.0;

/// Pipe height (each of the upper and lower pipe).
pub const PIPE_HEIGHT: f32 = 500.0;

/// Vertical size of the gap between upper and lower pipe.
pub const GAP: f32 = 150.0;

/// Velocity added to the bird every tick.
pub const GRAVITY: f32 = 0.5;

/// Velocity a flap sets (negative is upwards).
pub const FLAP_STRENGTH: f32 = -8.0;

/// Pipe movement per tick.
pub const PIPE_SPEED: f32 = 5.0;

/// Slowest cloud drift per tick.
pub const CLOUD_SPEED_MIN: f32 = 1.0;

/// Fastest cloud drift per tick.
pub const CLOUD_SPEED_MAX: f32 = 3.0;

/// Number of clouds per session.
pub const CLOUD_COUNT: usize = 3;

/// Cloud sprite width. A cloud wraps once it is fully past the left edge.
pub const CLOUD_WIDTH: f32 = 100.0;

/// Cloud sprite height.
pub const CLOUD_HEIGHT: f32 = 60.0;

/// Hill sprite size; the hill is static scenery.
pub const HILL_WIDTH: f32 = 300.0;
pub const HILL_HEIGHT: f32 = 100.0;

/// Start button size (centred on the viewport).
pub const START_BUTTON_WIDTH: f32 = 100.0;
pub const START_BUTTON_HEIGHT: f32 = 50.0;

/// Fixed tick rate. Physics constants are tuned for it.
pub const TICKS_PER_SECOND: u32 = 30;

/// Fixed tick interval in microseconds (~33.3ms).
pub const TICK_MICROS: u64 = 1_000_000 / TICKS_PER_SECOND as u64;


/// Axis-aligned rectangle in world units (`y` grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Point containment, edges inclusive (pointer hit tests).
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.left() && px <= self.right() && py >= self.top() && py <= self.bottom()
    }

    /// Open interval overlap on the x axis: `self.right > other.left && self.left < other.right`.
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.right() > other.left() && self.left() < other.right()
    }
}

/// Gameplay parameters in world units.
///
/// Physics constants are fixed by the tick rate; everything positional
/// (bird start, random spawn ranges, start button) is derived from the
/// viewport so the logic is testable at any size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub viewport_width: f32,
    pub viewport_height: f32,

    pub bird_width: f32,
    pub bird_height: f32,
    /// Fixed bird column.
    pub bird_x: f32,
    pub bird_start_y: f32,
    pub gravity: f32,
    pub flap_impulse: f32,

    pub pipe_width: f32,
    pub pipe_height: f32,
    pub gap_size: f32,
    pub pipe_speed: f32,
    /// Gap anchor is drawn uniformly from `[gap_anchor_min, gap_anchor_max)`.
    pub gap_anchor_min: f32,
    pub gap_anchor_max: f32,

    pub cloud_count: usize,
    pub cloud_width: f32,
    pub cloud_height: f32,
    pub cloud_speed_min: f32,
    pub cloud_speed_max: f32,
    /// Cloud `y` is drawn from `[0, cloud_max_y]`.
    pub cloud_max_y: f32,

    /// Static scenery at the bottom of the viewport.
    pub hill: Rect,
    /// Pointer target that starts the game.
    pub start_button: Rect,
}

impl GameConfig {
    /// Derive a configuration for a viewport of `width` x `height` world units.
    pub fn for_viewport(width: f32, height: f32) -> Self {
        Self {
            viewport_width: width,
            viewport_height: height,

            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            bird_x: width / 4.0,
            bird_start_y: height / 2.0,
            gravity: GRAVITY,
            flap_impulse: FLAP_STRENGTH,

            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            gap_size: GAP,
            pipe_speed: PIPE_SPEED,
            gap_anchor_min: height / 6.0,
            gap_anchor_max: height * 2.0 / 3.0,

            cloud_count: CLOUD_COUNT,
            cloud_width: CLOUD_WIDTH,
            cloud_height: CLOUD_HEIGHT,
            cloud_speed_min: CLOUD_SPEED_MIN,
            cloud_speed_max: CLOUD_SPEED_MAX,
            cloud_max_y: height / 2.0,

            hill: Rect::new(50.0, height - HILL_HEIGHT, HILL_WIDTH, HILL_HEIGHT),
            start_button: Rect::new(
                width / 2.0 - START_BUTTON_WIDTH / 2.0,
                height / 2.0 - START_BUTTON_HEIGHT / 2.0,
                START_BUTTON_WIDTH,
                START_BUTTON_HEIGHT,
            ),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::for_viewport(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

/// Game actions that can be applied to modify game state
///
/// Quit is not an action: it never touches game state and is handled by
/// the input layer directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Set the bird's velocity to the flap impulse (only while playing)
    Flap,
    /// Start a fresh session after a game over
    Restart,
    /// Leave the start screen
    Start,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "flap" => Some(GameAction::Flap),
            "restart" => Some(GameAction::Restart),
            "start" => Some(GameAction::Start),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Flap => "flap",
            GameAction::Restart => "restart",
            GameAction::Start => "start",
        }
    }
}

/// Game lifecycle phase
///
/// `NotStarted -> Playing -> GameOver -> Playing (restart)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Start screen; waiting for the start button
    #[default]
    NotStarted,
    /// Physics running
    Playing,
    /// Entities frozen until restart
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::NotStarted => "not_started",
            Phase::Playing => "playing",
            Phase::GameOver => "game_over",
        }
    }
}

/// What ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Bird bottom reached the bottom of the viewport
    Floor,
    /// Bird top reached the top of the viewport
    Ceiling,
    /// Bird left an obstacle's gap while overlapping it (index into the obstacle sequence)
    Obstacle(usize),
}

/// Core-side record of what happened during one tick.
///
/// Consumed by the binary (high-score persistence) and by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickEvent {
    /// Points awarded this tick (pass events)
    pub scored: u32,
    /// Obstacles recycled this tick
    pub recycled: u32,
    /// Set when the tick ended the run
    pub collision: Option<Collision>,
    /// Set when the score beat the previous high score
    pub new_high_score: Option<u32>,
}
