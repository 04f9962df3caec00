//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical runs
//! - **Testable**: Every rule is exercised without a terminal
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`bird`]: Bird entity with constant-gravity integration and flap impulse
//! - [`obstacle`]: Pipe pair with a gap region
//! - [`decoration`]: Drifting clouds (cosmetic only)
//! - [`collision`]: Viewport bounds and gap collision tests
//! - [`spawn`]: Obstacle scrolling, pass events and recycling
//! - [`session`]: Per-run state (entities, score, game-over flag)
//! - [`game_state`]: Phase state machine and fixed-tick pipeline
//! - [`snapshot`]: Render-side copy of the state
//!
//! # Example
//!
//! ```
//! use tui_flappy_core::GameState;
//! use tui_flappy_types::{GameAction, GameConfig, Phase};
//!
//! let mut game = GameState::new(GameConfig::default(), 12345, 0);
//! assert_eq!(game.phase(), Phase::NotStarted);
//!
//! game.apply_action(GameAction::Start);
//! game.apply_action(GameAction::Flap);
//! game.tick();
//!
//! // Flap sets velocity to -8, gravity then adds 0.5.
//! assert_eq!(game.session().bird.velocity, -7.5);
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep: call [`GameState::tick`](game_state::GameState::tick)
//! 30 times per second. There is no elapsed-time parameter; physics constants
//! are tuned per tick.

pub mod bird;
pub mod collision;
pub mod decoration;
pub mod game_state;
pub mod obstacle;
pub mod session;
pub mod snapshot;
pub mod spawn;

pub use tui_flappy_types as types;

// Re-export commonly used types for convenience
pub use bird::Bird;
pub use collision::{check_boundary, detect, hits_obstacle};
pub use decoration::Cloud;
pub use game_state::GameState;
pub use obstacle::Obstacle;
pub use session::Session;
pub use snapshot::{GameSnapshot, ObstacleSnapshot};
pub use spawn::{random_gap_anchor, spawn_obstacle, step_obstacles, SpawnStep};
