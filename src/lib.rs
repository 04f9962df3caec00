//! TUI Flappy (workspace facade crate).
//!
//! Gameplay lives in dedicated crates under `crates/`; this package re-exports
//! them as `tui_flappy::{core,input,term,types}` and adds the pieces that touch
//! the outside world: environment configuration, logging and the high-score file.

pub mod config;
pub mod high_score;
pub mod logging;

pub use tui_flappy_core as core;
pub use tui_flappy_input as input;
pub use tui_flappy_term as term;
pub use tui_flappy_types as types;
