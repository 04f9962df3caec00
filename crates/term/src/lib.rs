//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is flushed to the terminal as a
//! diff against the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Fit the world into any terminal size without distorting it
//! - Map terminal cells back to world coordinates for pointer input

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_flappy_core as core;
pub use tui_flappy_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Playfield, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
