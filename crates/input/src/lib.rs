//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::GameAction`]s and
//! pointer presses. Translating a pointer press into world coordinates is the
//! view's job, since only the view knows where the playfield sits.

pub mod map;

pub use tui_flappy_types as types;

pub use map::{handle_key_event, pointer_press, should_quit};
