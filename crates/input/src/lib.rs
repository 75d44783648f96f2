//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any rendering code. It maps
//! `crossterm` key and mouse events into [`InputIntent`]s and keeps the keyboard
//! cursor used to pick squares without a mouse.

pub mod cursor;
pub mod map;

pub use chess_bfs_types as types;

pub use cursor::BoardCursor;
pub use map::{handle_key_event, handle_mouse_event, should_quit, InputIntent};
