//! Terminal rendering for the search visualizer.
//!
//! Sessions are drawn into a plain framebuffer (no widget toolkit) which is then
//! flushed to the terminal as a diff against the previous frame.
//!
//! - `board_view`: session -> framebuffer, plus mouse hit-testing
//! - `renderer`: framebuffer -> crossterm commands
//! - `render_throttle`: skip redraws while nothing changes

pub mod board_view;
pub mod fb;
pub mod render_throttle;
pub mod renderer;

pub use chess_bfs_core as core;
pub use chess_bfs_types as types;

pub use board_view::{BoardLayout, BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
