//! Chess-piece BFS visualizer (workspace facade crate).
//!
//! Re-exports the implementation crates under `crates/` as
//! `chess_bfs::{core,input,term,types}`, plus the frontend glue shared by the binary
//! and the integration tests.

pub use chess_bfs_core as core;
pub use chess_bfs_input as input;
pub use chess_bfs_term as term;
pub use chess_bfs_types as types;

pub mod app;
pub mod logging;
pub mod trace;
