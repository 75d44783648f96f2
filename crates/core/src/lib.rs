//! Search-and-animation engine - pure, deterministic, and testable
//!
//! This crate contains the movement rules, the steppable breadth-first search, path
//! reconstruction, the path animation and the session state machine tying them
//! together. It has **zero dependencies** on terminals, windows or I/O, making it:
//!
//! - **Deterministic**: the same (start, goal, piece) always yields the same discovery
//!   order and the same path
//! - **Testable**: time is passed in by the caller, nothing sleeps
//! - **Portable**: runs under the terminal frontend or headless
//!
//! # Module Structure
//!
//! - [`moves`]: one-move destinations per piece variant
//! - [`search`]: BFS engine advancing one square per step
//! - [`path`]: shortest-path reconstruction from predecessor links
//! - [`anim`]: segment-by-segment path animation with a per-piece hop
//! - [`session`]: user-facing state machine (select, search, animate, reset)
//! - [`config`]: board size, pacing and animation parameters
//! - [`error`]: command rejections and engine faults
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use chess_bfs_core::{EngineConfig, Phase, Session};
//! use chess_bfs_types::{PieceVariant, Position};
//!
//! let config = EngineConfig::default().with_step_interval(Duration::ZERO);
//! let mut session = Session::new(config);
//!
//! session.select_piece(PieceVariant::Knight).unwrap();
//! session.select_square(Position::new(0, 0)).unwrap();
//! session.select_square(Position::new(7, 7)).unwrap();
//! session.begin_search().unwrap();
//!
//! while session.phase() == Phase::Searching {
//!     session.advance_tick(Duration::from_millis(16)).unwrap();
//! }
//! assert_eq!(session.phase(), Phase::Animating);
//! assert_eq!(session.path().move_count(), 6);
//! ```
//!
//! # Timing
//!
//! - **Search pacing**: at most one expansion per `step_interval` (60ms by default)
//! - **Animation**: `anim_speed` segments per second (3 by default)
//!
//! Call [`Session::advance_tick`](session::Session::advance_tick) every frame with the
//! elapsed time.

pub mod anim;
pub mod config;
pub mod error;
pub mod moves;
pub mod path;
pub mod search;
pub mod session;

pub use chess_bfs_types as types;

// Re-export commonly used types for convenience
pub use anim::{AnimStatus, PathAnimator, Point};
pub use config::{ArcHeights, EngineConfig};
pub use error::{CommandError, EngineError, EngineResult};
pub use moves::{is_legal_move, moves, moves_into, Moves};
pub use path::{reconstruct, shortest_path, Path};
pub use search::{DiscoveryEdge, SearchEngine, SearchPhase, StepOutcome};
pub use session::{Phase, Session, TickEvent};
