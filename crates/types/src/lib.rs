//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (search engine, terminal rendering, headless tracing).
//!
//! # Board Dimensions
//!
//! The default board is the standard 8x8 chessboard. Columns and rows are indexed
//! from 0, with row 0 at the top of the rendered board. Larger boards (up to
//! [`MAX_BOARD_SIZE`]) can be configured at engine construction.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frontend frame interval (~60 FPS) |
//! | `STEP_INTERVAL_MS` | 60 | Minimum time between two BFS expansions |
//! | `ANIM_SEGMENTS_PER_SEC` | 3.0 | Path animation speed |
//!
//! # Examples
//!
//! ```
//! use chess_bfs_types::{PieceVariant, Position, SessionCommand, BOARD_SIZE};
//!
//! let piece = PieceVariant::from_str("knight").unwrap();
//! assert_eq!(piece, PieceVariant::Knight);
//!
//! let p = Position::parse("3,4").unwrap();
//! assert_eq!(p, Position::new(3, 4));
//! assert!(p.is_on_board(BOARD_SIZE));
//!
//! let cmd = SessionCommand::SelectPiece(PieceVariant::Queen);
//! assert_eq!(cmd.as_str(), "selectPiece");
//! ```

use std::fmt;

/// Default board size (8x8)
pub const BOARD_SIZE: u8 = 8;

/// Largest board the engine accepts.
pub const MAX_BOARD_SIZE: u8 = 16;

/// Upper bound on the number of one-move destinations from any square on any
/// supported board (a queen in the middle of the largest board).
pub const MAX_MOVES: usize = 4 * (MAX_BOARD_SIZE as usize - 1);

/// Frontend frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Pacing between two BFS expansions (60ms)
pub const STEP_INTERVAL_MS: u32 = 60;

/// Path animation speed in segments per second.
///
/// Matches 0.05 progress per frame at 60 FPS.
pub const ANIM_SEGMENTS_PER_SEC: f32 = 3.0;

/// Knight hop height, in board squares.
pub const KNIGHT_ARC_HEIGHT: f32 = 0.25;

/// Hop height for every other piece, in board squares.
pub const DEFAULT_ARC_HEIGHT: f32 = 0.10;

/// A square on the board, addressed by (column, row).
///
/// Coordinates are signed so that off-board positions can be represented and
/// rejected at the command boundary instead of wrapping silently. Ordering is by
/// column, then row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub col: i8,
    pub row: i8,
}

impl Position {
    pub const fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    /// Position shifted by `(dc, dr)`. Saturates instead of overflowing so that the
    /// result is always representable (and off-board when it would have wrapped).
    #[inline]
    pub fn offset(self, dc: i8, dr: i8) -> Self {
        Self {
            col: self.col.saturating_add(dc),
            row: self.row.saturating_add(dr),
        }
    }

    /// Check whether this position lies on a `size` x `size` board.
    #[inline]
    pub fn is_on_board(self, size: u8) -> bool {
        let size = size as i16;
        (0..size).contains(&(self.col as i16)) && (0..size).contains(&(self.row as i16))
    }

    /// Parse a `"col,row"` pair (whitespace around the parts is ignored).
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_bfs_types::Position;
    ///
    /// assert_eq!(Position::parse("0,7"), Some(Position::new(0, 7)));
    /// assert_eq!(Position::parse(" 2 , -1 "), Some(Position::new(2, -1)));
    /// assert_eq!(Position::parse("2"), None);
    /// assert_eq!(Position::parse("a,b"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let (c, r) = s.split_once(',')?;
        let col = c.trim().parse::<i8>().ok()?;
        let row = r.trim().parse::<i8>().ok()?;
        Some(Self { col, row })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// The movement rules a search can run with.
///
/// - **Knight**: L-shaped jumps
/// - **King**: one step in any of the 8 directions
/// - **Rook**: orthogonal slides
/// - **Bishop**: diagonal slides (confined to one square color)
/// - **Queen**: rook and bishop slides combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PieceVariant {
    #[default]
    Knight,
    King,
    Rook,
    Bishop,
    Queen,
}

impl PieceVariant {
    /// All variants, in selection-key order (`1`..`5`).
    pub const ALL: [PieceVariant; 5] = [
        PieceVariant::Knight,
        PieceVariant::King,
        PieceVariant::Rook,
        PieceVariant::Bishop,
        PieceVariant::Queen,
    ];

    /// Parse a variant from its name or its single-letter chess symbol
    /// (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_bfs_types::PieceVariant;
    ///
    /// assert_eq!(PieceVariant::from_str("Rook"), Some(PieceVariant::Rook));
    /// assert_eq!(PieceVariant::from_str("n"), Some(PieceVariant::Knight));
    /// assert_eq!(PieceVariant::from_str("pawn"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "knight" | "n" => Some(PieceVariant::Knight),
            "king" | "k" => Some(PieceVariant::King),
            "rook" | "r" => Some(PieceVariant::Rook),
            "bishop" | "b" => Some(PieceVariant::Bishop),
            "queen" | "q" => Some(PieceVariant::Queen),
            _ => None,
        }
    }

    /// Variant bound to the zero-based selection slot (`0` = Knight).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceVariant::Knight => "knight",
            PieceVariant::King => "king",
            PieceVariant::Rook => "rook",
            PieceVariant::Bishop => "bishop",
            PieceVariant::Queen => "queen",
        }
    }

    /// Single-letter chess symbol
    pub fn symbol(&self) -> char {
        match self {
            PieceVariant::Knight => 'N',
            PieceVariant::King => 'K',
            PieceVariant::Rook => 'R',
            PieceVariant::Bishop => 'B',
            PieceVariant::Queen => 'Q',
        }
    }

    /// Whether the piece moves along rays until the board edge.
    pub fn is_sliding(&self) -> bool {
        matches!(
            self,
            PieceVariant::Rook | PieceVariant::Bishop | PieceVariant::Queen
        )
    }
}

impl fmt::Display for PieceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Commands that drive a session.
///
/// Produced by keyboard and mouse input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Pick the start square, then the goal square
    SelectSquare(Position),
    /// Choose the movement rule for the next search
    SelectPiece(PieceVariant),
    /// Start the breadth-first search
    BeginSearch,
    /// Drop all selections and derived state
    Reset,
}

impl SessionCommand {
    /// Command name (camelCase)
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionCommand::SelectSquare(_) => "selectSquare",
            SessionCommand::SelectPiece(_) => "selectPiece",
            SessionCommand::BeginSearch => "beginSearch",
            SessionCommand::Reset => "reset",
        }
    }
}
