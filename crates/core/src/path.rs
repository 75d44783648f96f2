//! Shortest-path reconstruction from the search's predecessor links.

use tracing::error;

use crate::error::{EngineError, EngineResult};
use crate::moves::is_legal_move;
use crate::search::{SearchEngine, SearchPhase};
use crate::types::{PieceVariant, Position};

/// Ordered squares from start to goal, inclusive. Empty when no search succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    squares: Vec<Position>,
}

impl Path {
    pub fn from_squares(squares: Vec<Position>) -> Self {
        Self { squares }
    }

    pub fn squares(&self) -> &[Position] {
        &self.squares
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Number of moves (segments) along the path.
    pub fn move_count(&self) -> usize {
        self.squares.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Position> {
        self.squares.first().copied()
    }

    pub fn goal(&self) -> Option<Position> {
        self.squares.last().copied()
    }

    /// Endpoints of segment `index`.
    pub fn segment(&self, index: usize) -> Option<(Position, Position)> {
        let from = *self.squares.get(index)?;
        let to = *self.squares.get(index + 1)?;
        Some((from, to))
    }

    pub fn contains(&self, position: Position) -> bool {
        self.squares.contains(&position)
    }

    /// Whether every consecutive pair is a single legal move of `piece`.
    pub fn follows_rule(&self, piece: PieceVariant, board_size: u8) -> bool {
        self.squares
            .windows(2)
            .all(|w| is_legal_move(piece, w[0], w[1], board_size))
    }
}

/// Walk predecessor links from `goal` back to the search origin.
///
/// Returns an empty path when the search has not succeeded. A chain that does not
/// reach the origin within one hop per board square means the predecessor map is
/// corrupt; that is reported as [`EngineError::BrokenParentChain`].
pub fn reconstruct(search: &SearchEngine, goal: Position) -> EngineResult<Path> {
    if search.phase() != SearchPhase::Succeeded {
        return Ok(Path::default());
    }
    let Some(origin) = search.origin() else {
        return Ok(Path::default());
    };

    let limit = search.square_count();
    let broken = || {
        error!(%origin, %goal, limit, "predecessor chain does not reach the origin");
        EngineError::BrokenParentChain {
            origin,
            goal,
            limit,
        }
    };

    let mut squares = vec![goal];
    let mut cur = goal;
    let mut hops = 0usize;
    while cur != origin {
        if hops >= limit {
            return Err(broken());
        }
        cur = search.parent(cur).ok_or_else(broken)?;
        squares.push(cur);
        hops += 1;
    }

    squares.reverse();
    Ok(Path { squares })
}

/// Run a complete, unpaced search and return the shortest path.
///
/// The path is empty when `goal` is unreachable for `piece`.
pub fn shortest_path(
    board_size: u8,
    piece: PieceVariant,
    start: Position,
    goal: Position,
) -> EngineResult<Path> {
    let mut search = SearchEngine::new(board_size, piece);
    search.start(start, goal)?;
    match search.run_to_end()? {
        SearchPhase::Succeeded => reconstruct(&search, goal),
        _ => Ok(Path::default()),
    }
}
