//! Incrementally steppable breadth-first search over the board.
//!
//! Every move has weight one, so expanding squares in FIFO order guarantees that the
//! first time the goal is dequeued its predecessor chain is a shortest route.
//!
//! The engine never waits: each [`SearchEngine::step`] call expands at most one square
//! and returns immediately. Pacing is the caller's business.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use tracing::{debug, info};

use crate::error::{CommandError, EngineError, EngineResult};
use crate::moves::{moves, Moves};
use crate::types::{PieceVariant, Position, MAX_BOARD_SIZE};

/// A `(predecessor, successor)` pair, logged the first time `successor` is reached.
pub type DiscoveryEdge = (Position, Position);

/// Search lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchPhase {
    /// Never started
    Idle,
    /// Cleared after a previous run, ready to start again
    Ready,
    Running,
    Succeeded,
    Exhausted,
}

impl SearchPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchPhase::Idle => "idle",
            SearchPhase::Ready => "ready",
            SearchPhase::Running => "running",
            SearchPhase::Succeeded => "succeeded",
            SearchPhase::Exhausted => "exhausted",
        }
    }
}

/// Result of a single [`SearchEngine::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The dequeued square was expanded; carries the newly discovered squares in
    /// discovery order (possibly none).
    Expanded(Moves),
    GoalReached,
    /// Frontier ran dry before the goal was dequeued.
    NoPath,
}

/// BFS state for one (origin, goal, piece) run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEngine {
    board_size: u8,
    piece: PieceVariant,
    phase: SearchPhase,
    origin: Option<Position>,
    goal: Option<Position>,
    frontier: VecDeque<Position>,
    visited: BTreeSet<Position>,
    /// Back-references only; the origin has no entry.
    parents: BTreeMap<Position, Position>,
    current: Option<Position>,
    edges: Vec<DiscoveryEdge>,
    steps: usize,
}

impl SearchEngine {
    /// `board_size` is clamped to `1..=MAX_BOARD_SIZE`, the range the move rules cover.
    pub fn new(board_size: u8, piece: PieceVariant) -> Self {
        Self {
            board_size: board_size.clamp(1, MAX_BOARD_SIZE),
            piece,
            phase: SearchPhase::Idle,
            origin: None,
            goal: None,
            frontier: VecDeque::new(),
            visited: BTreeSet::new(),
            parents: BTreeMap::new(),
            current: None,
            edges: Vec::new(),
            steps: 0,
        }
    }

    /// Seed the frontier with `origin` and start running towards `goal`.
    ///
    /// Rejected without any state change when either square is off the board, when
    /// they are equal, or when the engine is not idle/ready.
    pub fn start(&mut self, origin: Position, goal: Position) -> Result<(), CommandError> {
        if !matches!(self.phase, SearchPhase::Idle | SearchPhase::Ready) {
            return Err(CommandError::WrongPhase {
                command: "start",
                phase: self.phase.as_str(),
            });
        }
        for position in [origin, goal] {
            if !position.is_on_board(self.board_size) {
                return Err(CommandError::OutOfBounds {
                    position,
                    size: self.board_size,
                });
            }
        }
        if origin == goal {
            return Err(CommandError::SameAsStart(goal));
        }

        self.reset_state();
        self.origin = Some(origin);
        self.goal = Some(goal);
        self.frontier.push_back(origin);
        self.visited.insert(origin);
        self.phase = SearchPhase::Running;

        info!(piece = %self.piece, %origin, %goal, "search started");
        Ok(())
    }

    /// Expand one square.
    pub fn step(&mut self) -> EngineResult<StepOutcome> {
        if self.phase != SearchPhase::Running {
            return Err(EngineError::NotRunning(self.phase.as_str()));
        }
        self.steps += 1;

        let Some(current) = self.frontier.pop_front() else {
            self.phase = SearchPhase::Exhausted;
            info!(
                piece = %self.piece,
                visited = self.visited.len(),
                steps = self.steps,
                "search exhausted, no path"
            );
            return Ok(StepOutcome::NoPath);
        };
        self.current = Some(current);

        if Some(current) == self.goal {
            self.phase = SearchPhase::Succeeded;
            info!(
                piece = %self.piece,
                goal = %current,
                visited = self.visited.len(),
                steps = self.steps,
                "goal reached"
            );
            return Ok(StepOutcome::GoalReached);
        }

        let mut discovered = Moves::new();
        for neighbor in moves(self.piece, current, self.board_size) {
            if self.visited.insert(neighbor) {
                self.parents.insert(neighbor, current);
                self.frontier.push_back(neighbor);
                self.edges.push((current, neighbor));
                discovered.push(neighbor);
            }
        }

        debug!(
            %current,
            discovered = discovered.len(),
            frontier = self.frontier.len(),
            "expanded"
        );
        Ok(StepOutcome::Expanded(discovered))
    }

    /// Step until the search leaves `Running`.
    ///
    /// A correct run needs at most one step per square plus the final one; going over
    /// that bound is reported as [`EngineError::StepLimit`].
    pub fn run_to_end(&mut self) -> EngineResult<SearchPhase> {
        let limit = self.square_count() + 1;
        let mut taken = 0usize;
        while self.phase == SearchPhase::Running {
            if taken >= limit {
                return Err(EngineError::StepLimit(limit));
            }
            self.step()?;
            taken += 1;
        }
        Ok(self.phase)
    }

    /// Discard the search state, keeping board size and piece.
    pub fn clear(&mut self) {
        self.reset_state();
        self.phase = SearchPhase::Ready;
    }

    fn reset_state(&mut self) {
        self.origin = None;
        self.goal = None;
        self.frontier.clear();
        self.visited.clear();
        self.parents.clear();
        self.current = None;
        self.edges.clear();
        self.steps = 0;
    }

    pub fn board_size(&self) -> u8 {
        self.board_size
    }

    /// Number of squares on the board.
    pub fn square_count(&self) -> usize {
        (self.board_size as usize) * (self.board_size as usize)
    }

    pub fn piece(&self) -> PieceVariant {
        self.piece
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn origin(&self) -> Option<Position> {
        self.origin
    }

    pub fn goal(&self) -> Option<Position> {
        self.goal
    }

    /// Most recently dequeued square.
    pub fn current(&self) -> Option<Position> {
        self.current
    }

    pub fn frontier(&self) -> &VecDeque<Position> {
        &self.frontier
    }

    pub fn visited(&self) -> &BTreeSet<Position> {
        &self.visited
    }

    pub fn is_visited(&self, position: Position) -> bool {
        self.visited.contains(&position)
    }

    pub fn parent(&self, position: Position) -> Option<Position> {
        self.parents.get(&position).copied()
    }

    /// Discovery edges in discovery order.
    pub fn edges(&self) -> &[DiscoveryEdge] {
        &self.edges
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    #[cfg(test)]
    pub(crate) fn parents_mut(&mut self) -> &mut BTreeMap<Position, Position> {
        &mut self.parents
    }
}
