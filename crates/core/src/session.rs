//! Session state machine - coordinates user selections with the search and animation.
//!
//! ```text
//! AwaitingStart -> AwaitingGoal -> ReadyToSearch -> Searching -+-> Succeeded -> Animating -> Finished
//!                                                              +-> Exhausted
//! ```
//!
//! `reset` is accepted from every phase and returns to `AwaitingStart`. The selected
//! piece survives a reset; squares, search state, path and animation do not.
//!
//! The session never blocks. Callers drive it with [`Session::advance_tick`] and the
//! elapsed time since the previous call.

use std::time::Duration;

use tracing::{debug, error, info};

use crate::anim::{AnimStatus, PathAnimator, Point};
use crate::config::EngineConfig;
use crate::error::{CommandError, EngineResult};
use crate::path::{reconstruct, Path};
use crate::search::{DiscoveryEdge, SearchEngine, StepOutcome};
use crate::types::{PieceVariant, Position, SessionCommand};

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    AwaitingStart,
    AwaitingGoal,
    ReadyToSearch,
    Searching,
    /// Goal dequeued; the path is being reconstructed
    Succeeded,
    Animating,
    Finished,
    /// The frontier ran dry: no path exists
    Exhausted,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::AwaitingStart => "awaiting start",
            Phase::AwaitingGoal => "awaiting goal",
            Phase::ReadyToSearch => "ready to search",
            Phase::Searching => "searching",
            Phase::Succeeded => "succeeded",
            Phase::Animating => "animating",
            Phase::Finished => "finished",
            Phase::Exhausted => "exhausted",
        }
    }

    /// Whether the phase changes on its own as time passes.
    pub fn is_active(&self) -> bool {
        matches!(self, Phase::Searching | Phase::Animating)
    }
}

/// What a call to [`Session::advance_tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Nothing runs in the current phase
    Idle,
    /// Searching, but the step interval has not elapsed yet
    Paced,
    /// One square expanded; carries the number of newly discovered squares
    Expanded(usize),
    /// Goal reached and the animation armed; carries the move count
    PathFound(usize),
    NoPath,
    Animated,
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    config: EngineConfig,
    phase: Phase,
    piece: PieceVariant,
    start: Option<Position>,
    goal: Option<Position>,
    search: Option<SearchEngine>,
    path: Path,
    animator: Option<PathAnimator>,
    since_step: Duration,
    /// Bumped on every observable change.
    revision: u64,
}

impl Session {
    /// The configuration is passed through [`EngineConfig::sanitized`].
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config: config.sanitized(),
            phase: Phase::AwaitingStart,
            piece: PieceVariant::default(),
            start: None,
            goal: None,
            search: None,
            path: Path::default(),
            animator: None,
            since_step: Duration::ZERO,
            revision: 0,
        }
    }

    /// Apply a command from the input layer.
    pub fn apply(&mut self, command: SessionCommand) -> Result<(), CommandError> {
        let result = match command {
            SessionCommand::SelectSquare(position) => self.select_square(position),
            SessionCommand::SelectPiece(piece) => self.select_piece(piece),
            SessionCommand::BeginSearch => self.begin_search(),
            SessionCommand::Reset => {
                self.reset();
                Ok(())
            }
        };
        if let Err(e) = &result {
            debug!(command = command.as_str(), phase = self.phase.as_str(), "rejected: {}", e);
        }
        result
    }

    /// Pick the start square, then the goal square.
    pub fn select_square(&mut self, position: Position) -> Result<(), CommandError> {
        if !position.is_on_board(self.config.board_size) {
            return Err(CommandError::OutOfBounds {
                position,
                size: self.config.board_size,
            });
        }

        match self.phase {
            Phase::AwaitingStart => {
                self.start = Some(position);
                self.phase = Phase::AwaitingGoal;
            }
            Phase::AwaitingGoal => {
                if self.start == Some(position) {
                    return Err(CommandError::SameAsStart(position));
                }
                self.goal = Some(position);
                self.phase = Phase::ReadyToSearch;
            }
            _ => return Err(self.wrong_phase("selectSquare")),
        }
        self.touch();
        Ok(())
    }

    /// Choose the piece for the next search. Refused while a search or animation runs.
    pub fn select_piece(&mut self, piece: PieceVariant) -> Result<(), CommandError> {
        if self.phase.is_active() {
            return Err(self.wrong_phase("selectPiece"));
        }
        if self.piece != piece {
            self.piece = piece;
            self.touch();
        }
        Ok(())
    }

    /// Start a search from the selected start to the selected goal.
    pub fn begin_search(&mut self) -> Result<(), CommandError> {
        let (Phase::ReadyToSearch, Some(start), Some(goal)) = (self.phase, self.start, self.goal)
        else {
            return Err(self.wrong_phase("beginSearch"));
        };

        let mut search = SearchEngine::new(self.config.board_size, self.piece);
        search.start(start, goal)?;

        self.search = Some(search);
        self.since_step = Duration::ZERO;
        self.phase = Phase::Searching;
        self.touch();
        Ok(())
    }

    /// Drop every selection and all derived state. Idempotent.
    pub fn reset(&mut self) {
        if self.phase == Phase::AwaitingStart {
            return;
        }
        self.phase = Phase::AwaitingStart;
        self.start = None;
        self.goal = None;
        self.search = None;
        self.path = Path::default();
        self.animator = None;
        self.since_step = Duration::ZERO;
        self.touch();
    }

    /// Advance time by `elapsed`.
    ///
    /// While searching, at most one square is expanded per call, and only once the
    /// configured step interval has accumulated. While animating, the animated piece
    /// advances by `elapsed` times the animation speed.
    pub fn advance_tick(&mut self, elapsed: Duration) -> EngineResult<TickEvent> {
        match self.phase {
            Phase::Searching => self.tick_search(elapsed),
            Phase::Animating => Ok(self.tick_animation(elapsed)),
            _ => Ok(TickEvent::Idle),
        }
    }

    fn tick_search(&mut self, elapsed: Duration) -> EngineResult<TickEvent> {
        self.since_step = self.since_step.saturating_add(elapsed);
        if self.since_step < self.config.step_interval {
            return Ok(TickEvent::Paced);
        }
        self.since_step = Duration::ZERO;

        let Some(search) = self.search.as_mut() else {
            return Ok(TickEvent::Idle);
        };
        let outcome = search.step()?;
        self.touch();

        match outcome {
            StepOutcome::Expanded(found) => Ok(TickEvent::Expanded(found.len())),
            StepOutcome::NoPath => {
                self.phase = Phase::Exhausted;
                Ok(TickEvent::NoPath)
            }
            StepOutcome::GoalReached => {
                self.phase = Phase::Succeeded;
                self.arm_animation()
            }
        }
    }

    fn arm_animation(&mut self) -> EngineResult<TickEvent> {
        let (Some(search), Some(goal)) = (self.search.as_ref(), self.goal) else {
            return Ok(TickEvent::Idle);
        };

        let path = match reconstruct(search, goal) {
            Ok(path) => path,
            Err(e) => {
                error!(error = %e, "search succeeded but the path could not be rebuilt");
                return Err(e);
            }
        };
        let arc_height = self.config.arc_height(search.piece());
        let animator = PathAnimator::new(path.clone(), arc_height)?;
        let moves = path.move_count();

        info!(piece = %search.piece(), moves, "path found");
        self.path = path;
        self.animator = Some(animator);
        self.phase = Phase::Animating;
        Ok(TickEvent::PathFound(moves))
    }

    fn tick_animation(&mut self, elapsed: Duration) -> TickEvent {
        let delta = self.config.anim_delta(elapsed);
        let Some(animator) = self.animator.as_mut() else {
            return TickEvent::Idle;
        };
        let status = animator.tick(delta);
        self.touch();

        if status == AnimStatus::Finished {
            self.phase = Phase::Finished;
            TickEvent::Finished
        } else {
            TickEvent::Animated
        }
    }

    fn wrong_phase(&self, command: &'static str) -> CommandError {
        CommandError::WrongPhase {
            command,
            phase: self.phase.as_str(),
        }
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board_size(&self) -> u8 {
        self.config.board_size
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Piece for the next search.
    pub fn piece(&self) -> PieceVariant {
        self.piece
    }

    /// Piece the current (or last) search ran with.
    pub fn search_piece(&self) -> Option<PieceVariant> {
        self.search.as_ref().map(SearchEngine::piece)
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn goal(&self) -> Option<Position> {
        self.goal
    }

    pub fn search(&self) -> Option<&SearchEngine> {
        self.search.as_ref()
    }

    pub fn visited(&self) -> impl Iterator<Item = Position> + '_ {
        self.search.iter().flat_map(|s| s.visited().iter().copied())
    }

    pub fn is_visited(&self, position: Position) -> bool {
        self.search
            .as_ref()
            .is_some_and(|s| s.is_visited(position))
    }

    pub fn visited_count(&self) -> usize {
        self.search.as_ref().map_or(0, |s| s.visited().len())
    }

    pub fn edges(&self) -> &[DiscoveryEdge] {
        self.search.as_ref().map(|s| s.edges()).unwrap_or(&[])
    }

    /// Square most recently taken off the frontier.
    pub fn current_node(&self) -> Option<Position> {
        self.search.as_ref().and_then(SearchEngine::current)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn animator(&self) -> Option<&PathAnimator> {
        self.animator.as_ref()
    }

    /// Continuous position of the animated piece, once a path was found.
    pub fn animated_position(&self) -> Option<Point> {
        self.animator.as_ref().map(PathAnimator::position)
    }

    /// Monotonic change counter (wraps).
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
