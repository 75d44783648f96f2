//! Headless `trace` mode: run one search without pacing and print it as JSON lines.
//!
//! ```text
//! chess-bfs trace knight 0,0 7,7
//! chess-bfs trace --size 5 bishop 0,0 4,4
//! ```

use std::io::Write;

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::core::{reconstruct, SearchEngine, SearchPhase, StepOutcome};
use crate::types::{PieceVariant, Position, BOARD_SIZE, MAX_BOARD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceConfig {
    pub piece: PieceVariant,
    pub start: Position,
    pub goal: Position,
    pub board_size: u8,
}

pub fn parse_trace_args(args: &[String]) -> Result<Option<TraceConfig>> {
    if args.is_empty() || args[0] != "trace" {
        return Ok(None);
    }

    let mut board_size = BOARD_SIZE;
    let mut positional: Vec<&str> = Vec::with_capacity(3);
    let mut i = 1usize;
    while i < args.len() {
        match args[i].as_str() {
            "--size" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("trace: missing value for --size"))?;
                board_size = v
                    .parse::<u8>()
                    .ok()
                    .filter(|n| (1..=MAX_BOARD_SIZE).contains(n))
                    .ok_or_else(|| anyhow!("trace: invalid --size value: {}", v))?;
            }
            other if other.starts_with("--") => {
                return Err(anyhow!("trace: unknown argument: {}", other));
            }
            other => positional.push(other),
        }
        i += 1;
    }

    let [piece, start, goal] = positional.as_slice() else {
        return Err(anyhow!(
            "trace: expected <piece> <col,row> <col,row>, got {} argument(s)",
            positional.len()
        ));
    };
    let piece =
        PieceVariant::from_str(piece).ok_or_else(|| anyhow!("trace: unknown piece: {}", piece))?;
    let start = Position::parse(start).ok_or_else(|| anyhow!("trace: invalid square: {}", start))?;
    let goal = Position::parse(goal).ok_or_else(|| anyhow!("trace: invalid square: {}", goal))?;

    Ok(Some(TraceConfig {
        piece,
        start,
        goal,
        board_size,
    }))
}

/// Board square as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Square {
    pub col: i8,
    pub row: i8,
}

impl From<Position> for Square {
    fn from(p: Position) -> Self {
        Self {
            col: p.col,
            row: p.row,
        }
    }
}

/// One JSON line of trace output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    Expanded {
        step: usize,
        square: Square,
        discovered: Vec<Square>,
    },
    GoalReached {
        step: usize,
        square: Square,
    },
    NoPath {
        step: usize,
        visited: usize,
    },
    Result {
        piece: &'static str,
        board_size: u8,
        start: Square,
        goal: Square,
        found: bool,
        moves: Option<usize>,
        path: Vec<Square>,
        visited: usize,
    },
}

/// Run the search and collect every event, ending with the `Result` line.
pub fn trace_events(config: &TraceConfig) -> Result<Vec<TraceEvent>> {
    let mut search = SearchEngine::new(config.board_size, config.piece);
    search
        .start(config.start, config.goal)
        .map_err(|e| anyhow!("trace: {}", e))?;

    let limit = search.square_count() + 1;
    let mut events = Vec::new();
    while search.phase() == SearchPhase::Running {
        if search.steps() >= limit {
            return Err(anyhow!("trace: search did not finish within {} steps", limit));
        }
        let outcome = search.step()?;
        let step = search.steps();
        let event = match outcome {
            StepOutcome::Expanded(found) => TraceEvent::Expanded {
                step,
                square: search
                    .current()
                    .map(Square::from)
                    .ok_or_else(|| anyhow!("trace: expanded without a current square"))?,
                discovered: found.into_iter().map(Square::from).collect(),
            },
            StepOutcome::GoalReached => TraceEvent::GoalReached {
                step,
                square: config.goal.into(),
            },
            StepOutcome::NoPath => TraceEvent::NoPath {
                step,
                visited: search.visited().len(),
            },
        };
        events.push(event);
    }

    let path = reconstruct(&search, config.goal)?;
    events.push(TraceEvent::Result {
        piece: config.piece.as_str(),
        board_size: config.board_size,
        start: config.start.into(),
        goal: config.goal.into(),
        found: !path.is_empty(),
        moves: (!path.is_empty()).then(|| path.move_count()),
        path: path.squares().iter().copied().map(Square::from).collect(),
        visited: search.visited().len(),
    });
    Ok(events)
}

/// Write the trace as JSON lines.
pub fn run_trace(config: &TraceConfig, out: &mut impl Write) -> Result<()> {
    for event in trace_events(config)? {
        serde_json::to_writer(&mut *out, &event)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
