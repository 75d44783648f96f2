//! Path animation: turns a discrete path into continuous motion.
//!
//! The animated piece moves segment by segment. Within a segment its position is
//! the linear interpolation of the two endpoints, lifted by a sine-shaped hop whose
//! height depends on the piece. Coordinates are in board squares, with `y` growing
//! downwards like board rows, so the hop is subtracted from `y`.

use std::f32::consts::PI;

use crate::error::{EngineError, EngineResult};
use crate::path::Path;
use crate::types::Position;

/// Continuous board coordinates (`x` = column, `y` = row).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Position> for Point {
    fn from(p: Position) -> Self {
        Self {
            x: p.col as f32,
            y: p.row as f32,
        }
    }
}

/// Result of a [`PathAnimator::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimStatus {
    /// Still inside the current segment
    Moving,
    /// Crossed into the next segment
    SegmentDone,
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathAnimator {
    path: Path,
    arc_height: f32,
    index: usize,
    progress: f32,
    position: Point,
    finished: bool,
}

impl PathAnimator {
    /// Arm the animator at the start of `path`.
    ///
    /// A single-square path is finished immediately.
    pub fn new(path: Path, arc_height: f32) -> EngineResult<Self> {
        let Some(start) = path.start() else {
            return Err(EngineError::EmptyPath);
        };
        let finished = path.move_count() == 0;
        Ok(Self {
            path,
            arc_height,
            index: 0,
            progress: 0.0,
            position: start.into(),
            finished,
        })
    }

    /// Advance the current segment by `delta` (fraction of a segment).
    ///
    /// Completing a segment snaps exactly onto its end square; any overshoot is
    /// dropped rather than carried into the next segment. Negative or NaN deltas
    /// count as zero.
    pub fn tick(&mut self, delta: f32) -> AnimStatus {
        if self.finished {
            return AnimStatus::Finished;
        }
        let Some((from, to)) = self.path.segment(self.index) else {
            self.finished = true;
            return AnimStatus::Finished;
        };

        self.progress += delta.max(0.0);

        if self.progress >= 1.0 {
            self.position = to.into();
            if self.index + 1 >= self.path.move_count() {
                self.progress = 1.0;
                self.finished = true;
                return AnimStatus::Finished;
            }
            self.progress = 0.0;
            self.index += 1;
            return AnimStatus::SegmentDone;
        }

        let (a, b) = (Point::from(from), Point::from(to));
        let t = self.progress;
        let lift = self.arc_height * (PI * t).sin();
        self.position = Point {
            x: a.x + (b.x - a.x) * t,
            y: a.y + (b.y - a.y) * t - lift,
        };
        AnimStatus::Moving
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn arc_height(&self) -> f32 {
        self.arc_height
    }

    /// Index of the segment being traversed.
    pub fn segment_index(&self) -> usize {
        self.index
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
