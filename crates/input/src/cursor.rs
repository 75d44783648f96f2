//! Keyboard cursor over the board.

use crate::types::{Position, MAX_BOARD_SIZE};

/// A square highlighted by the arrow keys, always kept on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardCursor {
    position: Position,
    board_size: u8,
}

impl BoardCursor {
    pub fn new(board_size: u8) -> Self {
        Self {
            position: Position::new(0, 0),
            board_size: board_size.clamp(1, MAX_BOARD_SIZE),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Move by `(dc, dr)`, clamping at the board edges.
    pub fn move_by(&mut self, dc: i8, dr: i8) {
        let max = (self.board_size - 1) as i8;
        let moved = self.position.offset(dc, dr);
        self.position = Position::new(moved.col.clamp(0, max), moved.row.clamp(0, max));
    }

    /// Jump to `position` (e.g. after a mouse click). Off-board positions are ignored.
    pub fn set(&mut self, position: Position) {
        if position.is_on_board(self.board_size) {
            self.position = position;
        }
    }
}
