//! Resolves input intents against the board view and feeds them to the session.

use crate::core::{Phase, Session};
use crate::input::{BoardCursor, InputIntent};
use crate::term::{BoardView, Viewport};
use crate::types::SessionCommand;

/// Apply one intent. Returns true when something visible changed.
///
/// Rejected commands are dropped; the session stays as it was. A board click
/// while start and goal are chosen and no search runs resets the session.
pub fn apply_intent(
    session: &mut Session,
    cursor: &mut BoardCursor,
    view: &BoardView,
    viewport: Viewport,
    intent: InputIntent,
) -> bool {
    let command = match intent {
        InputIntent::Command(command) => command,
        InputIntent::MoveCursor(dc, dr) => {
            let before = cursor.position();
            cursor.move_by(dc, dr);
            return cursor.position() != before;
        }
        InputIntent::SelectCursor => SessionCommand::SelectSquare(cursor.position()),
        InputIntent::Click { x, y } => {
            let Some(square) = view.square_at(session.board_size(), viewport, x, y) else {
                return false;
            };
            cursor.set(square);
            if matches!(
                session.phase(),
                Phase::ReadyToSearch | Phase::Finished | Phase::Exhausted
            ) {
                SessionCommand::Reset
            } else {
                SessionCommand::SelectSquare(square)
            }
        }
    };
    session.apply(command).is_ok()
}
