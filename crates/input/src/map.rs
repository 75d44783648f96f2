//! Key and mouse mapping from terminal events to input intents.

use crate::types::{PieceVariant, SessionCommand};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// What the user asked for, before it is resolved against the board view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputIntent {
    /// A command that needs no board geometry
    Command(SessionCommand),
    /// Move the keyboard cursor by (columns, rows)
    MoveCursor(i8, i8),
    /// Select the square under the keyboard cursor
    SelectCursor,
    /// Left click at a terminal cell
    Click { x: u16, y: u16 },
}

/// Map keyboard input to intents.
pub fn handle_key_event(key: KeyEvent) -> Option<InputIntent> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputIntent::MoveCursor(-1, 0))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputIntent::MoveCursor(1, 0))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputIntent::MoveCursor(0, -1))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputIntent::MoveCursor(0, 1))
        }
        KeyCode::Enter => Some(InputIntent::SelectCursor),

        // Search
        KeyCode::Char(' ') => Some(InputIntent::Command(SessionCommand::BeginSearch)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputIntent::Command(SessionCommand::Reset)),

        // Pieces: 1..5
        KeyCode::Char(c @ '1'..='5') => {
            let index = (c as u8 - b'1') as usize;
            PieceVariant::from_index(index)
                .map(|piece| InputIntent::Command(SessionCommand::SelectPiece(piece)))
        }

        _ => None,
    }
}

/// Map mouse input to intents. Only left-button presses are of interest.
pub fn handle_mouse_event(event: MouseEvent) -> Option<InputIntent> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputIntent::Click {
            x: event.column,
            y: event.row,
        }),
        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
