use std::time::Duration;

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use chess_bfs::app::apply_intent;
use chess_bfs::core::{EngineConfig, Phase, Session};
use chess_bfs::input::{handle_key_event, handle_mouse_event, BoardCursor, InputIntent};
use chess_bfs::term::{BoardView, Viewport};
use chess_bfs::types::{PieceVariant, Position};

const VP: Viewport = Viewport {
    width: 80,
    height: 24,
};

fn key(code: KeyCode) -> InputIntent {
    handle_key_event(KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
}

fn click(x: u16, y: u16) -> InputIntent {
    handle_mouse_event(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
    .unwrap()
}

#[test]
fn clicks_select_start_then_goal() {
    let mut session = Session::default();
    let mut cursor = BoardCursor::new(8);
    let view = BoardView::default();
    let layout = view.layout(8, VP);

    let (x, y) = layout.cell_origin(Position::new(2, 3));
    assert!(apply_intent(&mut session, &mut cursor, &view, VP, click(x, y)));
    let (x, y) = layout.cell_origin(Position::new(6, 0));
    assert!(apply_intent(&mut session, &mut cursor, &view, VP, click(x + 3, y + 1)));

    assert_eq!(session.start(), Some(Position::new(2, 3)));
    assert_eq!(session.goal(), Some(Position::new(6, 0)));
    assert_eq!(session.phase(), Phase::ReadyToSearch);
    assert_eq!(cursor.position(), Position::new(6, 0));
}

#[test]
fn clicks_outside_the_board_do_nothing() {
    let mut session = Session::default();
    let mut cursor = BoardCursor::new(8);
    let view = BoardView::default();

    let before = session.clone();
    assert!(!apply_intent(&mut session, &mut cursor, &view, VP, click(0, 0)));
    assert_eq!(session, before);
}

#[test]
fn keyboard_only_flow_reaches_search() {
    let mut session = Session::default();
    let mut cursor = BoardCursor::new(8);
    let view = BoardView::default();

    let mut press = |session: &mut Session, intent: InputIntent| {
        apply_intent(session, &mut cursor, &view, VP, intent)
    };

    assert!(press(&mut session, key(KeyCode::Char('3'))));
    assert_eq!(session.piece(), PieceVariant::Rook);

    assert!(press(&mut session, key(KeyCode::Enter)));
    assert!(press(&mut session, key(KeyCode::Right)));
    assert!(press(&mut session, key(KeyCode::Down)));
    assert!(press(&mut session, key(KeyCode::Enter)));
    assert_eq!(session.phase(), Phase::ReadyToSearch);

    assert!(press(&mut session, key(KeyCode::Char(' '))));
    assert_eq!(session.phase(), Phase::Searching);

    // Selecting a piece mid-search is refused.
    assert!(!press(&mut session, key(KeyCode::Char('5'))));

    assert!(press(&mut session, key(KeyCode::Char('r'))));
    assert_eq!(session.phase(), Phase::AwaitingStart);
}

#[test]
fn cursor_stops_at_the_board_edge() {
    let mut session = Session::default();
    let mut cursor = BoardCursor::new(8);
    let view = BoardView::default();
    assert!(!apply_intent(&mut session, &mut cursor, &view, VP, key(KeyCode::Left)));
}

#[test]
fn clicking_the_board_after_a_run_resets() {
    let mut session = Session::new(EngineConfig::default().with_step_interval(Duration::ZERO));
    let mut cursor = BoardCursor::new(8);
    let view = BoardView::default();
    let layout = view.layout(8, VP);

    session.select_square(Position::new(0, 0)).unwrap();
    session.select_square(Position::new(1, 2)).unwrap();
    session.begin_search().unwrap();

    // A click while searching is refused.
    let (x, y) = layout.cell_origin(Position::new(4, 4));
    assert!(!apply_intent(&mut session, &mut cursor, &view, VP, click(x, y)));
    assert_eq!(session.phase(), Phase::Searching);

    while session.phase().is_active() {
        session.advance_tick(Duration::from_millis(16)).unwrap();
    }
    assert_eq!(session.phase(), Phase::Finished);

    assert!(apply_intent(&mut session, &mut cursor, &view, VP, click(x, y)));
    assert_eq!(session.phase(), Phase::AwaitingStart);
    assert_eq!(session.start(), None);
    assert!(session.path().is_empty());
}

#[test]
fn clicking_when_ready_resets_instead_of_reselecting() {
    let mut session = Session::default();
    let mut cursor = BoardCursor::new(8);
    let view = BoardView::default();
    let layout = view.layout(8, VP);

    session.select_square(Position::new(2, 3)).unwrap();
    session.select_square(Position::new(6, 0)).unwrap();

    let (x, y) = layout.cell_origin(Position::new(5, 5));
    assert!(apply_intent(&mut session, &mut cursor, &view, VP, click(x, y)));
    assert_eq!(session.phase(), Phase::AwaitingStart);
    assert_eq!(session.goal(), None);

    // The next click picks a fresh start.
    assert!(apply_intent(&mut session, &mut cursor, &view, VP, click(x, y)));
    assert_eq!(session.start(), Some(Position::new(5, 5)));
}
