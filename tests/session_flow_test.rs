//! End-to-end session flows driven through the command surface.

use std::time::Duration;

use chess_bfs::core::{CommandError, EngineConfig, Phase, Session, TickEvent};
use chess_bfs::types::{PieceVariant, Position, SessionCommand};

fn p(col: i8, row: i8) -> Position {
    Position::new(col, row)
}

fn unpaced() -> Session {
    Session::new(EngineConfig::default().with_step_interval(Duration::ZERO))
}

fn ready(session: &mut Session, piece: PieceVariant, start: Position, goal: Position) {
    session.apply(SessionCommand::SelectPiece(piece)).unwrap();
    session.apply(SessionCommand::SelectSquare(start)).unwrap();
    session.apply(SessionCommand::SelectSquare(goal)).unwrap();
    assert_eq!(session.phase(), Phase::ReadyToSearch);
}

/// Tick until the phase stops changing on its own; returns the number of ticks.
fn run_until_settled(session: &mut Session, tick: Duration) -> usize {
    let mut ticks = 0;
    while session.phase().is_active() {
        session.advance_tick(tick).unwrap();
        ticks += 1;
        assert!(ticks < 10_000, "session never settled");
    }
    ticks
}

#[test]
fn test_knight_corner_to_corner_full_flow() {
    let mut session = unpaced();
    ready(&mut session, PieceVariant::Knight, p(0, 0), p(7, 7));
    session.apply(SessionCommand::BeginSearch).unwrap();

    while session.phase() == Phase::Searching {
        session.advance_tick(Duration::from_millis(16)).unwrap();
    }
    assert_eq!(session.phase(), Phase::Animating);
    assert_eq!(session.path().move_count(), 6);

    run_until_settled(&mut session, Duration::from_millis(16));
    assert_eq!(session.phase(), Phase::Finished);

    let end = session.animated_position().unwrap();
    assert_eq!((end.x, end.y), (7.0, 7.0));
}

#[test]
fn test_unreachable_goal_ends_exhausted_with_empty_path() {
    let mut session = unpaced();
    ready(&mut session, PieceVariant::Bishop, p(0, 0), p(0, 1));
    session.begin_search().unwrap();

    run_until_settled(&mut session, Duration::from_millis(16));
    assert_eq!(session.phase(), Phase::Exhausted);
    assert!(session.path().is_empty());
    assert!(session.animator().is_none());
    // Only the light squares were ever discovered.
    assert_eq!(session.visited_count(), 32);
    assert!(session.visited().all(|q| (q.col + q.row) % 2 == 0));
}

#[test]
fn test_search_is_paced_by_step_interval() {
    let mut session = Session::default();
    ready(&mut session, PieceVariant::King, p(0, 0), p(3, 3));
    session.begin_search().unwrap();

    let tick = Duration::from_millis(16);
    // 60ms default: three ticks accumulate 48ms, the fourth crosses the interval.
    for _ in 0..3 {
        assert_eq!(session.advance_tick(tick).unwrap(), TickEvent::Paced);
    }
    assert_eq!(session.advance_tick(tick).unwrap(), TickEvent::Expanded(3));
    assert_eq!(session.search().unwrap().steps(), 1);

    // A huge tick still expands only one square.
    assert!(matches!(
        session.advance_tick(Duration::from_secs(10)).unwrap(),
        TickEvent::Expanded(_)
    ));
    assert_eq!(session.search().unwrap().steps(), 2);
}

#[test]
fn test_identical_runs_produce_identical_logs() {
    let run = || {
        let mut session = unpaced();
        ready(&mut session, PieceVariant::Queen, p(2, 1), p(5, 7));
        session.begin_search().unwrap();
        run_until_settled(&mut session, Duration::from_millis(16));
        (session.edges().to_vec(), session.path().clone())
    };
    assert_eq!(run(), run());
}

#[test]
fn test_reset_twice_equals_reset_once() {
    let mut session = unpaced();
    ready(&mut session, PieceVariant::Rook, p(0, 0), p(5, 5));
    session.begin_search().unwrap();
    session.advance_tick(Duration::from_millis(16)).unwrap();

    session.reset();
    let once = session.clone();
    session.reset();
    assert_eq!(session, once);
    assert_eq!(session.phase(), Phase::AwaitingStart);
    assert_eq!(session.piece(), PieceVariant::Rook);
    assert_eq!(session.visited_count(), 0);
    assert!(session.edges().is_empty());
}

#[test]
fn test_same_square_goal_is_rejected_before_searching() {
    let mut session = unpaced();
    session.select_piece(PieceVariant::Rook).unwrap();
    session.select_square(p(3, 3)).unwrap();

    let before = session.clone();
    assert_eq!(
        session.select_square(p(3, 3)),
        Err(CommandError::SameAsStart(p(3, 3)))
    );
    assert_eq!(session, before);
    assert!(session.begin_search().is_err());
    assert!(session.search().is_none());
}

#[test]
fn test_out_of_bounds_rejected_in_every_phase() {
    let outside = [p(-1, 0), p(0, -1), p(8, 0), p(0, 8), p(100, 100)];
    let mut session = unpaced();

    let check = |session: &mut Session| {
        for &q in &outside {
            let before = session.clone();
            assert!(matches!(
                session.select_square(q),
                Err(CommandError::OutOfBounds { .. })
            ));
            assert_eq!(*session, before);
        }
    };

    check(&mut session);
    session.select_square(p(0, 0)).unwrap();
    check(&mut session);
    session.select_square(p(4, 4)).unwrap();
    check(&mut session);
    session.begin_search().unwrap();
    check(&mut session);
    run_until_settled(&mut session, Duration::from_millis(16));
    check(&mut session);
}

#[test]
fn test_commands_in_wrong_phase_are_ignored() {
    let mut session = unpaced();
    assert!(matches!(
        session.begin_search(),
        Err(CommandError::WrongPhase { .. })
    ));
    assert_eq!(session.phase(), Phase::AwaitingStart);

    ready(&mut session, PieceVariant::Knight, p(0, 0), p(2, 1));
    session.begin_search().unwrap();
    assert!(session.select_piece(PieceVariant::Queen).is_err());
    assert!(session.select_square(p(5, 5)).is_err());
    assert_eq!(session.piece(), PieceVariant::Knight);

    run_until_settled(&mut session, Duration::from_millis(16));
    assert_eq!(session.phase(), Phase::Finished);

    // After a finished run the piece may change, but a new search needs a reset.
    session.select_piece(PieceVariant::Queen).unwrap();
    assert!(session.begin_search().is_err());
    assert_eq!(session.search_piece(), Some(PieceVariant::Knight));

    session.reset();
    ready(&mut session, PieceVariant::Queen, p(0, 0), p(7, 7));
    session.begin_search().unwrap();
    run_until_settled(&mut session, Duration::from_millis(16));
    assert_eq!(session.path().move_count(), 1);
}

#[test]
fn test_revision_moves_only_on_accepted_changes() {
    let mut session = unpaced();
    let r0 = session.revision();

    session.reset();
    assert_eq!(session.revision(), r0);
    let _ = session.select_square(p(9, 9));
    assert_eq!(session.revision(), r0);

    session.select_square(p(1, 1)).unwrap();
    assert!(session.revision() > r0);
}
