use chess_bfs::trace::{parse_trace_args, run_trace, trace_events, TraceConfig, TraceEvent};
use chess_bfs::types::{PieceVariant, Position};
use serde_json::Value;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn knight_corner() -> TraceConfig {
    TraceConfig {
        piece: PieceVariant::Knight,
        start: Position::new(0, 0),
        goal: Position::new(7, 7),
        board_size: 8,
    }
}

#[test]
fn trace_args_are_ignored_for_other_modes() {
    assert_eq!(parse_trace_args(&[]).unwrap(), None);
    assert_eq!(parse_trace_args(&args(&["observe"])).unwrap(), None);
}

#[test]
fn trace_args_parse_piece_and_squares() {
    let config = parse_trace_args(&args(&["trace", "knight", "0,0", "7,7"]))
        .unwrap()
        .unwrap();
    assert_eq!(config, knight_corner());

    let config = parse_trace_args(&args(&["trace", "--size", "5", "B", "0,0", "4,4"]))
        .unwrap()
        .unwrap();
    assert_eq!(config.piece, PieceVariant::Bishop);
    assert_eq!(config.board_size, 5);
}

#[test]
fn trace_args_reject_bad_input() {
    for bad in [
        &["trace"][..],
        &["trace", "knight", "0,0"],
        &["trace", "pawn", "0,0", "1,1"],
        &["trace", "king", "0;0", "1,1"],
        &["trace", "--size", "0", "king", "0,0", "1,1"],
        &["trace", "--size"],
        &["trace", "--fast", "king", "0,0", "1,1"],
    ] {
        assert!(parse_trace_args(&args(bad)).is_err(), "{:?}", bad);
    }
}

#[test]
fn trace_ends_with_result_line() {
    let events = trace_events(&knight_corner()).unwrap();
    assert!(matches!(
        events[events.len() - 2],
        TraceEvent::GoalReached { .. }
    ));
    match events.last().unwrap() {
        TraceEvent::Result {
            found, moves, path, ..
        } => {
            assert!(*found);
            assert_eq!(*moves, Some(6));
            assert_eq!(path.len(), 7);
        }
        other => panic!("unexpected last event: {:?}", other),
    }
}

#[test]
fn trace_reports_unreachable_goal() {
    let config = TraceConfig {
        piece: PieceVariant::Bishop,
        start: Position::new(0, 0),
        goal: Position::new(0, 1),
        board_size: 8,
    };
    let events = trace_events(&config).unwrap();
    assert!(matches!(
        events[events.len() - 2],
        TraceEvent::NoPath { visited: 32, .. }
    ));
    assert!(matches!(
        events.last(),
        Some(TraceEvent::Result {
            found: false,
            moves: None,
            ..
        })
    ));
}

#[test]
fn trace_rejects_identical_endpoints() {
    let mut config = knight_corner();
    config.goal = config.start;
    assert!(trace_events(&config).is_err());
}

#[test]
fn trace_writes_one_json_object_per_line() {
    let mut out = Vec::new();
    run_trace(&knight_corner(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let lines: Vec<Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let first = &lines[0];
    assert_eq!(first["event"], "expanded");
    assert_eq!(first["step"], 1);
    assert_eq!(first["square"]["col"], 0);
    // From a corner the knight has exactly two moves.
    assert_eq!(first["discovered"].as_array().unwrap().len(), 2);

    let last = lines.last().unwrap();
    assert_eq!(last["event"], "result");
    assert_eq!(last["piece"], "knight");
    assert_eq!(last["moves"], 6);
    assert_eq!(last["path"][0]["row"], 0);
    assert_eq!(last["path"][6]["col"], 7);
}
