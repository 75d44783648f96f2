//! Movement rules: one-move destinations for each piece variant.
//!
//! Leapers (Knight, King) use fixed offset tables filtered by the board bounds.
//! Sliders (Rook, Bishop, Queen) walk each ray outward until the next square would
//! leave the board. The board is otherwise empty, so rays are never blocked.
//!
//! The order of the returned squares is part of the contract: the search engine
//! discovers neighbors in exactly this order, which fixes tie-breaking between
//! equally short paths.

use arrayvec::ArrayVec;

use crate::types::{PieceVariant, Position, MAX_BOARD_SIZE, MAX_MOVES};

/// One-move destinations from a square (no allocation).
pub type Moves = ArrayVec<Position, MAX_MOVES>;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ROOK_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const QUEEN_RAYS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Collect the destinations of `piece` standing on `from` into `out`.
///
/// `out` is cleared first. `from` is expected to be on the board; the rule does
/// not validate it. Board sizes above [`MAX_BOARD_SIZE`] are clamped.
pub fn moves_into(piece: PieceVariant, from: Position, board_size: u8, out: &mut Moves) {
    out.clear();
    let size = board_size.min(MAX_BOARD_SIZE);
    match piece {
        PieceVariant::Knight => leaper(from, &KNIGHT_OFFSETS, size, out),
        PieceVariant::King => leaper(from, &KING_OFFSETS, size, out),
        PieceVariant::Rook => slider(from, &ROOK_RAYS, size, out),
        PieceVariant::Bishop => slider(from, &BISHOP_RAYS, size, out),
        PieceVariant::Queen => slider(from, &QUEEN_RAYS, size, out),
    }
}

/// Destinations of `piece` standing on `from`.
pub fn moves(piece: PieceVariant, from: Position, board_size: u8) -> Moves {
    let mut out = Moves::new();
    moves_into(piece, from, board_size, &mut out);
    out
}

/// Whether `piece` can go from `from` to `to` in exactly one move.
pub fn is_legal_move(piece: PieceVariant, from: Position, to: Position, board_size: u8) -> bool {
    moves(piece, from, board_size).contains(&to)
}

fn leaper(from: Position, offsets: &[(i8, i8)], size: u8, out: &mut Moves) {
    for &(dc, dr) in offsets {
        let to = from.offset(dc, dr);
        if to.is_on_board(size) {
            out.push(to);
        }
    }
}

fn slider(from: Position, rays: &[(i8, i8)], size: u8, out: &mut Moves) {
    for &(dc, dr) in rays {
        let mut to = from.offset(dc, dr);
        while to.is_on_board(size) {
            out.push(to);
            to = to.offset(dc, dr);
        }
    }
}
