use crate::board::Position;
use crate::types::*;

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Terminal status of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The named color delivered mate.
    Checkmate(Color),
    Stalemate,
    InsufficientMaterial,
}

/// Generate all legal moves, returning a freshly allocated vector.
/// Delegates to `legal_moves_into`, cloning the position only once.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut scratch = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut scratch, &mut out);
    out
}

/// Generate all legal moves into `out`, reusing the buffer across calls.
/// The position is mutated transiently while filtering out moves that
/// leave the mover in check, and restored before returning.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let legal = !pos.in_check(mover);
        pos.unmake_move(mv, undo);
        legal
    });
}

impl Position {
    /// Terminal status, `None` while the game is still live.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.insufficient_material() {
            return Some(Outcome::InsufficientMaterial);
        }
        if !legal_moves(self).is_empty() {
            return None;
        }
        if self.in_check(self.side_to_move) {
            Some(Outcome::Checkmate(self.side_to_move.opponent()))
        } else {
            Some(Outcome::Stalemate)
        }
    }

    pub fn is_checkmate(&self) -> bool {
        matches!(self.outcome(), Some(Outcome::Checkmate(_)))
    }

    pub fn is_stalemate_or_insufficient(&self) -> bool {
        matches!(
            self.outcome(),
            Some(Outcome::Stalemate) | Some(Outcome::InsufficientMaterial)
        )
    }
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    for from in Square::all() {
        let piece = match pos.piece_at(from) {
            Some(p) => p,
            None => continue,
        };
        if piece.color != pos.side_to_move {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => pawn_moves(pos, from, piece.color, out),
            PieceKind::Knight => leaper_moves(pos, from, piece.color, &KNIGHT_DELTAS, out),
            PieceKind::Bishop => slider_moves(pos, from, piece.color, &BISHOP_DIRECTIONS, out),
            PieceKind::Rook => slider_moves(pos, from, piece.color, &ROOK_DIRECTIONS, out),
            PieceKind::Queen => {
                slider_moves(pos, from, piece.color, &BISHOP_DIRECTIONS, out);
                slider_moves(pos, from, piece.color, &ROOK_DIRECTIONS, out);
            }
            PieceKind::King => {
                leaper_moves(pos, from, piece.color, &KING_DELTAS, out);
                castle_moves(pos, from, piece.color, out);
            }
        }
    }
}

fn push_pawn_move(from: Square, to: Square, color: Color, out: &mut Vec<Move>) {
    let promotion_rank = match color {
        Color::White => 7,
        Color::Black => 0,
    };
    if to.rank() == promotion_rank {
        for kind in PROMOTION_KINDS {
            out.push(Move::with_kind(from, to, MoveKind::Promotion(kind)));
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn pawn_moves(pos: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    let dir = color.pawn_direction();
    let start_rank = match color {
        Color::White => 1,
        Color::Black => 6,
    };

    // Single and double advances.
    if let Some(to) = from.offset(0, dir) {
        if pos.piece_at(to).is_none() {
            push_pawn_move(from, to, color, out);
            if from.rank() == start_rank {
                if let Some(two) = from.offset(0, 2 * dir) {
                    if pos.piece_at(two).is_none() {
                        out.push(Move::with_kind(from, two, MoveKind::DoublePush));
                    }
                }
            }
        }
    }

    // Diagonal captures and en passant.
    for dfile in [-1, 1] {
        let to = match from.offset(dfile, dir) {
            Some(sq) => sq,
            None => continue,
        };
        match pos.piece_at(to) {
            Some(target) if target.color != color => push_pawn_move(from, to, color, out),
            Some(_) => {}
            None => {
                if pos.en_passant == Some(to) {
                    out.push(Move::with_kind(from, to, MoveKind::EnPassant));
                }
            }
        }
    }
}

fn leaper_moves(
    pos: &Position,
    from: Square,
    color: Color,
    deltas: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(dfile, drank) in deltas {
        if let Some(to) = from.offset(dfile, drank) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(piece) if piece.color != color => out.push(Move::new(from, to)),
                Some(_) => {}
            }
        }
    }
}

fn slider_moves(
    pos: &Position,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(dfile, drank) in directions {
        let mut next = from.offset(dfile, drank);
        while let Some(to) = next {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(piece) => {
                    if piece.color != color {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
            next = to.offset(dfile, drank);
        }
    }
}

fn castle_moves(pos: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    let (home, kingside, queenside) = match color {
        Color::White => (
            Square::E1,
            pos.castling.white_kingside,
            pos.castling.white_queenside,
        ),
        Color::Black => (
            Square::E8,
            pos.castling.black_kingside,
            pos.castling.black_queenside,
        ),
    };
    if from != home || pos.in_check(color) {
        return;
    }

    let enemy = color.opponent();
    let rank = home.rank();
    let at = |file: i8| Square::from_file_rank(file, rank).expect("castling rank square");

    // King side: f and g empty, neither attacked.
    if kingside
        && pos.piece_at(at(5)).is_none()
        && pos.piece_at(at(6)).is_none()
        && !pos.is_square_attacked(at(5), enemy)
        && !pos.is_square_attacked(at(6), enemy)
    {
        out.push(Move::with_kind(from, at(6), MoveKind::Castle));
    }

    // Queen side: b, c, d empty; c and d not attacked.
    if queenside
        && pos.piece_at(at(1)).is_none()
        && pos.piece_at(at(2)).is_none()
        && pos.piece_at(at(3)).is_none()
        && !pos.is_square_attacked(at(2), enemy)
        && !pos.is_square_attacked(at(3), enemy)
    {
        out.push(Move::with_kind(from, at(2), MoveKind::Castle));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
