use chess_rules::{Color, Outcome, Position, Square};

use crate::psq::{PIECE_SQUARE_TABLES, PIECE_VALUES};

/// Sentinel magnitude for a delivered mate. Must dominate any sum of
/// material and positional bonuses so a forced mate always outweighs
/// any non-mating line.
pub const MATE_SCORE: i32 = 99_999;

/// Static evaluation in centipawns, White-positive: positive favors
/// White, negative favors Black.
///
/// Terminal positions short-circuit: a checkmated side scores the mate
/// sentinel against it, stalemate and dead material score an even 0.
/// Otherwise the score is the material plus piece-square sum over every
/// occupied square, with Black reading the tables rank-mirrored.
pub fn evaluate(pos: &Position) -> i32 {
    match pos.outcome() {
        Some(Outcome::Checkmate(winner)) => match winner {
            Color::White => MATE_SCORE,
            Color::Black => -MATE_SCORE,
        },
        Some(Outcome::Stalemate) | Some(Outcome::InsufficientMaterial) => 0,
        None => material_and_placement(pos),
    }
}

fn material_and_placement(pos: &Position) -> i32 {
    let mut score = 0;
    for sq in Square::all() {
        let piece = match pos.piece_at(sq) {
            Some(p) => p,
            None => continue,
        };
        let table_sq = match piece.color {
            Color::White => sq,
            Color::Black => sq.mirror(),
        };
        let kind = piece.kind.index();
        let value = PIECE_VALUES[kind] + PIECE_SQUARE_TABLES[kind][table_sq.index()];
        score += match piece.color {
            Color::White => value,
            Color::Black => -value,
        };
    }
    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
