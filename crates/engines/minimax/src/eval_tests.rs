use super::*;
use chess_rules::{CastlingRights, Piece, PieceKind};

fn from_fen(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

/// Recolor every piece and mirror it across the horizontal midline,
/// swapping side to move and castling rights.
fn color_flipped(pos: &Position) -> Position {
    let mut flipped = Position {
        board: [None; 64],
        side_to_move: pos.side_to_move.opponent(),
        castling: CastlingRights {
            white_kingside: pos.castling.black_kingside,
            white_queenside: pos.castling.black_queenside,
            black_kingside: pos.castling.white_kingside,
            black_queenside: pos.castling.white_queenside,
        },
        en_passant: pos.en_passant.map(|sq| sq.mirror()),
        halfmove_clock: pos.halfmove_clock,
        fullmove_number: pos.fullmove_number,
    };
    for sq in Square::all() {
        if let Some(piece) = pos.piece_at(sq) {
            flipped.set_piece(
                sq.mirror(),
                Some(Piece::new(piece.color.opponent(), piece.kind)),
            );
        }
    }
    flipped
}

#[test]
fn startpos_is_balanced() {
    assert_eq!(evaluate(&Position::startpos()), 0);
}

#[test]
fn extra_rook_scores_its_material_plus_placement() {
    // Lone white rook on a1: 500 material, no placement bonus there,
    // and the kings on e1/e8 cancel through the mirror.
    let pos = from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    assert_eq!(evaluate(&pos), 500);
}

#[test]
fn black_reads_tables_through_the_mirror() {
    // e4 and e5 pawns sit on mirrored squares: dead even.
    let pos = from_fen("4k3/8/8/4p3/4P3/8/8/4K3 w - - 0 1");
    assert_eq!(evaluate(&pos), 0);
}

#[test]
fn checkmate_scores_the_sentinel_for_the_winner() {
    // White mates Black on the back rank.
    let white_mates = from_fen("R5k1/8/6K1/8/8/8/8/8 b - - 0 1");
    assert_eq!(evaluate(&white_mates), MATE_SCORE);

    // The color-flipped board is mate by Black.
    let black_mates = color_flipped(&white_mates);
    assert_eq!(evaluate(&black_mates), -MATE_SCORE);
}

#[test]
fn stalemate_and_dead_material_score_zero() {
    let stalemate = from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert_eq!(evaluate(&stalemate), 0);

    let bare_kings = from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(evaluate(&bare_kings), 0);
}

#[test]
fn evaluation_is_antisymmetric_under_color_flip() {
    let fens = [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "1n5k/8/8/8/8/8/8/R6K b - - 0 1",
        "4k3/8/3q4/8/8/2B5/8/4K3 w - - 0 1",
    ];
    for fen in fens {
        let pos = from_fen(fen);
        let flipped = color_flipped(&pos);
        assert_eq!(
            evaluate(&pos),
            -evaluate(&flipped),
            "symmetry broken for {fen}"
        );
    }
}

#[test]
fn evaluation_is_deterministic_and_pure() {
    let pos = from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let before = pos.clone();
    let first = evaluate(&pos);
    assert_eq!(evaluate(&pos), first);
    assert_eq!(pos, before);
}
