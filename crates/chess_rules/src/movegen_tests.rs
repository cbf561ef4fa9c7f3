use super::*;
use crate::perft::perft;
use rayon::prelude::*;

fn from_fen(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

#[test]
fn startpos_has_twenty_moves() {
    let pos = Position::startpos();
    assert_eq!(legal_moves(&pos).len(), 20);
}

#[test]
fn kiwipete_has_forty_eight_moves() {
    let pos = from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    assert_eq!(legal_moves(&pos).len(), 48);
}

#[test]
fn moves_never_leave_own_king_in_check() {
    // White king pinned scenarios: the e-file rook pins the knight.
    let pos = from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
    let moves = legal_moves(&pos);
    assert!(moves
        .iter()
        .all(|mv| mv.from != Square::from_coord("e2").unwrap()));
}

#[test]
fn no_castling_through_check() {
    // Black rook on f8 covers f1.
    let pos = from_fen("4kr2/8/8/8/8/8/8/4K2R w K - 0 1");
    let moves = legal_moves(&pos);
    assert!(!moves.iter().any(|mv| mv.kind == MoveKind::Castle));
}

#[test]
fn no_castling_out_of_check() {
    let pos = from_fen("4k3/8/8/8/8/8/4r3/4K2R w K - 0 1");
    let moves = legal_moves(&pos);
    assert!(!moves.iter().any(|mv| mv.kind == MoveKind::Castle));
}

#[test]
fn castling_generated_when_legal() {
    let pos = from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let castles: Vec<Move> = legal_moves(&pos)
        .into_iter()
        .filter(|mv| mv.kind == MoveKind::Castle)
        .collect();
    assert_eq!(castles.len(), 2);
}

#[test]
fn promotions_generate_all_four_pieces() {
    let pos = from_fen("8/P7/8/8/8/8/k1K5/8 w - - 0 1");
    let promotions: Vec<Move> = legal_moves(&pos)
        .into_iter()
        .filter(|mv| matches!(mv.kind, MoveKind::Promotion(_)))
        .collect();
    assert_eq!(promotions.len(), 4);
}

#[test]
fn checkmate_outcome_names_the_winner() {
    let pos = from_fen("R5k1/8/6K1/8/8/8/8/8 b - - 0 1");
    assert_eq!(pos.outcome(), Some(Outcome::Checkmate(Color::White)));
    assert!(pos.is_checkmate());
    assert!(!pos.is_stalemate_or_insufficient());
}

#[test]
fn stalemate_outcome() {
    // Black king in the corner, no moves, not in check.
    let pos = from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(legal_moves(&pos).is_empty());
    assert_eq!(pos.outcome(), Some(Outcome::Stalemate));
    assert!(pos.is_stalemate_or_insufficient());
    assert!(!pos.is_checkmate());
}

#[test]
fn bare_kings_are_a_draw() {
    let pos = from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(pos.outcome(), Some(Outcome::InsufficientMaterial));
}

#[test]
fn live_position_has_no_outcome() {
    assert_eq!(Position::startpos().outcome(), None);
}

#[test]
fn legal_moves_into_reuses_buffer_and_restores_position() {
    let reference = Position::startpos();
    let mut pos = reference.clone();
    let mut buf = Vec::new();
    legal_moves_into(&mut pos, &mut buf);
    assert_eq!(buf.len(), 20);
    assert_eq!(pos, reference);
    legal_moves_into(&mut pos, &mut buf);
    assert_eq!(buf.len(), 20);
}

#[test]
fn perft_startpos_shallow() {
    let mut pos = Position::startpos();
    assert_eq!(perft(&mut pos, 1), 20);
    assert_eq!(perft(&mut pos, 2), 400);
    assert_eq!(perft(&mut pos, 3), 8_902);
    // The walk must leave the position untouched.
    assert_eq!(pos, Position::startpos());
}

#[test]
fn perft_kiwipete_shallow() {
    let mut pos = from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    assert_eq!(perft(&mut pos, 1), 48);
    assert_eq!(perft(&mut pos, 2), 2_039);
    assert_eq!(perft(&mut pos, 3), 97_862);
}

#[test]
fn perft_startpos_depth_four_split_over_root_moves() {
    let pos = Position::startpos();
    let total: u64 = legal_moves(&pos)
        .into_par_iter()
        .map(|mv| {
            let mut child = pos.clone();
            child.make_move(mv);
            perft(&mut child, 3)
        })
        .sum();
    assert_eq!(total, 197_281);
}
