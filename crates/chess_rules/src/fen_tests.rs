use super::*;

#[test]
fn startpos_fen_round_trip() {
    let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    let pos = Position::from_fen(fen).unwrap();
    assert_eq!(pos, Position::startpos());
    assert_eq!(pos.fen(), fen);
}

#[test]
fn kiwipete_round_trip() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    assert_eq!(Position::from_fen(fen).unwrap().fen(), fen);
}

#[test]
fn en_passant_and_counters_round_trip() {
    let fen = "rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 2";
    let pos = Position::from_fen(fen).unwrap();
    assert_eq!(pos.en_passant, Square::from_coord("e3"));
    assert_eq!(pos.fullmove_number, 2);
    assert_eq!(pos.fen(), fen);
}

#[test]
fn counters_default_when_missing() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - -").unwrap();
    assert_eq!(pos.halfmove_clock, 0);
    assert_eq!(pos.fullmove_number, 1);
}

#[test]
fn no_castling_rights_prints_a_dash() {
    let fen = "4k3/8/8/8/8/8/8/4K3 b - - 3 40";
    assert_eq!(Position::from_fen(fen).unwrap().fen(), fen);
}

#[test]
fn rejects_malformed_input() {
    assert_eq!(
        Position::from_fen("4k3/8/8/8"),
        Err(FenError::MissingFields(1))
    );
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/4K3 w - -"),
        Err(FenError::BadRankCount(7))
    );
    assert!(matches!(
        Position::from_fen("4x3/8/8/8/8/8/8/4K3 w - -"),
        Err(FenError::BadPiece('x'))
    ));
    assert!(matches!(
        Position::from_fen("4k3/8/8/8/8/8/8/4K3 z - -"),
        Err(FenError::BadSideToMove(_))
    ));
    assert!(matches!(
        Position::from_fen("4k3/8/8/8/8/8/8/4K3 w X -"),
        Err(FenError::BadCastling('X'))
    ));
    assert!(matches!(
        Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - e9"),
        Err(FenError::BadEnPassant(_))
    ));
    assert!(matches!(
        Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - x 1"),
        Err(FenError::BadCounter(_))
    ));
    assert!(matches!(
        Position::from_fen("9/8/8/8/8/8/8/4K3 w - -"),
        Err(FenError::BadRankWidth { .. })
    ));
}
