use crate::movegen::{BISHOP_DIRECTIONS, KING_DELTAS, KNIGHT_DELTAS, ROOK_DIRECTIONS};
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub fn all() -> CastlingRights {
        CastlingRights {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    pub fn none() -> CastlingRights {
        CastlingRights {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }
}

/// Full game state. `PartialEq` compares every field, which is what the
/// make/unmake invariant is asserted against: one `unmake_move` per
/// `make_move` restores the position bit for bit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// Opaque token returned by `make_move`, consumed by `unmake_move`.
/// Snapshots everything a move can clobber besides the squares the
/// move itself names.
#[derive(Clone, Copy, Debug)]
pub struct Undo {
    captured: Option<Piece>,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

/// Rook shuffle for a castling king landing on `king_to`.
fn castle_rook_squares(king_to: Square) -> (Square, Square) {
    match king_to {
        Square::G1 => (Square::H1, Square::F1),
        Square::C1 => (Square::A1, Square::D1),
        Square::G8 => (Square::H8, Square::F8),
        Square::C8 => (Square::A8, Square::D8),
        _ => unreachable!("castle move to a non-castling square"),
    }
}

/// Square of the pawn removed by an en-passant capture landing on `to`.
fn en_passant_victim(to: Square, mover: Color) -> Square {
    to.offset(0, -mover.pawn_direction())
        .expect("en-passant target on a back rank")
}

fn clear_rook_rights(castling: &mut CastlingRights, sq: Square) {
    match sq {
        Square::A1 => castling.white_queenside = false,
        Square::H1 => castling.white_kingside = false,
        Square::A8 => castling.black_queenside = false,
        Square::H8 => castling.black_kingside = false,
        _ => {}
    }
}

impl Position {
    pub fn startpos() -> Position {
        let mut pos = Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        };

        for file in 0..8 {
            pos.board[8 + file] = Some(Piece::new(Color::White, PieceKind::Pawn));
            pos.board[48 + file] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back_rank.iter().enumerate() {
            pos.board[file] = Some(Piece::new(Color::White, kind));
            pos.board[56 + file] = Some(Piece::new(Color::Black, kind));
        }
        pos
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index()]
    }

    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.board[sq.index()] = piece;
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some(Piece::new(color, PieceKind::King)))
    }

    pub fn in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_square_attacked(king, color.opponent()),
            None => false,
        }
    }

    /// Whether `mv` takes an opposing piece. Movegen never targets own
    /// pieces, so an occupied destination is always a capture.
    pub fn is_capture(&self, mv: Move) -> bool {
        mv.kind == MoveKind::EnPassant || self.piece_at(mv.to).is_some()
    }

    /// Scans outward from `target`: cheaper than generating the
    /// attacker's moves, and independent of whose turn it is.
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        // Pawns attack diagonally toward the enemy side, so look one
        // rank back toward the attacker.
        let back = -by.pawn_direction();
        for dfile in [-1, 1] {
            if let Some(sq) = target.offset(dfile, back) {
                if self.piece_at(sq) == Some(Piece::new(by, PieceKind::Pawn)) {
                    return true;
                }
            }
        }

        for (dfile, drank) in KNIGHT_DELTAS {
            if let Some(sq) = target.offset(dfile, drank) {
                if self.piece_at(sq) == Some(Piece::new(by, PieceKind::Knight)) {
                    return true;
                }
            }
        }

        for (dfile, drank) in KING_DELTAS {
            if let Some(sq) = target.offset(dfile, drank) {
                if self.piece_at(sq) == Some(Piece::new(by, PieceKind::King)) {
                    return true;
                }
            }
        }

        let slider = |directions: [(i8, i8); 4], kind: PieceKind| -> bool {
            for (dfile, drank) in directions {
                let mut sq = target.offset(dfile, drank);
                while let Some(s) = sq {
                    if let Some(piece) = self.piece_at(s) {
                        if piece.color == by
                            && (piece.kind == kind || piece.kind == PieceKind::Queen)
                        {
                            return true;
                        }
                        break;
                    }
                    sq = s.offset(dfile, drank);
                }
            }
            false
        };
        slider(BISHOP_DIRECTIONS, PieceKind::Bishop) || slider(ROOK_DIRECTIONS, PieceKind::Rook)
    }

    /// Applies `mv` and returns the token needed to revert it.
    /// Callers must pair every `make_move` with exactly one
    /// `unmake_move` on every exit path.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let mover = self.side_to_move;
        let moved = self
            .piece_at(mv.from)
            .expect("make_move on an empty from-square");
        debug_assert_eq!(moved.color, mover);

        let captured = match mv.kind {
            MoveKind::EnPassant => {
                let victim = en_passant_victim(mv.to, mover);
                let piece = self.piece_at(victim);
                self.set_piece(victim, None);
                piece
            }
            _ => self.piece_at(mv.to),
        };

        let undo = Undo {
            captured,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        };

        self.en_passant = None;
        self.set_piece(mv.from, None);
        match mv.kind {
            MoveKind::Promotion(kind) => self.set_piece(mv.to, Some(Piece::new(mover, kind))),
            _ => self.set_piece(mv.to, Some(moved)),
        }

        match mv.kind {
            MoveKind::DoublePush => {
                self.en_passant = mv.from.offset(0, mover.pawn_direction());
            }
            MoveKind::Castle => {
                let (rook_from, rook_to) = castle_rook_squares(mv.to);
                let rook = self.piece_at(rook_from);
                debug_assert!(rook.is_some(), "castling without a rook");
                self.set_piece(rook_from, None);
                self.set_piece(rook_to, rook);
            }
            _ => {}
        }

        // Rights lapse when the king or a rook leaves its home square,
        // or when a rook is captured on one.
        if moved.kind == PieceKind::King {
            match mover {
                Color::White => {
                    self.castling.white_kingside = false;
                    self.castling.white_queenside = false;
                }
                Color::Black => {
                    self.castling.black_kingside = false;
                    self.castling.black_queenside = false;
                }
            }
        }
        if moved.kind == PieceKind::Rook {
            clear_rook_rights(&mut self.castling, mv.from);
        }
        if mv.kind != MoveKind::EnPassant {
            if let Some(piece) = captured {
                if piece.kind == PieceKind::Rook {
                    clear_rook_rights(&mut self.castling, mv.to);
                }
            }
        }

        if moved.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if mover == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = mover.opponent();

        undo
    }

    /// Reverts the most recent `make_move` that produced `undo`.
    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.opponent();
        let mover = self.side_to_move;
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        // Put the mover back, demoting a promoted pawn.
        let restored = match mv.kind {
            MoveKind::Promotion(_) => Piece::new(mover, PieceKind::Pawn),
            _ => self
                .piece_at(mv.to)
                .expect("unmake_move with an empty to-square"),
        };
        self.set_piece(mv.from, Some(restored));

        match mv.kind {
            MoveKind::EnPassant => {
                self.set_piece(mv.to, None);
                self.set_piece(en_passant_victim(mv.to, mover), undo.captured);
            }
            MoveKind::Castle => {
                self.set_piece(mv.to, None);
                let (rook_from, rook_to) = castle_rook_squares(mv.to);
                let rook = self.piece_at(rook_to);
                self.set_piece(rook_to, None);
                self.set_piece(rook_from, rook);
            }
            _ => self.set_piece(mv.to, undo.captured),
        }
    }

    /// Dead-material draw: no pawns, rooks, or queens, and the minor
    /// pieces left cannot force mate (lone minor, or bishops all on
    /// squares of one color).
    pub fn insufficient_material(&self) -> bool {
        let mut minors = 0;
        let mut knights = 0;
        let mut bishop_shade: Option<i8> = None;
        let mut bishops_one_shade = true;

        for sq in Square::all() {
            let piece = match self.piece_at(sq) {
                Some(p) => p,
                None => continue,
            };
            match piece.kind {
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
                PieceKind::King => {}
                PieceKind::Knight => {
                    minors += 1;
                    knights += 1;
                }
                PieceKind::Bishop => {
                    minors += 1;
                    let shade = (sq.file() + sq.rank()) % 2;
                    match bishop_shade {
                        None => bishop_shade = Some(shade),
                        Some(s) if s != shade => bishops_one_shade = false,
                        Some(_) => {}
                    }
                }
            }
        }

        if minors <= 1 {
            return true;
        }
        knights == 0 && bishops_one_shade
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
