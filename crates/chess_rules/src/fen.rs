//! Forsyth-Edwards Notation parsing and printing, used by tests and by
//! the presentation layer to ship positions across its boundary.

use thiserror::Error;

use crate::board::{CastlingRights, Position};
use crate::types::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 whitespace-separated fields, got {0}")]
    MissingFields(usize),
    #[error("board field must have 8 ranks, got {0}")]
    BadRankCount(usize),
    #[error("rank {rank} does not describe exactly 8 files")]
    BadRankWidth { rank: usize },
    #[error("invalid piece character {0:?}")]
    BadPiece(char),
    #[error("invalid side to move {0:?}")]
    BadSideToMove(String),
    #[error("invalid castling character {0:?}")]
    BadCastling(char),
    #[error("invalid en-passant square {0:?}")]
    BadEnPassant(String),
    #[error("invalid move counter {0:?}")]
    BadCounter(String),
}

fn piece_from_char(c: char) -> Option<Piece> {
    let color = if c.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match c.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(Piece::new(color, kind))
}

fn piece_to_char(piece: Piece) -> char {
    let c = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => c.to_ascii_uppercase(),
        Color::Black => c,
    }
}

impl Position {
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(FenError::MissingFields(fields.len()));
        }

        let mut board = [None; 64];
        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::BadRankCount(ranks.len()));
        }
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i as i8; // FEN lists rank 8 first
            let mut file: i8 = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as i8;
                } else {
                    let piece = piece_from_char(c).ok_or(FenError::BadPiece(c))?;
                    let sq = Square::from_file_rank(file, rank)
                        .ok_or(FenError::BadRankWidth { rank: 8 - i })?;
                    board[sq.index()] = Some(piece);
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::BadRankWidth { rank: 8 - i });
                }
            }
            if file != 8 {
                return Err(FenError::BadRankWidth { rank: 8 - i });
            }
        }

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::BadSideToMove(other.to_string())),
        };

        let mut castling = CastlingRights::none();
        if fields[2] != "-" {
            for c in fields[2].chars() {
                match c {
                    'K' => castling.white_kingside = true,
                    'Q' => castling.white_queenside = true,
                    'k' => castling.black_kingside = true,
                    'q' => castling.black_queenside = true,
                    _ => return Err(FenError::BadCastling(c)),
                }
            }
        }

        let en_passant = if fields[3] == "-" {
            None
        } else {
            Some(
                Square::from_coord(fields[3])
                    .ok_or_else(|| FenError::BadEnPassant(fields[3].to_string()))?,
            )
        };

        let parse_counter = |field: Option<&&str>, default: u32| -> Result<u32, FenError> {
            match field {
                None => Ok(default),
                Some(s) => s.parse().map_err(|_| FenError::BadCounter(s.to_string())),
            }
        };
        let halfmove_clock = parse_counter(fields.get(4), 0)?;
        let fullmove_number = parse_counter(fields.get(5), 1)?;

        Ok(Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    pub fn fen(&self) -> String {
        let mut out = String::with_capacity(80);
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                let sq = Square::from_file_rank(file, rank).expect("rank/file in range");
                match self.piece_at(sq) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push(char::from_digit(empty, 10).expect("digit"));
                            empty = 0;
                        }
                        out.push(piece_to_char(piece));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push(char::from_digit(empty, 10).expect("digit"));
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        let rights = [
            (self.castling.white_kingside, 'K'),
            (self.castling.white_queenside, 'Q'),
            (self.castling.black_kingside, 'k'),
            (self.castling.black_queenside, 'q'),
        ];
        if rights.iter().any(|&(held, _)| held) {
            for (held, c) in rights {
                if held {
                    out.push(c);
                }
            }
        } else {
            out.push('-');
        }

        match self.en_passant {
            Some(sq) => {
                out.push(' ');
                out.push_str(&sq.to_string());
            }
            None => out.push_str(" -"),
        }

        out.push_str(&format!(
            " {} {}",
            self.halfmove_clock, self.fullmove_number
        ));
        out
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
