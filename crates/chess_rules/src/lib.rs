//! Chess rules engine: board state, legal move generation, and exact
//! make/unmake primitives.
//!
//! The crate owns everything that decides what is *allowed* on the board.
//! Engine crates consume it through a narrow surface: enumerate legal
//! moves, apply a move, revert the most recent apply, and query terminal
//! status. Search code never reimplements legality.

pub mod board;
pub mod fen;
pub mod movegen;
pub mod perft;
pub mod types;

pub use board::{CastlingRights, Position, Undo};
pub use fen::FenError;
pub use movegen::{legal_moves, legal_moves_into, Outcome};
pub use perft::perft;
pub use types::{Color, Move, MoveKind, Piece, PieceKind, Square};
