//! Minimax Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a material plus
//! piece-square evaluation, together with the paired undo/redo history
//! the embedding application drives between searches.
//!
//! The engine never reimplements chess legality: it consumes the
//! `chess_rules` crate's narrow surface (enumerate legal moves, apply a
//! move, revert the most recent apply, query terminal status) and
//! searches by mutating one shared position in place, restoring it
//! bit for bit before returning.
//!
//! Deliberately absent: transposition tables, iterative deepening,
//! quiescence search, opening books, time-based cutoffs, and parallel
//! search. Depth is small (1-4 plies) and the search is synchronous
//! and single-threaded.

pub mod config;
pub mod eval;
pub mod history;
pub mod psq;
pub mod search;

pub use config::{ConfigError, EngineConfig};
pub use eval::{evaluate, MATE_SCORE};
pub use history::HistoryManager;
pub use search::{minimax, pick_best_move, select_move, INFINITY};
