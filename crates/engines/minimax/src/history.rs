//! Played-move bookkeeping with paired undo/redo.
//!
//! Moves are committed one at a time but taken back and replayed in
//! matched pairs (one human move plus one engine reply), so whose turn
//! it is never changes across an undo or redo. The manager shares the
//! rules engine's apply/revert primitive with the search; it runs only
//! between searches, never during one.

use chess_rules::{Move, Position, Undo};
use tracing::trace;

/// A committed move together with the token needed to revert it.
#[derive(Clone, Copy, Debug)]
struct PlayedMove {
    mv: Move,
    undo: Undo,
}

/// Chronological record of the game plus a redo buffer.
///
/// Invariants:
/// - replaying `moves()` from the initial position reproduces the live
///   position exactly;
/// - the redo buffer is non-empty only directly after one or more
///   undos, and any new commit clears it.
#[derive(Debug, Default)]
pub struct HistoryManager {
    played: Vec<PlayedMove>,
    redo: Vec<Move>,
}

impl HistoryManager {
    pub fn new() -> HistoryManager {
        HistoryManager::default()
    }

    /// Applies `mv` to the position and records it. Any previously
    /// undone future is invalidated.
    pub fn commit(&mut self, pos: &mut Position, mv: Move) {
        let undo = pos.make_move(mv);
        self.played.push(PlayedMove { mv, undo });
        self.redo.clear();
    }

    /// Takes back the last two moves, restoring them to the redo
    /// buffer in the order a later `redo` will replay them. With fewer
    /// than two moves played this is a no-op returning `false`.
    pub fn undo(&mut self, pos: &mut Position) -> bool {
        if self.played.len() < 2 {
            trace!("nothing to undo");
            return false;
        }
        for _ in 0..2 {
            let last = self.played.pop().expect("length checked above");
            pos.unmake_move(last.mv, last.undo);
            self.redo.push(last.mv);
        }
        true
    }

    /// Replays the last undone pair in chronological order. With fewer
    /// than two undone moves this is a no-op returning `false`.
    pub fn redo(&mut self, pos: &mut Position) -> bool {
        if self.redo.len() < 2 {
            trace!("nothing to redo");
            return false;
        }
        for _ in 0..2 {
            let mv = self.redo.pop().expect("length checked above");
            let undo = pos.make_move(mv);
            self.played.push(PlayedMove { mv, undo });
        }
        true
    }

    /// The committed moves in the order they were played.
    pub fn moves(&self) -> Vec<Move> {
        self.played.iter().map(|p| p.mv).collect()
    }

    pub fn len(&self) -> usize {
        self.played.len()
    }

    pub fn is_empty(&self) -> bool {
        self.played.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.played.len() >= 2
    }

    pub fn can_redo(&self) -> bool {
        self.redo.len() >= 2
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod history_tests;
