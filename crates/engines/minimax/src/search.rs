//! Exhaustive minimax with alpha-beta pruning over a shared, mutable
//! position. The position is mutated in place during traversal and is
//! bit-identical again by the time any public entry point returns.

use chess_rules::{legal_moves_into, Color, Move, Position, Undo};
use tracing::{debug, trace};

use crate::eval::evaluate;

/// Wider than any reachable score, including the mate sentinel.
pub const INFINITY: i32 = 1_000_000;

/// Scoped make/unmake: applying a move borrows the position, and the
/// matching revert runs when the guard drops. Early returns and
/// pruning breaks cannot leave the position mutated.
struct AppliedMove<'a> {
    pos: &'a mut Position,
    mv: Move,
    undo: Undo,
}

impl<'a> AppliedMove<'a> {
    fn new(pos: &'a mut Position, mv: Move) -> AppliedMove<'a> {
        let undo = pos.make_move(mv);
        AppliedMove { pos, mv, undo }
    }

    fn position(&mut self) -> &mut Position {
        self.pos
    }
}

impl Drop for AppliedMove<'_> {
    fn drop(&mut self) {
        self.pos.unmake_move(self.mv, self.undo);
    }
}

/// Captures before quiet moves. The sort is stable, so enumeration
/// order is preserved within each class and selection stays
/// deterministic. Pure ordering heuristic: it tightens the alpha-beta
/// window sooner without changing the result.
fn order_captures_first(pos: &Position, moves: &mut [Move]) {
    moves.sort_by_key(|&mv| !pos.is_capture(mv));
}

/// Minimax with alpha-beta pruning. `maximizing` nodes pick the child
/// with the highest White-positive score, minimizing nodes the lowest.
/// Bounds travel by value down the recursion; nothing is shared across
/// sibling branches.
pub fn minimax(pos: &mut Position, depth: u8, alpha: i32, beta: i32, maximizing: bool) -> i32 {
    let mut nodes = 0;
    search(pos, depth, alpha, beta, maximizing, &mut nodes)
}

fn search(
    pos: &mut Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);

    // Leaf: out of depth, or the rules engine reports the game over.
    // A node with zero legal moves never recurses into an empty set.
    if depth == 0 || moves.is_empty() || pos.insufficient_material() {
        return evaluate(pos);
    }

    order_captures_first(pos, &mut moves);

    if maximizing {
        let mut best = -INFINITY;
        for mv in moves {
            let score = {
                let mut applied = AppliedMove::new(pos, mv);
                search(applied.position(), depth - 1, alpha, beta, false, nodes)
            };
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break; // the guard has already reverted mv
            }
        }
        best
    } else {
        let mut best = INFINITY;
        for mv in moves {
            let score = {
                let mut applied = AppliedMove::new(pos, mv);
                search(applied.position(), depth - 1, alpha, beta, true, nodes)
            };
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Full search outcome for the side to move, with the score of the
/// chosen line and the node count for statistics.
pub fn pick_best_move(pos: &mut Position, depth: u8) -> Option<(Move, i32)> {
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);
    if moves.is_empty() {
        // Checkmate or stalemate at the root: an expected outcome the
        // caller branches on, not an error.
        return None;
    }
    order_captures_first(pos, &mut moves);

    // White picks the maximal score, Black the minimal one.
    let maximizing = pos.side_to_move == Color::White;
    let mut nodes = 0u64;
    let mut best: Option<(Move, i32)> = None;

    for mv in moves {
        let score = {
            let mut applied = AppliedMove::new(pos, mv);
            search(
                applied.position(),
                depth.saturating_sub(1),
                -INFINITY,
                INFINITY,
                !maximizing,
                &mut nodes,
            )
        };
        trace!(mv = %mv, score, "root move searched");

        // Strict comparison: the first move reaching the extremal score
        // wins, ties never overwrite.
        let improved = match best {
            None => true,
            Some((_, best_score)) => {
                if maximizing {
                    score > best_score
                } else {
                    score < best_score
                }
            }
        };
        if improved {
            best = Some((mv, score));
        }
    }

    if let Some((mv, score)) = best {
        debug!(depth, nodes, best = %mv, score, "search complete");
    }
    best
}

/// The best move for the side to move, or `None` when the game is
/// already over. The position is unchanged after the call.
pub fn select_move(pos: &mut Position, depth: u8) -> Option<Move> {
    pick_best_move(pos, depth).map(|(mv, _)| mv)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
