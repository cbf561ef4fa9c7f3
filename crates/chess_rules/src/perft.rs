use crate::board::Position;
use crate::movegen::legal_moves_into;
use crate::types::Move;

/// Pure perft node count: the number of leaf positions reachable in
/// exactly `depth` plies. Used to validate move generation and the
/// make/unmake pairing against known reference counts.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    fn walk(pos: &mut Position, depth: u8, buffers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }
        let (moves, deeper) = buffers
            .split_first_mut()
            .expect("one move buffer per remaining ply");
        legal_moves_into(pos, moves);

        let mut nodes = 0;
        for i in 0..moves.len() {
            let mv = moves[i];
            let undo = pos.make_move(mv);
            nodes += walk(pos, depth - 1, deeper);
            pos.unmake_move(mv, undo);
        }
        nodes
    }

    let mut buffers = vec![Vec::with_capacity(64); depth as usize];
    walk(pos, depth, &mut buffers)
}
