//! Initial placement.
//!
//! Greedy dispersion: each slot in turn takes the highest-scoring vertex not
//! already chosen, scored against the positions chosen so far. Ties keep the
//! lowest vertex index. Not globally optimal.

use log::debug;

use crate::board::{Board, Role, VertexId};
use crate::eval::{cop_placement_score, robber_placement_score, ScoringWeights};

/// Chooses initial positions for `k` agents of `role`.
///
/// `cops` holds the cops already on the board and is only read when placing
/// robbers. When `k` reaches the board size every vertex is used in index
/// order, wrapping around, so duplicates appear once `k` exceeds it.
pub fn place(
    board: &Board,
    weights: &ScoringWeights,
    role: Role,
    k: usize,
    cops: &[VertexId],
) -> Vec<VertexId> {
    let positions = match role {
        Role::Cops => place_cops(board, weights, k),
        Role::Robbers => place_robbers(board, weights, k, cops),
    };
    debug!("placed {} {}: {:?}", positions.len(), role, positions);
    positions
}

/// Greedy cop placement.
pub fn place_cops(board: &Board, weights: &ScoringWeights, k: usize) -> Vec<VertexId> {
    let w = &weights.cop_placement;
    greedy(board, k, |v, chosen| cop_placement_score(board, w, v, chosen))
}

/// Greedy robber placement against fixed cop positions.
pub fn place_robbers(
    board: &Board,
    weights: &ScoringWeights,
    k: usize,
    cops: &[VertexId],
) -> Vec<VertexId> {
    let w = &weights.robber_placement;
    greedy(board, k, |v, chosen| {
        robber_placement_score(board, w, v, cops, chosen)
    })
}

/// Picks `k` vertices one at a time, maximizing `score(candidate, chosen)`.
fn greedy<F>(board: &Board, k: usize, score: F) -> Vec<VertexId>
where
    F: Fn(VertexId, &[VertexId]) -> i64,
{
    let size = board.size();
    if size == 0 {
        return Vec::new();
    }
    if k >= size {
        return (0..k).map(|i| i % size).collect();
    }

    let mut selected = vec![false; size];
    let mut chosen: Vec<VertexId> = Vec::with_capacity(k);

    for _ in 0..k {
        let mut best: Option<(VertexId, i64)> = None;
        for v in 0..size {
            if selected[v] {
                continue;
            }
            let s = score(v, &chosen);
            if best.map_or(true, |(_, b)| s > b) {
                best = Some((v, s));
            }
        }
        // k < size, so an unselected vertex always remains.
        if let Some((v, _)) = best {
            selected[v] = true;
            chosen.push(v);
        }
    }

    chosen
}
