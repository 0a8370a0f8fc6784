//! Vertex desirability scores.
//!
//! Every score maps a candidate vertex plus the relevant agent positions to a
//! signed integer; higher is better for the role being scored. Scores are
//! computed in saturating `i64` arithmetic, so an "infinite" term times any
//! weight pins to the range instead of overflowing.

use crate::board::{Board, VertexId, UNREACHABLE};

use super::weights::{CopPlacementWeights, RobberMovementWeights, RobberPlacementWeights};

/// Stand-in for an infinite distance inside score arithmetic.
pub const INFINITE: i64 = i32::MAX as i64;

/// Converts a table distance to score units, mapping unreachable to
/// [`INFINITE`].
#[inline]
fn score_distance(d: u32) -> i64 {
    if d == UNREACHABLE {
        INFINITE
    } else {
        d as i64
    }
}

/// Smallest distance from `v` to any vertex of `set`, or [`INFINITE`] for an
/// empty set.
pub fn min_distance(board: &Board, v: VertexId, set: &[VertexId]) -> i64 {
    set.iter()
        .map(|&u| score_distance(board.distance(v, u)))
        .min()
        .unwrap_or(INFINITE)
}

/// Integer-truncated mean distance from `v` to every vertex of `set`.
///
/// Returns `None` for an empty set; callers decide what an absent term
/// contributes.
pub fn mean_distance(board: &Board, v: VertexId, set: &[VertexId]) -> Option<i64> {
    if set.is_empty() {
        return None;
    }
    let total = set
        .iter()
        .map(|&u| score_distance(board.distance(v, u)))
        .fold(0i64, i64::saturating_add);
    Some(total / set.len() as i64)
}

/// Mean distance from `v` to every vertex on the board.
pub fn mean_distance_to_board(board: &Board, v: VertexId) -> Option<i64> {
    if board.size() == 0 {
        return None;
    }
    let dist = board.distances();
    let total = (0..board.size())
        .map(|u| score_distance(dist.distance(v, u)))
        .fold(0i64, i64::saturating_add);
    Some(total / board.size() as i64)
}

#[inline]
pub fn degree(board: &Board, v: VertexId) -> i64 {
    board.degree(v) as i64
}

/// `-penalty` if `v` is one of `occupants`, otherwise 0.
#[inline]
pub fn occupancy_penalty(v: VertexId, occupants: &[VertexId], penalty: i64) -> i64 {
    if occupants.contains(&v) {
        penalty.saturating_neg()
    } else {
        0
    }
}

/// `weight * value`, pinned to the `i64` range.
///
/// Weights come from a calibration file and may be arbitrarily large, while
/// values may be [`INFINITE`].
#[inline]
fn term(weight: i64, value: i64) -> i64 {
    weight.saturating_mul(value)
}

/// Saturating sum of weighted terms.
fn combine<const N: usize>(terms: [i64; N]) -> i64 {
    terms.into_iter().fold(0i64, i64::saturating_add)
}

/// Initial cop placement: far from cops already placed, mobile, and central.
pub fn cop_placement_score(
    board: &Board,
    w: &CopPlacementWeights,
    v: VertexId,
    placed_cops: &[VertexId],
) -> i64 {
    combine([
        term(w.dispersion, min_distance(board, v, placed_cops)),
        term(w.mobility, degree(board, v)),
        term(w.centrality, mean_distance_to_board(board, v).unwrap_or(0)).saturating_neg(),
    ])
}

/// Initial robber placement: far from every cop, mobile, and spread out from
/// robbers placed so far. The board-wide term is off unless weighted.
pub fn robber_placement_score(
    board: &Board,
    w: &RobberPlacementWeights,
    v: VertexId,
    cops: &[VertexId],
    placed_robbers: &[VertexId],
) -> i64 {
    combine([
        term(w.nearest_cop, min_distance(board, v, cops)),
        term(w.mobility, degree(board, v)),
        term(w.mean_cop, mean_distance(board, v, cops).unwrap_or(0)),
        term(
            w.robber_dispersion,
            mean_distance(board, v, placed_robbers).unwrap_or(0),
        ),
        term(
            w.board_dispersion,
            mean_distance_to_board(board, v).unwrap_or(0),
        ),
    ])
}

/// Per-turn robber move: the placement terms plus dispersion from the other
/// robbers and a penalty for stacking on one of them.
pub fn robber_movement_score(
    board: &Board,
    w: &RobberMovementWeights,
    v: VertexId,
    cops: &[VertexId],
    other_robbers: &[VertexId],
) -> i64 {
    combine([
        term(w.nearest_cop, min_distance(board, v, cops)),
        term(w.mobility, degree(board, v)),
        term(w.mean_cop, mean_distance(board, v, cops).unwrap_or(0)),
        term(
            w.robber_dispersion,
            mean_distance(board, v, other_robbers).unwrap_or(0),
        ),
        occupancy_penalty(v, other_robbers, w.occupancy_penalty),
    ])
}
