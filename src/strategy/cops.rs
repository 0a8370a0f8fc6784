//! Cop movement.
//!
//! Cops hunt as a group. Every mobile cop votes for its nearest robber, the
//! most-voted robber becomes the shared target, and each cop then steps along
//! a shortest path towards it while steering clear of vertices already taken
//! by earlier cops this turn.

use log::debug;

use crate::board::{Board, VertexId};
use crate::eval::scoring::mean_distance;

/// Moves every cop with at least one neighbor one step towards the consensus
/// target. Isolated cops keep their vertex.
///
/// Returns the target, or `None` when no cop could move or no robber is
/// left.
pub fn move_cops(board: &Board, cops: &mut [VertexId], robbers: &[VertexId]) -> Option<VertexId> {
    let participants: Vec<usize> = (0..cops.len())
        .filter(|&i| board.degree(cops[i]) > 0)
        .collect();
    let positions: Vec<VertexId> = participants.iter().map(|&i| cops[i]).collect();

    let target = consensus_target(board, &positions, robbers)?;
    debug!("cops converge on robber at {}", target);

    let mut claimed: Vec<VertexId> = Vec::with_capacity(participants.len());
    for &i in &participants {
        let resolved = step_towards(board, cops[i], target, &claimed);
        claimed.push(resolved);
        cops[i] = resolved;
    }

    Some(target)
}

/// Picks the robber most cops are closest to.
///
/// Each cop votes for its nearest robber (first one scanned wins a distance
/// tie). Robbers sharing a vertex pool their votes. A tie on votes goes to the
/// robber with the lowest mean distance to the voting cops, then to the one
/// voted for first.
pub fn consensus_target(
    board: &Board,
    cops: &[VertexId],
    robbers: &[VertexId],
) -> Option<VertexId> {
    let mut tally: Vec<(VertexId, usize)> = Vec::new();

    for &cop in cops {
        let Some(nearest) = nearest_robber(board, cop, robbers) else {
            continue;
        };
        match tally.iter_mut().find(|(v, _)| *v == nearest) {
            Some((_, votes)) => *votes += 1,
            None => tally.push((nearest, 1)),
        }
    }

    let mut best: Option<(VertexId, usize, i64)> = None;
    for &(robber, votes) in &tally {
        let spread = mean_distance(board, robber, cops).unwrap_or(0);
        let better = match best {
            None => true,
            Some((_, best_votes, best_spread)) => {
                votes > best_votes || (votes == best_votes && spread < best_spread)
            }
        };
        if better {
            best = Some((robber, votes, spread));
        }
    }

    best.map(|(robber, _, _)| robber)
}

/// The robber closest to `cop`, first in scan order on ties.
fn nearest_robber(board: &Board, cop: VertexId, robbers: &[VertexId]) -> Option<VertexId> {
    let mut best: Option<(VertexId, u32)> = None;
    for &robber in robbers {
        let d = board.distance(cop, robber);
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((robber, d));
        }
    }
    best.map(|(robber, _)| robber)
}

/// One step from `from` towards `target`, avoiding `claimed` where possible.
///
/// The shortest-path next hop is used unless an earlier cop already claimed
/// it. A cop whose only neighbor is that hop collides anyway. Otherwise the
/// unclaimed neighbor or current vertex nearest to the target is taken, and
/// the cop stays put when all of them are claimed.
fn step_towards(
    board: &Board,
    from: VertexId,
    target: VertexId,
    claimed: &[VertexId],
) -> VertexId {
    let hop = board.next_hop(from, target).unwrap_or(from);
    if !claimed.contains(&hop) || board.degree(from) <= 1 {
        return hop;
    }

    let mut best: Option<(VertexId, u32)> = None;
    for v in board
        .neighbors(from)
        .iter()
        .copied()
        .chain(std::iter::once(from))
    {
        if claimed.contains(&v) {
            continue;
        }
        let d = board.distance(v, target);
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((v, d));
        }
    }

    best.map_or(from, |(v, _)| v)
}
