//! Robber movement.
//!
//! Each robber is an independent greedy agent: it scores its neighbors and
//! its own vertex, and commits the best one before the next robber moves.

use crate::board::{Board, VertexId};
use crate::eval::{robber_movement_score, ScoringWeights};

/// Moves every robber one step (or not at all), in agent order.
///
/// Candidates are the robber's neighbors in adjacency order followed by its
/// current vertex; the first maximum wins, so staying only wins a tie when
/// nothing else scores as well. Robbers that already moved this turn are
/// seen at their new positions by the ones after them.
pub fn move_robbers(
    board: &Board,
    weights: &ScoringWeights,
    robbers: &mut [VertexId],
    cops: &[VertexId],
) {
    let w = &weights.robber_movement;
    let mut others: Vec<VertexId> = Vec::with_capacity(robbers.len());

    for i in 0..robbers.len() {
        let current = robbers[i];
        others.clear();
        others.extend(
            robbers
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &v)| v),
        );

        let candidates = board
            .neighbors(current)
            .iter()
            .copied()
            .chain(std::iter::once(current));

        let mut best = current;
        let mut best_score = i64::MIN;
        for v in candidates {
            let s = robber_movement_score(board, w, v, cops, &others);
            if s > best_score {
                best_score = s;
                best = v;
            }
        }
        robbers[i] = best;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path5() -> Board {
        Board::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap()
    }

    #[test]
    fn robber_steps_away_from_cop() {
        let board = path5();
        let w = ScoringWeights::default();
        let mut robbers = vec![2];
        move_robbers(&board, &w, &mut robbers, &[0]);
        assert_eq!(robbers, vec![3]);
    }

    #[test]
    fn cornered_robber_stays() {
        let board = path5();
        let w = ScoringWeights::default();
        let mut robbers = vec![4];
        move_robbers(&board, &w, &mut robbers, &[0]);
        assert_eq!(robbers, vec![4]);
    }

    #[test]
    fn moves_are_always_legal() {
        let board = Board::from_edges(
            6,
            &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (0, 3)],
        )
        .unwrap();
        let w = ScoringWeights::default();
        for cop in 0..6 {
            let start: Vec<VertexId> = (0..6).collect();
            let mut robbers = start.clone();
            move_robbers(&board, &w, &mut robbers, &[cop]);
            for (from, to) in start.iter().zip(&robbers) {
                assert!(board.is_valid_move(*from, *to));
            }
        }
    }

    #[test]
    fn isolated_robber_cannot_move() {
        let board = Board::from_edges(3, &[(0, 1)]).unwrap();
        let w = ScoringWeights::default();
        let mut robbers = vec![2];
        move_robbers(&board, &w, &mut robbers, &[0]);
        assert_eq!(robbers, vec![2]);
    }

    #[test]
    fn stacked_robbers_split_up() {
        // Star: hub 0 with leaves 1..=4, cop far away on a tail 5-6 from leaf 1.
        let board = Board::from_edges(
            7,
            &[(0, 1), (0, 2), (0, 3), (0, 4), (1, 5), (5, 6)],
        )
        .unwrap();
        let w = ScoringWeights::default();
        let mut robbers = vec![0, 0];
        move_robbers(&board, &w, &mut robbers, &[6]);
        assert_ne!(robbers[0], robbers[1]);
    }

    #[test]
    fn no_robbers_is_a_no_op() {
        let board = path5();
        let w = ScoringWeights::default();
        let mut robbers: Vec<VertexId> = Vec::new();
        move_robbers(&board, &w, &mut robbers, &[0]);
        assert!(robbers.is_empty());
    }

    #[test]
    fn neighbor_wins_a_tie_with_staying() {
        // No cops and equal degrees: moving and staying score the same.
        let board = Board::from_edges(2, &[(0, 1)]).unwrap();
        let w = ScoringWeights::default();
        let mut robbers = vec![0];
        move_robbers(&board, &w, &mut robbers, &[]);
        assert_eq!(robbers, vec![1]);
    }

    #[test]
    fn first_declared_neighbor_wins_a_tie() {
        // Hub 0 with leaves 1 and 2 and the cop on 3. Both leaves score
        // 5*2 + 2*1 + 2 = 14, above staying at 5*1 + 2*3 + 1 = 12.
        let w = ScoringWeights::default();

        let board = Board::from_edges(4, &[(0, 2), (0, 1), (0, 3)]).unwrap();
        let mut robbers = vec![0];
        move_robbers(&board, &w, &mut robbers, &[3]);
        assert_eq!(robbers, vec![2]);

        let board = Board::from_edges(4, &[(0, 1), (0, 2), (0, 3)]).unwrap();
        let mut robbers = vec![0];
        move_robbers(&board, &w, &mut robbers, &[3]);
        assert_eq!(robbers, vec![1]);
    }
}
