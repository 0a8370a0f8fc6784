//! Engine-versus-engine matches.
//!
//! Drives two [`Game`] instances, one per role, feeding each side's output to
//! the other exactly as the line protocol would. Records every turn and the
//! result, and checks after each turn that both sides see the same board.

use std::io::Write;

use log::info;

use crate::board::{Role, VertexId};
use crate::eval::ScoringWeights;
use crate::game::{Game, GameError, Outcome, Phase};
use crate::protocol::BoardDescriptor;

/// Configuration for a batch of matches.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Worker threads; 1 plays the boards sequentially.
    pub threads: usize,
    pub weights: ScoringWeights,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            threads: 4,
            weights: ScoringWeights::default(),
        }
    }
}

/// Errors raised while playing matches.
#[derive(Debug, thiserror::Error)]
pub enum SelfPlayError {
    #[error("board '{board}': {source}")]
    Game {
        board: String,
        #[source]
        source: GameError,
    },

    #[error("board '{board}': sides disagree after turn {turn}")]
    Diverged { board: String, turn: usize },

    #[error("failed to build thread pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Positions published on one turn.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TurnRecord {
    pub turn: usize,
    pub role: Role,
    pub positions: Vec<VertexId>,
}

/// A complete match.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MatchRecord {
    pub board: String,
    pub cops: usize,
    pub robbers: usize,
    pub max_turn: usize,
    pub turns_played: usize,
    pub captured: usize,
    pub final_phase: Phase,
    pub outcome: Outcome,
    pub winner: Role,
    pub turns: Vec<TurnRecord>,
}

/// Plays one match on `descriptor`, both sides using `weights`.
pub fn play_match(
    name: &str,
    descriptor: &BoardDescriptor,
    weights: &ScoringWeights,
) -> Result<MatchRecord, SelfPlayError> {
    let game_err = |source| SelfPlayError::Game {
        board: name.to_string(),
        source,
    };

    // Both sides clone the board; computing the table first lets them share
    // the work.
    descriptor.board.distances();
    let mut cops = Game::new(descriptor.clone(), Role::Cops, *weights).map_err(game_err)?;
    let mut robbers = Game::new(descriptor.clone(), Role::Robbers, *weights).map_err(game_err)?;

    let mut turns = Vec::new();
    while let Some(to_move) = cops.to_move() {
        let (mover, watcher) = match to_move {
            Role::Cops => (&mut cops, &mut robbers),
            Role::Robbers => (&mut robbers, &mut cops),
        };
        let positions = mover.play_own_turn().map_err(game_err)?;
        watcher
            .apply_adversary_turn(&positions)
            .map_err(game_err)?;

        turns.push(TurnRecord {
            turn: turns.len() + 1,
            role: to_move,
            positions,
        });

        if cops.phase() != robbers.phase()
            || cops.cops() != robbers.cops()
            || cops.robbers() != robbers.robbers()
        {
            return Err(SelfPlayError::Diverged {
                board: name.to_string(),
                turn: turns.len(),
            });
        }
    }

    let outcome = Outcome::from_remaining(cops.robbers().len());
    Ok(MatchRecord {
        board: name.to_string(),
        cops: descriptor.cops,
        robbers: descriptor.robbers,
        max_turn: descriptor.max_turn,
        turns_played: cops.turns_played(),
        captured: cops.captures(),
        final_phase: cops.phase(),
        outcome,
        winner: outcome.winner(),
        turns,
    })
}

/// Plays one match per board, in parallel when `config.threads > 1`.
///
/// Records come back in the order of `boards`.
pub fn run_matches(
    boards: &[(String, BoardDescriptor)],
    config: &SelfPlayConfig,
) -> Result<Vec<MatchRecord>, SelfPlayError> {
    if config.threads <= 1 {
        return boards
            .iter()
            .map(|(name, d)| play_match(name, d, &config.weights))
            .collect();
    }

    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;
    pool.install(|| {
        boards
            .par_iter()
            .map(|(name, d)| play_match(name, d, &config.weights))
            .collect()
    })
}

/// Writes one JSON object per line.
pub fn write_jsonl<W: Write>(records: &[MatchRecord], out: &mut W) -> std::io::Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Logs one line per match and the win totals.
pub fn log_summary(records: &[MatchRecord]) {
    let mut cops_wins = 0;
    for r in records {
        if r.outcome == Outcome::CopsWin {
            cops_wins += 1;
        }
        info!(
            "{}: {} win after {} turns ({} of {} robbers captured)",
            r.board, r.winner, r.turns_played, r.captured, r.robbers
        );
    }
    info!(
        "{} matches: cops {}, robbers {}",
        records.len(),
        cops_wins,
        records.len() - cops_wins
    );
}
