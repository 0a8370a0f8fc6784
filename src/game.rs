//! Game state machine.
//!
//! Couples the strategies to the turn protocol. Turns alternate cops first,
//! starting with one placement turn per side. Own turns are computed, adversary
//! turns are validated and applied. Captures are resolved after every turn once
//! both sides are on the board; the game ends when no robber is left or the
//! turn countdown runs out.

use log::{debug, info};

use crate::board::{AgentSet, Board, Role, VertexId};
use crate::eval::ScoringWeights;
use crate::protocol::{BoardDescriptor, Channel, ProtocolError};
use crate::strategy::{move_cops, move_robbers, place};

/// Turns spent on initial placement, added to the descriptor's turn limit.
pub const PLACEMENT_TURNS: usize = 2;

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    AwaitingInitialCops,
    AwaitingInitialRobbers,
    CopsTurn,
    RobbersTurn,
    Captured,
    TurnsExhausted,
}

impl Phase {
    /// The role to play next, or `None` once the game is over.
    pub const fn to_move(self) -> Option<Role> {
        match self {
            Phase::AwaitingInitialCops | Phase::CopsTurn => Some(Role::Cops),
            Phase::AwaitingInitialRobbers | Phase::RobbersTurn => Some(Role::Robbers),
            Phase::Captured | Phase::TurnsExhausted => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::Captured | Phase::TurnsExhausted)
    }

    pub const fn is_placement(self) -> bool {
        matches!(self, Phase::AwaitingInitialCops | Phase::AwaitingInitialRobbers)
    }

    /// The phase following a completed, non-terminal turn.
    const fn next(self) -> Phase {
        match self {
            Phase::AwaitingInitialCops => Phase::AwaitingInitialRobbers,
            Phase::AwaitingInitialRobbers | Phase::RobbersTurn => Phase::CopsTurn,
            Phase::CopsTurn => Phase::RobbersTurn,
            terminal => terminal,
        }
    }
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    CopsWin,
    RobbersWin,
}

impl Outcome {
    /// Robbers win while at least one of them is left.
    pub const fn from_remaining(robbers: usize) -> Outcome {
        if robbers == 0 {
            Outcome::CopsWin
        } else {
            Outcome::RobbersWin
        }
    }

    pub const fn winner(self) -> Role {
        match self {
            Outcome::CopsWin => Role::Cops,
            Outcome::RobbersWin => Role::Robbers,
        }
    }
}

/// Errors that end a game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,

    #[error("{role} cannot play now, {to_move} to move")]
    OutOfTurn { role: Role, to_move: Role },

    #[error("expected {expected} positions for {role}, got {found}")]
    WrongAgentCount {
        role: Role,
        expected: usize,
        found: usize,
    },

    #[error("{role} agent {agent}: vertex {vertex} outside 0..{size}")]
    OutOfRange {
        role: Role,
        agent: usize,
        vertex: VertexId,
        size: usize,
    },

    #[error("{role} agent {agent}: illegal move {from} -> {to}")]
    IllegalMove {
        role: Role,
        agent: usize,
        from: VertexId,
        to: VertexId,
    },

    #[error("board has no vertices but {agents} agents must be placed")]
    EmptyBoard { agents: usize },

    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

/// One game from this program's point of view.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    cops: AgentSet,
    robbers: AgentSet,
    role: Role,
    weights: ScoringWeights,
    max_turn: usize,
    remaining_turns: usize,
    turns_played: usize,
    captures: usize,
    phase: Phase,
}

impl Game {
    /// Starts a game on `descriptor`'s board with this program playing `role`.
    pub fn new(
        descriptor: BoardDescriptor,
        role: Role,
        weights: ScoringWeights,
    ) -> Result<Self, GameError> {
        let agents = descriptor.cops + descriptor.robbers;
        if descriptor.board.size() == 0 && agents > 0 {
            return Err(GameError::EmptyBoard { agents });
        }

        Ok(Game {
            board: descriptor.board,
            cops: AgentSet::new(descriptor.cops),
            robbers: AgentSet::new(descriptor.robbers),
            role,
            weights,
            max_turn: descriptor.max_turn,
            remaining_turns: descriptor.max_turn + PLACEMENT_TURNS,
            turns_played: 0,
            captures: 0,
            phase: Phase::AwaitingInitialCops,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The role this program controls.
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn to_move(&self) -> Option<Role> {
        self.phase.to_move()
    }

    pub fn max_turn(&self) -> usize {
        self.max_turn
    }

    /// Turns left on the countdown, placement turns included.
    pub fn remaining_turns(&self) -> usize {
        self.remaining_turns
    }

    pub fn turns_played(&self) -> usize {
        self.turns_played
    }

    /// Robbers captured so far.
    pub fn captures(&self) -> usize {
        self.captures
    }

    pub fn cops(&self) -> &[VertexId] {
        self.cops.positions()
    }

    pub fn robbers(&self) -> &[VertexId] {
        self.robbers.positions()
    }

    pub fn agents(&self, role: Role) -> &AgentSet {
        match role {
            Role::Cops => &self.cops,
            Role::Robbers => &self.robbers,
        }
    }

    fn agents_mut(&mut self, role: Role) -> &mut AgentSet {
        match role {
            Role::Cops => &mut self.cops,
            Role::Robbers => &mut self.robbers,
        }
    }

    /// The result, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.phase.is_terminal() {
            Some(Outcome::from_remaining(self.robbers.len()))
        } else {
            None
        }
    }

    /// Checks that `role` is the side to move.
    fn expect_turn(&self, role: Role) -> Result<(), GameError> {
        match self.phase.to_move() {
            None => Err(GameError::GameOver),
            Some(to_move) if to_move != role => Err(GameError::OutOfTurn { role, to_move }),
            Some(_) => Ok(()),
        }
    }

    /// Computes and applies this program's next positions.
    ///
    /// Returns the positions as they stand at the end of the move, before any
    /// capture removes robbers, which is what the adversary must be told.
    pub fn play_own_turn(&mut self) -> Result<Vec<VertexId>, GameError> {
        let role = self.role;
        self.expect_turn(role)?;

        match self.phase {
            Phase::AwaitingInitialCops | Phase::AwaitingInitialRobbers => {
                let k = self.agents(role).declared();
                let positions = place(&self.board, &self.weights, role, k, self.cops.positions());
                self.agents_mut(role).set_positions(positions);
            }
            Phase::CopsTurn => {
                if let Some(cops) = self.cops.positions_mut() {
                    move_cops(&self.board, cops, self.robbers.positions());
                }
            }
            Phase::RobbersTurn => {
                if let Some(robbers) = self.robbers.positions_mut() {
                    move_robbers(&self.board, &self.weights, robbers, self.cops.positions());
                }
            }
            Phase::Captured | Phase::TurnsExhausted => return Err(GameError::GameOver),
        }

        let output = self.agents(role).positions().to_vec();
        self.end_turn();
        Ok(output)
    }

    /// Validates and applies the adversary's positions.
    ///
    /// Placements must name one in-range vertex per agent; later moves must
    /// also be legal from each agent's current vertex.
    pub fn apply_adversary_turn(&mut self, positions: &[VertexId]) -> Result<(), GameError> {
        let role = self.role.opponent();
        self.expect_turn(role)?;

        let size = self.board.size();
        let set = self.agents(role);
        if positions.len() != set.len() {
            return Err(GameError::WrongAgentCount {
                role,
                expected: set.len(),
                found: positions.len(),
            });
        }

        for (agent, &vertex) in positions.iter().enumerate() {
            if vertex >= size {
                return Err(GameError::OutOfRange {
                    role,
                    agent,
                    vertex,
                    size,
                });
            }
        }

        if set.is_placed() {
            for (agent, (&from, &to)) in set.positions().iter().zip(positions).enumerate() {
                if !self.board.is_valid_move(from, to) {
                    return Err(GameError::IllegalMove {
                        role,
                        agent,
                        from,
                        to,
                    });
                }
            }
        }

        self.agents_mut(role).set_positions(positions.to_vec());
        self.end_turn();
        Ok(())
    }

    /// Removes every robber standing on a cop's vertex.
    ///
    /// Returns how many were removed. Running it again without any move in
    /// between removes nothing.
    pub fn capture_robbers(&mut self) -> usize {
        let cops = self.cops.positions();
        let Some(robbers) = self.robbers.positions_mut() else {
            return 0;
        };

        let mut captured = 0;
        let mut i = 0;
        while i < robbers.len() {
            if cops.contains(&robbers[i]) {
                info!("Captured robber at position {}", robbers[i]);
                robbers.remove(i);
                captured += 1;
            } else {
                i += 1;
            }
        }

        self.captures += captured;
        captured
    }

    /// Counts the turn down, resolves captures and advances the phase.
    fn end_turn(&mut self) {
        self.remaining_turns = self.remaining_turns.saturating_sub(1);
        self.turns_played += 1;

        if self.cops.is_placed() && self.robbers.is_placed() {
            self.capture_robbers();
        }

        self.phase = if self.robbers.is_placed() && self.robbers.is_empty() {
            Phase::Captured
        } else if self.remaining_turns == 0 {
            Phase::TurnsExhausted
        } else {
            self.phase.next()
        };
        debug!(
            "turn {} done, phase {:?}, {} robbers left",
            self.turns_played,
            self.phase,
            self.robbers.len()
        );
    }

    /// Plays the game to the end over `channel`.
    pub fn run<C: Channel>(&mut self, channel: &mut C) -> Result<Outcome, GameError> {
        while let Some(to_move) = self.to_move() {
            if self.phase.is_placement() {
                info!("Initial positions for {}", to_move);
            } else {
                info!("Turn for {} (remaining: {})", to_move, self.remaining_turns);
            }

            if to_move == self.role {
                let positions = self.play_own_turn()?;
                channel.send_positions(&positions)?;
            } else {
                let count = self.agents(to_move).len();
                let positions = channel.recv_positions(count)?;
                self.apply_adversary_turn(&positions)?;
            }
        }

        let outcome = Outcome::from_remaining(self.robbers.len());
        match outcome {
            Outcome::RobbersWin => info!("Robbers win!"),
            Outcome::CopsWin => info!("Cops win!"),
        }
        Ok(outcome)
    }
}
