//! Roles and per-role agent positions.

use std::fmt;

use super::graph::VertexId;

/// One side of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Cops,
    Robbers,
}

impl Role {
    /// Parses the numeric role selector used on the command line.
    pub fn from_selector(selector: u8) -> Option<Role> {
        match selector {
            0 => Some(Role::Cops),
            1 => Some(Role::Robbers),
            _ => None,
        }
    }

    pub const fn selector(self) -> u8 {
        match self {
            Role::Cops => 0,
            Role::Robbers => 1,
        }
    }

    pub const fn opponent(self) -> Role {
        match self {
            Role::Cops => Role::Robbers,
            Role::Robbers => Role::Cops,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Role::Cops => "cops",
            Role::Robbers => "robbers",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Positions of every agent of one role.
///
/// `positions` is `None` until the role has been placed. Agents of the same
/// role may share a vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSet {
    count: usize,
    positions: Option<Vec<VertexId>>,
}

impl AgentSet {
    /// Creates an unplaced set of `count` agents.
    pub fn new(count: usize) -> Self {
        AgentSet {
            count,
            positions: None,
        }
    }

    /// Agents still expected on the board: the declared count before
    /// placement, the live count afterwards.
    pub fn len(&self) -> usize {
        match &self.positions {
            Some(p) => p.len(),
            None => self.count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The count declared by the board descriptor.
    pub fn declared(&self) -> usize {
        self.count
    }

    pub fn is_placed(&self) -> bool {
        self.positions.is_some()
    }

    /// Current positions, or an empty slice before placement.
    pub fn positions(&self) -> &[VertexId] {
        self.positions.as_deref().unwrap_or(&[])
    }

    pub fn positions_mut(&mut self) -> Option<&mut Vec<VertexId>> {
        self.positions.as_mut()
    }

    pub fn set_positions(&mut self, positions: Vec<VertexId>) {
        self.positions = Some(positions);
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.positions().contains(&v)
    }
}
