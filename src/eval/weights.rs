//! Tunable scoring weights.
//!
//! Every composite score is a fixed-weight linear combination; the weights
//! live here under names instead of inline constants. Defaults can be
//! overridden field by field from a JSON calibration file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Errors raised while loading a calibration file.
#[derive(Debug, thiserror::Error)]
pub enum WeightsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse weights JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Weights for choosing initial cop positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CopPlacementWeights {
    /// Distance to the nearest already-placed cop.
    pub dispersion: i64,
    /// Vertex degree.
    pub mobility: i64,
    /// Penalty per unit of mean distance to every vertex on the board.
    pub centrality: i64,
}

impl Default for CopPlacementWeights {
    fn default() -> Self {
        CopPlacementWeights {
            dispersion: 7,
            mobility: 3,
            centrality: 2,
        }
    }
}

/// Weights for choosing initial robber positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RobberPlacementWeights {
    /// Distance to the nearest cop.
    pub nearest_cop: i64,
    /// Vertex degree.
    pub mobility: i64,
    /// Mean distance to all cops.
    pub mean_cop: i64,
    /// Mean distance to robbers placed so far.
    pub robber_dispersion: i64,
    /// Mean distance to every vertex on the board. Off by default.
    pub board_dispersion: i64,
}

impl Default for RobberPlacementWeights {
    fn default() -> Self {
        RobberPlacementWeights {
            nearest_cop: 5,
            mobility: 2,
            mean_cop: 1,
            robber_dispersion: 1,
            board_dispersion: 0,
        }
    }
}

/// Weights for moving robbers each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RobberMovementWeights {
    pub nearest_cop: i64,
    pub mobility: i64,
    pub mean_cop: i64,
    /// Mean distance to the other robbers.
    pub robber_dispersion: i64,
    /// Subtracted when another robber already stands on the candidate.
    pub occupancy_penalty: i64,
}

impl Default for RobberMovementWeights {
    fn default() -> Self {
        RobberMovementWeights {
            nearest_cop: 5,
            mobility: 2,
            mean_cop: 1,
            robber_dispersion: 1,
            occupancy_penalty: 20,
        }
    }
}

/// The full set of scoring weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringWeights {
    pub cop_placement: CopPlacementWeights,
    pub robber_placement: RobberPlacementWeights,
    pub robber_movement: RobberMovementWeights,
}

impl ScoringWeights {
    /// Loads weights from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, WeightsError> {
        let data = fs::read_to_string(path).map_err(|source| WeightsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&data)
    }

    /// Parses weights from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, WeightsError> {
        Ok(serde_json::from_str(json)?)
    }
}
