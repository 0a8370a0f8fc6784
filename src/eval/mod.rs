//! Vertex evaluation.
//!
//! Scores candidate vertices for placement and movement from distance-table
//! primitives combined with named, overridable weights.

pub mod scoring;
pub mod weights;

pub use scoring::{
    cop_placement_score, robber_movement_score, robber_placement_score, INFINITE,
};
pub use weights::{
    CopPlacementWeights, RobberMovementWeights, RobberPlacementWeights, ScoringWeights,
    WeightsError,
};
