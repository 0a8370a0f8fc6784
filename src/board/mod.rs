//! Board representation.
//!
//! Contains the graph arena, the all-pairs distance oracle, and the role and
//! agent-position types shared by the strategies and the game loop.

pub mod agents;
pub mod distance;
pub mod graph;

pub use agents::{AgentSet, Role};
pub use distance::{DistanceTable, UNREACHABLE};
pub use graph::{Board, BoardError, Vertex, VertexId};
