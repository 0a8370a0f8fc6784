//! Placement and movement strategies.
//!
//! Decides where this program's agents go: greedy dispersion for the initial
//! placement, independent greedy steps for robbers, and a voted common target
//! for cops.

pub mod cops;
pub mod placement;
pub mod robbers;

pub use cops::{consensus_target, move_cops};
pub use placement::{place, place_cops, place_robbers};
pub use robbers::move_robbers;
