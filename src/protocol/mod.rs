//! External formats.
//!
//! Parsing and generation of the board descriptor file, and the
//! line-oriented move exchange with the adversary program.

pub mod channel;
pub mod descriptor;
pub mod generate;

pub use channel::{format_positions, parse_position, Channel, LineChannel, ProtocolError};
pub use descriptor::{parse_descriptor, read_descriptor, BoardDescriptor, DescriptorError};
pub use generate::{default_max_turn, lattice, GenerateError, Lattice, Layout};
