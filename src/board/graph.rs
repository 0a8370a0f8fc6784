//! Graph board: an arena of vertices with index-based adjacency.
//!
//! Vertices are identified by a dense index in `[0, size)`. Each vertex keeps
//! its neighbors in edge-declaration order, which doubles as the iteration
//! order for every tie-break in the strategies. The all-pairs distance table
//! is computed on first access and never recomputed.

use std::sync::OnceLock;

use super::distance::{DistanceTable, UNREACHABLE};

/// Dense vertex handle, an index into the board's vertex arena.
pub type VertexId = usize;

/// Errors raised while building a board.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("edge ({0}, {1}) references a vertex outside 0..{2}")]
    EdgeOutOfRange(VertexId, VertexId, usize),
}

/// A single vertex and its ordered neighbor list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub index: VertexId,
    pub neighbors: Vec<VertexId>,
}

impl Vertex {
    /// Number of neighbors (self-loops and parallel edges count each time).
    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// An undirected graph with a lazily computed distance oracle.
///
/// The vertex set is fixed at construction. The distance table sits behind a
/// `OnceLock`, so it is either absent or computed, and once computed it is
/// read-only for the rest of the game.
#[derive(Debug, Clone)]
pub struct Board {
    vertices: Vec<Vertex>,
    distances: OnceLock<DistanceTable>,
}

impl Board {
    /// Builds a board of `size` vertices from undirected edges.
    ///
    /// Each edge is added in both directions, in the given order.
    pub fn from_edges(size: usize, edges: &[(VertexId, VertexId)]) -> Result<Self, BoardError> {
        let mut vertices: Vec<Vertex> = (0..size)
            .map(|index| Vertex {
                index,
                neighbors: Vec::new(),
            })
            .collect();

        for &(u, v) in edges {
            if u >= size || v >= size {
                return Err(BoardError::EdgeOutOfRange(u, v, size));
            }
            vertices[u].neighbors.push(v);
            vertices[v].neighbors.push(u);
        }

        Ok(Board {
            vertices,
            distances: OnceLock::new(),
        })
    }

    /// Number of vertices.
    #[inline]
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn vertex(&self, v: VertexId) -> &Vertex {
        &self.vertices[v]
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        &self.vertices[v].neighbors
    }

    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        self.vertices[v].degree()
    }

    /// Returns true if the distance table has already been computed.
    pub fn has_distances(&self) -> bool {
        self.distances.get().is_some()
    }

    /// Returns the distance table, computing it on first call.
    pub fn distances(&self) -> &DistanceTable {
        self.distances.get_or_init(|| DistanceTable::compute(&self.vertices))
    }

    /// Shortest-path edge count from `u` to `v`, or [`UNREACHABLE`].
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn distance(&self, u: VertexId, v: VertexId) -> u32 {
        self.distances().distance(u, v)
    }

    /// First vertex after `u` on a shortest path to `v`.
    ///
    /// Returns `Some(u)` when `u == v` and `None` when `v` is unreachable.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn next_hop(&self, u: VertexId, v: VertexId) -> Option<VertexId> {
        self.distances().next_hop(u, v)
    }

    /// Returns true if `v` is reachable from `u`.
    #[inline]
    pub fn is_reachable(&self, u: VertexId, v: VertexId) -> bool {
        self.distance(u, v) != UNREACHABLE
    }

    /// Staying put is always legal; otherwise `dest` must be a neighbor of
    /// `source`. Out-of-range indices are never legal.
    pub fn is_valid_move(&self, source: VertexId, dest: VertexId) -> bool {
        if source >= self.size() || dest >= self.size() {
            return false;
        }
        source == dest || self.vertices[source].neighbors.contains(&dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path3() -> Board {
        Board::from_edges(3, &[(0, 1), (1, 2)]).unwrap()
    }

    #[test]
    fn edges_are_added_both_ways_in_order() {
        let board = Board::from_edges(4, &[(0, 2), (0, 1), (3, 0)]).unwrap();
        assert_eq!(board.neighbors(0), &[2, 1, 3]);
        assert_eq!(board.neighbors(1), &[0]);
        assert_eq!(board.neighbors(2), &[0]);
        assert_eq!(board.neighbors(3), &[0]);
        assert_eq!(board.degree(0), 3);
    }

    #[test]
    fn out_of_range_edge_is_rejected() {
        let err = Board::from_edges(2, &[(0, 5)]).unwrap_err();
        assert_eq!(err, BoardError::EdgeOutOfRange(0, 5, 2));
    }

    #[test]
    fn vertex_indices_are_dense() {
        let board = path3();
        for (i, v) in board.vertices().iter().enumerate() {
            assert_eq!(v.index, i);
        }
    }

    #[test]
    fn staying_is_always_valid() {
        let board = Board::from_edges(3, &[]).unwrap();
        for v in 0..3 {
            assert!(board.is_valid_move(v, v));
        }
    }

    #[test]
    fn valid_moves_follow_edges() {
        let board = path3();
        assert!(board.is_valid_move(0, 1));
        assert!(board.is_valid_move(1, 0));
        assert!(board.is_valid_move(1, 2));
        assert!(!board.is_valid_move(0, 2));
        assert!(!board.is_valid_move(2, 0));
    }

    #[test]
    fn out_of_range_moves_are_invalid() {
        let board = path3();
        assert!(!board.is_valid_move(0, 3));
        assert!(!board.is_valid_move(3, 3));
        assert!(!board.is_valid_move(usize::MAX, 0));
    }

    #[test]
    fn distances_are_computed_lazily_once() {
        let board = path3();
        assert!(!board.has_distances());
        assert_eq!(board.distance(0, 2), 2);
        assert!(board.has_distances());
        let first = board.distances() as *const DistanceTable;
        assert_eq!(board.next_hop(0, 2), Some(1));
        let second = board.distances() as *const DistanceTable;
        assert_eq!(first, second);
    }

    #[test]
    fn disconnected_vertices_are_unreachable() {
        let board = Board::from_edges(2, &[]).unwrap();
        assert_eq!(board.distance(0, 1), UNREACHABLE);
        assert_eq!(board.next_hop(0, 1), None);
        assert!(!board.is_reachable(0, 1));
        assert!(!board.is_valid_move(0, 1));
    }
}
