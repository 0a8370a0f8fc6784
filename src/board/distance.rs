//! All-pairs shortest paths over the board.
//!
//! Uses the triple-nested relaxation over an intermediate vertex: direct
//! neighbors start at distance 1, every vertex at 0 from itself, everything
//! else unreachable. Cubic in the vertex count, run once per game.

use log::debug;

use super::graph::{Vertex, VertexId};

/// Distance reported between vertices with no connecting path.
pub const UNREACHABLE: u32 = u32::MAX;

/// Next-hop slot for pairs with no connecting path.
const NO_HOP: VertexId = VertexId::MAX;

/// Row-major `size * size` distance and next-hop matrices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    size: usize,
    dist: Vec<u32>,
    next: Vec<VertexId>,
}

impl DistanceTable {
    /// Runs the all-pairs computation over the given vertex arena.
    pub fn compute(vertices: &[Vertex]) -> Self {
        let n = vertices.len();
        let mut dist = vec![UNREACHABLE; n * n];
        let mut next = vec![NO_HOP; n * n];

        for (u, vertex) in vertices.iter().enumerate() {
            for &v in &vertex.neighbors {
                dist[u * n + v] = 1;
                next[u * n + v] = v;
            }
        }

        // Self entries are written after neighbors so self-loops still read 0.
        for v in 0..n {
            dist[v * n + v] = 0;
            next[v * n + v] = v;
        }

        for w in 0..n {
            for u in 0..n {
                let d_uw = dist[u * n + w];
                if d_uw == UNREACHABLE {
                    continue;
                }
                for v in 0..n {
                    let d_wv = dist[w * n + v];
                    if d_wv == UNREACHABLE {
                        continue;
                    }
                    let through = d_uw + d_wv;
                    if through < dist[u * n + v] {
                        dist[u * n + v] = through;
                        next[u * n + v] = next[u * n + w];
                    }
                }
            }
        }

        debug!("computed all-pairs distances for {} vertices", n);
        DistanceTable { size: n, dist, next }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn distance(&self, u: VertexId, v: VertexId) -> u32 {
        assert!(u < self.size && v < self.size, "vertex out of range");
        self.dist[u * self.size + v]
    }

    #[inline]
    pub fn next_hop(&self, u: VertexId, v: VertexId) -> Option<VertexId> {
        assert!(u < self.size && v < self.size, "vertex out of range");
        match self.next[u * self.size + v] {
            NO_HOP => None,
            hop => Some(hop),
        }
    }
}
