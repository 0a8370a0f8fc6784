//! Lattice board generation.
//!
//! Builds square-grid and triangular-lattice boards and writes them in the
//! descriptor format, with one `x y` coordinate line per vertex. Unless set
//! explicitly the turn limit is `2 * robbers * floor(sqrt(vertices))`.

use std::fmt::Write as _;

use crate::board::{Board, VertexId};

use super::descriptor::{BoardDescriptor, DescriptorError};

/// Lattice shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Square grid, up to 4 neighbors per vertex.
    Grid,
    /// Triangular lattice, up to 6 neighbors per vertex.
    Triangle,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("lattice needs at least one row and one column, got {rows}x{cols}")]
    EmptyLattice { rows: usize, cols: usize },
}

/// A generated board, before it is written out or parsed.
#[derive(Debug, Clone)]
pub struct Lattice {
    pub layout: Layout,
    pub rows: usize,
    pub cols: usize,
    pub cops: usize,
    pub robbers: usize,
    pub max_turn: usize,
    pub positions: Vec<(f64, f64)>,
    pub edges: Vec<(VertexId, VertexId)>,
}

/// Turn limit used when none is given: `2 * robbers * floor(sqrt(vertices))`.
pub fn default_max_turn(robbers: usize, vertices: usize) -> usize {
    2 * robbers * (vertices as f64).sqrt() as usize
}

/// Generates a `rows` x `cols` lattice.
///
/// Vertices are numbered row by row. Edges are listed per vertex in a fixed
/// order (right, then the row above), so strategies break ties the same way
/// on every run.
pub fn lattice(
    layout: Layout,
    rows: usize,
    cols: usize,
    cops: usize,
    robbers: usize,
) -> Result<Lattice, GenerateError> {
    if rows == 0 || cols == 0 {
        return Err(GenerateError::EmptyLattice { rows, cols });
    }

    let index = |r: usize, c: usize| r * cols + c;
    let row_height = match layout {
        Layout::Grid => 1.0,
        Layout::Triangle => 3f64.sqrt() / 2.0,
    };

    let mut positions = Vec::with_capacity(rows * cols);
    let mut edges = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let shift = match layout {
                Layout::Grid => 0.0,
                Layout::Triangle => 0.5 * r as f64,
            };
            positions.push((c as f64 + shift, r as f64 * row_height));

            let v = index(r, c);
            if c + 1 < cols {
                edges.push((v, index(r, c + 1)));
            }
            if r + 1 < rows {
                edges.push((v, index(r + 1, c)));
                if layout == Layout::Triangle && c > 0 {
                    edges.push((v, index(r + 1, c - 1)));
                }
            }
        }
    }

    Ok(Lattice {
        layout,
        rows,
        cols,
        cops,
        robbers,
        max_turn: default_max_turn(robbers, positions.len()),
        positions,
        edges,
    })
}

impl Lattice {
    pub fn with_max_turn(mut self, max_turn: usize) -> Self {
        self.max_turn = max_turn;
        self
    }

    pub fn size(&self) -> usize {
        self.positions.len()
    }

    /// A short name such as `triangle-4x6`.
    pub fn name(&self) -> String {
        let layout = match self.layout {
            Layout::Grid => "grid",
            Layout::Triangle => "triangle",
        };
        format!("{}-{}x{}", layout, self.rows, self.cols)
    }

    /// Renders the board in the descriptor format.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "Cops: {}", self.cops);
        let _ = writeln!(out, "Robbers: {}", self.robbers);
        let _ = writeln!(out, "Max turn: {}", self.max_turn);
        let _ = writeln!(out, "Vertices: {}", self.size());
        for (x, y) in &self.positions {
            let _ = writeln!(out, "{:.3} {:.3}", x, y);
        }
        let _ = writeln!(out, "Edges: {}", self.edges.len());
        for (u, v) in &self.edges {
            let _ = writeln!(out, "{} {}", u, v);
        }
        out
    }

    /// Builds the descriptor directly, without going through text.
    pub fn to_descriptor(&self) -> Result<BoardDescriptor, DescriptorError> {
        Ok(BoardDescriptor {
            cops: self.cops,
            robbers: self.robbers,
            max_turn: self.max_turn,
            board: Board::from_edges(self.size(), &self.edges)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::parse_descriptor;

    #[test]
    fn grid_edges_and_degrees() {
        let l = lattice(Layout::Grid, 3, 3, 1, 1).unwrap();
        assert_eq!(l.size(), 9);
        assert_eq!(l.edges.len(), 12);
        let d = l.to_descriptor().unwrap();
        assert_eq!(d.board.degree(0), 2);
        assert_eq!(d.board.degree(1), 3);
        assert_eq!(d.board.degree(4), 4);
        assert_eq!(d.board.distance(0, 8), 4);
    }

    #[test]
    fn single_row_grid_is_a_path() {
        let l = lattice(Layout::Grid, 1, 5, 1, 1).unwrap();
        assert_eq!(l.edges, vec![(0, 1), (1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn triangle_interior_has_six_neighbors() {
        let l = lattice(Layout::Triangle, 3, 3, 1, 1).unwrap();
        assert_eq!(l.edges.len(), 16);
        let d = l.to_descriptor().unwrap();
        assert_eq!(d.board.degree(4), 6);
        // Opposite corners along the short diagonal are closer than on a grid.
        assert_eq!(d.board.distance(2, 6), 2);
        assert_eq!(d.board.distance(0, 8), 4);
    }

    #[test]
    fn default_turn_limit_scales_with_robbers_and_size() {
        assert_eq!(default_max_turn(3, 9), 18);
        assert_eq!(default_max_turn(3, 10), 18);
        assert_eq!(default_max_turn(0, 100), 0);
        let l = lattice(Layout::Triangle, 4, 4, 2, 3).unwrap();
        assert_eq!(l.max_turn, 24);
        assert_eq!(l.with_max_turn(7).max_turn, 7);
    }

    #[test]
    fn text_parses_back_to_the_same_board() {
        let l = lattice(Layout::Triangle, 3, 4, 2, 3).unwrap();
        let parsed = parse_descriptor(&l.to_text()).unwrap();
        let direct = l.to_descriptor().unwrap();
        assert_eq!(parsed.cops, 2);
        assert_eq!(parsed.robbers, 3);
        assert_eq!(parsed.max_turn, l.max_turn);
        assert_eq!(parsed.board.vertices(), direct.board.vertices());
    }

    #[test]
    fn coordinates_are_written_per_vertex() {
        let text = lattice(Layout::Triangle, 2, 2, 1, 1).unwrap().to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[3], "Vertices: 4");
        assert_eq!(lines[4], "0.000 0.000");
        assert_eq!(lines[6], "0.500 0.866");
    }

    #[test]
    fn names_describe_the_lattice() {
        assert_eq!(lattice(Layout::Grid, 2, 7, 1, 1).unwrap().name(), "grid-2x7");
        assert_eq!(
            lattice(Layout::Triangle, 4, 6, 1, 1).unwrap().name(),
            "triangle-4x6"
        );
    }

    #[test]
    fn empty_lattice_is_rejected() {
        assert_eq!(
            lattice(Layout::Grid, 0, 3, 1, 1).unwrap_err(),
            GenerateError::EmptyLattice { rows: 0, cols: 3 }
        );
    }
}
