//! Board descriptor parsing.
//!
//! Format:
//!
//! ```text
//! Cops: <uint>
//! Robbers: <uint>
//! Max turn: <uint>
//! Vertices: <uint>
//! <one line per vertex, content ignored>
//! Edges: <uint>
//! <u> <v>            one line per declared edge
//! ```
//!
//! Edge lines may carry extra tokens after the two endpoints. Any further
//! edge-shaped line after the declared count is an error, so a wrong count
//! never truncates silently.

use std::io::{BufRead, Read};

use crate::board::{Board, BoardError, VertexId};

/// Errors that can occur while parsing a board descriptor.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("failed to read board descriptor: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected '{expected}' header")]
    MissingHeader { line: usize, expected: &'static str },

    #[error("line {line}: invalid count for '{header}': '{value}'")]
    InvalidCount {
        line: usize,
        header: &'static str,
        value: String,
    },

    #[error("expected {expected} vertex lines, found {found}")]
    MissingVertices { expected: usize, found: usize },

    #[error("line {line}: invalid edge '{text}'")]
    InvalidEdge { line: usize, text: String },

    #[error("line {line}: edge ({u}, {v}) references a vertex outside 0..{size}")]
    EdgeOutOfRange {
        line: usize,
        u: VertexId,
        v: VertexId,
        size: usize,
    },

    #[error("expected {expected} edges, found {found}")]
    MissingEdges { expected: usize, found: usize },

    #[error("line {line}: more edges than the {declared} declared")]
    ExtraEdge { line: usize, declared: usize },

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// A parsed board descriptor: agent counts, turn limit and the graph.
#[derive(Debug, Clone)]
pub struct BoardDescriptor {
    pub cops: usize,
    pub robbers: usize,
    pub max_turn: usize,
    pub board: Board,
}

/// Reads and parses a descriptor from any buffered reader.
pub fn read_descriptor<R: BufRead>(mut reader: R) -> Result<BoardDescriptor, DescriptorError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_descriptor(&text)
}

/// Parses a descriptor from its full text.
pub fn parse_descriptor(text: &str) -> Result<BoardDescriptor, DescriptorError> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));
    let mut last_line = 0;

    let mut header = |name: &'static str| -> Result<usize, DescriptorError> {
        let (line, raw) = lines.next().ok_or(DescriptorError::MissingHeader {
            line: last_line + 1,
            expected: name,
        })?;
        last_line = line;
        let value = raw
            .trim()
            .strip_prefix(name)
            .ok_or(DescriptorError::MissingHeader {
                line,
                expected: name,
            })?
            .trim();
        value.parse().map_err(|_| DescriptorError::InvalidCount {
            line,
            header: name,
            value: value.to_string(),
        })
    };

    let cops = header("Cops:")?;
    let robbers = header("Robbers:")?;
    let max_turn = header("Max turn:")?;
    let size = header("Vertices:")?;

    for found in 0..size {
        if lines.next().is_none() {
            return Err(DescriptorError::MissingVertices {
                expected: size,
                found,
            });
        }
    }

    let (line, raw) = lines.next().ok_or(DescriptorError::MissingHeader {
        line: 5 + size,
        expected: "Edges:",
    })?;
    let edge_count_text = raw
        .trim()
        .strip_prefix("Edges:")
        .ok_or(DescriptorError::MissingHeader {
            line,
            expected: "Edges:",
        })?
        .trim();
    let edge_count: usize = edge_count_text
        .parse()
        .map_err(|_| DescriptorError::InvalidCount {
            line,
            header: "Edges:",
            value: edge_count_text.to_string(),
        })?;

    let mut edges = Vec::with_capacity(edge_count);
    for found in 0..edge_count {
        let (line, raw) = lines.next().ok_or(DescriptorError::MissingEdges {
            expected: edge_count,
            found,
        })?;
        let (u, v) = parse_edge(raw).ok_or_else(|| DescriptorError::InvalidEdge {
            line,
            text: raw.trim().to_string(),
        })?;
        if u >= size || v >= size {
            return Err(DescriptorError::EdgeOutOfRange { line, u, v, size });
        }
        edges.push((u, v));
    }

    for (line, raw) in lines {
        if parse_edge(raw).is_some() {
            return Err(DescriptorError::ExtraEdge {
                line,
                declared: edge_count,
            });
        }
    }

    let board = Board::from_edges(size, &edges)?;
    Ok(BoardDescriptor {
        cops,
        robbers,
        max_turn,
        board,
    })
}

/// Parses the two leading vertex indices of an edge line.
fn parse_edge(line: &str) -> Option<(VertexId, VertexId)> {
    let mut tokens = line.split_whitespace();
    let u = tokens.next()?.parse().ok()?;
    let v = tokens.next()?.parse().ok()?;
    Some((u, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAIN: &str = "Cops: 1\nRobbers: 1\nMax turn: 1\nVertices: 3\n0 0\n0 0\n0 0\nEdges: 2\n0 1\n1 2\n";

    #[test]
    fn parses_chain() {
        let d = parse_descriptor(CHAIN).unwrap();
        assert_eq!(d.cops, 1);
        assert_eq!(d.robbers, 1);
        assert_eq!(d.max_turn, 1);
        assert_eq!(d.board.size(), 3);
        assert_eq!(d.board.distance(0, 2), 2);
        assert_eq!(d.board.next_hop(0, 2), Some(1));
    }

    #[test]
    fn reads_from_buffered_reader() {
        let d = read_descriptor(CHAIN.as_bytes()).unwrap();
        assert_eq!(d.board.neighbors(1), &[0, 2]);
    }

    #[test]
    fn single_vertex_without_edges() {
        let d = parse_descriptor("Cops: 0\nRobbers: 0\nMax turn: 0\nVertices: 1\n0 0\nEdges: 0\n")
            .unwrap();
        assert_eq!(d.board.size(), 1);
        assert!(d.board.is_valid_move(0, 0));
    }

    #[test]
    fn tolerates_crlf_and_trailing_blank_lines() {
        let text = "Cops: 2\r\nRobbers: 1\r\nMax turn: 10\r\nVertices: 2\r\na\r\nb\r\nEdges: 1\r\n0 1\r\n\r\n\n";
        let d = parse_descriptor(text).unwrap();
        assert_eq!(d.cops, 2);
        assert_eq!(d.max_turn, 10);
        assert!(d.board.is_valid_move(1, 0));
    }

    #[test]
    fn extra_tokens_on_edge_lines_are_ignored() {
        let text = "Cops: 0\nRobbers: 0\nMax turn: 0\nVertices: 3\n0 0\n1 1\n2 2\nEdges: 1\n0 1 5\n";
        let d = parse_descriptor(text).unwrap();
        assert!(d.board.is_valid_move(0, 1));
    }

    #[test]
    fn missing_edges_section_fails() {
        let text = "Cops: 0\nRobbers: 0\nMax turn: 0\nVertices: 2\n0 0\n0 0\n";
        assert!(matches!(
            parse_descriptor(text),
            Err(DescriptorError::MissingHeader { expected: "Edges:", .. })
        ));
    }

    #[test]
    fn fewer_edges_than_declared_fails() {
        let text = "Cops: 0\nRobbers: 0\nMax turn: 0\nVertices: 3\n0 0\n1 1\n2 2\nEdges: 2\n0 1 5\n";
        assert!(matches!(
            parse_descriptor(text),
            Err(DescriptorError::MissingEdges { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn more_edges_than_declared_fails() {
        let text = "Cops: 0\nRobbers: 0\nMax turn: 0\nVertices: 3\n0 0\n1 1\n2 2\nEdges: 1\n0 1 5\n1 2 6\n";
        assert!(matches!(
            parse_descriptor(text),
            Err(DescriptorError::ExtraEdge { line: 10, declared: 1 })
        ));
    }

    #[test]
    fn three_edge_lines_for_two_declared_fails() {
        let text = "Cops: 1\nRobbers: 1\nMax turn: 5\nVertices: 3\n0 0\n0 0\n0 0\nEdges: 2\n0 1\n1 2\n2 0\n";
        assert!(matches!(
            parse_descriptor(text),
            Err(DescriptorError::ExtraEdge { .. })
        ));
    }

    #[test]
    fn out_of_range_endpoint_fails() {
        let text = "Cops: 0\nRobbers: 0\nMax turn: 0\nVertices: 2\n0 0\n0 0\nEdges: 1\n0 5\n";
        assert!(matches!(
            parse_descriptor(text),
            Err(DescriptorError::EdgeOutOfRange { line: 8, u: 0, v: 5, size: 2 })
        ));
    }

    #[test]
    fn malformed_edge_fails() {
        let text = "Cops: 0\nRobbers: 0\nMax turn: 0\nVertices: 2\n0 0\n0 0\nEdges: 1\n0 x\n";
        assert!(matches!(
            parse_descriptor(text),
            Err(DescriptorError::InvalidEdge { line: 8, .. })
        ));
    }

    #[test]
    fn wrong_header_fails() {
        let text = "Thieves: 1\nRobbers: 0\nMax turn: 0\nVertices: 0\nEdges: 0\n";
        assert!(matches!(
            parse_descriptor(text),
            Err(DescriptorError::MissingHeader { line: 1, expected: "Cops:" })
        ));
    }

    #[test]
    fn non_numeric_count_fails() {
        let text = "Cops: many\nRobbers: 0\nMax turn: 0\nVertices: 0\nEdges: 0\n";
        assert!(matches!(
            parse_descriptor(text),
            Err(DescriptorError::InvalidCount { header: "Cops:", .. })
        ));
    }

    #[test]
    fn truncated_vertex_list_fails() {
        let text = "Cops: 0\nRobbers: 0\nMax turn: 0\nVertices: 3\n0 0\n";
        assert!(matches!(
            parse_descriptor(text),
            Err(DescriptorError::MissingVertices { expected: 3, found: 1 })
        ));
    }

    #[test]
    fn empty_input_fails() {
        assert!(matches!(
            parse_descriptor(""),
            Err(DescriptorError::MissingHeader { line: 1, expected: "Cops:" })
        ));
    }
}
