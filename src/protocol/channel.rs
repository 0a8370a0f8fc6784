//! Line-oriented move exchange.
//!
//! One line per agent, carrying the agent's vertex index in decimal, in
//! agent order. Outgoing batches are flushed immediately; incoming batches
//! block until every expected line has arrived.

use std::io::{self, BufRead, Write};

use crate::board::VertexId;

/// Errors on the move channel. All of them end the game.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("I/O error on move channel: {0}")]
    Io(#[from] io::Error),

    #[error("input ended while waiting for position {index} of {expected}")]
    UnexpectedEof { index: usize, expected: usize },

    #[error("malformed position line: '{0}'")]
    Malformed(String),
}

/// Exchanges agent positions with the adversary.
pub trait Channel {
    /// Publishes this program's positions for the turn just played.
    fn send_positions(&mut self, positions: &[VertexId]) -> Result<(), ProtocolError>;

    /// Blocks until the adversary's `count` positions have been received.
    fn recv_positions(&mut self, count: usize) -> Result<Vec<VertexId>, ProtocolError>;
}

/// Parses a single position line.
pub fn parse_position(line: &str) -> Result<VertexId, ProtocolError> {
    let trimmed = line.trim();
    trimmed
        .parse()
        .map_err(|_| ProtocolError::Malformed(trimmed.to_string()))
}

/// Formats positions as protocol lines, each terminated by a newline.
pub fn format_positions(positions: &[VertexId]) -> String {
    let mut out = String::with_capacity(positions.len() * 4);
    for p in positions {
        out.push_str(&p.to_string());
        out.push('\n');
    }
    out
}

/// A [`Channel`] over a buffered reader and a writer, typically stdin and
/// stdout.
pub struct LineChannel<R, W> {
    reader: R,
    writer: W,
    buf: String,
}

impl<R: BufRead, W: Write> LineChannel<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        LineChannel {
            reader,
            writer,
            buf: String::new(),
        }
    }

    /// Returns the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Channel for LineChannel<R, W> {
    fn send_positions(&mut self, positions: &[VertexId]) -> Result<(), ProtocolError> {
        self.writer.write_all(format_positions(positions).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn recv_positions(&mut self, count: usize) -> Result<Vec<VertexId>, ProtocolError> {
        let mut positions = Vec::with_capacity(count);
        for index in 0..count {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Err(ProtocolError::UnexpectedEof {
                    index,
                    expected: count,
                });
            }
            positions.push(parse_position(&self.buf)?);
        }
        Ok(positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_position_trims() {
        assert_eq!(parse_position("12\n").unwrap(), 12);
        assert_eq!(parse_position("  7 \r\n").unwrap(), 7);
    }

    #[test]
    fn parse_position_rejects_garbage() {
        assert!(matches!(parse_position("x"), Err(ProtocolError::Malformed(_))));
        assert!(matches!(parse_position(""), Err(ProtocolError::Malformed(_))));
        assert!(matches!(parse_position("-1"), Err(ProtocolError::Malformed(_))));
        assert!(matches!(parse_position("1 2"), Err(ProtocolError::Malformed(_))));
    }

    #[test]
    fn sends_one_line_per_agent() {
        let mut channel = LineChannel::new(&b""[..], Vec::new());
        channel.send_positions(&[3, 0, 14]).unwrap();
        let (_, out) = channel.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "3\n0\n14\n");
    }

    #[test]
    fn sending_nothing_writes_nothing() {
        let mut channel = LineChannel::new(&b""[..], Vec::new());
        channel.send_positions(&[]).unwrap();
        let (_, out) = channel.into_inner();
        assert!(out.is_empty());
    }

    #[test]
    fn receives_exactly_count_lines() {
        let mut channel = LineChannel::new(&b"4\n5\n6\n"[..], Vec::new());
        assert_eq!(channel.recv_positions(2).unwrap(), vec![4, 5]);
        assert_eq!(channel.recv_positions(1).unwrap(), vec![6]);
    }

    #[test]
    fn eof_is_an_error() {
        let mut channel = LineChannel::new(&b"4\n"[..], Vec::new());
        assert!(matches!(
            channel.recv_positions(2),
            Err(ProtocolError::UnexpectedEof { index: 1, expected: 2 })
        ));
    }

    #[test]
    fn malformed_line_is_an_error() {
        let mut channel = LineChannel::new(&b"4\nnope\n"[..], Vec::new());
        assert!(matches!(
            channel.recv_positions(2),
            Err(ProtocolError::Malformed(s)) if s == "nope"
        ));
    }

    #[test]
    fn last_line_without_newline_is_accepted() {
        let mut channel = LineChannel::new(&b"9"[..], Vec::new());
        assert_eq!(channel.recv_positions(1).unwrap(), vec![9]);
    }
}
