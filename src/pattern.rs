//! Pattern file parsing and grid rendering.
//!
//! The file format is strict: exactly [`ROWS`] lines of exactly [`COLS`]
//! cell symbols, one terminator byte after each row. The alphabet is
//! supplied by the caller, so the engine itself is symbol-agnostic.

use crate::grid::{Cell, CellGrid, COLS, ROWS};
use std::io::{self, BufReader, Read, Write};

/// The two-byte alphabet used for both parsing and rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Symbols {
    /// Byte representing a dead cell
    pub dead: u8,
    /// Byte representing a living cell
    pub live: u8,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            dead: b'.',
            live: b'X',
        }
    }
}

/// Parse a pattern stream into a fresh grid.
///
/// Reads ROWS x COLS cell bytes. After each row one terminator byte is
/// read off and not inspected; end of stream in that position after the
/// last row is accepted. Any byte outside the alphabet in a cell position,
/// or end of stream before all cells are read, is an error.
pub fn parse<R: Read>(reader: R, symbols: Symbols) -> Result<CellGrid, PatternError> {
    let mut bytes = BufReader::new(reader).bytes();
    let mut grid = CellGrid::new();

    for row in 0..ROWS {
        for col in 0..COLS {
            let byte = match bytes.next() {
                None => return Err(PatternError::TooShort),
                Some(Err(e)) => return Err(PatternError::Io(e)),
                Some(Ok(b)) => b,
            };
            let cell = if byte == symbols.dead {
                Cell::Dead
            } else if byte == symbols.live {
                Cell::Alive
            } else {
                return Err(PatternError::InvalidSymbol {
                    found: byte,
                    row,
                    col,
                });
            };
            grid.set(row, col, cell);
        }
        // Read off the row terminator
        if let Some(Err(e)) = bytes.next() {
            return Err(PatternError::Io(e));
        }
    }

    Ok(grid)
}

/// Render a grid as ROWS lines of COLS symbol bytes, one newline per row.
pub fn render<W: Write>(writer: &mut W, grid: &CellGrid, symbols: Symbols) -> io::Result<()> {
    let mut line = [0u8; COLS + 1];
    line[COLS] = b'\n';
    for row in 0..ROWS {
        for (col, slot) in line[..COLS].iter_mut().enumerate() {
            *slot = if grid.get(row, col).is_alive() {
                symbols.live
            } else {
                symbols.dead
            };
        }
        writer.write_all(&line)?;
    }
    Ok(())
}

/// Render a grid to a `String` using the given alphabet.
pub fn render_to_string(grid: &CellGrid, symbols: Symbols) -> String {
    let mut out = Vec::with_capacity(ROWS * (COLS + 1));
    render(&mut out, grid, symbols).expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("symbols are single bytes")
}

/// Errors that can occur while loading a pattern
#[derive(Debug)]
pub enum PatternError {
    /// The pattern file could not be opened
    FileOpen { path: String, source: io::Error },
    /// The stream ended before every cell was read
    TooShort,
    /// A cell position held a byte outside the alphabet
    InvalidSymbol { found: u8, row: usize, col: usize },
    /// The stream failed mid-read
    Io(io::Error),
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileOpen { path, source } => {
                write!(f, "could not open pattern file {}: {}", path, source)
            }
            Self::TooShort => write!(f, "pattern file is too short"),
            Self::InvalidSymbol { found, row, col } => {
                write!(
                    f,
                    "invalid cell symbol {:?} at [{},{}]",
                    *found as char, row, col
                )
            }
            Self::Io(e) => write!(f, "IO error reading pattern: {}", e),
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileOpen { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PatternError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
