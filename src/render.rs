//! Turn boards and messages into styled text.
//!
//! Styling is kept abstract here; the terminal sink decides what each
//! [`Style`] looks like.

use core::fmt;

use crate::board::Board;
use crate::common::Cell;

/// Presentation role of a span of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Ship,
    Hit,
    Miss,
    Empty,
}

impl From<Cell> for Style {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => Style::Empty,
            Cell::Ship => Style::Ship,
            Cell::Hit => Style::Hit,
            Cell::Miss => Style::Miss,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

/// Ordered run of styled spans. `Display` prints the bare text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    spans: Vec<Span>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Style::Plain)
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        let mut out = Self::new();
        out.push(text, style);
        out
    }

    pub fn push(&mut self, text: impl Into<String>, style: Style) -> &mut Self {
        self.spans.push(Span {
            text: text.into(),
            style,
        });
        self
    }

    pub fn push_plain(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(text, Style::Plain)
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}

/// How a cell is shown. Hidden ships look like open water.
fn visible(cell: Cell, reveal_ships: bool) -> Cell {
    if cell == Cell::Ship && !reveal_ships {
        Cell::Empty
    } else {
        cell
    }
}

/// Render `board` one row per line, cells separated by a single space.
pub fn render(board: &Board, reveal_ships: bool) -> StyledText {
    let mut out = StyledText::new();
    for row in board.rows() {
        for (i, &cell) in row.iter().enumerate() {
            if i > 0 {
                out.push_plain(" ");
            }
            let shown = visible(cell, reveal_ships);
            out.push(shown.glyph().to_string(), Style::from(shown));
        }
        out.push_plain("\n");
    }
    out
}
