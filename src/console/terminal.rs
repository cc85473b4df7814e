use std::io::{self, BufRead, StdinLock, Stdout, Write};

use colored::{Color, Colorize};

use crate::console::{InputSource, OutputSink};
use crate::render::{Style, StyledText};

/// Line reader over any buffered reader, stdin in the binary.
pub struct TerminalInput<R> {
    reader: R,
}

impl<R: BufRead> TerminalInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl TerminalInput<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> InputSource for TerminalInput<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Writer that colors styled spans with ANSI escape codes.
/// `colored` itself drops the codes when stdout is not a terminal.
pub struct TerminalOutput<W> {
    writer: W,
}

impl<W: Write> TerminalOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TerminalOutput<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

fn color_for(style: Style) -> Option<Color> {
    match style {
        Style::Plain => None,
        Style::Ship => Some(Color::Green),
        Style::Hit => Some(Color::Red),
        Style::Miss => Some(Color::Yellow),
        Style::Empty => Some(Color::Cyan),
    }
}

impl<W: Write> OutputSink for TerminalOutput<W> {
    fn emit(&mut self, text: &StyledText) -> io::Result<()> {
        for span in text.spans() {
            match color_for(span.style) {
                Some(color) => write!(self.writer, "{}", span.text.as_str().color(color))?,
                None => self.writer.write_all(span.text.as_bytes())?,
            }
        }
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_line_endings_and_reports_eof() {
        let mut input = TerminalInput::new(&b"3\r\nabc\n"[..]);
        assert_eq!(input.next_line().unwrap().as_deref(), Some("3"));
        assert_eq!(input.next_line().unwrap().as_deref(), Some("abc"));
        assert_eq!(input.next_line().unwrap(), None);
    }

    #[test]
    fn plain_spans_have_no_escape_codes() {
        colored::control::set_override(true);
        let mut written = Vec::new();
        let mut text = StyledText::plain("grid ");
        text.push_plain("row\n");
        TerminalOutput::new(&mut written).emit(&text).unwrap();
        assert_eq!(String::from_utf8(written).unwrap(), "grid row\n");
    }

    #[test]
    fn colored_output_wraps_styled_spans() {
        colored::control::set_override(true);
        let mut written = Vec::new();
        TerminalOutput::new(&mut written)
            .emit(&StyledText::styled("X", Style::Hit))
            .unwrap();
        assert_eq!(String::from_utf8(written).unwrap(), "\u{1b}[31mX\u{1b}[0m");
    }
}
