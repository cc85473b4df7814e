//! Line-oriented input and styled output used by the turn loop.
//!
//! The game only talks to these traits, so the terminal front end and the
//! in-memory harness are interchangeable.

use std::io;

use crate::render::StyledText;

pub trait InputSource {
    /// Next line without its line terminator, or `None` once input is exhausted.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

pub trait OutputSink {
    /// Write `text` exactly as given; nothing is appended.
    fn emit(&mut self, text: &StyledText) -> io::Result<()>;
}

pub mod in_memory;
pub mod terminal;

pub use in_memory::{CapturedOutput, Discard, ScriptedInput};
pub use terminal::{TerminalInput, TerminalOutput};
