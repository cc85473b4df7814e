use std::collections::VecDeque;
use std::io;

use crate::console::{InputSource, OutputSink};
use crate::render::StyledText;

/// Input fed from a fixed list of lines.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Records everything emitted.
#[derive(Debug, Default, Clone)]
pub struct CapturedOutput {
    emitted: Vec<StyledText>,
}

impl CapturedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emitted(&self) -> &[StyledText] {
        &self.emitted
    }

    /// Everything written so far as plain text.
    pub fn transcript(&self) -> String {
        self.emitted.iter().map(ToString::to_string).collect()
    }
}

impl OutputSink for CapturedOutput {
    fn emit(&mut self, text: &StyledText) -> io::Result<()> {
        self.emitted.push(text.clone());
        Ok(())
    }
}

/// Sink that drops all output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl OutputSink for Discard {
    fn emit(&mut self, _text: &StyledText) -> io::Result<()> {
        Ok(())
    }
}
