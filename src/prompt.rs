//! Start-up tutorial prompt and the row/column input loop.

use crate::common::{Cell, GameError, Result};
use crate::console::{InputSource, OutputSink};
use crate::render::{Style, StyledText};

fn read_required<I: InputSource + ?Sized>(input: &mut I) -> Result<String> {
    input.next_line()?.ok_or(GameError::InputClosed)
}

/// Parse a 1-based board index, returning the 0-based index if it is on the board.
pub fn parse_index(line: &str, size: usize) -> Option<usize> {
    let n: i64 = line.trim().parse().ok()?;
    if n < 1 || n > size as i64 {
        return None;
    }
    Some(n as usize - 1)
}

fn tutorial(size: usize) -> StyledText {
    let mut text = StyledText::plain("\nTutorial:\n");
    text.push_plain(format!("You and the computer each get a {size}x{size} grid.\n"));
    for (i, cell) in [Cell::Ship, Cell::Hit, Cell::Miss, Cell::Empty].into_iter().enumerate() {
        if i > 0 {
            text.push_plain(", ");
        }
        let name = match cell {
            Cell::Ship => "Ship",
            Cell::Hit => "Hit",
            Cell::Miss => "Miss",
            Cell::Empty => "Empty",
        };
        text.push(format!("{} = {}", cell.glyph(), name), Style::from(cell));
    }
    text.push_plain(".\n");
    text.push_plain("Take turns guessing enemy positions until all ships are sunk.\n");
    text.push_plain("Good luck!\n");
    text
}

/// Greet the player and show the tutorial if they answer "y".
///
/// Returns whether the tutorial was shown.
pub fn intro<I, O>(size: usize, input: &mut I, output: &mut O) -> Result<bool>
where
    I: InputSource + ?Sized,
    O: OutputSink + ?Sized,
{
    output.emit(&StyledText::plain("Welcome to Battleship!\n"))?;
    output.emit(&StyledText::plain(
        "Would you like to see the tutorial? (y/n): ",
    ))?;
    let wants = read_required(input)?.trim().eq_ignore_ascii_case("y");
    if wants {
        output.emit(&tutorial(size))?;
    }
    Ok(wants)
}

/// Ask for a row and a column until both are on the board.
///
/// Both prompts are always shown before validating, and the pair is retried
/// together. Returns 0-based `(row, col)`.
pub fn read_coordinate<I, O>(size: usize, input: &mut I, output: &mut O) -> Result<(usize, usize)>
where
    I: InputSource + ?Sized,
    O: OutputSink + ?Sized,
{
    loop {
        output.emit(&StyledText::plain(format!("Enter row (1-{size}): ")))?;
        let row_line = read_required(input)?;
        output.emit(&StyledText::plain(format!("Enter column (1-{size}): ")))?;
        let col_line = read_required(input)?;

        match (parse_index(&row_line, size), parse_index(&col_line, size)) {
            (Some(row), Some(col)) => return Ok((row, col)),
            _ => {
                log::debug!("rejected coordinate {:?}, {:?}", row_line, col_line);
                output.emit(&StyledText::plain("Invalid coordinates. Try again.\n"))?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{CapturedOutput, ScriptedInput};

    #[test]
    fn tutorial_answer_ignores_case_and_padding() {
        for (answer, shown) in [(" y ", true), ("Y", true), ("yes", false), ("n", false), ("", false)] {
            let mut input = ScriptedInput::new([answer]);
            let mut output = CapturedOutput::new();
            assert_eq!(intro(4, &mut input, &mut output).unwrap(), shown, "answer {answer:?}");
            assert_eq!(output.transcript().contains("Tutorial:"), shown);
        }
    }

    #[test]
    fn parse_index_bounds() {
        assert_eq!(parse_index("1", 4), Some(0));
        assert_eq!(parse_index(" 4 ", 4), Some(3));
        assert_eq!(parse_index("0", 4), None);
        assert_eq!(parse_index("5", 4), None);
        assert_eq!(parse_index("-2", 4), None);
        assert_eq!(parse_index("abc", 4), None);
        assert_eq!(parse_index("", 4), None);
    }
}
