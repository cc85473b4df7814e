//! Common types for the game: cell states, attack outcomes and errors.

use crate::config::{EMPTY_GLYPH, HIT_GLYPH, MISS_GLYPH, SHIP_GLYPH};
use thiserror::Error;

/// State of a single board cell.
///
/// Attacks move `Empty` to `Miss` and `Ship` to `Hit`; nothing else changes a cell
/// once the fleet is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
}

impl Cell {
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => EMPTY_GLYPH,
            Cell::Ship => SHIP_GLYPH,
            Cell::Hit => HIT_GLYPH,
            Cell::Miss => MISS_GLYPH,
        }
    }

    /// Whether this cell has already been fired upon.
    pub const fn is_attacked(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// What a single attack did to the target cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// A ship cell was struck.
    Hit,
    /// Open water was struck.
    Miss,
    /// The cell had been attacked before; neither board changed.
    AlreadyAttacked,
}

/// Result of resolving one attack against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackReport {
    pub outcome: AttackOutcome,
    pub all_ships_sunk: bool,
}

impl AttackReport {
    pub fn is_hit(&self) -> bool {
        self.outcome == AttackOutcome::Hit
    }
}

/// Errors returned by board setup, attack resolution and the turn loop.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("cannot place {ships} ships on a {size}x{size} board")]
    InvalidConfiguration { size: usize, ships: usize },
    #[error("coordinate ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error("observation board is {observed}x{observed} but target is {target}x{target}")]
    BoardSizeMismatch { target: usize, observed: usize },
    #[error("input closed while waiting for a move")]
    InputClosed,
    #[error("console I/O failed")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, GameError>;
