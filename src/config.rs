use crate::common::{GameError, Result};

pub const BOARD_SIZE: usize = 4;
pub const NUM_SHIPS: usize = 4;

pub const EMPTY_GLYPH: char = '0';
pub const SHIP_GLYPH: char = 'S';
pub const HIT_GLYPH: char = 'X';
pub const MISS_GLYPH: char = 'M';

/// Board dimension and fleet size for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub ships: usize,
}

impl GameConfig {
    pub const fn new(size: usize, ships: usize) -> Self {
        Self { size, ships }
    }

    pub const fn total_cells(&self) -> usize {
        self.size * self.size
    }

    /// Reject layouts that could never be filled: an empty board, or more
    /// ships than cells.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.ships > self.total_cells() {
            return Err(GameError::InvalidConfiguration {
                size: self.size,
                ships: self.ships,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(BOARD_SIZE, NUM_SHIPS)
    }
}
