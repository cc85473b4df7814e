//! Square board of cell states, plus random fleet placement.

use crate::common::{Cell, GameError, Result};
use crate::config::GameConfig;
use rand::Rng;

/// A `size x size` grid stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board of open water.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Create a board with ships at exactly the given coordinates.
    pub fn with_ships(size: usize, ships: &[(usize, usize)]) -> Result<Self> {
        let mut board = Board::new(size);
        for &(row, col) in ships {
            board.set(row, col, Cell::Ship)?;
        }
        Ok(board)
    }

    /// Scatter `config.ships` single-cell ships over distinct random cells.
    ///
    /// Colliding picks are redrawn. The configuration is checked first so the
    /// redraw loop always has a free cell to land on.
    pub fn random<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let mut board = Board::new(config.size);
        let mut placed = 0;
        while placed < config.ships {
            let row = rng.random_range(0..config.size);
            let col = rng.random_range(0..config.size);
            if board.get(row, col)? == Cell::Empty {
                board.set(row, col, Cell::Ship)?;
                placed += 1;
            }
        }
        log::debug!("placed {} ships on a {}x{} board", placed, config.size, config.size);
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.size || col >= self.size {
            return Err(GameError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        let idx = self.index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Number of cells currently in state `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Ship cells not yet hit.
    pub fn ships_remaining(&self) -> usize {
        self.count(Cell::Ship)
    }

    /// Returns `true` when no `Ship` cell is left.
    pub fn all_sunk(&self) -> bool {
        !self.cells.contains(&Cell::Ship)
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks(0) panics; a zero-sized board has no rows anyway
        self.cells.chunks(self.size.max(1))
    }
}

/// Build a board for `config`, placing the fleet at random.
pub fn create_board<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Board> {
    Board::random(config, rng)
}
