//! Attack resolution.

use crate::board::Board;
use crate::common::{AttackOutcome, AttackReport, Cell, GameError, Result};

/// Fire at `(row, col)` on `target` without recording the result anywhere else.
///
/// Used for the computer's shots, which keep no memory between turns.
pub fn fire(target: &mut Board, row: usize, col: usize) -> Result<AttackReport> {
    let cell = target.get(row, col)?;
    let outcome = if cell.is_attacked() {
        AttackOutcome::AlreadyAttacked
    } else if cell == Cell::Ship {
        target.set(row, col, Cell::Hit)?;
        AttackOutcome::Hit
    } else {
        target.set(row, col, Cell::Miss)?;
        AttackOutcome::Miss
    };
    let all_ships_sunk = target.all_sunk();
    log::debug!(
        "attack at ({}, {}) -> {:?}, {} ships left",
        row,
        col,
        outcome,
        target.ships_remaining()
    );
    Ok(AttackReport {
        outcome,
        all_ships_sunk,
    })
}

/// Fire at `(row, col)` on `target` and copy the result onto `observation`.
///
/// A repeat attack leaves both boards untouched.
pub fn attack(
    target: &mut Board,
    observation: &mut Board,
    row: usize,
    col: usize,
) -> Result<AttackReport> {
    if observation.size() != target.size() {
        return Err(GameError::BoardSizeMismatch {
            target: target.size(),
            observed: observation.size(),
        });
    }
    let report = fire(target, row, col)?;
    match report.outcome {
        AttackOutcome::Hit => observation.set(row, col, Cell::Hit)?,
        AttackOutcome::Miss => observation.set(row, col, Cell::Miss)?,
        AttackOutcome::AlreadyAttacked => {}
    }
    Ok(report)
}
