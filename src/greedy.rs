//! A one-ply move picker that only looks at the position after its own move

use crate::board::{Board, Piece};
use crate::error::{EngineError, Result};
use crate::heuristic::{self, Weights};

/// Picks the column whose resulting position scores best for `piece`.
///
/// Ties go to the lowest column.
pub fn pick_best_move(board: &Board, piece: Piece, weights: &Weights) -> Result<usize> {
    let valid_columns = board.valid_columns();
    let mut best_column = *valid_columns.first().ok_or(EngineError::InvalidState)?;
    let mut best_score = i32::MIN;

    for &column in valid_columns.iter() {
        let row = board.landing_row(column)?;
        let score = heuristic::score_position_with(&board.place(row, column, piece), piece, weights);
        if score > best_score {
            best_score = score;
            best_column = column;
        }
    }
    Ok(best_column)
}
