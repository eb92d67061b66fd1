//! Detection of finished games

use crate::board::{Board, Piece};
use crate::window::{self, Orientation};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerWin,
    AiWin,
    Draw,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameState::Playing)
    }
}

/// True if `piece` fills some window in any of the four orientations
pub fn has_four_in_a_row(board: &Board, piece: Piece) -> bool {
    if piece.is_empty() {
        return false;
    }
    Orientation::ALL
        .iter()
        .any(|&orientation| has_line(board, piece, orientation))
}

/// True if `piece` fills some window of the given orientation
pub fn has_line(board: &Board, piece: Piece, orientation: Orientation) -> bool {
    window::windows(board, orientation).any(|w| window::count(&w, piece) == w.len())
}

/// A board is terminal when either side has won or no column is open.
///
/// Both sides are checked, so this also works on positions no legal game
/// could reach.
pub fn is_terminal(board: &Board) -> bool {
    has_four_in_a_row(board, Piece::Player)
        || has_four_in_a_row(board, Piece::Ai)
        || board.is_full()
}

/// Classifies a board. If both sides somehow have a line the AI's is reported.
pub fn outcome(board: &Board) -> GameState {
    if has_four_in_a_row(board, Piece::Ai) {
        GameState::AiWin
    } else if has_four_in_a_row(board, Piece::Player) {
        GameState::PlayerWin
    } else if board.is_full() {
        GameState::Draw
    } else {
        GameState::Playing
    }
}
