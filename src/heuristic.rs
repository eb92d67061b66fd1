//! Static evaluation of non-terminal positions
//!
//! A position is scored for one side by summing a bonus for each of its pieces
//! in the center column and a score for every window on the board.

use crate::board::{Board, Piece};
use crate::window::{self, Window};

/// Score contributions used by [`score_position`]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Weights {
    /// per piece in the center column
    pub center: i32,
    /// window filled by the evaluated side
    pub four: i32,
    /// three pieces and one empty cell
    pub three: i32,
    /// two pieces and two empty cells
    pub two: i32,
    /// three opponent pieces and one empty cell
    pub opponent_three: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            center: 3,
            four: 100,
            three: 5,
            two: 2,
            opponent_three: 4,
        }
    }
}

impl Weights {
    /// Scores a single window for `piece`
    pub fn score_window(&self, window: &Window, piece: Piece) -> i32 {
        let own = window::count(window, piece);
        let empty = window::count(window, Piece::Empty);
        let opponent = window::count(window, piece.opponent());

        match (own, empty, opponent) {
            (4, _, _) => self.four,
            (3, 1, _) => self.three,
            (2, 2, _) => self.two,
            (_, 1, 3) => self.opponent_three,
            _ => 0,
        }
    }
}

/// Scores `board` from the point of view of `piece` with the default weights
pub fn score_position(board: &Board, piece: Piece) -> i32 {
    score_position_with(board, piece, &Weights::default())
}

pub fn score_position_with(board: &Board, piece: Piece, weights: &Weights) -> i32 {
    let center = board.dimensions().center_column();
    let center_count = (0..board.rows())
        .filter(|&row| board.get(row, center) == piece)
        .count() as i32;

    let windows: i32 = window::all_windows(board)
        .map(|w| weights.score_window(&w, piece))
        .sum();

    center_count * weights.center + windows
}
