//! Enumeration of every run of [`WINDOW_LENGTH`] cells on a board

use crate::board::{Board, Piece};
use crate::WINDOW_LENGTH;

/// The four directions a line can run in
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// bottom-left to top-right
    Ascending,
    /// top-left to bottom-right
    Descending,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::Ascending,
        Orientation::Descending,
    ];

    // (row step, column step)
    fn step(&self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::Ascending => (1, 1),
            Orientation::Descending => (-1, 1),
        }
    }
}

/// The contents of one window
pub type Window = [Piece; WINDOW_LENGTH];

/// Every window of `orientation` on the board, bottom-left first
pub fn windows(board: &Board, orientation: Orientation) -> impl Iterator<Item = Window> + '_ {
    let (rows, columns) = (board.rows() as isize, board.columns() as isize);
    let (dr, dc) = orientation.step();
    let span = WINDOW_LENGTH as isize - 1;

    (0..rows)
        .flat_map(move |row| (0..columns).map(move |column| (row, column)))
        .filter(move |&(row, column)| {
            let (end_row, end_column) = (row + dr * span, column + dc * span);
            end_row >= 0 && end_row < rows && end_column < columns
        })
        .map(move |(row, column)| {
            let mut window = [Piece::Empty; WINDOW_LENGTH];
            for (i, cell) in window.iter_mut().enumerate() {
                let i = i as isize;
                *cell = board.get((row + dr * i) as usize, (column + dc * i) as usize);
            }
            window
        })
}

/// Every window on the board in all four orientations
pub fn all_windows(board: &Board) -> impl Iterator<Item = Window> + '_ {
    Orientation::ALL
        .iter()
        .flat_map(move |&orientation| windows(board, orientation))
}

/// Number of cells in `window` holding `piece`
pub fn count(window: &Window, piece: Piece) -> usize {
    window.iter().filter(|&&cell| cell == piece).count()
}
