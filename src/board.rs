use std::fmt;

use crate::error::{EngineError, Result};
use crate::{COLUMNS, ROWS};

/// The contents of a single cell of the grid
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Piece {
    Empty,
    Player,
    Ai,
}

impl Piece {
    pub fn is_empty(&self) -> bool {
        matches!(self, Piece::Empty)
    }

    /// The other side's piece. `Empty` has no opponent and maps to itself.
    pub fn opponent(&self) -> Piece {
        match self {
            Piece::Player => Piece::Ai,
            Piece::Ai => Piece::Player,
            Piece::Empty => Piece::Empty,
        }
    }

    fn symbol(&self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::Player => 'X',
            Piece::Ai => 'O',
        }
    }

    fn from_symbol(symbol: char) -> Option<Piece> {
        match symbol {
            '.' => Some(Piece::Empty),
            'X' | 'x' => Some(Piece::Player),
            'O' | 'o' => Some(Piece::Ai),
            _ => None,
        }
    }
}

/// Size of the grid in tiles
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(EngineError::InvalidDimensions { rows, columns });
        }
        Ok(Self { rows, columns })
    }

    /// The middle column, favoured by the evaluator
    pub fn center_column(&self) -> usize {
        self.columns / 2
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            rows: ROWS,
            columns: COLUMNS,
        }
    }
}

/// A connect 4 grid with gravity
///
/// Row 0 is the bottom of the board. A `Board` is a plain value: searches work
/// on copies produced by [`Board::place`] and never touch the caller's board.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Board {
    dimensions: Dimensions,
    // cells are stored left-to-right, bottom-to-top
    cells: Vec<Piece>,
}

impl Board {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            cells: vec![Piece::Empty; dimensions.rows * dimensions.columns],
        }
    }

    /// Builds a position from a string of 1-indexed columns, alternating
    /// pieces starting with the player
    pub fn from_moves<S: AsRef<str>>(dimensions: Dimensions, moves: S) -> Result<Self> {
        let mut board = Self::new(dimensions);
        let mut piece = Piece::Player;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column) if column >= 1 && column <= dimensions.columns => {
                    board.drop_piece(column - 1, piece)?;
                    piece = piece.opponent();
                }
                Some(column) => {
                    return Err(EngineError::ColumnOutOfRange {
                        column,
                        columns: dimensions.columns,
                    })
                }
                None => return Err(EngineError::InvalidMove(column_char)),
            }
        }
        Ok(board)
    }

    /// Parses a textual grid, top row first. `.` is empty, `X` the player and
    /// `O` the AI. Whitespace inside a row is ignored.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let parsed = rows
            .iter()
            .map(|row| {
                row.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| {
                        Piece::from_symbol(c)
                            .ok_or_else(|| EngineError::InvalidBoard(format!("unknown cell '{}'", c)))
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let columns = parsed.first().map_or(0, |row| row.len());
        let dimensions = Dimensions::new(parsed.len(), columns)?;
        if let Some(row) = parsed.iter().find(|row| row.len() != columns) {
            return Err(EngineError::InvalidBoard(format!(
                "ragged row of width {}, expected {}",
                row.len(),
                columns
            )));
        }

        let mut board = Self::new(dimensions);
        for (depth, row) in parsed.iter().enumerate() {
            let r = dimensions.rows - 1 - depth;
            for (c, &piece) in row.iter().enumerate() {
                board.set(r, c, piece);
            }
        }

        // reject floating pieces
        for c in 0..columns {
            let height = board.height(c);
            if (height..dimensions.rows).any(|r| !board.get(r, c).is_empty()) {
                return Err(EngineError::InvalidBoard(format!(
                    "floating piece in column {}",
                    c + 1
                )));
            }
        }
        Ok(board)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn rows(&self) -> usize {
        self.dimensions.rows
    }

    pub fn columns(&self) -> usize {
        self.dimensions.columns
    }

    pub fn get(&self, row: usize, column: usize) -> Piece {
        self.cells[column + self.dimensions.columns * row]
    }

    fn set(&mut self, row: usize, column: usize, piece: Piece) {
        let columns = self.dimensions.columns;
        self.cells[column + columns * row] = piece;
    }

    /// True if the top cell of `column` is empty. Out of range columns are
    /// never open.
    pub fn is_column_open(&self, column: usize) -> bool {
        column < self.dimensions.columns && self.get(self.dimensions.rows - 1, column).is_empty()
    }

    /// The lowest empty row of `column`
    pub fn landing_row(&self, column: usize) -> Result<usize> {
        if column >= self.dimensions.columns {
            return Err(EngineError::ColumnOutOfRange {
                column: column + 1,
                columns: self.dimensions.columns,
            });
        }
        (0..self.dimensions.rows)
            .find(|&row| self.get(row, column).is_empty())
            .ok_or(EngineError::ColumnFull { column: column + 1 })
    }

    /// Returns a copy of this board with `piece` at (`row`, `column`).
    ///
    /// Gravity is not checked here, the caller is expected to pass the result
    /// of [`Board::landing_row`].
    pub fn place(&self, row: usize, column: usize, piece: Piece) -> Board {
        let mut next = self.clone();
        next.set(row, column, piece);
        next
    }

    /// Drops `piece` into `column` in place, returning the row it landed on
    pub fn drop_piece(&mut self, column: usize, piece: Piece) -> Result<usize> {
        let row = self.landing_row(column)?;
        self.set(row, column, piece);
        Ok(row)
    }

    /// All open columns in ascending order. This order is the tie-break order
    /// of the search.
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..self.dimensions.columns)
            .filter(|&column| self.is_column_open(column))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        !(0..self.dimensions.columns).any(|column| self.is_column_open(column))
    }

    /// Number of pieces in `column`
    pub fn height(&self, column: usize) -> usize {
        (0..self.dimensions.rows)
            .take_while(|&row| !self.get(row, column).is_empty())
            .count()
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|&&cell| cell == piece).count()
    }

    /// The same position with every player and AI piece exchanged
    pub fn swapped(&self) -> Board {
        Board {
            dimensions: self.dimensions,
            cells: self.cells.iter().map(Piece::opponent).collect(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.dimensions.rows).rev() {
            let line: String = (0..self.dimensions.columns)
                .map(|column| self.get(row, column).symbol())
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
