//! The authoritative state of a game in progress

use crate::board::{Board, Dimensions, Piece};
use crate::error::{EngineError, Result};
use crate::terminal::{self, GameState};

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Piece,
    num_moves: usize,
    state: GameState,
}

impl Game {
    /// Starts an empty game with `first` to move
    pub fn new(dimensions: Dimensions, first: Piece) -> Self {
        Self::from_board(Board::new(dimensions), first)
    }

    /// Continues a game from an existing position
    pub fn from_board(board: Board, to_move: Piece) -> Self {
        let num_moves = board.count(Piece::Player) + board.count(Piece::Ai);
        let state = terminal::outcome(&board);
        Self {
            board,
            to_move,
            num_moves,
            state,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Piece {
        self.to_move
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Plays a 0-indexed column for the side to move
    pub fn play(&mut self, column: usize) -> Result<GameState> {
        if self.state.is_over() {
            return Err(EngineError::GameOver);
        }
        if column >= self.board.columns() {
            return Err(EngineError::ColumnOutOfRange {
                column: column + 1,
                columns: self.board.columns(),
            });
        }
        if !self.board.is_column_open(column) {
            return Err(EngineError::ColumnFull { column: column + 1 });
        }

        self.board.drop_piece(column, self.to_move)?;
        self.num_moves += 1;
        self.to_move = self.to_move.opponent();
        self.state = terminal::outcome(&self.board);

        Ok(self.state)
    }

    /// Plays a 1-indexed column as typed by a player
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if column_one_indexed < 1 || column_one_indexed > self.board.columns() {
            return Err(EngineError::ColumnOutOfRange {
                column: column_one_indexed,
                columns: self.board.columns(),
            });
        }
        self.play(column_one_indexed - 1)
    }
}
