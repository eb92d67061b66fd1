//! A minimax agent for playing the board game 'Connect 4'
//!
//! The agent searches a fixed number of plies ahead with alpha-beta pruning
//! and scores the positions it reaches with a window-counting heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::Board, search::{Engine, EngineConfig}};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // the AI has three in a row along the bottom
//! let board = Board::from_rows(&[
//!     ".......",
//!     ".......",
//!     ".......",
//!     ".......",
//!     "XXX....",
//!     "OOO....",
//! ])?;
//! let mut engine = Engine::new(EngineConfig::default());
//! let (column, score) = engine.best_move(&board)?;
//!
//! assert_eq!((column, score), (3, 1_000_000_000));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod window;

pub mod terminal;

pub mod heuristic;

pub mod search;

pub mod greedy;

pub mod game;

pub mod arena;


pub use board::{Board, Dimensions, Piece};
pub use error::EngineError;
pub use game::Game;
pub use search::{Engine, EngineConfig, SearchResult};
pub use terminal::GameState;

/// The default number of rows on the game board
pub const ROWS: usize = 6;

/// The default number of columns on the game board
pub const COLUMNS: usize = 7;

/// The number of aligned pieces needed to win
pub const WINDOW_LENGTH: usize = 4;

/// The default search depth in plies
pub const SEARCH_DEPTH: usize = 4;

// the default board must fit a window in every direction
const_assert!(ROWS >= WINDOW_LENGTH && COLUMNS >= WINDOW_LENGTH);
