//! Depth-limited minimax search with alpha-beta pruning

use log::{debug, info, warn};

use std::time::{Duration, Instant};

use crate::board::{Board, Piece};
use crate::error::{EngineError, Result};
use crate::heuristic::{self, Weights};
use crate::terminal;
use crate::SEARCH_DEPTH;

/// Score of a position the AI has won. Lost positions score the negation.
pub const WIN_SCORE: i32 = 1_000_000_000;

/// Initial alpha of a top-level search
pub const NEG_INFINITY: i32 = i32::MIN;
/// Initial beta of a top-level search
pub const INFINITY: i32 = i32::MAX;

/// The outcome of searching one node: the chosen column (none at a leaf) and
/// the value of the node for the AI
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i32,
}

/// Settings of an [`Engine`]
#[derive(Copy, Clone, Debug)]
pub struct EngineConfig {
    pub depth: usize,
    pub weights: Weights,
    /// Stop evaluating further moves once this much time has passed
    pub time_limit: Option<Duration>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: SEARCH_DEPTH,
            weights: Weights::default(),
            time_limit: None,
        }
    }
}

impl EngineConfig {
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }
}

/// Searches `board` to `depth` plies with the default weights and no deadline.
///
/// `maximizing` is true when the AI is to move. Top-level calls pass
/// [`NEG_INFINITY`] and [`INFINITY`] as the window.
pub fn search(board: &Board, depth: usize, maximizing: bool, alpha: i32, beta: i32) -> SearchResult {
    Search::new(Weights::default(), None).minimax(board, depth, maximizing, alpha, beta)
}

// state shared by every node of one search
struct Search {
    weights: Weights,
    deadline: Option<Instant>,
    node_count: usize,
    timed_out: bool,
}

impl Search {
    fn new(weights: Weights, deadline: Option<Instant>) -> Self {
        Self {
            weights,
            deadline,
            node_count: 0,
            timed_out: false,
        }
    }

    fn out_of_time(&mut self) -> bool {
        if !self.timed_out {
            if let Some(deadline) = self.deadline {
                self.timed_out = Instant::now() >= deadline;
            }
        }
        self.timed_out
    }

    fn leaf_value(&self, board: &Board) -> i32 {
        if terminal::has_four_in_a_row(board, Piece::Ai) {
            WIN_SCORE
        } else if terminal::has_four_in_a_row(board, Piece::Player) {
            -WIN_SCORE
        } else if board.is_full() {
            0
        } else {
            heuristic::score_position_with(board, Piece::Ai, &self.weights)
        }
    }

    fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> SearchResult {
        self.node_count += 1;

        if depth == 0 || terminal::is_terminal(board) {
            return SearchResult {
                column: None,
                score: self.leaf_value(board),
            };
        }

        // a non-terminal board always has an open column
        let valid_columns = board.valid_columns();
        debug_assert!(!valid_columns.is_empty());
        let mut best_column = valid_columns[0];
        let (piece, mut best) = if maximizing {
            (Piece::Ai, NEG_INFINITY)
        } else {
            (Piece::Player, INFINITY)
        };

        for (i, &column) in valid_columns.iter().enumerate() {
            // always finish the first move so there is a value to return
            if i > 0 && self.out_of_time() {
                break;
            }
            // the landing row of an open column is its height
            debug_assert!(board.is_column_open(column));
            let row = board.height(column);
            let next = board.place(row, column, piece);
            let score = self.minimax(&next, depth - 1, !maximizing, alpha, beta).score;

            if maximizing {
                if score > best {
                    best = score;
                    best_column = column;
                }
                alpha = alpha.max(best);
            } else {
                if score < best {
                    best = score;
                    best_column = column;
                }
                beta = beta.min(best);
            }

            // the opponent will never allow this line, skip the remaining moves
            if alpha >= beta {
                break;
            }
        }

        SearchResult {
            column: Some(best_column),
            score: best,
        }
    }
}

/// Chooses moves for one side of a game by alpha-beta search
#[derive(Clone, Debug)]
pub struct Engine {
    config: EngineConfig,

    /// The number of nodes searched by this `Engine` so far (for diagnostics only)
    pub node_count: usize,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            node_count: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs one search node with this engine's weights and time limit,
    /// exactly as [`search`] does
    pub fn search(
        &mut self,
        board: &Board,
        depth: usize,
        maximizing: bool,
        alpha: i32,
        beta: i32,
    ) -> SearchResult {
        let deadline = self.config.time_limit.map(|limit| Instant::now() + limit);
        let mut search = Search::new(self.config.weights, deadline);
        let result = search.minimax(board, depth, maximizing, alpha, beta);

        self.node_count += search.node_count;
        if search.timed_out {
            warn!(
                "search stopped by time limit after {} nodes, result may be inexact",
                search.node_count
            );
        }
        result
    }

    /// Picks the AI's move on `board`, returning the column and its score.
    ///
    /// Fails with [`EngineError::InvalidState`] if no column is open. A board
    /// that is already won is scored as a leaf and its first open column is
    /// reported.
    pub fn best_move(&mut self, board: &Board) -> Result<(usize, i32)> {
        let first_column = *board
            .valid_columns()
            .first()
            .ok_or(EngineError::InvalidState)?;

        let start = Instant::now();
        let nodes_before = self.node_count;
        let result = self.search(board, self.config.depth, true, NEG_INFINITY, INFINITY);
        // depth 0 and already decided boards only evaluate the board itself
        let column = result.column.unwrap_or(first_column);

        debug!(
            "searched {} nodes to depth {} in {:.3}ms",
            self.node_count - nodes_before,
            self.config.depth,
            start.elapsed().as_secs_f64() * 1000.0
        );
        info!("best move: column {} (score {})", column + 1, result.score);
        Ok((column, result.score))
    }

    /// Picks a move for whichever side owns `piece` by searching the board
    /// with the pieces exchanged when needed
    pub fn best_move_for(&mut self, board: &Board, piece: Piece) -> Result<(usize, i32)> {
        match piece {
            Piece::Ai => self.best_move(board),
            Piece::Player => self.best_move(&board.swapped()),
            Piece::Empty => Err(EngineError::InvalidState),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
