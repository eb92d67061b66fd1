/// Errors raised by the board model and the engine.
///
/// Column numbers carried in errors are 1-indexed, as shown to players.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid move, column {column} out of range. Columns must be between 1 and {columns}")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("Invalid move, column {column} full")]
    ColumnFull { column: usize },

    #[error("no valid move: the board has no open column or the game is already over")]
    InvalidState,

    #[error("invalid board dimensions {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("could not parse '{0}' as a valid move")]
    InvalidMove(char),

    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("the game is over")]
    GameOver,
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
