use thiserror::Error;

/// Errors reported by the board oracle and the search engines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    /// A piece was dropped into a full or non-existent column.
    #[error("column {column} is full or out of range")]
    InvalidMove { column: usize },
    /// The search finished without settling on any column, e.g. because the game is already over.
    #[error("search finished without finding a playable column")]
    NoMoveFound,
    /// A backpropagation path points at a child that does not exist.
    #[error("path step {depth} refers to missing child {index}")]
    InvalidPath { depth: usize, index: usize },
    /// The text handed to the board parser is not a well-formed board.
    #[error("cannot parse board: {0}")]
    ParseBoard(String),
}
