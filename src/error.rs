//! Error types for tara-map.

use thiserror::Error;

/// tara-map error type.
///
/// A pairwise alignment that finds no overlap is not an error; it is an
/// expected outcome the assembler recovers from locally. The only fatal
/// assembly failure is a disconnected scanner graph.
#[derive(Error, Debug)]
pub enum TaraError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("report parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("disconnected scanner graph: placed {placed} of {total} scanners")]
    DisconnectedGraph { placed: usize, total: usize },

    #[error("serialization error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for TaraError {
    fn from(e: serde_json::Error) -> Self {
        TaraError::Serialize(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TaraError>;
