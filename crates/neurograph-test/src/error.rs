//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// An ASCII fixture has rows of different lengths
    #[error("ragged fixture: row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// An ASCII fixture contains a character with no pixel meaning
    #[error("unexpected character '{ch}' at row {row}, column {col}")]
    BadCharacter { ch: char, row: usize, col: usize },

    /// Grid construction failed
    #[error("core error: {0}")]
    Core(#[from] neurograph_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
