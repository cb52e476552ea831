//! Error types for the flashcard engine.

use thiserror::Error;

/// Result type alias using `FlashcardError`.
pub type Result<T> = std::result::Result<T, FlashcardError>;

#[derive(Debug, Error)]
pub enum FlashcardError {
    #[error("unknown term \"{0}\"")]
    UnknownTerm(String),

    #[error("no card has the definition \"{0}\"")]
    DefinitionNotFound(String),

    #[error("line {line} is not in term~definition~errors form: {content}")]
    MalformedLine { line: usize, content: String },

    #[error("line {line} has an invalid error count: {value}")]
    InvalidErrorCount { line: usize, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
