//! Error types for ts3query
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using QueryError
pub type Result<T> = std::result::Result<T, QueryError>;

/// Unified error type for ts3query operations
#[derive(Debug, Error)]
pub enum QueryError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors (handshake, status line, framing)
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Codec Contract Errors
    // -------------------------------------------------------------------------
    #[error("Unknown attribute '{key}' in: {attributes}")]
    UnknownAttribute { key: String, attributes: String },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field '{0}' cannot be changed by an edit")]
    ImmutableField(String),

    #[error("No fields selected for serialization")]
    EmptyFieldList,

    // -------------------------------------------------------------------------
    // Value Conversion Errors
    // -------------------------------------------------------------------------
    #[error("Invalid number for '{key}': {value:?}")]
    InvalidNumber { key: String, value: String },

    #[error("Invalid boolean for '{key}': {value:?} (expected \"0\" or \"1\")")]
    InvalidBool { key: String, value: String },

    #[error("Invalid escape sequence '\\{found}' at byte {position}")]
    InvalidEscape { position: usize, found: char },

    // -------------------------------------------------------------------------
    // Remote Errors
    // -------------------------------------------------------------------------
    #[error("Server error {id}: {message}")]
    Remote { id: u32, message: String },
}

impl QueryError {
    /// True when the server rejected an otherwise well-formed command
    pub fn is_remote(&self) -> bool {
        matches!(self, QueryError::Remote { .. })
    }
}
