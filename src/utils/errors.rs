use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatpyError {
    // A mandatory child slot was left empty by whoever built the tree
    #[error("Structural error: {node} is missing its {slot}")]
    StructuralError { node: String, slot: &'static str },

    // File and I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("File read error: {0}")]
    FileReadError(String),

    // Tree interchange errors
    #[error("Tree decode error: {0}")]
    DecodeError(#[from] serde_json::Error),
}

impl StatpyError {
    /// Create a structural error naming the offending node and slot
    pub fn structural(node: impl ToString, slot: &'static str) -> Self {
        StatpyError::StructuralError {
            node: node.to_string(),
            slot,
        }
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, StatpyError::StructuralError { .. })
    }
}

// Type alias for Result with StatpyError
pub type StatpyResult<T> = Result<T, StatpyError>;

/// Unwrap a mandatory child slot or report which node left it empty.
pub fn required<'a, T, N: ToString + ?Sized>(
    slot: &'a Option<T>,
    node: &N,
    name: &'static str,
) -> StatpyResult<&'a T> {
    slot.as_ref()
        .ok_or_else(|| StatpyError::structural(node.to_string(), name))
}
