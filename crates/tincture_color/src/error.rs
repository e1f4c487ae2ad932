//! # Color Error Types
//!
//! All errors that can occur while building or reading a color.

use thiserror::Error;

/// Errors that can occur in the color model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// A channel sequence did not have exactly four components.
    #[error("invalid color input: expected 4 components, got {len}")]
    InvalidInput {
        /// Number of components actually supplied.
        len: usize,
    },

    /// The operand is neither a channel sequence nor a packed color.
    #[error("unsupported color operand: {found}")]
    Unsupported {
        /// Description of what was supplied instead.
        found: String,
    },
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
