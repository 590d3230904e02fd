//! Error types for die construction.

/// Errors that can occur when building a die.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DieError {
    /// The requested side count is outside the supported range.
    #[error("{parameter} must be between {min} and {max}, got {value}")]
    InvalidSideCount {
        /// Name of the rejected parameter.
        parameter: &'static str,
        /// The value that was passed in.
        value: u32,
        /// Smallest accepted side count.
        min: u8,
        /// Largest accepted side count.
        max: u8,
    },
}

/// Convenience result type for die operations.
pub type DieResult<T> = Result<T, DieError>;
