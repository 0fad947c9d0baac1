//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title text contains an interior NUL byte, which the
    /// terminator-delimited wire format cannot carry.
    #[error("task title must not contain NUL bytes")]
    TitleContainsNul,
}
