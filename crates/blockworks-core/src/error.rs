//! Error types for blockworks-core

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by catalog operations.
///
/// Every variant is recoverable: a failed operation leaves the store untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Block name was empty after trimming
    #[error("Block name cannot be empty")]
    EmptyName,

    /// A block with the same name (ignoring case) already exists
    #[error("A block with the name '{name}' already exists")]
    DuplicateName { name: String },

    /// No component with a positive quantity was supplied
    #[error("No components entered for block '{name}'")]
    NoComponents { name: String },

    /// No block matched the requested name
    #[error("No block found with the exact name '{name}'")]
    NotFound { name: String },

    /// Sort order selector was not recognised
    #[error("Invalid sort order: '{value}' (expected ascending or descending)")]
    InvalidOrder { value: String },
}
