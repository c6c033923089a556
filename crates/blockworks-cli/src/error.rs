//! Error types for blockworks-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from blockworks-core
    #[error(transparent)]
    Core(#[from] blockworks_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Interactive prompt error
    #[error("Interactive prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_pass_through_unchanged() {
        let error = CliError::from(blockworks_core::Error::NotFound {
            name: "Drill".into(),
        });
        assert_eq!(
            error.to_string(),
            "No block found with the exact name 'Drill'"
        );
    }

    #[test]
    fn test_user_error() {
        let error = CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }
}
