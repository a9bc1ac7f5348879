//! Error types for the compiler.
//!
//! Only configuration mistakes and filesystem failures are errors. Malformed
//! call expressions and documents that cannot be split degrade gracefully and
//! never surface here.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the compiler library.
#[derive(Debug, Error)]
pub enum CompilerError {
    /// Size budget must be a positive character count.
    #[error("Invalid size budget: {0}. Expected a positive number of characters")]
    InvalidBudget(usize),

    /// Split threshold must lie in (0, 1].
    #[error("Invalid split threshold: {0}. Expected a ratio in (0, 1]")]
    InvalidThreshold(f64),

    /// A required source directory does not exist.
    #[error("Source directory not found: {}", .path.display())]
    MissingSource { path: PathBuf },

    /// A walked path could not be expressed relative to its root.
    #[error("Path {} is not inside the source tree", .0.display())]
    InvalidPath(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal failed.
    #[error("Directory traversal failed: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Result type alias for compiler operations.
pub type Result<T> = std::result::Result<T, CompilerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CompilerError::InvalidThreshold(1.5);
        assert!(err.to_string().contains("1.5"));
        assert!(err.to_string().contains("(0, 1]"));
    }

    #[test]
    fn test_missing_source_display() {
        let err = CompilerError::MissingSource {
            path: PathBuf::from("agents"),
        };
        assert_eq!(err.to_string(), "Source directory not found: agents");
    }
}
