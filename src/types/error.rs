//! Error types for firstdiff

use std::path::PathBuf;
use thiserror::Error;

/// Error types for firstdiff operations
#[derive(Debug, Error)]
pub enum FirstdiffError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An input file could not be opened
    #[error("Cannot open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line read failed mid-comparison (e.g. invalid UTF-8)
    #[error("Read failed in {path:?} at line {line}: {source}")]
    Read {
        path: PathBuf,
        line: u64,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FirstdiffError {
    /// Check if this error means an input file was missing
    pub fn is_not_found(&self) -> bool {
        match self {
            FirstdiffError::Io(source)
            | FirstdiffError::Open { source, .. }
            | FirstdiffError::Read { source, .. } => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            FirstdiffError::Config(_) => false,
        }
    }

    /// Check if this error is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, FirstdiffError::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_io_error_automatic_conversion() {
        // Test that std::io::Error automatically converts via #[from]
        let io_error = IoError::new(ErrorKind::NotFound, "file not found");
        let error: FirstdiffError = io_error.into();

        assert!(matches!(error, FirstdiffError::Io(_)));
        assert!(error.to_string().contains("IO error"));
        assert!(error.is_not_found());
    }

    #[test]
    fn test_io_error_from_function() {
        // Test using ? operator with io::Error
        fn returns_io_error() -> Result<(), FirstdiffError> {
            let _file = std::fs::File::open("/nonexistent/path/file.txt")?;
            Ok(())
        }

        let result = returns_io_error();
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), FirstdiffError::Io(_)));
    }

    #[test]
    fn test_open_error() {
        let error = FirstdiffError::Open {
            path: PathBuf::from("correct.txt"),
            source: IoError::new(ErrorKind::NotFound, "no such file"),
        };
        assert!(error.to_string().contains("Cannot open"));
        assert!(error.to_string().contains("correct.txt"));
        assert!(error.is_not_found());
    }

    #[test]
    fn test_read_error() {
        let error = FirstdiffError::Read {
            path: PathBuf::from("output.txt"),
            line: 7,
            source: IoError::new(ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };
        assert!(error.to_string().contains("Read failed"));
        assert!(error.to_string().contains("output.txt"));
        assert!(error.to_string().contains("7"));
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_config_error() {
        let error = FirstdiffError::Config("Invalid config file".to_string());
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("Invalid config file"));
        assert!(error.is_config_error());
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_error_trait_implementation() {
        use std::error::Error;

        let error = FirstdiffError::Config("test".to_string());
        let _error_ref: &dyn Error = &error;

        assert!(!error.to_string().is_empty());
    }

    #[test]
    fn test_result_propagation() {
        fn inner_function() -> Result<(), FirstdiffError> {
            Err(FirstdiffError::Config("test error".to_string()))
        }

        fn outer_function() -> Result<(), FirstdiffError> {
            inner_function()?;
            Ok(())
        }

        let result = outer_function();
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), FirstdiffError::Config(_)));
    }
}
