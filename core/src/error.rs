//! Error types for seed generation.
//!
//! Failures are classified by where they happen: a missing or unreadable
//! input, an input that is not the expected JSON shape, a year key that is
//! not an integer, or an output that cannot be written.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating seed SQL.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Input file does not exist.
    #[error("input file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    /// Input file exists but could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid JSON or does not have the expected shape.
    #[error("malformed JSON in '{}': {source}", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A year key under a make is not an integer.
    #[error("invalid year '{year}' for make '{make}'")]
    InvalidYear { make: String, year: String },

    /// Output file could not be created or written.
    #[error("failed to write '{}': {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for results with [`SeedError`].
pub type Result<T> = std::result::Result<T, SeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_message_names_path() {
        let err = SeedError::MissingInput {
            path: PathBuf::from("part.json"),
        };
        assert_eq!(err.to_string(), "input file not found: part.json");
    }

    #[test]
    fn test_invalid_year_message() {
        let err = SeedError::InvalidYear {
            make: "Ford".into(),
            year: "20x0".into(),
        };
        assert_eq!(err.to_string(), "invalid year '20x0' for make 'Ford'");
    }

    #[test]
    fn test_malformed_input_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SeedError::MalformedInput {
            path: PathBuf::from("make-year-model.json"),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("malformed JSON in 'make-year-model.json'"));
    }
}
