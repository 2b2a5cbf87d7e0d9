//! Error types for the LRIS parser.
//!
//! Only run-level failures are errors. Row-level problems (missing
//! cultivator text, no plot references, a record that fails to decode)
//! are reported as [`RowOutcome`](crate::types::RowOutcome) values so a
//! single bad row never aborts the run.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the LRIS parser library.
#[derive(Debug, Error)]
pub enum LrisError {
    /// The input could not be opened or its header could not be read.
    #[error("Cannot read source {}: {source}", .path.display())]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Invalid state code for identifier generation.
    #[error("Invalid state code: '{0}'. Expected two uppercase letters (e.g., JK)")]
    InvalidStateCode(String),

    /// Invalid district code for identifier generation.
    #[error("Invalid district code: '{0}'. Expected three uppercase letters (e.g., BAR)")]
    InvalidDistrictCode(String),

    /// Output directory does not exist.
    #[error("Output directory does not exist: {}", .0.display())]
    MissingOutputDir(PathBuf),

    /// Keyword table could not be compiled into a pattern.
    #[error("Invalid keyword pattern for {category}: {source}")]
    KeywordPattern {
        category: &'static str,
        #[source]
        source: regex::Error,
    },

    /// CSV writing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for LRIS parser operations.
pub type Result<T> = std::result::Result<T, LrisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LrisError::InvalidStateCode("jk".to_string());
        assert!(err.to_string().contains("'jk'"));
        assert!(err.to_string().contains("two uppercase letters"));
    }

    #[test]
    fn test_missing_output_dir_display() {
        let err = LrisError::MissingOutputDir(PathBuf::from("/no/such/dir"));
        assert_eq!(
            err.to_string(),
            "Output directory does not exist: /no/such/dir"
        );
    }

    #[test]
    fn test_unreadable_source_display() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = LrisError::UnreadableSource {
            path: PathBuf::from("records.csv"),
            source: csv::Error::from(io),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Cannot read source records.csv"));
        assert!(msg.contains("missing"));
    }
}
