//! Error types for the word-frequency pipeline.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WordFreqError>;

/// Errors produced while analysing text or building charts.
#[derive(Error, Debug)]
pub enum WordFreqError {
    /// The caller supplied input a stage cannot accept, e.g. a table
    /// without the word column or a `top_n` of zero.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Segmenter construction or segmentation failed.
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// The chart kind identifier does not name one of the supported kinds.
    #[error("Unsupported chart kind: {0}")]
    UnsupportedChartKind(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WordFreqError {
    /// Create an invalid-argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WordFreqError::InvalidArgument(msg.into())
    }

    /// Create an analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        WordFreqError::Analysis(msg.into())
    }

    /// Create an unsupported-chart-kind error.
    pub fn unsupported_chart_kind<S: Into<String>>(kind: S) -> Self {
        WordFreqError::UnsupportedChartKind(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = WordFreqError::invalid_argument("missing column '词语'");
        assert_eq!(err.to_string(), "Invalid argument: missing column '词语'");

        let err = WordFreqError::unsupported_chart_kind("radar");
        assert_eq!(err.to_string(), "Unsupported chart kind: radar");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: WordFreqError = io.into();
        assert!(matches!(err, WordFreqError::Io(_)));
    }
}
