//! Engine error types
//!
//! Configuration and language failures are fatal to a call and surface as
//! [`EngineError`]. Retrieval failures are [`RetrievalError`]s; the
//! pipeline logs and absorbs them so one bad query or URL never aborts a
//! batch.

use refmark_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Language resolution or language file error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// The worker pool could not be built
    #[error("thread pool error: {0}")]
    ThreadPool(String),

    /// Report serialization failed
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Serialization(err.to_string())
    }
}

/// Failure of a search or fetch collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RetrievalError {
    /// A search query could not be answered
    #[error("search failed for query '{query}': {reason}")]
    Search {
        /// The query that was sent
        query: String,
        /// What went wrong
        reason: String,
    },

    /// A candidate document could not be fetched
    #[error("fetch failed for {url}: {reason}")]
    Fetch {
        /// The URL that was requested
        url: String,
        /// What went wrong
        reason: String,
    },
}

impl RetrievalError {
    pub fn search(query: impl Into<String>, reason: impl Into<String>) -> Self {
        RetrievalError::Search {
            query: query.into(),
            reason: reason.into(),
        }
    }

    pub fn fetch(url: impl Into<String>, reason: impl Into<String>) -> Self {
        RetrievalError::Fetch {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_converts() {
        let err: EngineError = CoreError::UnknownLanguage { code: "xx".into() }.into();
        assert!(matches!(err, EngineError::Core(_)));
        assert_eq!(err.to_string(), "core error: unknown language: xx");
    }

    #[test]
    fn test_retrieval_error_messages() {
        assert_eq!(
            RetrievalError::fetch("https://a.example/", "timed out").to_string(),
            "fetch failed for https://a.example/: timed out"
        );
        assert_eq!(
            RetrievalError::search("some words", "quota").to_string(),
            "search failed for query 'some words': quota"
        );
    }
}
