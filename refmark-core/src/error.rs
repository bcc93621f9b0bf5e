//! Error types for the fingerprinting core
//!
//! Only the language boundary can fail. Every algorithmic stage is a total
//! function over well-formed input and returns plain values.

use thiserror::Error;

/// Errors raised while resolving or loading language configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// No language profile is registered under this code or alias
    #[error("unknown language: {code}")]
    UnknownLanguage {
        /// The code that was looked up
        code: String,
    },

    /// A language configuration could not be parsed or compiled
    #[error("invalid language configuration for '{code}': {reason}")]
    LanguageConfig {
        /// The language code (or file name when the code is not known yet)
        code: String,
        /// What went wrong
        reason: String,
    },

    /// Reading a language file from disk failed
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::Io(err.to_string())
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
