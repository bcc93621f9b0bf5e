//! Matching and citation options

use std::path::Path;

use log::debug;
use refmark_core::citation::CitationOptions;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Default configuration constants
pub mod defaults {
    /// Language code used for normalization and stemming
    pub const LANGUAGE: &str = "en";

    /// Words per shingle
    pub const SHINGLE_SIZE: usize = 2;

    /// Largest Chebyshev distance joining two match points
    pub const MAXIMUM_GAP: usize = 3;

    /// Fewest points a cluster needs to become a match
    pub const MINIMUM_CLUSTER_SIZE: usize = 5;

    /// Overlap fraction at which two matches compete
    pub const PERCENT_TO_MERGE: f64 = 0.6;

    /// Score a match needs to appear in reports
    pub const MIN_SCORE: f64 = 5.0;

    /// Normalized words per search query
    pub const QUERY_WORD_LIMIT: usize = 32;

    pub use refmark_core::citation::{
        DEFAULT_MARGIN as MARGIN, DEFAULT_MINIMUM_SIZE as MINIMUM_SIZE,
    };
}

/// Options for one comparison or citation run
///
/// Every field has a default, so a TOML file only needs the keys it
/// changes:
///
/// ```toml
/// language = "es"
/// minimum_cluster_size = 4
/// threads = 2
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Language code or alias
    pub language: String,
    pub shingle_size: usize,
    pub maximum_gap: usize,
    pub minimum_cluster_size: usize,
    pub percent_to_merge: f64,
    /// Reporting threshold; does not affect citations
    pub min_score: f64,
    /// How far a sentence end may sit before a match's end
    pub margin: usize,
    /// Starting size of a citation anchor in bytes
    pub minimum_size: usize,
    pub query_word_limit: usize,
    /// Worker threads (None = all available)
    pub threads: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: defaults::LANGUAGE.to_string(),
            shingle_size: defaults::SHINGLE_SIZE,
            maximum_gap: defaults::MAXIMUM_GAP,
            minimum_cluster_size: defaults::MINIMUM_CLUSTER_SIZE,
            percent_to_merge: defaults::PERCENT_TO_MERGE,
            min_score: defaults::MIN_SCORE,
            margin: defaults::MARGIN,
            minimum_size: defaults::MINIMUM_SIZE,
            query_word_limit: defaults::QUERY_WORD_LIMIT,
            threads: None,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse and validate a TOML configuration
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str)
            .map_err(|e| EngineError::ConfigError(format!("failed to parse TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!("Loading configuration from {}", path.display());
        Self::from_toml_str(&content).map_err(|e| match e {
            EngineError::ConfigError(reason) => {
                EngineError::ConfigError(format!("{}: {reason}", path.display()))
            }
            other => other,
        })
    }

    /// Anchor placement options for the citation stage
    pub fn citation_options(&self) -> CitationOptions {
        CitationOptions {
            margin: self.margin,
            minimum_size: self.minimum_size,
        }
    }

    /// Check every option is in range
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(EngineError::ConfigError("language must not be empty".into()));
        }
        if self.shingle_size == 0 {
            return Err(EngineError::ConfigError(
                "shingle_size must be greater than 0".into(),
            ));
        }
        if self.minimum_cluster_size == 0 {
            return Err(EngineError::ConfigError(
                "minimum_cluster_size must be greater than 0".into(),
            ));
        }
        if !(self.percent_to_merge > 0.0 && self.percent_to_merge <= 1.0) {
            return Err(EngineError::ConfigError(format!(
                "percent_to_merge must be in (0, 1], got {}",
                self.percent_to_merge
            )));
        }
        if self.min_score.is_nan() {
            return Err(EngineError::ConfigError("min_score must be a number".into()));
        }
        if self.minimum_size == 0 {
            return Err(EngineError::ConfigError(
                "minimum_size must be greater than 0".into(),
            ));
        }
        if self.query_word_limit == 0 {
            return Err(EngineError::ConfigError(
                "query_word_limit must be greater than 0".into(),
            ));
        }
        if self.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "threads must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Fluent builder for [`Config`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language by code or alias
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.config.language = code.into();
        self
    }

    pub fn shingle_size(mut self, size: usize) -> Self {
        self.config.shingle_size = size;
        self
    }

    pub fn maximum_gap(mut self, gap: usize) -> Self {
        self.config.maximum_gap = gap;
        self
    }

    pub fn minimum_cluster_size(mut self, size: usize) -> Self {
        self.config.minimum_cluster_size = size;
        self
    }

    pub fn percent_to_merge(mut self, fraction: f64) -> Self {
        self.config.percent_to_merge = fraction;
        self
    }

    pub fn min_score(mut self, score: f64) -> Self {
        self.config.min_score = score;
        self
    }

    pub fn margin(mut self, margin: usize) -> Self {
        self.config.margin = margin;
        self
    }

    pub fn minimum_size(mut self, size: usize) -> Self {
        self.config.minimum_size = size;
        self
    }

    pub fn query_word_limit(mut self, words: usize) -> Self {
        self.config.query_word_limit = words;
        self
    }

    /// Set the number of threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.language, "en");
        assert_eq!(config.shingle_size, 2);
        assert_eq!(config.maximum_gap, 3);
        assert_eq!(config.minimum_cluster_size, 5);
        assert_eq!(config.percent_to_merge, 0.6);
        assert_eq!(config.min_score, 5.0);
        assert_eq!(config.margin, 5);
        assert_eq!(config.minimum_size, 10);
        assert_eq!(config.query_word_limit, 32);
        assert_eq!(config.threads, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = Config::builder()
            .language("es")
            .shingle_size(3)
            .percent_to_merge(1.0)
            .threads(Some(2))
            .build()
            .unwrap();
        assert_eq!(config.language, "es");
        assert_eq!(config.shingle_size, 3);
        assert_eq!(config.threads, Some(2));
        assert_eq!(config.citation_options(), CitationOptions::default());
    }

    #[test]
    fn test_builder_rejects_out_of_range() {
        assert!(Config::builder().shingle_size(0).build().is_err());
        assert!(Config::builder().minimum_cluster_size(0).build().is_err());
        assert!(Config::builder().percent_to_merge(0.0).build().is_err());
        assert!(Config::builder().percent_to_merge(1.5).build().is_err());
        assert!(Config::builder().percent_to_merge(f64::NAN).build().is_err());
        assert!(Config::builder().minimum_size(0).build().is_err());
        assert!(Config::builder().query_word_limit(0).build().is_err());
        assert!(Config::builder().threads(Some(0)).build().is_err());
        assert!(Config::builder().language(" ").build().is_err());
        assert!(Config::builder().maximum_gap(0).build().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = Config::from_toml_str("language = \"es\"\nmargin = 8\n").unwrap();
        assert_eq!(config.language, "es");
        assert_eq!(config.margin, 8);
        assert_eq!(config.shingle_size, 2);
    }

    #[test]
    fn test_from_toml_rejects_unknown_and_invalid() {
        let err = Config::from_toml_str("shingle_sise = 3").unwrap_err();
        assert!(err.to_string().contains("failed to parse TOML"));
        let err = Config::from_toml_str("percent_to_merge = 2.0").unwrap_err();
        assert!(err.to_string().contains("percent_to_merge"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "minimum_cluster_size = 3").unwrap();
        writeln!(file, "threads = 1").unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.minimum_cluster_size, 3);
        assert_eq!(config.threads, Some(1));
    }

    #[test]
    fn test_from_file_errors_name_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "shingle_size = 0").unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err
            .to_string()
            .contains(&file.path().display().to_string()));

        assert!(matches!(
            Config::from_file("/nonexistent/refmark.toml"),
            Err(EngineError::IoError(_))
        ));
    }
}
