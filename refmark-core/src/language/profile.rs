//! Compiled runtime form of a language configuration

use std::collections::HashSet;
use std::fmt;

use regex::Regex;

use crate::error::{CoreError, Result};
use crate::language::config::LanguageConfig;

/// Normalization settings for one language
///
/// Built once from a [`LanguageConfig`] and shared read-only between
/// comparisons.
#[derive(Clone)]
pub struct LanguageProfile {
    code: String,
    name: String,
    aliases: Vec<String>,
    stopwords: HashSet<String>,
    /// Matches every character outside the allowed class
    disallowed: Regex,
    stemmer_algorithm: Option<String>,
}

impl LanguageProfile {
    /// Create from configuration
    pub fn from_config(config: &LanguageConfig) -> Result<Self> {
        let code = config.metadata.code.trim().to_lowercase();
        config
            .validate()
            .map_err(|reason| CoreError::LanguageConfig {
                code: code.clone(),
                reason,
            })?;

        let pattern = format!("[^{}]", config.normalization.allowed_chars);
        let disallowed = Regex::new(&pattern).map_err(|e| CoreError::LanguageConfig {
            code: code.clone(),
            reason: format!("bad allowed_chars pattern: {e}"),
        })?;

        Ok(Self {
            code,
            name: config.metadata.name.clone(),
            aliases: config
                .metadata
                .aliases
                .iter()
                .map(|a| a.trim().to_lowercase())
                .collect(),
            stopwords: config.stopwords.words.iter().cloned().collect(),
            disallowed,
            stemmer_algorithm: config.stemmer.algorithm.clone(),
        })
    }

    /// Parse and compile a TOML language file
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config =
            LanguageConfig::from_toml_str(toml_str).map_err(|reason| CoreError::LanguageConfig {
                code: "<unparsed>".to_string(),
                reason,
            })?;
        Self::from_config(&config)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn stemmer_algorithm(&self) -> Option<&str> {
        self.stemmer_algorithm.as_deref()
    }

    /// Lowercase `word` and strip every disallowed character
    pub fn normalize_word(&self, word: &str) -> String {
        let lowered = word.to_lowercase();
        self.disallowed.replace_all(&lowered, "").into_owned()
    }

    pub fn is_stopword(&self, normalized: &str) -> bool {
        self.stopwords.contains(normalized)
    }

    /// A normalized word survives if it is non-empty and not a stopword
    pub fn keeps(&self, normalized: &str) -> bool {
        !normalized.is_empty() && !self.is_stopword(normalized)
    }
}

impl fmt::Debug for LanguageProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageProfile")
            .field("code", &self.code)
            .field("name", &self.name)
            .field("stopwords", &self.stopwords.len())
            .field("disallowed", &self.disallowed.as_str())
            .field("stemmer_algorithm", &self.stemmer_algorithm)
            .finish()
    }
}
