//! Configuration structures and validation
//!
//! This module defines the TOML schema for language configuration.

use serde::{Deserialize, Serialize};

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    pub normalization: Normalization,
    #[serde(default)]
    pub stemmer: StemmerSettings,
    #[serde(default)]
    pub stopwords: Stopwords,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
    /// Alternative lookup keys, e.g. `"english"` for `"en"`
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Per-word normalization rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Normalization {
    /// Body of a regex character class; characters outside it are stripped
    pub allowed_chars: String,
}

/// Stemming algorithm selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StemmerSettings {
    /// Snowball algorithm name. `None` disables stemming.
    pub algorithm: Option<String>,
}

/// Stopword list, stored in normalized form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stopwords {
    #[serde(default)]
    pub words: Vec<String>,
}

impl LanguageConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| e.to_string())
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("language code must not be empty".to_string());
        }

        if self.normalization.allowed_chars.is_empty() {
            return Err("allowed_chars must not be empty".to_string());
        }

        if let Some(algorithm) = &self.stemmer.algorithm {
            if algorithm.trim().is_empty() {
                return Err("stemmer algorithm must not be empty when present".to_string());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [metadata]
        code = "xx"
        name = "Test"

        [normalization]
        allowed_chars = "a-z"
    "#;

    #[test]
    fn test_minimal_config_defaults() {
        let config = LanguageConfig::from_toml_str(MINIMAL).unwrap();
        assert_eq!(config.metadata.code, "xx");
        assert!(config.metadata.aliases.is_empty());
        assert!(config.stemmer.algorithm.is_none());
        assert!(config.stopwords.words.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_code() {
        let mut config = LanguageConfig::from_toml_str(MINIMAL).unwrap();
        config.metadata.code = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_character_class() {
        let mut config = LanguageConfig::from_toml_str(MINIMAL).unwrap();
        config.normalization.allowed_chars.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_normalization_section_fails_to_parse() {
        let result = LanguageConfig::from_toml_str("[metadata]\ncode = \"xx\"\nname = \"X\"\n");
        assert!(result.is_err());
    }
}
