//! Language profile registry
//!
//! Holds the embedded language profiles plus any profiles registered at
//! runtime. Built once at start-up and passed by reference to whatever
//! needs to normalize text.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use log::{debug, warn};

use crate::error::{CoreError, Result};
use crate::language::profile::LanguageProfile;

/// Embedded language configurations, `(code, toml)`
const EMBEDDED: &[(&str, &str)] = &[
    ("en", include_str!("../../configs/languages/english.toml")),
    ("es", include_str!("../../configs/languages/spanish.toml")),
];

/// Lookup table from language code or alias to profile
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    profiles: Vec<Arc<LanguageProfile>>,
    index: HashMap<String, usize>,
}

impl LanguageRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every embedded language
    pub fn with_embedded() -> Self {
        let mut registry = Self::new();
        for (code, toml_str) in EMBEDDED {
            match LanguageProfile::from_toml_str(toml_str) {
                Ok(profile) => {
                    registry.register(profile);
                }
                Err(e) => {
                    warn!("Failed to load embedded {code} language config: {e}");
                }
            }
        }
        registry
    }

    /// Register a profile under its code and aliases
    ///
    /// A later registration replaces any earlier profile using the same key.
    pub fn register(&mut self, profile: LanguageProfile) -> Arc<LanguageProfile> {
        let profile = Arc::new(profile);
        let slot = self.profiles.len();
        self.profiles.push(Arc::clone(&profile));

        let keys = std::iter::once(profile.code())
            .chain(profile.aliases().iter().map(String::as_str));
        for key in keys {
            if self.index.insert(key.to_string(), slot).is_some() {
                debug!("Language key '{key}' now points to {}", profile.code());
            }
        }
        profile
    }

    /// Parse, compile and register a TOML language definition
    pub fn load_str(&mut self, toml_str: &str) -> Result<Arc<LanguageProfile>> {
        let profile = LanguageProfile::from_toml_str(toml_str)?;
        Ok(self.register(profile))
    }

    /// Read, compile and register a TOML language file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<Arc<LanguageProfile>> {
        let path = path.as_ref();
        let toml_str = std::fs::read_to_string(path)?;
        let profile = LanguageProfile::from_toml_str(&toml_str).map_err(|e| match e {
            CoreError::LanguageConfig { code, reason } if code == "<unparsed>" => {
                CoreError::LanguageConfig {
                    code: path.display().to_string(),
                    reason,
                }
            }
            other => other,
        })?;
        debug!("Loaded language {} from {}", profile.code(), path.display());
        Ok(self.register(profile))
    }

    /// Look up a profile by code or alias, case-insensitively
    pub fn get(&self, code: &str) -> Result<Arc<LanguageProfile>> {
        let key = code.trim().to_lowercase();
        self.index
            .get(&key)
            .map(|&slot| Arc::clone(&self.profiles[slot]))
            .ok_or_else(|| CoreError::UnknownLanguage {
                code: code.to_string(),
            })
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(&code.trim().to_lowercase())
    }

    /// Primary codes of every registered profile, in registration order
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = Vec::new();
        for profile in &self.profiles {
            if !codes.contains(&profile.code()) {
                codes.push(profile.code());
            }
        }
        codes
    }
}
