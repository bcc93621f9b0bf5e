//! Per-language normalization data
//!
//! Language behaviour (stopwords, allowed characters, stemming algorithm)
//! is configuration, loaded from TOML into a [`LanguageRegistry`].

pub mod config;
mod profile;
mod registry;

pub use config::LanguageConfig;
pub use profile::LanguageProfile;
pub use registry::LanguageRegistry;
