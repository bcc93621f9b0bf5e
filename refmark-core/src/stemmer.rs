//! Stemming capability
//!
//! Stemming is injected rather than hardcoded: anything implementing
//! [`Stemmer`] can drive the shingle builder, including plain closures.

use crate::error::Result;
#[cfg(feature = "snowball")]
use crate::error::CoreError;
use crate::language::LanguageProfile;

/// Reduces a word to its root form
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

impl<F> Stemmer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn stem(&self, word: &str) -> String {
        self(word)
    }
}

/// Leaves words untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }
}

/// Snowball stemmer for one language
#[cfg(feature = "snowball")]
pub struct SnowballStemmer {
    algorithm: String,
    inner: rust_stemmers::Stemmer,
}

#[cfg(feature = "snowball")]
impl SnowballStemmer {
    /// Create from a Snowball algorithm name such as `"english"`
    pub fn from_algorithm(name: &str) -> Result<Self> {
        use rust_stemmers::Algorithm;

        let algorithm = match name.trim().to_lowercase().as_str() {
            "arabic" => Algorithm::Arabic,
            "danish" => Algorithm::Danish,
            "dutch" => Algorithm::Dutch,
            "english" => Algorithm::English,
            "finnish" => Algorithm::Finnish,
            "french" => Algorithm::French,
            "german" => Algorithm::German,
            "greek" => Algorithm::Greek,
            "hungarian" => Algorithm::Hungarian,
            "italian" => Algorithm::Italian,
            "norwegian" => Algorithm::Norwegian,
            "portuguese" => Algorithm::Portuguese,
            "romanian" => Algorithm::Romanian,
            "russian" => Algorithm::Russian,
            "spanish" => Algorithm::Spanish,
            "swedish" => Algorithm::Swedish,
            "tamil" => Algorithm::Tamil,
            "turkish" => Algorithm::Turkish,
            other => {
                return Err(CoreError::LanguageConfig {
                    code: other.to_string(),
                    reason: "no snowball stemmer for this algorithm".to_string(),
                })
            }
        };

        Ok(Self {
            algorithm: name.trim().to_lowercase(),
            inner: rust_stemmers::Stemmer::create(algorithm),
        })
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }
}

#[cfg(feature = "snowball")]
impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}

#[cfg(feature = "snowball")]
impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

/// Stemmer configured by a language profile
///
/// Profiles without a stemming algorithm get an [`IdentityStemmer`].
#[cfg(feature = "snowball")]
pub fn stemmer_for(profile: &LanguageProfile) -> Result<Box<dyn Stemmer>> {
    match profile.stemmer_algorithm() {
        Some(name) => Ok(Box::new(SnowballStemmer::from_algorithm(name)?)),
        None => Ok(Box::new(IdentityStemmer)),
    }
}

/// Stemmer configured by a language profile
///
/// Without the `snowball` feature only [`IdentityStemmer`] is available.
#[cfg(not(feature = "snowball"))]
pub fn stemmer_for(profile: &LanguageProfile) -> Result<Box<dyn Stemmer>> {
    if let Some(name) = profile.stemmer_algorithm() {
        log::warn!("Stemming '{name}' requested but the snowball feature is disabled");
    }
    Ok(Box::new(IdentityStemmer))
}
