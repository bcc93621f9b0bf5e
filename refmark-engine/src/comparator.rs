//! Per-source comparison: fingerprint both texts, cluster, score

use std::sync::Arc;

use log::debug;
use refmark_core::matching::{match_and_cluster, Match};
use refmark_core::text::{build_shingles, normalize, shingle_spans, tokenize};
use refmark_core::{stemmer_for, LanguageProfile, LanguageRegistry, Shingle, Source, Span, Stemmer};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Result;
use crate::executor::Executor;

/// A document to compare the input against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDocument {
    pub url: String,
    pub title: String,
    pub text: String,
}

impl CandidateDocument {
    pub fn new(url: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Normalized words and shingles of one text
#[derive(Debug, Clone, Default)]
pub struct Fingerprint {
    /// Normalized words, in order; used to build search queries
    pub words: Vec<String>,
    pub shingles: Vec<Shingle>,
    /// Byte spans of `shingles`, index-aligned
    pub spans: Vec<Span>,
}

impl Fingerprint {
    pub fn len(&self) -> usize {
        self.shingles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shingles.is_empty()
    }
}

/// Compares an input text against candidate documents in one language
pub struct Comparator {
    config: Config,
    profile: Arc<LanguageProfile>,
    stemmer: Box<dyn Stemmer>,
    executor: Executor,
}

impl Comparator {
    /// Create a comparator with an explicit stemmer
    ///
    /// Fails if the configuration is invalid, the language is unknown or
    /// the worker pool cannot be built.
    pub fn new(
        config: Config,
        registry: &LanguageRegistry,
        stemmer: Box<dyn Stemmer>,
    ) -> Result<Self> {
        config.validate()?;
        let profile = registry.get(&config.language)?;
        let executor = Executor::new(config.threads)?;
        debug!(
            "Comparator for '{}' with {} worker(s)",
            profile.code(),
            executor.threads()
        );
        Ok(Self {
            config,
            profile,
            stemmer,
            executor,
        })
    }

    /// Create a comparator using the language's Snowball stemmer
    ///
    /// Without the `snowball` feature words are left unstemmed.
    pub fn snowball(config: Config, registry: &LanguageRegistry) -> Result<Self> {
        let profile = registry.get(&config.language)?;
        let stemmer = stemmer_for(&profile)?;
        Self::new(config, registry, stemmer)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    pub(crate) fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Tokenize, normalize and shingle `text`
    pub fn fingerprint(&self, text: &str) -> Fingerprint {
        let tokens = tokenize(text);
        let normalized = normalize(&tokens, &self.profile);
        let shingles = build_shingles(&normalized, self.config.shingle_size, &*self.stemmer);
        let spans = shingle_spans(&shingles);

        debug!(
            "Fingerprinted {} tokens into {} words and {} shingles",
            tokens.len(),
            normalized.len(),
            shingles.len()
        );

        Fingerprint {
            words: normalized.into_iter().map(|t| t.text).collect(),
            shingles,
            spans,
        }
    }

    /// Find the matched passages between `input` and one candidate
    pub fn compare(&self, input: &Fingerprint, candidate: &CandidateDocument) -> Source {
        let other = self.fingerprint(&candidate.text);
        let clustering = match_and_cluster(
            &input.shingles,
            &other.shingles,
            self.config.maximum_gap,
            self.config.minimum_cluster_size,
        );

        let matches: Vec<Match> = clustering
            .clusters
            .into_iter()
            .map(|cluster| {
                Match::localize(
                    cluster,
                    &input.spans,
                    &other.spans,
                    candidate.url.as_str(),
                    candidate.title.as_str(),
                )
            })
            .collect();

        debug!(
            "{}: {} match points, {} matches",
            candidate.url,
            clustering.points.len(),
            matches.len()
        );

        Source::new(
            candidate.url.clone(),
            candidate.title.clone(),
            candidate.text.clone(),
            matches,
        )
    }

    /// Compare `input_text` against every candidate
    ///
    /// Candidates are compared in parallel; the result keeps their order.
    pub fn compare_all(&self, input_text: &str, candidates: &[CandidateDocument]) -> Vec<Source> {
        let input = self.fingerprint(input_text);
        self.compare_fingerprint(&input, candidates)
    }

    /// Like [`Comparator::compare_all`] for an already fingerprinted input
    pub fn compare_fingerprint(
        &self,
        input: &Fingerprint,
        candidates: &[CandidateDocument],
    ) -> Vec<Source> {
        self.executor
            .map(candidates, |candidate| self.compare(input, candidate))
    }
}

impl std::fmt::Debug for Comparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Comparator")
            .field("config", &self.config)
            .field("language", &self.profile.code())
            .field("executor", &self.executor)
            .finish()
    }
}
