//! Retrieval collaborators and query batching
//!
//! Searching and fetching are supplied by the caller. The engine only
//! decides what to ask for: the input's normalized words are cut into
//! fixed-size queries, and every URL is compared at most once per run.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::comparator::CandidateDocument;
use crate::error::RetrievalError;

/// Finds candidate document URLs for a query
pub trait SearchProvider: Send + Sync {
    fn search(&self, query: &str) -> Result<Vec<String>, RetrievalError>;
}

impl<F> SearchProvider for F
where
    F: Fn(&str) -> Result<Vec<String>, RetrievalError> + Send + Sync,
{
    fn search(&self, query: &str) -> Result<Vec<String>, RetrievalError> {
        self(query)
    }
}

/// Downloads a candidate document as plain text
pub trait DocumentFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<FetchedDocument, RetrievalError>;
}

impl<F> DocumentFetcher for F
where
    F: Fn(&str) -> Result<FetchedDocument, RetrievalError> + Send + Sync,
{
    fn fetch(&self, url: &str) -> Result<FetchedDocument, RetrievalError> {
        self(url)
    }
}

/// Plain text and title of a fetched page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedDocument {
    pub text: String,
    pub title: String,
}

impl FetchedDocument {
    pub fn new(text: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: title.into(),
        }
    }

    pub fn into_candidate(self, url: impl Into<String>) -> CandidateDocument {
        CandidateDocument::new(url, self.title, self.text)
    }
}

/// Split `words` into queries of at most `limit` words each
///
/// Queries are consecutive runs of words joined by single spaces; only the
/// last one may be shorter. A zero limit is treated as one.
pub fn search_queries(words: &[String], limit: usize) -> Vec<String> {
    words
        .chunks(limit.max(1))
        .map(|chunk| chunk.join(" "))
        .collect()
}

/// URLs already handed out during one run
#[derive(Debug, Clone, Default)]
pub struct UrlLedger {
    seen: HashSet<String>,
}

impl UrlLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only URLs not seen before, in first-seen order, and record them
    pub fn admit(&mut self, urls: impl IntoIterator<Item = String>) -> Vec<String> {
        urls.into_iter()
            .filter(|url| self.seen.insert(url.clone()))
            .collect()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
