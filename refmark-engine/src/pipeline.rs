//! Search, fetch and compare in query batches

use log::{info, warn};
use refmark_core::{LanguageRegistry, Source};

use crate::comparator::{Comparator, Fingerprint};
use crate::config::Config;
use crate::error::Result;
use crate::retrieval::{search_queries, DocumentFetcher, SearchProvider, UrlLedger};

/// Finds candidate documents for an input text and compares them
///
/// The input's normalized words are sent to the search provider in
/// batches. Each URL is fetched and compared once per run, however many
/// batches return it. Failed searches and fetches are logged and skipped.
#[derive(Debug)]
pub struct MatchPipeline {
    comparator: Comparator,
}

impl MatchPipeline {
    pub fn new(comparator: Comparator) -> Self {
        Self { comparator }
    }

    /// Build a pipeline with the configured language's Snowball stemmer
    pub fn from_config(config: Config, registry: &LanguageRegistry) -> Result<Self> {
        Ok(Self::new(Comparator::snowball(config, registry)?))
    }

    pub fn comparator(&self) -> &Comparator {
        &self.comparator
    }

    /// Compare `text` against every document the search provider finds
    ///
    /// Sources come back in the order their URLs were first returned. A URL
    /// that cannot be fetched yields a source with no text and no matches.
    pub fn run<S, F>(&self, text: &str, search: &S, fetch: &F) -> Vec<Source>
    where
        S: SearchProvider + ?Sized,
        F: DocumentFetcher + ?Sized,
    {
        let input = self.comparator.fingerprint(text);
        let queries = search_queries(&input.words, self.comparator.config().query_word_limit);
        info!("Searching {} queries for {} words", queries.len(), input.words.len());

        let mut ledger = UrlLedger::new();
        let mut sources = Vec::new();
        for query in &queries {
            let urls = match search.search(query) {
                Ok(urls) => urls,
                Err(e) => {
                    warn!("{e}");
                    continue;
                }
            };

            let fresh = ledger.admit(urls);
            if fresh.is_empty() {
                continue;
            }
            sources.extend(self.fetch_and_compare(&input, &fresh, fetch));
        }

        info!(
            "Compared {} sources, {} with matches",
            sources.len(),
            sources.iter().filter(|s| !s.matches.is_empty()).count()
        );
        sources
    }

    fn fetch_and_compare<F>(&self, input: &Fingerprint, urls: &[String], fetch: &F) -> Vec<Source>
    where
        F: DocumentFetcher + ?Sized,
    {
        self.comparator.executor().map(urls, |url| match fetch.fetch(url) {
            Ok(document) => self
                .comparator
                .compare(input, &document.into_candidate(url.as_str())),
            Err(e) => {
                warn!("{e}");
                Source::unavailable(url.as_str())
            }
        })
    }
}
