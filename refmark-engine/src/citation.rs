//! Citation runs over compared sources

use log::info;
use refmark_core::citation::{resolve_citations, CitationOptions, Citations};
use refmark_core::matching::{resolve_overlaps, Match};
use refmark_core::{LanguageRegistry, Source};
use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::pipeline::MatchPipeline;
use crate::retrieval::{DocumentFetcher, SearchProvider};

/// Overlap resolution plus anchor placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CitationRun {
    percent_to_merge: f64,
    options: CitationOptions,
}

impl CitationRun {
    pub fn new(config: &Config) -> Self {
        Self {
            percent_to_merge: config.percent_to_merge,
            options: config.citation_options(),
        }
    }

    /// Cite every surviving match of `sources` in `text`
    pub fn from_sources(text: &str, sources: &[Source], config: &Config) -> Citations {
        Self::new(config).run(text, sources)
    }

    /// Resolve overlaps across all sources, then anchor the survivors
    ///
    /// Matches compete in discovery order: source order first, then the
    /// order each source found them.
    pub fn run(&self, text: &str, sources: &[Source]) -> Citations {
        let matches: Vec<Match> = sources
            .iter()
            .flat_map(|s| s.matches.iter().cloned())
            .collect();
        let survivors = resolve_overlaps(&matches, self.percent_to_merge);
        let citations = resolve_citations(text, survivors, &self.options);

        info!(
            "Cited {} passages from {} sources",
            citations.replacements.len(),
            citations.bibliography.len()
        );
        citations
    }
}

/// Everything one auto-citation produced
#[derive(Debug, Clone, Serialize)]
pub struct CitedText {
    pub sources: Vec<Source>,
    pub citations: Citations,
    /// Input with citation markers and bibliography
    pub annotated: String,
}

/// Finds sources for a text and cites them
#[derive(Debug)]
pub struct AutoCitation {
    pipeline: MatchPipeline,
    run: CitationRun,
}

impl AutoCitation {
    pub fn new(pipeline: MatchPipeline) -> Self {
        let run = CitationRun::new(pipeline.comparator().config());
        Self { pipeline, run }
    }

    pub fn from_config(config: Config, registry: &LanguageRegistry) -> Result<Self> {
        Ok(Self::new(MatchPipeline::from_config(config, registry)?))
    }

    pub fn pipeline(&self) -> &MatchPipeline {
        &self.pipeline
    }

    pub fn cite<S, F>(&self, text: &str, search: &S, fetch: &F) -> CitedText
    where
        S: SearchProvider + ?Sized,
        F: DocumentFetcher + ?Sized,
    {
        let sources = self.pipeline.run(text, search, fetch);
        let citations = self.run.run(text, &sources);
        let annotated = citations.annotate(text);
        CitedText {
            sources,
            citations,
            annotated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refmark_core::matching::Cluster;
    use refmark_core::{MatchPoint, ShingleRange, Span};

    const TEXT: &str = "One sentence about rivers. Another sentence about mountains.";

    fn m(url: &str, range: (usize, usize), span: Span, score: f64) -> Match {
        Match {
            cluster: Cluster::from_points(vec![MatchPoint::new(range.0, 0)]).unwrap(),
            source_url: url.to_string(),
            source_title: url.to_uppercase(),
            input_shingles: ShingleRange::new(range.0, range.1),
            compared_shingles: ShingleRange::new(0, range.1 - range.0),
            input_span: span,
            compared_span: Span::default(),
            score,
        }
    }

    fn source(url: &str, matches: Vec<Match>) -> Source {
        Source::new(url, url.to_uppercase(), "", matches)
    }

    #[test]
    fn test_strongest_overlapping_match_is_cited() {
        let sources = vec![
            source("weak", vec![m("weak", (0, 4), Span::new(0, 25), 4.0)]),
            source("strong", vec![m("strong", (0, 4), Span::new(0, 25), 9.0)]),
        ];
        let citations = CitationRun::from_sources(TEXT, &sources, &Config::default());
        assert_eq!(citations.bibliography.len(), 1);
        assert_eq!(citations.bibliography.entries()[0].url, "strong");
        assert_eq!(citations.replacements.len(), 1);
    }

    #[test]
    fn test_equal_scores_earlier_source_wins() {
        let sources = vec![
            source("first", vec![m("first", (0, 4), Span::new(0, 25), 6.0)]),
            source("second", vec![m("second", (1, 4), Span::new(0, 25), 6.0)]),
        ];
        let citations = CitationRun::from_sources(TEXT, &sources, &Config::default());
        assert_eq!(citations.bibliography.entries()[0].url, "first");
        assert_eq!(citations.bibliography.len(), 1);
    }

    #[test]
    fn test_disjoint_matches_both_cited() {
        let sources = vec![
            source("a", vec![m("a", (0, 3), Span::new(0, 25), 6.0)]),
            source("b", vec![m("b", (5, 8), Span::new(27, 59), 6.0)]),
        ];
        let citations = CitationRun::from_sources(TEXT, &sources, &Config::default());
        assert_eq!(
            citations.annotate(TEXT),
            "One sentence about rivers[1]. Another sentence about mountains[2].\
             \n\n\nBibliography\n\n\
             [1] A (n.d.). Retrieved from a\n\
             [2] B (n.d.). Retrieved from b\n"
        );
    }

    #[test]
    fn test_low_scores_never_cited() {
        let sources = vec![source("a", vec![m("a", (0, 3), Span::new(0, 25), 0.5)])];
        let citations = CitationRun::from_sources(TEXT, &sources, &Config::default());
        assert!(citations.is_empty());
        assert!(citations.bibliography.is_empty());
    }
}
