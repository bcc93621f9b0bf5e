//! Match localization and density scoring

use serde::{Deserialize, Serialize};

use crate::matching::cluster::Cluster;
use crate::types::{ShingleRange, Span};

/// A localized, scored cluster: one candidate overlapping passage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub cluster: Cluster,
    pub source_url: String,
    pub source_title: String,
    /// Shingle-index bounding range on the input side
    pub input_shingles: ShingleRange,
    /// Shingle-index bounding range on the candidate side
    pub compared_shingles: ShingleRange,
    /// Byte span of the passage in the input text
    pub input_span: Span,
    /// Byte span of the passage in the candidate text
    pub compared_span: Span,
    pub score: f64,
}

impl Match {
    /// Compute bounding ranges, character spans and score for `cluster`
    ///
    /// `input_spans` and `compared_spans` are the shingle span lists the
    /// cluster's points index into.
    ///
    /// # Panics
    ///
    /// Panics if a cluster coordinate is out of range for its span list.
    pub fn localize(
        cluster: Cluster,
        input_spans: &[Span],
        compared_spans: &[Span],
        source_url: impl Into<String>,
        source_title: impl Into<String>,
    ) -> Self {
        let input_shingles = cluster.input_range();
        let compared_shingles = cluster.candidate_range();
        let score = density_score(cluster.len(), input_shingles);

        Self {
            input_span: char_span(input_shingles, input_spans),
            compared_span: char_span(compared_shingles, compared_spans),
            cluster,
            source_url: source_url.into(),
            source_title: source_title.into(),
            input_shingles,
            compared_shingles,
            score,
        }
    }

    /// Verbatim matched passage of the input text
    pub fn input_excerpt<'a>(&self, input_text: &'a str) -> &'a str {
        self.input_span.excerpt(input_text)
    }

    /// Verbatim matched passage of the candidate text
    pub fn compared_excerpt<'a>(&self, compared_text: &'a str) -> &'a str {
        self.compared_span.excerpt(compared_text)
    }
}

/// `points² / width`, or 0 when the input range is at most one shingle wide
pub fn density_score(points: usize, input_range: ShingleRange) -> f64 {
    let width = input_range.width();
    if width <= 1 {
        return 0.0;
    }
    (points * points) as f64 / width as f64
}

fn char_span(range: ShingleRange, spans: &[Span]) -> Span {
    spans[range.start].to(spans[range.end])
}
