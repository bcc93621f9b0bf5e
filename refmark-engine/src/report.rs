//! Human-readable and JSON match reports

use std::fmt::Write;

use refmark_core::{Source, Span};
use serde::Serialize;

use crate::error::Result;

/// Plain-text listing of every match scoring at least `min_score`
///
/// Each match is printed as a block of its source URL, the input passage,
/// the candidate passage and the score.
pub fn render_report(input_text: &str, sources: &[Source], min_score: f64) -> String {
    let mut out = String::from("Comparison\n");
    for source in sources {
        for m in source.reportable_matches(min_score) {
            // Writing to a String cannot fail
            let _ = write!(
                out,
                "\nFROM {}\n\nORIGINAL: {}\n\nCOMPARED: {}\n\nSCORE: {:.2}\n",
                source.url,
                m.input_excerpt(input_text),
                m.compared_excerpt(&source.text),
                m.score
            );
        }
    }
    out
}

/// One reportable match with its passages resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub original: String,
    pub compared: String,
    pub input_span: Span,
    pub compared_span: Span,
    pub score: f64,
}

/// Reportable matches of one source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceReport {
    pub url: String,
    pub title: String,
    pub matches: Vec<ReportEntry>,
}

/// Serializable summary of a comparison run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub min_score: f64,
    pub sources: Vec<SourceReport>,
}

impl Report {
    /// Collect the matches scoring at least `min_score`
    ///
    /// Sources without reportable matches are left out.
    pub fn new(input_text: &str, sources: &[Source], min_score: f64) -> Self {
        let sources = sources
            .iter()
            .filter_map(|source| {
                let matches: Vec<ReportEntry> = source
                    .reportable_matches(min_score)
                    .map(|m| ReportEntry {
                        original: m.input_excerpt(input_text).to_string(),
                        compared: m.compared_excerpt(&source.text).to_string(),
                        input_span: m.input_span,
                        compared_span: m.compared_span,
                        score: m.score,
                    })
                    .collect();
                (!matches.is_empty()).then(|| SourceReport {
                    url: source.url.clone(),
                    title: source.title.clone(),
                    matches,
                })
            })
            .collect();
        Self { min_score, sources }
    }

    pub fn match_count(&self) -> usize {
        self.sources.iter().map(|s| s.matches.len()).sum()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
