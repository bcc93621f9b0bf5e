//! Citation markers and bibliography for resolved matches
//!
//! Each surviving match is anchored at the nearest sentence end after it.
//! The anchor is the shortest text ending there that is unique in the
//! input, so it can be located again without offsets.

pub mod anchor;
pub mod bibliography;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::matching::Match;

pub use anchor::{find_nearest_period, find_unique_substring, period_offsets};
pub use bibliography::{Bibliography, BibliographyEntry, BIBLIOGRAPHY_HEADER};

/// Default distance a sentence end may precede a match's end
pub const DEFAULT_MARGIN: usize = 5;

/// Default starting size of an anchor substring
pub const DEFAULT_MINIMUM_SIZE: usize = 10;

/// Anchor placement settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationOptions {
    pub margin: usize,
    pub minimum_size: usize,
}

impl Default for CitationOptions {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            minimum_size: DEFAULT_MINIMUM_SIZE,
        }
    }
}

/// A unique input substring and its citation-annotated form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationReplacement {
    pub anchor: String,
    /// `anchor` followed by one or more `[n]` markers
    pub numbered: String,
    /// Byte offset in the input where the anchor ends
    pub offset: usize,
}

impl CitationReplacement {
    /// The markers appended to the anchor, e.g. `"[1]"`
    pub fn markers(&self) -> &str {
        &self.numbered[self.anchor.len()..]
    }
}

/// Output of a citation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citations {
    pub replacements: Vec<CitationReplacement>,
    pub bibliography: Bibliography,
}

impl Citations {
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Annotated form of `anchor`, if it was cited
    pub fn replacement_for(&self, anchor: &str) -> Option<&str> {
        self.replacements
            .iter()
            .find(|r| r.anchor == anchor)
            .map(|r| r.numbered.as_str())
    }

    /// Insert every marker into `text` and append the bibliography
    pub fn annotate(&self, text: &str) -> String {
        let mut ordered: Vec<&CitationReplacement> = self.replacements.iter().collect();
        ordered.sort_by(|a, b| b.offset.cmp(&a.offset));

        let mut annotated = text.to_string();
        for replacement in ordered {
            if annotated.is_char_boundary(replacement.offset) {
                annotated.insert_str(replacement.offset, replacement.markers());
            }
        }
        annotated.push_str(&self.bibliography.to_string());
        annotated
    }
}

/// Anchor each match in `text` and number its source
///
/// `matches` should already be overlap-resolved and in discovery order.
/// Matches whose nearest sentence end cannot be found are skipped. Several
/// matches anchored at the same sentence end share one replacement that
/// lists each distinct citation number.
pub fn resolve_citations<'a, I>(text: &str, matches: I, options: &CitationOptions) -> Citations
where
    I: IntoIterator<Item = &'a Match>,
{
    let periods = period_offsets(text);
    let mut citations = Citations::default();

    for m in matches {
        let Some(period) = m.nearest_period(&periods, options.margin) else {
            warn!(
                "No sentence end after byte {} for match from {}",
                m.input_span.end, m.source_url
            );
            continue;
        };

        let anchor = find_unique_substring(text, period, options.minimum_size);
        let number = citations.bibliography.cite(&m.source_url, &m.source_title);
        let marker = format!("[{number}]");

        match citations
            .replacements
            .iter_mut()
            .find(|r| r.offset == period)
        {
            Some(existing) => {
                if !existing.markers().contains(&marker) {
                    existing.numbered.push_str(&marker);
                }
            }
            None => citations.replacements.push(CitationReplacement {
                anchor: anchor.to_string(),
                numbered: format!("{anchor}{marker}"),
                offset: period,
            }),
        }
    }

    debug!(
        "Resolved {} citation anchors over {} sources",
        citations.replacements.len(),
        citations.bibliography.len()
    );
    citations
}
