//! Core value types shared by every pipeline stage

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Half-open byte range `[start, end)` into an original text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Union of two spans, from the start of `self` to the end of `last`
    pub fn to(self, last: Span) -> Span {
        Span::new(self.start, last.end)
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Verbatim slice of `text` covered by this span, or `""` if the span
    /// does not describe a valid range of `text`
    pub fn excerpt<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.start..self.end).unwrap_or("")
    }
}

/// A word together with the exact byte range it occupies in the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

/// Stems of a shingle. Shingles are short, so they stay inline.
pub type Stems = SmallVec<[String; 4]>;

/// Fixed-size window of consecutive stemmed tokens
///
/// Two shingles are equal iff they have the same length and the same stems
/// in the same order. The span is not part of equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shingle {
    pub stems: Stems,
    pub span: Span,
}

impl Shingle {
    pub fn new(stems: impl IntoIterator<Item = String>, span: Span) -> Self {
        Self {
            stems: stems.into_iter().collect(),
            span,
        }
    }

    pub fn same_stems(&self, other: &Shingle) -> bool {
        self.stems == other.stems
    }
}

impl PartialEq for Shingle {
    fn eq(&self, other: &Self) -> bool {
        self.same_stems(other)
    }
}

impl Eq for Shingle {}

/// Index pair `(input, candidate)` of two equal shingles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchPoint {
    pub input: usize,
    pub candidate: usize,
}

impl MatchPoint {
    pub fn new(input: usize, candidate: usize) -> Self {
        Self { input, candidate }
    }

    /// Chebyshev distance, `max(|Δinput|, |Δcandidate|)`
    #[inline]
    pub fn distance(&self, other: &MatchPoint) -> usize {
        self.input
            .abs_diff(other.input)
            .max(self.candidate.abs_diff(other.candidate))
    }
}

/// Inclusive range of shingle indices `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ShingleRange {
    pub start: usize,
    pub end: usize,
}

impl ShingleRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// `end - start`: zero for a single shingle
    pub fn width(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_disjoint(&self, other: &ShingleRange) -> bool {
        other.start > self.end || self.start > other.end
    }
}

impl From<(usize, usize)> for MatchPoint {
    fn from((input, candidate): (usize, usize)) -> Self {
        Self::new(input, candidate)
    }
}
