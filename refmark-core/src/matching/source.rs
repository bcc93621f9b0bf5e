//! Candidate documents and their matches

use serde::{Deserialize, Serialize};

use crate::matching::scoring::Match;

/// One candidate document compared against the input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub url: String,
    pub title: String,
    pub text: String,
    pub matches: Vec<Match>,
}

impl Source {
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        text: impl Into<String>,
        matches: Vec<Match>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            text: text.into(),
            matches,
        }
    }

    /// A source that could not be retrieved: no text, no matches
    pub fn unavailable(url: impl Into<String>) -> Self {
        Self::new(url, "", "", Vec::new())
    }

    /// Matches scoring at least `min_score`
    pub fn reportable_matches(&self, min_score: f64) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(move |m| m.score >= min_score)
    }

    pub fn best_score(&self) -> Option<f64> {
        self.matches.iter().map(|m| m.score).reduce(f64::max)
    }
}
