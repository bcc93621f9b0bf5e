//! Numbered bibliography keyed by source URL

use std::fmt;

use serde::{Deserialize, Serialize};

/// Heading written before the bibliography entries
pub const BIBLIOGRAPHY_HEADER: &str = "\n\n\nBibliography\n\n";

/// One cited source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibliographyEntry {
    /// 1-based citation number
    pub index: usize,
    pub title: String,
    pub url: String,
}

impl fmt::Display for BibliographyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (n.d.). Retrieved from {}",
            self.index, self.title, self.url
        )
    }
}

/// Sources in first-cited order, one entry per distinct URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bibliography {
    entries: Vec<BibliographyEntry>,
}

impl Bibliography {
    pub fn new() -> Self {
        Self::default()
    }

    /// Citation number for `url`, adding an entry the first time it is seen
    pub fn cite(&mut self, url: &str, title: &str) -> usize {
        if let Some(index) = self.index_of(url) {
            return index;
        }
        let index = self.entries.len() + 1;
        self.entries.push(BibliographyEntry {
            index,
            title: title.to_string(),
            url: url.to_string(),
        });
        index
    }

    pub fn index_of(&self, url: &str) -> Option<usize> {
        self.entries.iter().find(|e| e.url == url).map(|e| e.index)
    }

    pub fn entries(&self) -> &[BibliographyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Bibliography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(BIBLIOGRAPHY_HEADER)?;
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
