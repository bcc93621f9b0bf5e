//! Citation anchors: sentence ends and unique substrings of the input

use crate::matching::Match;
use crate::text::tokenizer::PERIOD;

/// Byte offset of every period in `text`, followed by `text.len()`
pub fn period_offsets(text: &str) -> Vec<usize> {
    text.match_indices(PERIOD)
        .map(|(pos, _)| pos)
        .chain(std::iter::once(text.len()))
        .collect()
}

/// First period offset at or after `end - margin`
pub fn find_nearest_period(end: usize, periods: &[usize], margin: usize) -> Option<usize> {
    let threshold = end.saturating_sub(margin);
    periods.iter().copied().find(|&p| p >= threshold)
}

/// Shortest substring ending at `index` that occurs exactly once in `text`
///
/// Sizes grow from `minimum_size` while they stay below `index`; when none
/// is unique the whole prefix `text[..index]` is returned. Sizes that would
/// split a multi-byte character are skipped.
pub fn find_unique_substring(text: &str, index: usize, minimum_size: usize) -> &str {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }

    let mut size = minimum_size.max(1);
    while size < index {
        let start = index - size;
        if text.is_char_boundary(start) {
            let candidate = &text[start..index];
            if is_unique(text, candidate) {
                return candidate;
            }
        }
        size += 1;
    }
    &text[..index]
}

#[inline]
fn is_unique(text: &str, needle: &str) -> bool {
    let mut occurrences = text.matches(needle);
    occurrences.next().is_some() && occurrences.next().is_none()
}

impl Match {
    /// Sentence end nearest to the end of this match in the input text
    pub fn nearest_period(&self, periods: &[usize], margin: usize) -> Option<usize> {
        find_nearest_period(self.input_span.end, periods, margin)
    }
}
