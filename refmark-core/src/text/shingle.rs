//! Stemming and sliding-window shingling

use crate::stemmer::Stemmer;
use crate::types::{Shingle, Span, Token};

/// Stem every token and group the stems into windows of `size`
///
/// Shingle `i` covers tokens `[i, i + size)` and spans from the start of
/// token `i` to the end of token `i + size - 1`. Fewer than `size` tokens
/// (or a zero size) produce no shingles.
pub fn build_shingles<S>(tokens: &[Token], size: usize, stemmer: &S) -> Vec<Shingle>
where
    S: Stemmer + ?Sized,
{
    if size == 0 || tokens.len() < size {
        return Vec::new();
    }

    let stems: Vec<String> = tokens.iter().map(|t| stemmer.stem(&t.text)).collect();

    stems
        .windows(size)
        .zip(tokens.windows(size))
        .map(|(window, members)| {
            let span = members[0].span.to(members[size - 1].span);
            Shingle::new(window.iter().cloned(), span)
        })
        .collect()
}

/// Character spans of a shingle stream, index-aligned with it
pub fn shingle_spans(shingles: &[Shingle]) -> Vec<Span> {
    shingles.iter().map(|s| s.span).collect()
}
