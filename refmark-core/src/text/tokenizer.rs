//! Whitespace and period tokenization with exact byte offsets

use crate::types::{Span, Token};

/// Sentence-terminating character treated as a token separator
pub const PERIOD: char = '.';

#[inline]
fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == PERIOD
}

/// Split `text` into maximal runs of non-separator characters
///
/// Every token's span satisfies `text[span.start..span.end] == token.text`.
/// No normalization happens here.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (pos, ch) in text.char_indices() {
        match (is_separator(ch), start) {
            (true, Some(s)) => {
                tokens.push(Token::new(&text[s..pos], Span::new(s, pos)));
                start = None;
            }
            (false, None) => start = Some(pos),
            _ => {}
        }
    }

    if let Some(s) = start {
        tokens.push(Token::new(&text[s..], Span::new(s, text.len())));
    }

    tokens
}
