//! Case folding, character stripping and stopword removal

use crate::error::Result;
use crate::language::{LanguageProfile, LanguageRegistry};
use crate::types::Token;

/// Normalize tokens and drop stopwords
///
/// Surviving tokens carry their normalized text but keep the span of the
/// original token, so offsets still point at the verbatim source word.
/// Tokens that become empty after stripping are dropped like stopwords.
pub fn normalize(tokens: &[Token], profile: &LanguageProfile) -> Vec<Token> {
    tokens
        .iter()
        .filter_map(|token| {
            let word = profile.normalize_word(&token.text);
            profile.keeps(&word).then(|| Token::new(word, token.span))
        })
        .collect()
}

/// Normalize tokens using the profile registered for `language`
pub fn normalize_for(
    tokens: &[Token],
    registry: &LanguageRegistry,
    language: &str,
) -> Result<Vec<Token>> {
    let profile = registry.get(language)?;
    Ok(normalize(tokens, &profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::types::Span;

    fn tokens(pairs: &[(&str, usize, usize)]) -> Vec<Token> {
        pairs
            .iter()
            .map(|&(w, s, e)| Token::new(w, Span::new(s, e)))
            .collect()
    }

    #[test]
    fn test_stopwords_removed_and_span_preserved() {
        let registry = LanguageRegistry::with_embedded();
        let input = tokens(&[
            ("Hello,", 0, 6),
            ("my", 7, 9),
            ("name", 10, 14),
            ("is", 15, 17),
            ("jazz", 20, 25),
        ]);

        let normalized = normalize_for(&input, &registry, "english").unwrap();
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].text, "jazz");
        assert_eq!(normalized[0].span, Span::new(20, 25));
    }

    #[test]
    fn test_original_span_kept_after_stripping() {
        let registry = LanguageRegistry::with_embedded();
        let input = tokens(&[("(Networks).", 4, 15)]);
        let normalized = normalize_for(&input, &registry, "en").unwrap();
        assert_eq!(normalized[0].text, "networks");
        assert_eq!(normalized[0].span, Span::new(4, 15));
    }

    #[test]
    fn test_tokens_emptied_by_stripping_are_removed() {
        let registry = LanguageRegistry::with_embedded();
        let input = tokens(&[("--", 0, 2), ("«»", 3, 7), ("recurrent", 8, 17)]);
        let normalized = normalize_for(&input, &registry, "en").unwrap();
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].text, "recurrent");
    }

    #[test]
    fn test_spanish_keeps_accents() {
        let registry = LanguageRegistry::with_embedded();
        let input = tokens(&[("Canción", 0, 8), ("de", 9, 11), ("Niños", 12, 18)]);
        let normalized = normalize_for(&input, &registry, "es").unwrap();
        let words: Vec<&str> = normalized.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["canción", "niños"]);
    }

    #[test]
    fn test_unknown_language_fails() {
        let registry = LanguageRegistry::with_embedded();
        let err = normalize_for(&[], &registry, "xx").unwrap_err();
        assert!(matches!(err, CoreError::UnknownLanguage { .. }));
    }
}
