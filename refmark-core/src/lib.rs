//! Shingle fingerprinting and passage matching for near-duplicate detection
//!
//! This crate finds passages of an input document that reappear in candidate
//! documents and turns them into citation anchors. Text is reduced to
//! overlapping windows of stemmed words ("shingles"); equal shingles between
//! two documents become points on a grid, and points that sit close together
//! on that grid are clustered into matched passages.
//!
//! # Pipeline
//!
//! - **Text**: [`text::tokenize`], [`text::normalize`] and
//!   [`text::build_shingles`] turn raw text into shingles that remember the
//!   exact byte range they came from.
//! - **Matching**: [`matching::match_and_cluster`] finds equal shingles and
//!   groups them; [`Match::localize`] scores each group.
//! - **Overlaps**: [`matching::resolve_overlaps`] keeps the strongest match
//!   for each region of the input.
//! - **Citations**: [`citation::resolve_citations`] anchors surviving matches
//!   at sentence ends and numbers their sources.
//!
//! # Example
//!
//! ```rust
//! use refmark_core::language::LanguageRegistry;
//! use refmark_core::matching::{match_and_cluster, Match};
//! use refmark_core::text::{build_shingles, normalize, shingle_spans, tokenize};
//! use refmark_core::IdentityStemmer;
//!
//! let registry = LanguageRegistry::with_embedded();
//! let english = registry.get("en").unwrap();
//!
//! let text = "Quantum tunnelling lets particles cross classically forbidden barriers";
//! let shingles = build_shingles(&normalize(&tokenize(text), &english), 2, &IdentityStemmer);
//!
//! let clustering = match_and_cluster(&shingles, &shingles, 3, 5);
//! assert_eq!(clustering.clusters.len(), 1);
//!
//! let spans = shingle_spans(&shingles);
//! let m = Match::localize(clustering.clusters[0].clone(), &spans, &spans, "self", "Self");
//! assert_eq!(m.input_excerpt(text), text);
//! ```

pub mod citation;
pub mod error;
pub mod language;
pub mod matching;
pub mod stemmer;
pub mod text;
pub mod types;

pub use citation::{
    resolve_citations, Bibliography, BibliographyEntry, CitationOptions, CitationReplacement,
    Citations,
};
pub use error::{CoreError, Result};
pub use language::{LanguageConfig, LanguageProfile, LanguageRegistry};
pub use matching::{Cluster, Clustering, Match, Source};
#[cfg(feature = "snowball")]
pub use stemmer::SnowballStemmer;
pub use stemmer::{stemmer_for, IdentityStemmer, Stemmer};
pub use types::{MatchPoint, Shingle, ShingleRange, Span, Token};
