//! Orchestration over the refmark fingerprinting core
//!
//! This crate wires the core stages into runs over whole documents:
//!
//! - [`Comparator`] fingerprints an input once and compares it against
//!   many candidate documents in parallel.
//! - [`MatchPipeline`] finds candidates through caller-supplied
//!   [`SearchProvider`] and [`DocumentFetcher`] implementations, one query
//!   batch at a time, comparing each URL once.
//! - [`CitationRun`] and [`AutoCitation`] turn the resulting sources into
//!   citation markers and a bibliography.
//! - [`render_report`] and [`Report`] summarize matches for people and
//!   for tools.
//!
//! # Example
//!
//! ```rust
//! use refmark_engine::{CandidateDocument, CitationRun, Comparator, Config};
//! use refmark_core::{IdentityStemmer, LanguageRegistry};
//!
//! let registry = LanguageRegistry::with_embedded();
//! let config = Config::builder().threads(Some(2)).build().unwrap();
//! let comparator = Comparator::new(config.clone(), &registry, Box::new(IdentityStemmer)).unwrap();
//!
//! let text = "Glaciers carve valleys slowly grinding bedrock beneath moving ice. Then I stop.";
//! let candidates = [CandidateDocument::new(
//!     "https://ice.example/",
//!     "Ice",
//!     "Glaciers carve valleys slowly grinding bedrock beneath moving ice.",
//! )];
//!
//! let sources = comparator.compare_all(text, &candidates);
//! let citations = CitationRun::from_sources(text, &sources, &config);
//! assert_eq!(citations.bibliography.len(), 1);
//! assert!(citations.replacements[0].numbered.ends_with("[1]"));
//! ```

pub mod citation;
pub mod comparator;
pub mod config;
pub mod error;
pub mod executor;
pub mod pipeline;
pub mod report;
pub mod retrieval;

pub use citation::{AutoCitation, CitationRun, CitedText};
pub use comparator::{CandidateDocument, Comparator, Fingerprint};
pub use config::{Config, ConfigBuilder};
pub use error::{EngineError, Result, RetrievalError};
pub use executor::Executor;
pub use pipeline::MatchPipeline;
pub use report::{render_report, Report, ReportEntry, SourceReport};
pub use retrieval::{search_queries, DocumentFetcher, FetchedDocument, SearchProvider, UrlLedger};
