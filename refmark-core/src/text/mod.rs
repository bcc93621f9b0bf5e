//! Text preparation: tokenize, normalize, shingle

pub mod normalizer;
pub mod shingle;
pub mod tokenizer;

pub use normalizer::{normalize, normalize_for};
pub use shingle::{build_shingles, shingle_spans};
pub use tokenizer::tokenize;
