//! Cross-document matching: clustering, scoring and overlap resolution

pub mod cluster;
pub mod overlap;
pub mod scoring;
pub mod source;

pub use cluster::{cluster_points, find_match_points, match_and_cluster, Cluster, Clustering};
pub use overlap::{interval_overlap_fraction, resolve_overlaps, surviving_indices};
pub use scoring::{density_score, Match};
pub use source::Source;
