//! Overlap resolution across competing matches
//!
//! Matches from different sources often cover the same region of the
//! input. Among matches whose input ranges overlap by at least
//! `percent_to_merge` of the smaller range, only undominated ones survive.

use log::debug;

use crate::matching::scoring::Match;
use crate::types::ShingleRange;

/// Matches scoring below this never reach the final set
pub const MINIMUM_FINAL_SCORE: f64 = 1.0;

/// Intersection of two inclusive ranges as a fraction of the smaller width
///
/// Disjoint ranges give 0. A zero-width range that lies inside the other
/// range counts as fully covered.
pub fn interval_overlap_fraction(a: ShingleRange, b: ShingleRange) -> f64 {
    if a.is_disjoint(&b) {
        return 0.0;
    }
    let overlap = a.end.min(b.end) - a.start.max(b.start);
    let smaller = a.width().min(b.width());
    if smaller == 0 {
        return 1.0;
    }
    overlap as f64 / smaller as f64
}

/// Whether `other` (at discovery index `j`) suppresses `candidate` (at `i`)
///
/// Higher score wins; on equal scores the earlier-discovered match wins.
#[inline]
fn dominates(j: usize, other: &Match, i: usize, candidate: &Match) -> bool {
    other.score > candidate.score || (other.score == candidate.score && j < i)
}

/// Indices of the matches that survive overlap resolution
///
/// `matches` must be in discovery order. A match survives iff its score is
/// at least [`MINIMUM_FINAL_SCORE`] and no other match overlapping it by at
/// least `percent_to_merge` dominates it. A match never competes with
/// itself.
pub fn surviving_indices(matches: &[Match], percent_to_merge: f64) -> Vec<usize> {
    let survivors: Vec<usize> = matches
        .iter()
        .enumerate()
        .filter(|&(i, candidate)| {
            candidate.score >= MINIMUM_FINAL_SCORE
                && !matches.iter().enumerate().any(|(j, other)| {
                    j != i
                        && interval_overlap_fraction(
                            candidate.input_shingles,
                            other.input_shingles,
                        ) >= percent_to_merge
                        && dominates(j, other, i, candidate)
                })
        })
        .map(|(i, _)| i)
        .collect();

    debug!(
        "Overlap resolution kept {} of {} matches",
        survivors.len(),
        matches.len()
    );
    survivors
}

/// The matches that survive overlap resolution, in discovery order
pub fn resolve_overlaps(matches: &[Match], percent_to_merge: f64) -> Vec<&Match> {
    surviving_indices(matches, percent_to_merge)
        .into_iter()
        .map(|i| &matches[i])
        .collect()
}
