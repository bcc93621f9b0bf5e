//! Shingle matching and spatial clustering of match points
//!
//! Match points are grouped into connected components of the graph whose
//! edges join points within Chebyshev distance `maximum_gap`. Components
//! are computed with a disjoint-set forest over the point arena, which
//! yields the same partition as merging clusters incrementally while the
//! points are discovered.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::types::{MatchPoint, Shingle, ShingleRange};

/// A group of mutually reachable match points
///
/// Points are kept in discovery order. Clustering never yields an empty
/// cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    points: Vec<MatchPoint>,
}

impl Cluster {
    /// Wrap a non-empty point list
    pub fn from_points(points: Vec<MatchPoint>) -> Option<Self> {
        (!points.is_empty()).then_some(Self { points })
    }

    pub fn points(&self) -> &[MatchPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, point: &MatchPoint) -> bool {
        self.points.contains(point)
    }

    /// Bounding range of the input coordinates
    pub fn input_range(&self) -> ShingleRange {
        bounds(self.points.iter().map(|p| p.input))
    }

    /// Bounding range of the candidate coordinates
    pub fn candidate_range(&self) -> ShingleRange {
        bounds(self.points.iter().map(|p| p.candidate))
    }
}

fn bounds(coords: impl Iterator<Item = usize>) -> ShingleRange {
    coords
        .fold(None, |acc: Option<ShingleRange>, c| {
            Some(match acc {
                None => ShingleRange::new(c, c),
                Some(r) => ShingleRange::new(r.start.min(c), r.end.max(c)),
            })
        })
        .unwrap_or_default()
}

/// Clusters found for one (input, candidate) pair, with the raw points
#[derive(Debug, Clone, Default)]
pub struct Clustering {
    pub points: Vec<MatchPoint>,
    pub clusters: Vec<Cluster>,
}

/// Every `(i, j)` where input shingle `i` equals candidate shingle `j`
///
/// Points come out ordered by `i`, then `j`: the order of an exhaustive
/// row-by-row scan.
pub fn find_match_points(input: &[Shingle], candidate: &[Shingle]) -> Vec<MatchPoint> {
    let mut positions: HashMap<&[String], Vec<usize>> = HashMap::new();
    for (j, shingle) in candidate.iter().enumerate() {
        positions.entry(shingle.stems.as_slice()).or_default().push(j);
    }

    let mut points = Vec::new();
    for (i, shingle) in input.iter().enumerate() {
        if let Some(columns) = positions.get(shingle.stems.as_slice()) {
            points.extend(columns.iter().map(|&j| MatchPoint::new(i, j)));
        }
    }
    points
}

/// Disjoint-set forest with path halving and union by size
#[derive(Debug)]
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut a, mut b) = (self.find(a), self.find(b));
        if a == b {
            return false;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
        true
    }
}

/// Partition `points` into clusters and drop the small ones
///
/// Two points share a cluster iff a chain of points links them with every
/// step at Chebyshev distance `<= maximum_gap`. Clusters are ordered by
/// their earliest point and keep their points in input order. Clusters
/// with fewer than `minimum_cluster_size` points are discarded.
pub fn cluster_points(
    points: &[MatchPoint],
    maximum_gap: usize,
    minimum_cluster_size: usize,
) -> Vec<Cluster> {
    let mut sets = DisjointSet::new(points.len());

    // Sweep along the input axis so only points within the gap are compared
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by_key(|&k| points[k].input);

    for (pos, &a) in order.iter().enumerate() {
        for &b in &order[pos + 1..] {
            if points[b].input - points[a].input > maximum_gap {
                break;
            }
            if points[a].candidate.abs_diff(points[b].candidate) <= maximum_gap {
                sets.union(a, b);
            }
        }
    }

    let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
    let mut groups: Vec<Vec<MatchPoint>> = Vec::new();
    for (k, point) in points.iter().enumerate() {
        let root = sets.find(k);
        let slot = *slot_of_root.entry(root).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(*point);
    }

    let total = groups.len();
    let clusters: Vec<Cluster> = groups
        .into_iter()
        .filter(|g| g.len() >= minimum_cluster_size)
        .filter_map(Cluster::from_points)
        .collect();

    debug!(
        "Clustered {} points into {} groups, {} kept (min size {})",
        points.len(),
        total,
        clusters.len(),
        minimum_cluster_size
    );
    clusters
}

/// Find equal shingles between two streams and cluster them
pub fn match_and_cluster(
    input: &[Shingle],
    candidate: &[Shingle],
    maximum_gap: usize,
    minimum_cluster_size: usize,
) -> Clustering {
    let points = find_match_points(input, candidate);
    let clusters = cluster_points(&points, maximum_gap, minimum_cluster_size);
    Clustering { points, clusters }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Span;

    fn stream(words: &[&str]) -> Vec<Shingle> {
        words
            .iter()
            .map(|w| Shingle::new([w.to_string()], Span::default()))
            .collect()
    }

    fn pts(pairs: &[(usize, usize)]) -> Vec<MatchPoint> {
        pairs.iter().copied().map(MatchPoint::from).collect()
    }

    #[test]
    fn test_single_cluster_from_shifted_run() {
        let result = match_and_cluster(
            &stream(&["a", "b", "c", "d"]),
            &stream(&["x", "c", "d", "y"]),
            2,
            1,
        );
        assert_eq!(result.points, pts(&[(2, 1), (3, 2)]));
        assert_eq!(result.clusters.len(), 1);
        assert_eq!(result.clusters[0].points(), pts(&[(2, 1), (3, 2)]).as_slice());
    }

    #[test]
    fn test_no_common_shingles() {
        let result = match_and_cluster(&stream(&["a", "b"]), &stream(&["c", "d"]), 3, 1);
        assert!(result.points.is_empty());
        assert!(result.clusters.is_empty());
    }

    #[test]
    fn test_points_in_scan_order() {
        let points = find_match_points(&stream(&["a", "b", "a"]), &stream(&["a", "a", "b"]));
        assert_eq!(points, pts(&[(0, 0), (0, 1), (1, 2), (2, 0), (2, 1)]));
    }

    #[test]
    fn test_far_points_form_separate_clusters() {
        let clusters = cluster_points(&pts(&[(0, 0), (1, 1), (20, 20), (21, 21)]), 3, 1);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].points(), pts(&[(0, 0), (1, 1)]).as_slice());
        assert_eq!(clusters[1].points(), pts(&[(20, 20), (21, 21)]).as_slice());
    }

    #[test]
    fn test_gap_is_inclusive() {
        assert_eq!(cluster_points(&pts(&[(0, 0), (3, 3)]), 3, 1).len(), 1);
        assert_eq!(cluster_points(&pts(&[(0, 0), (4, 3)]), 3, 1).len(), 2);
        assert_eq!(cluster_points(&pts(&[(0, 0), (0, 4)]), 3, 1).len(), 2);
    }

    #[test]
    fn test_zero_gap_only_joins_duplicates() {
        let clusters = cluster_points(&pts(&[(1, 1), (1, 1), (2, 2)]), 0, 1);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].len(), 2);
    }

    #[test]
    fn test_bridge_point_merges_existing_clusters() {
        // (0,0) and (6,6) start apart; (3,3) arrives last and links them
        let clusters = cluster_points(&pts(&[(0, 0), (6, 6), (3, 3)]), 3, 1);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].points(), pts(&[(0, 0), (6, 6), (3, 3)]).as_slice());
    }

    #[test]
    fn test_chain_spans_beyond_gap() {
        let clusters = cluster_points(&pts(&[(0, 10), (2, 12), (4, 14), (6, 16)]), 2, 1);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].input_range(), ShingleRange::new(0, 6));
        assert_eq!(clusters[0].candidate_range(), ShingleRange::new(10, 16));
    }

    #[test]
    fn test_minimum_cluster_size_filters() {
        let points = pts(&[(0, 0), (1, 1), (2, 2), (40, 3)]);
        let clusters = cluster_points(&points, 3, 2);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].len(), 3);
        assert!(!clusters[0].contains(&MatchPoint::new(40, 3)));
    }

    #[test]
    fn test_clusters_ordered_by_first_point() {
        let clusters = cluster_points(&pts(&[(0, 30), (1, 0), (2, 31), (3, 1)]), 2, 1);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].points()[0], MatchPoint::new(0, 30));
        assert_eq!(clusters[1].points()[0], MatchPoint::new(1, 0));
    }

    #[test]
    fn test_empty_cluster_rejected() {
        assert!(Cluster::from_points(Vec::new()).is_none());
    }
}
