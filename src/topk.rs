//! Top-K path enumeration by iterative edge masking.
//!
//! A greedy diversity heuristic, not an exact K-best algorithm: each round
//! re-solves the longest path, then picks the first relation of that path
//! that has not been masked before, and removes exactly that relation from a
//! fresh copy of the baseline graph. Because the working graph always resets
//! to the full baseline, a mask that does not change the optimum makes the
//! same path appear again; results stay in discovery order and scores are
//! only non-increasing in the common case.

use std::collections::BTreeSet;

use crate::pathway::PathwayGraph;
use crate::solver::{longest_path, PathSolution};

/// Enumerate up to `k` maximum-weight paths from `source` to `target`.
/// `k = 0` yields an empty list; enumeration stops early when no path
/// remains or when every relation of the current best path has already been
/// masked. The mask set is owned by this invocation and never shared across
/// queries.
pub fn top_k_paths(
    graph: &PathwayGraph,
    source: &str,
    target: &str,
    k: usize,
    weight_key: &str,
) -> Vec<PathSolution> {
    let mut results = Vec::new();
    let mut used_masks: BTreeSet<(String, String)> = BTreeSet::new();
    let mut working = graph.clone();
    for _ in 0..k {
        let solution = longest_path(&working, source, target, weight_key);
        if solution.is_empty() {
            break;
        }
        let edges = solution.edges();
        results.push(solution);
        let Some(mask) = edges.into_iter().find(|edge| !used_masks.contains(edge)) else {
            // Every relation of the best path has been tried; no further
            // candidates can be generated.
            break;
        };
        tracing::debug!("masking relation {} -> {}", mask.0, mask.1);
        working = graph.clone();
        working.remove_edge(&mask.0, &mask.1);
        used_masks.insert(mask);
    }
    results
}
