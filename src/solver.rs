//! Maximum-weight path solving over acyclic pathway graphs.
//!
//! A single dynamic-programming pass over a topological order: every node
//! starts at score -inf except the source at 0, each node relaxes against its
//! direct predecessors, and the best path is reconstructed by walking
//! predecessor links back from the target.

use petgraph::{algo::toposort, graph::NodeIndex, Direction};
use serde::{Deserialize, Serialize};

use crate::pathway::PathwayGraph;

/// An ordered walk from source to target with its cumulative weight. The
/// empty solution (no events, -inf score) is the legitimate "no path"
/// outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSolution {
    pub events: Vec<String>,
    pub score: f64,
}

impl PathSolution {
    pub fn none() -> Self {
        PathSolution {
            events: Vec::new(),
            score: f64::NEG_INFINITY,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The traversed relations as ordered (src, dst) pairs.
    pub fn edges(&self) -> Vec<(String, String)> {
        self.events
            .windows(2)
            .map(|pair| (pair[0].clone(), pair[1].clone()))
            .collect()
    }
}

impl Default for PathSolution {
    fn default() -> Self {
        PathSolution::none()
    }
}

/// Compute the maximum-total-weight path from `source` to `target`, reading
/// each relation's weight from its score named `weight_key` (missing keys
/// read as 0.0).
///
/// Requires an acyclic graph; run [`PathwayGraph::reduce_cycles`] first. A
/// cycle surfaced by the topological sort is logged and treated as
/// unreachable rather than looping.
///
/// Ties between equally scoring predecessors resolve deterministically:
/// predecessors are visited in sorted event-id order and the first best
/// score seen is kept.
pub fn longest_path(
    graph: &PathwayGraph,
    source: &str,
    target: &str,
    weight_key: &str,
) -> PathSolution {
    let (Some(source_idx), Some(target_idx)) = (graph.index_of(source), graph.index_of(target))
    else {
        return PathSolution::none();
    };
    let relations = graph.as_graph();
    let order = match toposort(relations, None) {
        Ok(order) => order,
        Err(_) => {
            tracing::error!("pathway graph contains a cycle; no topological order exists");
            return PathSolution::none();
        }
    };

    let mut best = vec![f64::NEG_INFINITY; relations.node_count()];
    let mut previous: Vec<Option<NodeIndex>> = vec![None; relations.node_count()];
    best[source_idx.index()] = 0.0;

    for sink in order {
        let mut predecessors: Vec<NodeIndex> = relations
            .neighbors_directed(sink, Direction::Incoming)
            .collect();
        predecessors.sort_by(|a, b| relations[*a].cmp(&relations[*b]));
        for pred in predecessors {
            let weight = relations
                .find_edge(pred, sink)
                .and_then(|edge| relations[edge].get(weight_key))
                .unwrap_or(0.0);
            let candidate = best[pred.index()] + weight;
            if candidate > best[sink.index()] {
                best[sink.index()] = candidate;
                previous[sink.index()] = Some(pred);
            }
        }
    }

    if !best[target_idx.index()].is_finite() {
        return PathSolution::none();
    }
    let mut events = Vec::new();
    let mut cursor = Some(target_idx);
    while let Some(idx) = cursor {
        events.push(relations[idx].clone());
        cursor = previous[idx.index()];
    }
    events.reverse();
    PathSolution {
        events,
        score: best[target_idx.index()],
    }
}
