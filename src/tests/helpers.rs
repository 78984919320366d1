//! Shared test utilities for the pathfinding core.

use std::collections::BTreeSet;

use crate::pathway::PathwayGraph;
use crate::properties::{EdgeRecord, EventKind, EventNode, ScoreSet, WEIGHT_INTEGRATED};

/// Initialize logging for tests
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

pub fn event(id: &str, kind: EventKind) -> EventNode {
    EventNode::new(id, kind)
}

/// An edge record carrying only an already integrated weight.
pub fn weighted_edge(src: &str, dst: &str, weight: f64) -> EdgeRecord {
    let mut scores = ScoreSet::empty();
    scores.set(WEIGHT_INTEGRATED, weight);
    EdgeRecord::new(src, dst, scores)
}

/// Build a graph from (src, dst, weight) triples, declaring every endpoint
/// as a key event.
pub fn weighted_graph(edges: &[(&str, &str, f64)]) -> PathwayGraph {
    let ids: BTreeSet<&str> = edges
        .iter()
        .flat_map(|(src, dst, _)| [*src, *dst])
        .collect();
    let events = ids
        .into_iter()
        .map(|id| event(id, EventKind::Ke))
        .collect();
    let records = edges
        .iter()
        .map(|(src, dst, weight)| weighted_edge(src, dst, *weight))
        .collect();
    PathwayGraph::from_records(events, records)
}
