//! Tests for the longest-path dynamic program.

use approx::assert_relative_eq;

use super::helpers::{event, init_logging, weighted_edge, weighted_graph};
use crate::pathway::PathwayGraph;
use crate::properties::{EventKind, WEIGHT_INTEGRATED};
use crate::solver::longest_path;

#[test]
fn prefers_the_heavier_route() {
    init_logging();
    let graph = weighted_graph(&[("a", "b", 1.0), ("a", "c", 5.0), ("b", "d", 1.0), ("c", "d", 1.0)]);
    let solution = longest_path(&graph, "a", "d", WEIGHT_INTEGRATED);
    assert_eq!(solution.events, vec!["a", "c", "d"]);
    assert_relative_eq!(solution.score, 6.0);
}

#[test]
fn unreachable_target_yields_the_empty_solution() {
    // "z" exists but has no incoming relation from anything reachable.
    let graph = PathwayGraph::from_records(
        vec![
            event("a", EventKind::Mie),
            event("b", EventKind::Ke),
            event("z", EventKind::Ao),
        ],
        vec![weighted_edge("a", "b", 1.0)],
    );
    let solution = longest_path(&graph, "a", "z", WEIGHT_INTEGRATED);
    assert!(solution.is_empty());
    assert_eq!(solution.score, f64::NEG_INFINITY);
}

#[test]
fn absent_endpoints_yield_the_empty_solution() {
    let graph = weighted_graph(&[("a", "b", 1.0)]);
    assert!(longest_path(&graph, "missing", "b", WEIGHT_INTEGRATED).is_empty());
    assert!(longest_path(&graph, "a", "missing", WEIGHT_INTEGRATED).is_empty());
}

#[test]
fn source_equals_target() {
    let graph = weighted_graph(&[("a", "b", 1.0)]);
    let solution = longest_path(&graph, "a", "a", WEIGHT_INTEGRATED);
    assert_eq!(solution.events, vec!["a"]);
    assert_relative_eq!(solution.score, 0.0);
}

#[test]
fn equal_routes_resolve_deterministically() {
    // Both routes score 2.0; predecessors are visited in sorted id order and
    // the first best seen is kept, so "b" wins over "c".
    let graph = weighted_graph(&[("a", "b", 1.0), ("a", "c", 1.0), ("b", "d", 1.0), ("c", "d", 1.0)]);
    let solution = longest_path(&graph, "a", "d", WEIGHT_INTEGRATED);
    assert_eq!(solution.events, vec!["a", "b", "d"]);
}

#[test]
fn missing_weight_key_reads_as_zero() {
    let graph = PathwayGraph::from_records(
        vec![event("a", EventKind::Mie), event("b", EventKind::Ao)],
        vec![weighted_edge("a", "b", 0.7)],
    );
    let solution = longest_path(&graph, "a", "b", "no_such_key");
    assert_eq!(solution.events, vec!["a", "b"]);
    assert_relative_eq!(solution.score, 0.0);
}
