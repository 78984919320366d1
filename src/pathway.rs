//! Graph data structures for pathway networks.
//!
//! [`PathwayGraph`] combines an event map with a petgraph relation graph:
//! - events: id -> [`EventNode`], the reporting-facing labels
//! - relations: directed graph whose node weights are event ids and whose
//!   edge weights are [`ScoreSet`]s
//!
//! The solver requires an acyclic relation graph. Raw inputs are reduced via
//! [`PathwayGraph::reduce_cycles`] before any weighting or pathfinding.

use std::collections::{BTreeMap, BTreeSet};

use petgraph::{
    algo::is_cyclic_directed,
    graph::{DiGraph, NodeIndex},
    visit::{depth_first_search, DfsEvent, EdgeRef},
    Direction,
};

use crate::properties::{EdgeRecord, EventKind, EventNode, ScoreSet};

#[derive(Debug, Default, Clone)]
pub struct PathwayGraph {
    events: BTreeMap<String, EventNode>,
    relations: DiGraph<String, ScoreSet>,
    index: BTreeMap<String, NodeIndex>,
}

impl PathwayGraph {
    /// Build a graph from event declarations and relation records. Parallel
    /// records for the same ordered pair collapse to a single edge (the last
    /// record wins); self-relations are dropped.
    pub fn from_records(events: Vec<EventNode>, edges: Vec<EdgeRecord>) -> Self {
        let mut graph = PathwayGraph::default();
        for node in events {
            graph.add_event(node);
        }
        for record in edges {
            graph.upsert_edge(record);
        }
        graph
    }

    pub fn as_graph(&self) -> &DiGraph<String, ScoreSet> {
        &self.relations
    }

    pub fn as_graph_mut(&mut self) -> &mut DiGraph<String, ScoreSet> {
        &mut self.relations
    }

    pub fn events(&self) -> &BTreeMap<String, EventNode> {
        &self.events
    }

    pub fn event(&self, id: &str) -> Option<&EventNode> {
        self.events.get(id)
    }

    pub fn contains_event(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn event_count(&self) -> usize {
        self.relations.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.relations.edge_count()
    }

    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn add_event(&mut self, node: EventNode) {
        let id = node.id.clone();
        self.index
            .entry(id.clone())
            .or_insert_with(|| self.relations.add_node(id.clone()));
        self.events.insert(id, node);
    }

    fn ensure_event(&mut self, id: &str) -> NodeIndex {
        if let Some(idx) = self.index.get(id) {
            return *idx;
        }
        // Relation tables may reference events never declared in the event
        // table. Keep them as anonymous intermediates rather than dropping
        // the relation.
        tracing::warn!("relation references undeclared event '{id}'");
        let idx = self.relations.add_node(id.to_string());
        self.index.insert(id.to_string(), idx);
        self.events
            .insert(id.to_string(), EventNode::new(id, EventKind::Ke));
        idx
    }

    /// Add or replace the relation described by `record`.
    pub fn upsert_edge(&mut self, record: EdgeRecord) {
        if record.src == record.dst {
            tracing::warn!(
                "Ignoring self-relation (infinite loop) on event '{}'",
                record.src
            );
            return;
        }
        let source = self.ensure_event(&record.src);
        let sink = self.ensure_event(&record.dst);
        self.relations.update_edge(source, sink, record.scores);
    }

    /// Remove the relation `src -> dst`. Returns false when no such relation
    /// exists.
    pub fn remove_edge(&mut self, src: &str, dst: &str) -> bool {
        let (Some(&source), Some(&sink)) = (self.index.get(src), self.index.get(dst)) else {
            return false;
        };
        match self.relations.find_edge(source, sink) {
            Some(edge) => {
                self.relations.remove_edge(edge);
                true
            }
            None => false,
        }
    }

    /// Read a named score on the relation `src -> dst`.
    pub fn weight(&self, src: &str, dst: &str, key: &str) -> Option<f64> {
        let (source, sink) = (self.index_of(src)?, self.index_of(dst)?);
        let edge = self.relations.find_edge(source, sink)?;
        self.relations[edge].get(key)
    }

    /// Set a named score on the relation `src -> dst`. Returns false when no
    /// such relation exists.
    pub fn set_weight(&mut self, src: &str, dst: &str, key: &str, value: f64) -> bool {
        let (Some(&source), Some(&sink)) = (self.index.get(src), self.index.get(dst)) else {
            return false;
        };
        match self.relations.find_edge(source, sink) {
            Some(edge) => {
                self.relations[edge].set(key, value);
                true
            }
            None => false,
        }
    }

    /// Successor event ids of `id`, in relation insertion order.
    pub fn successors(&self, id: &str) -> Vec<String> {
        let Some(idx) = self.index_of(id) else {
            return Vec::new();
        };
        self.relations
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|n| self.relations[n].clone())
            .collect()
    }

    /// Direct predecessor event ids of `id`, sorted.
    pub fn predecessors(&self, id: &str) -> Vec<String> {
        let Some(idx) = self.index_of(id) else {
            return Vec::new();
        };
        let mut ids: Vec<String> = self
            .relations
            .neighbors_directed(idx, Direction::Incoming)
            .map(|n| self.relations[n].clone())
            .collect();
        ids.sort();
        ids
    }

    /// The relations as records, in edge insertion order.
    pub fn edge_records(&self) -> Vec<EdgeRecord> {
        self.relations
            .edge_references()
            .map(|edge| EdgeRecord {
                src: self.relations[edge.source()].clone(),
                dst: self.relations[edge.target()].clone(),
                scores: edge.weight().clone(),
            })
            .collect()
    }

    pub fn is_acyclic(&self) -> bool {
        !is_cyclic_directed(&self.relations)
    }

    /// Conservatively reduce a cyclic input to a directed acyclic graph by
    /// removing every back edge found by a depth-first search. Every cycle
    /// contains at least one back edge of the DFS forest, so the result is
    /// always acyclic. Returns the number of removed relations.
    pub fn reduce_cycles(&mut self) -> usize {
        if self.is_acyclic() {
            return 0;
        }
        let mut back_edges = Vec::new();
        depth_first_search(&self.relations, self.relations.node_indices(), |event| {
            if let DfsEvent::BackEdge(u, v) = event {
                back_edges.push((u, v));
            }
        });
        let mut removed = 0;
        for (u, v) in back_edges {
            if let Some(edge) = self.relations.find_edge(u, v) {
                tracing::warn!(
                    "breaking cycle: removing relation {} -> {}",
                    self.relations[u],
                    self.relations[v]
                );
                self.relations.remove_edge(edge);
                removed += 1;
            }
        }
        removed
    }

    /// The induced subgraph of all events reachable from `source` within
    /// `max_hops` successor steps. The `target` event is force-included when
    /// it exists in this graph, even if unreached, so a later solve can
    /// report "no path" rather than "unknown event".
    pub fn subgraph_between(&self, source: &str, target: &str, max_hops: usize) -> PathwayGraph {
        let mut visited = BTreeSet::new();
        let mut frontier = Vec::new();
        if self.contains_event(source) {
            visited.insert(source.to_string());
            frontier.push(source.to_string());
        }
        let mut hops = 0;
        while !frontier.is_empty() && hops < max_hops {
            let mut next = Vec::new();
            for id in frontier {
                for successor in self.successors(&id) {
                    if visited.insert(successor.clone()) {
                        next.push(successor);
                    }
                }
            }
            frontier = next;
            hops += 1;
        }
        if !visited.contains(target) && self.contains_event(target) {
            visited.insert(target.to_string());
        }

        let events = visited
            .iter()
            .filter_map(|id| self.events.get(id).cloned())
            .collect();
        let edges = self
            .edge_records()
            .into_iter()
            .filter(|record| visited.contains(&record.src) && visited.contains(&record.dst))
            .collect();
        PathwayGraph::from_records(events, edges)
    }
}
