//! # aop-core
//!
//! Evidence-weighted ranking of causal paths through adverse outcome pathway
//! (AOP) networks.
//!
//! An AOP network is a directed acyclic graph of biological events: a
//! molecular initiating event (MIE) perturbs downstream key events until an
//! adverse outcome (AO) manifests. Every relation carries evidence scores
//! from several sources (AOP-Wiki, ToxCast assays, literature mining);
//! blending them into one scalar weight per relation turns "which causal
//! chain is best supported?" into a maximum-weight path problem.
//!
//! ## Pipeline
//!
//! 1. [`ingest`]: load the event and relation tables from disk.
//! 2. [`pathway`]: build the directed graph, collapse duplicate relations,
//!    break any cycles, and restrict to a hop-bounded MIE -> AO subgraph.
//! 3. [`weights`]: clamp and blend the per-source evidence scores, then
//!    prune relations below the configured weight floor.
//! 4. [`solver`] / [`topk`]: enumerate up to K maximum-weight paths by
//!    iterative edge masking around a longest-path dynamic program.
//! 5. [`report`] / [`exposure`]: flatten the ranked paths into tabular
//!    reports and summarise chemical exposure for the leading events.
//!
//! The enumeration in [`topk`] is a diversity heuristic, not an exact K-best
//! algorithm: each round removes a single not-yet-tried relation of the
//! current best path from a fresh copy of the baseline graph and re-solves.
//! See [`topk::top_k_paths`] for the exact contract.
//!
//! ## Quick Start
//!
//! ```rust
//! use aop_core::pathway::PathwayGraph;
//! use aop_core::properties::{EdgeRecord, EventKind, EventNode, ScoreSet};
//! use aop_core::properties::{SCORE_AOPWIKI, WEIGHT_INTEGRATED};
//! use aop_core::topk::top_k_paths;
//! use aop_core::weights::{integrate_scores, threshold_edges, BlendWeights};
//!
//! # fn main() -> Result<(), aop_core::AopError> {
//! let events = vec![
//!     EventNode::new("MIE", EventKind::Mie),
//!     EventNode::new("AO", EventKind::Ao),
//! ];
//! let mut scores = ScoreSet::empty();
//! scores.set(SCORE_AOPWIKI, 0.9);
//! let records = integrate_scores(
//!     vec![EdgeRecord::new("MIE", "AO", scores)],
//!     &BlendWeights { alpha: 1.0, beta: 0.0, gamma: 0.0 },
//! )?;
//! let graph = PathwayGraph::from_records(events, threshold_edges(records, 0.5));
//! let ranked = top_k_paths(&graph, "MIE", "AO", 3, WEIGHT_INTEGRATED);
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].events, vec!["MIE", "AO"]);
//! # Ok(())
//! # }
//! ```
//!
//! Whole runs (tables on disk in, report files out) are driven through
//! [`pipeline::run`] with a [`config::RunConfig`]; the `aop` binary (feature
//! `bin`) wraps exactly that.

pub mod config;
pub mod error;
pub mod exposure;
pub mod ingest;
pub mod pathway;
pub mod pipeline;
pub mod properties;
pub mod report;
pub mod solver;
#[cfg(test)]
mod tests;
pub mod topk;
pub mod weights;

pub use error::*;
