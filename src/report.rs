//! Report writing for ranked pathways.
//!
//! Flattens ranked solutions into per-relation records and writes the
//! comma-separated output files consumed downstream. File names embed the
//! query endpoints: `topk_paths_<AO>_<MIE>.csv`, `best_path_<AO>_<MIE>.csv`,
//! `exposure_summary_<AO>_<MIE>.csv`.

use std::fs::write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AopError;
use crate::exposure::ExposureRecord;
use crate::pathway::PathwayGraph;
use crate::solver::PathSolution;

/// One traversed relation of a ranked path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathEdgeRecord {
    pub rank: usize,
    pub src: String,
    pub dst: String,
    pub weight: f64,
    pub cum_score: f64,
}

/// Flatten ranked solutions into per-relation records, reading each
/// relation's weight back from the weighted graph.
pub fn flatten_paths(
    results: &[PathSolution],
    graph: &PathwayGraph,
    weight_key: &str,
) -> Vec<PathEdgeRecord> {
    let mut records = Vec::new();
    for (position, solution) in results.iter().enumerate() {
        for (src, dst) in solution.edges() {
            let weight = graph.weight(&src, &dst, weight_key).unwrap_or(0.0);
            records.push(PathEdgeRecord {
                rank: position + 1,
                src,
                dst,
                weight,
                cum_score: solution.score,
            });
        }
    }
    records
}

/// Write the flattened top-K table. Always written, even when no path was
/// found (header only).
pub fn write_topk(
    dir: &Path,
    ao: &str,
    mie: &str,
    records: &[PathEdgeRecord],
) -> Result<PathBuf, AopError> {
    let path = dir.join(format!("topk_paths_{ao}_{mie}.csv"));
    let mut content = String::from("rank,u,v,w,cum_score\n");
    for record in records {
        content.push_str(&format!(
            "{},{},{},{},{}\n",
            record.rank, record.src, record.dst, record.weight, record.cum_score
        ));
    }
    tracing::debug!("Writing {:?}", path);
    write(&path, content)?;
    Ok(path)
}

/// Write the best path as a one-column node listing.
pub fn write_best_path(
    dir: &Path,
    ao: &str,
    mie: &str,
    best: &PathSolution,
) -> Result<PathBuf, AopError> {
    let path = dir.join(format!("best_path_{ao}_{mie}.csv"));
    let mut content = String::from("node\n");
    for event in &best.events {
        content.push_str(event);
        content.push('\n');
    }
    tracing::debug!("Writing {:?}", path);
    write(&path, content)?;
    Ok(path)
}

/// Write the exposure summary table.
pub fn write_exposure(
    dir: &Path,
    ao: &str,
    mie: &str,
    records: &[ExposureRecord],
) -> Result<PathBuf, AopError> {
    let path = dir.join(format!("exposure_summary_{ao}_{mie}.csv"));
    let mut content = String::from("rank,event_id,casrn,dtxsid,product_count,product_ratio\n");
    for record in records {
        let count = record
            .product_count
            .map(|count| count.to_string())
            .unwrap_or_default();
        let ratio = record
            .product_ratio
            .map(|ratio| ratio.to_string())
            .unwrap_or_default();
        content.push_str(&format!(
            "{},{},{},{},{},{}\n",
            record.rank, record.event_id, record.casrn, record.dtxsid, count, ratio
        ));
    }
    tracing::debug!("Writing {:?}", path);
    write(&path, content)?;
    Ok(path)
}
