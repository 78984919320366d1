//! End-to-end orchestration of one MIE -> AO query.
//!
//! Loads the input tables, prepares the weighted subgraph, ranks up to K
//! causal paths and writes the report files. A configuration error (blend
//! coefficients not summing to 1.0) aborts before any output is written; a
//! no-path outcome completes normally and emits empty or partial outputs.

use std::fs::create_dir_all;
use std::path::PathBuf;

use crate::config::RunConfig;
use crate::error::AopError;
use crate::pathway::PathwayGraph;
use crate::properties::WEIGHT_INTEGRATED;
use crate::{exposure, ingest, report, topk, weights};

/// What one run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub paths_found: usize,
    pub edges_kept: usize,
    pub outputs: Vec<PathBuf>,
}

pub fn run(config: &RunConfig) -> Result<RunSummary, AopError> {
    let query = &config.run;
    let data_dir = &config.input.data_dir;

    let events = ingest::load_events(&data_dir.join("events.csv"))?;
    let edges = ingest::load_edges(&data_dir.join("edges.csv"))?;
    tracing::info!(
        "loaded {} events and {} relations from {:?}",
        events.len(),
        edges.len(),
        data_dir
    );

    let mut pathway = PathwayGraph::from_records(events, edges);
    let removed = pathway.reduce_cycles();
    if removed > 0 {
        tracing::warn!("input contained cycles; removed {removed} back relations");
    }
    let scoped = pathway.subgraph_between(&query.mie, &query.ao, query.max_hops);
    tracing::debug!(
        "subgraph within {} hops of {}: {} events, {} relations",
        query.max_hops,
        query.mie,
        scoped.event_count(),
        scoped.edge_count()
    );

    // A bad blend aborts here, before anything is written.
    let integrated = weights::integrate_scores(scoped.edge_records(), &config.blend())?;
    let kept = weights::threshold_edges(integrated, query.min_edge_w);
    let edges_kept = kept.len();
    let weighted = PathwayGraph::from_records(scoped.events().values().cloned().collect(), kept);

    let results = topk::top_k_paths(
        &weighted,
        &query.mie,
        &query.ao,
        query.top_k,
        WEIGHT_INTEGRATED,
    );
    if results.is_empty() {
        tracing::info!("no causal chain found from {} to {}", query.mie, query.ao);
    }

    create_dir_all(&config.output.dir)?;
    let mut outputs = Vec::new();

    let flattened = report::flatten_paths(&results, &weighted, WEIGHT_INTEGRATED);
    outputs.push(report::write_topk(
        &config.output.dir,
        &query.ao,
        &query.mie,
        &flattened,
    )?);

    let chem_map_path = data_dir.join("chem_map.csv");
    let products_path = data_dir.join("products.csv");
    if chem_map_path.exists() && products_path.exists() {
        let chem_map = ingest::load_chemical_map(&chem_map_path)?;
        let products = ingest::load_products(&products_path)?;
        let hits = exposure::map_first_node_chemicals(&results, &chem_map);
        let ratios = exposure::product_ratio(&products);
        let summary = exposure::exposure_summary(&hits, &ratios);
        outputs.push(report::write_exposure(
            &config.output.dir,
            &query.ao,
            &query.mie,
            &summary,
        )?);
    }

    if let Some(best) = results.first() {
        outputs.push(report::write_best_path(
            &config.output.dir,
            &query.ao,
            &query.mie,
            best,
        )?);
    }

    tracing::info!(
        "run complete: {} paths, {} output files",
        results.len(),
        outputs.len()
    );
    Ok(RunSummary {
        paths_found: results.len(),
        edges_kept,
        outputs,
    })
}
