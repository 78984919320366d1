//! Exposure summarisation for ranked pathways.
//!
//! Maps the leading event of each ranked path to its known chemicals and
//! weighs them by how widely each chemical occurs in a product inventory.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::solver::PathSolution;

/// One row of the event -> chemical map (`chem_map.csv`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChemicalMapRow {
    pub event_id: String,
    pub casrn: String,
    #[serde(default)]
    pub dtxsid: String,
}

/// One row of the product inventory (`products.csv`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRow {
    pub casrn: String,
    pub product_id: String,
    #[serde(default)]
    pub category: String,
}

/// Distinct-product occurrence of one chemical across the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRatio {
    pub casrn: String,
    pub product_count: usize,
    pub product_ratio: f64,
}

/// A chemical mapped to the leading event of a ranked path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChemicalHit {
    pub rank: usize,
    pub event_id: String,
    pub casrn: String,
    pub dtxsid: String,
}

/// A chemical hit joined with its product occurrence; the occurrence fields
/// are absent for chemicals missing from the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureRecord {
    pub rank: usize,
    pub event_id: String,
    pub casrn: String,
    pub dtxsid: String,
    pub product_count: Option<usize>,
    pub product_ratio: Option<f64>,
}

/// Count the distinct products each chemical occurs in; the ratio is that
/// count over the total across all chemicals (0 when the inventory is
/// empty). Sorted descending by ratio, ties in CASRN order.
pub fn product_ratio(products: &[ProductRow]) -> Vec<ProductRatio> {
    let mut per_casrn: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for row in products {
        per_casrn
            .entry(row.casrn.as_str())
            .or_default()
            .insert(row.product_id.as_str());
    }
    let total: usize = per_casrn.values().map(|ids| ids.len()).sum();
    let mut ratios: Vec<ProductRatio> = per_casrn
        .into_iter()
        .map(|(casrn, ids)| ProductRatio {
            casrn: casrn.to_string(),
            product_count: ids.len(),
            product_ratio: if total > 0 {
                ids.len() as f64 / total as f64
            } else {
                0.0
            },
        })
        .collect();
    ratios.sort_by(|a, b| {
        b.product_ratio
            .partial_cmp(&a.product_ratio)
            .unwrap_or(Ordering::Equal)
    });
    ratios
}

/// For each ranked path, the chemicals mapped to its first event. Map rows
/// with an empty event id or CASRN are dropped, duplicate (event, CASRN)
/// pairs keep their first occurrence.
pub fn map_first_node_chemicals(
    paths: &[PathSolution],
    chem_map: &[ChemicalMapRow],
) -> Vec<ChemicalHit> {
    let mut seen = BTreeSet::new();
    let rows: Vec<&ChemicalMapRow> = chem_map
        .iter()
        .filter(|row| !row.event_id.is_empty() && !row.casrn.is_empty())
        .filter(|row| seen.insert((row.event_id.clone(), row.casrn.clone())))
        .collect();

    let mut hits = Vec::new();
    for (position, path) in paths.iter().enumerate() {
        let Some(first) = path.events.first() else {
            continue;
        };
        for row in rows.iter().filter(|row| &row.event_id == first) {
            hits.push(ChemicalHit {
                rank: position + 1,
                event_id: first.clone(),
                casrn: row.casrn.clone(),
                dtxsid: row.dtxsid.clone(),
            });
        }
    }
    hits
}

/// Left-join hits with product ratios on CASRN, sorted by rank ascending
/// then ratio descending (unmatched chemicals last within a rank).
pub fn exposure_summary(hits: &[ChemicalHit], ratios: &[ProductRatio]) -> Vec<ExposureRecord> {
    let by_casrn: BTreeMap<&str, &ProductRatio> = ratios
        .iter()
        .map(|ratio| (ratio.casrn.as_str(), ratio))
        .collect();
    let mut records: Vec<ExposureRecord> = hits
        .iter()
        .map(|hit| {
            let matched = by_casrn.get(hit.casrn.as_str());
            ExposureRecord {
                rank: hit.rank,
                event_id: hit.event_id.clone(),
                casrn: hit.casrn.clone(),
                dtxsid: hit.dtxsid.clone(),
                product_count: matched.map(|ratio| ratio.product_count),
                product_ratio: matched.map(|ratio| ratio.product_ratio),
            }
        })
        .collect();
    records.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| ratio_order(a, b)));
    records
}

fn ratio_order(a: &ExposureRecord, b: &ExposureRecord) -> Ordering {
    match (a.product_ratio, b.product_ratio) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
