//! Tests for exposure summarisation.

use approx::assert_relative_eq;

use crate::exposure::{
    exposure_summary, map_first_node_chemicals, product_ratio, ChemicalMapRow, ProductRow,
};
use crate::solver::PathSolution;

fn product(casrn: &str, product_id: &str) -> ProductRow {
    ProductRow {
        casrn: casrn.to_string(),
        product_id: product_id.to_string(),
        category: String::new(),
    }
}

fn map_row(event_id: &str, casrn: &str) -> ChemicalMapRow {
    ChemicalMapRow {
        event_id: event_id.to_string(),
        casrn: casrn.to_string(),
        dtxsid: String::new(),
    }
}

fn path(events: &[&str]) -> PathSolution {
    PathSolution {
        events: events.iter().map(|id| id.to_string()).collect(),
        score: 1.0,
    }
}

#[test]
fn ratios_cover_distinct_products_and_sum_to_one() {
    let products = vec![
        product("50-00-0", "P1"),
        product("50-00-0", "P2"),
        product("50-00-0", "P2"), // duplicate product listing
        product("71-43-2", "P3"),
    ];
    let ratios = product_ratio(&products);
    assert_eq!(ratios.len(), 2);
    assert_eq!(ratios[0].casrn, "50-00-0");
    assert_eq!(ratios[0].product_count, 2);
    assert_relative_eq!(ratios[0].product_ratio, 2.0 / 3.0);
    let total: f64 = ratios.iter().map(|r| r.product_ratio).sum();
    assert_relative_eq!(total, 1.0);
}

#[test]
fn empty_inventory_yields_zero_ratios() {
    assert!(product_ratio(&[]).is_empty());
}

#[test]
fn first_node_mapping_follows_path_rank() {
    let paths = vec![path(&["MIE", "K1", "AO"]), path(&["MIE", "K2", "AO"])];
    let chem_map = vec![
        map_row("MIE", "50-00-0"),
        map_row("MIE", "50-00-0"), // duplicate pair is dropped
        map_row("", "9-99-9"),     // incomplete row is dropped
        map_row("K1", "71-43-2"),  // not a first node anywhere
    ];
    let hits = map_first_node_chemicals(&paths, &chem_map);
    assert_eq!(hits.len(), 2);
    assert_eq!((hits[0].rank, hits[0].casrn.as_str()), (1, "50-00-0"));
    assert_eq!((hits[1].rank, hits[1].casrn.as_str()), (2, "50-00-0"));
}

#[test]
fn summary_joins_on_casrn_and_sorts_unmatched_last() {
    let paths = vec![path(&["MIE", "AO"])];
    let chem_map = vec![map_row("MIE", "71-43-2"), map_row("MIE", "50-00-0")];
    let hits = map_first_node_chemicals(&paths, &chem_map);
    let ratios = product_ratio(&[product("50-00-0", "P1")]);

    let summary = exposure_summary(&hits, &ratios);
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].casrn, "50-00-0");
    assert_eq!(summary[0].product_count, Some(1));
    assert_relative_eq!(summary[0].product_ratio.unwrap(), 1.0);
    assert_eq!(summary[1].casrn, "71-43-2");
    assert_eq!(summary[1].product_count, None, "unmatched chemical joins empty");
}
