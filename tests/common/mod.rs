//! Shared test utilities for integration tests.
//!
//! Import from integration test files as:
//! ```ignore
//! mod common;
//! ```

use std::path::PathBuf;

use tempfile::TempDir;

/// Initialize tracing for tests, respecting RUST_LOG env var.
///
/// Safe to call multiple times; subsequent calls are no-ops.
#[allow(dead_code)]
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// Write the sample network tables into `<temp_dir>/data/`: four events
/// (MIE, K1, K2, AO), two routes of differing evidence strength, and the
/// optional chemical map and product inventory.
///
/// Returns the data directory path.
#[allow(dead_code)]
pub fn write_sample_network(temp_dir: &TempDir) -> PathBuf {
    let data_dir = temp_dir.path().join("data");
    std::fs::create_dir(&data_dir).unwrap();

    let events = "\
event_id,type,name
MIE,MIE,Receptor binding
K1,KE,Oxidative stress
K2,KE,Inflammation
AO,AO,Liver fibrosis
";
    std::fs::write(data_dir.join("events.csv"), events).unwrap();

    let edges = "\
src_event_id,dst_event_id,wwiki,wtoxcast,wlit
MIE,K1,0.9,0.8,0.7
MIE,K2,0.1,0.1,0.1
K1,AO,0.9,0.9,0.9
K2,AO,0.9,0.9,0.9
";
    std::fs::write(data_dir.join("edges.csv"), edges).unwrap();

    let chem_map = "\
event_id,casrn,dtxsid
MIE,50-00-0,DTXSID7020637
MIE,71-43-2,DTXSID3039242
";
    std::fs::write(data_dir.join("chem_map.csv"), chem_map).unwrap();

    let products = "\
casrn,product_id,category
50-00-0,P1,adhesive
50-00-0,P2,resin
71-43-2,P3,solvent
";
    std::fs::write(data_dir.join("products.csv"), products).unwrap();

    data_dir
}

/// Write a run configuration pointing at `<temp_dir>/data` and
/// `<temp_dir>/out`, returning the configuration file path.
#[allow(dead_code)]
pub fn write_config(temp_dir: &TempDir, body: &str) -> PathBuf {
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, body).unwrap();
    path
}

/// A valid configuration for the sample network with an even evidence blend.
#[allow(dead_code)]
pub fn sample_config(temp_dir: &TempDir, top_k: usize, min_edge_w: f64) -> String {
    format!(
        r#"[run]
mie = "MIE"
ao = "AO"
top_k = {top_k}
alpha = 0.3333333333333333
beta = 0.3333333333333333
gamma = 0.3333333333333333
min_edge_w = {min_edge_w:?}

[input]
data_dir = "{data}"

[output]
dir = "{out}"
"#,
        data = temp_dir.path().join("data").display(),
        out = temp_dir.path().join("out").display(),
    )
}
