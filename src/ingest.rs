//! Table loading for pathway networks.
//!
//! The input tables are plain comma-separated files with a header row and no
//! quoting: `events.csv` and `edges.csv` are required by every run,
//! `chem_map.csv` and `products.csv` are optional exposure inputs. Event
//! kind labels are validated here, before any graph is built; an
//! unrecognised label is fatal.

use std::fs::read_to_string;
use std::path::Path;

use crate::error::AopError;
use crate::exposure::{ChemicalMapRow, ProductRow};
use crate::properties::{EdgeRecord, EventNode, ScoreSet, EVIDENCE_KEYS};

struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn read(path: &Path) -> Result<Table, AopError> {
        tracing::debug!("Reading table {:?}", path);
        let content = read_to_string(path)?;
        let mut lines = content.lines().filter(|line| !line.trim().is_empty());
        let header = match lines.next() {
            Some(line) => split_row(line),
            None => {
                return Err(AopError::Parse(format!(
                    "{}: table has no header row",
                    path.display()
                )))
            }
        };
        let mut rows = Vec::new();
        for (number, line) in lines.enumerate() {
            let row = split_row(line);
            if row.len() != header.len() {
                return Err(AopError::Parse(format!(
                    "{}: row {} has {} fields, header has {}",
                    path.display(),
                    number + 2,
                    row.len(),
                    header.len()
                )));
            }
            rows.push(row);
        }
        Ok(Table { header, rows })
    }

    fn column(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    fn require(&self, name: &str, path: &Path) -> Result<usize, AopError> {
        self.column(name).ok_or_else(|| {
            AopError::Parse(format!("{}: missing column '{name}'", path.display()))
        })
    }
}

fn split_row(line: &str) -> Vec<String> {
    line.split(',').map(|field| field.trim().to_string()).collect()
}

fn parse_score(field: &str, path: &Path, column: &str) -> Result<f64, AopError> {
    if field.is_empty() {
        return Ok(0.0);
    }
    field.parse::<f64>().map_err(|err| {
        AopError::Parse(format!(
            "{}: invalid numeric value '{field}' in column '{column}': {err}",
            path.display()
        ))
    })
}

/// Load the event table: columns `event_id`, `type`, optional `name`.
pub fn load_events(path: &Path) -> Result<Vec<EventNode>, AopError> {
    let table = Table::read(path)?;
    let id_col = table.require("event_id", path)?;
    let kind_col = table.require("type", path)?;
    let name_col = table.column("name");

    let mut events = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let id = row[id_col].clone();
        let kind = row[kind_col].parse().map_err(|_| {
            AopError::Validation(format!("Invalid event type {} for {id}", row[kind_col]))
        })?;
        let name = name_col.map(|col| row[col].clone()).unwrap_or_default();
        events.push(EventNode { id, kind, name });
    }
    Ok(events)
}

/// Load the relation table: columns `src_event_id`, `dst_event_id` and the
/// optional per-source evidence scores. Missing score columns and empty
/// fields read as 0.0.
pub fn load_edges(path: &Path) -> Result<Vec<EdgeRecord>, AopError> {
    let table = Table::read(path)?;
    let src_col = table.require("src_event_id", path)?;
    let dst_col = table.require("dst_event_id", path)?;
    let score_cols: Vec<(&str, Option<usize>)> = EVIDENCE_KEYS
        .iter()
        .map(|name| (*name, table.column(name)))
        .collect();

    let mut edges = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let mut scores = ScoreSet::empty();
        for (name, col) in &score_cols {
            let value = match col {
                Some(col) => parse_score(&row[*col], path, name)?,
                None => 0.0,
            };
            scores.set(name, value);
        }
        edges.push(EdgeRecord::new(
            row[src_col].clone(),
            row[dst_col].clone(),
            scores,
        ));
    }
    Ok(edges)
}

/// Load the event -> chemical map: columns `event_id`, `casrn`, optional
/// `dtxsid`.
pub fn load_chemical_map(path: &Path) -> Result<Vec<ChemicalMapRow>, AopError> {
    let table = Table::read(path)?;
    let event_col = table.require("event_id", path)?;
    let casrn_col = table.require("casrn", path)?;
    let dtxsid_col = table.column("dtxsid");

    Ok(table
        .rows
        .iter()
        .map(|row| ChemicalMapRow {
            event_id: row[event_col].clone(),
            casrn: row[casrn_col].clone(),
            dtxsid: dtxsid_col.map(|col| row[col].clone()).unwrap_or_default(),
        })
        .collect())
}

/// Load the product inventory: columns `casrn`, `product_id`, optional
/// `category`.
pub fn load_products(path: &Path) -> Result<Vec<ProductRow>, AopError> {
    let table = Table::read(path)?;
    let casrn_col = table.require("casrn", path)?;
    let product_col = table.require("product_id", path)?;
    let category_col = table.column("category");

    Ok(table
        .rows
        .iter()
        .map(|row| ProductRow {
            casrn: row[casrn_col].clone(),
            product_id: row[product_col].clone(),
            category: category_col.map(|col| row[col].clone()).unwrap_or_default(),
        })
        .collect())
}
