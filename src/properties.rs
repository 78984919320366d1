//! Vocabulary types for pathway networks.
//!
//! An adverse outcome pathway network is a directed graph of biological
//! events. Each relation between two events carries a [`ScoreSet`] of named
//! evidence scores; the weighting step blends those into a single scalar
//! stored under [`WEIGHT_INTEGRATED`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::AopError;

/// Evidence score mined from the AOP-Wiki knowledge base.
pub const SCORE_AOPWIKI: &str = "wwiki";

/// Evidence score derived from ToxCast high-throughput assay data.
pub const SCORE_TOXCAST: &str = "wtoxcast";

/// Evidence score derived from literature co-occurrence mining.
pub const SCORE_LITERATURE: &str = "wlit";

/// Reserved key holding the integrated scalar weight of a relation.
pub const WEIGHT_INTEGRATED: &str = "w";

/// The evidence score keys, in blend-coefficient order. Also the column
/// names of the relation table.
pub const EVIDENCE_KEYS: [&str; 3] = [SCORE_AOPWIKI, SCORE_TOXCAST, SCORE_LITERATURE];

/// [EventKind] enumerates the biological role of an event node. The kind is a
/// label carried for reporting; the pathfinding core never consults it.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum EventKind {
    /// Molecular initiating event, the designated source of a query.
    Mie,
    /// Key event, an intermediate step in the causal chain.
    #[default]
    Ke,
    /// Adverse outcome, the designated sink of a query.
    Ao,
}

impl FromStr for EventKind {
    type Err = AopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MIE" => Ok(EventKind::Mie),
            "KE" => Ok(EventKind::Ke),
            "AO" => Ok(EventKind::Ao),
            other => Err(AopError::Validation(format!("Invalid event type {other}"))),
        }
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            EventKind::Mie => write!(f, "MIE"),
            EventKind::Ke => write!(f, "KE"),
            EventKind::Ao => write!(f, "AO"),
        }
    }
}

/// A single biological event within a pathway network.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventNode {
    pub id: String,
    pub kind: EventKind,
    /// Free-form display name, may be empty.
    #[serde(default)]
    pub name: String,
}

impl EventNode {
    pub fn new(id: impl Into<String>, kind: EventKind) -> Self {
        EventNode {
            id: id.into(),
            kind,
            name: String::new(),
        }
    }
}

impl Display for EventNode {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.name.is_empty() {
            write!(f, "{} [{}]", self.id, self.kind)
        } else {
            write!(f, "{} [{}]: {}", self.id, self.kind, self.name)
        }
    }
}

/// [ScoreSet] is the edge data structure of a pathway graph: a table of named
/// numeric scores. Raw evidence scores live next to derived values such as
/// the integrated weight, addressed by key.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub scores: BTreeMap<String, f64>,
}

impl ScoreSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.scores.get(key).copied()
    }

    pub fn set(&mut self, key: &str, value: f64) {
        self.scores.insert(key.to_string(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl<const N: usize> From<[(&str, f64); N]> for ScoreSet {
    fn from(entries: [(&str, f64); N]) -> Self {
        ScoreSet {
            scores: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }
}

/// One directed relation between two events, as exchanged between the table
/// loaders, the weighting step, and graph construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub src: String,
    pub dst: String,
    #[serde(default)]
    pub scores: ScoreSet,
}

impl EdgeRecord {
    pub fn new(src: impl Into<String>, dst: impl Into<String>, scores: ScoreSet) -> Self {
        EdgeRecord {
            src: src.into(),
            dst: dst.into(),
            scores,
        }
    }
}
