//! Run configuration.
//!
//! One TOML file describes one MIE -> AO query:
//!
//! ```toml
//! [run]
//! mie = "Event:18"
//! ao = "Event:459"
//! top_k = 5
//! alpha = 0.4
//! beta = 0.3
//! gamma = 0.3
//! min_edge_w = 0.1
//! max_hops = 6          # optional, defaults to 6
//!
//! [input]
//! data_dir = "data"
//!
//! [output]
//! dir = "out"
//! ```

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AopError;
use crate::weights::BlendWeights;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub run: RunSection,
    pub input: InputSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSection {
    /// Source event id (molecular initiating event).
    pub mie: String,
    /// Target event id (adverse outcome).
    pub ao: String,
    pub top_k: usize,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    /// Relations with an integrated weight below this floor are pruned.
    pub min_edge_w: f64,
    /// Successor-hop bound for subgraph extraction around the MIE.
    #[serde(default = "default_max_hops")]
    pub max_hops: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSection {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    pub dir: PathBuf,
}

fn default_max_hops() -> usize {
    6
}

impl RunConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<RunConfig, AopError> {
        tracing::debug!("Reading run configuration from {:?}", path.as_ref());
        let content = read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// The blend coefficients of this run. Validation happens when the
    /// weighting step consumes them.
    pub fn blend(&self) -> BlendWeights {
        BlendWeights {
            alpha: self.run.alpha,
            beta: self.run.beta,
            gamma: self.run.gamma,
        }
    }
}
