//! Evidence weight integration.
//!
//! Each relation arrives with up to three raw evidence scores. Integration
//! clamps every score into `[0, 1]` and blends them into a single scalar
//! `w = alpha*wwiki + beta*wtoxcast + gamma*wlit`, stored under
//! [`WEIGHT_INTEGRATED`]. The blend coefficients must form a convex
//! combination; thresholding then prunes weakly supported relations before
//! any pathfinding runs.

use serde::{Deserialize, Serialize};

use crate::error::AopError;
use crate::properties::{EdgeRecord, EVIDENCE_KEYS, WEIGHT_INTEGRATED};

const BLEND_ABS_TOL: f64 = 1e-8;
const BLEND_REL_TOL: f64 = 1e-8;

/// Convex blend coefficients for the three evidence sources.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendWeights {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl BlendWeights {
    /// The coefficients must sum to 1.0 within an absolute plus relative
    /// tolerance. Exact float equality would reject sums like 3 * (1/3).
    pub fn validate(&self) -> Result<(), AopError> {
        let sum = self.alpha + self.beta + self.gamma;
        if (sum - 1.0).abs() > BLEND_ABS_TOL + BLEND_REL_TOL * 1.0_f64 {
            return Err(AopError::Config(format!(
                "alpha+beta+gamma must equal 1.0, got {sum}"
            )));
        }
        Ok(())
    }

    fn coefficients(&self) -> [f64; 3] {
        [self.alpha, self.beta, self.gamma]
    }
}

/// Clamp each evidence score into `[0, 1]` (missing scores read as 0.0) and
/// store the blended weight on every record. Fails with
/// [`AopError::Config`] when the coefficients do not sum to 1.0; the caller
/// must not silently renormalise.
pub fn integrate_scores(
    records: Vec<EdgeRecord>,
    blend: &BlendWeights,
) -> Result<Vec<EdgeRecord>, AopError> {
    blend.validate()?;
    let mut records = records;
    for record in records.iter_mut() {
        let mut blended = 0.0;
        for (key, coeff) in EVIDENCE_KEYS.iter().zip(blend.coefficients()) {
            let clamped = record.scores.get(key).unwrap_or(0.0).clamp(0.0, 1.0);
            record.scores.set(key, clamped);
            blended += coeff * clamped;
        }
        record.scores.set(WEIGHT_INTEGRATED, blended);
    }
    Ok(records)
}

/// Retain only records whose integrated weight reaches `min_weight`,
/// preserving insertion order. Pruning may disconnect the source from the
/// target; that is a legitimate no-path outcome for the later solve.
pub fn threshold_edges(records: Vec<EdgeRecord>, min_weight: f64) -> Vec<EdgeRecord> {
    let before = records.len();
    let kept: Vec<EdgeRecord> = records
        .into_iter()
        .filter(|record| record.scores.get(WEIGHT_INTEGRATED).unwrap_or(0.0) >= min_weight)
        .collect();
    tracing::debug!(
        "threshold {}: kept {} of {} relations",
        min_weight,
        kept.len(),
        before
    );
    kept
}
