//! Rent pricing: heuristic model, comp blending and the under/over verdict.
//!
//! Everything here is pure. `estimate_rent` is cheap enough to run on every
//! form change, and the same inputs always give bit-identical output.

pub mod blend;
pub mod classify;
pub mod comps;
pub mod heuristic;

pub use blend::EstimateSource;
pub use classify::PricingStatus;
pub use comps::CompsResult;

use crate::domain::PropertyInputs;
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct EstimateResult {
    pub lower: f64,
    pub upper: f64,
    pub suggested: f64,
    pub status: PricingStatus,
    pub delta: f64,
    pub source: EstimateSource,
    pub condition_factor: f64,
    pub current_rent: f64,
}

impl EstimateResult {
    /// Only show an under/over verdict when the owner told us their rent.
    pub fn has_verdict(&self) -> bool {
        self.current_rent > 0.0
    }

    pub fn source_note(&self) -> String {
        self.source.note()
    }

    pub fn to_json(&self) -> Value {
        json!({
            "lower": self.lower,
            "upper": self.upper,
            "suggested": self.suggested,
            "status": self.status.as_str(),
            "delta": self.delta,
            "hasVerdict": self.has_verdict(),
            "source": self.source.tier(),
            "sourceNote": self.source_note(),
            "compsCount": self.source.comps_count(),
        })
    }
}

/// Heuristic, then blend, then classify.
pub fn estimate_rent(inputs: &PropertyInputs, comps: Option<&CompsResult>) -> EstimateResult {
    let base = heuristic::estimate(inputs);
    let blended = blend::blend(&base, comps, inputs.sqft);
    let verdict = classify::classify(inputs.current_rent, blended.suggested);

    EstimateResult {
        lower: blended.lower,
        upper: blended.upper,
        suggested: blended.suggested,
        status: verdict.status,
        delta: verdict.delta,
        source: blended.source,
        condition_factor: base.condition_factor,
        current_rent: inputs.current_rent,
    }
}
