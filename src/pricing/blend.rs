// src/pricing/blend.rs

use crate::pricing::comps::CompsResult;
use crate::pricing::heuristic::HeuristicEstimate;
use std::fmt;

/// Typical listing-to-achieved rent gap for the local market.
pub const MARKET_ADJUSTMENT: f64 = 1.07;
pub const HIGH_CONFIDENCE_MIN_COMPS: u32 = 10;
pub const LIMITED_MIN_COMPS: u32 = 3;

const HIGH_CONFIDENCE_COMP_WEIGHT: f64 = 0.7;
const LIMITED_COMP_WEIGHT: f64 = 0.5;

/// Which tier produced the final number, lowest confidence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimateSource {
    Heuristic,
    LimitedComps(u32),
    HighConfidenceComps(u32),
    PointEstimate,
}

impl EstimateSource {
    pub fn tier(self) -> &'static str {
        match self {
            EstimateSource::Heuristic => "heuristic",
            EstimateSource::LimitedComps(_) => "limited_comps",
            EstimateSource::HighConfidenceComps(_) => "high_confidence_comps",
            EstimateSource::PointEstimate => "point_estimate",
        }
    }

    pub fn comps_count(self) -> Option<u32> {
        match self {
            EstimateSource::LimitedComps(n) | EstimateSource::HighConfidenceComps(n) => Some(n),
            _ => None,
        }
    }

    pub fn note(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EstimateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateSource::Heuristic => write!(f, "Heuristic estimate"),
            EstimateSource::LimitedComps(n) => write!(f, "Limited comps blended ({n} comps)"),
            EstimateSource::HighConfidenceComps(n) => write!(f, "Live comps blended ({n} comps)"),
            EstimateSource::PointEstimate => write!(f, "Live rent estimate"),
        }
    }
}

/// Final range and point value, rounded to whole currency units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendedEstimate {
    pub lower: f64,
    pub upper: f64,
    pub suggested: f64,
    pub source: EstimateSource,
}

/// Pick the tier. Pure function of the comps payload and square footage.
pub fn select_source(comps: Option<&CompsResult>, sqft: f64) -> EstimateSource {
    let Some(comps) = comps else {
        return EstimateSource::Heuristic;
    };

    if comps.point_estimate.is_some_and(|p| p > 0.0) {
        return EstimateSource::PointEstimate;
    }

    let n = comps.comps_count;
    let has_estimate = comps.comp_estimate(sqft).is_some();

    if has_estimate && n >= HIGH_CONFIDENCE_MIN_COMPS {
        EstimateSource::HighConfidenceComps(n)
    } else if has_estimate && n >= LIMITED_MIN_COMPS {
        EstimateSource::LimitedComps(n)
    } else {
        EstimateSource::Heuristic
    }
}

fn banded(value: f64, spread: f64, source: EstimateSource) -> BlendedEstimate {
    BlendedEstimate {
        lower: (value * (1.0 - spread)).round(),
        upper: (value * (1.0 + spread)).round(),
        suggested: value.round(),
        source,
    }
}

/// Combine the heuristic with whatever market data came back.
pub fn blend(
    heuristic: &HeuristicEstimate,
    comps: Option<&CompsResult>,
    sqft: f64,
) -> BlendedEstimate {
    let source = select_source(comps, sqft);
    let comp_estimate = comps.and_then(|c| c.comp_estimate(sqft)).unwrap_or(0.0);
    let mix = |weight: f64| weight * comp_estimate + (1.0 - weight) * heuristic.suggested;

    match source {
        EstimateSource::PointEstimate => {
            let point = comps.and_then(|c| c.point_estimate).unwrap_or(0.0);
            let suggested = (point * MARKET_ADJUSTMENT).round();
            banded(suggested, 0.05, source)
        }
        EstimateSource::HighConfidenceComps(_) => {
            let value =
                mix(HIGH_CONFIDENCE_COMP_WEIGHT) * heuristic.condition_factor * MARKET_ADJUSTMENT;
            banded(value, 0.04, source)
        }
        // No market adjustment on this tier.
        EstimateSource::LimitedComps(_) => {
            let value = mix(LIMITED_COMP_WEIGHT) * heuristic.condition_factor;
            banded(value, 0.05, source)
        }
        EstimateSource::Heuristic => BlendedEstimate {
            lower: heuristic.lower.round(),
            upper: heuristic.upper.round(),
            suggested: heuristic.suggested,
            source,
        },
    }
}
