// src/pricing/heuristic.rs

//! Linear rent model used when there is no market data (or not enough of it).

use crate::domain::{PropertyInputs, PropertyType};
use serde::Serialize;

pub const BASE_RENT: f64 = 950.0;
pub const PER_BED: f64 = 360.0;
pub const PER_BATH: f64 = 180.0;
pub const PER_SQFT: f64 = 0.65;
/// Square footage beyond this adds nothing.
pub const SQFT_CAP: f64 = 2500.0;
pub const PARKING_PREMIUM: f64 = 85.0;
/// ±4% around the midpoint.
pub const RANGE_SPREAD: f64 = 0.04;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeuristicEstimate {
    pub midpoint: f64,
    pub lower: f64,
    pub upper: f64,
    /// Rounded midpoint of `lower..upper`.
    pub suggested: f64,
    pub condition_factor: f64,
}

pub fn type_adjustment(property_type: PropertyType) -> f64 {
    match property_type {
        PropertyType::House => 75.0,
        PropertyType::Condo => -25.0,
        PropertyType::Duplex => 0.0,
        PropertyType::Apartment => -50.0,
    }
}

/// 0.86 at condition 3, moving 0.06 per step.
pub fn condition_factor(condition: u8) -> f64 {
    0.86 + (f64::from(condition) - 3.0) * 0.06
}

/// Size and room count contribution before type, parking and condition.
pub fn base_rent(inputs: &PropertyInputs) -> f64 {
    let mut base = BASE_RENT + f64::from(inputs.beds) * PER_BED + inputs.baths * PER_BATH;
    if inputs.has_sqft() {
        base += inputs.sqft.min(SQFT_CAP) * PER_SQFT;
    }
    base
}

pub fn estimate(inputs: &PropertyInputs) -> HeuristicEstimate {
    let parking = if inputs.parking { PARKING_PREMIUM } else { 0.0 };
    let factor = condition_factor(inputs.condition);

    let midpoint = (base_rent(inputs) + type_adjustment(inputs.property_type) + parking) * factor;
    let lower = midpoint * (1.0 - RANGE_SPREAD);
    let upper = midpoint * (1.0 + RANGE_SPREAD);

    HeuristicEstimate {
        midpoint,
        lower,
        upper,
        suggested: ((lower + upper) / 2.0).round(),
        condition_factor: factor,
    }
}
