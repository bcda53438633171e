// src/pricing/comps.rs

use serde::{Deserialize, Serialize};

/// Market data returned by the comps provider for one property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompsResult {
    pub comps_count: u32,
    pub median_rent: f64,
    pub median_rent_per_sqft: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_estimate: Option<f64>,
}

fn clean(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

impl CompsResult {
    /// Zero out negative or non-finite figures; drop a useless point estimate.
    pub fn normalized(self) -> Self {
        Self {
            comps_count: self.comps_count,
            median_rent: clean(self.median_rent),
            median_rent_per_sqft: clean(self.median_rent_per_sqft),
            point_estimate: self.point_estimate.map(clean).filter(|v| *v > 0.0),
        }
    }

    /// Per-sqft median times size when both are known, otherwise the plain median.
    /// `None` when neither gives a positive figure.
    pub fn comp_estimate(&self, sqft: f64) -> Option<f64> {
        let by_area = self.median_rent_per_sqft * sqft;
        let estimate = if self.median_rent_per_sqft > 0.0 && sqft > 0.0 {
            by_area
        } else {
            self.median_rent
        };
        (estimate.is_finite() && estimate > 0.0).then_some(estimate)
    }
}
