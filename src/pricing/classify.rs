// src/pricing/classify.rs

/// Absolute dead-band, in currency units, around the suggested rent.
pub const DEAD_BAND: f64 = 75.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingStatus {
    Under,
    Over,
    Within,
}

impl PricingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PricingStatus::Under => "under",
            PricingStatus::Over => "over",
            PricingStatus::Within => "within",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PricingStatus::Under => "Below market",
            PricingStatus::Over => "Above market",
            PricingStatus::Within => "Within market range",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub status: PricingStatus,
    /// current rent minus suggested.
    pub delta: f64,
}

/// Label the current rent against the suggested one.
/// A zero current rent is "not priced yet": `Within` with a zero delta.
pub fn classify(current_rent: f64, suggested: f64) -> Classification {
    if current_rent <= 0.0 {
        return Classification {
            status: PricingStatus::Within,
            delta: 0.0,
        };
    }

    let delta = current_rent - suggested;
    let status = if delta <= -DEAD_BAND {
        PricingStatus::Under
    } else if delta >= DEAD_BAND {
        PricingStatus::Over
    } else {
        PricingStatus::Within
    };

    Classification { status, delta }
}
