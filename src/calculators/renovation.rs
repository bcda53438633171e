// src/calculators/renovation.rs

use crate::domain::normalize;
use crate::forms::FormData;
use serde::Serialize;

pub const GOOD_WITHIN_MONTHS: f64 = 18.0;
pub const MARGINAL_WITHIN_MONTHS: f64 = 30.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenovationInputs {
    pub cost: f64,
    pub monthly_rent_increase: f64,
}

impl RenovationInputs {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            cost: normalize::amount(form.get("cost")),
            monthly_rent_increase: normalize::amount(form.get("monthly_rent_increase")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaybackRating {
    Good,
    Marginal,
    Slow,
}

impl PaybackRating {
    pub fn for_months(months: f64) -> Self {
        if months <= GOOD_WITHIN_MONTHS {
            PaybackRating::Good
        } else if months <= MARGINAL_WITHIN_MONTHS {
            PaybackRating::Marginal
        } else {
            PaybackRating::Slow
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaybackRating::Good => "Good",
            PaybackRating::Marginal => "Marginal",
            PaybackRating::Slow => "Slow",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenovationResult {
    /// `None` when the rent doesn't go up; the project never pays back.
    pub payback_months: Option<f64>,
    pub rating: PaybackRating,
    /// Yearly rent gain over cost, percent. `None` for a free project.
    pub annual_return_pct: Option<f64>,
}

pub fn calculate(inputs: &RenovationInputs) -> RenovationResult {
    let payback_months = (inputs.monthly_rent_increase > 0.0)
        .then(|| inputs.cost / inputs.monthly_rent_increase);

    let annual_return_pct = (inputs.cost > 0.0)
        .then(|| inputs.monthly_rent_increase * 12.0 / inputs.cost * 100.0);

    RenovationResult {
        payback_months,
        rating: payback_months
            .map(PaybackRating::for_months)
            .unwrap_or(PaybackRating::Slow),
        annual_return_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn payback_and_return() {
        let r = calculate(&RenovationInputs {
            cost: 6_000.0,
            monthly_rent_increase: 250.0,
        });
        assert_relative_eq!(r.payback_months.unwrap(), 24.0, epsilon = 1e-9);
        assert_eq!(r.rating, PaybackRating::Marginal);
        assert_relative_eq!(r.annual_return_pct.unwrap(), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn rating_breakpoints_are_inclusive() {
        assert_eq!(PaybackRating::for_months(18.0), PaybackRating::Good);
        assert_eq!(PaybackRating::for_months(18.5), PaybackRating::Marginal);
        assert_eq!(PaybackRating::for_months(30.0), PaybackRating::Marginal);
        assert_eq!(PaybackRating::for_months(30.1), PaybackRating::Slow);
    }

    #[test]
    fn no_rent_increase_never_pays_back() {
        let r = calculate(&RenovationInputs {
            cost: 4_000.0,
            monthly_rent_increase: 0.0,
        });
        assert_eq!(r.payback_months, None);
        assert_eq!(r.rating, PaybackRating::Slow);
    }

    #[test]
    fn free_project_pays_back_immediately() {
        let r = calculate(&RenovationInputs {
            cost: 0.0,
            monthly_rent_increase: 50.0,
        });
        assert_eq!(r.payback_months, Some(0.0));
        assert_eq!(r.rating, PaybackRating::Good);
        assert_eq!(r.annual_return_pct, None);
    }
}
