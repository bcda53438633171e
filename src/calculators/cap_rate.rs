// src/calculators/cap_rate.rs

use crate::domain::normalize;
use crate::forms::FormData;
use serde::Serialize;

pub const BELOW_AVERAGE_UNDER: f64 = 5.0;
pub const STRONG_FROM: f64 = 8.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CapRateInputs {
    pub property_value: f64,
    pub monthly_rent: f64,
    /// 0..=100
    pub vacancy_rate_pct: f64,
    pub annual_expenses: f64,
}

impl CapRateInputs {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            property_value: normalize::amount(form.get("property_value")),
            monthly_rent: normalize::amount(form.get("monthly_rent")),
            vacancy_rate_pct: normalize::percent(form.get("vacancy_rate")),
            annual_expenses: normalize::amount(form.get("annual_expenses")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CapRateRating {
    BelowAverage,
    Typical,
    Strong,
}

impl CapRateRating {
    pub fn for_rate(cap_rate: f64) -> Self {
        if cap_rate < BELOW_AVERAGE_UNDER {
            CapRateRating::BelowAverage
        } else if cap_rate < STRONG_FROM {
            CapRateRating::Typical
        } else {
            CapRateRating::Strong
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CapRateRating::BelowAverage => "below average",
            CapRateRating::Typical => "typical",
            CapRateRating::Strong => "strong",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapRateResult {
    pub gross_annual_rent: f64,
    pub effective_annual_rent: f64,
    pub noi: f64,
    pub monthly_cash_flow: f64,
    /// Percent. `None` without a property value.
    pub cap_rate: Option<f64>,
    pub rating: Option<CapRateRating>,
}

pub fn calculate(inputs: &CapRateInputs) -> CapRateResult {
    let gross = inputs.monthly_rent * 12.0;
    let effective = gross * (1.0 - inputs.vacancy_rate_pct / 100.0);
    let noi = effective - inputs.annual_expenses;

    let cap_rate = (inputs.property_value > 0.0).then(|| noi / inputs.property_value * 100.0);

    CapRateResult {
        gross_annual_rent: gross,
        effective_annual_rent: effective,
        noi,
        monthly_cash_flow: noi / 12.0,
        cap_rate,
        rating: cap_rate.map(CapRateRating::for_rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn noi_and_cap_rate() {
        let r = calculate(&CapRateInputs {
            property_value: 300_000.0,
            monthly_rent: 2_500.0,
            vacancy_rate_pct: 5.0,
            annual_expenses: 9_000.0,
        });
        assert_relative_eq!(r.gross_annual_rent, 30_000.0, epsilon = 1e-9);
        assert_relative_eq!(r.effective_annual_rent, 28_500.0, epsilon = 1e-9);
        assert_relative_eq!(r.noi, 19_500.0, epsilon = 1e-9);
        assert_relative_eq!(r.monthly_cash_flow, 1_625.0, epsilon = 1e-9);
        assert_relative_eq!(r.cap_rate.unwrap(), 6.5, epsilon = 1e-9);
        assert_eq!(r.rating, Some(CapRateRating::Typical));
    }

    #[test]
    fn rating_breakpoints() {
        assert_eq!(CapRateRating::for_rate(4.99), CapRateRating::BelowAverage);
        assert_eq!(CapRateRating::for_rate(5.0), CapRateRating::Typical);
        assert_eq!(CapRateRating::for_rate(7.99), CapRateRating::Typical);
        assert_eq!(CapRateRating::for_rate(8.0), CapRateRating::Strong);
        assert_eq!(CapRateRating::for_rate(-2.0), CapRateRating::BelowAverage);
    }

    #[test]
    fn no_property_value_means_no_rate() {
        let r = calculate(&CapRateInputs {
            monthly_rent: 1_000.0,
            ..Default::default()
        });
        assert_eq!(r.cap_rate, None);
        assert_eq!(r.rating, None);
    }

    #[test]
    fn vacancy_is_clamped_from_form() {
        let form = FormData::from_pairs(&[("vacancy_rate", "250"), ("monthly_rent", "abc")]);
        let inputs = CapRateInputs::from_form(&form);
        assert_eq!(inputs.vacancy_rate_pct, 100.0);
        assert_eq!(inputs.monthly_rent, 0.0);
    }
}
