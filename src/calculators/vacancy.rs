// src/calculators/vacancy.rs

use crate::domain::normalize;
use crate::forms::FormData;
use serde::Serialize;

pub const DAYS_PER_MONTH: f64 = 30.0;
const MAX_DAYS_VACANT: f64 = 365.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VacancyInputs {
    pub monthly_rent: f64,
    pub days_vacant: f64,
    pub hours_spent: f64,
    pub hourly_value: f64,
    pub cash_costs: f64,
    pub concessions: f64,
}

impl VacancyInputs {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            monthly_rent: normalize::amount(form.get("monthly_rent")),
            days_vacant: normalize::amount_capped(form.get("days_vacant"), MAX_DAYS_VACANT),
            hours_spent: normalize::amount(form.get("hours_spent")),
            hourly_value: normalize::amount(form.get("hourly_value")),
            cash_costs: normalize::amount(form.get("cash_costs")),
            concessions: normalize::amount(form.get("concessions")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VacancyCost {
    pub daily_rent: f64,
    pub lost_rent: f64,
    pub time_cost: f64,
    pub cash_costs: f64,
    pub concessions: f64,
    pub total: f64,
}

pub fn calculate(inputs: &VacancyInputs) -> VacancyCost {
    let daily_rent = inputs.monthly_rent / DAYS_PER_MONTH;
    let lost_rent = daily_rent * inputs.days_vacant;
    let time_cost = inputs.hours_spent * inputs.hourly_value;

    VacancyCost {
        daily_rent,
        lost_rent,
        time_cost,
        cash_costs: inputs.cash_costs,
        concessions: inputs.concessions,
        total: lost_rent + time_cost + inputs.cash_costs + inputs.concessions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sums_every_component() {
        let cost = calculate(&VacancyInputs {
            monthly_rent: 1_800.0,
            days_vacant: 21.0,
            hours_spent: 10.0,
            hourly_value: 40.0,
            cash_costs: 350.0,
            concessions: 200.0,
        });
        assert_relative_eq!(cost.daily_rent, 60.0, epsilon = 1e-9);
        assert_relative_eq!(cost.lost_rent, 1_260.0, epsilon = 1e-9);
        assert_relative_eq!(cost.time_cost, 400.0, epsilon = 1e-9);
        assert_relative_eq!(cost.total, 2_210.0, epsilon = 1e-9);
    }

    #[test]
    fn empty_inputs_cost_nothing() {
        assert_eq!(calculate(&VacancyInputs::default()).total, 0.0);
    }

    #[test]
    fn days_vacant_is_capped_at_a_year() {
        let form = FormData::from_pairs(&[("days_vacant", "1000"), ("cash_costs", "-5")]);
        let inputs = VacancyInputs::from_form(&form);
        assert_eq!(inputs.days_vacant, 365.0);
        assert_eq!(inputs.cash_costs, 0.0);
    }
}
