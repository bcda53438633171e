// templates/pages/calculators.rs

//! Cap rate, vacancy cost, renovation ROI and readiness pages.
//! Each has a full page for GET and a result partial for htmx POSTs.

use crate::calculators::cap_rate::CapRateResult;
use crate::calculators::readiness::{Category, ReadinessResult, CHECKLIST};
use crate::calculators::renovation::RenovationResult;
use crate::calculators::vacancy::VacancyCost;
use crate::forms::FormData;
use crate::templates::components::{checkbox, number_field, stat_rows, LiveForm};
use crate::templates::desktop_layout;
use crate::templates::format::{money, percent};
use maud::{html, Markup};

const RESULT_ID: &str = "calc-result";

fn calculator_page(
    title: &str,
    intro: &str,
    action: &str,
    fields: Markup,
    result: Option<Markup>,
) -> Markup {
    let form = LiveForm {
        action,
        target: RESULT_ID,
    };
    desktop_layout(
        title,
        html! {
            main class="container two-col" {
                section {
                    h1 { (title) }
                    p { (intro) }
                    (form.wrap(fields))
                }
                section id=(RESULT_ID) {
                    @if let Some(result) = result {
                        (result)
                    }
                }
            }
        },
    )
}

fn email_field(form: &FormData) -> Markup {
    html! {
        label for="email" {
            "Email (optional)"
            input type="email" id="email" name="email"
                value=(form.get("email").unwrap_or_default());
        }
    }
}

// ---------------------------------------------------------------------------
// Cap rate
// ---------------------------------------------------------------------------

pub fn cap_rate_page(form: &FormData, result: Option<&CapRateResult>) -> Markup {
    calculator_page(
        "Cap Rate",
        "Net operating income and cap rate, before any mortgage payments.",
        "/tools/cap-rate",
        html! {
            (number_field(form, "property_value", "Property value", "1000"))
            (number_field(form, "monthly_rent", "Monthly rent", "1"))
            (number_field(form, "vacancy_rate", "Vacancy rate (%)", "0.5"))
            (number_field(form, "annual_expenses", "Annual expenses (taxes, insurance, repairs)", "1"))
            (email_field(form))
        },
        result.map(cap_rate_result),
    )
}

pub fn cap_rate_result(r: &CapRateResult) -> Markup {
    html! {
        div class="result" {
            p class="eyebrow" { "Cap rate" }
            @match (r.cap_rate, r.rating) {
                (Some(rate), Some(rating)) => {
                    p class="headline" { (percent(rate)) }
                    p { "That's " (rating.label()) " for a small rental." }
                }
                _ => {
                    p class="headline" { "—" }
                    p { "Enter a property value to see the cap rate." }
                }
            }
            (stat_rows(&[
                ("Gross annual rent", money(r.gross_annual_rent)),
                ("After vacancy", money(r.effective_annual_rent)),
                ("Net operating income", money(r.noi)),
                ("Monthly cash flow before debt", money(r.monthly_cash_flow)),
            ]))
        }
    }
}

// ---------------------------------------------------------------------------
// Vacancy cost
// ---------------------------------------------------------------------------

pub fn vacancy_cost_page(form: &FormData, result: Option<&VacancyCost>) -> Markup {
    calculator_page(
        "Vacancy Cost",
        "Lost rent is only part of it. Count your time and turnover costs too.",
        "/tools/vacancy-cost",
        html! {
            (number_field(form, "monthly_rent", "Monthly rent", "1"))
            (number_field(form, "days_vacant", "Days vacant", "1"))
            (number_field(form, "hours_spent", "Hours you spend on turnover", "0.5"))
            (number_field(form, "hourly_value", "Your time, per hour", "1"))
            (number_field(form, "cash_costs", "Cash costs (ads, cleaning, repairs)", "1"))
            (number_field(form, "concessions", "Concessions (free rent, discounts)", "1"))
            (email_field(form))
        },
        result.map(vacancy_cost_result),
    )
}

pub fn vacancy_cost_result(r: &VacancyCost) -> Markup {
    html! {
        div class="result" {
            p class="eyebrow" { "Total cost of this vacancy" }
            p class="headline" { (money(r.total)) }
            (stat_rows(&[
                ("Lost rent", money(r.lost_rent)),
                ("Your time", money(r.time_cost)),
                ("Cash costs", money(r.cash_costs)),
                ("Concessions", money(r.concessions)),
            ]))
            p class="microcopy" { "Each empty day costs " (money(r.daily_rent)) " in rent alone." }
        }
    }
}

// ---------------------------------------------------------------------------
// Renovation ROI
// ---------------------------------------------------------------------------

pub fn renovation_page(form: &FormData, result: Option<&RenovationResult>) -> Markup {
    calculator_page(
        "Renovation ROI",
        "How many months of higher rent it takes to pay for an upgrade.",
        "/tools/renovation-roi",
        html! {
            (number_field(form, "cost", "Project cost", "1"))
            (number_field(form, "monthly_rent_increase", "Expected rent increase per month", "1"))
            (email_field(form))
        },
        result.map(renovation_result),
    )
}

pub fn renovation_result(r: &RenovationResult) -> Markup {
    html! {
        div class="result" {
            p class="eyebrow" { "Payback" }
            @match r.payback_months {
                Some(months) => {
                    p class="headline" { (format!("{months:.1}")) " months" }
                }
                None => {
                    p class="headline" { "Never" }
                    p { "Without a rent increase the project doesn't pay for itself." }
                }
            }
            p { "Rating: " strong { (r.rating.label()) } }
            @if let Some(pct) = r.annual_return_pct {
                p { "Annual return on cost: " (percent(pct)) }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Readiness
// ---------------------------------------------------------------------------

pub fn readiness_page(form: &FormData, result: Option<&ReadinessResult>) -> Markup {
    calculator_page(
        "Move-in Readiness",
        "Tick off what's done. We'll tell you how close the unit is.",
        "/tools/readiness",
        html! {
            @for category in Category::ALL {
                fieldset {
                    legend { (category.label()) }
                    @for item in CHECKLIST.iter().filter(|i| i.category == category) {
                        (checkbox(form, item.id, item.label))
                    }
                }
            }
            (email_field(form))
        },
        result.map(readiness_result),
    )
}

pub fn readiness_result(r: &ReadinessResult) -> Markup {
    html! {
        div class="result" {
            p class="eyebrow" { "Readiness" }
            p class="headline" { (r.score) "%" }
            p { strong { (r.level.label()) } " · " (r.checked) " of " (r.total) " done" }
            @if r.checked < r.total {
                p { "About " (format!("{:.1}", r.remaining_hours)) " hours of work left." }
            }
            ul class="progress" {
                @for c in &r.categories {
                    li { (c.category.label()) ": " (c.checked) "/" (c.total) }
                }
            }
        }
    }
}
