// templates/pages/rent_estimate.rs

use crate::domain::property::{MAX_CONDITION, MIN_CONDITION};
use crate::domain::{PropertyInputs, PropertyType};
use crate::forms::FormData;
use crate::pricing::{EstimateResult, PricingStatus};
use crate::templates::components::{checkbox, lead_form, notice, number_field, stat_rows};
use crate::templates::desktop_layout;
use crate::templates::format::{money, signed_money};
use maud::{html, Markup};

pub const COMPS_UNAVAILABLE: &str =
    "Live comps are unavailable right now; showing the heuristic estimate.";

pub struct EstimateVm<'a> {
    pub inputs: &'a PropertyInputs,
    pub result: &'a EstimateResult,
    pub comps_unavailable: bool,
}

pub fn rent_estimate_page(form: &FormData, estimate: Option<&EstimateVm>) -> Markup {
    let selected = PropertyType::parse(form.get("property_type"));
    let condition = form.get("condition").unwrap_or("3");

    desktop_layout(
        "Rent Estimate",
        html! {
            main class="container two-col" {
                section {
                    h1 { "Rent Estimate" }
                    p { "Tell us about the unit. Leave square footage blank if you don't know it." }

                    form
                        method="post"
                        action="/tools/rent-estimate"
                        hx-post="/tools/rent-estimate"
                        hx-target="#estimate-result"
                        hx-swap="innerHTML"
                        class="calculator"
                    {
                        label for="property_type" {
                            "Property type"
                            select id="property_type" name="property_type" {
                                @for t in PropertyType::ALL {
                                    option value=(t.as_str()) selected[t == selected] { (t.label()) }
                                }
                            }
                        }
                        (number_field(form, "beds", "Bedrooms", "1"))
                        (number_field(form, "baths", "Bathrooms", "0.5"))
                        (number_field(form, "sqft", "Square feet", "1"))
                        label for="condition" {
                            "Condition (1 = needs work, 5 = like new)"
                            input type="range" id="condition" name="condition"
                                min=(MIN_CONDITION) max=(MAX_CONDITION) step="1" value=(condition);
                        }
                        (checkbox(form, "parking", "Off-street parking"))
                        (number_field(form, "current_rent", "Current rent (optional)", "1"))
                        label for="address" {
                            "Address (optional, improves live comps)"
                            input type="text" id="address" name="address"
                                value=(form.get("address").unwrap_or_default());
                        }
                        label for="email" {
                            "Email (optional, we'll send you a copy)"
                            input type="email" id="email" name="email"
                                value=(form.get("email").unwrap_or_default());
                        }
                        div class="actions" {
                            button type="submit" class="primary" { "Estimate" }
                            button type="submit" name="live_comps" value="1" { "Use live comps" }
                        }
                    }
                }

                section id="estimate-result" {
                    @if let Some(vm) = estimate {
                        (estimate_result(vm))
                    }
                }
            }
        },
    )
}

/// Partial for `#estimate-result`.
pub fn estimate_result(vm: &EstimateVm) -> Markup {
    let r = vm.result;
    html! {
        @if vm.comps_unavailable {
            (notice(COMPS_UNAVAILABLE))
        }
        div class="result" {
            p class="eyebrow" { "Suggested rent" }
            p class="headline" { (money(r.suggested)) " / mo" }
            p { "Range: " (money(r.lower)) " – " (money(r.upper)) }
            p class="microcopy" { (r.source_note()) }

            @if r.has_verdict() {
                (verdict(r))
            }

            details {
                summary { "How we got here" }
                (stat_rows(&[
                    ("Property", vm.inputs.property_type.label().to_string()),
                    ("Bedrooms", vm.inputs.beds.to_string()),
                    ("Bathrooms", vm.inputs.baths.to_string()),
                    ("Condition factor", format!("{:.2}", r.condition_factor)),
                ]))
            }
        }
        div class="card" {
            h2 { "Want a second opinion?" }
            (lead_form("rent-estimate", Some("pricing")))
        }
    }
}

fn verdict(r: &EstimateResult) -> Markup {
    let class = match r.status {
        PricingStatus::Under => "verdict under",
        PricingStatus::Over => "verdict over",
        PricingStatus::Within => "verdict within",
    };
    html! {
        div class=(class) {
            p { strong { (r.status.label()) } }
            @if r.status != PricingStatus::Within {
                p { "Your rent is " (signed_money(r.delta)) " vs. our suggestion." }
            }
        }
    }
}
