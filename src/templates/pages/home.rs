// templates/pages/home.rs

use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

const BLURBS: &[(&str, &str, &str)] = &[
    (
        "/tools/rent-estimate",
        "Rent Estimate",
        "A suggested rent range for your property, with live comps when available.",
    ),
    (
        "/tools/vacancy-cost",
        "Vacancy Cost",
        "What an empty month really costs once your time and concessions are counted.",
    ),
    (
        "/tools/cap-rate",
        "Cap Rate",
        "Net operating income and cap rate before financing.",
    ),
    (
        "/tools/renovation-roi",
        "Renovation ROI",
        "How long an upgrade takes to pay for itself in higher rent.",
    ),
    (
        "/tools/readiness",
        "Move-in Readiness",
        "A turnover checklist with a score and time left.",
    ),
];

pub fn home_page() -> Markup {
    desktop_layout(
        "Home",
        html! {
            main class="container" {
                h1 { "Free tools for small landlords" }
                p class="lead" { "Price your rental, check the numbers, and get the unit ready." }

                div class="grid" {
                    @for (href, title, blurb) in BLURBS {
                        (card(title, html! {
                            p { (blurb) }
                            a href=(href) class="btn" { "Open" }
                        }))
                    }
                }
            }
        },
    )
}
