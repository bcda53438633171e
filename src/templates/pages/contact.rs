// templates/pages/contact.rs

use crate::templates::components::lead_form;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn contact_page(reason: Option<&str>) -> Markup {
    desktop_layout(
        "Contact",
        html! {
            main class="container narrow" {
                h1 { "Talk to us" }
                p { "Questions about pricing, management or getting a unit ready? Send us a note." }
                (lead_form("contact-page", reason))
            }
        },
    )
}

/// Full page wrapper for non-htmx submissions.
pub fn contact_result_page(partial: Markup) -> Markup {
    desktop_layout(
        "Contact",
        html! {
            main class="container narrow" {
                h1 { "Talk to us" }
                div id="lead-form" { (partial) }
                p { a href="/" { "← Back to the tools" } }
            }
        },
    )
}
