use crate::domain::lead::{DEFAULT_REASON, REASONS};
use maud::{html, Markup};

pub const RELAY_FAILED: &str = "Something went wrong sending your message. Please try again.";

/// Contact form. `source` records which page the lead came from.
pub fn lead_form(source: &str, reason: Option<&str>) -> Markup {
    let selected = reason.unwrap_or(DEFAULT_REASON);
    html! {
        div id="lead-form" {
            form
                method="post"
                action="/contact"
                hx-post="/contact"
                hx-target="#lead-form"
                hx-swap="innerHTML"
                class="lead-form"
            {
                input type="hidden" name="source" value=(source);
                label for="lead-name" {
                    "Name"
                    input type="text" id="lead-name" name="name" required autocomplete="name";
                }
                label for="lead-email" {
                    "Email"
                    input type="email" id="lead-email" name="email" required autocomplete="email";
                }
                label for="lead-phone" {
                    "Phone (optional)"
                    input type="tel" id="lead-phone" name="phone" autocomplete="tel";
                }
                label for="lead-reason" {
                    "What can we help with?"
                    select id="lead-reason" name="reason" {
                        @for (value, label) in REASONS {
                            option value=(value) selected[*value == selected] { (label) }
                        }
                    }
                }
                label for="lead-message" {
                    "Message"
                    textarea id="lead-message" name="message" rows="4" {}
                }
                button type="submit" class="primary" { "Send" }
            }
        }
    }
}

/// Partial swapped into `#lead-form` after a submission.
pub fn lead_result(sent: bool) -> Markup {
    html! {
        @if sent {
            div class="alert success" role="status" {
                p { "Thanks! We got your message and will be in touch shortly." }
            }
        } @else {
            div class="alert error" role="alert" {
                p { (RELAY_FAILED) }
            }
        }
    }
}

/// 400 partial for a submission we can't accept.
pub fn lead_invalid(message: &str) -> Markup {
    html! {
        div class="alert error" role="alert" {
            p { "Please check the form: " (message) "." }
        }
    }
}
