use crate::forms::FormData;
use maud::{html, Markup};

/// Labeled numeric input that keeps whatever the user last typed.
pub fn number_field(form: &FormData, name: &str, label: &str, step: &str) -> Markup {
    html! {
        label for=(name) {
            (label)
            input type="number" id=(name) name=(name) min="0" step=(step)
                value=(form.get(name).unwrap_or_default());
        }
    }
}

pub fn checkbox(form: &FormData, name: &str, label: &str) -> Markup {
    let checked = crate::domain::normalize::flag(form.get(name));
    html! {
        label class="checkbox" {
            input type="checkbox" name=(name) checked[checked];
            " " (label)
        }
    }
}

/// htmx attributes shared by the calculator forms: re-run on every change.
pub struct LiveForm<'a> {
    pub action: &'a str,
    pub target: &'a str,
}

impl LiveForm<'_> {
    pub fn wrap(&self, fields: Markup) -> Markup {
        html! {
            form
                method="post"
                action=(self.action)
                hx-post=(self.action)
                hx-target=(format!("#{}", self.target))
                hx-swap="innerHTML"
                hx-trigger="input changed delay:300ms, submit"
                class="calculator"
            {
                (fields)
                button type="submit" class="primary" { "Calculate" }
            }
        }
    }
}
