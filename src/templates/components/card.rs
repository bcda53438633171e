use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Non-fatal message shown above a result.
pub fn notice(message: &str) -> Markup {
    html! {
        p class="notice" role="status" { (message) }
    }
}

/// Label/value rows for a result breakdown.
pub fn stat_rows(rows: &[(&str, String)]) -> Markup {
    html! {
        dl class="stats" {
            @for (label, value) in rows {
                dt { (label) }
                dd { (value) }
            }
        }
    }
}
