use maud::{html, Markup, DOCTYPE};

pub const TOOLS: &[(&str, &str)] = &[
    ("/tools/rent-estimate", "Rent Estimate"),
    ("/tools/vacancy-cost", "Vacancy Cost"),
    ("/tools/cap-rate", "Cap Rate"),
    ("/tools/renovation-roi", "Renovation ROI"),
    ("/tools/readiness", "Move-in Readiness"),
];

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Rent Tools" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {}
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    a href="/" class="brand" { "Rent Tools" }
                    nav {
                        ul {
                            @for (href, label) in TOOLS {
                                li { a href=(href) { (label) } }
                            }
                        }
                    }
                    a href="/contact" class="text-base font-medium hover:text-blue-600" { "Talk to us" }
                }
                (content)
                footer class="container microcopy" {
                    "Estimates are for guidance only and are not an appraisal."
                }
            }
        }
    }
}
