use crate::analytics::DashboardStats;
use crate::clock::format_timestamp;
use crate::templates::components::stat_rows;
use crate::templates::desktop_layout;
use crate::templates::format::percent;
use maud::{html, Markup};

const TH: &str = "padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;";
const TD: &str = "padding: 8px; border-bottom: 1px solid #f3f4f6;";

pub fn admin_page(stats: &DashboardStats) -> Markup {
    let t = &stats.totals;

    desktop_layout(
        "Admin Dashboard",
        html! {
            main class="container" {
                div style="display: flex; justify-content: space-between; align-items: center;" {
                    h1 { "Admin Dashboard" }
                    a href="/admin/export.xlsx" class="btn" { "Export .xlsx" }
                }

                div class="card" style="margin-bottom: 2rem;" {
                    h3 { "Totals" }
                    (stat_rows(&[
                        ("Tool runs", t.events.to_string()),
                        ("Tool runs this month", t.events_this_month.to_string()),
                        ("Emails captured", t.emails_captured.to_string()),
                        ("Email capture rate", t.email_capture_rate.map(percent).unwrap_or_else(|| "n/a".into())),
                        ("Leads", t.leads.to_string()),
                        ("Relay failures", t.relay_failures.to_string()),
                    ]))
                }

                div class="card" style="margin-bottom: 2rem;" {
                    h3 { "Usage by tool" }
                    div style="overflow-x: auto;" {
                        table style="width: 100%; border-collapse: collapse; margin-top: 1rem;" {
                            thead {
                                tr {
                                    th style=(TH) { "Tool" }
                                    th style=(TH) { "All time" }
                                    th style=(TH) { "This month" }
                                    th style=(TH) { "With email" }
                                }
                            }
                            tbody {
                                @for tool in &stats.tools {
                                    tr {
                                        td style=(TD) { (tool.tool) }
                                        td style=(TD) { (tool.total) }
                                        td style=(TD) { (tool.this_month) }
                                        td style=(TD) { (tool.with_email) }
                                    }
                                }
                            }
                        }
                    }
                }

                div class="card" style="margin-bottom: 2rem;" {
                    h3 { "Leads by source" }
                    table style="width: 100%; border-collapse: collapse; margin-top: 1rem;" {
                        thead {
                            tr {
                                th style=(TH) { "Source" }
                                th style=(TH) { "Leads" }
                                th style=(TH) { "Relay failures" }
                            }
                        }
                        tbody {
                            @for source in &stats.lead_sources {
                                tr {
                                    td style=(TD) { (source.source) }
                                    td style=(TD) { (source.total) }
                                    td style=(TD) {
                                        @if source.relay_failures > 0 {
                                            span style="color: #dc2626;" { (source.relay_failures) }
                                        } @else {
                                            "0"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div class="card" style="margin-bottom: 2rem;" {
                    h3 { "Recent tool runs" }
                    div style="overflow-x: auto;" {
                        table style="width: 100%; border-collapse: collapse; font-size: 0.9em;" {
                            thead {
                                tr {
                                    th style=(TH) { "When" }
                                    th style=(TH) { "Tool" }
                                    th style=(TH) { "Email" }
                                    th style=(TH) { "Results" }
                                }
                            }
                            tbody {
                                @for row in &stats.recent_usage {
                                    tr {
                                        td style=(TD) { (format_timestamp(row.created_at)) }
                                        td style=(TD) { (row.tool) }
                                        td style=(TD) { (row.email.as_deref().unwrap_or("—")) }
                                        td style=(TD) { code { (row.results_json) } }
                                    }
                                }
                            }
                        }
                    }
                }

                div class="card" {
                    h3 { "Recent leads" }
                    div style="overflow-x: auto;" {
                        table style="width: 100%; border-collapse: collapse; font-size: 0.9em;" {
                            thead {
                                tr {
                                    th style=(TH) { "When" }
                                    th style=(TH) { "Name" }
                                    th style=(TH) { "Email" }
                                    th style=(TH) { "Reason" }
                                    th style=(TH) { "Source" }
                                    th style=(TH) { "Relayed" }
                                }
                            }
                            tbody {
                                @for lead in &stats.recent_leads {
                                    tr {
                                        td style=(TD) { (format_timestamp(lead.created_at)) }
                                        td style=(TD) { (lead.name) }
                                        td style=(TD) { (lead.email) }
                                        td style=(TD) { (lead.reason) }
                                        td style=(TD) { (lead.source) }
                                        td style=(TD) {
                                            @if lead.relayed {
                                                span style="color: green;" { "Yes" }
                                            } @else {
                                                span style="color: red;" { "No" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
