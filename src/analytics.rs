// src/analytics.rs

//! Aggregates for the admin dashboard.

use crate::db::Database;
use crate::db::leads::{lead_source_summary, list_leads, LeadRow, LeadSourceSummary};
use crate::db::usage::{list_usage, tool_usage_summary, ToolUsage, UsageRow};
use crate::errors::ServerError;

pub const RECENT_LIMIT: i64 = 25;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    pub events: i64,
    pub events_this_month: i64,
    pub emails_captured: i64,
    pub leads: i64,
    pub relay_failures: i64,
    /// Share of tool runs that left an email, percent.
    pub email_capture_rate: Option<f64>,
}

pub struct DashboardStats {
    pub totals: Totals,
    pub tools: Vec<ToolUsage>,
    pub lead_sources: Vec<LeadSourceSummary>,
    pub recent_usage: Vec<UsageRow>,
    pub recent_leads: Vec<LeadRow>,
}

pub fn totals(tools: &[ToolUsage], sources: &[LeadSourceSummary]) -> Totals {
    let events: i64 = tools.iter().map(|t| t.total).sum();
    let emails: i64 = tools.iter().map(|t| t.with_email).sum();

    Totals {
        events,
        events_this_month: tools.iter().map(|t| t.this_month).sum(),
        emails_captured: emails,
        leads: sources.iter().map(|s| s.total).sum(),
        relay_failures: sources.iter().map(|s| s.relay_failures).sum(),
        email_capture_rate: (events > 0).then(|| emails as f64 / events as f64 * 100.0),
    }
}

pub fn load_dashboard(db: &Database, now: i64) -> Result<DashboardStats, ServerError> {
    db.with_conn(|conn| {
        let tools = tool_usage_summary(conn, now)?;
        let lead_sources = lead_source_summary(conn)?;

        Ok(DashboardStats {
            totals: totals(&tools, &lead_sources),
            tools,
            lead_sources,
            recent_usage: list_usage(conn, Some(RECENT_LIMIT))?,
            recent_leads: list_leads(conn, Some(RECENT_LIMIT))?,
        })
    })
}
